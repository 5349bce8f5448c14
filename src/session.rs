//! Per-session state shared by the GUI and the CLI.
//!
//! A [`Session`] is created once at start-up and borrowed mutably by whatever
//! draws the dashboard. It owns the chat transcript, the memoized data
//! fetchers and the lazily built chat engine.

use crate::chat::{ChatMessage, ChatSession, PendingReply};
use crate::config::Settings;
use crate::copilot::OpenAiCopilot;
use crate::error::{ChatError, CopilotError, FetchError};
use crate::fetch::DataService;
use crate::http::{HttpSource, JsonSource};

/// Holds at most one engine, built for a specific API key.
///
/// Asking again with the same key returns the existing engine; a different
/// key replaces it.
#[derive(Debug)]
pub struct EngineSlot<E> {
    key: Option<String>,
    engine: Option<E>,
    builds: usize,
}

impl<E> Default for EngineSlot<E> {
    fn default() -> Self {
        Self {
            key: None,
            engine: None,
            builds: 0,
        }
    }
}

impl<E> EngineSlot<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build<Err>(
        &mut self,
        key: &str,
        build: impl FnOnce(&str) -> Result<E, Err>,
    ) -> Result<&E, Err> {
        let engine = match self.engine.take() {
            Some(engine) if self.key.as_deref() == Some(key) => engine,
            _ => {
                log::info!("building chat engine");
                self.key = None;
                let engine = build(key)?;
                self.builds += 1;
                self.key = Some(key.to_string());
                engine
            }
        };
        Ok(self.engine.insert(engine))
    }

    pub fn get(&self) -> Option<&E> {
        self.engine.as_ref()
    }

    /// How many times an engine has been constructed.
    pub fn builds(&self) -> usize {
        self.builds
    }

    pub fn clear(&mut self) {
        self.key = None;
        self.engine = None;
    }
}

#[derive(Debug)]
pub struct Session<W = HttpSource, R = HttpSource> {
    settings: Settings,
    pub chat: ChatSession,
    pub data: DataService<W, R>,
    engine: EngineSlot<OpenAiCopilot>,
}

impl Session {
    /// Session talking to the endpoints named in `settings`.
    pub fn new(settings: Settings) -> Result<Self, FetchError> {
        let data = DataService::from_settings(&settings)?;
        Ok(Self::with_data(settings, data))
    }
}

impl<W: JsonSource, R: JsonSource> Session<W, R> {
    pub fn with_data(settings: Settings, data: DataService<W, R>) -> Self {
        Self {
            settings,
            chat: ChatSession::new(),
            data,
            engine: EngineSlot::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Chat needs a credential; the data views do not.
    pub fn chat_enabled(&self) -> bool {
        self.settings.has_api_key()
    }

    /// Replace the credential. A different key rebuilds the engine on next use.
    pub fn set_api_key(&mut self, key: Option<String>) {
        self.settings = std::mem::take(&mut self.settings).with_api_key(key);
        if !self.settings.has_api_key() {
            self.engine.clear();
        }
    }

    pub fn engine_builds(&self) -> usize {
        self.engine.builds()
    }

    /// Ask the engine about the pending user message.
    pub fn start_reply(&mut self) -> Result<PendingReply, ChatError> {
        let key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(CopilotError::MissingApiKey)?;
        let settings = &self.settings;
        let engine = self
            .engine
            .get_or_build(key, |k| OpenAiCopilot::new(k, settings))?;
        self.chat.start_reply(engine)
    }

    pub fn commit(&mut self, reply: PendingReply) -> Result<&ChatMessage, ChatError> {
        self.chat.commit(reply)
    }

    /// Submit `text` and answer it in one blocking call.
    pub fn ask(&mut self, text: &str, on_fragment: impl FnMut(&str)) -> Result<&ChatMessage, ChatError> {
        self.chat.submit(text)?;
        self.respond(on_fragment)
    }

    /// Answer the pending user message, streaming fragments into `on_fragment`.
    pub fn respond(&mut self, mut on_fragment: impl FnMut(&str)) -> Result<&ChatMessage, ChatError> {
        let mut reply = self.start_reply()?;
        while let Some(fragment) = reply.next_fragment()? {
            on_fragment(&fragment);
        }
        self.chat.commit(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api;
    use crate::chat::Phase;
    use crate::rates::RatesClient;
    use serde_json::Value;

    struct Offline;

    impl JsonSource for Offline {
        fn get_json(&self, _url: &str, _query: &[(&str, String)]) -> Result<Value, FetchError> {
            Err(FetchError::Transport("offline".into()))
        }
    }

    fn offline_session(settings: Settings) -> Session<Offline, Offline> {
        let data = DataService::new(
            api::Client::with_source("http://wb.test", Offline),
            RatesClient::with_source("http://fx.test", Offline),
        );
        Session::with_data(settings, data)
    }

    #[test]
    fn engine_is_built_once_per_key() {
        let mut slot: EngineSlot<String> = EngineSlot::new();
        let mut calls = 0;
        let mut build = |k: &str| {
            calls += 1;
            Ok::<_, ()>(format!("engine-{k}"))
        };
        assert_eq!(slot.get_or_build("a", &mut build).unwrap(), "engine-a");
        assert_eq!(slot.get_or_build("a", &mut build).unwrap(), "engine-a");
        assert_eq!(slot.get_or_build("b", &mut build).unwrap(), "engine-b");
        assert_eq!(slot.builds(), 2);
        drop(build);
        assert_eq!(calls, 2);
    }

    #[test]
    fn failed_build_leaves_slot_empty() {
        let mut slot: EngineSlot<String> = EngineSlot::new();
        assert!(slot.get_or_build("a", |_| Err::<String, _>("boom")).is_err());
        assert!(slot.get().is_none());
        assert_eq!(slot.builds(), 0);
    }

    #[test]
    fn chat_without_key_is_disabled_but_recoverable() {
        let mut s = offline_session(Settings::default());
        assert!(!s.chat_enabled());
        s.chat.submit("What is GDP?").unwrap();
        assert!(matches!(
            s.start_reply(),
            Err(ChatError::Copilot(CopilotError::MissingApiKey))
        ));
        assert_eq!(s.chat.phase(), Phase::AwaitingAssistant);
        assert_eq!(s.engine_builds(), 0);
    }

    #[test]
    fn data_views_work_without_key() {
        let mut s = offline_session(Settings::default());
        let fetched = s.data.exchange_rates("USD");
        assert!(fetched.is_empty());
        assert_eq!(
            fetched.notice.unwrap().message,
            "Failed to fetch exchange rates."
        );
    }

    #[test]
    fn setting_a_key_enables_chat() {
        let mut s = offline_session(Settings::default());
        s.set_api_key(Some(" sk-test ".into()));
        assert!(s.chat_enabled());
        assert_eq!(s.settings().api_key.as_deref(), Some("sk-test"));
        s.set_api_key(None);
        assert!(!s.chat_enabled());
    }
}
