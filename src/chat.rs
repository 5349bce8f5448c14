//! Chat transcript and turn handling.
//!
//! The session alternates between two phases, derived from the transcript:
//! the last message is from the assistant ([`Phase::AwaitingUser`]) or from the
//! user ([`Phase::AwaitingAssistant`]). A turn is
//! [`submit`](ChatSession::submit) → [`start_reply`](ChatSession::start_reply)
//! → pull fragments from the [`PendingReply`] → [`commit`](ChatSession::commit).
//! [`respond`](ChatSession::respond) runs the last three steps in one call.
//!
//! If the engine fails, nothing is appended and the session keeps waiting for
//! the assistant, so the same question can be answered again.

use crate::error::{ChatError, CopilotError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// First assistant message of every session.
pub const GREETING: &str = "I am Macroeconomics Copilot, your personal assistant. You can ask me everything about regional macroeconomic outlook around the world.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Lazily produced answer text, one fragment at a time.
pub type FragmentStream = Box<dyn Iterator<Item = Result<String, CopilotError>>>;

/// What the engine answered with.
pub enum Answer {
    Complete(String),
    Streaming(FragmentStream),
}

impl fmt::Debug for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Complete(text) => f.debug_tuple("Complete").field(text).finish(),
            Answer::Streaming(_) => f.write_str("Streaming(..)"),
        }
    }
}

/// Result of one engine call: the retrieved context and the answer.
#[derive(Debug)]
pub struct Reply {
    pub retrieved: Vec<String>,
    pub answer: Answer,
}

/// The chat engine.
pub trait Copilot {
    /// Answer `prompt` given the conversation that preceded it.
    fn ask(&self, prompt: &str, history: &[ChatMessage]) -> Result<Reply, CopilotError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingUser,
    AwaitingAssistant,
}

/// An answer being received.
pub struct PendingReply {
    retrieved: Vec<String>,
    unsent: Option<String>,
    stream: Option<FragmentStream>,
    text: String,
}

impl PendingReply {
    fn new(reply: Reply) -> Self {
        let (unsent, stream) = match reply.answer {
            Answer::Complete(text) => (Some(text), None),
            Answer::Streaming(stream) => (None, Some(stream)),
        };
        Self {
            retrieved: reply.retrieved,
            unsent,
            stream,
            text: String::new(),
        }
    }

    /// Pull the next non-empty fragment; `Ok(None)` once the answer is complete.
    /// A complete answer arrives as a single fragment.
    pub fn next_fragment(&mut self) -> Result<Option<String>, CopilotError> {
        if let Some(text) = self.unsent.take() {
            self.text.push_str(&text);
            return Ok(Some(text));
        }
        let Some(stream) = self.stream.as_mut() else {
            return Ok(None);
        };
        for item in stream.by_ref() {
            let fragment = item?;
            if !fragment.is_empty() {
                self.text.push_str(&fragment);
                return Ok(Some(fragment));
            }
        }
        self.stream = None;
        Ok(None)
    }

    /// Text received so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_finished(&self) -> bool {
        self.unsent.is_none() && self.stream.is_none()
    }

    pub fn retrieved(&self) -> &[String] {
        &self.retrieved
    }
}

impl fmt::Debug for PendingReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingReply")
            .field("text", &self.text)
            .field("finished", &self.is_finished())
            .finish()
    }
}

/// Ordered, append-only transcript of one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// A session opened with the assistant greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn phase(&self) -> Phase {
        match self.messages.last() {
            Some(m) if m.role == Role::User => Phase::AwaitingAssistant,
            _ => Phase::AwaitingUser,
        }
    }

    /// The user message awaiting an answer, if any.
    pub fn pending_prompt(&self) -> Option<&str> {
        match self.phase() {
            Phase::AwaitingAssistant => self.messages.last().map(|m| m.content.as_str()),
            Phase::AwaitingUser => None,
        }
    }

    /// Append a user message.
    pub fn submit(&mut self, text: &str) -> Result<(), ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if self.phase() == Phase::AwaitingAssistant {
            return Err(ChatError::ReplyPending);
        }
        self.messages.push(ChatMessage::user(text));
        Ok(())
    }

    /// Ask the engine about the pending prompt, passing the transcript before it.
    pub fn start_reply(&self, copilot: &dyn Copilot) -> Result<PendingReply, ChatError> {
        let prompt = self.pending_prompt().ok_or(ChatError::NothingToAnswer)?;
        let history = &self.messages[..self.messages.len() - 1];
        let reply = copilot.ask(prompt, history)?;
        log::debug!(
            "copilot replied ({} retrieved passages, {:?})",
            reply.retrieved.len(),
            reply.answer
        );
        Ok(PendingReply::new(reply))
    }

    /// Append the finished reply as the assistant message, draining any
    /// fragments that were not pulled yet.
    pub fn commit(&mut self, mut reply: PendingReply) -> Result<&ChatMessage, ChatError> {
        if self.phase() != Phase::AwaitingAssistant {
            return Err(ChatError::NothingToAnswer);
        }
        while reply.next_fragment()?.is_some() {}
        self.messages.push(ChatMessage::assistant(reply.text));
        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Run a whole turn, handing each fragment to `on_fragment` as it arrives.
    pub fn respond(
        &mut self,
        copilot: &dyn Copilot,
        mut on_fragment: impl FnMut(&str),
    ) -> Result<&ChatMessage, ChatError> {
        let mut pending = self.start_reply(copilot)?;
        while let Some(fragment) = pending.next_fragment()? {
            on_fragment(&fragment);
        }
        self.commit(pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Answers from a script and records what it was asked.
    struct Scripted {
        streaming: bool,
        fail: bool,
        seen: RefCell<Vec<(String, usize)>>,
    }

    impl Scripted {
        fn new(streaming: bool) -> Self {
            Self {
                streaming,
                fail: false,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Copilot for Scripted {
        fn ask(&self, prompt: &str, history: &[ChatMessage]) -> Result<Reply, CopilotError> {
            self.seen
                .borrow_mut()
                .push((prompt.to_string(), history.len()));
            if self.fail {
                return Err(CopilotError::Transport("offline".into()));
            }
            let answer = if self.streaming {
                let parts = vec!["Inflation ", "", "is ", "rising prices."];
                Answer::Streaming(Box::new(
                    parts.into_iter().map(|p| Ok::<_, CopilotError>(p.to_string())),
                ))
            } else {
                Answer::Complete(format!("Answer to: {prompt}"))
            };
            Ok(Reply {
                retrieved: vec!["context".into()],
                answer,
            })
        }
    }

    #[test]
    fn new_session_starts_with_greeting() {
        let s = ChatSession::new();
        assert_eq!(s.messages(), [ChatMessage::assistant(GREETING)]);
        assert_eq!(s.phase(), Phase::AwaitingUser);
    }

    #[test]
    fn submit_appends_one_user_message() {
        let mut s = ChatSession::new();
        s.submit("What is inflation?").unwrap();
        assert_eq!(s.messages().len(), 2);
        assert_eq!(s.messages()[1], ChatMessage::user("What is inflation?"));
        assert_eq!(s.phase(), Phase::AwaitingAssistant);
        assert_eq!(s.pending_prompt(), Some("What is inflation?"));
    }

    #[test]
    fn rejects_empty_and_overlapping_submissions() {
        let mut s = ChatSession::new();
        assert!(matches!(s.submit("   "), Err(ChatError::EmptyMessage)));
        s.submit("first").unwrap();
        assert!(matches!(s.submit("second"), Err(ChatError::ReplyPending)));
        assert_eq!(s.messages().len(), 2);
    }

    #[test]
    fn streaming_reply_is_rendered_progressively_then_appended_once() {
        let copilot = Scripted::new(true);
        let mut s = ChatSession::new();
        s.submit("What is inflation?").unwrap();
        let mut shown = Vec::new();
        let msg = s
            .respond(&copilot, |f| shown.push(f.to_string()))
            .unwrap()
            .clone();
        assert_eq!(shown, ["Inflation ", "is ", "rising prices."]);
        assert_eq!(msg, ChatMessage::assistant("Inflation is rising prices."));
        assert_eq!(s.messages().len(), 3);
        assert_eq!(s.phase(), Phase::AwaitingUser);
        // prompt plus the greeting as prior transcript
        assert_eq!(copilot.seen.borrow()[0], ("What is inflation?".to_string(), 1));
    }

    #[test]
    fn multiple_turns_keep_order_without_duplicates() {
        let copilot = Scripted::new(false);
        let mut s = ChatSession::new();
        for q in ["one", "two", "three"] {
            s.submit(q).unwrap();
            s.respond(&copilot, |_| {}).unwrap();
        }
        let roles: Vec<Role> = s.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            [
                Role::Assistant,
                Role::User,
                Role::Assistant,
                Role::User,
                Role::Assistant,
                Role::User,
                Role::Assistant
            ]
        );
        assert_eq!(s.messages()[6].content, "Answer to: three");
        let seen = copilot.seen.borrow();
        assert_eq!(seen.iter().map(|(_, n)| *n).collect::<Vec<_>>(), [1, 3, 5]);
    }

    #[test]
    fn failed_reply_appends_nothing_and_can_be_retried() {
        let mut copilot = Scripted::new(false);
        copilot.fail = true;
        let mut s = ChatSession::new();
        s.submit("hello").unwrap();
        assert!(matches!(
            s.respond(&copilot, |_| {}),
            Err(ChatError::Copilot(_))
        ));
        assert_eq!(s.messages().len(), 2);
        assert_eq!(s.phase(), Phase::AwaitingAssistant);

        copilot.fail = false;
        s.respond(&copilot, |_| {}).unwrap();
        assert_eq!(s.messages().len(), 3);
    }

    #[test]
    fn pending_reply_can_be_pulled_one_fragment_at_a_time() {
        let copilot = Scripted::new(true);
        let mut s = ChatSession::new();
        s.submit("q").unwrap();
        let mut pending = s.start_reply(&copilot).unwrap();
        assert_eq!(pending.retrieved(), ["context".to_string()]);
        assert_eq!(pending.next_fragment().unwrap().as_deref(), Some("Inflation "));
        assert_eq!(pending.text(), "Inflation ");
        assert!(!pending.is_finished());
        // commit drains the rest
        let msg = s.commit(pending).unwrap();
        assert_eq!(msg.content, "Inflation is rising prices.");
    }

    #[test]
    fn nothing_to_answer_without_user_message() {
        let copilot = Scripted::new(false);
        let s = ChatSession::new();
        assert!(matches!(
            s.start_reply(&copilot),
            Err(ChatError::NothingToAnswer)
        ));
        assert!(copilot.seen.borrow().is_empty());
    }
}
