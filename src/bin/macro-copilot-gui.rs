/*!
 * Desktop dashboard for macro-copilot
 *
 * Two tabs:
 * - Chatbot: talk to the macroeconomics copilot (needs an API key)
 * - Economic Data Visualization: World Bank indicators as a time series or
 *   a world map, and current exchange rates
 *
 * Everything runs on the UI thread. A streamed answer is pulled one fragment
 * per frame, so the text grows while the window stays responsive.
 */

use anyhow::{Result, anyhow};
use eframe::egui;
use macro_copilot::chat::{PendingReply, Role};
use macro_copilot::dashboard::{
    self, EXCHANGE_RATES, Selections, View, ViewContent, ViewRequest, VizKind, YEAR_MAX, YEAR_MIN,
};
use macro_copilot::{Level, Notice, Phase, Session, Settings, viz};

const CHART_SIZE: (u32, u32) = (1000, 600);
const TITLE: &str = "Ask Me Anything about Macroeconomics & Regional Economic Outlook!";

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::from_env();
    let font_error = viz::ensure_fonts_registered(settings.font_path.as_deref())
        .err()
        .map(|e| e.to_string());
    let session = Session::new(settings)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("Macroeconomics Copilot"),
        ..Default::default()
    };

    eframe::run_native(
        "Macroeconomics Copilot",
        options,
        Box::new(|_cc| Ok(Box::new(CopilotApp::new(session, font_error)))),
    )
    .map_err(|e| anyhow!("{e}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Chat,
    Data,
}

struct CopilotApp {
    session: Session,
    tab: Tab,

    // Chat
    api_key_input: String,
    chat_input: String,
    pending: Option<PendingReply>,
    chat_error: String,

    // Visualization
    selections: Selections,
    shown_request: Option<ViewRequest>,
    view: Option<View>,
    chart: Option<egui::TextureHandle>,
    chart_error: String,
    font_error: Option<String>,
}

impl CopilotApp {
    fn new(session: Session, font_error: Option<String>) -> Self {
        Self {
            session,
            tab: Tab::Chat,
            api_key_input: String::new(),
            chat_input: String::new(),
            pending: None,
            chat_error: String::new(),
            selections: Selections::default(),
            shown_request: None,
            view: None,
            chart: None,
            chart_error: String::new(),
            font_error,
        }
    }

    /// Advance the chat by at most one step: start a reply, or pull one fragment.
    fn step_chat(&mut self, ctx: &egui::Context) {
        if let Some(pending) = self.pending.as_mut() {
            match pending.next_fragment() {
                Ok(Some(_)) => ctx.request_repaint(),
                Ok(None) => {
                    if let Some(reply) = self.pending.take()
                        && let Err(e) = self.session.commit(reply)
                    {
                        self.chat_error = e.to_string();
                    }
                }
                Err(e) => {
                    log::warn!("chat stream failed: {e}");
                    self.chat_error = e.to_string();
                    self.pending = None;
                }
            }
            return;
        }

        if self.session.chat.phase() == Phase::AwaitingAssistant
            && self.chat_error.is_empty()
            && self.session.chat_enabled()
        {
            match self.session.start_reply() {
                Ok(reply) => {
                    self.pending = Some(reply);
                    ctx.request_repaint();
                }
                Err(e) => {
                    log::warn!("chat request failed: {e}");
                    self.chat_error = e.to_string();
                }
            }
        }
    }

    fn chat_tab(&mut self, ui: &mut egui::Ui) {
        if !self.session.chat_enabled() {
            ui.horizontal(|ui| {
                ui.label("Please enter your OpenAI API Key:");
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.api_key_input)
                        .password(true)
                        .desired_width(320.0),
                );
                let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if (submitted || ui.button("Save").clicked()) && !self.api_key_input.trim().is_empty() {
                    self.session
                        .set_api_key(Some(std::mem::take(&mut self.api_key_input)));
                }
            });
            ui.colored_label(
                egui::Color32::from_rgb(30, 90, 160),
                "Please add your OpenAI API key to continue.",
            );
            ui.add_space(8.0);
        }

        let input_height = 64.0;
        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .max_height((ui.available_height() - input_height).max(120.0))
            .show(ui, |ui| {
                for message in self.session.chat.messages() {
                    message_bubble(ui, message.role, &message.content);
                }
                if let Some(pending) = &self.pending {
                    message_bubble(ui, Role::Assistant, pending.text());
                    ui.spinner();
                }
            });

        if !self.chat_error.is_empty() {
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::RED, &self.chat_error);
                if self.session.chat.phase() == Phase::AwaitingAssistant && ui.button("Retry").clicked() {
                    self.chat_error.clear();
                }
            });
        }

        let can_send = self.session.chat_enabled()
            && self.pending.is_none()
            && self.session.chat.phase() == Phase::AwaitingUser;
        ui.horizontal(|ui| {
            let resp = ui.add_enabled(
                can_send,
                egui::TextEdit::singleline(&mut self.chat_input)
                    .hint_text("Your question")
                    .desired_width(ui.available_width() - 80.0),
            );
            let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked = ui.add_enabled(can_send, egui::Button::new("Send")).clicked();
            if (submitted || clicked) && !self.chat_input.trim().is_empty() {
                match self.session.chat.submit(&self.chat_input) {
                    Ok(()) => {
                        self.chat_input.clear();
                        self.chat_error.clear();
                    }
                    Err(e) => self.chat_error = e.to_string(),
                }
            }
        });
    }

    fn data_tab(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.heading("Economic Data Visualization");
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label("Select Economic Variable:");
            egui::ComboBox::from_id_salt("variable")
                .selected_text(&self.selections.variable)
                .show_ui(ui, |ui| {
                    for v in dashboard::variables() {
                        ui.selectable_value(&mut self.selections.variable, v.to_string(), v);
                    }
                });
        });

        let mut country_notice: Option<Notice> = None;
        if self.selections.variable != EXCHANGE_RATES {
            ui.horizontal(|ui| {
                ui.label("Select Visualization Type:");
                for kind in VizKind::ALL {
                    ui.radio_value(&mut self.selections.kind, kind, kind.label());
                }
            });

            match self.selections.kind {
                VizKind::TimeSeries => {
                    let countries = self.session.data.country_list();
                    country_notice = countries.notice.clone();
                    if self.selections.country.is_empty()
                        && let Some(first) = countries.rows.first()
                    {
                        self.selections.country = first.clone();
                    }
                    ui.horizontal(|ui| {
                        ui.label("Select Country:");
                        egui::ComboBox::from_id_salt("country")
                            .selected_text(&self.selections.country)
                            .height(400.0)
                            .show_ui(ui, |ui| {
                                for name in &countries.rows {
                                    ui.selectable_value(&mut self.selections.country, name.clone(), name);
                                }
                            });
                    });
                    ui.horizontal(|ui| {
                        ui.label("Select Time Period:");
                        ui.add(egui::Slider::new(&mut self.selections.years.0, YEAR_MIN..=YEAR_MAX).text("from"));
                        ui.add(egui::Slider::new(&mut self.selections.years.1, YEAR_MIN..=YEAR_MAX).text("to"));
                    });
                }
                VizKind::Geographic => {
                    ui.horizontal(|ui| {
                        ui.label("Select Year:");
                        ui.add(egui::Slider::new(&mut self.selections.geo_year, YEAR_MIN..=YEAR_MAX));
                    });
                }
            }
        }

        self.refresh_view(ctx);

        if let Some(notice) = country_notice {
            notice_label(ui, &notice);
        }
        let Some(view) = &self.view else {
            return;
        };
        if let Some(heading) = &view.heading {
            ui.heading(heading);
        }
        for notice in &view.notices {
            notice_label(ui, notice);
        }
        match &view.content {
            ViewContent::Warning(message) => {
                ui.colored_label(egui::Color32::from_rgb(200, 130, 0), message);
            }
            ViewContent::Chart(_) => {
                if let Some(caption) = &view.caption {
                    ui.label(caption);
                }
            }
        }
        // shown with the warning too, so an empty selection can be undone
        if !view.currency_options.is_empty() {
            let selected = self
                .selections
                .currencies
                .get_or_insert_with(|| dashboard::default_currencies(&view.currency_options));
            ui.label("Select Currencies to Display:");
            ui.horizontal_wrapped(|ui| {
                for code in &view.currency_options {
                    let mut on = selected.contains(code);
                    if ui.checkbox(&mut on, code).changed() {
                        if on {
                            selected.push(code.clone());
                        } else {
                            selected.retain(|c| c != code);
                        }
                    }
                }
            });
        }
        if view.chart().is_none() {
            return;
        }
        if let Some(texture) = &self.chart {
            ui.add(egui::Image::new(texture).max_width(ui.available_width()).maintain_aspect_ratio(true));
        }
        if let Some(e) = &self.font_error {
            ui.colored_label(egui::Color32::RED, e);
        } else if !self.chart_error.is_empty() {
            ui.colored_label(egui::Color32::RED, &self.chart_error);
        }
    }

    /// Rebuild the view (and its chart texture) when the selections changed.
    fn refresh_view(&mut self, ctx: &egui::Context) {
        let request = self.selections.request();
        if self.shown_request.as_ref() == Some(&request) {
            return;
        }
        let view = dashboard::build_view(&mut self.session.data, &request);
        self.chart = None;
        self.chart_error.clear();
        if let Some(chart) = view.chart()
            && self.font_error.is_none()
        {
            match viz::render_to_rgb(chart, CHART_SIZE.0, CHART_SIZE.1) {
                Ok(rgb) => {
                    let image = egui::ColorImage::from_rgb(
                        [CHART_SIZE.0 as usize, CHART_SIZE.1 as usize],
                        &rgb,
                    );
                    self.chart = Some(ctx.load_texture("chart", image, egui::TextureOptions::LINEAR));
                }
                Err(e) => {
                    log::warn!("render failed: {e:#}");
                    self.chart_error = e.to_string();
                }
            }
        }
        self.view = Some(view);
        self.shown_request = Some(request);
    }
}

fn message_bubble(ui: &mut egui::Ui, role: Role, content: &str) {
    let (who, fill) = match role {
        Role::User => ("You", egui::Color32::from_rgb(232, 240, 254)),
        Role::Assistant => ("Copilot", egui::Color32::from_rgb(245, 245, 245)),
    };
    egui::Frame::none()
        .fill(fill)
        .rounding(6.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(who).strong());
            ui.label(content);
        });
    ui.add_space(4.0);
}

fn notice_label(ui: &mut egui::Ui, notice: &Notice) {
    let color = match notice.level {
        Level::Error => egui::Color32::RED,
        Level::Warning => egui::Color32::from_rgb(200, 130, 0),
    };
    ui.colored_label(color, &notice.message);
}

impl eframe::App for CopilotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.step_chat(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(TITLE);
            ui.hyperlink_to(
                "To use the chatbot, you need an OpenAI API key, which you can get here.",
                "https://platform.openai.com/account/api-keys",
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::Chat, "Chatbot");
                ui.selectable_value(&mut self.tab, Tab::Data, "Economic Data Visualization");
            });
            ui.separator();

            match self.tab {
                Tab::Chat => self.chat_tab(ui),
                Tab::Data => {
                    egui::ScrollArea::vertical().show(ui, |ui| self.data_tab(ui, ctx));
                }
            }
        });
    }
}
