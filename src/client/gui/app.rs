use crate::client::config::ClientConfig;
use crate::client::models::app_state::NutriAppState;
use crate::client::models::messages::Message;
use crate::client::services::analysis_service::AnalysisService;
use iced::{Application, Command, Element, Theme};
use std::sync::Arc;

pub struct NutriApp {
    pub state: NutriAppState,
    pub analysis_service: Arc<AnalysisService>,
}

impl Application for NutriApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        // Base URL is resolved once at startup; the service is shared with
        // the async commands performing the requests.
        let config = ClientConfig::from_env();
        let app = NutriApp {
            state: NutriAppState::default(),
            analysis_service: Arc::new(AnalysisService::new(&config)),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "NutriAI".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::None => Command::none(),
            Message::DescriptionChanged(text) => {
                self.state.description = text;
                Command::none()
            }
            Message::PortionChanged(text) => {
                self.state.portion_input = text;
                Command::none()
            }
            Message::Submit => {
                // The button is disabled while loading or with an empty
                // description, but on_submit from the text inputs lands here
                // too, so the guard is repeated.
                if !self.state.can_submit() {
                    return Command::none();
                }
                let request = self.state.analyze_request();
                self.state.begin_submit();
                let service = self.analysis_service.clone();
                Command::perform(
                    async move { service.analyze(&request).await.map_err(|e| e.to_string()) },
                    Message::AnalysisCompleted,
                )
            }
            Message::AnalysisCompleted(outcome) => {
                self.state.finish_submit(outcome);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        crate::client::gui::views::analysis::view(&self.state)
    }
}
