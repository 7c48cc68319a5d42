use iced::Application;

fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    env_logger::init();
    nutriai::client::gui::app::NutriApp::run(iced::Settings::default())
}
