// Error alert widget for the GUI
use crate::client::models::messages::Message;
use iced::{widget::text, Color, Element};

const ERROR_COLOR: Color = Color::from_rgb(0.86, 0.08, 0.24);

pub fn view(msg: &str) -> Element<'_, Message> {
    text(msg).style(ERROR_COLOR).into()
}
