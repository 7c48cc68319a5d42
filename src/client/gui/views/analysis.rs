use crate::client::gui::widgets::{alert, nutrition_table};
use crate::client::models::app_state::{NutriAppState, RequestState};
use crate::client::models::messages::Message;
use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

// Consistent color palette across the app
const BG_MAIN: Color = Color::from_rgb(0.97, 0.97, 0.95);
const CARD_BG: Color = Color::WHITE;
const INPUT_BORDER: Color = Color::from_rgb(0.85, 0.85, 0.85);
const ACCENT_COLOR: Color = Color::from_rgb(0.0, 0.55, 0.3);
const TEXT_PRIMARY: Color = Color::from_rgb(0.1, 0.1, 0.12);
const TEXT_SECONDARY: Color = Color::from_rgb(0.45, 0.45, 0.5);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: INPUT_BORDER,
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 8.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
        },
    }
}

pub fn view(state: &NutriAppState) -> Element<Message> {
    let loading = state.request == RequestState::Loading;
    let submit_enabled = state.can_submit();

    let title = Text::new("NutriAI")
        .size(36)
        .font(BOLD_FONT)
        .style(TEXT_PRIMARY);

    let subtitle = Text::new("Descreva o alimento e (opcional) a porção em gramas.")
        .size(15)
        .style(TEXT_SECONDARY);

    let description_input = TextInput::new(
        "Ex.: tapioca 2 colheres com queijo",
        &state.description,
    )
    .on_input(Message::DescriptionChanged)
    .on_submit(if submit_enabled {
        Message::Submit
    } else {
        Message::None
    })
    .width(Length::Fill)
    .padding(12)
    .size(14);

    let portion_input = TextInput::new(
        "Porção em gramas (opcional, ex.: 120)",
        &state.portion_input,
    )
    .on_input(Message::PortionChanged)
    .on_submit(if submit_enabled {
        Message::Submit
    } else {
        Message::None
    })
    .width(Length::Fill)
    .padding(12)
    .size(14);

    // Submit stays disabled while a request is in flight or with an empty
    // description (required-field validation).
    let submit_button = if submit_enabled {
        Button::new(
            Container::new(Text::new("Analisar").font(BOLD_FONT).size(16))
                .width(Length::Fill)
                .center_x(),
        )
        .on_press(Message::Submit)
        .style(iced::theme::Button::Primary)
        .width(Length::Fill)
        .padding(14)
    } else {
        Button::new(
            Container::new(
                Text::new(if loading { "Analisando..." } else { "Analisar" })
                    .size(16)
                    .style(TEXT_SECONDARY),
            )
            .width(Length::Fill)
            .center_x(),
        )
        .style(iced::theme::Button::Secondary)
        .width(Length::Fill)
        .padding(14)
    };

    let form = Column::new()
        .spacing(12)
        .push(description_input)
        .push(portion_input)
        .push(submit_button);

    let mut content = Column::new()
        .width(Length::Fixed(620.0))
        .spacing(16)
        .padding(32)
        .push(
            Column::new()
                .spacing(6)
                .push(title)
                .push(subtitle),
        )
        .push(form);

    match &state.request {
        RequestState::Failed(message) => {
            content = content.push(alert::view(message));
        }
        RequestState::Succeeded(result) => {
            let mut insights = Column::new().spacing(4);
            for insight in &result.insights {
                insights = insights.push(
                    Row::new()
                        .spacing(6)
                        .push(Text::new("•").size(14))
                        .push(Text::new(insight.as_str()).size(14)),
                );
            }

            let advice = Row::new()
                .spacing(6)
                .push(Text::new("Dica:").font(BOLD_FONT).size(14))
                .push(Text::new(result.advice.as_str()).size(14));

            let disclaimer = Text::new(result.disclaimer.as_str())
                .size(12)
                .style(TEXT_SECONDARY);

            let result_card = Container::new(
                Column::new()
                    .spacing(12)
                    .push(nutrition_table::view(&result.nutrients))
                    .push(insights)
                    .push(advice)
                    .push(disclaimer),
            )
            .width(Length::Fill)
            .padding(16)
            .style(iced::theme::Container::Custom(Box::new(card_appearance)));

            content = content.push(result_card);
        }
        // Nothing below the form while idle or waiting for the response.
        RequestState::Idle | RequestState::Loading => {}
    }

    if loading {
        content = content.push(
            Row::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(Text::new("Analisando alimento...").size(14).style(ACCENT_COLOR)),
        );
    }

    let card = Container::new(content)
        .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    let centered = Container::new(Scrollable::new(
        Column::new()
            .width(Length::Fill)
            .align_items(Alignment::Center)
            .push(Space::new(Length::Fill, Length::Fixed(40.0)))
            .push(card)
            .push(Space::new(Length::Fill, Length::Fixed(40.0))),
    ))
    .width(Length::Fill)
    .height(Length::Fill);

    Container::new(centered)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
