use crate::client::models::messages::Message;
use crate::common::models::NutrientRecord;
use iced::widget::{Column, Row, Text};
use iced::{Color, Element, Font, Length};

const TEXT_SECONDARY: Color = Color::from_rgb(0.45, 0.45, 0.5);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Renders a value the way the original web table did: integral values
/// without a decimal point, anything else with default float formatting.
fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Row model for the table body: one `[name, per100g, portion]` entry per
/// record, in input order, with no sorting or aggregation.
fn table_cells(records: &[NutrientRecord]) -> Vec<[String; 3]> {
    records
        .iter()
        .map(|n| {
            [
                n.name.clone(),
                format_value(n.per_100g),
                format_value(n.portion),
            ]
        })
        .collect()
}

/// Pure rendering of an ordered nutrient sequence: header row first, then
/// one row per record. An empty slice renders the header only.
pub fn view(records: &[NutrientRecord]) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(12)
        .push(
            Text::new("Nutriente")
                .font(BOLD_FONT)
                .size(14)
                .width(Length::FillPortion(2)),
        )
        .push(
            Text::new("/100g")
                .font(BOLD_FONT)
                .size(14)
                .width(Length::FillPortion(1))
                .horizontal_alignment(iced::alignment::Horizontal::Right),
        )
        .push(
            Text::new("Porção")
                .font(BOLD_FONT)
                .size(14)
                .width(Length::FillPortion(1))
                .horizontal_alignment(iced::alignment::Horizontal::Right),
        );

    let mut table = Column::new()
        .spacing(6)
        .push(
            Text::new("Tabela Nutricional")
                .font(BOLD_FONT)
                .size(18)
                .style(TEXT_SECONDARY),
        )
        .push(header);

    for [name, per_100g, portion] in table_cells(records) {
        table = table.push(
            Row::new()
                .spacing(12)
                .push(Text::new(name).size(14).width(Length::FillPortion(2)))
                .push(
                    Text::new(per_100g)
                        .size(14)
                        .width(Length::FillPortion(1))
                        .horizontal_alignment(iced::alignment::Horizontal::Right),
                )
                .push(
                    Text::new(portion)
                        .size(14)
                        .width(Length::FillPortion(1))
                        .horizontal_alignment(iced::alignment::Horizontal::Right),
                ),
        );
    }

    table.into()
}
