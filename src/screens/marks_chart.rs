use iced::widget::{column, container, text, vertical_space, Row, Space};
use iced::{Alignment, Color, Element, Length};

use crate::app::Message;
use crate::charts::{marks_bars, MarksBar};
use crate::model::Subject;
use super::{empty_chart, CHART_HEIGHT, MUTED};

const BAR_COLOR: Color = Color::from_rgb(0.310, 0.275, 0.898);
const PLOT_HEIGHT: f32 = 200.0;
const SLOT_WIDTH: f32 = 64.0;
const BAR_WIDTH: f32 = 36.0;
const VALUE_LABEL_HEIGHT: f32 = 18.0;

pub fn marks_chart<'a>(subjects: &[Subject]) -> Element<'a, Message> {
    let bars = marks_bars(subjects);
    if bars.is_empty() {
        return empty_chart("No subject marks added yet.");
    }

    // Fixed 0..=100 axis, independent of the data.
    let axis = column![
        text("100").size(12).color(MUTED),
        vertical_space(),
        text("50").size(12).color(MUTED),
        vertical_space(),
        text("0").size(12).color(MUTED),
    ]
        .height(Length::Fixed(PLOT_HEIGHT))
        .align_x(Alignment::End);

    let plot = bars
        .into_iter()
        .fold(Row::new().spacing(8), |plot, bar| plot.push(bar_slot(bar)));

    container(
        Row::new()
            .spacing(10)
            .push(axis)
            .push(plot),
    )
        .height(Length::Fixed(CHART_HEIGHT))
        .align_y(Alignment::Center)
        .into()
}

fn bar_slot<'a>(bar: MarksBar) -> Element<'a, Message> {
    let height = (bar.fraction * (PLOT_HEIGHT - VALUE_LABEL_HEIGHT)).max(1.0);

    let plotted = container(
        column![
            text(bar.marks.to_string()).size(12),
            container(Space::new(Length::Fill, Length::Fixed(height)))
                .width(Length::Fixed(BAR_WIDTH))
                .style(|_| container::background(BAR_COLOR)),
        ]
            .spacing(2)
            .align_x(Alignment::Center),
    )
        .height(Length::Fixed(PLOT_HEIGHT))
        .align_y(Alignment::End);

    column![plotted, text(bar.label).size(12)]
        .spacing(4)
        .width(Length::Fixed(SLOT_WIDTH))
        .align_x(Alignment::Center)
        .into()
}
