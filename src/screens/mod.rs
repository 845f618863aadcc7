pub mod header;
pub mod student_list;
pub mod student_detail;
pub mod attendance_chart;
pub mod marks_chart;
pub mod add_student_modal;

pub use header::header;
pub use student_list::student_list;
pub use student_detail::student_detail;
pub use attendance_chart::attendance_chart;
pub use marks_chart::marks_chart;
pub use add_student_modal::add_student_modal;

use iced::widget::{container, text, Container, Row};
use iced::{Alignment, Color, Element, Length, Renderer, Theme};
use crate::app::Message;

pub const MUTED: Color = Color::from_rgb(0.58, 0.64, 0.72);
pub const CHART_HEIGHT: f32 = 260.0;

/// Icon followed by a label, for use inside buttons.
fn icon_button_content<'a>(
    icon_element: impl Into<Element<'a, Message, Theme, Renderer>>,
    label: &'a str,
) -> Row<'a, Message> {
    Row::new()
        .align_y(Alignment::Center)
        .spacing(8)
        .push(icon_element)
        .push(text(label))
}

/// Placeholder shown by a chart with nothing to plot.
fn empty_chart<'a>(message: &'a str) -> Element<'a, Message> {
    Container::new(text(message).color(MUTED))
        .center(Length::Fill)
        .height(Length::Fixed(CHART_HEIGHT))
        .into()
}

fn card<'a>(content: impl Into<Element<'a, Message>>, theme: &'a Theme) -> Container<'a, Message> {
    Container::new(content)
        .style(move |_| container::bordered_box(theme))
        .padding(20)
        .width(Length::Fill)
}
