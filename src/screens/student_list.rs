use iced::widget::container::bordered_box;
use iced::widget::{button, column, horizontal_rule, row, text, Column, Container, Scrollable};
use iced::{Alignment, Element, Length, Theme};
use iced_font_awesome::{fa_icon, fa_icon_solid};

use crate::app::{App, Message};
use super::{icon_button_content, MUTED};

pub fn student_list(app: &App) -> Container<'_, Message> {
    let selected_id = app.roster.selected_id();

    let mut list = Column::new().spacing(6);
    for student in app.roster.students() {
        let is_selected = selected_id == Some(student.id.as_str());

        // Selected entry gets the filled icon and the primary style.
        let icon: Element<'_, Message> = if is_selected {
            fa_icon_solid("user").style(move |_| text::base(&app.theme)).into()
        } else {
            fa_icon("user").style(move |_| text::base(&app.theme)).into()
        };
        let style: fn(&Theme, button::Status) -> button::Style = if is_selected {
            button::primary
        } else {
            button::text
        };

        let select = button(icon_button_content(icon, &student.name))
            .on_press(Message::SelectStudent(student.id.clone()))
            .style(style)
            .padding(10)
            .width(Length::Fill);

        // Separate widget from `select`, so deleting never selects.
        let delete = button(fa_icon_solid("trash").style(move |_| text::base(&app.theme)))
            .on_press(Message::DeleteStudentPressed(student.id.clone()))
            .style(button::text)
            .padding(10);

        list = list.push(row![select, delete].spacing(4).align_y(Alignment::Center));
    }

    if app.roster.is_empty() {
        list = list.push(text("No students yet.").color(MUTED));
    }

    let content = column![
        text(format!("Students ({})", app.roster.len())).size(20),
        horizontal_rule(1),
        Scrollable::new(list).height(Length::Fill),
    ]
        .spacing(12);

    Container::new(content)
        .style(move |_| bordered_box(&app.theme))
        .padding(15)
}
