use iced::widget::container::background;
use iced::widget::{
    button, column, horizontal_space, mouse_area, opaque, row, text, text_input, Container,
};
use iced::{Alignment, Color, Element, Length};
use iced_aw::Card;
use iced_font_awesome::fa_icon_solid;

use crate::app::state::new_student_input_id;
use crate::app::{App, Message};

/// Dialog layered over the main view. Clicking the dimmed backdrop closes it.
pub fn add_student_modal(app: &App) -> Element<'_, Message> {
    let head = row![
        text("Add New Student").size(24),
        horizontal_space(),
        button(fa_icon_solid("xmark").style(move |_| text::base(&app.theme)))
            .on_press(Message::CloseAddStudentModal)
            .style(button::text),
    ]
        .align_y(Alignment::Center);

    let body = column![
        text("Student Name").size(14),
        text_input("e.g., John Doe", &app.new_student_name)
            .id(new_student_input_id())
            .on_input(Message::NewStudentNameChanged)
            .on_submit(Message::SubmitNewStudent)
            .padding(10),
    ]
        .spacing(6);

    let foot = row![
        horizontal_space(),
        button("Cancel")
            .on_press(Message::CloseAddStudentModal)
            .style(button::secondary),
        button("Add Student").on_press(Message::SubmitNewStudent),
    ]
        .spacing(10);

    let dialog = Card::new(head, body).foot(foot).max_width(450.0);

    let modal_overlay = Container::new(
        mouse_area(Container::new(opaque(dialog)).center(Length::Fill).padding(40))
            .on_press(Message::CloseAddStudentModal),
    )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| background(Color { r: 0.0, g: 0.0, b: 0.0, a: 0.5 }));

    opaque(modal_overlay)
}
