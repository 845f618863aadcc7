use iced::widget::container::bordered_box;
use iced::widget::{button, horizontal_space, pick_list, row, text, Container};
use iced::{Alignment, Length};
use iced_font_awesome::fa_icon_solid;

use crate::app::{App, Message};
use crate::config::{theme_names, theme_to_str};
use super::icon_button_content;

pub fn header(app: &App) -> Container<'_, Message> {
    let content = row![
        text("Student Records").size(28),
        horizontal_space(),
        pick_list(theme_names(), Some(theme_to_str(&app.theme)), Message::ThemeSelected)
            .placeholder("Theme"),
        button(icon_button_content(
            fa_icon_solid("plus").style(move |_| text::base(&app.theme)),
            "Add Student"
        ))
            .on_press(Message::OpenAddStudentModal)
            .padding([8, 16]),
    ]
        .spacing(15)
        .align_y(Alignment::Center);

    Container::new(content)
        .padding([15, 30])
        .width(Length::Fill)
        .style(move |_| bordered_box(&app.theme))
}
