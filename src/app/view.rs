use iced::widget::{Column, Container, Row, Scrollable, Stack};
use iced::{Element, Length};

use crate::screens::{add_student_modal, header, student_detail, student_list};
use super::{App, Message};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let body = Row::new()
            .spacing(30)
            .padding(30)
            .push(
                // Roster on the left, details take the rest
                student_list(self)
                    .width(Length::FillPortion(1))
                    .height(Length::Fill),
            )
            .push(
                Scrollable::new(student_detail(self))
                    .width(Length::FillPortion(3))
                    .height(Length::Fill),
            );

        let base = Container::new(Column::new().push(header(self)).push(body))
            .width(Length::Fill)
            .height(Length::Fill);

        if self.show_add_student_modal {
            Stack::new().push(base).push(add_student_modal(self)).into()
        } else {
            base.into()
        }
    }
}
