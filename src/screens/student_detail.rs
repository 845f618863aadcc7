use iced::widget::{
    button, column, container, horizontal_rule, row, text, text_input, Column,
    Container, Row,
};
use iced::{Alignment, Color, Element, Length};
use iced_font_awesome::fa_icon_solid;

use crate::app::state::{name_draft_input_id, today};
use crate::app::{App, Message};
use crate::model::{AttendanceStatus, Student, Subject};
use super::attendance_chart::status_color;
use super::{attendance_chart, card, icon_button_content, marks_chart, MUTED};

pub fn student_detail(app: &App) -> Container<'_, Message> {
    let Some(student) = app.roster.selected_student() else {
        return card(text("Select a student to see their details.").size(18).color(MUTED), &app.theme)
            .center_x(Length::Fill)
            .padding(40);
    };

    let charts = row![
        card(
            column![
                text("Attendance").size(22),
                todays_status(student),
                attendance_chart(&student.attendance),
            ]
                .spacing(15),
            &app.theme,
        ),
        card(
            column![text("Marks Overview").size(22), marks_chart(&student.subjects)].spacing(15),
            &app.theme,
        ),
    ]
        .spacing(30);

    let content = column![
        card(name_editor(app, student), &app.theme),
        charts,
        card(subjects_section(app, student), &app.theme),
    ]
        .spacing(30);

    Container::new(content).width(Length::Fill)
}

fn name_editor<'a>(app: &'a App, student: &'a Student) -> Row<'a, Message> {
    if app.is_editing_name {
        row![
            text_input("Student name", &app.name_draft)
                .id(name_draft_input_id())
                .on_input(Message::NameDraftChanged)
                .on_submit(Message::SubmitName)
                .size(28)
                .padding(6)
                .width(Length::Fixed(420.0)),
            button(fa_icon_solid("check").style(move |_| text::base(&app.theme)))
                .on_press(Message::SubmitName)
                .style(button::text),
            button(fa_icon_solid("xmark").style(move |_| text::base(&app.theme)))
                .on_press(Message::CancelEditingName)
                .style(button::text),
        ]
            .spacing(8)
            .align_y(Alignment::Center)
    } else {
        row![
            text(&student.name).size(32),
            button(fa_icon_solid("pen").style(move |_| text::base(&app.theme)))
                .on_press(Message::StartEditingName)
                .style(button::text),
        ]
            .spacing(12)
            .align_y(Alignment::Center)
    }
}

/// Today's status once recorded, otherwise the two buttons to record it.
fn todays_status<'a>(student: &Student) -> Element<'a, Message> {
    let control: Element<'a, Message> = match student.attendance_on(today()) {
        Some(record) => status_pill(record.status),
        None => row![
            button("Mark Present")
                .on_press(Message::MarkAttendance(AttendanceStatus::Present))
                .style(button::success),
            button("Mark Absent")
                .on_press(Message::MarkAttendance(AttendanceStatus::Absent))
                .style(button::danger),
        ]
            .spacing(10)
            .into(),
    };

    column![text("Today's Status:"), control].spacing(8).into()
}

fn status_pill<'a>(status: AttendanceStatus) -> Element<'a, Message> {
    container(text(status.to_string()).size(14).color(Color::WHITE))
        .padding([4, 14])
        .style(move |_| container::Style {
            background: Some(status_color(status).into()),
            border: iced::border::rounded(12.0),
            ..container::Style::default()
        })
        .into()
}

fn subjects_section<'a>(app: &'a App, student: &'a Student) -> Column<'a, Message> {
    let add_form = row![
        text_input("Subject Name", &app.new_subject_name)
            .on_input(Message::NewSubjectNameChanged)
            .on_submit(Message::SubmitNewSubject)
            .padding(8)
            .width(Length::FillPortion(2)),
        text_input("Marks (0-100)", &app.new_subject_marks)
            .on_input(Message::NewSubjectMarksChanged)
            .on_submit(Message::SubmitNewSubject)
            .padding(8)
            .width(Length::FillPortion(1)),
        button(icon_button_content(
            fa_icon_solid("plus").style(move |_| text::base(&app.theme)),
            "Add"
        ))
            .on_press(Message::SubmitNewSubject)
            .padding([8, 16]),
    ]
        .spacing(10)
        .align_y(Alignment::Center);

    let mut table = column![
        table_row(text("Subject").size(16), text("Marks").size(16), text("Action").size(16)),
        horizontal_rule(1),
    ]
        .spacing(6);

    if student.subjects.is_empty() {
        table = table.push(
            container(text("No subjects added yet.").color(MUTED))
                .center_x(Length::Fill)
                .padding(16),
        );
    }
    for subject in &student.subjects {
        table = table.push(subject_row(app, subject)).push(horizontal_rule(1));
    }

    column![text("Subjects & Marks").size(22), add_form, table].spacing(15)
}

fn subject_row<'a>(app: &'a App, subject: &'a Subject) -> Row<'a, Message> {
    let delete = button(fa_icon_solid("trash").style(move |_| text::base(&app.theme)))
        .on_press(Message::DeleteSubject(subject.id.clone()))
        .style(button::text);

    table_row(text(&subject.name), text(subject.marks.to_string()), delete)
}

fn table_row<'a>(
    subject: impl Into<Element<'a, Message>>,
    marks: impl Into<Element<'a, Message>>,
    action: impl Into<Element<'a, Message>>,
) -> Row<'a, Message> {
    row![
        container(subject).width(Length::FillPortion(3)),
        container(marks).width(Length::FillPortion(1)),
        container(action).width(Length::FillPortion(1)).align_x(Alignment::End),
    ]
        .padding([2, 8])
        .align_y(Alignment::Center)
}
