use chrono::{Local, NaiveDate};
use iced::widget::text_input;
use iced::Theme;

use crate::config::Config;
use crate::roster::Roster;

pub const NEW_STUDENT_INPUT: &str = "new-student-name";
pub const NAME_DRAFT_INPUT: &str = "student-name-draft";

pub struct App {
    pub theme: Theme,
    pub roster: Roster,
    // Detail editor
    pub is_editing_name: bool,
    pub name_draft: String,
    pub new_subject_name: String,
    pub new_subject_marks: String,
    // Add-student dialog
    pub show_add_student_modal: bool,
    pub new_student_name: String,
}

impl App {
    pub fn from_config(config: &Config) -> Self {
        let roster = if config.sample_roster {
            Roster::sample(today())
        } else {
            Roster::new()
        };
        tracing::info!(students = roster.len(), theme = %config.theme_name, "starting");

        let mut app = Self {
            theme: config.theme(),
            roster,
            is_editing_name: false,
            name_draft: String::new(),
            new_subject_name: String::new(),
            new_subject_marks: String::new(),
            show_add_student_modal: false,
            new_student_name: String::new(),
        };
        app.reset_name_editor();
        app
    }

    /// Leaves name-edit mode and reloads the draft from the selected student.
    pub fn reset_name_editor(&mut self) {
        self.is_editing_name = false;
        self.name_draft = self
            .roster
            .selected_student()
            .map(|s| s.name.clone())
            .unwrap_or_default();
    }
}

/// Local calendar date used for "today's" attendance.
///
/// The day rolls over at local midnight, not UTC midnight, so a record made
/// late in the evening west of Greenwich lands on the local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn new_student_input_id() -> text_input::Id {
    text_input::Id::new(NEW_STUDENT_INPUT)
}

pub fn name_draft_input_id() -> text_input::Id {
    text_input::Id::new(NAME_DRAFT_INPUT)
}
