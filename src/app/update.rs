use iced::Task;
use iced::widget::text_input;
use tokio::task::spawn_blocking;

use crate::app::state::{name_draft_input_id, new_student_input_id, today};
use crate::config::theme_from_str;
use crate::editor;
use crate::error::Result;
use crate::model::Student;
use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThemeSelected(name) => {
                if let Some(theme) = theme_from_str(name) {
                    tracing::debug!(theme = name, "theme selected");
                    self.theme = theme;
                }
                Task::none()
            }
            Message::OpenAddStudentModal => {
                self.new_student_name.clear();
                self.show_add_student_modal = true;
                text_input::focus(new_student_input_id())
            }
            Message::CloseAddStudentModal => {
                self.show_add_student_modal = false;
                Task::none()
            }
            Message::NewStudentNameChanged(name) => {
                self.new_student_name = name;
                Task::none()
            }
            Message::SubmitNewStudent => {
                match self.roster.add_student(&self.new_student_name) {
                    Ok(student) => {
                        tracing::info!(id = %student.id, name = %student.name, "student added");
                        self.show_add_student_modal = false;
                        self.reset_name_editor();
                    }
                    Err(err) => tracing::debug!(error = %err, "add student refused"),
                }
                Task::none()
            }
            Message::SelectStudent(id) => {
                self.roster.select_student(id);
                self.reset_name_editor();
                Task::none()
            }
            Message::DeleteStudentPressed(id) => {
                let Some(student) = self.roster.get(&id) else {
                    return Task::none();
                };
                let name = student.name.clone();
                Task::perform(confirm_delete(name), move |confirmed| {
                    Message::DeleteStudentConfirmed(id.clone(), confirmed)
                })
            }
            Message::DeleteStudentConfirmed(id, confirmed) => {
                if !confirmed {
                    tracing::debug!(%id, "delete cancelled");
                    return Task::none();
                }
                let was_selected = self.roster.selected_id() == Some(id.as_str());
                if let Some(removed) = self.roster.delete_student(&id) {
                    tracing::info!(%id, name = %removed.name, remaining = self.roster.len(), "student deleted");
                    if was_selected {
                        self.reset_name_editor();
                    }
                }
                Task::none()
            }
            Message::StartEditingName => {
                if let Some(student) = self.roster.selected_student() {
                    self.name_draft = student.name.clone();
                    self.is_editing_name = true;
                    return text_input::focus(name_draft_input_id());
                }
                Task::none()
            }
            Message::NameDraftChanged(draft) => {
                self.name_draft = draft;
                Task::none()
            }
            Message::SubmitName => {
                let draft = self.name_draft.clone();
                self.apply_edit(|student| editor::rename(student, &draft));
                // Accepted or not, the edit ends here.
                self.reset_name_editor();
                Task::none()
            }
            Message::CancelEditingName => {
                self.reset_name_editor();
                Task::none()
            }
            Message::NewSubjectNameChanged(name) => {
                self.new_subject_name = name;
                Task::none()
            }
            Message::NewSubjectMarksChanged(marks) => {
                self.new_subject_marks = marks;
                Task::none()
            }
            Message::SubmitNewSubject => {
                let name = self.new_subject_name.clone();
                let marks = self.new_subject_marks.clone();
                if self.apply_edit(|student| editor::add_subject(student, &name, &marks)) {
                    self.new_subject_name.clear();
                    self.new_subject_marks.clear();
                }
                Task::none()
            }
            Message::DeleteSubject(subject_id) => {
                self.apply_edit(|student| Ok(editor::delete_subject(student, &subject_id)));
                Task::none()
            }
            Message::MarkAttendance(status) => {
                let today = today();
                self.apply_edit(|student| editor::mark_attendance(student, status, today));
                Task::none()
            }
        }
    }

    /// Runs `edit` against the selected student and stores the result.
    /// Refused edits are logged and leave the roster untouched.
    fn apply_edit(&mut self, edit: impl FnOnce(&Student) -> Result<Student>) -> bool {
        let Some(student) = self.roster.selected_student() else {
            return false;
        };
        match edit(student) {
            Ok(updated) => {
                tracing::info!(id = %updated.id, "student updated");
                self.roster.update_student(updated)
            }
            Err(err) => {
                tracing::debug!(error = %err, "edit refused");
                false
            }
        }
    }
}

async fn confirm_delete(name: String) -> bool {
    spawn_blocking(move || {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title("Delete student")
            .set_description(format!("Are you sure you want to delete {name}?"))
            .set_buttons(rfd::MessageButtons::YesNo)
            .show()
    })
    .await
    .map(|answer| matches!(answer, rfd::MessageDialogResult::Yes))
    .unwrap_or_else(|err| {
        tracing::error!(error = %err, "confirmation dialog failed");
        false
    })
}
