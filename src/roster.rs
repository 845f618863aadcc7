//! The roster store: every student known to the application plus the
//! currently selected one. `App` owns exactly one of these and is the only
//! place that mutates it.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::model::{AttendanceRecord, AttendanceStatus, Student, Subject};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: Vec<Student>,
    selected: Option<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo roster shown on first launch, with the first student selected.
    pub fn sample(today: NaiveDate) -> Self {
        let yesterday = today.pred_opt().unwrap_or(today);
        let record = |date, status| AttendanceRecord { date, status };

        let mut john = Student::new("John Doe");
        john.subjects = vec![
            Subject::new("Math", 85),
            Subject::new("Science", 92),
            Subject::new("History", 78),
        ];
        john.attendance = vec![
            record(yesterday, AttendanceStatus::Present),
            record(today, AttendanceStatus::Present),
        ];

        let mut jane = Student::new("Jane Smith");
        jane.subjects = vec![
            Subject::new("Math", 95),
            Subject::new("English", 88),
            Subject::new("Art", 95),
        ];
        jane.attendance = vec![
            record(yesterday, AttendanceStatus::Present),
            record(today, AttendanceStatus::Absent),
        ];

        let mut peter = Student::new("Peter Jones");
        peter.subjects = vec![Subject::new("Physics", 75), Subject::new("Chemistry", 82)];
        peter.attendance = vec![record(yesterday, AttendanceStatus::Absent)];

        Self {
            selected: Some(john.id.clone()),
            students: vec![john, jane, peter],
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// `None` when nothing is selected or the selection points at an unknown id.
    pub fn selected_student(&self) -> Option<&Student> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// Appends a new, empty student and selects it.
    pub fn add_student(&mut self, name: &str) -> Result<&Student> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::BlankName);
        }

        let student = Student::new(name);
        self.selected = Some(student.id.clone());
        self.students.push(student);
        Ok(&self.students[self.students.len() - 1])
    }

    /// Replaces the student with the same id. Returns `false` if there is none.
    pub fn update_student(&mut self, updated: Student) -> bool {
        match self.students.iter_mut().find(|s| s.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Removes a student. If it was selected, the first remaining student
    /// becomes selected, or nothing when the roster is now empty.
    pub fn delete_student(&mut self, id: &str) -> Option<Student> {
        let index = self.students.iter().position(|s| s.id == id)?;
        let removed = self.students.remove(index);

        if self.selected.as_deref() == Some(id) {
            self.selected = self.students.first().map(|s| s.id.clone());
        }
        Some(removed)
    }

    /// No existence check: selecting an unknown id shows no student.
    pub fn select_student(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }
}
