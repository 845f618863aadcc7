use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

/// Fresh identifier for a student or subject.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 2] = [AttendanceStatus::Present, AttendanceStatus::Absent];
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Top of the marks scale; every subject is marked out of this.
pub const MAX_MARKS: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: String,
    pub name: String,
    /// 0..=[`MAX_MARKS`]
    pub marks: u8,
}

impl Subject {
    pub fn new(name: impl Into<String>, marks: u8) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            marks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub subjects: Vec<Subject>,
    pub attendance: Vec<AttendanceRecord>,
}

impl Student {
    /// A student with no subjects and no attendance yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            subjects: vec![],
            attendance: vec![],
        }
    }

    pub fn attendance_on(&self, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.attendance.iter().find(|record| record.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_student_is_empty() {
        let student = Student::new("Ann");
        assert_eq!(student.name, "Ann");
        assert!(student.subjects.is_empty());
        assert!(student.attendance.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Student::new("A");
        let b = Student::new("B");
        assert_ne!(a.id, b.id);
        assert_ne!(Subject::new("Math", 1).id, Subject::new("Math", 1).id);
    }

    #[test]
    fn test_attendance_on() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let mut student = Student::new("Ann");
        student.attendance.push(AttendanceRecord { date: day, status: AttendanceStatus::Absent });

        assert_eq!(student.attendance_on(day).map(|r| r.status), Some(AttendanceStatus::Absent));
        assert!(student.attendance_on(day.succ_opt().unwrap()).is_none());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(AttendanceStatus::Present.to_string(), "Present");
        assert_eq!(AttendanceStatus::Absent.to_string(), "Absent");
    }
}
