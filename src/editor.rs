//! Edits applied to the selected student. Each takes the current value and
//! returns the complete replacement, which `App::update` hands to
//! [`Roster::update_student`](crate::roster::Roster::update_student).

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::model::{AttendanceRecord, AttendanceStatus, Student, Subject, MAX_MARKS};

pub fn rename(student: &Student, draft: &str) -> Result<Student> {
    let name = draft.trim();
    if name.is_empty() {
        return Err(Error::BlankName);
    }
    Ok(Student {
        name: name.to_string(),
        ..student.clone()
    })
}

/// Accepts whole numbers 0..=100, surrounding whitespace ignored. Zero is valid.
pub fn parse_marks(input: &str) -> Result<u8> {
    input
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|marks| *marks <= MAX_MARKS)
        .ok_or_else(|| Error::InvalidMarks { input: input.to_string() })
}

pub fn add_subject(student: &Student, name: &str, marks: &str) -> Result<Student> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::BlankSubjectName);
    }
    let marks = parse_marks(marks)?;

    let mut updated = student.clone();
    updated.subjects.push(Subject::new(name, marks));
    Ok(updated)
}

pub fn delete_subject(student: &Student, subject_id: &str) -> Student {
    let mut updated = student.clone();
    updated.subjects.retain(|subject| subject.id != subject_id);
    updated
}

/// The first status recorded for a day is final.
pub fn mark_attendance(student: &Student, status: AttendanceStatus, today: NaiveDate) -> Result<Student> {
    if student.attendance_on(today).is_some() {
        return Err(Error::AlreadyMarked(today));
    }

    let mut updated = student.clone();
    updated.attendance.push(AttendanceRecord { date: today, status });
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()
    }

    #[test]
    fn test_rename_trims() {
        let student = Student::new("Ann");
        let renamed = rename(&student, "  Annie ").unwrap();
        assert_eq!(renamed.name, "Annie");
        assert_eq!(renamed.id, student.id);
    }

    #[test]
    fn test_rename_blank_is_rejected() {
        let student = Student::new("Ann");
        assert!(matches!(rename(&student, ""), Err(Error::BlankName)));
        assert!(matches!(rename(&student, "   "), Err(Error::BlankName)));
        assert_eq!(student.name, "Ann");
    }

    #[test]
    fn test_parse_marks() {
        assert_eq!(parse_marks("0").unwrap(), 0);
        assert_eq!(parse_marks(" 100 ").unwrap(), 100);
        assert_eq!(parse_marks("57").unwrap(), 57);
        for bad in ["", "  ", "101", "-1", "12.5", "abc", "300"] {
            assert!(
                matches!(parse_marks(bad), Err(Error::InvalidMarks { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_add_subject_with_zero_marks_is_accepted() {
        let student = Student::new("Ann");
        let updated = add_subject(&student, "Math", "0").unwrap();

        assert_eq!(updated.subjects.len(), 1);
        assert_eq!(updated.subjects[0].name, "Math");
        assert_eq!(updated.subjects[0].marks, 0);
    }

    #[test]
    fn test_add_subject_with_empty_marks_is_rejected() {
        let student = Student::new("Ann");
        assert!(matches!(add_subject(&student, "Math", ""), Err(Error::InvalidMarks { .. })));
    }

    #[test]
    fn test_add_subject_with_blank_name_is_rejected() {
        let student = Student::new("Ann");
        assert!(matches!(add_subject(&student, "  ", "50"), Err(Error::BlankSubjectName)));
    }

    #[test]
    fn test_add_subject_appends_with_unique_ids() {
        let student = Student::new("Ann");
        let once = add_subject(&student, "Math", "80").unwrap();
        let twice = add_subject(&once, " Art ", "90").unwrap();

        let names: Vec<&str> = twice.subjects.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Math", "Art"]);
        assert_ne!(twice.subjects[0].id, twice.subjects[1].id);
    }

    #[test]
    fn test_delete_subject_by_id() {
        let student = add_subject(&Student::new("Ann"), "Math", "80").unwrap();
        let student = add_subject(&student, "Art", "90").unwrap();
        let math = student.subjects[0].id.clone();

        let updated = delete_subject(&student, &math);
        assert_eq!(updated.subjects.len(), 1);
        assert_eq!(updated.subjects[0].name, "Art");

        assert_eq!(delete_subject(&updated, "missing"), updated);
    }

    #[test]
    fn test_mark_attendance_appends_today() {
        let student = Student::new("Ann");
        let updated = mark_attendance(&student, AttendanceStatus::Present, today()).unwrap();
        assert_eq!(updated.attendance, vec![AttendanceRecord { date: today(), status: AttendanceStatus::Present }]);
    }

    #[test]
    fn test_mark_attendance_twice_keeps_first_status() {
        let student = Student::new("Ann");
        let once = mark_attendance(&student, AttendanceStatus::Present, today()).unwrap();

        let second = mark_attendance(&once, AttendanceStatus::Absent, today());
        assert!(matches!(second, Err(Error::AlreadyMarked(d)) if d == today()));
        assert_eq!(once.attendance.iter().filter(|r| r.date == today()).count(), 1);
        assert_eq!(once.attendance_on(today()).unwrap().status, AttendanceStatus::Present);
    }

    #[test]
    fn test_mark_attendance_on_a_new_day() {
        let student = mark_attendance(&Student::new("Ann"), AttendanceStatus::Absent, today()).unwrap();
        let tomorrow = today().succ_opt().unwrap();
        let updated = mark_attendance(&student, AttendanceStatus::Present, tomorrow).unwrap();
        assert_eq!(updated.attendance.len(), 2);
    }
}
