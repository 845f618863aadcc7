use crate::model::AttendanceStatus;

#[derive(Debug, Clone)]
pub enum Message {
    ThemeSelected(&'static str),
    // Add-student dialog
    OpenAddStudentModal,
    CloseAddStudentModal,
    NewStudentNameChanged(String),
    SubmitNewStudent,
    // Roster list
    SelectStudent(String),
    DeleteStudentPressed(String),
    DeleteStudentConfirmed(String, bool), // id, user answered yes
    // Name editing
    StartEditingName,
    NameDraftChanged(String),
    SubmitName,
    CancelEditingName,
    // Subjects
    NewSubjectNameChanged(String),
    NewSubjectMarksChanged(String),
    SubmitNewSubject,
    DeleteSubject(String),
    // Attendance
    MarkAttendance(AttendanceStatus),
}
