//! Aggregates behind the attendance and marks charts.

use crate::model::{AttendanceRecord, AttendanceStatus, Subject, MAX_MARKS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceBreakdown {
    pub present: usize,
    pub absent: usize,
}

impl AttendanceBreakdown {
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, record| {
            match record.status {
                AttendanceStatus::Present => acc.present += 1,
                AttendanceStatus::Absent => acc.absent += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.present + self.absent
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn count(&self, status: AttendanceStatus) -> usize {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Absent => self.absent,
        }
    }

    /// Share of all records with this status, 0.0..=1.0. Zero when empty.
    pub fn fraction(&self, status: AttendanceStatus) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        self.count(status) as f32 / self.total() as f32
    }

    pub fn percent(&self, status: AttendanceStatus) -> f32 {
        self.fraction(status) * 100.0
    }

    /// e.g. `"Present 66.7%"`
    pub fn label(&self, status: AttendanceStatus) -> String {
        format!("{} {:.1}%", status, self.percent(status))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarksBar {
    pub label: String,
    pub marks: u8,
    /// Bar height on the fixed 0..=100 scale.
    pub fraction: f32,
}

pub fn marks_bars(subjects: &[Subject]) -> Vec<MarksBar> {
    subjects
        .iter()
        .map(|subject| {
            let marks = subject.marks.min(MAX_MARKS);
            MarksBar {
                label: subject.name.clone(),
                marks,
                fraction: f32::from(marks) / f32::from(MAX_MARKS),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn records(statuses: &[AttendanceStatus]) -> Vec<AttendanceRecord> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        statuses
            .iter()
            .zip(start.iter_days())
            .map(|(status, date)| AttendanceRecord { date, status: *status })
            .collect()
    }

    #[test]
    fn test_breakdown_two_present_one_absent() {
        use AttendanceStatus::*;
        let breakdown = AttendanceBreakdown::from_records(&records(&[Present, Present, Absent]));

        assert_eq!(breakdown.present, 2);
        assert_eq!(breakdown.absent, 1);
        assert_eq!(breakdown.total(), 3);
        assert_eq!(breakdown.label(Present), "Present 66.7%");
        assert_eq!(breakdown.label(Absent), "Absent 33.3%");
    }

    #[test]
    fn test_breakdown_empty() {
        let breakdown = AttendanceBreakdown::from_records(&[]);
        assert!(breakdown.is_empty());
        assert_eq!(breakdown.fraction(AttendanceStatus::Present), 0.0);
        assert_eq!(breakdown.label(AttendanceStatus::Absent), "Absent 0.0%");
    }

    #[test]
    fn test_breakdown_all_present() {
        let breakdown = AttendanceBreakdown::from_records(&records(&[AttendanceStatus::Present; 4]));
        assert_eq!(breakdown.fraction(AttendanceStatus::Present), 1.0);
        assert_eq!(breakdown.label(AttendanceStatus::Present), "Present 100.0%");
    }

    #[test]
    fn test_marks_bars_follow_subject_order() {
        let subjects = vec![Subject::new("Math", 85), Subject::new("Art", 0), Subject::new("PE", 100)];
        let bars = marks_bars(&subjects);

        let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Math", "Art", "PE"]);
        assert!((bars[0].fraction - 0.85).abs() < f32::EPSILON);
        assert_eq!(bars[1].fraction, 0.0);
        assert_eq!(bars[2].fraction, 1.0);
    }

    #[test]
    fn test_marks_bars_clamp_to_scale() {
        let mut subject = Subject::new("Bonus", 100);
        subject.marks = 140;
        let bars = marks_bars(&[subject]);
        assert_eq!(bars[0].marks, 100);
        assert_eq!(bars[0].fraction, 1.0);
    }

    #[test]
    fn test_marks_bars_empty() {
        assert!(marks_bars(&[]).is_empty());
    }
}
