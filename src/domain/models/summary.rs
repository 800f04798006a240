use std::fmt;

/// Aggregate counters shown in the summary view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub students: usize,
    pub attendance_records: usize,
    pub progress_records: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "Total students: {}\nAttendance records: {}\nProgress records: {}",
            self.students, self.attendance_records, self.progress_records
        );
    }
}
