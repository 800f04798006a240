#[cfg(test)]
#[path = "roster_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Student;
use super::Summary;

/// Root document holding every registered student along with their nested
/// records. Persisted as a single blob.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub students: Vec<Student>,
}

impl Roster {
    pub fn add(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Removes the student with the given id. Returns false if no student
    /// matched, which callers treat as a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.students.len();
        self.students.retain(|e| return e.id != id);
        return self.students.len() != before;
    }

    pub fn get(&self, id: &str) -> Option<&Student> {
        return self.students.iter().find(|e| return e.id == id);
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Student> {
        return self.students.iter_mut().find(|e| return e.id == id);
    }

    pub fn len(&self) -> usize {
        return self.students.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.students.is_empty();
    }

    pub fn summary(&self) -> Summary {
        return Summary {
            students: self.students.len(),
            attendance_records: self
                .students
                .iter()
                .map(|e| return e.attendance.len())
                .sum(),
            progress_records: self.students.iter().map(|e| return e.progress.len()).sum(),
        };
    }
}
