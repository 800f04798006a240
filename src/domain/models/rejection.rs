use std::error;
use std::fmt;

use chrono::NaiveDate;

/// An operation refused before touching any state. These end up in front of
/// the user as a blocking alert, unlike storage failures which are fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    MissingRequiredFields,
    InvalidAge(String),
    AttendanceAlreadyRecorded { name: String, date: NaiveDate },
    MissingTopic,
    StudentNotFound(String),
    NoStudentSelected,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rejection::MissingRequiredFields => {
                return write!(f, "Fill in the required fields: name and age.");
            }
            Rejection::InvalidAge(age) => {
                return write!(
                    f,
                    "Age must be a whole number between 1 and 120, got '{age}'."
                );
            }
            Rejection::AttendanceAlreadyRecorded { name, date } => {
                return write!(f, "Attendance for {name} was already recorded on {date}.");
            }
            Rejection::MissingTopic => return write!(f, "Specify a topic."),
            Rejection::StudentNotFound(id) => return write!(f, "No student found with id {id}."),
            Rejection::NoStudentSelected => return write!(f, "Select a student first."),
        }
    }
}

impl error::Error for Rejection {}
