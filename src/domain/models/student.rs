#[cfg(test)]
#[path = "student_test.rs"]
mod tests;

use anyhow::Result;
use chrono::NaiveDate;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;
use uuid::Uuid;

use super::cycle;
use super::Level;
use super::Rejection;

const MAX_AGE: u8 = 120;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumIter, strum::Display)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumIter, strum::Display)]
pub enum ProgressStatus {
    Mastered,
    #[serde(rename = "In progress")]
    #[strum(serialize = "In progress")]
    InProgress,
    #[serde(rename = "Needs reinforcement")]
    #[strum(serialize = "Needs reinforcement")]
    NeedsReinforcement,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumIter, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AiContentType {
    #[default]
    Exercises,
    Explanation,
    Quiz,
}

impl AiContentType {
    pub fn next(self) -> AiContentType {
        return cycle(self, true);
    }

    pub fn previous(self) -> AiContentType {
        return cycle(self, false);
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub date: NaiveDate,
    pub status: ProgressStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiInteraction {
    pub date: NaiveDate,
    pub content_type: AiContentType,
    pub topic: String,
    pub content: String,
}

impl AiInteraction {
    /// No model is involved: the content is a fixed template filled with the
    /// request.
    pub fn simulate(
        student_name: &str,
        content_type: AiContentType,
        topic: &str,
        date: NaiveDate,
    ) -> AiInteraction {
        return AiInteraction {
            date,
            content_type,
            topic: topic.to_string(),
            content: format!(
                "AI simulation: generating {content_type} about \"{topic}\" for {student_name}"
            ),
        };
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub level: Level,
    pub registered_on: NaiveDate,
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    #[serde(default)]
    pub progress: Vec<ProgressRecord>,
    #[serde(default)]
    pub ai_history: Vec<AiInteraction>,
}

impl Student {
    pub fn new(name: &str, age: u8, level: Level, registered_on: NaiveDate) -> Student {
        return Student {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            age,
            level,
            registered_on,
            attendance: vec![],
            progress: vec![],
            ai_history: vec![],
        };
    }

    /// Validates raw intake form values, returning the trimmed name and the
    /// parsed age.
    pub fn parse_intake(name: &str, age: &str) -> Result<(String, u8)> {
        let name = name.trim();
        let age = age.trim();
        if name.is_empty() || age.is_empty() {
            return Err(Rejection::MissingRequiredFields.into());
        }

        let parsed = match age.parse::<u8>() {
            Ok(val) if (1..=MAX_AGE).contains(&val) => val,
            _ => return Err(Rejection::InvalidAge(age.to_string()).into()),
        };

        return Ok((name.to_string(), parsed));
    }

    pub fn attendance_on(&self, date: NaiveDate) -> Option<&AttendanceRecord> {
        return self.attendance.iter().find(|e| return e.date == date);
    }

    pub fn latest_progress(&self) -> Option<&ProgressRecord> {
        return self.progress.last();
    }

    pub fn mark_attendance(&mut self, status: AttendanceStatus, date: NaiveDate) -> Result<()> {
        if self.attendance_on(date).is_some() {
            return Err(Rejection::AttendanceAlreadyRecorded {
                name: self.name.to_string(),
                date,
            }
            .into());
        }

        self.attendance.push(AttendanceRecord { date, status });
        return Ok(());
    }
}
