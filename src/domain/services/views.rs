#[cfg(test)]
#[path = "views_test.rs"]
mod tests;

use chrono::NaiveDate;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use strum::IntoEnumIterator;

use crate::domain::models::Level;
use crate::domain::models::Roster;
use crate::domain::models::Student;
use crate::domain::models::Summary;

/// Projections of the current state into terminal lines. Every call rebuilds
/// the full view from scratch.
pub struct Views {}

impl Views {
    fn empty_roster() -> Vec<Line<'static>> {
        return vec![Line::from(Span::styled(
            "No students registered yet. Add one from the Students section (F1).",
            Style::default().add_modifier(Modifier::ITALIC),
        ))];
    }

    fn card_title(student: &Student, selected: bool) -> Line<'static> {
        if selected {
            return Line::from(Span::styled(
                format!("> {}", student.name),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }

        return Line::from(format!("  {}", student.name));
    }

    fn cards<F>(roster: &Roster, cursor: usize, details: F) -> Vec<Line<'static>>
    where
        F: Fn(&Student) -> Vec<String>,
    {
        if roster.is_empty() {
            return Views::empty_roster();
        }

        let mut lines = vec![];
        for (idx, student) in roster.students.iter().enumerate() {
            if idx > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Views::card_title(student, idx == cursor));
            for detail in details(student) {
                lines.push(Line::from(format!("    {detail}")));
            }
        }

        return lines;
    }

    fn records(count: usize) -> String {
        if count == 1 {
            return "1 record".to_string();
        }
        return format!("{count} records");
    }

    pub fn roster(roster: &Roster, cursor: usize) -> Vec<Line<'static>> {
        return Views::cards(roster, cursor, |student| {
            return vec![
                format!("{} years · {}", student.age, student.level),
                format!("Registered {}", student.registered_on),
            ];
        });
    }

    pub fn attendance(roster: &Roster, cursor: usize, today: NaiveDate) -> Vec<Line<'static>> {
        return Views::cards(roster, cursor, |student| {
            let mut status = "not marked".to_string();
            if let Some(record) = student.attendance_on(today) {
                status = record.status.to_string();
            }

            return vec![format!(
                "Today: {status} · {}",
                Views::records(student.attendance.len())
            )];
        });
    }

    pub fn progress(roster: &Roster, cursor: usize) -> Vec<Line<'static>> {
        return Views::cards(roster, cursor, |student| {
            let mut latest = "none".to_string();
            if let Some(record) = student.latest_progress() {
                latest = format!("{} ({})", record.status, record.date);
            }

            return vec![format!(
                "Latest: {latest} · {}",
                Views::records(student.progress.len())
            )];
        });
    }

    pub fn summary(summary: Summary) -> Vec<Line<'static>> {
        return summary
            .to_string()
            .lines()
            .map(|e| return Line::from(e.to_string()))
            .collect();
    }

    pub fn planner() -> Vec<Line<'static>> {
        let mut lines = vec![];
        for level in Level::iter() {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                level.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!("    {}", level.curriculum())));
        }

        return lines;
    }
}
