use anyhow::Result;
use chrono::NaiveDate;
use ratatui::text::Line;
use test_utils::insta_snapshot;
use test_utils::roster_fixture;

use super::Views;
use crate::domain::models::Roster;
use crate::domain::models::Summary;

fn as_text(lines: &[Line]) -> String {
    return lines
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| return span.content.to_string())
                .collect::<Vec<String>>()
                .join("");
        })
        .collect::<Vec<String>>()
        .join("\n");
}

fn fixture() -> Result<Roster> {
    return Ok(serde_json::from_str(roster_fixture())?);
}

#[test]
fn it_renders_an_empty_roster() {
    let text = as_text(&Views::roster(&Roster::default(), 0));
    insta::assert_snapshot!(text, @"No students registered yet. Add one from the Students section (F1).");
}

#[test]
fn it_renders_the_roster_with_a_cursor() -> Result<()> {
    let text = as_text(&Views::roster(&fixture()?, 1));
    assert_eq!(
        text,
        [
            "  Ana Torres",
            "    12 years · Level 1",
            "    Registered 2026-10-12",
            "",
            "> Luis Romero",
            "    14 years · Level 3",
            "    Registered 2026-10-13",
        ]
        .join("\n")
    );
    return Ok(());
}

#[test]
fn it_renders_todays_attendance() -> Result<()> {
    let today = NaiveDate::from_ymd_opt(2026, 10, 13).unwrap();
    let text = as_text(&Views::attendance(&fixture()?, 0, today));
    assert_eq!(
        text,
        [
            "> Ana Torres",
            "    Today: Absent · 2 records",
            "",
            "  Luis Romero",
            "    Today: Present · 1 record",
        ]
        .join("\n")
    );
    return Ok(());
}

#[test]
fn it_renders_unmarked_attendance() -> Result<()> {
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let text = as_text(&Views::attendance(&fixture()?, 0, today));
    assert!(text.contains("Today: not marked · 2 records"));
    return Ok(());
}

#[test]
fn it_renders_latest_progress() -> Result<()> {
    let mut roster = fixture()?;
    roster.students[0].progress.clear();
    let text = as_text(&Views::progress(&roster, 0));
    assert_eq!(
        text,
        [
            "> Ana Torres",
            "    Latest: none · 0 records",
            "",
            "  Luis Romero",
            "    Latest: Needs reinforcement (2026-10-14) · 2 records",
        ]
        .join("\n")
    );
    return Ok(());
}

#[test]
fn it_renders_summary_counters() -> Result<()> {
    let text = as_text(&Views::summary(fixture()?.summary()));
    assert_eq!(
        text,
        "Total students: 2\nAttendance records: 3\nProgress records: 3"
    );

    let empty = as_text(&Views::summary(Summary::default()));
    assert_eq!(
        empty,
        "Total students: 0\nAttendance records: 0\nProgress records: 0"
    );
    return Ok(());
}

#[test]
fn it_renders_the_static_planner() {
    let text = as_text(&Views::planner());
    insta_snapshot(|| {
        insta::assert_snapshot!(text);
    });
}
