use anyhow::Result;
use chrono::NaiveDate;

use super::AiContentType;
use super::AiInteraction;
use super::AttendanceStatus;
use super::ProgressStatus;
use super::Student;
use crate::domain::models::Level;
use crate::domain::models::Rejection;

fn date(day: u32) -> NaiveDate {
    return NaiveDate::from_ymd_opt(2026, 10, day).unwrap();
}

#[test]
fn it_creates_a_student_with_empty_records() {
    let student = Student::new("Ana", 12, Level::Two, date(18));

    assert_eq!(student.name, "Ana");
    assert_eq!(student.age, 12);
    assert_eq!(student.level, Level::Two);
    assert_eq!(student.registered_on, date(18));
    assert!(student.attendance.is_empty());
    assert!(student.progress.is_empty());
    assert!(student.ai_history.is_empty());
}

#[test]
fn it_creates_unique_ids() {
    let first = Student::new("Ana", 12, Level::One, date(18));
    let second = Student::new("Ana", 12, Level::One, date(18));
    assert_ne!(first.id, second.id);
}

#[test]
fn it_parses_intake_trimming_values() -> Result<()> {
    let (name, age) = Student::parse_intake("  Ana Torres ", " 12 ")?;
    assert_eq!(name, "Ana Torres");
    assert_eq!(age, 12);
    return Ok(());
}

#[test]
fn it_rejects_intake_with_missing_fields() {
    for (name, age) in [("", "12"), ("Ana", ""), ("   ", "  ")] {
        let err = Student::parse_intake(name, age).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Rejection>(),
            Some(&Rejection::MissingRequiredFields)
        );
    }
}

#[test]
fn it_rejects_intake_with_invalid_age() {
    for age in ["twelve", "0", "121", "-3", "12.5"] {
        let err = Student::parse_intake("Ana", age).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Rejection>(),
            Some(&Rejection::InvalidAge(age.to_string()))
        );
    }
}

#[test]
fn it_marks_attendance_once_per_day() -> Result<()> {
    let mut student = Student::new("Ana", 12, Level::One, date(18));
    student.mark_attendance(AttendanceStatus::Present, date(18))?;

    let err = student
        .mark_attendance(AttendanceStatus::Absent, date(18))
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Attendance for Ana was already recorded on 2026-10-18.");

    assert_eq!(student.attendance.len(), 1);
    assert_eq!(
        student.attendance_on(date(18)).unwrap().status,
        AttendanceStatus::Present
    );
    return Ok(());
}

#[test]
fn it_marks_attendance_on_different_days() -> Result<()> {
    let mut student = Student::new("Ana", 12, Level::One, date(18));
    student.mark_attendance(AttendanceStatus::Present, date(18))?;
    student.mark_attendance(AttendanceStatus::Absent, date(19))?;

    assert_eq!(student.attendance.len(), 2);
    assert!(student.attendance_on(date(20)).is_none());
    return Ok(());
}

#[test]
fn it_returns_latest_progress() {
    let mut student = Student::new("Ana", 12, Level::One, date(18));
    assert!(student.latest_progress().is_none());

    student.progress.push(super::ProgressRecord {
        date: date(18),
        status: ProgressStatus::Mastered,
    });
    student.progress.push(super::ProgressRecord {
        date: date(18),
        status: ProgressStatus::NeedsReinforcement,
    });

    assert_eq!(
        student.latest_progress().unwrap().status,
        ProgressStatus::NeedsReinforcement
    );
}

#[test]
fn it_simulates_ai_content() {
    let interaction = AiInteraction::simulate("Ana", AiContentType::Quiz, "fractions", date(18));

    assert_eq!(interaction.topic, "fractions");
    assert_eq!(interaction.content_type, AiContentType::Quiz);
    insta::assert_snapshot!(interaction.content, @r###"AI simulation: generating quiz about "fractions" for Ana"###);
}

#[test]
fn it_serializes_statuses_with_display_names() -> Result<()> {
    let payload = serde_json::to_string(&[
        ProgressStatus::Mastered,
        ProgressStatus::InProgress,
        ProgressStatus::NeedsReinforcement,
    ])?;
    assert_eq!(
        payload,
        r#"["Mastered","In progress","Needs reinforcement"]"#
    );
    assert_eq!(ProgressStatus::InProgress.to_string(), "In progress");
    assert_eq!(
        serde_json::to_string(&Level::Three)?,
        r#""Level 3""#
    );
    return Ok(());
}
