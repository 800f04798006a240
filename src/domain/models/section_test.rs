use strum::VariantNames;

use super::Section;

#[test]
fn it_parses_section_ids() {
    assert_eq!(Section::parse("students"), Some(Section::Students));
    assert_eq!(Section::parse("teacher-chat"), Some(Section::TeacherChat));
    assert_eq!(Section::parse("TeacherChat"), None);
    assert_eq!(Section::parse(""), None);
}

#[test]
fn it_lists_ids_in_kebab_case() {
    assert_eq!(
        Section::VARIANTS,
        [
            "students",
            "attendance",
            "progress",
            "summary",
            "planner",
            "teacher-chat"
        ]
    );
}

#[test]
fn it_maps_hotkeys_both_ways() {
    assert_eq!(Section::from_hotkey(1), Some(Section::Students));
    assert_eq!(Section::from_hotkey(6), Some(Section::TeacherChat));
    assert_eq!(Section::from_hotkey(0), None);
    assert_eq!(Section::from_hotkey(7), None);
    assert_eq!(Section::Planner.hotkey(), 5);
}
