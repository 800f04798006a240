#[cfg(test)]
#[path = "section_test.rs"]
mod tests;

use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Section {
    Students,
    Attendance,
    Progress,
    Summary,
    Planner,
    TeacherChat,
}

impl Section {
    pub fn parse(text: &str) -> Option<Section> {
        return Section::iter().find(|e| return e.to_string() == text);
    }

    /// Sections are bound to F1..F6 in the order they are declared.
    pub fn from_hotkey(number: u8) -> Option<Section> {
        if number == 0 {
            return None;
        }
        return Section::iter().nth(usize::from(number - 1));
    }

    pub fn hotkey(&self) -> u8 {
        let idx = Section::iter()
            .position(|e| return e == *self)
            .unwrap_or(0);
        return u8::try_from(idx + 1).unwrap_or(u8::MAX);
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Students => return "Students",
            Section::Attendance => return "Attendance",
            Section::Progress => return "Progress",
            Section::Summary => return "Summary",
            Section::Planner => return "Planner",
            Section::TeacherChat => return "Teacher AI",
        }
    }
}
