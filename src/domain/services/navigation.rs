#[cfg(test)]
#[path = "navigation_test.rs"]
mod tests;

use crate::domain::models::cycle;
use crate::domain::models::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Switched,
    /// The teacher chat became (or stayed) active, its view must be synced.
    EnteredChat,
}

/// Exactly one section is visible at a time.
pub struct Navigation {
    active: Section,
}

impl Navigation {
    pub fn new(initial: Section) -> Navigation {
        return Navigation { active: initial };
    }

    pub fn active(&self) -> Section {
        return self.active;
    }

    pub fn is_active(&self, section: Section) -> bool {
        return self.active == section;
    }

    pub fn switch(&mut self, target: Section) -> Transition {
        tracing::debug!(from = %self.active, to = %target, "Switching section");
        self.active = target;

        if target == Section::TeacherChat {
            return Transition::EnteredChat;
        }
        return Transition::Switched;
    }

    pub fn next(&mut self) -> Transition {
        return self.switch(cycle(self.active, true));
    }

    pub fn previous(&mut self) -> Transition {
        return self.switch(cycle(self.active, false));
    }
}
