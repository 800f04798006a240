use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;

use super::cycle;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumIter, strum::Display,
)]
pub enum Level {
    #[default]
    #[serde(rename = "Level 1")]
    #[strum(serialize = "Level 1")]
    One,
    #[serde(rename = "Level 2")]
    #[strum(serialize = "Level 2")]
    Two,
    #[serde(rename = "Level 3")]
    #[strum(serialize = "Level 3")]
    Three,
}

impl Level {
    /// Topics covered at this level, as shown in the curriculum planner.
    pub fn curriculum(&self) -> &'static str {
        match self {
            Level::One => return "Operations, fractions, percentages",
            Level::Two => return "Equations, expressions, word problems",
            Level::Three => return "Systems of equations, factoring, Pythagoras",
        }
    }

    pub fn next(self) -> Level {
        return cycle(self, true);
    }

    pub fn previous(self) -> Level {
        return cycle(self, false);
    }
}
