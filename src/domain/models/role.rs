use std::fmt;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Role::User => {
                let username = Config::get(ConfigKey::Username);
                if username.is_empty() {
                    return write!(f, "You");
                }
                return write!(f, "{username}");
            }
            Role::Assistant => return write!(f, "AI"),
        }
    }
}
