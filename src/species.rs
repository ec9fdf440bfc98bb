// 🐾 Species Registry
// Closed set of animal kinds the factory knows how to build

use crate::error::{Result, ZooError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Species - which concrete variant an animal is bound to
///
/// Serialized (and displayed) as the upper-case tag: `DOG`, `CAT`, `RABBIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Species {
    Dog,
    Cat,
    Rabbit,
}

impl Species {
    /// Every recognized species, in declaration order
    pub const ALL: [Species; 3] = [Species::Dog, Species::Cat, Species::Rabbit];

    /// Upper-case tag used in exports
    pub fn code(&self) -> &'static str {
        match self {
            Species::Dog => "DOG",
            Species::Cat => "CAT",
            Species::Rabbit => "RABBIT",
        }
    }

    /// Parse a tag, ignoring case and surrounding whitespace
    ///
    /// # Examples:
    /// ```
    /// use menagerie::Species;
    /// assert_eq!(Species::from_code("dog").unwrap(), Species::Dog);
    /// assert!(Species::from_code("hamster").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Species> {
        match code.trim().to_uppercase().as_str() {
            "DOG" => Ok(Species::Dog),
            "CAT" => Ok(Species::Cat),
            "RABBIT" => Ok(Species::Rabbit),
            _ => Err(ZooError::UnsupportedSpecies(code.to_string())),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Species {
    type Err = ZooError;

    fn from_str(s: &str) -> Result<Self> {
        Species::from_code(s)
    }
}
