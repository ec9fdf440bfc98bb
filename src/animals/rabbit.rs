// 🐰 Rabbit

use super::{Animal, Consumable, Identity, Movable, Profile, Speakable};
use crate::species::Species;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rabbit {
    profile: Profile,
}

impl Rabbit {
    pub fn new(name: impl Into<String>) -> Self {
        Rabbit {
            profile: Profile::new(name, 4, Species::Rabbit),
        }
    }
}

impl Identity for Rabbit {
    fn profile(&self) -> &Profile {
        &self.profile
    }
}

impl Speakable for Rabbit {
    fn speak(&self) -> String {
        format!("{} says: squeak", self.name())
    }
}

impl Movable for Rabbit {}
impl Consumable for Rabbit {}

impl Animal for Rabbit {
    fn perform_special_behaviour(&self) -> String {
        format!("{} nibbles on something...", self.name())
    }
}
