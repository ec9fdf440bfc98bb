// 🐶 Dog

use super::{Animal, Consumable, Identity, Movable, Profile, Speakable};
use crate::species::Species;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    profile: Profile,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Dog {
            profile: Profile::new(name, 4, Species::Dog),
        }
    }
}

impl Identity for Dog {
    fn profile(&self) -> &Profile {
        &self.profile
    }
}

impl Speakable for Dog {
    fn speak(&self) -> String {
        format!("{} says: woof", self.name())
    }
}

impl Movable for Dog {}
impl Consumable for Dog {}

impl Animal for Dog {
    fn perform_special_behaviour(&self) -> String {
        format!("{} chases its tail.", self.name())
    }
}
