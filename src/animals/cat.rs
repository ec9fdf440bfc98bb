// 🐱 Cat

use super::{Animal, Consumable, Identity, Movable, Profile, Speakable};
use crate::species::Species;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    profile: Profile,
}

impl Cat {
    pub fn new(name: impl Into<String>) -> Self {
        Cat {
            profile: Profile::new(name, 4, Species::Cat),
        }
    }
}

impl Identity for Cat {
    fn profile(&self) -> &Profile {
        &self.profile
    }
}

impl Speakable for Cat {
    fn speak(&self) -> String {
        format!("{} says: meow", self.name())
    }
}

impl Movable for Cat {}
impl Consumable for Cat {}

impl Animal for Cat {
    fn perform_special_behaviour(&self) -> String {
        format!("{} ignores you (classic).", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cat_speaks() {
        assert_eq!(Cat::new("Ziggy").speak(), "Ziggy says: meow");
    }

    #[test]
    fn test_cat_ignores_you() {
        let line = Cat::new("Ziggy").perform_special_behaviour();
        assert!(line.contains("Ziggy"));
        assert!(line.contains("ignores"));
    }
}
