// 🐕 Animal Abstraction - capability traits + concrete variants
//
// Capabilities are split into small traits so callers can ask for only what
// they need (a feeder only needs `Consumable`). `Animal` is the full set.
//
// Behaviours return the line they emit instead of printing it; the caller
// decides where output goes.

pub mod cat;
pub mod dog;
pub mod rabbit;

pub use cat::Cat;
pub use dog::Dog;
pub use rabbit::Rabbit;

use crate::species::Species;

// ============================================================================
// IDENTITY
// ============================================================================

/// Identity record shared by every variant
///
/// Neither `name` nor `legs` is validated: an empty name is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub legs: u32,
    pub species: Species,
}

impl Profile {
    pub fn new(name: impl Into<String>, legs: u32, species: Species) -> Self {
        Profile {
            name: name.into(),
            legs,
            species,
        }
    }
}

/// Access to the identity record; every capability builds on it
pub trait Identity {
    fn profile(&self) -> &Profile;

    fn name(&self) -> &str {
        &self.profile().name
    }

    fn legs(&self) -> u32 {
        self.profile().legs
    }

    fn species(&self) -> Species {
        self.profile().species
    }
}

// ============================================================================
// CAPABILITY TRAITS
// ============================================================================

/// Species-specific utterance (required, no default)
pub trait Speakable: Identity {
    fn speak(&self) -> String;
}

/// Locomotion, described from the leg count unless a variant knows better
pub trait Movable: Identity {
    fn move_about(&self) -> String {
        format!("{} moves somehow using {} legs.", self.name(), self.legs())
    }
}

/// Eating; any food text is accepted, including the empty string
pub trait Consumable: Identity {
    fn eat(&self, food: &str) -> String {
        format!("{} eats {}.", self.name(), food)
    }
}

/// Animal - the full capability set
///
/// Implementors bind their species at construction, so `species()` always
/// matches the concrete type.
pub trait Animal: Speakable + Movable + Consumable + Send + Sync {
    /// Species flavour text
    fn perform_special_behaviour(&self) -> String;
}

impl std::fmt::Debug for dyn Animal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animal")
            .field("name", &self.name())
            .field("legs", &self.legs())
            .field("species", &self.species())
            .finish()
    }
}

/// Run an animal's whole routine, in the order the demo prints it
///
/// Returns: speak, special behaviour, move, then `eat("food")`.
pub fn run_routine(animal: &dyn Animal) -> Vec<String> {
    vec![
        animal.speak(),
        animal.perform_special_behaviour(),
        animal.move_about(),
        animal.eat("food"),
    ]
}
