// 🏭 Animal Factory
// Single construction point mapping a species tag to a concrete variant

use crate::animals::{Animal, Cat, Dog, Rabbit};
use crate::error::Result;
use crate::species::Species;
use tracing::debug;

/// Build the animal variant bound to `species`
///
/// Factory pattern: returns `Box<dyn Animal>` so callers never name the
/// concrete type. The match is exhaustive, so this cannot fail.
///
/// # Example:
/// ```
/// use menagerie::{create_animal, Species, Speakable};
/// let dog = create_animal(Species::Dog, "Buddy");
/// assert_eq!(dog.speak(), "Buddy says: woof");
/// ```
pub fn create_animal(species: Species, name: impl Into<String>) -> Box<dyn Animal> {
    let name = name.into();
    debug!(species = %species, name = %name, "creating animal");

    match species {
        Species::Dog => Box::new(Dog::new(name)),
        Species::Cat => Box::new(Cat::new(name)),
        Species::Rabbit => Box::new(Rabbit::new(name)),
    }
}

/// Build an animal from a textual tag (`"dog"`, `"CAT"`, ...)
///
/// Fails with `UnsupportedSpecies` for anything outside the enumeration; no
/// animal is constructed in that case.
pub fn create_animal_from_code(code: &str, name: impl Into<String>) -> Result<Box<dyn Animal>> {
    let species = Species::from_code(code)?;
    Ok(create_animal(species, name))
}
