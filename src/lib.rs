// Menagerie - Core Library
// Species, animals, factory, export, and the small demo helpers around them

pub mod animals;
pub mod config;
pub mod error;
pub mod export;
pub mod factory;
pub mod kennel;
pub mod report;
pub mod scheduler;
pub mod species;
pub mod tax;

// Re-export commonly used types
pub use animals::{
    run_routine, Animal, Cat, Consumable, Dog, Identity, Movable, Profile, Rabbit, Speakable,
};
pub use config::ZooConfig;
pub use error::{Result, ZooError};
pub use export::{render_animals, save_animals_to_file, write_animals};
pub use factory::{create_animal, create_animal_from_code};
pub use kennel::Kennel;
pub use report::StatusReport;
pub use scheduler::{BackgroundScheduler, ShutdownOutcome};
pub use species::Species;
pub use tax::Country;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
