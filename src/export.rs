// 💾 Animal Export
// Renders animals as a JSON array and writes it to disk
//
// Format (two-space indent, fields in declaration order):
//   [
//     {
//       "name": "Loki",
//       "species": "DOG",
//       "legs": 4
//     }
//   ]

use crate::animals::{Animal, Identity};
use crate::error::{Result, ZooError};
use crate::species::Species;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// One exported block. Field order here is the field order on disk.
#[derive(Debug, Serialize)]
struct AnimalRecord<'a> {
    name: &'a str,
    species: Species,
    legs: u32,
}

impl<'a> From<&'a dyn Animal> for AnimalRecord<'a> {
    fn from(animal: &'a dyn Animal) -> Self {
        AnimalRecord {
            name: animal.name(),
            species: animal.species(),
            legs: animal.legs(),
        }
    }
}

/// Render animals in input order; no sorting is applied
///
/// Serializing these records cannot fail in practice. The `Result` stays so
/// `save_animals_to_file` can chain render and write with `and_then`.
pub fn render_animals(animals: &[Box<dyn Animal>]) -> Result<String> {
    let records: Vec<AnimalRecord> = animals
        .iter()
        .map(|a| AnimalRecord::from(a.as_ref()))
        .collect();

    let mut text = serde_json::to_string_pretty(&records)?;
    text.push('\n');
    Ok(text)
}

/// Single whole-file write. No temp file, no rename.
pub fn write_animals(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| ZooError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Render + write, reporting failure instead of propagating it
///
/// On error the problem goes to stderr and the caller carries on; the return
/// value only tells whether the file was written.
pub fn save_animals_to_file(path: &Path, animals: &[Box<dyn Animal>]) -> bool {
    let outcome = render_animals(animals).and_then(|text| write_animals(path, &text));

    match outcome {
        Ok(()) => {
            info!(path = %path.display(), count = animals.len(), "animals saved");
            println!("Saved animals to {}", path.display());
            true
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "could not save animals");
            eprintln!("Problem writing animals: {}", e);
            false
        }
    }
}
