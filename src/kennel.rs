// 🏠 Kennel
// Address plus the dogs staying there. Dogs only, by type.

use crate::animals::Dog;

#[derive(Debug, Clone)]
pub struct Kennel {
    dogs: Vec<Dog>,
    address: String,
}

impl Kennel {
    pub fn new(address: impl Into<String>) -> Self {
        Kennel {
            dogs: Vec::new(),
            address: address.into(),
        }
    }

    pub fn add_dog(&mut self, dog: Dog) {
        self.dogs.push(dog);
    }

    /// Read-only view, in the order dogs were added
    pub fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    pub fn dog_count(&self) -> usize {
        self.dogs.len()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }
}
