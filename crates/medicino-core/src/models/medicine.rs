//! Medicines reference models.

use serde::{Deserialize, Serialize};

/// A single entry in the medicines reference catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    /// Medicine name - the unique key
    pub name: String,
    /// What the medicine is for
    pub description: String,
    /// Dosage guidance (e.g., "500-1000mg every 4-6 hours")
    pub dosage: String,
    /// Known side effects
    pub side_effects: String,
    /// Contraindications
    pub contraindications: String,
    /// Reference price
    pub price: f64,
    /// Catalog category (e.g., "Pain Relief", "Antibiotics")
    pub category: String,
}

impl Medicine {
    /// Create a medicine entry with required fields.
    pub fn new(name: String, description: String, category: String) -> Self {
        Self {
            name,
            description,
            dosage: String::new(),
            side_effects: String::new(),
            contraindications: String::new(),
            price: 0.0,
            category,
        }
    }

    /// Case-insensitive substring match against the catalog name, mirroring
    /// the lookup operation's LIKE semantics.
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
