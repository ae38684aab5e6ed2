//! Medicino Core Library
//!
//! Symptom diagnosis and medicines reference data, backed by SQLite.
//!
//! # Architecture
//!
//! ```text
//! Symptom text → Tokenization → Overlap scoring over condition table
//!                                        │
//!                              best score > threshold?
//!                               │                  │
//!                              yes                 no
//!                               │                  │
//!                        Condition match     Fallback payload
//!                               └────────┬─────────┘
//!                                        │
//!                             [diagnosis_history append]
//! ```
//!
//! # Core Principle
//!
//! **The system is advisory-only.** Every result, including a confident
//! match, carries guidance to consult a professional; the fallback payload
//! says nothing else.
//!
//! # Modules
//!
//! - [`db`]: SQLite database layer (conditions, medicines, history)
//! - [`models`]: Domain types (Condition, Medicine, DiagnosisResult, etc.)
//! - [`matcher`]: Symptom matcher (tokenizer + overlap scoring)
//! - [`seed`]: Built-in reference data
//! - [`suggest`]: Closest-name suggestions for medicine lookups

pub mod db;
pub mod matcher;
pub mod models;
pub mod seed;
pub mod suggest;

// Re-export commonly used types
pub use db::Database;
pub use matcher::{SymptomMatcher, SCORE_THRESHOLD};
pub use models::{
    Condition, DiagnosisResult, HistoryEntry, Medicine, Severity,
};

use std::sync::{Arc, Mutex};

use db::DEFAULT_HISTORY_LIMIT;

// =========================================================================
// Error Type
// =========================================================================

#[derive(Debug, thiserror::Error)]
pub enum MedicinoError {
    #[error("Database error: {0}")]
    Database(#[from] db::DbError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl<T> From<std::sync::PoisonError<T>> for MedicinoError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        MedicinoError::Database(db::DbError::Constraint(format!("Lock poisoned: {}", e)))
    }
}

pub type MedicinoResult<T> = Result<T, MedicinoError>;

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe service facade over the database and the matcher.
pub struct Medicino {
    db: Arc<Mutex<Database>>,
}

impl Medicino {
    /// Open or create a database at the given path.
    pub fn open(path: &str) -> MedicinoResult<Self> {
        let db = Database::open(path)?;
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
        })
    }

    /// Create an in-memory instance (for testing and demos).
    pub fn open_in_memory() -> MedicinoResult<Self> {
        let db = Database::open_in_memory()?;
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
        })
    }

    /// Load the built-in reference data (conditions and medicines).
    /// Idempotent: records are keyed by name and upserted in place.
    pub fn seed(&self) -> MedicinoResult<()> {
        let db = self.db.lock()?;

        let conditions = seed::default_conditions();
        let medicines = seed::default_medicines();
        for condition in &conditions {
            db.upsert_condition(condition)?;
        }
        for medicine in &medicines {
            db.upsert_medicine(medicine)?;
        }

        tracing::info!(
            conditions = conditions.len(),
            medicines = medicines.len(),
            "seeded reference data"
        );
        Ok(())
    }

    // =========================================================================
    // Diagnosis Operations
    // =========================================================================

    /// Diagnose free-text symptom input and append the outcome to the
    /// history log.
    ///
    /// Empty or whitespace-only text is rejected with
    /// [`MedicinoError::InvalidInput`] before the matcher runs; any other
    /// string yields a result (possibly the fallback payload).
    pub fn diagnose(
        &self,
        symptoms_text: &str,
        user_id: Option<String>,
    ) -> MedicinoResult<DiagnosisResult> {
        if symptoms_text.trim().is_empty() {
            return Err(MedicinoError::InvalidInput("Symptoms are required".into()));
        }

        let db = self.db.lock()?;

        let conditions = db.list_conditions()?;
        let matcher = SymptomMatcher::new(&conditions);
        let result = matcher.diagnose(symptoms_text);

        let entry = HistoryEntry::from_result(symptoms_text.to_string(), user_id, &result);
        db.append_history(&entry)?;

        tracing::info!(
            condition = %result.condition,
            confidence = result.confidence,
            fallback = result.is_fallback(),
            "diagnosis complete"
        );
        Ok(result)
    }

    /// Most recent history entries, newest first.
    pub fn diagnosis_history(&self, limit: Option<usize>) -> MedicinoResult<Vec<HistoryEntry>> {
        let db = self.db.lock()?;
        Ok(db.list_history(limit.unwrap_or(DEFAULT_HISTORY_LIMIT))?)
    }

    // =========================================================================
    // Medicines Operations
    // =========================================================================

    /// Look up a medicine by case-insensitive substring of its name.
    pub fn medicine_info(&self, query: &str) -> MedicinoResult<Option<Medicine>> {
        let db = self.db.lock()?;
        Ok(db.lookup_medicine(query)?)
    }

    /// Suggest the closest catalog name for a query that found nothing.
    pub fn suggest_medicine(&self, query: &str) -> MedicinoResult<Option<String>> {
        let db = self.db.lock()?;
        let medicines = db.list_medicines()?;
        Ok(suggest::closest_medicine(query, &medicines).map(|m| m.name.clone()))
    }

    /// All medicines ordered by name.
    pub fn list_medicines(&self) -> MedicinoResult<Vec<Medicine>> {
        let db = self.db.lock()?;
        Ok(db.list_medicines()?)
    }

    /// All condition records in table order.
    pub fn list_conditions(&self) -> MedicinoResult<Vec<Condition>> {
        let db = self.db.lock()?;
        Ok(db.list_conditions()?)
    }
}
