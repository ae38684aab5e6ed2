//! SQLite schema definition.

/// Complete database schema for medicino.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Conditions (read-only reference data)
-- ============================================================================

CREATE TABLE IF NOT EXISTS conditions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    condition_name TEXT UNIQUE NOT NULL,
    symptoms TEXT NOT NULL,                       -- comma-separated symptom list
    ayurvedic_remedy TEXT NOT NULL DEFAULT '',
    medicine_suggestion TEXT NOT NULL DEFAULT '',
    severity_level TEXT NOT NULL DEFAULT 'unknown'
        CHECK (severity_level IN ('mild', 'moderate', 'severe', 'unknown')),
    description TEXT NOT NULL DEFAULT '',
    precautions TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- ============================================================================
-- Medicines (read-only reference data)
-- ============================================================================

CREATE TABLE IF NOT EXISTS medicines (
    name TEXT PRIMARY KEY,
    description TEXT NOT NULL DEFAULT '',
    dosage TEXT NOT NULL DEFAULT '',
    side_effects TEXT NOT NULL DEFAULT '',
    contraindications TEXT NOT NULL DEFAULT '',
    price REAL NOT NULL DEFAULT 0,
    category TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_medicines_category ON medicines(category);

-- ============================================================================
-- Diagnosis History (Append-Only)
-- ============================================================================

CREATE TABLE IF NOT EXISTS diagnosis_history (
    entry_id TEXT PRIMARY KEY,
    user_id TEXT,                                -- NULL for anonymous requests
    symptoms TEXT NOT NULL,
    diagnosed_condition TEXT NOT NULL,
    ayurvedic_remedy TEXT NOT NULL DEFAULT '',
    medicine_suggestion TEXT NOT NULL DEFAULT '',
    confidence_score REAL NOT NULL DEFAULT 0
        CHECK (confidence_score >= 0 AND confidence_score <= 100),
    user_feedback TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_history_created ON diagnosis_history(created_at);
CREATE INDEX IF NOT EXISTS idx_history_user ON diagnosis_history(user_id);
"#;
