//! Diagnosis history operations. The history table is append-only: rows are
//! inserted once and never updated or deleted by this layer.

use rusqlite::{params, Row};

use super::{Database, DbResult};
use crate::models::HistoryEntry;

/// Default number of entries returned by a history listing.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

impl Database {
    /// Append a history entry.
    pub fn append_history(&self, entry: &HistoryEntry) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO diagnosis_history (
                entry_id, user_id, symptoms, diagnosed_condition,
                ayurvedic_remedy, medicine_suggestion, confidence_score,
                user_feedback, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                entry.entry_id,
                entry.user_id,
                entry.symptoms,
                entry.diagnosed_condition,
                entry.ayurvedic_remedy,
                entry.medicine_suggestion,
                entry.confidence,
                entry.user_feedback,
                entry.created_at,
            ],
        )?;
        Ok(())
    }

    /// List the most recent history entries, newest first.
    pub fn list_history(&self, limit: usize) -> DbResult<Vec<HistoryEntry>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT entry_id, user_id, symptoms, diagnosed_condition,
                   ayurvedic_remedy, medicine_suggestion, confidence_score,
                   user_feedback, created_at
            FROM diagnosis_history
            ORDER BY created_at DESC, entry_id
            LIMIT ?
            "#,
        )?;

        let rows = stmt.query_map([limit as i64], map_history_row)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// Number of history entries.
    pub fn count_history(&self) -> DbResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM diagnosis_history", [], |row| {
                row.get(0)
            })?;
        Ok(count as usize)
    }
}

fn map_history_row(row: &Row<'_>) -> rusqlite::Result<HistoryEntry> {
    Ok(HistoryEntry {
        entry_id: row.get(0)?,
        user_id: row.get(1)?,
        symptoms: row.get(2)?,
        diagnosed_condition: row.get(3)?,
        ayurvedic_remedy: row.get(4)?,
        medicine_suggestion: row.get(5)?,
        confidence: row.get(6)?,
        user_feedback: row.get(7)?,
        created_at: row.get(8)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DiagnosisResult;

    fn make_entry(symptoms: &str, created_at: &str) -> HistoryEntry {
        let mut entry =
            HistoryEntry::from_result(symptoms.into(), None, &DiagnosisResult::fallback());
        entry.created_at = created_at.into();
        entry
    }

    #[test]
    fn test_append_and_list() {
        let db = Database::open_in_memory().unwrap();

        db.append_history(&make_entry("fever", "2024-01-01T10:00:00Z"))
            .unwrap();
        db.append_history(&make_entry("cough", "2024-01-02T10:00:00Z"))
            .unwrap();

        let entries = db.list_history(DEFAULT_HISTORY_LIMIT).unwrap();
        assert_eq!(entries.len(), 2);
        // Newest first
        assert_eq!(entries[0].symptoms, "cough");
        assert_eq!(entries[1].symptoms, "fever");
    }

    #[test]
    fn test_list_respects_limit() {
        let db = Database::open_in_memory().unwrap();

        for i in 0..5 {
            db.append_history(&make_entry(
                &format!("symptom-{}", i),
                &format!("2024-01-0{}T10:00:00Z", i + 1),
            ))
            .unwrap();
        }

        let entries = db.list_history(3).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].symptoms, "symptom-4");
    }

    #[test]
    fn test_count() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.count_history().unwrap(), 0);

        db.append_history(&make_entry("fever", "2024-01-01T10:00:00Z"))
            .unwrap();
        assert_eq!(db.count_history().unwrap(), 1);
    }
}
