//! Condition reference table operations.

use rusqlite::{params, Row};

use super::{Database, DbError, DbResult};
use crate::models::{Condition, Severity};

impl Database {
    /// Insert or update a condition record, keyed by name. An update keeps
    /// the original row id, so table order is stable across re-seeds.
    pub fn upsert_condition(&self, condition: &Condition) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO conditions (
                condition_name, symptoms, ayurvedic_remedy, medicine_suggestion,
                severity_level, description, precautions
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(condition_name) DO UPDATE SET
                symptoms = excluded.symptoms,
                ayurvedic_remedy = excluded.ayurvedic_remedy,
                medicine_suggestion = excluded.medicine_suggestion,
                severity_level = excluded.severity_level,
                description = excluded.description,
                precautions = excluded.precautions
            "#,
            params![
                condition.condition_name,
                condition.symptoms,
                condition.ayurvedic_remedy,
                condition.medicine_suggestion,
                condition.severity.as_str(),
                condition.description,
                condition.precautions,
            ],
        )?;
        Ok(())
    }

    /// List all condition records in table order. The matcher's tie-break
    /// depends on this ordering.
    pub fn list_conditions(&self) -> DbResult<Vec<Condition>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, condition_name, symptoms, ayurvedic_remedy,
                   medicine_suggestion, severity_level, description, precautions
            FROM conditions
            ORDER BY id
            "#,
        )?;

        let rows = stmt.query_map([], map_condition_row)?;

        let mut conditions = Vec::new();
        for row in rows {
            conditions.push(row??);
        }
        Ok(conditions)
    }

    /// Number of condition records.
    pub fn count_conditions(&self) -> DbResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM conditions", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn map_condition_row(row: &Row<'_>) -> rusqlite::Result<Result<Condition, DbError>> {
    let severity_str: String = row.get(5)?;
    Ok(match Severity::parse(&severity_str) {
        Some(severity) => Ok(Condition {
            id: row.get(0)?,
            condition_name: row.get(1)?,
            symptoms: row.get(2)?,
            ayurvedic_remedy: row.get(3)?,
            medicine_suggestion: row.get(4)?,
            severity,
            description: row.get(6)?,
            precautions: row.get(7)?,
        }),
        None => Err(DbError::Constraint(format!(
            "Unknown severity level: {}",
            severity_str
        ))),
    })
}
