//! Medicines reference table operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::Medicine;

impl Database {
    /// Insert or update a medicine, keyed by name.
    pub fn upsert_medicine(&self, medicine: &Medicine) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO medicines (
                name, description, dosage, side_effects,
                contraindications, price, category, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, datetime('now'))
            ON CONFLICT(name) DO UPDATE SET
                description = excluded.description,
                dosage = excluded.dosage,
                side_effects = excluded.side_effects,
                contraindications = excluded.contraindications,
                price = excluded.price,
                category = excluded.category,
                updated_at = datetime('now')
            "#,
            params![
                medicine.name,
                medicine.description,
                medicine.dosage,
                medicine.side_effects,
                medicine.contraindications,
                medicine.price,
                medicine.category,
            ],
        )?;
        Ok(())
    }

    /// Get a medicine by exact name.
    pub fn get_medicine(&self, name: &str) -> DbResult<Option<Medicine>> {
        let result = self
            .conn
            .query_row(
                r#"
                SELECT name, description, dosage, side_effects,
                       contraindications, price, category
                FROM medicines
                WHERE name = ?
                "#,
                [name],
                map_medicine_row,
            )
            .optional()?;
        Ok(result)
    }

    /// Look up the first medicine whose name contains the query,
    /// case-insensitively. Matches the reference API's LIKE semantics.
    pub fn lookup_medicine(&self, query: &str) -> DbResult<Option<Medicine>> {
        let pattern = format!("%{}%", query);
        let result = self
            .conn
            .query_row(
                r#"
                SELECT name, description, dosage, side_effects,
                       contraindications, price, category
                FROM medicines
                WHERE name LIKE ?
                ORDER BY name
                LIMIT 1
                "#,
                [pattern],
                map_medicine_row,
            )
            .optional()?;
        Ok(result)
    }

    /// List all medicines ordered by name.
    pub fn list_medicines(&self) -> DbResult<Vec<Medicine>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT name, description, dosage, side_effects,
                   contraindications, price, category
            FROM medicines
            ORDER BY name
            "#,
        )?;

        let rows = stmt.query_map([], map_medicine_row)?;

        let mut medicines = Vec::new();
        for row in rows {
            medicines.push(row?);
        }
        Ok(medicines)
    }

    /// Delete a medicine by exact name.
    pub fn delete_medicine(&self, name: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM medicines WHERE name = ?", [name])?;
        Ok(rows_affected > 0)
    }
}

fn map_medicine_row(row: &Row<'_>) -> rusqlite::Result<Medicine> {
    Ok(Medicine {
        name: row.get(0)?,
        description: row.get(1)?,
        dosage: row.get(2)?,
        side_effects: row.get(3)?,
        contraindications: row.get(4)?,
        price: row.get(5)?,
        category: row.get(6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_medicine(name: &str, category: &str, price: f64) -> Medicine {
        let mut medicine = Medicine::new(name.into(), format!("{} description", name), category.into());
        medicine.dosage = "as directed".into();
        medicine.price = price;
        medicine
    }

    #[test]
    fn test_upsert_and_get() {
        let db = Database::open_in_memory().unwrap();

        let medicine = make_medicine("Paracetamol", "Pain Relief", 5.99);
        db.upsert_medicine(&medicine).unwrap();

        let retrieved = db.get_medicine("Paracetamol").unwrap().unwrap();
        assert_eq!(retrieved.name, "Paracetamol");
        assert_eq!(retrieved.category, "Pain Relief");
        assert_eq!(retrieved.price, 5.99);
    }

    #[test]
    fn test_upsert_updates() {
        let db = Database::open_in_memory().unwrap();

        let mut medicine = make_medicine("Paracetamol", "Pain Relief", 5.99);
        db.upsert_medicine(&medicine).unwrap();

        medicine.price = 6.49;
        db.upsert_medicine(&medicine).unwrap();

        let retrieved = db.get_medicine("Paracetamol").unwrap().unwrap();
        assert_eq!(retrieved.price, 6.49);
        assert_eq!(db.list_medicines().unwrap().len(), 1);
    }

    #[test]
    fn test_lookup_substring() {
        let db = Database::open_in_memory().unwrap();

        db.upsert_medicine(&make_medicine("Paracetamol", "Pain Relief", 5.99))
            .unwrap();
        db.upsert_medicine(&make_medicine("Ibuprofen", "Pain Relief", 7.99))
            .unwrap();

        // Partial name, case-insensitive
        let found = db.lookup_medicine("paraceta").unwrap().unwrap();
        assert_eq!(found.name, "Paracetamol");

        let found = db.lookup_medicine("IBUPRO").unwrap().unwrap();
        assert_eq!(found.name, "Ibuprofen");

        assert!(db.lookup_medicine("aspirin").unwrap().is_none());
    }

    #[test]
    fn test_list_sorted_by_name() {
        let db = Database::open_in_memory().unwrap();

        db.upsert_medicine(&make_medicine("Ibuprofen", "Pain Relief", 7.99))
            .unwrap();
        db.upsert_medicine(&make_medicine("Aspirin", "Pain Relief", 4.99))
            .unwrap();
        db.upsert_medicine(&make_medicine("Paracetamol", "Pain Relief", 5.99))
            .unwrap();

        let names: Vec<String> = db
            .list_medicines()
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Aspirin", "Ibuprofen", "Paracetamol"]);
    }

    #[test]
    fn test_delete() {
        let db = Database::open_in_memory().unwrap();

        db.upsert_medicine(&make_medicine("Aspirin", "Pain Relief", 4.99))
            .unwrap();
        assert!(db.delete_medicine("Aspirin").unwrap());
        assert!(!db.delete_medicine("Aspirin").unwrap());
        assert!(db.get_medicine("Aspirin").unwrap().is_none());
    }
}
