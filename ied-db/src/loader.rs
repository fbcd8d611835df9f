//! CSV data loading for populating the in-memory SQLite database.
//!
//! Expected format (with headers):
//! `Years,Girls Kindergarten,Boys Kindergarten,Girls Grade School,Boys Grade School,Girls High School,Boys High School`

use crate::Database;
use anyhow::Context;
use ied_core::enrollment::EnrollmentRecord;
use rusqlite::params;

fn to_sql_count(value: u64) -> anyhow::Result<i64> {
    i64::try_from(value).with_context(|| format!("count {} does not fit in SQLite INTEGER", value))
}

impl Database {
    /// Load enrollment rows from a CSV string.
    ///
    /// A CSV that repeats a year is rejected before anything is written.
    /// Across separate loads rows are upserted by year, so loading the same
    /// data twice leaves the table unchanged.
    ///
    /// # Example CSV
    /// ```text
    /// Years,Girls Kindergarten,Boys Kindergarten,Girls Grade School,Boys Grade School,Girls High School,Boys High School
    /// 1990,120,130,3000,3300,900,1100
    /// ```
    pub fn load_enrollment(&self, csv_data: &str) -> anyhow::Result<()> {
        let records = EnrollmentRecord::parse_enrollment_csv(csv_data)?;
        self.load_records(&records)
    }

    /// Insert already-parsed records.
    pub fn load_records(&self, records: &[EnrollmentRecord]) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut count = 0u32;
        for r in records {
            conn.execute(
                "INSERT OR REPLACE INTO enrollment
                 (year, girls_kindergarten, boys_kindergarten, girls_grade_school,
                  boys_grade_school, girls_high_school, boys_high_school)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    r.year,
                    to_sql_count(r.girls_kindergarten)?,
                    to_sql_count(r.boys_kindergarten)?,
                    to_sql_count(r.girls_grade_school)?,
                    to_sql_count(r.boys_grade_school)?,
                    to_sql_count(r.girls_high_school)?,
                    to_sql_count(r.boys_high_school)?,
                ],
            )?;
            count += 1;
        }
        log::info!("[IED] loader: Loaded {} enrollment rows", count);
        Ok(())
    }
}
