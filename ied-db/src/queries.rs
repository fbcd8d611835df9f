//! Typed query methods for reading enrollment data from the database.

use crate::models::{LevelCount, YearRange};
use crate::schema::level_columns;
use crate::Database;
use ied_core::enrollment::EnrollmentRecord;
use ied_core::level::EducationLevel;
use rusqlite::Row;

/// Read a non-negative count column.
fn get_count(row: &Row<'_>, idx: usize) -> rusqlite::Result<u64> {
    let value: i64 = row.get(idx)?;
    u64::try_from(value).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(idx, value))
}

impl Database {
    /// All rows, ordered by year.
    pub fn query_enrollment(&self) -> anyhow::Result<Vec<EnrollmentRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT year, girls_kindergarten, boys_kindergarten, girls_grade_school,
                    boys_grade_school, girls_high_school, boys_high_school
             FROM enrollment
             ORDER BY year",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(EnrollmentRecord {
                    year: row.get(0)?,
                    girls_kindergarten: get_count(row, 1)?,
                    boys_kindergarten: get_count(row, 2)?,
                    girls_grade_school: get_count(row, 3)?,
                    boys_grade_school: get_count(row, 4)?,
                    girls_high_school: get_count(row, 5)?,
                    boys_high_school: get_count(row, 6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("[IED] query: query_enrollment returned {} records", rows.len());
        Ok(rows)
    }

    /// Girls and boys counts for one education level, ordered by year.
    ///
    /// This is the two-column slice each chart page plots against the year.
    pub fn query_level(&self, level: EducationLevel) -> anyhow::Result<Vec<LevelCount>> {
        let (girls, boys) = level_columns(level);
        let conn = self.conn.borrow();
        // Column names come from a fixed match, never from input.
        let mut stmt = conn.prepare(&format!(
            "SELECT year, {girls}, {boys} FROM enrollment ORDER BY year"
        ))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(LevelCount {
                    year: row.get(0)?,
                    girls: get_count(row, 1)?,
                    boys: get_count(row, 2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "[IED] query: query_level({}) returned {} records",
            level,
            rows.len()
        );
        Ok(rows)
    }

    /// First and last year in the table, `None` when empty.
    pub fn query_year_range(&self) -> anyhow::Result<Option<YearRange>> {
        let conn = self.conn.borrow();
        let (first, last): (Option<i32>, Option<i32>) = conn.query_row(
            "SELECT MIN(year), MAX(year) FROM enrollment",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(match (first, last) {
            (Some(first), Some(last)) => Some(YearRange { first, last }),
            _ => None,
        })
    }
}
