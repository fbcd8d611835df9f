//! SQL schema for the in-memory enrollment database.

use ied_core::level::EducationLevel;

/// Returns the full SQL schema as a single batch string.
///
/// One table, `enrollment`, keyed by year with one integer column per
/// (level, gender) pair. Column names are the dataset headers in snake case.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS enrollment (
        year INTEGER PRIMARY KEY,
        girls_kindergarten INTEGER NOT NULL,
        boys_kindergarten INTEGER NOT NULL,
        girls_grade_school INTEGER NOT NULL,
        boys_grade_school INTEGER NOT NULL,
        girls_high_school INTEGER NOT NULL,
        boys_high_school INTEGER NOT NULL
    );
    "#
}

/// SQL column names holding the `(girls, boys)` counts for a level.
pub fn level_columns(level: EducationLevel) -> (&'static str, &'static str) {
    match level {
        EducationLevel::Kindergarten => ("girls_kindergarten", "boys_kindergarten"),
        EducationLevel::GradeSchool => ("girls_grade_school", "boys_grade_school"),
        EducationLevel::HighSchool => ("girls_high_school", "boys_high_school"),
    }
}
