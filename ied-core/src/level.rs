use serde::{Deserialize, Serialize};
use std::fmt;

/// Column holding the calendar year of each row.
pub const YEAR_COLUMN: &str = "Years";

/// The three education levels charted by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Kindergarten,
    GradeSchool,
    HighSchool,
}

/// Gender split used by every education level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Girls,
    Boys,
}

impl Gender {
    /// Series order within a grouped bar: girls first, then boys.
    pub const ALL: [Gender; 2] = [Gender::Girls, Gender::Boys];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Girls => "Girls",
            Gender::Boys => "Boys",
        }
    }
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 3] = [
        EducationLevel::Kindergarten,
        EducationLevel::GradeSchool,
        EducationLevel::HighSchool,
    ];

    /// Human-readable name, also used as the sidebar link text.
    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::Kindergarten => "Kindergarten",
            EducationLevel::GradeSchool => "Grade School",
            EducationLevel::HighSchool => "High School",
        }
    }

    /// Dataset column holding the count for this level and gender.
    pub fn column(&self, gender: Gender) -> &'static str {
        match (self, gender) {
            (EducationLevel::Kindergarten, Gender::Girls) => "Girls Kindergarten",
            (EducationLevel::Kindergarten, Gender::Boys) => "Boys Kindergarten",
            (EducationLevel::GradeSchool, Gender::Girls) => "Girls Grade School",
            (EducationLevel::GradeSchool, Gender::Boys) => "Boys Grade School",
            (EducationLevel::HighSchool, Gender::Girls) => "Girls High School",
            (EducationLevel::HighSchool, Gender::Boys) => "Boys High School",
        }
    }

    /// The `[girls, boys]` column pair plotted for this level.
    pub fn columns(&self) -> [&'static str; 2] {
        [self.column(Gender::Girls), self.column(Gender::Boys)]
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every column the dashboard reads, year first.
pub fn required_columns() -> Vec<&'static str> {
    let mut columns = vec![YEAR_COLUMN];
    for level in EducationLevel::ALL {
        columns.extend(level.columns());
    }
    columns
}
