use crate::level::{required_columns, EducationLevel, Gender};
use anyhow::Context;
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One year of student enrollment in Iran, split by level and gender.
///
/// Field names map one-to-one onto the dataset headers, e.g.
/// `Years,Girls Kindergarten,Boys Kindergarten,...`.
///
/// Source: "Iranian Students from 1968 to 2017" (Chubak Bidpaa, Kaggle),
/// with Iranian calendar years converted to Gregorian years.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    #[serde(rename = "Years")]
    pub year: i32,
    #[serde(rename = "Girls Kindergarten")]
    pub girls_kindergarten: u64,
    #[serde(rename = "Boys Kindergarten")]
    pub boys_kindergarten: u64,
    #[serde(rename = "Girls Grade School")]
    pub girls_grade_school: u64,
    #[serde(rename = "Boys Grade School")]
    pub boys_grade_school: u64,
    #[serde(rename = "Girls High School")]
    pub girls_high_school: u64,
    #[serde(rename = "Boys High School")]
    pub boys_high_school: u64,
}

impl EnrollmentRecord {
    /// Count for one level and gender.
    pub fn count(&self, level: EducationLevel, gender: Gender) -> u64 {
        match (level, gender) {
            (EducationLevel::Kindergarten, Gender::Girls) => self.girls_kindergarten,
            (EducationLevel::Kindergarten, Gender::Boys) => self.boys_kindergarten,
            (EducationLevel::GradeSchool, Gender::Girls) => self.girls_grade_school,
            (EducationLevel::GradeSchool, Gender::Boys) => self.boys_grade_school,
            (EducationLevel::HighSchool, Gender::Girls) => self.girls_high_school,
            (EducationLevel::HighSchool, Gender::Boys) => self.boys_high_school,
        }
    }

    /// Parse a CSV string of enrollment data into records.
    ///
    /// The header row must contain every column in
    /// [`required_columns`](crate::level::required_columns); extra columns
    /// are ignored and column order does not matter. Each year may appear
    /// only once. Rows are returned in file order.
    pub fn parse_enrollment_csv(csv_object: &str) -> anyhow::Result<Vec<EnrollmentRecord>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(csv_object.as_bytes());

        let headers = rdr.headers()?.clone();
        let missing: Vec<&str> = required_columns()
            .into_iter()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();
        if !missing.is_empty() {
            anyhow::bail!(
                "enrollment CSV is missing required column(s): {}",
                missing.join(", ")
            );
        }

        let mut records = Vec::new();
        let mut seen: HashMap<i32, usize> = HashMap::new();
        for (index, row) in rdr.deserialize::<EnrollmentRecord>().enumerate() {
            // +2: one for the header row, one for 1-based line numbers
            let line = index + 2;
            let record = row.with_context(|| format!("invalid enrollment row on line {}", line))?;
            if let Some(first) = seen.insert(record.year, line) {
                anyhow::bail!(
                    "duplicate year {} on lines {} and {}",
                    record.year,
                    first,
                    line
                );
            }
            records.push(record);
        }
        log::info!("[IED] enrollment: parsed {} records", records.len());
        Ok(records)
    }
}

/// Read and parse an enrollment CSV file from disk.
pub fn read_enrollment_csv(path: impl AsRef<Path>) -> anyhow::Result<Vec<EnrollmentRecord>> {
    let path = path.as_ref();
    let csv_data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    EnrollmentRecord::parse_enrollment_csv(&csv_data)
        .with_context(|| format!("failed to parse dataset {}", path.display()))
}

/// Which file the dashboard embeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// The real dataset
    Dataset(PathBuf),
    /// Synthetic sample rows, only when the caller opted in
    Sample(PathBuf),
}

impl DatasetSource {
    pub fn path(&self) -> &Path {
        match self {
            DatasetSource::Dataset(path) | DatasetSource::Sample(path) => path,
        }
    }
}

/// Pick the dataset file to use.
///
/// An `explicit` path must exist. Otherwise `default` is used when present,
/// then `sample` if one was given. A missing dataset with no sample is an
/// error; nothing falls back silently.
pub fn locate_dataset(
    explicit: Option<&Path>,
    default: &Path,
    sample: Option<&Path>,
) -> anyhow::Result<DatasetSource> {
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("dataset {} does not exist", path.display());
        }
        return Ok(DatasetSource::Dataset(path.to_path_buf()));
    }
    if default.exists() {
        return Ok(DatasetSource::Dataset(default.to_path_buf()));
    }
    match sample {
        Some(sample) if sample.exists() => Ok(DatasetSource::Sample(sample.to_path_buf())),
        Some(sample) => anyhow::bail!(
            "no dataset at {} and no sample at {}",
            default.display(),
            sample.display()
        ),
        None => anyhow::bail!("no enrollment dataset at {}", default.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_CSV: &str = "\
Years,Girls Kindergarten,Boys Kindergarten,Girls Grade School,Boys Grade School,Girls High School,Boys High School
1990,120,130,3000,3300,900,1100
1991,125,128,3100,3350,950,1120
";

    #[test]
    fn test_parse_enrollment_csv() {
        let records = EnrollmentRecord::parse_enrollment_csv(SAMPLE_CSV).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year, 1990);
        assert_eq!(records[0].girls_kindergarten, 120);
        assert_eq!(records[1].boys_high_school, 1120);
    }

    #[test]
    fn test_count_by_level_and_gender() {
        let records = EnrollmentRecord::parse_enrollment_csv(SAMPLE_CSV).unwrap();
        let first = &records[0];
        assert_eq!(first.count(EducationLevel::Kindergarten, Gender::Boys), 130);
        assert_eq!(first.count(EducationLevel::GradeSchool, Gender::Girls), 3000);
        assert_eq!(first.count(EducationLevel::HighSchool, Gender::Boys), 1100);
    }

    #[test]
    fn test_parse_ignores_extra_columns_and_order() {
        let csv_data = "\
Boys High School,Notes,Years,Girls High School,Boys Grade School,Girls Grade School,Boys Kindergarten,Girls Kindergarten
7,x,2001,6,5,4,3,2
";
        let records = EnrollmentRecord::parse_enrollment_csv(csv_data).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, 2001);
        assert_eq!(records[0].girls_kindergarten, 2);
        assert_eq!(records[0].boys_high_school, 7);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let csv_data = "\
Years, Girls Kindergarten ,Boys Kindergarten,Girls Grade School,Boys Grade School,Girls High School,Boys High School
 1990 , 1 ,2,3,4,5,6
";
        let records = EnrollmentRecord::parse_enrollment_csv(csv_data).unwrap();
        assert_eq!(records[0].year, 1990);
        assert_eq!(records[0].girls_kindergarten, 1);
    }

    #[test]
    fn test_parse_missing_column_is_error() {
        let csv_data = "Years,Girls Kindergarten,Boys Kindergarten\n1990,1,2\n";
        let err = EnrollmentRecord::parse_enrollment_csv(csv_data).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Girls Grade School"), "got: {}", message);
        assert!(message.contains("Boys High School"), "got: {}", message);
        assert!(!message.contains("Years"), "got: {}", message);
    }

    #[test]
    fn test_parse_non_numeric_count_is_error() {
        let csv_data = "\
Years,Girls Kindergarten,Boys Kindergarten,Girls Grade School,Boys Grade School,Girls High School,Boys High School
1990,lots,2,3,4,5,6
";
        let err = EnrollmentRecord::parse_enrollment_csv(csv_data).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_parse_duplicate_year_is_error() {
        let csv_data = "\
Years,Girls Kindergarten,Boys Kindergarten,Girls Grade School,Boys Grade School,Girls High School,Boys High School
1990,1,2,3,4,5,6
1991,1,2,3,4,5,6
1990,9,9,9,9,9,9
";
        let err = EnrollmentRecord::parse_enrollment_csv(csv_data).unwrap_err();
        assert_eq!(err.to_string(), "duplicate year 1990 on lines 2 and 4");
    }

    #[test]
    fn test_parse_header_only() {
        let csv_data = "Years,Girls Kindergarten,Boys Kindergarten,Girls Grade School,Boys Grade School,Girls High School,Boys High School\n";
        let records = EnrollmentRecord::parse_enrollment_csv(csv_data).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_enrollment_csv_twice_is_identical() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        let first = read_enrollment_csv(file.path()).unwrap();
        let second = read_enrollment_csv(file.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_locate_explicit_missing_is_error_even_with_sample() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join("iranian_students.csv");
        let sample = dir.path().join("sample.csv");
        std::fs::write(&default, SAMPLE_CSV).unwrap();
        std::fs::write(&sample, SAMPLE_CSV).unwrap();

        let explicit = dir.path().join("nonexistent.csv");
        let err = locate_dataset(Some(&explicit), &default, Some(&sample)).unwrap_err();
        assert!(err.to_string().contains("nonexistent.csv"));
    }

    #[test]
    fn test_locate_missing_default_without_sample_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join("iranian_students.csv");
        assert!(locate_dataset(None, &default, None).is_err());
    }

    #[test]
    fn test_locate_prefers_dataset_over_sample() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join("iranian_students.csv");
        let sample = dir.path().join("sample.csv");
        std::fs::write(&sample, SAMPLE_CSV).unwrap();

        assert_eq!(
            locate_dataset(None, &default, Some(&sample)).unwrap(),
            DatasetSource::Sample(sample.clone())
        );

        std::fs::write(&default, SAMPLE_CSV).unwrap();
        let found = locate_dataset(None, &default, Some(&sample)).unwrap();
        assert_eq!(found, DatasetSource::Dataset(default.clone()));
        assert_eq!(found.path(), default.as_path());
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        let err = read_enrollment_csv(&path).unwrap_err();
        assert!(err.to_string().contains("nope.csv"));
    }
}
