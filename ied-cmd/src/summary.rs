//! Per-level enrollment summary.

use crate::open_dataset;
use ied_core::level::EducationLevel;
use ied_data::summary::LevelSummary;
use ied_db::Database;

/// Summaries for all three levels, in sidebar order.
pub fn summarize(db: &Database) -> anyhow::Result<Vec<LevelSummary>> {
    EducationLevel::ALL
        .iter()
        .map(|level| -> anyhow::Result<LevelSummary> {
            Ok(LevelSummary::from_counts(*level, &db.query_level(*level)?))
        })
        .collect()
}

pub fn run_summary(data: &str) -> anyhow::Result<()> {
    let db = open_dataset(data)?;
    if let Some(range) = db.query_year_range()? {
        println!("Enrollment {}-{} ({})", range.first, range.last, data);
    }
    for summary in summarize(&db)? {
        println!("{}", summary);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes_every_level() {
        let db = Database::from_csv(
            "\
Years,Girls Kindergarten,Boys Kindergarten,Girls Grade School,Boys Grade School,Girls High School,Boys High School
1990,1,3,10,10,5,15
1991,2,2,20,10,5,5
",
        )
        .unwrap();
        let summaries = summarize(&db).unwrap();
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].level, EducationLevel::Kindergarten);
        assert_eq!(summaries[0].total_girls, 3);
        assert_eq!(summaries[1].peak_year, Some(1991));
        assert_eq!(summaries[2].total_boys, 20);
    }

    #[test]
    fn missing_dataset_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iranian_students.csv");
        let err = run_summary(path.to_str().unwrap()).unwrap_err();
        assert!(format!("{:#}", err).contains("iranian_students.csv"));
    }
}
