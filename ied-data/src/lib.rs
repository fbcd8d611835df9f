//! Data shaping for enrollment charts.
//!
//! This crate turns query results from `ied-db` into forms suitable for
//! charting (the D3.js grouped bar payload) and for the CLI summaries.

/// Grouped bar chart payloads for the D3.js bridge.
pub mod grouped_bar {
    use ied_core::level::Gender;
    use ied_core::page::ChartSpec;
    use ied_db::models::LevelCount;
    use serde::Serialize;

    /// Series colours, girls first.
    pub const SERIES_COLORS: [&str; 2] = ["#636EFA", "#EF553B"];

    /// One bar: a year, the series it belongs to and its height.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct GroupedBarDatum {
        pub year: i32,
        pub series: String,
        pub value: u64,
    }

    /// A complete grouped bar chart: bars keyed by year, one group per year
    /// with one bar per series.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GroupedBarChart {
        pub title: String,
        pub x_label: String,
        pub series: Vec<String>,
        pub data: Vec<GroupedBarDatum>,
    }

    impl GroupedBarChart {
        /// Build the chart for `spec` from that level's per-year counts.
        ///
        /// Data is in long format, ordered by the input row order and then by
        /// series order (girls, boys).
        pub fn from_level_counts(spec: &ChartSpec, rows: &[LevelCount]) -> Self {
            let mut data = Vec::with_capacity(rows.len() * spec.series.len());
            for row in rows {
                for (gender, series) in Gender::ALL.iter().zip(&spec.series) {
                    let value = match gender {
                        Gender::Girls => row.girls,
                        Gender::Boys => row.boys,
                    };
                    data.push(GroupedBarDatum {
                        year: row.year,
                        series: series.clone(),
                        value,
                    });
                }
            }
            log::debug!("[IED] grouped_bar: {} bars for {}", data.len(), spec.title);
            Self {
                title: spec.title.clone(),
                x_label: spec.x_column.clone(),
                series: spec.series.clone(),
                data,
            }
        }

        pub fn is_empty(&self) -> bool {
            self.data.is_empty()
        }

        /// JSON array of data points for the chart renderer.
        pub fn data_json(&self) -> anyhow::Result<String> {
            Ok(serde_json::to_string(&self.data)?)
        }

        /// JSON chart configuration (title, axis label, series and colours).
        pub fn config_json(&self) -> String {
            serde_json::json!({
                "title": self.title,
                "xAxisLabel": self.x_label,
                "series": self.series,
                "colors": SERIES_COLORS,
                "barmode": "group",
            })
            .to_string()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use ied_core::level::EducationLevel;

        fn rows() -> Vec<LevelCount> {
            vec![
                LevelCount { year: 1990, girls: 10, boys: 12 },
                LevelCount { year: 1991, girls: 11, boys: 13 },
            ]
        }

        #[test]
        fn test_long_format_order() {
            let spec = ChartSpec::for_level(EducationLevel::Kindergarten);
            let chart = GroupedBarChart::from_level_counts(&spec, &rows());
            assert_eq!(chart.data.len(), 4);
            assert_eq!(
                chart.data[0],
                GroupedBarDatum {
                    year: 1990,
                    series: "Girls Kindergarten".to_string(),
                    value: 10
                }
            );
            assert_eq!(chart.data[1].series, "Boys Kindergarten");
            assert_eq!(chart.data[1].value, 12);
            assert_eq!(chart.data[3].year, 1991);
            assert_eq!(chart.data[3].value, 13);
        }

        #[test]
        fn test_chart_carries_spec_labels() {
            let spec = ChartSpec::for_level(EducationLevel::HighSchool);
            let chart = GroupedBarChart::from_level_counts(&spec, &rows());
            assert_eq!(chart.title, "High School in Iran");
            assert_eq!(chart.x_label, "Years");
            assert_eq!(chart.series, vec!["Girls High School", "Boys High School"]);
        }

        #[test]
        fn test_empty_rows() {
            let spec = ChartSpec::for_level(EducationLevel::GradeSchool);
            let chart = GroupedBarChart::from_level_counts(&spec, &[]);
            assert!(chart.is_empty());
            assert_eq!(chart.data_json().unwrap(), "[]");
        }

        #[test]
        fn test_config_json() {
            let spec = ChartSpec::for_level(EducationLevel::GradeSchool);
            let chart = GroupedBarChart::from_level_counts(&spec, &rows());
            let config: serde_json::Value = serde_json::from_str(&chart.config_json()).unwrap();
            assert_eq!(config["title"], "Grade School in Iran");
            assert_eq!(config["xAxisLabel"], "Years");
            assert_eq!(config["series"][1], "Boys Grade School");
            assert_eq!(config["colors"].as_array().unwrap().len(), 2);
        }

        #[test]
        fn test_serializes_camel_case() {
            let spec = ChartSpec::for_level(EducationLevel::Kindergarten);
            let chart = GroupedBarChart::from_level_counts(&spec, &rows());
            let json = serde_json::to_value(&chart).unwrap();
            assert_eq!(json["xLabel"], "Years");
            assert_eq!(json["data"][0]["year"], 1990);
        }
    }
}

/// Per-level enrollment summaries.
pub mod summary {
    use ied_core::level::EducationLevel;
    use ied_db::models::LevelCount;
    use serde::Serialize;
    use std::fmt;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct LevelSummary {
        pub level: EducationLevel,
        pub first_year: Option<i32>,
        pub last_year: Option<i32>,
        pub total_girls: u64,
        pub total_boys: u64,
        /// Girls as a fraction of all students, 0.0 when there are none.
        pub girls_share: f64,
        /// Year with the most students; the earliest year wins ties.
        pub peak_year: Option<i32>,
    }

    impl LevelSummary {
        /// Summarise a level from its per-year counts (ordered by year).
        pub fn from_counts(level: EducationLevel, rows: &[LevelCount]) -> Self {
            // Totals saturate at u64::MAX instead of wrapping.
            let total_girls = rows.iter().fold(0u64, |acc, r| acc.saturating_add(r.girls));
            let total_boys = rows.iter().fold(0u64, |acc, r| acc.saturating_add(r.boys));
            let total = total_girls.saturating_add(total_boys);
            let girls_share = if total == 0 {
                0.0
            } else {
                total_girls as f64 / total as f64
            };

            let mut peak: Option<&LevelCount> = None;
            for row in rows {
                if peak.map_or(true, |p| row.total() > p.total()) {
                    peak = Some(row);
                }
            }

            Self {
                level,
                first_year: rows.iter().map(|r| r.year).min(),
                last_year: rows.iter().map(|r| r.year).max(),
                total_girls,
                total_boys,
                girls_share,
                peak_year: peak.map(|p| p.year),
            }
        }
    }

    impl fmt::Display for LevelSummary {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match (self.first_year, self.last_year, self.peak_year) {
                (Some(first), Some(last), Some(peak)) => write!(
                    f,
                    "{}: {}-{}, girls {}, boys {}, girls share {:.1}%, peak year {}",
                    self.level,
                    first,
                    last,
                    self.total_girls,
                    self.total_boys,
                    self.girls_share * 100.0,
                    peak
                ),
                _ => write!(f, "{}: no data", self.level),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_from_counts() {
            let rows = vec![
                LevelCount { year: 1990, girls: 30, boys: 10 },
                LevelCount { year: 1991, girls: 20, boys: 40 },
                LevelCount { year: 1992, girls: 5, boys: 5 },
            ];
            let summary = LevelSummary::from_counts(EducationLevel::HighSchool, &rows);
            assert_eq!(summary.total_girls, 55);
            assert_eq!(summary.total_boys, 55);
            assert!((summary.girls_share - 0.5).abs() < f64::EPSILON);
            assert_eq!(summary.peak_year, Some(1991));
            assert_eq!(summary.first_year, Some(1990));
            assert_eq!(summary.last_year, Some(1992));
        }

        #[test]
        fn test_peak_tie_prefers_earliest() {
            let rows = vec![
                LevelCount { year: 2000, girls: 1, boys: 1 },
                LevelCount { year: 2001, girls: 2, boys: 0 },
            ];
            let summary = LevelSummary::from_counts(EducationLevel::Kindergarten, &rows);
            assert_eq!(summary.peak_year, Some(2000));
        }

        #[test]
        fn test_empty_counts() {
            let summary = LevelSummary::from_counts(EducationLevel::GradeSchool, &[]);
            assert_eq!(summary.girls_share, 0.0);
            assert_eq!(summary.peak_year, None);
            assert_eq!(summary.to_string(), "Grade School: no data");
        }

        #[test]
        fn test_huge_counts_saturate() {
            let rows = vec![
                LevelCount { year: 1990, girls: u64::MAX, boys: u64::MAX },
                LevelCount { year: 1991, girls: 1, boys: 1 },
            ];
            let summary = LevelSummary::from_counts(EducationLevel::HighSchool, &rows);
            assert_eq!(summary.total_girls, u64::MAX);
            assert_eq!(summary.total_boys, u64::MAX);
            assert!((summary.girls_share - 1.0).abs() < f64::EPSILON);
            assert_eq!(summary.peak_year, Some(1990));
        }

        #[test]
        fn test_display() {
            let rows = vec![LevelCount { year: 1990, girls: 1, boys: 3 }];
            let summary = LevelSummary::from_counts(EducationLevel::Kindergarten, &rows);
            assert_eq!(
                summary.to_string(),
                "Kindergarten: 1990-1990, girls 1, boys 3, girls share 25.0%, peak year 1990"
            );
        }
    }
}
