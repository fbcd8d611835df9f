//! Path to page resolution.
//!
//! The dashboard has exactly three chart pages. Paths are matched by exact
//! string equality: no case folding, no trailing-slash handling, no prefix
//! matching. Anything else resolves to [`Page::NotFound`], which keeps the
//! original path so it can be echoed back to the user.

use crate::level::{EducationLevel, YEAR_COLUMN};
use serde::Serialize;

/// A resolved dashboard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Kindergarten,
    GradeSchool,
    HighSchool,
    NotFound { path: String },
}

/// Fixed description of one grouped bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub level: EducationLevel,
    /// Column plotted on the x axis.
    pub x_column: String,
    /// Grouped series columns, `[girls, boys]`.
    pub series: Vec<String>,
}

/// What the content area shows for a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum PageView {
    Chart(ChartSpec),
    NotFound { heading: String, message: String },
}

impl ChartSpec {
    pub fn for_level(level: EducationLevel) -> Self {
        Self {
            title: format!("{} in Iran", level.label()),
            level,
            x_column: YEAR_COLUMN.to_string(),
            series: level.columns().iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Page {
    /// Pages listed in the sidebar, in display order.
    pub const NAV: [Page; 3] = [Page::Kindergarten, Page::GradeSchool, Page::HighSchool];

    /// Resolve a URL path to a page.
    pub fn resolve(path: &str) -> Page {
        match path {
            "/" => Page::Kindergarten,
            "/page-1" => Page::GradeSchool,
            "/page-2" => Page::HighSchool,
            other => Page::NotFound {
                path: other.to_string(),
            },
        }
    }

    /// Canonical path of the page; for `NotFound` the path that was requested.
    pub fn path(&self) -> &str {
        match self {
            Page::Kindergarten => "/",
            Page::GradeSchool => "/page-1",
            Page::HighSchool => "/page-2",
            Page::NotFound { path } => path,
        }
    }

    pub fn level(&self) -> Option<EducationLevel> {
        match self {
            Page::Kindergarten => Some(EducationLevel::Kindergarten),
            Page::GradeSchool => Some(EducationLevel::GradeSchool),
            Page::HighSchool => Some(EducationLevel::HighSchool),
            Page::NotFound { .. } => None,
        }
    }

    /// Sidebar link text, `None` for pages that are not in the sidebar.
    pub fn nav_label(&self) -> Option<&'static str> {
        self.level().map(|level| level.label())
    }

    /// A sidebar link is active only when the current path equals its path.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.level().is_some() && self.path() == current_path
    }

    pub fn view(&self) -> PageView {
        match self.level() {
            Some(level) => PageView::Chart(ChartSpec::for_level(level)),
            None => PageView::NotFound {
                heading: "404: Page not found".to_string(),
                message: format!(
                    "The page with URL ending '{}' was not found. Please try another page.",
                    self.path()
                ),
            },
        }
    }
}
