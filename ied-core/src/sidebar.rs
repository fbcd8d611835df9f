use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Two-state sidebar flag, stored between clicks as `"SHOW"` / `"HIDDEN"`.
///
/// A missing stored value behaves as [`SidebarVisibility::Show`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SidebarVisibility {
    #[default]
    #[serde(rename = "SHOW")]
    Show,
    #[serde(rename = "HIDDEN")]
    Hidden,
}

impl SidebarVisibility {
    pub fn label(&self) -> &'static str {
        match self {
            SidebarVisibility::Show => "SHOW",
            SidebarVisibility::Hidden => "HIDDEN",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SidebarVisibility::Show => SidebarVisibility::Hidden,
            SidebarVisibility::Hidden => SidebarVisibility::Show,
        }
    }

    /// Next state after a toggle-button event.
    ///
    /// `n_clicks` is the button's cumulative click count; `None` or zero means
    /// the button has not been clicked and the sidebar is shown regardless of
    /// `stored`. Otherwise the stored state (default `Show`) is flipped.
    pub fn toggle(n_clicks: Option<u32>, stored: Option<SidebarVisibility>) -> SidebarVisibility {
        match n_clicks {
            None | Some(0) => SidebarVisibility::Show,
            Some(_) => stored.unwrap_or_default().flipped(),
        }
    }
}

impl fmt::Display for SidebarVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SidebarVisibility {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SHOW" => Ok(SidebarVisibility::Show),
            "HIDDEN" => Ok(SidebarVisibility::Hidden),
            other => anyhow::bail!("unknown sidebar state {:?}", other),
        }
    }
}
