//! Layout styles for the sidebar, the content area and the toggle button.
//!
//! Each of the three panels has one style for a shown sidebar and one for a
//! hidden sidebar. The set is built once as a [`LayoutTheme`] and handed to
//! whoever renders the layout; nothing here is mutable.

use crate::sidebar::SidebarVisibility;

/// An inline CSS declaration block, kept in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style(&'static [(&'static str, &'static str)]);

impl Style {
    pub const fn new(declarations: &'static [(&'static str, &'static str)]) -> Self {
        Self(declarations)
    }

    /// Value of a CSS property, if declared.
    pub fn get(&self, property: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| *value)
    }

    /// Render as an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Styles of one panel for both sidebar states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStyle {
    pub shown: Style,
    pub hidden: Style,
}

impl PanelStyle {
    pub fn for_visibility(&self, visibility: SidebarVisibility) -> &Style {
        match visibility {
            SidebarVisibility::Show => &self.shown,
            SidebarVisibility::Hidden => &self.hidden,
        }
    }
}

/// Styles for the whole page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutTheme {
    pub sidebar: PanelStyle,
    pub content: PanelStyle,
    pub button: PanelStyle,
}

/// Result of a toggle event: the three styles to apply and the state to store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome<'a> {
    pub sidebar: &'a Style,
    pub content: &'a Style,
    pub button: &'a Style,
    pub visibility: SidebarVisibility,
}

const SIDEBAR_SHOWN: Style = Style::new(&[
    ("height", "100%"),
    ("width", "16rem"),
    ("position", "fixed"),
    ("z-index", "1"),
    ("padding", "1rem"),
    ("top", "0"),
    ("left", "0"),
    ("background-color", "#161a28"),
    ("overflow-x", "hidden"),
    ("transition", "0.3s"),
]);

const SIDEBAR_HIDDEN: Style = Style::new(&[
    ("height", "100%"),
    ("width", "0rem"),
    ("position", "fixed"),
    ("z-index", "1"),
    ("top", "0"),
    ("left", "0"),
    ("background-color", "#161a28"),
    ("overflow-x", "hidden"),
    ("transition", "0.3s"),
    ("padding-top", "1rem"),
]);

const CONTENT_SHOWN: Style = Style::new(&[
    ("transition", "margin-left 0.3s"),
    ("padding", "1rem"),
    ("margin-left", "17rem"),
    ("border-radius", "1rem"),
    ("background-color", "#161a28"),
    ("box-shadow", "3px 3px #111"),
    ("margin-right", "1rem"),
]);

const CONTENT_HIDDEN: Style = Style::new(&[
    ("transition", "margin-left 0.3s"),
    ("padding", "1rem"),
    ("margin-left", "1rem"),
    ("border-radius", "1rem"),
    ("background-color", "#161a28"),
    ("box-shadow", "3px 3px #111"),
    ("margin-right", "1rem"),
]);

const BUTTON_SHOWN: Style = Style::new(&[
    ("padding", "1rem 1rem"),
    ("transition", "margin-left .3s"),
    ("margin-left", "16rem"),
]);

const BUTTON_HIDDEN: Style = Style::new(&[
    ("padding", "1rem 1rem"),
    ("transition", "margin-left .3s"),
    ("margin-left", "0"),
]);

impl LayoutTheme {
    /// The dark dashboard theme.
    pub const fn dark() -> Self {
        Self {
            sidebar: PanelStyle {
                shown: SIDEBAR_SHOWN,
                hidden: SIDEBAR_HIDDEN,
            },
            content: PanelStyle {
                shown: CONTENT_SHOWN,
                hidden: CONTENT_HIDDEN,
            },
            button: PanelStyle {
                shown: BUTTON_SHOWN,
                hidden: BUTTON_HIDDEN,
            },
        }
    }

    /// Styles to apply for a given sidebar state.
    pub fn styles_for(&self, visibility: SidebarVisibility) -> ToggleOutcome<'_> {
        ToggleOutcome {
            sidebar: self.sidebar.for_visibility(visibility),
            content: self.content.for_visibility(visibility),
            button: self.button.for_visibility(visibility),
            visibility,
        }
    }

    /// Handle a toggle-button event. See [`SidebarVisibility::toggle`].
    pub fn toggle_sidebar(
        &self,
        n_clicks: Option<u32>,
        stored: Option<SidebarVisibility>,
    ) -> ToggleOutcome<'_> {
        self.styles_for(SidebarVisibility::toggle(n_clicks, stored))
    }
}

impl Default for LayoutTheme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_css_keeps_order() {
        let style = Style::new(&[("padding", "1rem"), ("margin-left", "0")]);
        assert_eq!(style.to_css(), "padding: 1rem; margin-left: 0;");
    }

    #[test]
    fn test_get_property() {
        let theme = LayoutTheme::dark();
        assert_eq!(theme.sidebar.shown.get("width"), Some("16rem"));
        assert_eq!(theme.sidebar.hidden.get("width"), Some("0rem"));
        assert_eq!(theme.sidebar.hidden.get("padding"), None);
    }

    #[test]
    fn test_unclicked_toggle_returns_shown_triple() {
        let theme = LayoutTheme::dark();
        let outcome = theme.toggle_sidebar(None, None);
        assert_eq!(outcome.visibility, SidebarVisibility::Show);
        assert_eq!(*outcome.sidebar, theme.sidebar.shown);
        assert_eq!(*outcome.content, theme.content.shown);
        assert_eq!(*outcome.button, theme.button.shown);

        let zero = theme.toggle_sidebar(Some(0), None);
        assert_eq!(zero, outcome);
    }

    #[test]
    fn test_first_click_returns_hidden_triple() {
        let theme = LayoutTheme::dark();
        let outcome = theme.toggle_sidebar(Some(1), None);
        assert_eq!(outcome.visibility, SidebarVisibility::Hidden);
        assert_eq!(*outcome.sidebar, theme.sidebar.hidden);
        assert_eq!(*outcome.content, theme.content.hidden);
        assert_eq!(outcome.button.get("margin-left"), Some("0"));
    }

    #[test]
    fn test_second_click_restores_shown_triple() {
        let theme = LayoutTheme::dark();
        let first = theme.toggle_sidebar(Some(1), None);
        let second = theme.toggle_sidebar(Some(2), Some(first.visibility));
        assert_eq!(second, theme.styles_for(SidebarVisibility::Show));
    }

    #[test]
    fn test_content_margin_tracks_sidebar() {
        let theme = LayoutTheme::default();
        assert_eq!(theme.content.shown.get("margin-left"), Some("17rem"));
        assert_eq!(theme.content.hidden.get("margin-left"), Some("1rem"));
    }
}
