//! Router wiring.
//!
//! The router holds the location path exactly as the browser reports it and
//! hands it to [`Page::resolve`]. A derived catch-all route would split the
//! path into segments, dropping a trailing slash and percent-decoding, so
//! `Routable` is implemented by hand here.

use crate::components::DashboardPage;
use dioxus::prelude::*;
use dioxus::router::routable::{SegmentType, SiteMapSegment};
use ied_core::page::Page;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The current location path, without query string or fragment.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Route {
    path: String,
}

impl Route {
    /// Route that navigates to `page`.
    pub fn for_page(page: &Page) -> Self {
        Self {
            path: page.path().to_string(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The page this route resolves to.
    pub fn page(&self) -> Page {
        Page::resolve(&self.path)
    }
}

impl FromStr for Route {
    type Err = Infallible;

    fn from_str(route: &str) -> Result<Self, Self::Err> {
        let end = route.find(['?', '#']).unwrap_or(route.len());
        let path = match &route[..end] {
            "" => "/",
            path => path,
        };
        Ok(Self {
            path: path.to_string(),
        })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl Routable for Route {
    const SITE_MAP: &'static [SiteMapSegment] = &[SiteMapSegment {
        segment_type: SegmentType::CatchAll("path"),
        children: &[],
    }];

    fn render(&self, level: usize) -> Element {
        match level {
            0 => rsx! {
                DashboardPage { path: self.path.clone() }
            },
            _ => VNode::empty(),
        }
    }
}
