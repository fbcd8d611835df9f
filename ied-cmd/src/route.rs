//! Resolve a URL path the way the dashboard does.

use ied_core::page::Page;
use serde_json::json;

/// The resolved page and what its content area shows.
pub fn describe_route(path: &str) -> serde_json::Value {
    let page = Page::resolve(path);
    json!({
        "path": path,
        "page": page,
        "view": page.view(),
    })
}

pub fn run_route(path: &str) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&describe_route(path))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_routes() {
        let described = describe_route("/page-1");
        assert_eq!(described["page"]["page"], "grade_school");
        assert_eq!(described["view"]["view"], "chart");
        assert_eq!(described["view"]["series"][0], "Girls Grade School");
        assert_eq!(described["view"]["series"][1], "Boys Grade School");
    }

    #[test]
    fn unknown_route_message_contains_path() {
        let described = describe_route("/unknown-xyz");
        assert_eq!(described["view"]["view"], "not_found");
        let message = described["view"]["message"].as_str().unwrap();
        assert!(message.contains("unknown-xyz"));
    }
}
