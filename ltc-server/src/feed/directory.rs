//! Route directory page parser.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::domain::{RouteDirectory, RouteSummary, into_directory, title_case};

/// Route links on the directory page carry the `ada` class.
static ROUTE_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.ada").expect("static selector is valid"));

/// Extract route summaries from the directory page, in document order.
///
/// Each route link reads `"<code>, <name>"`. Links without a comma use their
/// whole (trimmed) text as the code.
pub fn parse_route_summaries(html: &str) -> Vec<RouteSummary> {
    let document = Html::parse_document(html);

    document
        .select(&ROUTE_LINK)
        .map(|anchor| {
            let text: String = anchor.text().collect();
            summary_from_link_text(&text)
        })
        .collect()
}

/// Parse the directory page into a code → display name mapping.
///
/// A page with no route links yields an empty mapping.
pub fn parse_route_directory(html: &str) -> RouteDirectory {
    into_directory(parse_route_summaries(html))
}

fn summary_from_link_text(text: &str) -> RouteSummary {
    let code = text.split(',').next().unwrap_or_default().trim();

    RouteSummary {
        code: code.to_string(),
        display_name: title_case(&text.replace(", ", " - ")),
    }
}
