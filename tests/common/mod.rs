//! Test utilities shared by the integration tests

use scraper::{ElementRef, Html, Selector};

/// Parses an HTML fragment for use with [`first_table`]
#[allow(dead_code)]
pub fn fragment(html: &str) -> Html {
    Html::parse_fragment(html)
}

/// First element matching `css` in the document
#[allow(dead_code)]
pub fn first<'a>(doc: &'a Html, css: &str) -> ElementRef<'a> {
    let selector = Selector::parse(css).expect("test selector is valid");
    doc.select(&selector)
        .next()
        .unwrap_or_else(|| panic!("no element matches {css:?}"))
}

/// First `table` element in the document
#[allow(dead_code)]
pub fn first_table(doc: &Html) -> ElementRef<'_> {
    first(doc, "table")
}

/// Builds `<table>` markup from rows of `td` cell text
#[allow(dead_code)]
pub fn table_html(rows: &[Vec<String>]) -> String {
    let mut html = String::from("<table>");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(&html_escape(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
