// HTML text extraction: headings (h1-h3) and paragraphs in document order.

use scraper::{Html, Selector};

/// Elements whose text makes up the document body.
const TEXT_SELECTOR: &str = "h1, h2, h3, p";

/// Concatenate the text of heading and paragraph elements, joined by single
/// spaces, in the order they appear in the markup.
pub fn extract_html_text(markup: &str) -> String {
    let document = Html::parse_document(markup);
    let selector = Selector::parse(TEXT_SELECTOR).expect("valid selector");

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
