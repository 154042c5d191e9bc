use judol_filter_application::ports::ContentExtractor;
use judol_filter_domain::DomainError;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Visible body text, one trimmed non-empty line per text fragment.
#[derive(Debug, Default)]
pub struct HtmlContentExtractor;

impl HtmlContentExtractor {
    pub fn new() -> Self {
        Self
    }

    fn collect_text(element: ElementRef<'_>, lines: &mut Vec<String>) {
        for child in element.children() {
            match child.value() {
                Node::Text(text) => lines.extend(
                    text.lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty())
                        .map(str::to_string),
                ),
                Node::Element(el) if SKIPPED_ELEMENTS.contains(&el.name()) => {}
                Node::Element(_) => {
                    if let Some(child_element) = ElementRef::wrap(child) {
                        Self::collect_text(child_element, lines);
                    }
                }
                _ => {}
            }
        }
    }
}

impl ContentExtractor for HtmlContentExtractor {
    fn extract_and_clean(&self, html: &str) -> Result<String, DomainError> {
        if html.trim().is_empty() {
            return Ok(String::new());
        }

        let document = Html::parse_document(html);
        let body_selector =
            Selector::parse("body").map_err(|e| DomainError::ExtractionFailed(e.to_string()))?;
        let root = document
            .select(&body_selector)
            .next()
            .unwrap_or_else(|| document.root_element());

        let mut lines = Vec::new();
        Self::collect_text(root, &mut lines);
        Ok(lines.join("\n"))
    }
}
