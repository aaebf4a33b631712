//! Ordered candidate selector chains for fixture card fields.
//!
//! The competition site has renamed its CSS classes between seasons, so each
//! field is located by trying a list of selectors in order and taking the
//! first non-empty result.

use scraper::{ElementRef, Selector};
use tracing::warn;

pub struct SelectorChain {
    selectors: Vec<Selector>,
}

impl SelectorChain {
    /// Builds a chain from selector strings tried in the given order.
    /// Unparsable candidates are dropped with a warning; the constants in
    /// [`crate::constants::selectors`] are all valid.
    pub fn new(candidates: &[&str]) -> Self {
        let selectors = candidates
            .iter()
            .filter_map(|s| match Selector::parse(s) {
                Ok(sel) => Some(sel),
                Err(e) => {
                    warn!(selector = %s, error = %e, "dropping invalid selector candidate");
                    None
                }
            })
            .collect();
        Self { selectors }
    }

    /// First non-empty, whitespace-collapsed text found by any candidate.
    pub fn first_text(&self, scope: ElementRef<'_>) -> Option<String> {
        self.selectors.iter().find_map(|sel| {
            scope
                .select(sel)
                .map(|el| collapse_whitespace(el))
                .find(|text| !text.is_empty())
        })
    }

    /// Like [`Self::first_text`], but preserves the element's internal line
    /// structure: each nested text chunk becomes one line. Used for the date
    /// header, whose round annotation sits on its own line.
    pub fn first_text_multiline(&self, scope: ElementRef<'_>) -> Option<String> {
        self.selectors.iter().find_map(|sel| {
            scope
                .select(sel)
                .map(|el| {
                    el.text()
                        .map(str::trim)
                        .filter(|chunk| !chunk.is_empty())
                        .collect::<Vec<_>>()
                        .join("\n")
                })
                .find(|text| !text.is_empty())
        })
    }

    /// All non-empty texts from the first candidate that matches anything.
    /// Later candidates are only consulted when earlier ones match nothing,
    /// so a specific selector is never mixed with a catch-all one.
    pub fn all_texts(&self, scope: ElementRef<'_>) -> Vec<String> {
        for sel in &self.selectors {
            let texts: Vec<String> = scope
                .select(sel)
                .map(|el| collapse_whitespace(el))
                .filter(|text| !text.is_empty())
                .collect();
            if !texts.is_empty() {
                return texts;
            }
        }
        Vec::new()
    }
}

fn collapse_whitespace(el: ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first_element(html: &Html) -> ElementRef<'_> {
        let body = Selector::parse("body").unwrap();
        html.select(&body).next().unwrap()
    }

    #[test]
    fn test_first_text_prefers_earlier_candidates() {
        let html = Html::parse_document(
            r#"<body><div class="primary">First</div><div class="backup">Second</div></body>"#,
        );
        let chain = SelectorChain::new(&[".primary", ".backup"]);
        assert_eq!(
            chain.first_text(first_element(&html)).as_deref(),
            Some("First")
        );
    }

    #[test]
    fn test_first_text_falls_through_empty_matches() {
        let html = Html::parse_document(
            r#"<body><div class="primary">   </div><div class="backup">Second</div></body>"#,
        );
        let chain = SelectorChain::new(&[".primary", ".backup"]);
        assert_eq!(
            chain.first_text(first_element(&html)).as_deref(),
            Some("Second")
        );
    }

    #[test]
    fn test_all_texts_uses_one_candidate_only() {
        let html = Html::parse_document(
            r#"<body>
                <span class="team-name">Alpha</span>
                <span class="team-name">Beta</span>
                <span class="team-extra">Gamma</span>
            </body>"#,
        );
        let chain = SelectorChain::new(&[".team-name", "[class*='team']"]);
        assert_eq!(chain.all_texts(first_element(&html)), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_all_texts_falls_back_to_catch_all() {
        let html = Html::parse_document(
            r#"<body>
                <span class="squad-team-label">Alpha</span>
                <span class="squad-team-label">Beta</span>
            </body>"#,
        );
        let chain = SelectorChain::new(&[".team-name", "[class*='team']"]);
        assert_eq!(chain.all_texts(first_element(&html)), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_multiline_preserves_nested_line_structure() {
        let html = Html::parse_document(
            r#"<body><h3 class="match-header__title">THURSDAY 31ST JULY<span>Round 5</span></h3></body>"#,
        );
        let chain = SelectorChain::new(&[".match-header__title"]);
        assert_eq!(
            chain.first_text_multiline(first_element(&html)).as_deref(),
            Some("THURSDAY 31ST JULY\nRound 5")
        );
    }

    #[test]
    fn test_no_match_yields_nothing() {
        let html = Html::parse_document(r#"<body><div>text</div></body>"#);
        let chain = SelectorChain::new(&[".missing"]);
        assert_eq!(chain.first_text(first_element(&html)), None);
        assert!(chain.all_texts(first_element(&html)).is_empty());
    }
}
