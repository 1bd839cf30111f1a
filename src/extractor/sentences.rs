// file: src/extractor/sentences.rs
// description: visible-text extraction and informative sentence selection from html
// reference: https://docs.rs/scraper

use crate::config::ExtractionConfig;
use scraper::{Html, Node};

/// Elements whose text never counts as page content.
pub const NON_CONTENT_ELEMENTS: [&str; 5] = ["script", "style", "nav", "footer", "header"];

#[derive(Debug, Clone)]
pub struct SentenceExtractor {
    min_words: usize,
    max_chars: usize,
    max_sentences: usize,
}

impl SentenceExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            min_words: config.min_words,
            max_chars: config.max_chars,
            max_sentences: config.max_sentences,
        }
    }

    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences;
        self
    }

    /// Reduce an html document to at most `max_sentences` informative
    /// sentences joined by single spaces. Empty when nothing qualifies.
    pub fn extract_from_html(&self, html: &str) -> String {
        let text = visible_text(html);
        self.informative_sentences(&text)
            .into_iter()
            .take(self.max_sentences)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn informative_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        split_sentences(text)
            .into_iter()
            .filter(|unit| self.is_informative(unit))
            .collect()
    }

    pub fn is_informative(&self, unit: &str) -> bool {
        unit.split_whitespace().count() > self.min_words && unit.chars().count() < self.max_chars
    }
}

/// Text of every node outside the non-content elements, each fragment
/// whitespace-collapsed and the fragments joined with single spaces.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut fragments: Vec<String> = Vec::new();

    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
            Node::Element(element) => NON_CONTENT_ELEMENTS.contains(&element.name()),
            _ => false,
        });
        if hidden {
            continue;
        }

        let fragment = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !fragment.is_empty() {
            fragments.push(fragment);
        }
    }

    fragments.join(" ")
}

/// Split text into sentence-like units at a whitespace character that follows
/// `.` or `?`. No split after an abbreviation shaped like `e.g.` (word, dot,
/// word, dot) or `Mr.` (capital, lowercase, dot). Decimals and longer
/// acronyms are not handled.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut units = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        let (offset, current) = chars[i];
        if !current.is_whitespace() {
            continue;
        }

        let previous = chars[i - 1].1;
        if previous != '.' && previous != '?' {
            continue;
        }

        let dotted_abbreviation = i >= 4
            && is_word_char(chars[i - 4].1)
            && chars[i - 3].1 == '.'
            && is_word_char(chars[i - 2].1);
        let title_abbreviation = i >= 3
            && chars[i - 3].1.is_ascii_uppercase()
            && chars[i - 2].1.is_ascii_lowercase()
            && previous == '.';
        if dotted_abbreviation || title_abbreviation {
            continue;
        }

        units.push(&text[start..offset]);
        start = offset + current.len_utf8();
    }

    units.push(&text[start..]);
    units
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use pretty_assertions::assert_eq;

    const LONG_A: &str = "The quick brown fox jumps over the lazy dog near the quiet river bank.";
    const LONG_B: &str = "Researchers measured the entanglement of photon pairs across a distance of many kilometers?";
    const LONG_C: &str = "Every informative sentence in this fixture has comfortably more than ten words in it.";

    fn extractor() -> SentenceExtractor {
        SentenceExtractor::new(&Config::default_config().extraction)
    }

    #[test]
    fn test_split_on_period_and_question_mark() {
        let units = split_sentences("One two. Three four? Five six");
        assert_eq!(units, vec!["One two.", "Three four?", "Five six"]);
    }

    #[test]
    fn test_split_skips_abbreviations() {
        let units = split_sentences("Use a crate, e.g. regex for this. Mr. Smith agreed. Done");
        assert_eq!(
            units,
            vec!["Use a crate, e.g. regex for this.", "Mr. Smith agreed.", "Done"]
        );
    }

    #[test]
    fn test_split_without_terminal_punctuation() {
        assert_eq!(split_sentences("no punctuation here"), vec!["no punctuation here"]);
        assert_eq!(split_sentences(""), vec![""]);
    }

    #[test]
    fn test_visible_text_drops_non_content() {
        let html = r#"<html><head><title>Page</title><style>p { color: red; }</style></head>
            <body>
              <header>Site header</header>
              <nav><a href="/">Home</a></nav>
              <p>Main   body
                 text.</p>
              <script>var tracking = 1;</script>
              <footer>Copyright</footer>
            </body></html>"#;

        assert_eq!(visible_text(html), "Page Main body text.");
    }

    #[test]
    fn test_extract_filters_short_and_long_units() {
        let long_run = "word ".repeat(120);
        let html = format!(
            "<html><body><p>Short menu item.</p><p>{LONG_A}</p><p>{long_run}.</p><p>{LONG_B}</p></body></html>"
        );

        let excerpt = extractor().extract_from_html(&html);
        assert_eq!(excerpt, format!("{LONG_A} {LONG_B}"));
    }

    #[test]
    fn test_extract_never_returns_unqualified_units() {
        let html = format!(
            "<html><body><p>{LONG_A} Tiny one. {LONG_C} {}</p></body></html>",
            "x".repeat(600)
        );
        let extractor = extractor();
        let text = visible_text(&html);

        for unit in extractor.informative_sentences(&text) {
            assert!(unit.split_whitespace().count() > 10);
            assert!(unit.chars().count() < 500);
        }
    }

    #[test]
    fn test_extract_respects_sentence_limit() {
        let html = format!("<html><body><p>{LONG_A} {LONG_B} {LONG_C}</p></body></html>");

        let excerpt = extractor().with_max_sentences(2).extract_from_html(&html);
        assert_eq!(excerpt, format!("{LONG_A} {LONG_B}"));
    }

    #[test]
    fn test_extract_empty_when_nothing_qualifies() {
        let html = "<html><body><nav>Home About Contact</nav><p>Hello there.</p></body></html>";
        assert_eq!(extractor().extract_from_html(html), "");
    }
}
