// file: src/formatter/markdown.rs
// description: cosmetic markdown structuring of generated answers
// reference: Markdown specification

/// Answers with this many period-delimited segments or fewer are left as is.
pub const MIN_SEGMENTS_TO_STRUCTURE: usize = 3;

const KEY_POINTS: usize = 3;

pub struct ResponseFormatter;

impl ResponseFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Restructure an answer into overview, key points, and details.
    ///
    /// Segments come from a plain split on `.`, so abbreviations and decimals
    /// produce extra segments.
    pub fn format(&self, text: &str) -> String {
        let segments = segments(text);

        if segments.len() <= MIN_SEGMENTS_TO_STRUCTURE {
            return text.to_string();
        }

        let mut formatted = format!("## Overview\n{}.\n\n### Key Points\n", segments[0]);

        let key_points_end = (1 + KEY_POINTS).min(segments.len());
        for point in &segments[1..key_points_end] {
            formatted.push_str(&format!("- {}.\n", point));
        }

        if segments.len() > key_points_end {
            let details = segments[key_points_end..]
                .iter()
                .map(|detail| format!("*{}.*", detail))
                .collect::<Vec<_>>()
                .join(" ");
            formatted.push_str("\n### Additional Details\n");
            formatted.push_str(&details);
        }

        formatted.trim_end().to_string()
    }
}

impl Default for ResponseFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn segments(text: &str) -> Vec<&str> {
    text.split('.')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_answers_unchanged() {
        let formatter = ResponseFormatter::new();

        for text in [
            "",
            "One sentence only.",
            "First. Second. Third.",
            "No periods at all",
        ] {
            assert_eq!(formatter.format(text), text);
        }
    }

    #[test]
    fn test_four_segments_get_overview_and_key_points() {
        let formatter = ResponseFormatter::new();
        let formatted = formatter.format("Rust is fast. It is safe. It has cargo. It compiles natively.");

        assert_eq!(
            formatted,
            "## Overview\nRust is fast.\n\n### Key Points\n- It is safe.\n- It has cargo.\n- It compiles natively."
        );
        assert!(!formatted.contains("### Additional Details"));
    }

    #[test]
    fn test_extra_segments_become_italic_details() {
        let formatter = ResponseFormatter::new();
        let formatted = formatter.format("A. B. C. D. E. F.");

        assert!(formatted.contains("## Overview\nA."));
        assert!(formatted.contains("### Key Points\n- B.\n- C.\n- D."));
        assert!(formatted.ends_with("### Additional Details\n*E.* *F.*"));
    }
}
