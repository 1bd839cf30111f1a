// file: src/generator/prompt.rs
// description: prompt templates for context-grounded and direct answers
// reference: placeholder substitution as in file header templates

use crate::config::PromptStyle;
use std::collections::HashMap;

const DETAILED_SYSTEM: &str = "You are a precise and helpful information assistant.";

const DETAILED_TEMPLATE: &str = "You are an expert information assistant. Use the following context to provide \
a comprehensive and accurate answer to the query.

Query: \"{query}\"

Available Context:
{context}

Guidelines:
- Base your answer primarily on the provided context
- If context is insufficient, state that clearly
- Provide a precise, informative response
- Aim for 3-5 sentences
- Include key details from the context";

const CONCISE_SYSTEM: &str =
    "You are a friendly assistant that answers briefly and only from the supplied web context.";

const CONCISE_TEMPLATE: &str = "Answer the question using the web context below.

Question: \"{query}\"

Web context:
{context}

Reply in one short paragraph. If the context does not answer the question, say so in one sentence.";

const DIRECT_TEMPLATE: &str = "Answer the following briefly and conversationally: \"{query}\"";

#[derive(Debug, Clone)]
pub struct PromptTemplate {
    style: PromptStyle,
}

impl PromptTemplate {
    pub fn new(style: PromptStyle) -> Self {
        Self { style }
    }

    pub fn system_message(&self) -> &'static str {
        match self.style {
            PromptStyle::Detailed => DETAILED_SYSTEM,
            PromptStyle::Concise => CONCISE_SYSTEM,
        }
    }

    pub fn context_prompt(&self, query: &str, context: &str) -> String {
        let template = match self.style {
            PromptStyle::Detailed => DETAILED_TEMPLATE,
            PromptStyle::Concise => CONCISE_TEMPLATE,
        };

        let values = HashMap::from([("query", query), ("context", context)]);
        render(template, &values)
    }

    pub fn direct_prompt(&self, query: &str) -> String {
        render(DIRECT_TEMPLATE, &HashMap::from([("query", query)]))
    }
}

/// Substitute `{key}` placeholders in a single pass, so text inside a value
/// that happens to look like a placeholder is left alone.
pub fn render(template: &str, values: &HashMap<&str, &str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find('}') {
            Some(close) if values.contains_key(&after[..close]) => {
                out.push_str(values[&after[..close]]);
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detailed_prompt_embeds_query_and_context() {
        let template = PromptTemplate::new(PromptStyle::Detailed);
        let prompt = template.context_prompt("what is entropy", "Source: Wiki\nEntropy measures disorder.\n\n");

        assert!(prompt.contains("Query: \"what is entropy\""));
        assert!(prompt.contains("Entropy measures disorder."));
        assert!(prompt.contains("Aim for 3-5 sentences"));
        assert_eq!(template.system_message(), DETAILED_SYSTEM);
    }

    #[test]
    fn test_concise_prompt() {
        let template = PromptTemplate::new(PromptStyle::Concise);
        let prompt = template.context_prompt("rust", "ctx");

        assert!(prompt.contains("one short paragraph"));
        assert!(prompt.contains("Question: \"rust\""));
    }

    #[test]
    fn test_render_leaves_unknown_and_injected_braces() {
        let values = HashMap::from([("query", "{context}"), ("context", "C")]);
        assert_eq!(render("{query} / {context} / {other}", &values), "{context} / C / {other}");
        assert_eq!(render("no placeholders", &values), "no placeholders");
        assert_eq!(render("dangling {brace", &values), "dangling {brace");
    }

    #[test]
    fn test_direct_prompt() {
        let template = PromptTemplate::new(PromptStyle::Concise);
        assert_eq!(
            template.direct_prompt("rust lifetimes"),
            "Answer the following briefly and conversationally: \"rust lifetimes\""
        );
    }
}
