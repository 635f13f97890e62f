//! Output formatting
//!
//! Word-count token estimates and the Markdown answer template

use crate::models::{ChatMessage, GenerationResult};

/// Number of whitespace separated words
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Rough input token estimate: words across all message contents joined by a space
pub fn estimate_input_tokens(messages: &[ChatMessage]) -> usize {
    let joined = messages
        .iter()
        .map(|message| message.content.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    count_words(&joined)
}

/// Render a result as the Markdown answer block
pub fn format_markdown(result: &GenerationResult) -> String {
    format!(
        "**Provider:** {} | **Model:** {}  \n\
         **Tokens Used (Input/Output):** {}/{}  \n\n\
         **Assistant:**\n\n\
         {}\n",
        result.provider.display_name(),
        result.model,
        result.input_token_estimate,
        result.output_token_count,
        result.assistant_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ProviderKind;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("hi there"), 2);
        assert_eq!(count_words(" tabs\tand\nnewlines  too "), 4);
    }

    #[test]
    fn test_estimate_input_tokens() {
        let messages = vec![
            ChatMessage::system("You are terse."),
            ChatMessage::user("hi there"),
            ChatMessage::assistant(""),
        ];
        assert_eq!(estimate_input_tokens(&messages), 5);
        assert_eq!(estimate_input_tokens(&[]), 0);
    }

    #[test]
    fn test_format_markdown() {
        let result = GenerationResult {
            provider: ProviderKind::OpenAi,
            model: "gpt-4o".to_string(),
            input_token_estimate: 2,
            output_token_count: 3,
            assistant_text: "Hello".to_string(),
        };

        assert_eq!(
            format_markdown(&result),
            "**Provider:** Openai | **Model:** gpt-4o  \n**Tokens Used (Input/Output):** 2/3  \n\n**Assistant:**\n\nHello\n"
        );
    }
}
