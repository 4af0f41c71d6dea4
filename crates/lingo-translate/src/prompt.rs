//! Prompt construction for translation requests.

use lingo_chunk::Chunk;
use lingo_types::Message;

/// Instructions shared by both front ends.
pub fn instructions(from_lang: &str, to_lang: &str) -> String {
    format!(
        "You translate software localization files from {from_lang} to {to_lang}. \
         The input is a JSON object. Translate its string values only. \
         Keep every key unchanged, do not add or remove keys, keep the nesting, \
         and keep placeholders such as {{name}}, {{{{count}}}} and %s intact. \
         Reply with a single JSON object and nothing else."
    )
}

/// Conversation asking for a chunk's translation.
pub fn chat_prompt(chunk: &Chunk, from_lang: &str, to_lang: &str) -> Vec<Message> {
    vec![
        Message::system(instructions(from_lang, to_lang)),
        Message::user(chunk.text.clone()),
    ]
}

/// Single prompt asking for a chunk's translation.
pub fn text_prompt(chunk: &Chunk, from_lang: &str, to_lang: &str) -> String {
    format!("{}\n\n{}", instructions(from_lang, to_lang), chunk.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_types::Role;
    use serde_json::json;

    fn chunk() -> Chunk {
        lingo_chunk::slice(&json!({"hello": "Hello"}), 100, None)
            .unwrap()
            .remove(0)
    }

    #[test]
    fn chat_prompt_embeds_languages_and_chunk() {
        let messages = chat_prompt(&chunk(), "en", "de");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("from en to de"));
        assert_eq!(messages[1].content, r#"{"hello":"Hello"}"#);
    }

    #[test]
    fn text_prompt_ends_with_chunk() {
        let prompt = text_prompt(&chunk(), "en", "ja");
        assert!(prompt.contains("from en to ja"));
        assert!(prompt.ends_with(r#"{"hello":"Hello"}"#));
    }

    #[test]
    fn placeholders_render_literally() {
        let text = instructions("en", "fr");
        assert!(text.contains("{name}"));
        assert!(text.contains("{{count}}"));
    }
}
