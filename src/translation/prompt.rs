use super::language::language_name;

pub const SYSTEM_PROMPT: &str = "You are a professional translator. \
     Translate the given text accurately while preserving the original meaning and tone. \
     Only return the translated text without any explanations or additional content.";

pub const WORD_SYSTEM_PROMPT: &str = "You are a bilingual dictionary. \
     Give the most common translations of the given word on a single line, \
     separated by semicolons. Do not add explanations, examples or the original word.";

/// True when `text` is a single token with no interior whitespace.
pub fn is_single_word(text: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && !text.chars().any(char::is_whitespace)
}

/// Dictionary-style prompt in word mode, translator prompt otherwise.
pub const fn system_prompt(word_mode: bool) -> &'static str {
    if word_mode {
        WORD_SYSTEM_PROMPT
    } else {
        SYSTEM_PROMPT
    }
}

/// User message carrying the text and the language pair.
pub fn build_user_prompt(text: &str, target: &str, source: Option<&str>) -> String {
    let target = language_name(target);
    match source {
        Some(source) => format!(
            "Translate the following text from {} to {target}:\n\n{text}",
            language_name(source)
        ),
        None => format!("Translate the following text to {target}:\n\n{text}"),
    }
}
