//! Language codes understood by `--to` / `--from`.

use std::borrow::Cow;

use crate::ui::Style;

/// Known language codes (ISO 639-1, plus regional Chinese variants) and the
/// names used in prompts.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("ms", "Malay"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("sv", "Swedish"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
    ("zh-cn", "Chinese"),
    ("zh-tw", "Traditional Chinese"),
];

/// Target language when `--to` is not given.
pub const DEFAULT_TARGET_LANGUAGE: &str = "zh";

/// Maps a language code to the name used in prompts.
///
/// Matching ignores case. Unknown codes are returned unchanged, so a full
/// language name such as `"Esperanto"` can be passed straight through.
pub fn language_name(code: &str) -> Cow<'_, str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code.trim()))
        .map_or_else(|| Cow::Borrowed(code.trim()), |(_, name)| Cow::Borrowed(*name))
}

/// Prints all known language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:6} {}", Style::code(code), Style::secondary(name));
    }
    println!();
    println!(
        "{}",
        Style::hint("Other values are passed to the model as written.")
    );
}
