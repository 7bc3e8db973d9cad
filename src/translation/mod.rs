mod client;
mod language;
mod prompt;
#[cfg(test)]
pub(crate) mod testing;
mod transport;

pub use client::{Languages, TranslationClient, TranslationRequest, TranslationResult};
pub use language::{DEFAULT_TARGET_LANGUAGE, SUPPORTED_LANGUAGES, language_name, print_languages};
pub use prompt::{SYSTEM_PROMPT, WORD_SYSTEM_PROMPT, is_single_word};
pub use transport::{HttpResponse, HttpTransport, Transport};
