pub mod config;
pub mod core;

pub use config::{load_config, PigLatinConfig};
pub use self::core::translator::{translate, translate_opt, TranslateError, Translator};
pub use self::core::vowel::is_vowel;
pub use self::core::word::transform_word;
