//! 피그 라틴 변환 핵심 로직

pub mod translator;
pub mod vowel;
pub mod word;
