//! 문장 단위 피그 라틴 변환기

use crate::config::PigLatinConfig;
use crate::core::word::transform_word_with;

/// 변환 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// 잘못된 입력 (인자 이름, 사유)
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::InvalidArgument { argument, reason } => {
                write!(f, "invalid argument '{}': {}", argument, reason)
            }
        }
    }
}

impl std::error::Error for TranslateError {}

fn empty_phrase() -> TranslateError {
    TranslateError::InvalidArgument {
        argument: "phrase",
        reason: "Source string cannot be null or empty or whitespace.",
    }
}

/// 피그 라틴 변환기
///
/// 상태는 설정값뿐이므로 여러 스레드에서 공유해도 안전
#[derive(Debug, Clone, Default)]
pub struct Translator {
    config: PigLatinConfig,
}

impl Translator {
    /// 기본 설정으로 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 설정 지정
    pub fn with_config(config: PigLatinConfig) -> Self {
        Self { config }
    }

    /// 현재 설정 반환
    pub fn config(&self) -> &PigLatinConfig {
        &self.config
    }

    /// 문장을 공백(' ') 단위로 나눠 단어별로 변환 후 다시 합침
    /// 연속 공백으로 생긴 빈 토큰도 유지되어 원래 간격이 보존됨
    pub fn translate(&self, phrase: &str) -> Result<String, TranslateError> {
        if phrase.trim().is_empty() {
            return Err(empty_phrase());
        }

        let result = phrase
            .split(' ')
            .map(|token| transform_word_with(token, &self.config))
            .collect::<Vec<_>>()
            .join(" ");

        log::debug!("변환: '{}' -> '{}'", phrase, result);
        Ok(result)
    }

    /// 단어 하나 변환
    pub fn transform_word(&self, token: &str) -> String {
        transform_word_with(token, &self.config)
    }
}

/// 영문 문장을 피그 라틴으로 변환 (기본 설정)
///
/// # Examples
/// ```
/// use igpay::translate;
/// assert_eq!(translate("I like apples").unwrap(), "Iyay ikelay applesyay");
/// assert!(translate("   ").is_err());
/// ```
pub fn translate(phrase: &str) -> Result<String, TranslateError> {
    Translator::new().translate(phrase)
}

/// 입력이 없을 수 있는 경우용 (None이면 InvalidArgument)
pub fn translate_opt(phrase: Option<&str>) -> Result<String, TranslateError> {
    match phrase {
        Some(p) => translate(p),
        None => Err(empty_phrase()),
    }
}
