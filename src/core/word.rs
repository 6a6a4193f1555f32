//! 단어 단위 피그 라틴 변환

use crate::config::PigLatinConfig;
use crate::core::vowel::{first_vowel_index, is_upper_consonant, is_vowel};

/// 단어 하나를 기본 설정("yay"/"ay")으로 변환
///
/// # Examples
/// ```
/// use igpay::transform_word;
/// assert_eq!(transform_word("apple"), "appleyay");
/// assert_eq!(transform_word("Smile"), "Ilesmay");
/// assert_eq!(transform_word("cat."), "atcay.");
/// ```
pub fn transform_word(token: &str) -> String {
    transform_word_with(token, &PigLatinConfig::default())
}

/// 단어 하나를 주어진 설정의 접미사로 변환
/// 글자로 시작하지 않는 토큰(숫자, 특수문자)은 그대로 반환
pub fn transform_word_with(token: &str, config: &PigLatinConfig) -> String {
    if token.trim().is_empty() {
        return String::new();
    }

    let chars: Vec<char> = token.chars().collect();
    if !chars[0].is_alphabetic() {
        return token.to_string();
    }

    // 하이픈 단어는 조각별로 재귀 변환
    if token.contains('-') {
        return token
            .split('-')
            .map(|part| transform_word_with(part, config))
            .collect::<Vec<_>>()
            .join("-");
    }

    // 끝의 문장부호 한 글자만 떼어냈다가 마지막에 다시 붙임
    let (word, trailing) = match chars.split_last() {
        Some((&last, rest)) if !last.is_alphabetic() => (rest, Some(last)),
        _ => (&chars[..], None),
    };

    let mut result = rotate(word, config);
    if let Some(c) = trailing {
        result.push(c);
    }
    result
}

/// 글자만 남은 단어에 규칙 적용
/// 첫 글자는 항상 알파벳 (호출부에서 보장)
fn rotate(word: &[char], config: &PigLatinConfig) -> String {
    let first = word[0];
    let mut result = String::with_capacity(word.len() + config.vowel_suffix.len());

    if is_vowel(first) {
        result.extend(word);
        result.push_str(&config.vowel_suffix);
    } else if is_upper_consonant(first) {
        // 모음이 없으면 마지막 글자에서 멈춤 (소문자 분기와 동일)
        let split = first_vowel_index(word).unwrap_or(word.len() - 1);
        result.extend(word[split].to_uppercase());
        result.extend(&word[split + 1..]);
        let cluster: String = word[..split].iter().collect();
        result.push_str(&cluster.to_lowercase());
        result.push_str(&config.consonant_suffix);
    } else {
        // 모음이 없으면 마지막 글자에서 멈춤
        let last = word.len() - 1;
        let mut split = 0;
        while split < last && !is_vowel(word[split]) {
            split += 1;
        }
        result.extend(&word[split..]);
        result.extend(&word[..split]);
        result.push_str(&config.consonant_suffix);
    }

    result
}
