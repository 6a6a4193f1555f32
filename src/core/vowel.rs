//! 모음/자음 판별 (ASCII 기준)

/// 모음 여부 확인
/// A E I O U (대소문자) 만 모음으로 취급, 그 외 문자는 모두 자음
/// 'y'도 자음
pub fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'A' | 'a' | 'E' | 'e' | 'I' | 'i' | 'O' | 'o' | 'U' | 'u'
    )
}

/// 대문자 자음 분기 여부
/// ASCII 대문자(A-Z)만 해당, 유니코드 대문자(É, Č 등)는 소문자 분기로 처리
pub fn is_upper_consonant(c: char) -> bool {
    c.is_ascii_uppercase() && !is_vowel(c)
}

/// 첫 번째 모음의 인덱스 반환 (없으면 None)
pub fn first_vowel_index(chars: &[char]) -> Option<usize> {
    chars.iter().position(|&c| is_vowel(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowels() {
        for c in "AaEeIiOoUu".chars() {
            assert!(is_vowel(c), "{} should be a vowel", c);
        }
    }

    #[test]
    fn test_consonants() {
        for c in "bcdfghjklmnpqrstvwxzBCDY".chars() {
            assert!(!is_vowel(c), "{} should be a consonant", c);
        }
        // y는 항상 자음
        assert!(!is_vowel('y'));
    }

    #[test]
    fn test_non_ascii_vowel_like() {
        // 악센트 모음은 모음 집합에 없음
        assert!(!is_vowel('é'));
        assert!(!is_vowel('Ü'));
    }

    #[test]
    fn test_upper_consonant() {
        assert!(is_upper_consonant('S'));
        assert!(is_upper_consonant('G'));
        assert!(!is_upper_consonant('E'));
        assert!(!is_upper_consonant('s'));
        assert!(!is_upper_consonant('Č'));
    }

    #[test]
    fn test_first_vowel_index() {
        let smile: Vec<char> = "Smile".chars().collect();
        assert_eq!(first_vowel_index(&smile), Some(2));
        let rhythm: Vec<char> = "rhythm".chars().collect();
        assert_eq!(first_vowel_index(&rhythm), None);
        assert_eq!(first_vowel_index(&[]), None);
    }
}
