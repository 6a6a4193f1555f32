//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const CONFIG_ENV: &str = "IGPAY_CONFIG";

/// igpay 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PigLatinConfig {
    /// 모음으로 시작하는 단어 뒤에 붙는 접미사
    #[serde(default = "default_vowel_suffix")]
    pub vowel_suffix: String,
    /// 자음 뭉치를 뒤로 옮긴 단어 뒤에 붙는 접미사
    #[serde(default = "default_consonant_suffix")]
    pub consonant_suffix: String,
}

fn default_vowel_suffix() -> String {
    "yay".to_string()
}

fn default_consonant_suffix() -> String {
    "ay".to_string()
}

impl Default for PigLatinConfig {
    fn default() -> Self {
        Self {
            vowel_suffix: default_vowel_suffix(),
            consonant_suffix: default_consonant_suffix(),
        }
    }
}

/// 설정 파일 경로: $IGPAY_CONFIG 또는 ~/.config/igpay/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("igpay").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> PigLatinConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> PigLatinConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            PigLatinConfig::default()
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => PigLatinConfig::default(),
        Err(e) => {
            log::warn!("설정 파일 읽기 실패 ({}): {}", path.display(), e);
            PigLatinConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(config: &PigLatinConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(config: &PigLatinConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
