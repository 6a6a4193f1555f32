//! igpay - 영문 문장을 피그 라틴으로 변환

use igpay::config::{config_path, load_config_from, save_config_to, PigLatinConfig};
use igpay::{TranslateError, Translator};
use std::io::{self, BufRead};
use std::path::Path;
use std::process::ExitCode;

/// CLI 실행 에러
#[derive(Debug)]
enum CliError {
    /// 입력 문장 오류
    Translate(TranslateError),
    /// 표준 입력 읽기 실패
    Io(io::Error),
    /// 설정 파일 저장 실패
    Config(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Translate(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "입력 읽기 실패: {}", e),
            CliError::Config(s) => write!(f, "설정 저장 실패: {}", s),
        }
    }
}

impl From<TranslateError> for CliError {
    fn from(e: TranslateError) -> Self {
        CliError::Translate(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

/// 인자를 처리하고 출력할 한 줄을 반환
/// - `--init-config`: 기본 설정을 config_file에 저장하고 경로 반환
/// - 인자 있음: 공백으로 이어 붙여 변환
/// - 인자 없음: input에서 한 줄만 읽어 변환
fn run(args: &[String], mut input: impl BufRead, config_file: &Path) -> Result<String, CliError> {
    if args.iter().any(|a| a == "--init-config") {
        save_config_to(&PigLatinConfig::default(), config_file).map_err(CliError::Config)?;
        return Ok(config_file.display().to_string());
    }

    let phrase = if args.is_empty() {
        let mut line = String::new();
        input.read_line(&mut line)?;
        line.trim_end_matches(['\n', '\r']).to_string()
    } else {
        args.join(" ")
    };

    let translator = Translator::with_config(load_config_from(config_file));
    Ok(translator.translate(&phrase)?)
}

/// 실행 결과 -> 종료 코드 (실패 시 1)
fn exit_status(result: &Result<String, CliError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = run(&args, io::stdin().lock(), &config_path());

    match &result {
        Ok(line) => println!("{}", line),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
        }
    }
    ExitCode::from(exit_status(&result))
}
