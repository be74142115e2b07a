use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::properties::WebbookConfig;

/// 설정 파일을 지정하지 않았을 때 찾는 기본 경로.
pub const DEFAULT_CONFIG_FILE: &str = "heater_sizing.toml";

/// 애플리케이션 설정을 표현한다. 파일이 없으면 기본값을 쓰고, 파일을 새로 만들지는 않는다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 표시 언어 (ko/en/auto). 비어 있으면 시스템 로케일을 따른다.
    pub language: Option<String>,
    pub property_source: WebbookConfig,
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
}

/// 지정된 설정 파일을 읽는다. 경로가 없으면 기본 파일을, 그것도 없으면 기본 설정을 쓴다.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => from_file(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                from_file(default_path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn from_file(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// TOML 문자열에서 설정을 읽는다. 빠진 항목은 기본값으로 채운다.
pub fn parse(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}
