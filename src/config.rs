use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use crate::form::CalcForm;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// HTTP 서버 바인딩 설정.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9999,
        }
    }
}

impl ServerConfig {
    /// `host:port`를 소켓 주소로 변환한다.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let text = format!("{}:{}", self.host, self.port);
        text.parse().map_err(|_| ConfigError::Address(text))
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    /// `LOAD DATASET` 버튼과 CLI 일괄 계산에 쓰는 입력값.
    /// 표에 없는 항목은 기준 데이터셋 값을 유지한다.
    #[serde(deserialize_with = "deserialize_dataset")]
    pub dataset: CalcForm,
}

/// `[dataset]` 항목 값. 따옴표 없이 숫자로 적어도 받는다.
#[derive(Deserialize)]
#[serde(untagged)]
enum DatasetValue {
    Text(String),
    Number(f64),
}

/// 기준 데이터셋 위에 `[dataset]` 표의 항목만 덮어쓴다. 모르는 항목은 오류.
fn deserialize_dataset<'de, D>(deserializer: D) -> Result<CalcForm, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = BTreeMap::<String, DatasetValue>::deserialize(deserializer)?;
    let mut dataset = CalcForm::reference_dataset();
    for (name, value) in entries {
        let text = match value {
            DatasetValue::Text(text) => text,
            DatasetValue::Number(number) => number.to_string(),
        };
        if !dataset.set(&name, text) {
            return Err(serde::de::Error::custom(format!(
                "알 수 없는 데이터셋 항목: {name}"
            )));
        }
    }
    Ok(dataset)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            dataset: CalcForm::reference_dataset(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("잘못된 서버 주소: {0}")]
    Address(String),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 돌려준다.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), "설정 파일 로드");
        Ok(cfg)
    } else {
        tracing::info!(path = %path.display(), "설정 파일 없음, 기본값 사용");
        Ok(Config::default())
    }
}

impl Config {
    /// 설정을 TOML 파일로 저장한다.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.server.port, 9999);
        assert_eq!(cfg.dataset.sm, "1300");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\nport = 8080\n\n[dataset]\nsm = \"900\"\n").unwrap();
        let cfg = load_or_default(&path).unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.dataset.sm, "900");
        assert_eq!(cfg.dataset.unom, "10");
        assert_eq!(cfg.dataset.snomt3, "6.3");
    }

    #[test]
    fn dataset_accepts_bare_numbers_and_blank_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[dataset]\nsk = 250\nuk = 9.5\nucn = \"\"\n").unwrap();
        let cfg = load_or_default(&path).unwrap();
        assert_eq!(cfg.dataset.sk, "250");
        assert_eq!(cfg.dataset.uk, "9.5");
        assert_eq!(cfg.dataset.ucn, "");
        assert_eq!(cfg.dataset.sm, "1300");
    }

    #[test]
    fn unknown_dataset_entry_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[dataset]\nsnomt4 = \"6.3\"\n").unwrap();
        let err = load_or_default(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("snomt4"), "{err}");
    }

    #[test]
    fn mistyped_port_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\nport = \"x\"\n").unwrap();
        assert!(matches!(load_or_default(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::default();
        cfg.save(&path).unwrap();
        assert_eq!(load_or_default(&path).unwrap(), cfg);
    }

    #[test]
    fn bad_host_is_reported() {
        let server = ServerConfig {
            host: "not a host".into(),
            port: 1,
        };
        assert!(matches!(server.socket_addr(), Err(ConfigError::Address(_))));
    }
}
