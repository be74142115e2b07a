//! NIST Chemistry WebBook 등온 플래시 엔드포인트를 쓰는 데이터 소스.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{IsothermQuery, PropertySource, SourceError};

pub const DEFAULT_ENDPOINT: &str = "https://webbook.nist.gov/cgi/fluid.cgi";

/// 데이터 소스 접속 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebbookConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for WebbookConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
        }
    }
}

/// 요청 쿼리 파라미터 목록. 압력 하한=상한=목표, 증분 1, 유효숫자 5자리.
pub fn query_params(query: &IsothermQuery) -> Vec<(&'static str, String)> {
    let pressure = query.pressure_bar.to_string();
    vec![
        ("Action", "Data".into()),
        ("Wide", "On".into()),
        ("ID", query.registry_id.clone()),
        ("Type", "IsoTherm".into()),
        ("Digits", "5".into()),
        ("PLow", pressure.clone()),
        ("PHigh", pressure),
        ("PInc", "1".into()),
        ("T", query.temperature_k.to_string()),
        ("RefState", "DEF".into()),
        ("TUnit", "K".into()),
        ("PUnit", "bar".into()),
        ("DUnit", "kg/m3".into()),
        ("HUnit", "kJ/kg".into()),
        ("WUnit", "m/s".into()),
        ("VisUnit", "uPa*s".into()),
        ("STUnit", "N/m".into()),
    ]
}

/// 블로킹 HTTP 요청으로 원시 표를 받아오는 소스. 재시도는 하지 않는다.
pub struct WebbookSource {
    agent: ureq::Agent,
    endpoint: String,
}

impl WebbookSource {
    pub fn new(config: &WebbookConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Self {
            agent,
            endpoint: config.endpoint.clone(),
        }
    }
}

impl PropertySource for WebbookSource {
    fn isotherm(&self, query: &IsothermQuery) -> Result<String, SourceError> {
        let mut request = self.agent.get(&self.endpoint);
        for (key, value) in query_params(query) {
            request = request.query(key, &value);
        }
        debug!(url = %request.url(), "WebBook 요청");
        let response = request
            .call()
            .map_err(|e| SourceError::Request(e.to_string()))?;
        Ok(response.into_string()?)
    }
}
