//! 작업 유체 열역학 물성 조회.
//!
//! 외부 등온 플래시 데이터 소스에 (CAS, 압력, 온도) 한 점을 요청하고, 공백으로
//! 구분된 응답을 [`state::NUMERIC_COLUMNS`] 스키마에 맞춰 [`ThermodynamicState`]로
//! 바꾼다. 응답 형식: 헤더 30 토큰, 숫자 13 토큰, 마지막 토큰이 상(phase) 표기.

pub mod state;
pub mod webbook;

use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

pub use state::{Column, Phase, Property, ThermodynamicState};
pub use webbook::{WebbookConfig, WebbookSource};

use state::{HEADER_TOKENS, MIN_RESPONSE_TOKENS, NUMERIC_COLUMNS};

/// 한 점 조회 요청.
#[derive(Debug, Clone, PartialEq)]
pub struct IsothermQuery {
    pub registry_id: String,
    pub pressure_bar: f64,
    pub temperature_k: f64,
}

impl fmt::Display for IsothermQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} bar, {} K",
            self.registry_id, self.pressure_bar, self.temperature_k
        )
    }
}

/// 데이터 소스 자체의 오류 (통신, 본문 읽기).
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("요청 실패: {0}")]
    Request(String),
    #[error("응답 본문 읽기 실패: {0}")]
    Body(#[from] std::io::Error),
}

/// 물성 조회 실패. 해당 계산 전체를 중단시키는 오류다.
#[derive(Debug, Error)]
pub enum PropertyLookupError {
    #[error("물성 조회 실패 ({query}): {source}")]
    Source {
        query: IsothermQuery,
        #[source]
        source: SourceError,
    },
    #[error("물성 응답이 너무 짧음 ({query}): 토큰 {tokens}개, 최소 {expected}개 필요")]
    ShortResponse {
        query: IsothermQuery,
        tokens: usize,
        expected: usize,
    },
    #[error("물성 응답의 {column} 값을 숫자로 읽을 수 없음 ({query}): '{token}'")]
    InvalidNumber {
        query: IsothermQuery,
        column: &'static str,
        token: String,
    },
}

/// 원시 응답 텍스트를 돌려주는 데이터 소스.
pub trait PropertySource {
    fn isotherm(&self, query: &IsothermQuery) -> Result<String, SourceError>;
}

impl<S: PropertySource + ?Sized> PropertySource for &S {
    fn isotherm(&self, query: &IsothermQuery) -> Result<String, SourceError> {
        (**self).isotherm(query)
    }
}

/// 데이터 소스 응답을 열역학 상태로 해석하는 조회기.
#[derive(Debug, Clone)]
pub struct PropertyProvider<S> {
    source: S,
}

impl<S: PropertySource> PropertyProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// 주어진 압력[bar]과 절대온도[K]에서 물성을 조회한다.
    pub fn fetch(
        &self,
        registry_id: &str,
        pressure_bar: f64,
        temperature_k: f64,
    ) -> Result<ThermodynamicState, PropertyLookupError> {
        let query = IsothermQuery {
            registry_id: registry_id.to_string(),
            pressure_bar,
            temperature_k,
        };
        debug!(%query, "물성 조회 요청");
        let body = match self.source.isotherm(&query) {
            Ok(body) => body,
            Err(source) => return Err(PropertyLookupError::Source { query, source }),
        };
        let state = parse_response(&body, &query)?;
        debug!(state = %state.summary(), "물성 조회 완료");
        Ok(state)
    }
}

/// 공백 구분 응답을 스키마 순서대로 짝지어 상태를 만든다.
pub fn parse_response(
    body: &str,
    query: &IsothermQuery,
) -> Result<ThermodynamicState, PropertyLookupError> {
    let tokens: Vec<&str> = body.split_whitespace().collect();
    if tokens.len() < MIN_RESPONSE_TOKENS {
        return Err(PropertyLookupError::ShortResponse {
            query: query.clone(),
            tokens: tokens.len(),
            expected: MIN_RESPONSE_TOKENS,
        });
    }
    if tokens.len() > MIN_RESPONSE_TOKENS {
        warn!(
            tokens = tokens.len(),
            "물성 응답에 예상보다 많은 토큰이 있음, 초과분은 무시"
        );
    }

    let numeric = &tokens[HEADER_TOKENS..HEADER_TOKENS + NUMERIC_COLUMNS.len()];
    let mut values = [0.0; NUMERIC_COLUMNS.len()];
    for ((slot, column), token) in values.iter_mut().zip(NUMERIC_COLUMNS.iter()).zip(numeric) {
        *slot = token
            .parse::<f64>()
            .map_err(|_| PropertyLookupError::InvalidNumber {
                query: query.clone(),
                column: column.property.name(),
                token: token.to_string(),
            })?;
    }
    let phase = tokens
        .last()
        .map(|label| Phase::from_label(label))
        .unwrap_or(Phase::Other(String::new()));

    Ok(ThermodynamicState::new(values, phase))
}
