//! 사용자 입력 단위를 내부 계산 기준(K, bar, kg/h)으로 정규화한다.

pub mod flow;
pub mod phase;
pub mod temperature;

use thiserror::Error;

pub use flow::{FlowBasis, FlowRate, NORMAL_PRESSURE_BAR};
pub use phase::translate_phase;
pub use temperature::{from_kelvin, to_kelvin, TemperatureUnit, NORMAL_TEMPERATURE_K};

/// 단위 정규화 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// 기체/액체 외의 상 입력
    #[error("알 수 없는 상 입력: {0}")]
    InvalidPhase(String),
    /// 정상 상태 체적 유량인데 정상 밀도가 주어지지 않음
    #[error("정상 상태 유량 환산에 정상 밀도가 필요합니다.")]
    MissingNormalDensity,
}
