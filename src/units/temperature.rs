use serde::{Deserialize, Serialize};

/// 절대영도 오프셋이자 정상 상태 기준 온도 [K].
pub const NORMAL_TEMPERATURE_K: f64 = 273.15;

/// 입력 온도 단위. 내부 계산은 항상 켈빈이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
}

/// 주어진 값을 켈빈으로 변환한다.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value + NORMAL_TEMPERATURE_K,
    }
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => value_k - NORMAL_TEMPERATURE_K,
    }
}
