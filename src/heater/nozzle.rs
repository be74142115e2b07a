use std::f64::consts::PI;

use tracing::debug;

use super::power::{round1, SECONDS_PER_HOUR};
use super::SizingError;

/// 표준 호칭경 DN [mm], 오름차순.
pub const DIAMETER_TABLE: [f64; 40] = [
    2.5, 3.0, 4.0, 5.0, 6.0, 10.0, 15.0, 20.0, 25.0, 32.0, 40.0, 50.0, 65.0, 80.0, 100.0, 125.0,
    150.0, 200.0, 250.0, 300.0, 350.0, 400.0, 450.0, 500.0, 600.0, 700.0, 800.0, 900.0, 1000.0,
    1200.0, 1400.0, 1600.0, 1800.0, 2000.0, 2200.0, 2400.0, 2800.0, 3000.0, 3400.0, 4000.0,
];

/// 액체 설계 유속 [m/s].
pub const LIQUID_VELOCITY: f64 = 3.0;
/// 기체 설계 유속 [m/s].
pub const VAPOR_VELOCITY: f64 = 17.0;

const MM_PER_M: f64 = 1000.0;

/// 노즐 사이징에 쓰는 출구 상.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPhase {
    Liquid,
    Vapor,
}

impl FlowPhase {
    pub fn target_velocity(self) -> f64 {
        match self {
            FlowPhase::Liquid => LIQUID_VELOCITY,
            FlowPhase::Vapor => VAPOR_VELOCITY,
        }
    }
}

/// 목표 유속을 만족하는 이론 내경 [mm].
pub fn raw_diameter_mm(mass_flow_kg_per_h: f64, density: f64, velocity: f64) -> f64 {
    let area_mm2 = mass_flow_kg_per_h / (velocity * density) * MM_PER_M.powi(2) / SECONDS_PER_HOUR;
    (4.0 * area_mm2 / PI).sqrt()
}

/// 이론 내경을 표의 다음 호칭경으로 올린다.
///
/// `low < d <= high`인 인접 쌍의 `high`를 고른다. 첫 항목 이하는 첫 항목,
/// 마지막 항목을 넘으면 [`SizingError::DiameterOutOfRange`].
pub fn select_nominal_diameter(diameter_mm: f64) -> Result<f64, SizingError> {
    let first = DIAMETER_TABLE[0];
    if diameter_mm <= first {
        return Ok(first);
    }
    DIAMETER_TABLE
        .windows(2)
        .find(|pair| pair[0] < diameter_mm && diameter_mm <= pair[1])
        .map(|pair| pair[1])
        .ok_or(SizingError::DiameterOutOfRange {
            diameter_mm,
            max_mm: DIAMETER_TABLE[DIAMETER_TABLE.len() - 1],
        })
}

/// 출구 상과 유량으로 노즐 호칭경을 정한다.
pub fn nominal_diameter(
    mass_flow_kg_per_h: f64,
    density: f64,
    phase: FlowPhase,
) -> Result<f64, SizingError> {
    let velocity = phase.target_velocity();
    let raw = raw_diameter_mm(mass_flow_kg_per_h, density, velocity);
    let nominal = select_nominal_diameter(raw)?;
    debug!(?phase, velocity, raw_mm = raw, nominal_mm = nominal, "노즐 호칭경 선정");
    Ok(nominal)
}

/// 호칭경 노즐을 지나는 실제 유속 [m/s], 소수 첫째 자리.
pub fn outlet_velocity(nominal_mm: f64, mass_flow_kg_per_h: f64, density: f64) -> f64 {
    let area_m2 = PI * nominal_mm.powi(2) / (4.0 * MM_PER_M.powi(2));
    let volumetric_flow_m3_per_h = mass_flow_kg_per_h / density;
    round1(volumetric_flow_m3_per_h / (area_m2 * SECONDS_PER_HOUR))
}
