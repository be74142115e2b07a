//! 전기 인라인 히터 사이징 계산 모듈.
//!
//! 입력은 이미 정규화된 값(kg/h, kJ/kg, kg/m3)이며, 물성 조회나 유체 목록에는
//! 의존하지 않는다.

pub mod nozzle;
pub mod power;

use thiserror::Error;

pub use nozzle::{
    nominal_diameter, outlet_velocity, raw_diameter_mm, select_nominal_diameter, FlowPhase,
    DIAMETER_TABLE, LIQUID_VELOCITY, VAPOR_VELOCITY,
};
pub use power::{electric_power, round1, HeaterPower, POWER_MARGIN};

/// 사이징 계산 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    /// 입력값이 잘못된 경우
    #[error("입력 오류: {0}")]
    InvalidInput(&'static str),
    /// 계산된 내경이 표준 호칭경 표를 벗어난 경우
    #[error("계산 내경 {diameter_mm:.1} mm가 최대 호칭경 DN{max_mm}를 초과합니다.")]
    DiameterOutOfRange { diameter_mm: f64, max_mm: f64 },
}

/// 히터 사이징 입력값.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingInputs {
    pub mass_flow_kg_per_h: f64,
    /// 입구 비엔탈피 [kJ/kg]
    pub enthalpy_in: f64,
    /// 출구 비엔탈피 [kJ/kg]
    pub enthalpy_out: f64,
    /// 출구 밀도 [kg/m3]
    pub density_out: f64,
    pub phase_out: FlowPhase,
}

/// 히터 사이징 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingResult {
    pub power_kw: f64,
    pub power_with_margin_kw: f64,
    pub nominal_diameter_mm: f64,
    pub outlet_velocity_m_per_s: f64,
}

impl SizingResult {
    /// `DN25`, `DN2.5` 형식의 호칭경 표기.
    pub fn nominal_diameter_label(&self) -> String {
        format!("DN{}", self.nominal_diameter_mm)
    }
}

/// 엔탈피 수지, 노즐 호칭경, 출구 유속을 차례로 계산한다.
pub fn size_heater(input: &SizingInputs) -> Result<SizingResult, SizingError> {
    if !(input.mass_flow_kg_per_h.is_finite() && input.mass_flow_kg_per_h > 0.0) {
        return Err(SizingError::InvalidInput("질량 유량은 0보다 커야 합니다."));
    }
    if !(input.density_out.is_finite() && input.density_out > 0.0) {
        return Err(SizingError::InvalidInput("출구 밀도는 0보다 커야 합니다."));
    }
    if !(input.enthalpy_in.is_finite() && input.enthalpy_out.is_finite()) {
        return Err(SizingError::InvalidInput("엔탈피 값이 유효하지 않습니다."));
    }

    let power = electric_power(input.mass_flow_kg_per_h, input.enthalpy_in, input.enthalpy_out);
    let dn = nominal_diameter(input.mass_flow_kg_per_h, input.density_out, input.phase_out)?;
    let velocity = outlet_velocity(dn, input.mass_flow_kg_per_h, input.density_out);

    Ok(SizingResult {
        power_kw: power.power_kw,
        power_with_margin_kw: power.power_with_margin_kw,
        nominal_diameter_mm: dn,
        outlet_velocity_m_per_s: velocity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn liquid(mass_flow: f64) -> SizingInputs {
        SizingInputs {
            mass_flow_kg_per_h: mass_flow,
            enthalpy_in: 100.0,
            enthalpy_out: 500.0,
            density_out: 800.0,
            phase_out: FlowPhase::Liquid,
        }
    }

    #[test]
    fn full_liquid_sizing() {
        let res = size_heater(&liquid(1000.0)).unwrap();
        assert_eq!(res.power_kw, 111.1);
        assert_eq!(res.power_with_margin_kw, 144.4);
        assert_eq!(res.nominal_diameter_mm, 15.0);
        assert_eq!(res.outlet_velocity_m_per_s, 2.0);
        assert_eq!(res.nominal_diameter_label(), "DN15");
    }

    #[test]
    fn fractional_dn_label() {
        let res = SizingResult {
            power_kw: 0.0,
            power_with_margin_kw: 0.0,
            nominal_diameter_mm: 2.5,
            outlet_velocity_m_per_s: 0.0,
        };
        assert_eq!(res.nominal_diameter_label(), "DN2.5");
    }

    #[test]
    fn rejects_non_positive_flow_and_density() {
        assert!(matches!(
            size_heater(&liquid(0.0)),
            Err(SizingError::InvalidInput(_))
        ));
        let mut input = liquid(1000.0);
        input.density_out = -1.0;
        assert!(matches!(
            size_heater(&input),
            Err(SizingError::InvalidInput(_))
        ));
    }

    #[test]
    fn oversized_flow_is_out_of_range() {
        // 밀도 1 kg/m3 기체 1e8 kg/h → 내경 약 45 m
        let input = SizingInputs {
            mass_flow_kg_per_h: 1.0e8,
            enthalpy_in: 0.0,
            enthalpy_out: 1.0,
            density_out: 1.0,
            phase_out: FlowPhase::Vapor,
        };
        assert!(matches!(
            size_heater(&input),
            Err(SizingError::DiameterOutOfRange { .. })
        ));
    }
}
