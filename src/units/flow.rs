use serde::{Deserialize, Serialize};

use super::UnitError;

/// 정상 상태 기준 압력 [bar].
pub const NORMAL_PRESSURE_BAR: f64 = 1.013;

/// 유량 입력 기준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowBasis {
    /// 정상 상태 체적 유량 [nm3/h]
    NormalVolume,
    /// 질량 유량 [kg/h]
    Mass,
}

/// 사용자가 입력한 유량.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowRate {
    pub basis: FlowBasis,
    pub value: f64,
}

impl FlowRate {
    pub fn normal_volume(nm3_per_h: f64) -> Self {
        Self {
            basis: FlowBasis::NormalVolume,
            value: nm3_per_h,
        }
    }

    pub fn mass(kg_per_h: f64) -> Self {
        Self {
            basis: FlowBasis::Mass,
            value: kg_per_h,
        }
    }

    /// 질량 유량으로 바꾸려면 정상 상태 밀도가 필요한지.
    pub fn needs_normal_density(&self) -> bool {
        self.basis == FlowBasis::NormalVolume
    }

    /// 질량 유량 [kg/h]으로 환산한다. 체적 기준이면 정상 상태 밀도[kg/m3]를 곱한다.
    pub fn to_mass_flow(&self, normal_density: Option<f64>) -> Result<f64, UnitError> {
        match self.basis {
            FlowBasis::Mass => Ok(self.value),
            FlowBasis::NormalVolume => {
                let density = normal_density.ok_or(UnitError::MissingNormalDensity)?;
                Ok(self.value * density)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_flow_passes_through() {
        let flow = FlowRate::mass(1200.0);
        assert!(!flow.needs_normal_density());
        assert_eq!(flow.to_mass_flow(None).unwrap(), 1200.0);
        assert_eq!(flow.to_mass_flow(Some(5.0)).unwrap(), 1200.0);
    }

    #[test]
    fn normal_volume_uses_normal_density() {
        let flow = FlowRate::normal_volume(100.0);
        assert!(flow.needs_normal_density());
        assert_eq!(flow.to_mass_flow(Some(1.25)).unwrap(), 125.0);
        assert_eq!(
            flow.to_mass_flow(None).unwrap_err(),
            UnitError::MissingNormalDensity
        );
    }
}
