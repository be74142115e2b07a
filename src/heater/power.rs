use tracing::warn;

/// 설계 여유율 30%.
pub const POWER_MARGIN: f64 = 1.3;

pub(crate) const SECONDS_PER_HOUR: f64 = 3600.0;

/// 소수 첫째 자리 반올림. 정확히 중간값이면 짝수 쪽으로 맞춘다.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// 히터 전력 계산 결과 [kW].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaterPower {
    pub power_kw: f64,
    pub power_with_margin_kw: f64,
}

/// 엔탈피 수지로 필요한 전기 출력을 계산한다.
///
/// P = ṁ[kg/h] · (h_out - h_in)[kJ/kg] / 3600, 여유 출력은 반올림된 P에 1.3을 곱해 다시 반올림한다.
pub fn electric_power(mass_flow_kg_per_h: f64, enthalpy_in: f64, enthalpy_out: f64) -> HeaterPower {
    let enthalpy_diff = enthalpy_out - enthalpy_in;
    if enthalpy_diff < 0.0 {
        warn!(
            enthalpy_in,
            enthalpy_out, "출구 엔탈피가 입구보다 낮음, 필요 출력이 음수"
        );
    }
    let power_kw = round1(mass_flow_kg_per_h * enthalpy_diff / SECONDS_PER_HOUR);
    HeaterPower {
        power_kw,
        power_with_margin_kw: round1(power_kw * POWER_MARGIN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_balance() {
        let p = electric_power(1000.0, 100.0, 500.0);
        assert_eq!(p.power_kw, 111.1);
        assert_eq!(p.power_with_margin_kw, 144.4);
    }

    #[test]
    fn margin_is_applied_to_rounded_power() {
        for (m, h_in, h_out) in [(250.0, 20.0, 95.0), (5400.0, -120.0, 310.5), (73.0, 0.0, 1.0)] {
            let p = electric_power(m, h_in, h_out);
            assert_eq!(p.power_with_margin_kw, round1(p.power_kw * 1.3));
        }
    }

    #[test]
    fn power_scales_with_mass_flow() {
        let one = electric_power(3600.0, 0.0, 10.0);
        let three = electric_power(3.0 * 3600.0, 0.0, 10.0);
        assert_eq!(one.power_kw, 10.0);
        assert_eq!(three.power_kw, 30.0);
    }

    #[test]
    fn ties_round_to_even() {
        assert_eq!(round1(0.25), 0.2);
        assert_eq!(round1(0.75), 0.8);
        // 9 kg/h × 100 kJ/kg / 3600 = 0.25 kW
        assert_eq!(electric_power(9.0, 0.0, 100.0).power_kw, 0.2);
        // 2.5 kW × 1.3 = 3.25 kW
        let p = electric_power(9.0, 0.0, 1000.0);
        assert_eq!(p.power_kw, 2.5);
        assert_eq!(p.power_with_margin_kw, 3.2);
    }

    #[test]
    fn cooling_gives_negative_power() {
        let p = electric_power(3600.0, 50.0, 40.0);
        assert_eq!(p.power_kw, -10.0);
        assert_eq!(p.power_with_margin_kw, -13.0);
    }
}
