//! 사이징 계산 회귀 테스트. 공개 API만 사용한다.
use approx::assert_relative_eq;
use electric_heater_sizing::fluid_registry::{self, FLUIDS};
use electric_heater_sizing::heater::{
    electric_power, nominal_diameter, outlet_velocity, raw_diameter_mm, round1,
    select_nominal_diameter, size_heater, FlowPhase, SizingError, SizingInputs, DIAMETER_TABLE,
};
use electric_heater_sizing::units::{from_kelvin, to_kelvin, TemperatureUnit};

#[test]
fn registry_lookup_is_total_in_any_case() {
    for fluid in FLUIDS.iter() {
        let mixed: String = fluid
            .display_name
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if i % 2 == 0 {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();
        assert_eq!(fluid_registry::resolve(&mixed).unwrap(), fluid.registry_id);
    }
}

#[test]
fn diameter_table_has_forty_increasing_entries() {
    assert_eq!(DIAMETER_TABLE.len(), 40);
    assert_eq!(DIAMETER_TABLE[0], 2.5);
    assert_eq!(DIAMETER_TABLE[39], 4000.0);
    assert!(DIAMETER_TABLE.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn midpoints_bucket_to_upper_entry() {
    for pair in DIAMETER_TABLE.windows(2) {
        let mid = (pair[0] + pair[1]) / 2.0;
        assert_eq!(select_nominal_diameter(mid).unwrap(), pair[1]);
    }
}

#[test]
fn enthalpy_balance_reference() {
    let p = electric_power(1000.0, 100.0, 500.0);
    assert_eq!(p.power_kw, 111.1);
    assert_eq!(p.power_with_margin_kw, 144.4);
    assert_eq!(p.power_with_margin_kw, round1(p.power_kw * 1.3));
}

#[test]
fn liquid_nozzle_reference() {
    // 3590 kg/h, 800 kg/m3, 3 m/s → 이론 내경 23.0 mm → DN25
    let raw = raw_diameter_mm(3590.0, 800.0, 3.0);
    assert_relative_eq!(raw, 23.0, epsilon = 0.01);
    assert_eq!(nominal_diameter(3590.0, 800.0, FlowPhase::Liquid).unwrap(), 25.0);
    assert_eq!(outlet_velocity(25.0, 3590.0, 800.0), 2.5);
}

#[test]
fn velocity_stays_below_target_over_flow_sweep() {
    for phase in [FlowPhase::Liquid, FlowPhase::Vapor] {
        let density = match phase {
            FlowPhase::Liquid => 870.0,
            FlowPhase::Vapor => 3.4,
        };
        let mut mass_flow = 1.0;
        while mass_flow < 1.0e6 {
            let dn = nominal_diameter(mass_flow, density, phase).unwrap();
            let v = outlet_velocity(dn, mass_flow, density);
            assert!(v <= phase.target_velocity(), "{phase:?} {mass_flow} DN{dn} {v}");
            mass_flow *= 1.7;
        }
    }
}

#[test]
fn out_of_table_flow_is_reported() {
    let input = SizingInputs {
        mass_flow_kg_per_h: 5.0e7,
        enthalpy_in: 10.0,
        enthalpy_out: 20.0,
        density_out: 0.5,
        phase_out: FlowPhase::Vapor,
    };
    match size_heater(&input) {
        Err(SizingError::DiameterOutOfRange {
            diameter_mm,
            max_mm,
        }) => {
            assert!(diameter_mm > max_mm);
            assert_eq!(max_mm, 4000.0);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn celsius_round_trip() {
    for t in [-253.0, -182.96, 15.0, 99.99] {
        let k = to_kelvin(t, TemperatureUnit::Celsius);
        assert_relative_eq!(from_kelvin(k, TemperatureUnit::Celsius), t, epsilon = 1e-9);
    }
}
