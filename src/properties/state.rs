//! 물성 조회 결과(열역학 상태)와 응답 열 스키마.

use std::fmt;

/// 물성 데이터 응답에 포함되는 항목. 순서는 응답 열 순서와 같다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Temperature,
    Pressure,
    Density,
    Volume,
    InternalEnergy,
    Enthalpy,
    Entropy,
    Cv,
    Cp,
    SoundSpeed,
    JouleThomson,
    Viscosity,
    ThermalConductivity,
    Phase,
}

impl Property {
    pub fn name(self) -> &'static str {
        match self {
            Property::Temperature => "Temperature",
            Property::Pressure => "Pressure",
            Property::Density => "Density",
            Property::Volume => "Volume",
            Property::InternalEnergy => "Internal Energy",
            Property::Enthalpy => "Enthalpy",
            Property::Entropy => "Entropy",
            Property::Cv => "Cv",
            Property::Cp => "Cp",
            Property::SoundSpeed => "Sound speed",
            Property::JouleThomson => "Joule-Thomson coefficient",
            Property::Viscosity => "Viscosity",
            Property::ThermalConductivity => "Thermal Conductivity",
            Property::Phase => "Phase",
        }
    }
}

/// 응답 열 하나: 항목과 요청 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub property: Property,
    pub unit: &'static str,
}

const fn column(property: Property, unit: &'static str) -> Column {
    Column { property, unit }
}

/// 응답 앞부분의 헤더 토큰 수.
pub const HEADER_TOKENS: usize = 30;

/// 헤더 뒤에 오는 숫자 열. 마지막에 상(phase) 토큰 하나가 붙는다.
pub const NUMERIC_COLUMNS: [Column; 13] = [
    column(Property::Temperature, "K"),
    column(Property::Pressure, "bar"),
    column(Property::Density, "kg/m3"),
    column(Property::Volume, "m3/kg"),
    column(Property::InternalEnergy, "kJ/kg"),
    column(Property::Enthalpy, "kJ/kg"),
    column(Property::Entropy, "J/g*K"),
    column(Property::Cv, "J/g*K"),
    column(Property::Cp, "J/g*K"),
    column(Property::SoundSpeed, "m/s"),
    column(Property::JouleThomson, "K/bar"),
    column(Property::Viscosity, "uPa*s"),
    column(Property::ThermalConductivity, "W/m*K"),
];

/// 응답 한 줄이 가져야 하는 최소 토큰 수.
pub const MIN_RESPONSE_TOKENS: usize = HEADER_TOKENS + NUMERIC_COLUMNS.len() + 1;

/// 출구 상태의 상.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Liquid,
    Vapor,
    /// 데이터 소스가 돌려준 그 밖의 표기 (supercritical 등)
    Other(String),
}

impl Phase {
    /// 데이터 소스 표기를 그대로 해석한다.
    pub fn from_label(label: &str) -> Self {
        match label {
            "liquid" => Phase::Liquid,
            "vapor" => Phase::Vapor,
            other => Phase::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Phase::Liquid => "liquid",
            Phase::Vapor => "vapor",
            Phase::Other(label) => label,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 한 점(압력, 온도)에서 조회한 열역학 상태. 값은 [`NUMERIC_COLUMNS`] 단위를 따른다.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermodynamicState {
    values: [f64; NUMERIC_COLUMNS.len()],
    phase: Phase,
}

impl ThermodynamicState {
    pub fn new(values: [f64; NUMERIC_COLUMNS.len()], phase: Phase) -> Self {
        Self { values, phase }
    }

    /// 숫자 항목 값을 반환한다. `Property::Phase`는 숫자가 아니므로 None.
    pub fn get(&self, property: Property) -> Option<f64> {
        NUMERIC_COLUMNS
            .iter()
            .position(|c| c.property == property)
            .map(|idx| self.values[idx])
    }

    pub fn temperature_k(&self) -> f64 {
        self.values[0]
    }

    pub fn pressure_bar(&self) -> f64 {
        self.values[1]
    }

    pub fn density(&self) -> f64 {
        self.values[2]
    }

    pub fn enthalpy(&self) -> f64 {
        self.values[5]
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// 스키마 순서대로 (열, 값) 쌍을 돌려준다.
    pub fn numeric(&self) -> impl Iterator<Item = (Column, f64)> + '_ {
        NUMERIC_COLUMNS.iter().copied().zip(self.values.iter().copied())
    }

    pub fn summary(&self) -> String {
        format!(
            "State(T={:.2}K,P={:.3}bar,ρ={:.4}kg/m³,h={:.2}kJ/kg,{})",
            self.temperature_k(),
            self.pressure_bar(),
            self.density(),
            self.enthalpy(),
            self.phase
        )
    }
}
