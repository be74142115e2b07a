//! 계산 순서 조립: 유체 확인 → 물성 조회 → 단위 정규화 → 사이징.
//!
//! 입출력은 하지 않는다. 대화형 입력은 [`crate::ui_cli`], 출력은 [`crate::app`]이 맡는다.

use std::fmt;

use thiserror::Error;
use tracing::{info, warn};

use crate::fluid_registry::{self, RegistryError};
use crate::heater::{size_heater, FlowPhase, SizingError, SizingInputs, SizingResult};
use crate::properties::{Phase, PropertyLookupError, PropertyProvider, PropertySource};
use crate::units::{
    to_kelvin, FlowRate, TemperatureUnit, UnitError, NORMAL_PRESSURE_BAR, NORMAL_TEMPERATURE_K,
};

/// 물성을 조회하는 단계.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    NormalConditions,
    Inlet,
    Outlet,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::NormalConditions => "정상 상태",
            Stage::Inlet => "입구",
            Stage::Outlet => "출구",
        };
        f.write_str(name)
    }
}

/// 한 번의 계산을 중단시키는 오류.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("{stage} 물성 조회 단계에서 중단: {source}")]
    Property {
        stage: Stage,
        #[source]
        source: PropertyLookupError,
    },
    #[error(transparent)]
    Unit(#[from] UnitError),
    #[error("사이징 계산 실패: {0}")]
    Sizing(#[from] SizingError),
    #[error("입력 오류: {0}")]
    InvalidInput(&'static str),
}

/// 목록에 있는 유체의 계산 요청.
#[derive(Debug, Clone, PartialEq)]
pub struct KnownFluidRequest {
    pub fluid: String,
    pub pressure_bar: f64,
    pub temperature_unit: TemperatureUnit,
    pub inlet_temperature: f64,
    pub outlet_temperature: f64,
    pub flow: FlowRate,
}

/// 물성을 직접 입력하는 계산 요청.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualRequest {
    pub phase: Phase,
    pub enthalpy_in: f64,
    pub enthalpy_out: f64,
    /// 정상 상태 밀도 [kg/m3]. 체적 유량일 때만 쓰인다.
    pub normal_density: f64,
    pub density_out: f64,
    pub flow: FlowRate,
}

/// 계산 결과와 그 근거가 된 입력값.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingReport {
    pub inputs: SizingInputs,
    pub result: SizingResult,
}

fn flow_phase(phase: &Phase) -> FlowPhase {
    match phase {
        Phase::Liquid => FlowPhase::Liquid,
        Phase::Vapor => FlowPhase::Vapor,
        Phase::Other(label) => {
            warn!(phase = %label, "액체가 아닌 상은 기체 설계 유속으로 계산");
            FlowPhase::Vapor
        }
    }
}

fn run_sizing(inputs: SizingInputs) -> Result<SizingReport, WorkflowError> {
    info!(
        mass_flow_kg_per_h = inputs.mass_flow_kg_per_h,
        enthalpy_in = inputs.enthalpy_in,
        enthalpy_out = inputs.enthalpy_out,
        density_out = inputs.density_out,
        phase = ?inputs.phase_out,
        "사이징 입력"
    );
    let result = size_heater(&inputs)?;
    info!(?result, "사이징 완료");
    Ok(SizingReport { inputs, result })
}

/// 목록에 있는 유체: 정상 상태(필요 시), 입구, 출구 물성을 차례로 조회해 계산한다.
pub fn size_known_fluid<S: PropertySource>(
    provider: &PropertyProvider<S>,
    request: &KnownFluidRequest,
) -> Result<SizingReport, WorkflowError> {
    if request.pressure_bar.is_nan() || request.pressure_bar <= 0.0 {
        return Err(WorkflowError::InvalidInput("압력은 0보다 커야 합니다."));
    }
    let t_in = to_kelvin(request.inlet_temperature, request.temperature_unit);
    let t_out = to_kelvin(request.outlet_temperature, request.temperature_unit);
    if t_in <= 0.0 || t_out <= 0.0 {
        return Err(WorkflowError::InvalidInput(
            "절대온도는 0 K보다 커야 합니다.",
        ));
    }
    let registry_id = fluid_registry::resolve(&request.fluid)?;
    info!(fluid = %request.fluid, registry_id, "작업 유체 확인");

    let fetch = |stage: Stage, pressure_bar: f64, temperature_k: f64| {
        provider
            .fetch(registry_id, pressure_bar, temperature_k)
            .map_err(|source| WorkflowError::Property { stage, source })
    };

    let normal_density = if request.flow.needs_normal_density() {
        let normal = fetch(
            Stage::NormalConditions,
            NORMAL_PRESSURE_BAR,
            NORMAL_TEMPERATURE_K,
        )?;
        Some(normal.density())
    } else {
        None
    };

    let inlet = fetch(Stage::Inlet, request.pressure_bar, t_in)?;
    let outlet = fetch(Stage::Outlet, request.pressure_bar, t_out)?;

    let inputs = SizingInputs {
        mass_flow_kg_per_h: request.flow.to_mass_flow(normal_density)?,
        enthalpy_in: inlet.enthalpy(),
        enthalpy_out: outlet.enthalpy(),
        density_out: outlet.density(),
        phase_out: flow_phase(outlet.phase()),
    };
    run_sizing(inputs)
}

/// 물성 직접 입력: 데이터 소스 없이 계산한다.
pub fn size_manual(request: &ManualRequest) -> Result<SizingReport, WorkflowError> {
    let normal_density = request
        .flow
        .needs_normal_density()
        .then_some(request.normal_density);
    let inputs = SizingInputs {
        mass_flow_kg_per_h: request.flow.to_mass_flow(normal_density)?,
        enthalpy_in: request.enthalpy_in,
        enthalpy_out: request.enthalpy_out,
        density_out: request.density_out,
        phase_out: flow_phase(&request.phase),
    };
    run_sizing(inputs)
}
