use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::fluid_registry;
use crate::heater::SizingResult;
use crate::i18n::{keys, Translator};
use crate::properties::Phase;
use crate::units::{to_kelvin, translate_phase, FlowRate, TemperatureUnit};
use crate::workflow::{KnownFluidRequest, ManualRequest};

/// 예/아니오 답을 해석한다. 한국어, 영어, 러시아어 표기를 받는다.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "yes" | "y" | "예" | "네" | "да" => Some(true),
        "no" | "n" | "아니오" | "아니요" | "нет" => Some(false),
        _ => None,
    }
}

/// 프롬프트 출력과 입력 재요청을 담당하는 콘솔.
pub struct Console<'a, R, W> {
    input: R,
    output: W,
    tr: &'a Translator,
}

impl<'a> Console<'a, io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(tr: &'a Translator) -> Self {
        Console::new(io::stdin().lock(), io::stdout(), tr)
    }
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(input: R, output: W, tr: &'a Translator) -> Self {
        Self { input, output, tr }
    }

    pub fn println(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    pub fn say(&mut self, key: &str) -> Result<(), AppError> {
        let line = self.tr.t(key);
        self.println(line)
    }

    pub fn report_error(&mut self, err: &dyn std::error::Error) -> Result<(), AppError> {
        let line = format!("{}: {err}", self.tr.t(keys::ERROR_PREFIX));
        self.println(&line)
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "입력이 종료되었습니다.",
            )));
        }
        Ok(buf.trim().to_string())
    }

    pub fn read_f64(&mut self, key: &str) -> Result<f64, AppError> {
        loop {
            let prompt = self.tr.t(key);
            let s = self.read_line(prompt)?;
            match s.replace(',', ".").parse::<f64>() {
                Ok(v) if v.is_finite() => return Ok(v),
                _ => self.say(keys::ERROR_INVALID_NUMBER)?,
            }
        }
    }

    pub fn read_positive_f64(&mut self, key: &str) -> Result<f64, AppError> {
        loop {
            let v = self.read_f64(key)?;
            if v > 0.0 {
                return Ok(v);
            }
            self.say(keys::ERROR_NOT_POSITIVE)?;
        }
    }

    /// 절대영도 이하의 온도는 다시 묻는다.
    pub fn read_temperature(&mut self, key: &str, unit: TemperatureUnit) -> Result<f64, AppError> {
        loop {
            let v = self.read_f64(key)?;
            if to_kelvin(v, unit) > 0.0 {
                return Ok(v);
            }
            self.say(keys::ERROR_BELOW_ABSOLUTE_ZERO)?;
        }
    }

    pub fn read_yes_no(&mut self, key: &str) -> Result<bool, AppError> {
        loop {
            let prompt = self.tr.t(key);
            let s = self.read_line(prompt)?;
            match parse_yes_no(&s) {
                Some(answer) => return Ok(answer),
                None => self.say(keys::ERROR_INVALID_ANSWER)?,
            }
        }
    }

    /// 등록된 유체 이름이 나올 때까지 다시 묻는다.
    pub fn read_fluid(&mut self) -> Result<String, AppError> {
        loop {
            let prompt = self.tr.t(keys::PROMPT_FLUID_NAME);
            let name = self.read_line(prompt)?;
            match fluid_registry::lookup(&name) {
                Ok(fluid) => return Ok(fluid.display_name.to_string()),
                Err(_) => self.say(keys::FLUID_NOT_FOUND)?,
            }
        }
    }

    pub fn read_phase(&mut self) -> Result<Phase, AppError> {
        loop {
            let prompt = self.tr.t(keys::PROMPT_PHASE);
            let answer = self.read_line(prompt)?;
            match translate_phase(&answer) {
                Ok(phase) => return Ok(phase),
                Err(_) => self.say(keys::ERROR_INVALID_ANSWER)?,
            }
        }
    }

    fn read_flow(&mut self) -> Result<FlowRate, AppError> {
        if self.read_yes_no(keys::PROMPT_NORMAL_FLOW)? {
            Ok(FlowRate::normal_volume(
                self.read_positive_f64(keys::PROMPT_NORMAL_FLOW_VALUE)?,
            ))
        } else {
            Ok(FlowRate::mass(
                self.read_positive_f64(keys::PROMPT_MASS_FLOW_VALUE)?,
            ))
        }
    }

    pub fn print_known_fluids(&mut self) -> Result<(), AppError> {
        let names: Vec<&str> = fluid_registry::display_names().collect();
        let line = format!("{} {}", self.tr.t(keys::KNOWN_FLUIDS), names.join(", "));
        self.println(&line)
    }

    /// 목록 유체 계산에 필요한 값을 묻는다.
    pub fn prompt_known_fluid(&mut self) -> Result<KnownFluidRequest, AppError> {
        let fluid = self.read_fluid()?;
        let pressure_bar = self.read_positive_f64(keys::PROMPT_PRESSURE)?;
        let celsius = self.read_yes_no(keys::PROMPT_CELSIUS)?;
        let (temperature_unit, inlet_key, outlet_key) = if celsius {
            (
                TemperatureUnit::Celsius,
                keys::PROMPT_INLET_T_C,
                keys::PROMPT_OUTLET_T_C,
            )
        } else {
            (
                TemperatureUnit::Kelvin,
                keys::PROMPT_INLET_T_K,
                keys::PROMPT_OUTLET_T_K,
            )
        };
        let inlet_temperature = self.read_temperature(inlet_key, temperature_unit)?;
        let outlet_temperature = self.read_temperature(outlet_key, temperature_unit)?;
        let flow = self.read_flow()?;
        Ok(KnownFluidRequest {
            fluid,
            pressure_bar,
            temperature_unit,
            inlet_temperature,
            outlet_temperature,
            flow,
        })
    }

    /// 물성 직접 입력 계산에 필요한 값을 묻는다.
    pub fn prompt_manual(&mut self) -> Result<ManualRequest, AppError> {
        let phase = self.read_phase()?;
        let enthalpy_in = self.read_f64(keys::PROMPT_ENTHALPY_IN)?;
        let enthalpy_out = self.read_f64(keys::PROMPT_ENTHALPY_OUT)?;
        let normal_density = self.read_positive_f64(keys::PROMPT_NORMAL_DENSITY)?;
        let density_out = self.read_positive_f64(keys::PROMPT_OUTLET_DENSITY)?;
        let flow = self.read_flow()?;
        Ok(ManualRequest {
            phase,
            enthalpy_in,
            enthalpy_out,
            normal_density,
            density_out,
            flow,
        })
    }

    /// 결과 네 줄을 출력한다.
    pub fn print_result(&mut self, result: &SizingResult) -> Result<(), AppError> {
        for line in report_lines(self.tr, result) {
            self.println(&line)?;
        }
        Ok(())
    }
}

/// 결과 표시 줄: 출력, 여유 출력, 호칭경, 출구 유속.
pub fn report_lines(tr: &Translator, result: &SizingResult) -> [String; 4] {
    [
        format!("{} {:.1} kW", tr.t(keys::RESULT_POWER), result.power_kw),
        format!(
            "{} {:.1} kW",
            tr.t(keys::RESULT_POWER_MARGIN),
            result.power_with_margin_kw
        ),
        format!(
            "{} {}",
            tr.t(keys::RESULT_NOMINAL_DIAMETER),
            result.nominal_diameter_label()
        ),
        format!(
            "{} {:.1} m/s",
            tr.t(keys::RESULT_VELOCITY),
            result.outlet_velocity_m_per_s
        ),
    ]
}
