use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_TITLE: &str = "general.app_title";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const CALC_ABORTED: &str = "general.calc_aborted";

    pub const KNOWN_FLUIDS: &str = "fluid.known_list";
    pub const PROMPT_FLUID_IN_LIST: &str = "fluid.prompt_in_list";
    pub const PROMPT_FLUID_NAME: &str = "fluid.prompt_name";
    pub const FLUID_NOT_FOUND: &str = "fluid.not_found";

    pub const PROMPT_PRESSURE: &str = "prompt.pressure";
    pub const PROMPT_CELSIUS: &str = "prompt.celsius";
    pub const PROMPT_INLET_T_C: &str = "prompt.inlet_temperature_c";
    pub const PROMPT_INLET_T_K: &str = "prompt.inlet_temperature_k";
    pub const PROMPT_OUTLET_T_C: &str = "prompt.outlet_temperature_c";
    pub const PROMPT_OUTLET_T_K: &str = "prompt.outlet_temperature_k";
    pub const PROMPT_NORMAL_FLOW: &str = "prompt.normal_flow";
    pub const PROMPT_NORMAL_FLOW_VALUE: &str = "prompt.normal_flow_value";
    pub const PROMPT_MASS_FLOW_VALUE: &str = "prompt.mass_flow_value";

    pub const PROMPT_PHASE: &str = "manual.prompt_phase";
    pub const PROMPT_ENTHALPY_IN: &str = "manual.prompt_enthalpy_in";
    pub const PROMPT_ENTHALPY_OUT: &str = "manual.prompt_enthalpy_out";
    pub const PROMPT_NORMAL_DENSITY: &str = "manual.prompt_normal_density";
    pub const PROMPT_OUTLET_DENSITY: &str = "manual.prompt_outlet_density";

    pub const PROMPT_AGAIN: &str = "prompt.again";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_NOT_POSITIVE: &str = "error.not_positive";
    pub const ERROR_INVALID_ANSWER: &str = "error.invalid_answer";
    pub const ERROR_BELOW_ABSOLUTE_ZERO: &str = "error.below_absolute_zero";

    pub const RESULT_POWER: &str = "result.power";
    pub const RESULT_POWER_MARGIN: &str = "result.power_margin";
    pub const RESULT_NOMINAL_DIAMETER: &str = "result.nominal_diameter";
    pub const RESULT_VELOCITY: &str = "result.velocity";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    get_locale().and_then(|loc| normalize_locale_string(&loc))
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_TITLE => "\n=== 전기 인라인 히터 사이징 ===",
        APP_EXIT => "프로그램을 종료합니다.",
        CALC_ABORTED => "계산을 중단했습니다. 입력값을 확인한 뒤 다시 계산하세요.",
        KNOWN_FLUIDS => "등록된 작업 유체:",
        PROMPT_FLUID_IN_LIST => "작업 유체가 목록에 있습니까? (예/아니오): ",
        PROMPT_FLUID_NAME => "작업 유체 이름: ",
        FLUID_NOT_FOUND => "작업 유체를 찾을 수 없습니다. 다시 입력하세요.",
        PROMPT_PRESSURE => "운전 압력 [bar]: ",
        PROMPT_CELSIUS => "온도를 섭씨로 입력합니까? (예/아니오): ",
        PROMPT_INLET_T_C => "입구 온도 [°C]: ",
        PROMPT_INLET_T_K => "입구 온도 [K]: ",
        PROMPT_OUTLET_T_C => "출구 온도 [°C]: ",
        PROMPT_OUTLET_T_K => "출구 온도 [K]: ",
        PROMPT_NORMAL_FLOW => "유량을 정상 상태 체적 유량으로 입력합니까? (예/아니오): ",
        PROMPT_NORMAL_FLOW_VALUE => "정상 상태 유량 [nm3/h]: ",
        PROMPT_MASS_FLOW_VALUE => "질량 유량 [kg/h]: ",
        PROMPT_PHASE => "기체입니까, 액체입니까? (기체/액체): ",
        PROMPT_ENTHALPY_IN => "입구 비엔탈피 [kJ/kg]: ",
        PROMPT_ENTHALPY_OUT => "출구 비엔탈피 [kJ/kg]: ",
        PROMPT_NORMAL_DENSITY => "정상 상태 밀도 [kg/m3]: ",
        PROMPT_OUTLET_DENSITY => "출구 밀도 [kg/m3]: ",
        PROMPT_AGAIN => "다시 계산하시겠습니까? (예/아니오): ",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_NOT_POSITIVE => "0보다 큰 값을 입력하세요.",
        ERROR_INVALID_ANSWER => "잘못된 입력입니다. 다시 입력하세요.",
        ERROR_BELOW_ABSOLUTE_ZERO => "절대영도보다 높은 온도를 입력하세요.",
        RESULT_POWER => "필요 히터 출력:",
        RESULT_POWER_MARGIN => "30% 여유 출력:",
        RESULT_NOMINAL_DIAMETER => "노즐 호칭경:",
        RESULT_VELOCITY => "출구 유속:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_TITLE => "\n=== Electric Inline Heater Sizing ===",
        APP_EXIT => "Exiting application.",
        CALC_ABORTED => "Calculation aborted. Check the inputs and run it again.",
        KNOWN_FLUIDS => "Known fluids:",
        PROMPT_FLUID_IN_LIST => "Is your fluid in the list? (yes/no): ",
        PROMPT_FLUID_NAME => "Fluid name: ",
        FLUID_NOT_FOUND => "Fluid not found. Please try again.",
        PROMPT_PRESSURE => "Operating pressure [bar]: ",
        PROMPT_CELSIUS => "Temperatures in Celsius? (yes/no): ",
        PROMPT_INLET_T_C => "Inlet temperature [°C]: ",
        PROMPT_INLET_T_K => "Inlet temperature [K]: ",
        PROMPT_OUTLET_T_C => "Outlet temperature [°C]: ",
        PROMPT_OUTLET_T_K => "Outlet temperature [K]: ",
        PROMPT_NORMAL_FLOW => "Flow at normal conditions (nm3/h)? (yes/no): ",
        PROMPT_NORMAL_FLOW_VALUE => "Normal flow [nm3/h]: ",
        PROMPT_MASS_FLOW_VALUE => "Mass flow [kg/h]: ",
        PROMPT_PHASE => "Gas or liquid? (gas/liquid): ",
        PROMPT_ENTHALPY_IN => "Inlet enthalpy [kJ/kg]: ",
        PROMPT_ENTHALPY_OUT => "Outlet enthalpy [kJ/kg]: ",
        PROMPT_NORMAL_DENSITY => "Density at normal conditions [kg/m3]: ",
        PROMPT_OUTLET_DENSITY => "Outlet density [kg/m3]: ",
        PROMPT_AGAIN => "Run another calculation? (yes/no): ",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_NOT_POSITIVE => "Please enter a value greater than 0.",
        ERROR_INVALID_ANSWER => "Invalid input. Please try again.",
        ERROR_BELOW_ABSOLUTE_ZERO => "Temperature must be above absolute zero.",
        RESULT_POWER => "Required heater power:",
        RESULT_POWER_MARGIN => "Power with 30% margin:",
        RESULT_NOMINAL_DIAMETER => "Nozzle nominal diameter:",
        RESULT_VELOCITY => "Outlet velocity:",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language(Some("ko-KR"), Some("en")), "ko");
        assert_eq!(resolve_language(Some("auto"), Some("en_US")), "en");
    }

    #[test]
    fn locale_strings_reduce_to_base_language() {
        assert_eq!(normalize_locale_string("ko_KR.UTF-8").as_deref(), Some("ko"));
        assert_eq!(normalize_locale_string("en-GB").as_deref(), Some("en"));
        assert_eq!(normalize_locale_string("ru_RU"), None);
    }

    #[test]
    fn every_key_has_both_languages() {
        use keys::*;
        let all = [
            ERROR_PREFIX, APP_TITLE, APP_EXIT, CALC_ABORTED, KNOWN_FLUIDS, PROMPT_FLUID_IN_LIST,
            PROMPT_FLUID_NAME, FLUID_NOT_FOUND, PROMPT_PRESSURE, PROMPT_CELSIUS, PROMPT_INLET_T_C,
            PROMPT_INLET_T_K, PROMPT_OUTLET_T_C, PROMPT_OUTLET_T_K, PROMPT_NORMAL_FLOW,
            PROMPT_NORMAL_FLOW_VALUE, PROMPT_MASS_FLOW_VALUE, PROMPT_PHASE, PROMPT_ENTHALPY_IN,
            PROMPT_ENTHALPY_OUT, PROMPT_NORMAL_DENSITY, PROMPT_OUTLET_DENSITY, PROMPT_AGAIN,
            ERROR_INVALID_NUMBER, ERROR_NOT_POSITIVE, ERROR_INVALID_ANSWER,
            ERROR_BELOW_ABSOLUTE_ZERO, RESULT_POWER, RESULT_POWER_MARGIN, RESULT_NOMINAL_DIAMETER,
            RESULT_VELOCITY,
        ];
        for key in all {
            assert_ne!(ko(key), "[missing translation]", "{key}");
            assert!(en(key).is_some(), "{key}");
        }
    }
}
