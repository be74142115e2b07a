use crate::properties::Phase;

use super::UnitError;

/// 수동 입력의 "기체/액체" 답을 데이터 소스 표기(vapor/liquid)로 옮긴다.
pub fn translate_phase(answer: &str) -> Result<Phase, UnitError> {
    match answer.trim().to_lowercase().as_str() {
        "gas" | "vapor" | "기체" | "가스" | "газ" => Ok(Phase::Vapor),
        "liquid" | "액체" | "жидкость" => Ok(Phase::Liquid),
        _ => Err(UnitError::InvalidPhase(answer.trim().to_string())),
    }
}
