use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::error;

use crate::config::ConfigError;
use crate::i18n::keys;
use crate::properties::{PropertyProvider, PropertySource};
use crate::ui_cli::Console;
use crate::workflow::{self, SizingReport, WorkflowError};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
}

/// 분기 하나를 실행한다: 목록 유체면 물성 조회, 아니면 직접 입력.
fn calculate_once<R: BufRead, W: Write, S: PropertySource>(
    console: &mut Console<'_, R, W>,
    provider: &PropertyProvider<S>,
) -> Result<Result<SizingReport, WorkflowError>, AppError> {
    if console.read_yes_no(keys::PROMPT_FLUID_IN_LIST)? {
        let request = console.prompt_known_fluid()?;
        Ok(workflow::size_known_fluid(provider, &request))
    } else {
        let request = console.prompt_manual()?;
        Ok(workflow::size_manual(&request))
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 계산 오류는 해당 회차만 중단시키고, 사용자가 원하면 처음부터 다시 계산한다.
pub fn run<R: BufRead, W: Write, S: PropertySource>(
    console: &mut Console<'_, R, W>,
    provider: &PropertyProvider<S>,
) -> Result<(), AppError> {
    loop {
        console.say(keys::APP_TITLE)?;
        console.print_known_fluids()?;
        match calculate_once(console, provider)? {
            Ok(report) => console.print_result(&report.result)?,
            Err(err) => {
                error!(error = %err, "계산 중단");
                console.report_error(&err)?;
                console.say(keys::CALC_ABORTED)?;
            }
        }
        if !console.read_yes_no(keys::PROMPT_AGAIN)? {
            console.say(keys::APP_EXIT)?;
            break;
        }
    }
    Ok(())
}
