//! 전기 인라인 히터 사이징. 계산 로직을 라이브러리로 분리하여 CLI와 테스트에서 함께 쓴다.

pub mod app;
pub mod config;
pub mod fluid_registry;
pub mod heater;
pub mod i18n;
pub mod properties;
pub mod ui_cli;
pub mod units;
pub mod workflow;
