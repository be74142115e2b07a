use std::path::PathBuf;

use clap::Parser;
use electric_heater_sizing::{
    app, config,
    i18n::{self, Translator},
    properties::{PropertyProvider, WebbookSource},
    ui_cli::Console,
};
use tracing::Level;

/// 전기 인라인 히터 출력/노즐 사이징 CLI.
#[derive(Parser, Debug)]
#[command(name = "heater_sizing", version, about)]
struct Cli {
    /// 설정 파일 경로 (기본: ./heater_sizing.toml, 없으면 기본값)
    #[arg(long)]
    config: Option<PathBuf>,
    /// 표시 언어 (ko, en, auto)
    #[arg(long)]
    lang: Option<String>,
    /// 로그 상세도 (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = try_run(&cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), app::AppError> {
    let cfg = config::load(cli.config.as_deref())?;
    let lang = i18n::resolve_language(cli.lang.as_deref(), cfg.language.as_deref());
    let tr = Translator::new(&lang);
    let provider = PropertyProvider::new(WebbookSource::new(&cfg.property_source));
    let mut console = Console::stdio(&tr);
    app::run(&mut console, &provider)
}
