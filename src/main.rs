use std::path::PathBuf;

use clap::Parser;

use self_storage_toolbox::i18n::{self, Translator};
use self_storage_toolbox::scenario::Scenario;
use self_storage_toolbox::{app, config, scenario};

/// 셀프스토리지 투자 계산기 CLI 인자.
#[derive(Debug, Parser)]
#[command(
    name = "self_storage_toolbox",
    version,
    about = "Kalkulator inwestycji self-storage"
)]
struct Cli {
    /// 표시 언어 (auto/pl/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 시나리오 TOML 파일 경로
    #[arg(long, short = 's')]
    scenario: Option<PathBuf>,
    /// 언어팩 디렉터리 경로
    #[arg(long)]
    locales: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("Błąd: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;

    let lang = i18n::resolve_language(&cli.lang, Some(&cfg.language));
    let tr = Translator::new_with_pack(&lang, cli.locales.as_deref());

    // 시나리오: CLI 인자 -> 설정 파일 경로 -> 기본값
    let scenario_path = cli
        .scenario
        .or_else(|| cfg.scenario_path.as_ref().map(PathBuf::from));
    let scenario = match scenario_path {
        Some(path) => scenario::load(&path)?,
        None => Scenario::default(),
    };

    app::run(&mut cfg, tr, scenario)?;
    Ok(())
}
