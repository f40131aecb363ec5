use crate::config::Config;
use crate::i18n::{self, keys, Translator};
use crate::project;
use crate::scenario::{Scenario, ScenarioError};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 시나리오 로드 오류
    Scenario(ScenarioError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Scenario(e) => write!(f, "시나리오 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ScenarioError> for AppError {
    fn from(value: ScenarioError) -> Self {
        AppError::Scenario(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 입력이 바뀔 때마다 배치 -> 비용 -> 현금흐름 -> 권고 전체를 다시 평가하고
/// 이전 평가 결과는 버린다. 메뉴 화면은 항상 최신 평가를 읽는다.
pub fn run(config: &mut Config, mut tr: Translator, mut scenario: Scenario) -> Result<(), AppError> {
    ui_cli::print_percent_warning(&tr, &scenario);
    let mut evaluation = project::evaluate(&scenario.resolve());

    loop {
        match ui_cli::main_menu(&tr)? {
            MenuChoice::Layout => ui_cli::show_layout(&tr, &evaluation.layout),
            MenuChoice::Costs => ui_cli::show_costs(&tr, &evaluation.costs),
            MenuChoice::CashFlow => ui_cli::show_cashflow(&tr, &evaluation.cashflow),
            MenuChoice::Summary => ui_cli::show_summary(&tr, &scenario, &evaluation),
            MenuChoice::EditParams => {
                ui_cli::handle_edit(&tr, &mut scenario)?;
                evaluation = project::evaluate(&scenario.resolve());
            }
            MenuChoice::LoadScenario => {
                if let Some(loaded) = ui_cli::handle_load_scenario(&tr)? {
                    scenario = loaded;
                    evaluation = project::evaluate(&scenario.resolve());
                }
            }
            MenuChoice::Settings => {
                if ui_cli::handle_settings(&tr, config)? {
                    config.save()?;
                    let lang = i18n::resolve_language(&config.language, None);
                    tr = Translator::new_with_pack(&lang, None);
                }
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
