use std::io::{self, Write};
use std::path::Path;

use crate::advisor::Recommendation;
use crate::app::AppError;
use crate::cashflow::CashFlowResult;
use crate::config::Config;
use crate::costing::{CostBreakdown, CostCategory};
use crate::format;
use crate::i18n::{keys, Translator};
use crate::layout::LayoutResult;
use crate::project::ProjectEvaluation;
use crate::scenario::{self, Scenario};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Layout,
    Costs,
    CashFlow,
    Summary,
    EditParams,
    LoadScenario,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_LAYOUT));
    println!("{}", tr.t(keys::MAIN_MENU_COSTS));
    println!("{}", tr.t(keys::MAIN_MENU_CASHFLOW));
    println!("{}", tr.t(keys::MAIN_MENU_SUMMARY));
    println!("{}", tr.t(keys::MAIN_MENU_EDIT));
    println!("{}", tr.t(keys::MAIN_MENU_RELOAD));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Layout),
            "2" => return Ok(MenuChoice::Costs),
            "3" => return Ok(MenuChoice::CashFlow),
            "4" => return Ok(MenuChoice::Summary),
            "5" => return Ok(MenuChoice::EditParams),
            "6" => return Ok(MenuChoice::LoadScenario),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 배치 결과를 표시한다.
pub fn show_layout(tr: &Translator, layout: &LayoutResult) {
    println!("{}", tr.t(keys::LAYOUT_HEADING));
    if layout.units.is_empty() {
        println!("{}", tr.t(keys::LAYOUT_EMPTY));
        return;
    }
    println!("{}: {}", tr.t(keys::STAT_TOTAL_UNITS), layout.unit_count());
    println!(
        "{}: {:.0} m²",
        tr.t(keys::STAT_UNIT_AREA),
        layout.total_unit_area_m2
    );
    println!("{}: {}", tr.t(keys::STAT_SMALL), layout.small_count);
    println!("{}: {}", tr.t(keys::STAT_MEDIUM), layout.medium_count);
    println!("{}: {}", tr.t(keys::STAT_LARGE), layout.large_count);
    println!(
        "{}: {:.0} mb",
        tr.t(keys::STAT_CORRIDOR),
        layout.corridor_length_m
    );
    for (index, row) in layout.rows.iter().enumerate() {
        let line = tr
            .t(keys::LAYOUT_ROW_LINE)
            .replace("{row}", &(index + 1).to_string())
            .replace("{y}", &format!("{:.1}", row.start_y_m))
            .replace("{depth}", &format!("{:.2}", row.depth_m))
            .replace("{count}", &row.units.len().to_string());
        println!("{line}");
    }
}

/// 투자비 내역을 표시한다.
pub fn show_costs(tr: &Translator, costs: &CostBreakdown) {
    println!("{}", tr.t(keys::COSTS_HEADING));
    for item in &costs.items {
        println!(
            "{}: {} {} × {} = {}",
            tr.t(cost_name_key(item.category)),
            format::quantity(item.quantity, item.unit),
            item.unit.symbol(),
            format::currency(item.unit_price),
            format::currency(item.total)
        );
    }
    println!(
        "{}: {}",
        tr.t(keys::COSTS_TOTAL_LABEL),
        format::currency(costs.total_investment)
    );
}

/// KPI와 월별 현금흐름 표를 표시한다. 표는 처음 12개월, 이후 12개월 간격,
/// 마지막 달만 추려 보여준다.
pub fn show_cashflow(tr: &Translator, cashflow: &CashFlowResult) {
    println!("{}", tr.t(keys::CASHFLOW_HEADING));
    match cashflow.break_even_month {
        Some(month) => println!(
            "{}: {} {}",
            tr.t(keys::KPI_BREAK_EVEN),
            month,
            tr.t(keys::MONTHS_SUFFIX)
        ),
        None => println!("{}: {}", tr.t(keys::KPI_BREAK_EVEN), tr.t(keys::VALUE_NA)),
    }
    match cashflow.roi_percent {
        Some(roi) => println!("{}: {:.1}%", tr.t(keys::KPI_ROI), roi),
        None => println!("{}: {}", tr.t(keys::KPI_ROI), tr.t(keys::VALUE_NA)),
    }
    println!(
        "{}: {}",
        tr.t(keys::KPI_PEAK_PROFIT),
        format::currency(cashflow.peak_monthly_profit)
    );
    println!(
        "{}: {}",
        tr.t(keys::KPI_TOTAL_PROFIT),
        format::currency(cashflow.total_profit)
    );

    println!(
        "{:>5} | {:>9} | {:>14} | {:>12} | {:>14} | {:>14}",
        tr.t(keys::TABLE_MONTH),
        tr.t(keys::TABLE_OCCUPANCY),
        tr.t(keys::TABLE_REVENUE),
        tr.t(keys::TABLE_COSTS),
        tr.t(keys::TABLE_PROFIT),
        tr.t(keys::TABLE_CUMULATIVE)
    );
    let last = cashflow.months.len().saturating_sub(1);
    for (index, month) in cashflow.months.iter().enumerate() {
        if index >= 12 && index % 12 != 0 && index != last {
            continue;
        }
        println!(
            "{:>5} | {:>8.1}% | {:>14} | {:>12} | {:>14} | {:>14}",
            month.month,
            month.occupancy_percent,
            format::currency(month.gross_revenue),
            format::currency(month.fixed_costs),
            format::currency(month.net_profit),
            format::currency(month.cumulative_profit)
        );
    }
}

/// 입력 파라미터·배치·비용·재무를 한 화면에 요약한다.
pub fn show_summary(tr: &Translator, scenario: &Scenario, evaluation: &ProjectEvaluation) {
    let params = scenario.resolve();

    println!("{}", tr.t(keys::SUMMARY_HEADING));
    print_percent_warning(tr, scenario);

    println!("{}", tr.t(keys::SUMMARY_PARAMS_HEADING));
    println!(
        "{}: {} m²",
        tr.t(keys::LABEL_HALL_AREA),
        params.hall.declared_area_m2
    );
    println!(
        "{}: {} × {} m",
        tr.t(keys::LABEL_DIMENSIONS),
        params.hall.width_m,
        params.hall.length_m
    );
    println!(
        "{}: {} mm",
        tr.t(keys::LABEL_SYSTEM_HEIGHT),
        params.hall.system_height_mm
    );
    println!(
        "{}: {} m",
        tr.t(keys::LABEL_CORRIDOR_WIDTH),
        params.hall.corridor_width_m
    );

    let layout = &evaluation.layout;
    println!("{}", tr.t(keys::SUMMARY_BOXES_HEADING));
    println!(
        "{}: {} szt",
        tr.t(keys::LABEL_TOTAL_UNITS),
        layout.unit_count()
    );
    println!("{}: {} szt", tr.t(keys::LABEL_SMALL_UNITS), layout.small_count);
    println!("{}: {} szt", tr.t(keys::LABEL_MEDIUM_UNITS), layout.medium_count);
    println!("{}: {} szt", tr.t(keys::LABEL_LARGE_UNITS), layout.large_count);
    println!(
        "{}: {:.1} m²",
        tr.t(keys::LABEL_UNIT_AREA),
        layout.total_unit_area_m2
    );
    println!(
        "{}: {:.1} mb",
        tr.t(keys::LABEL_CORRIDOR_LENGTH),
        layout.corridor_length_m
    );

    println!("{}", tr.t(keys::SUMMARY_COSTS_HEADING));
    for item in &evaluation.costs.items {
        println!(
            "{}: {}",
            tr.t(cost_name_key(item.category)),
            format::currency(item.total)
        );
    }
    println!(
        "{}: {}",
        tr.t(keys::COSTS_TOTAL_LABEL),
        format::currency(evaluation.costs.total_investment)
    );

    let cashflow = &evaluation.cashflow;
    let max_monthly_revenue = layout.total_unit_area_m2
        * params.financial.max_occupancy_fraction
        * params.financial.rental_price_per_m2;
    println!("{}", tr.t(keys::SUMMARY_FINANCIAL_HEADING));
    println!(
        "{}: {} PLN/m²",
        tr.t(keys::LABEL_RENTAL_PRICE),
        params.financial.rental_price_per_m2
    );
    println!(
        "{}: {}",
        tr.t(keys::LABEL_MAX_REVENUE),
        format::currency(max_monthly_revenue)
    );
    println!(
        "{}: {:.0}%",
        tr.t(keys::LABEL_LICENSE_FEE),
        params.financial.license_fee_fraction * 100.0
    );
    println!(
        "{}: {}",
        tr.t(keys::LABEL_MONTHLY_EXPENSES),
        format::currency(params.financial.monthly_expenses)
    );
    println!(
        "{}: {}",
        tr.t(keys::KPI_PEAK_PROFIT),
        format::currency(cashflow.peak_monthly_profit)
    );
    println!(
        "{}: {}",
        tr.t(keys::KPI_TOTAL_PROFIT),
        format::currency(cashflow.total_profit)
    );
    match cashflow.roi_percent {
        Some(roi) => println!("{}: {:.1}%", tr.t(keys::KPI_ROI), roi),
        None => println!("{}: {}", tr.t(keys::KPI_ROI), tr.t(keys::VALUE_NA)),
    }

    if !evaluation.recommendations.is_empty() {
        println!("{}", tr.t(keys::SUMMARY_RECOMMEND_HEADING));
        for recommendation in &evaluation.recommendations {
            println!("- {}", render_recommendation(tr, recommendation));
        }
    }
}

/// 주요 파라미터를 대화식으로 수정한다. 빈 입력은 기존 값을 유지한다.
pub fn handle_edit(tr: &Translator, scenario: &mut Scenario) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EDIT_HEADING));
    println!("{}", tr.t(keys::EDIT_NOTE));

    if let Some(v) = read_optional_f64(tr, tr.t(keys::PROMPT_HALL_WIDTH))? {
        scenario.hall_width = Some(v);
    }
    if let Some(v) = read_optional_f64(tr, tr.t(keys::PROMPT_HALL_LENGTH))? {
        scenario.hall_length = Some(v);
    }
    if let Some(v) = read_optional_f64(tr, tr.t(keys::PROMPT_CORRIDOR_WIDTH))? {
        scenario.corridor_width = Some(v);
    }
    if let Some(v) = read_optional_f64(tr, tr.t(keys::PROMPT_SMALL_PERCENT))? {
        scenario.small_percent = Some(v);
    }
    if let Some(v) = read_optional_f64(tr, tr.t(keys::PROMPT_MEDIUM_PERCENT))? {
        scenario.medium_percent = Some(v);
    }
    if let Some(v) = read_optional_f64(tr, tr.t(keys::PROMPT_LARGE_PERCENT))? {
        scenario.large_percent = Some(v);
    }

    print_percent_warning(tr, scenario);
    println!("{}", tr.t(keys::EDIT_DONE));
    Ok(())
}

/// 시나리오 파일 경로를 물어 로드한다. 빈 입력이면 기본값 시나리오를 돌려주고,
/// 로드 실패는 오류를 출력한 뒤 기존 시나리오를 유지하도록 None을 반환한다.
pub fn handle_load_scenario(tr: &Translator) -> Result<Option<Scenario>, AppError> {
    let path = read_line(tr.t(keys::PROMPT_SCENARIO_PATH))?;
    let path = path.trim();
    if path.is_empty() {
        println!("{}", tr.t(keys::RELOAD_NO_PATH));
        return Ok(Some(Scenario::default()));
    }
    match scenario::load(Path::new(path)) {
        Ok(loaded) => {
            println!("{}", tr.t(keys::RELOAD_OK));
            print_percent_warning(tr, &loaded);
            Ok(Some(loaded))
        }
        Err(err) => {
            println!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            Ok(None)
        }
    }
}

/// 설정 메뉴를 처리한다. 언어가 바뀌면 true를 반환한다.
pub fn handle_settings(tr: &Translator, config: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        config.language
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let new_language = match sel.trim() {
        "" => return Ok(false),
        "1" => "auto",
        "2" => "pl",
        "3" => "en",
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(false);
        }
    };
    config.language = new_language.to_string();
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), config.language);
    Ok(true)
}

/// 비중 합이 100%에서 벗어나면 경고를 출력한다. 계산은 막지 않는다.
pub fn print_percent_warning(tr: &Translator, scenario: &Scenario) {
    if scenario.mix_percent_sum_off() {
        let line = tr
            .t(keys::PERCENT_WARNING)
            .replace("{n}", &format!("{:.0}", scenario.mix_percent_sum()));
        println!("{line}");
    }
}

fn cost_name_key(category: CostCategory) -> &'static str {
    match category {
        CostCategory::FrontWalls => keys::COST_FRONT_WALLS,
        CostCategory::InternalWalls => keys::COST_INTERNAL_WALLS,
        CostCategory::SingleDoors => keys::COST_SINGLE_DOORS,
        CostCategory::Roller15 => keys::COST_ROLLER15,
        CostCategory::Roller2 => keys::COST_ROLLER2,
        CostCategory::DoubleDoors => keys::COST_DOUBLE_DOORS,
        CostCategory::Kicker => keys::COST_KICKER,
        CostCategory::Mesh => keys::COST_MESH,
        CostCategory::LightCeiling => keys::COST_LIGHT_CEILING,
        CostCategory::ElectronicLocks => keys::COST_ELECTRONIC_LOCKS,
        CostCategory::Gate => keys::COST_GATE,
        CostCategory::Cameras => keys::COST_CAMERAS,
        CostCategory::Lighting => keys::COST_LIGHTING,
    }
}

fn render_recommendation(tr: &Translator, recommendation: &Recommendation) -> String {
    match recommendation {
        Recommendation::FastBreakEven { month } => tr
            .t(keys::REC_FAST_BREAK_EVEN)
            .replace("{n}", &month.to_string()),
        Recommendation::SlowBreakEven { month } => tr
            .t(keys::REC_SLOW_BREAK_EVEN)
            .replace("{n}", &month.to_string()),
        Recommendation::HighRoi { roi_percent } => tr
            .t(keys::REC_HIGH_ROI)
            .replace("{n}", &format!("{roi_percent:.0}")),
        Recommendation::GoodRoi { roi_percent } => tr
            .t(keys::REC_GOOD_ROI)
            .replace("{n}", &format!("{roi_percent:.0}")),
        Recommendation::SmallUnitHeavyMix => tr.t(keys::REC_SMALL_MIX).to_string(),
        Recommendation::ConsiderElectronicLocks => tr.t(keys::REC_LOCKS).to_string(),
        Recommendation::ConsiderCameras => tr.t(keys::REC_CAMERAS).to_string(),
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_optional_f64(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(prompt)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
