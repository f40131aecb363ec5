use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const PERCENT_WARNING: &str = "general.percent_warning";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_LAYOUT: &str = "main_menu.layout";
    pub const MAIN_MENU_COSTS: &str = "main_menu.costs";
    pub const MAIN_MENU_CASHFLOW: &str = "main_menu.cashflow";
    pub const MAIN_MENU_SUMMARY: &str = "main_menu.summary";
    pub const MAIN_MENU_EDIT: &str = "main_menu.edit";
    pub const MAIN_MENU_RELOAD: &str = "main_menu.reload";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const LAYOUT_HEADING: &str = "layout.heading";
    pub const LAYOUT_EMPTY: &str = "layout.empty";
    pub const LAYOUT_ROW_LINE: &str = "layout.row_line";
    pub const STAT_TOTAL_UNITS: &str = "layout.stat_total_units";
    pub const STAT_UNIT_AREA: &str = "layout.stat_unit_area";
    pub const STAT_SMALL: &str = "layout.stat_small";
    pub const STAT_MEDIUM: &str = "layout.stat_medium";
    pub const STAT_LARGE: &str = "layout.stat_large";
    pub const STAT_CORRIDOR: &str = "layout.stat_corridor";

    pub const COSTS_HEADING: &str = "costs.heading";
    pub const COSTS_TOTAL_LABEL: &str = "costs.total_label";
    pub const COST_FRONT_WALLS: &str = "costs.front_walls";
    pub const COST_INTERNAL_WALLS: &str = "costs.internal_walls";
    pub const COST_SINGLE_DOORS: &str = "costs.single_doors";
    pub const COST_ROLLER15: &str = "costs.roller15";
    pub const COST_ROLLER2: &str = "costs.roller2";
    pub const COST_DOUBLE_DOORS: &str = "costs.double_doors";
    pub const COST_KICKER: &str = "costs.kicker";
    pub const COST_MESH: &str = "costs.mesh";
    pub const COST_LIGHT_CEILING: &str = "costs.light_ceiling";
    pub const COST_ELECTRONIC_LOCKS: &str = "costs.electronic_locks";
    pub const COST_GATE: &str = "costs.gate";
    pub const COST_CAMERAS: &str = "costs.cameras";
    pub const COST_LIGHTING: &str = "costs.lighting";

    pub const CASHFLOW_HEADING: &str = "cashflow.heading";
    pub const KPI_BREAK_EVEN: &str = "cashflow.kpi_break_even";
    pub const KPI_ROI: &str = "cashflow.kpi_roi";
    pub const KPI_PEAK_PROFIT: &str = "cashflow.kpi_peak_profit";
    pub const KPI_TOTAL_PROFIT: &str = "cashflow.kpi_total_profit";
    pub const VALUE_NA: &str = "cashflow.value_na";
    pub const MONTHS_SUFFIX: &str = "cashflow.months_suffix";
    pub const TABLE_MONTH: &str = "cashflow.table_month";
    pub const TABLE_OCCUPANCY: &str = "cashflow.table_occupancy";
    pub const TABLE_REVENUE: &str = "cashflow.table_revenue";
    pub const TABLE_COSTS: &str = "cashflow.table_costs";
    pub const TABLE_PROFIT: &str = "cashflow.table_profit";
    pub const TABLE_CUMULATIVE: &str = "cashflow.table_cumulative";

    pub const SUMMARY_HEADING: &str = "summary.heading";
    pub const SUMMARY_PARAMS_HEADING: &str = "summary.params_heading";
    pub const SUMMARY_BOXES_HEADING: &str = "summary.boxes_heading";
    pub const SUMMARY_COSTS_HEADING: &str = "summary.costs_heading";
    pub const SUMMARY_FINANCIAL_HEADING: &str = "summary.financial_heading";
    pub const SUMMARY_RECOMMEND_HEADING: &str = "summary.recommend_heading";
    pub const LABEL_HALL_AREA: &str = "summary.hall_area";
    pub const LABEL_DIMENSIONS: &str = "summary.dimensions";
    pub const LABEL_SYSTEM_HEIGHT: &str = "summary.system_height";
    pub const LABEL_CORRIDOR_WIDTH: &str = "summary.corridor_width";
    pub const LABEL_TOTAL_UNITS: &str = "summary.total_units";
    pub const LABEL_SMALL_UNITS: &str = "summary.small_units";
    pub const LABEL_MEDIUM_UNITS: &str = "summary.medium_units";
    pub const LABEL_LARGE_UNITS: &str = "summary.large_units";
    pub const LABEL_UNIT_AREA: &str = "summary.unit_area";
    pub const LABEL_CORRIDOR_LENGTH: &str = "summary.corridor_length";
    pub const LABEL_RENTAL_PRICE: &str = "summary.rental_price";
    pub const LABEL_MAX_REVENUE: &str = "summary.max_revenue";
    pub const LABEL_LICENSE_FEE: &str = "summary.license_fee";
    pub const LABEL_MONTHLY_EXPENSES: &str = "summary.monthly_expenses";

    pub const EDIT_HEADING: &str = "edit.heading";
    pub const EDIT_NOTE: &str = "edit.note";
    pub const EDIT_DONE: &str = "edit.done";
    pub const PROMPT_HALL_WIDTH: &str = "edit.prompt_hall_width";
    pub const PROMPT_HALL_LENGTH: &str = "edit.prompt_hall_length";
    pub const PROMPT_CORRIDOR_WIDTH: &str = "edit.prompt_corridor_width";
    pub const PROMPT_SMALL_PERCENT: &str = "edit.prompt_small_percent";
    pub const PROMPT_MEDIUM_PERCENT: &str = "edit.prompt_medium_percent";
    pub const PROMPT_LARGE_PERCENT: &str = "edit.prompt_large_percent";

    pub const RELOAD_NO_PATH: &str = "reload.no_path";
    pub const RELOAD_OK: &str = "reload.ok";
    pub const PROMPT_SCENARIO_PATH: &str = "reload.prompt_path";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const REC_FAST_BREAK_EVEN: &str = "recommend.fast_break_even";
    pub const REC_SLOW_BREAK_EVEN: &str = "recommend.slow_break_even";
    pub const REC_HIGH_ROI: &str = "recommend.high_roi";
    pub const REC_GOOD_ROI: &str = "recommend.good_roi";
    pub const REC_SMALL_MIX: &str = "recommend.small_mix";
    pub const REC_LOCKS: &str = "recommend.locks";
    pub const REC_CAMERAS: &str = "recommend.cameras";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Pl,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Pl
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Pl => "pl",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(pl/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 pl로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 폴란드어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| pl(key)),
            Language::Pl => pl(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "pl".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "pl" | "pl-pl" => Some("pl".into()),
        "en" | "en-us" | "en-uk" => Some("en".into()),
        "auto" | "" => None,
        other if other.starts_with("pl") => Some("pl".into()),
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
        "pl" => Some("pl".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., pl-pl)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., pl)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn pl(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Błąd",
        APP_EXIT => "Zamykanie programu.",
        PERCENT_WARNING => "Uwaga: suma udziałów boksów wynosi {n}% (powinna wynosić 100%).",
        MAIN_MENU_TITLE => "\n=== Kalkulator Self-Storage ===",
        MAIN_MENU_LAYOUT => "1) Układ hali",
        MAIN_MENU_COSTS => "2) Koszty inwestycji",
        MAIN_MENU_CASHFLOW => "3) Przepływy pieniężne",
        MAIN_MENU_SUMMARY => "4) Podsumowanie",
        MAIN_MENU_EDIT => "5) Edycja parametrów",
        MAIN_MENU_RELOAD => "6) Wczytaj scenariusz",
        MAIN_MENU_SETTINGS => "7) Ustawienia",
        MAIN_MENU_EXIT => "0) Koniec",
        PROMPT_MENU_SELECT => "Wybór: ",
        INVALID_SELECTION_RETRY => "Nieprawidłowy wybór. Spróbuj ponownie.",
        ERROR_INVALID_NUMBER => "Podaj liczbę.",
        LAYOUT_HEADING => "\n-- Układ hali --",
        LAYOUT_EMPTY => "Brak boksów - hala zbyt mała dla podanych parametrów.",
        LAYOUT_ROW_LINE => "Rząd {row}: y = {y} m, głębokość {depth} m, boksów {count}",
        STAT_TOTAL_UNITS => "Boksów",
        STAT_UNIT_AREA => "Pow. boksów",
        STAT_SMALL => "Małych",
        STAT_MEDIUM => "Średnich",
        STAT_LARGE => "Dużych",
        STAT_CORRIDOR => "Korytarzy",
        COSTS_HEADING => "\n-- Koszty inwestycji --",
        COSTS_TOTAL_LABEL => "RAZEM INWESTYCJA",
        COST_FRONT_WALLS => "Ściany frontowe (białe)",
        COST_INTERNAL_WALLS => "Ściany wewnętrzne (szare)",
        COST_SINGLE_DOORS => "Drzwi pojedyncze (1m)",
        COST_ROLLER15 => "Rolety 1.5m",
        COST_ROLLER2 => "Rolety 2m",
        COST_DOUBLE_DOORS => "Drzwi podwójne (2m)",
        COST_KICKER => "Kicker plate (listwa)",
        COST_MESH => "Siatka zabezpieczająca",
        COST_LIGHT_CEILING => "Lekki sufit",
        COST_ELECTRONIC_LOCKS => "Zamki elektroniczne",
        COST_GATE => "Brama wjazdowa",
        COST_CAMERAS => "System kamer",
        COST_LIGHTING => "Oświetlenie",
        CASHFLOW_HEADING => "\n-- Przepływy pieniężne --",
        KPI_BREAK_EVEN => "Próg rentowności",
        KPI_ROI => "ROI",
        KPI_PEAK_PROFIT => "Zysk mies. (max obłożenie)",
        KPI_TOTAL_PROFIT => "Zysk całkowity",
        VALUE_NA => "N/A",
        MONTHS_SUFFIX => "mies.",
        TABLE_MONTH => "Mies.",
        TABLE_OCCUPANCY => "Obłożenie",
        TABLE_REVENUE => "Przychód",
        TABLE_COSTS => "Koszty",
        TABLE_PROFIT => "Zysk",
        TABLE_CUMULATIVE => "Skumulowany",
        SUMMARY_HEADING => "\n-- Podsumowanie --",
        SUMMARY_PARAMS_HEADING => "-- Parametry hali --",
        SUMMARY_BOXES_HEADING => "-- Boksy --",
        SUMMARY_COSTS_HEADING => "-- Koszty --",
        SUMMARY_FINANCIAL_HEADING => "-- Finanse --",
        SUMMARY_RECOMMEND_HEADING => "-- Rekomendacje --",
        LABEL_HALL_AREA => "Powierzchnia hali",
        LABEL_DIMENSIONS => "Wymiary",
        LABEL_SYSTEM_HEIGHT => "Wysokość systemu",
        LABEL_CORRIDOR_WIDTH => "Szerokość korytarzy",
        LABEL_TOTAL_UNITS => "Łączna ilość boksów",
        LABEL_SMALL_UNITS => "Małe",
        LABEL_MEDIUM_UNITS => "Średnie",
        LABEL_LARGE_UNITS => "Duże",
        LABEL_UNIT_AREA => "Powierzchnia boksów",
        LABEL_CORRIDOR_LENGTH => "Długość korytarzy",
        LABEL_RENTAL_PRICE => "Cena najmu",
        LABEL_MAX_REVENUE => "Maksymalny przychód mies.",
        LABEL_LICENSE_FEE => "Opłata licencyjna",
        LABEL_MONTHLY_EXPENSES => "Koszty miesięczne",
        EDIT_HEADING => "\n-- Edycja parametrów --",
        EDIT_NOTE => "Enter pozostawia obecną wartość.",
        EDIT_DONE => "Parametry zaktualizowane - projekt przeliczony.",
        PROMPT_HALL_WIDTH => "Szerokość hali [m]: ",
        PROMPT_HALL_LENGTH => "Długość hali [m]: ",
        PROMPT_CORRIDOR_WIDTH => "Szerokość korytarza [m]: ",
        PROMPT_SMALL_PERCENT => "Udział małych boksów [%]: ",
        PROMPT_MEDIUM_PERCENT => "Udział średnich boksów [%]: ",
        PROMPT_LARGE_PERCENT => "Udział dużych boksów [%]: ",
        RELOAD_NO_PATH => "Nie podano pliku - używam wartości domyślnych.",
        RELOAD_OK => "Scenariusz wczytany.",
        PROMPT_SCENARIO_PATH => "Ścieżka pliku scenariusza TOML: ",
        SETTINGS_HEADING => "\n-- Ustawienia --",
        SETTINGS_CURRENT_LANGUAGE => "Bieżący język:",
        SETTINGS_OPTIONS => "1) auto  2) polski  3) english",
        SETTINGS_PROMPT_CHANGE => "Numer do zmiany (Enter = anuluj): ",
        SETTINGS_INVALID => "Nieprawidłowy wybór - bez zmian.",
        SETTINGS_SAVED => "Język zapisany:",
        REC_FAST_BREAK_EVEN => "Szybki zwrot inwestycji - próg rentowności w {n} miesiącu.",
        REC_SLOW_BREAK_EVEN => {
            "Dłuższy okres zwrotu ({n} mies.) - rozważ optymalizację kosztów lub zwiększenie cen najmu."
        }
        REC_HIGH_ROI => "Wysoki zwrot z inwestycji ({n}%) - projekt bardzo rentowny.",
        REC_GOOD_ROI => "Dobry zwrot z inwestycji ({n}%) - projekt opłacalny.",
        REC_SMALL_MIX => {
            "Wysoki udział małych boksów zwiększa przychód na m², ale wymaga więcej zamków i drzwi."
        }
        REC_LOCKS => {
            "Zamki elektroniczne ułatwiają zarządzanie i zwiększają bezpieczeństwo - warto rozważyć."
        }
        REC_CAMERAS => "System kamer zwiększa bezpieczeństwo i jest oczekiwany przez klientów.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        PERCENT_WARNING => "Warning: box share percentages sum to {n}% (should be 100%).",
        MAIN_MENU_TITLE => "\n=== Self-Storage Calculator ===",
        MAIN_MENU_LAYOUT => "1) Hall layout",
        MAIN_MENU_COSTS => "2) Investment costs",
        MAIN_MENU_CASHFLOW => "3) Cash flow",
        MAIN_MENU_SUMMARY => "4) Summary",
        MAIN_MENU_EDIT => "5) Edit parameters",
        MAIN_MENU_RELOAD => "6) Load scenario",
        MAIN_MENU_SETTINGS => "7) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Enter a number.",
        LAYOUT_HEADING => "\n-- Hall Layout --",
        LAYOUT_EMPTY => "No boxes - the hall is too small for the given parameters.",
        LAYOUT_ROW_LINE => "Row {row}: y = {y} m, depth {depth} m, {count} boxes",
        STAT_TOTAL_UNITS => "Boxes",
        STAT_UNIT_AREA => "Box area",
        STAT_SMALL => "Small",
        STAT_MEDIUM => "Medium",
        STAT_LARGE => "Large",
        STAT_CORRIDOR => "Corridors",
        COSTS_HEADING => "\n-- Investment Costs --",
        COSTS_TOTAL_LABEL => "TOTAL INVESTMENT",
        COST_FRONT_WALLS => "Front walls (white)",
        COST_INTERNAL_WALLS => "Internal walls (grey)",
        COST_SINGLE_DOORS => "Single doors (1m)",
        COST_ROLLER15 => "Roller doors 1.5m",
        COST_ROLLER2 => "Roller doors 2m",
        COST_DOUBLE_DOORS => "Double doors (2m)",
        COST_KICKER => "Kicker plate",
        COST_MESH => "Security mesh",
        COST_LIGHT_CEILING => "Light ceiling",
        COST_ELECTRONIC_LOCKS => "Electronic locks",
        COST_GATE => "Entrance gate",
        COST_CAMERAS => "Camera system",
        COST_LIGHTING => "Lighting",
        CASHFLOW_HEADING => "\n-- Cash Flow --",
        KPI_BREAK_EVEN => "Break-even",
        KPI_ROI => "ROI",
        KPI_PEAK_PROFIT => "Monthly profit (max occupancy)",
        KPI_TOTAL_PROFIT => "Total profit",
        VALUE_NA => "N/A",
        MONTHS_SUFFIX => "mo.",
        TABLE_MONTH => "Month",
        TABLE_OCCUPANCY => "Occupancy",
        TABLE_REVENUE => "Revenue",
        TABLE_COSTS => "Costs",
        TABLE_PROFIT => "Profit",
        TABLE_CUMULATIVE => "Cumulative",
        SUMMARY_HEADING => "\n-- Summary --",
        SUMMARY_PARAMS_HEADING => "-- Hall parameters --",
        SUMMARY_BOXES_HEADING => "-- Boxes --",
        SUMMARY_COSTS_HEADING => "-- Costs --",
        SUMMARY_FINANCIAL_HEADING => "-- Financials --",
        SUMMARY_RECOMMEND_HEADING => "-- Recommendations --",
        LABEL_HALL_AREA => "Hall area",
        LABEL_DIMENSIONS => "Dimensions",
        LABEL_SYSTEM_HEIGHT => "System height",
        LABEL_CORRIDOR_WIDTH => "Corridor width",
        LABEL_TOTAL_UNITS => "Total boxes",
        LABEL_SMALL_UNITS => "Small",
        LABEL_MEDIUM_UNITS => "Medium",
        LABEL_LARGE_UNITS => "Large",
        LABEL_UNIT_AREA => "Box area",
        LABEL_CORRIDOR_LENGTH => "Corridor length",
        LABEL_RENTAL_PRICE => "Rental price",
        LABEL_MAX_REVENUE => "Max monthly revenue",
        LABEL_LICENSE_FEE => "License fee",
        LABEL_MONTHLY_EXPENSES => "Monthly expenses",
        EDIT_HEADING => "\n-- Edit Parameters --",
        EDIT_NOTE => "Enter keeps the current value.",
        EDIT_DONE => "Parameters updated - project recalculated.",
        PROMPT_HALL_WIDTH => "Hall width [m]: ",
        PROMPT_HALL_LENGTH => "Hall length [m]: ",
        PROMPT_CORRIDOR_WIDTH => "Corridor width [m]: ",
        PROMPT_SMALL_PERCENT => "Small box share [%]: ",
        PROMPT_MEDIUM_PERCENT => "Medium box share [%]: ",
        PROMPT_LARGE_PERCENT => "Large box share [%]: ",
        RELOAD_NO_PATH => "No file given - using defaults.",
        RELOAD_OK => "Scenario loaded.",
        PROMPT_SCENARIO_PATH => "Scenario TOML file path: ",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) auto  2) polski  3) english",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter = cancel): ",
        SETTINGS_INVALID => "Invalid selection - nothing changed.",
        SETTINGS_SAVED => "Language saved:",
        REC_FAST_BREAK_EVEN => "Fast payback - break-even reached in month {n}.",
        REC_SLOW_BREAK_EVEN => {
            "Long payback period ({n} mo.) - consider cost optimization or higher rental prices."
        }
        REC_HIGH_ROI => "High return on investment ({n}%) - a very profitable project.",
        REC_GOOD_ROI => "Good return on investment ({n}%) - a viable project.",
        REC_SMALL_MIX => {
            "A high share of small boxes raises revenue per m² but needs more locks and doors."
        }
        REC_LOCKS => {
            "Electronic locks simplify management and improve security - worth considering."
        }
        REC_CAMERAS => "A camera system improves security and is expected by customers.",
        _ => return None,
    })
}
