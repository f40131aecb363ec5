use std::fs;

use self_storage_toolbox::advisor::Recommendation;
use self_storage_toolbox::costing::QuantityUnit;
use self_storage_toolbox::format;
use self_storage_toolbox::project;
use self_storage_toolbox::scenario::{self, Scenario, ScenarioError};

#[test]
fn empty_scenario_resolves_to_documented_defaults() {
    let scenario: Scenario = toml::from_str("").expect("empty scenario");
    let params = scenario.resolve();

    assert_eq!(params.hall.width_m, 20.0);
    assert_eq!(params.hall.length_m, 25.0);
    assert_eq!(params.hall.declared_area_m2, 500.0);
    assert_eq!(params.hall.corridor_width_m, 1.5);
    assert_eq!(params.hall.system_height_mm, 2700.0);

    assert_eq!(params.mix.small_percent, 50.0);
    assert_eq!(params.mix.medium_percent, 30.0);
    assert_eq!(params.mix.large_percent, 20.0);
    assert_eq!(params.mix.small_area_m2, 2.0);
    assert_eq!(params.mix.medium_area_m2, 5.0);
    assert_eq!(params.mix.large_area_m2, 10.0);

    assert_eq!(params.pricing.front_wall_price_per_m2, 110.0);
    assert_eq!(params.pricing.gate_price, 15000.0);
    assert_eq!(params.pricing.camera_density_m2, 50.0);

    assert!(!params.options.use_rollers);
    assert!(!params.options.cameras);

    assert_eq!(params.financial.rental_price_per_m2, 80.0);
    assert_eq!(params.financial.absorption_m2_per_month, 20.0);
    assert!((params.financial.max_occupancy_fraction - 0.85).abs() < 1e-12);
    assert_eq!(params.financial.contract_years, 10.0);
    assert!((params.financial.license_fee_fraction - 0.15).abs() < 1e-12);
    assert_eq!(params.financial.monthly_expenses, 5000.0);
}

#[test]
fn partial_scenario_overrides_only_named_fields() {
    let scenario: Scenario = toml::from_str(
        r#"
hall_width = 30.0
use_rollers = true
license_fee = 10.0
"#,
    )
    .expect("partial scenario");
    let params = scenario.resolve();

    assert_eq!(params.hall.width_m, 30.0);
    assert_eq!(params.hall.length_m, 25.0);
    assert!(params.options.use_rollers);
    assert!((params.financial.license_fee_fraction - 0.10).abs() < 1e-12);
}

#[test]
fn percent_sum_warning_is_advisory_only() {
    let balanced = Scenario::default();
    assert!((balanced.mix_percent_sum() - 100.0).abs() < 1e-9);
    assert!(!balanced.mix_percent_sum_off());

    let skewed = Scenario {
        small_percent: Some(70.0),
        ..Scenario::default()
    };
    assert!((skewed.mix_percent_sum() - 120.0).abs() < 1e-9);
    assert!(skewed.mix_percent_sum_off());

    // 비중 합이 틀려도 계산은 거부되지 않는다
    let evaluation = project::evaluate(&skewed.resolve());
    assert!(!evaluation.layout.units.is_empty());
}

#[test]
fn scenario_file_roundtrip() {
    let path = std::env::temp_dir().join("self_storage_toolbox_scenario_test.toml");
    fs::write(&path, "hall_length = 40.0\nhas_cameras = true\n").expect("write scenario");

    let loaded = scenario::load(&path).expect("load scenario");
    fs::remove_file(&path).ok();

    let params = loaded.resolve();
    assert_eq!(params.hall.length_m, 40.0);
    assert!(params.options.cameras);
}

#[test]
fn missing_scenario_file_is_an_io_error() {
    let path = std::env::temp_dir().join("self_storage_toolbox_missing.toml");
    match scenario::load(&path) {
        Err(ScenarioError::Io(_)) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn malformed_scenario_is_a_parse_error() {
    let path = std::env::temp_dir().join("self_storage_toolbox_bad_scenario.toml");
    fs::write(&path, "hall_width = \"szeroka\"\n").expect("write scenario");

    let result = scenario::load(&path);
    fs::remove_file(&path).ok();

    match result {
        Err(ScenarioError::Parse(_)) => {}
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn default_scenario_evaluates_end_to_end() {
    let scenario = Scenario::default();
    let evaluation = project::evaluate(&scenario.resolve());

    assert!(!evaluation.layout.units.is_empty());
    assert!(evaluation.costs.total_investment > 0.0);
    assert_eq!(evaluation.cashflow.months.len(), 120);
    // 기본 시나리오에는 전자 잠금·카메라가 없으므로 제안이 뜬다
    assert!(evaluation
        .recommendations
        .contains(&Recommendation::ConsiderElectronicLocks));
    assert!(evaluation
        .recommendations
        .contains(&Recommendation::ConsiderCameras));
}

#[test]
fn currency_uses_fixed_polish_style() {
    assert_eq!(format::currency(0.0), "0 zł");
    assert_eq!(format::currency(950.4), "950 zł");
    assert_eq!(format::currency(1234567.0), "1 234 567 zł");
    assert_eq!(format::currency(-1234.6), "-1 235 zł");

    assert_eq!(format::currency_compact(2_500_000.0), "2.5M PLN");
    assert_eq!(format::currency_compact(12_345.0), "12K PLN");
    assert_eq!(format::currency_compact(999.0), "999 zł");
}

#[test]
fn quantities_round_by_unit_kind() {
    assert_eq!(format::quantity(12.0, QuantityUnit::Piece), "12");
    assert_eq!(format::quantity(84.82, QuantityUnit::SquareMeter), "84.8");
    assert_eq!(format::quantity(70.0, QuantityUnit::LinearMeter), "70.0");
}
