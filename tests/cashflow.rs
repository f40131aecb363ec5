use self_storage_toolbox::cashflow::{self, FinancialParams};

fn default_financial() -> FinancialParams {
    FinancialParams {
        rental_price_per_m2: 80.0,
        absorption_m2_per_month: 20.0,
        max_occupancy_fraction: 0.85,
        contract_years: 10.0,
        license_fee_fraction: 0.15,
        monthly_expenses: 5000.0,
    }
}

#[test]
fn horizon_covers_exactly_contract_months() {
    let result = cashflow::simulate(100_000.0, 179.0, &default_financial());
    assert_eq!(result.months.len(), 120);
    for (index, month) in result.months.iter().enumerate() {
        assert_eq!(month.month, index as u32 + 1);
    }
}

#[test]
fn occupancy_is_monotonic_and_capped() {
    let financial = default_financial();
    let total_area = 179.0;
    let cap = total_area * financial.max_occupancy_fraction;
    let result = cashflow::simulate(100_000.0, total_area, &financial);

    let mut previous = 0.0_f64;
    for month in &result.months {
        assert!(month.occupied_area_m2 >= previous - 1e-9);
        assert!(month.occupied_area_m2 <= cap + 1e-9);
        previous = month.occupied_area_m2;
    }
    // 충분히 긴 계약이므로 상한 도달
    assert!((result.months.last().unwrap().occupied_area_m2 - cap).abs() < 1e-9);
}

#[test]
fn first_month_cumulative_seeds_at_negative_investment() {
    let financial = default_financial();
    let investment = 100_000.0;
    let result = cashflow::simulate(investment, 179.0, &financial);

    let first = &result.months[0];
    // 1개월차: 점유 20 m², 총매출 1600, 수수료 240, 순매출 1360, 순이익 -3640
    assert!((first.gross_revenue - 1600.0).abs() < 1e-9);
    assert!((first.license_deduction - 240.0).abs() < 1e-9);
    assert!((first.net_revenue - 1360.0).abs() < 1e-9);
    assert!((first.net_profit - (-3640.0)).abs() < 1e-9);
    assert!((first.cumulative_profit - (-investment - 3640.0)).abs() < 1e-6);
}

#[test]
fn break_even_is_first_crossing_and_stays_recorded() {
    let result = cashflow::simulate(10_000.0, 179.0, &default_financial());

    let month = result.break_even_month.expect("break-even within horizon");
    for snapshot in &result.months {
        if snapshot.month < month {
            assert!(snapshot.cumulative_profit < 0.0, "month {}", snapshot.month);
        }
        if snapshot.month == month {
            assert!(snapshot.cumulative_profit >= 0.0);
        }
    }
}

#[test]
fn zero_investment_reports_undefined_roi() {
    let result = cashflow::simulate(0.0, 179.0, &default_financial());
    assert!(result.roi_percent.is_none());
}

#[test]
fn roi_is_final_cumulative_over_investment() {
    let investment = 50_000.0;
    let result = cashflow::simulate(investment, 179.0, &default_financial());
    let roi = result.roi_percent.expect("defined roi");
    assert!((roi - result.total_profit / investment * 100.0).abs() < 1e-9);
}

#[test]
fn zero_absorption_never_breaks_even() {
    let financial = FinancialParams {
        absorption_m2_per_month: 0.0,
        ..default_financial()
    };
    let result = cashflow::simulate(100_000.0, 179.0, &financial);

    assert!(result.break_even_month.is_none());
    let mut previous = -100_000.0_f64;
    for month in &result.months {
        assert_eq!(month.occupied_area_m2, 0.0);
        assert_eq!(month.occupancy_percent, 0.0);
        // 고정비만큼 매달 꾸준히 감소
        assert!((month.cumulative_profit - (previous - 5000.0)).abs() < 1e-6);
        previous = month.cumulative_profit;
    }
}

#[test]
fn peak_profit_assumes_full_occupancy_cap() {
    let financial = default_financial();
    let total_area = 179.0;
    let result = cashflow::simulate(100_000.0, total_area, &financial);

    let cap = total_area * financial.max_occupancy_fraction;
    let expected = cap * financial.rental_price_per_m2 * (1.0 - financial.license_fee_fraction)
        - financial.monthly_expenses;
    assert!((result.peak_monthly_profit - expected).abs() < 1e-9);
}

#[test]
fn fractional_contract_years_floor_to_whole_months() {
    let financial = FinancialParams {
        contract_years: 2.5,
        ..default_financial()
    };
    let result = cashflow::simulate(100_000.0, 179.0, &financial);
    assert_eq!(result.months.len(), 30);
}

#[test]
fn zero_unit_area_yields_zero_occupancy_without_fault() {
    let result = cashflow::simulate(100_000.0, 0.0, &default_financial());
    for month in &result.months {
        assert_eq!(month.occupied_area_m2, 0.0);
        assert_eq!(month.occupancy_percent, 0.0);
        assert_eq!(month.gross_revenue, 0.0);
    }
}
