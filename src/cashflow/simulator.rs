/// 재무 파라미터 입력. 비율 항목은 0~1 소수로 받는다.
#[derive(Debug, Clone, Copy)]
pub struct FinancialParams {
    /// 임대료 [zł/m²/월]
    pub rental_price_per_m2: f64,
    /// 월간 신규 임대 면적 [m²/월]
    pub absorption_m2_per_month: f64,
    /// 최대 점유율(%) -> 소수
    pub max_occupancy_fraction: f64,
    /// 계약 기간 [년]
    pub contract_years: f64,
    /// 라이선스 수수료(%) -> 소수
    pub license_fee_fraction: f64,
    /// 월 고정비 [zł/월]
    pub monthly_expenses: f64,
}

/// 한 달치 시뮬레이션 스냅샷.
#[derive(Debug, Clone, Copy)]
pub struct CashFlowMonth {
    /// 1부터 시작하는 월 번호
    pub month: u32,
    /// 임대 중 면적 [m²]. 감소하지 않고 상한에서 포화한다.
    pub occupied_area_m2: f64,
    /// 점유율 [%] (박스 총면적 대비)
    pub occupancy_percent: f64,
    /// 총 매출 [zł]
    pub gross_revenue: f64,
    /// 라이선스 공제액 [zł]
    pub license_deduction: f64,
    /// 공제 후 매출 [zł]
    pub net_revenue: f64,
    /// 고정비 [zł]
    pub fixed_costs: f64,
    /// 당월 순이익 [zł]
    pub net_profit: f64,
    /// 누적 손익 [zł]. -총투자비에서 출발.
    pub cumulative_profit: f64,
}

/// 시뮬레이션 결과와 파생 KPI.
#[derive(Debug, Clone)]
pub struct CashFlowResult {
    pub months: Vec<CashFlowMonth>,
    /// 누적 손익이 처음 0 이상이 되는 월. 계약 기간 내 미도달이면 None.
    pub break_even_month: Option<u32>,
    /// 투자 수익률 [%]. 총투자비가 0이면 정의되지 않으므로 None.
    pub roi_percent: Option<f64>,
    /// 최대 점유 가정의 이론 월 순이익 [zł]. 램프와 무관하게 상한에서 계산.
    pub peak_monthly_profit: f64,
    /// 계약 종료 시점 누적 손익 [zł]
    pub total_profit: f64,
}

/// 월 단위 점유 램프·현금흐름을 계약 기간만큼 시뮬레이션한다.
///
/// 순수 함수. 점유 면적은 매월 고정 흡수량만큼 늘고 최대 점유 상한에서
/// 포화하며 절대 줄지 않는다. 손익분기는 최초 도달 월만 기록하고 이후
/// 재평가하지 않는다.
pub fn simulate(
    total_investment: f64,
    total_unit_area_m2: f64,
    financial: &FinancialParams,
) -> CashFlowResult {
    let contract_months = (financial.contract_years * 12.0).floor() as u32;
    let max_rentable_area_m2 = total_unit_area_m2 * financial.max_occupancy_fraction;

    let mut months = Vec::with_capacity(contract_months as usize);
    let mut cumulative_profit = -total_investment;
    let mut occupied_area_m2 = 0.0_f64;
    let mut break_even_month: Option<u32> = None;

    for month in 1..=contract_months {
        occupied_area_m2 =
            (occupied_area_m2 + financial.absorption_m2_per_month).min(max_rentable_area_m2);

        let gross_revenue = occupied_area_m2 * financial.rental_price_per_m2;
        let license_deduction = gross_revenue * financial.license_fee_fraction;
        let net_revenue = gross_revenue - license_deduction;

        let fixed_costs = financial.monthly_expenses;
        let net_profit = net_revenue - fixed_costs;
        cumulative_profit += net_profit;

        if break_even_month.is_none() && cumulative_profit >= 0.0 {
            break_even_month = Some(month);
        }

        let occupancy_percent = if total_unit_area_m2 > 0.0 {
            occupied_area_m2 / total_unit_area_m2 * 100.0
        } else {
            0.0
        };

        months.push(CashFlowMonth {
            month,
            occupied_area_m2,
            occupancy_percent,
            gross_revenue,
            license_deduction,
            net_revenue,
            fixed_costs,
            net_profit,
            cumulative_profit,
        });
    }

    let total_profit = months.last().map_or(-total_investment, |m| m.cumulative_profit);
    let roi_percent = if total_investment != 0.0 {
        Some(total_profit / total_investment * 100.0)
    } else {
        None
    };
    let peak_monthly_profit = max_rentable_area_m2
        * financial.rental_price_per_m2
        * (1.0 - financial.license_fee_fraction)
        - financial.monthly_expenses;

    CashFlowResult {
        months,
        break_even_month,
        roi_percent,
        peak_monthly_profit,
        total_profit,
    }
}
