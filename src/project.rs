//! 배치 -> 투자비 -> 현금흐름 -> 권고를 한 번에 재계산하는 파이프라인.
//! 각 단계는 이전 단계의 결과를 파라미터로만 받으며 공유 상태를 읽거나 쓰지 않는다.

use crate::advisor::{self, Recommendation};
use crate::cashflow::{self, CashFlowResult, FinancialParams};
use crate::costing::{self, CostBreakdown, FeatureOptions, PricingConfig};
use crate::layout::{self, HallSpec, LayoutResult, SizeClassMix};

/// 한 번의 평가에 쓰이는 전체 입력 파라미터 묶음.
#[derive(Debug, Clone, Copy)]
pub struct ProjectParams {
    pub hall: HallSpec,
    pub mix: SizeClassMix,
    pub pricing: PricingConfig,
    pub options: FeatureOptions,
    pub financial: FinancialParams,
}

/// 평가 결과 묶음. 단계별 결과를 그대로 소유한다.
#[derive(Debug, Clone)]
pub struct ProjectEvaluation {
    pub layout: LayoutResult,
    pub costs: CostBreakdown,
    pub cashflow: CashFlowResult,
    pub recommendations: Vec<Recommendation>,
}

/// 전체 평가를 수행한다. 입력이 바뀔 때마다 통째로 다시 호출하고
/// 이전 결과는 버린다(부분 재계산 없음).
pub fn evaluate(params: &ProjectParams) -> ProjectEvaluation {
    let layout = layout::plan(&params.hall, &params.mix);
    let costs = costing::estimate(&params.hall, &layout, &params.pricing, &params.options);
    let cashflow = cashflow::simulate(
        costs.total_investment,
        layout.total_unit_area_m2,
        &params.financial,
    );
    let recommendations = advisor::recommend(&params.mix, &params.options, &cashflow);

    ProjectEvaluation {
        layout,
        costs,
        cashflow,
        recommendations,
    }
}
