use crate::layout::{HallSpec, LayoutResult, SizeClass};

/// 문/롤러 개구부의 표준 높이 [m]. 전면벽 면적 공제에 사용.
const DOOR_HEIGHT_M: f64 = 2.1;

/// 자재·부자재 단가 설정 [zł].
#[derive(Debug, Clone, Copy)]
pub struct PricingConfig {
    /// 전면벽(백색 패널) 단가 [zł/m²]
    pub front_wall_price_per_m2: f64,
    /// 내부벽(회색 패널) 단가 [zł/m²]
    pub internal_wall_price_per_m2: f64,
    /// 단문(1 m) 단가 [zł/개]
    pub single_door_price: f64,
    /// 양문(2 m) 단가 [zł/개]
    pub double_door_price: f64,
    /// 롤러 도어 1.5 m 단가 [zł/개]
    pub roller_15_price: f64,
    /// 롤러 도어 2 m 단가 [zł/개]
    pub roller_2_price: f64,
    /// 킥커 플레이트 단가 [zł/mb]
    pub kicker_price_per_m: f64,
    /// 보안 메쉬(천장망) 단가 [zł/m²]
    pub mesh_price_per_m2: f64,
    /// 경량 천장 단가 [zł/mb]
    pub light_ceiling_price_per_m: f64,
    /// 전자 잠금장치 단가 [zł/개]
    pub electronic_lock_price: f64,
    /// 출입 게이트 단가 [zł]
    pub gate_price: f64,
    /// 카메라 단가 [zł/대]
    pub camera_price: f64,
    /// 카메라 1대가 담당하는 면적 [m²]
    pub camera_density_m2: f64,
    /// 조명 단가 [zł/등]
    pub light_price: f64,
    /// 조명 설치 간격 [m]
    pub light_spacing_m: f64,
}

/// 선택 설비 플래그. 켜진 항목만 비용 내역에 나타난다.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureOptions {
    /// 대형 박스에 양문 대신 롤러 도어 사용
    pub use_rollers: bool,
    pub mesh: bool,
    pub light_ceiling: bool,
    pub electronic_locks: bool,
    pub gate: bool,
    pub cameras: bool,
    pub lighting: bool,
}

/// 비용 항목 구분 키. 내역 표시는 이 순서를 따른다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostCategory {
    FrontWalls,
    InternalWalls,
    SingleDoors,
    Roller15,
    Roller2,
    DoubleDoors,
    Kicker,
    Mesh,
    LightCeiling,
    ElectronicLocks,
    Gate,
    Cameras,
    Lighting,
}

/// 수량 단위 태그.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUnit {
    /// 면적 [m²]
    SquareMeter,
    /// 연장 [mb]
    LinearMeter,
    /// 개수 [szt]
    Piece,
}

impl QuantityUnit {
    /// 고정 표기 기호를 반환한다.
    pub fn symbol(&self) -> &'static str {
        match self {
            QuantityUnit::SquareMeter => "m²",
            QuantityUnit::LinearMeter => "mb",
            QuantityUnit::Piece => "szt",
        }
    }
}

/// 비용 내역 한 줄. 합계는 반올림 전 수량 × 단가.
#[derive(Debug, Clone, Copy)]
pub struct CostLineItem {
    pub category: CostCategory,
    pub quantity: f64,
    pub unit: QuantityUnit,
    /// 단가 [zł]
    pub unit_price: f64,
    /// 합계 [zł]
    pub total: f64,
}

/// 항목별 비용 내역과 총 투자비.
#[derive(Debug, Clone, Default)]
pub struct CostBreakdown {
    /// 삽입 순서 = 표시 순서
    pub items: Vec<CostLineItem>,
    /// 총 투자비 [zł]. 모든 항목 합계의 합.
    pub total_investment: f64,
}

impl CostBreakdown {
    /// 구분 키로 항목을 찾는다.
    pub fn item(&self, category: CostCategory) -> Option<&CostLineItem> {
        self.items.iter().find(|item| item.category == category)
    }

    fn push(&mut self, category: CostCategory, quantity: f64, unit: QuantityUnit, unit_price: f64) {
        let total = quantity * unit_price;
        self.items.push(CostLineItem {
            category,
            quantity,
            unit,
            unit_price,
            total,
        });
        self.total_investment += total;
    }
}

/// 박스별 개폐부 집계. 전면벽 면적에서 공제할 개구부 면적을 함께 적산한다.
#[derive(Debug, Clone, Copy, Default)]
struct ClosureCounts {
    single_doors: u32,
    double_doors: u32,
    rollers_15: u32,
    rollers_2: u32,
    /// 개구부 면적 합계 [m²]
    total_door_area_m2: f64,
}

fn count_closures(layout: &LayoutResult, use_rollers: bool) -> ClosureCounts {
    let mut counts = ClosureCounts::default();
    for unit in &layout.units {
        if unit.class == SizeClass::Large {
            if use_rollers {
                // 전면 폭이 2 m 이상이면 2 m 롤러, 아니면 1.5 m 롤러
                if unit.width_m >= 2.0 {
                    counts.rollers_2 += 1;
                    counts.total_door_area_m2 += 2.0 * DOOR_HEIGHT_M;
                } else {
                    counts.rollers_15 += 1;
                    counts.total_door_area_m2 += 1.5 * DOOR_HEIGHT_M;
                }
            } else {
                counts.double_doors += 1;
                counts.total_door_area_m2 += 2.0 * DOOR_HEIGHT_M;
            }
        } else {
            counts.single_doors += 1;
            counts.total_door_area_m2 += 1.0 * DOOR_HEIGHT_M;
        }
    }
    counts
}

/// 배치 결과에서 자재 수량을 유도해 항목별 투자비 내역을 만든다.
///
/// 순수 함수. 빈 배치는 0 내역이 되고, 병적인 입력으로 전면벽 면적이 음수가
/// 되더라도 그대로 음수 비용으로 전파한다(0으로 깎지 않음).
pub fn estimate(
    hall: &HallSpec,
    layout: &LayoutResult,
    pricing: &PricingConfig,
    options: &FeatureOptions,
) -> CostBreakdown {
    let height_m = hall.system_height_mm / 1000.0;
    let closures = count_closures(layout, options.use_rollers);

    let mut breakdown = CostBreakdown::default();

    // 1. 전면벽: 벽 길이 × 높이에서 개구부 면적을 공제
    let front_wall_surface_m2 =
        layout.front_wall_length_m * height_m - closures.total_door_area_m2;
    breakdown.push(
        CostCategory::FrontWalls,
        front_wall_surface_m2,
        QuantityUnit::SquareMeter,
        pricing.front_wall_price_per_m2,
    );

    // 2. 내부벽
    breakdown.push(
        CostCategory::InternalWalls,
        layout.internal_wall_length_m * height_m,
        QuantityUnit::SquareMeter,
        pricing.internal_wall_price_per_m2,
    );

    // 3. 개폐부: 단문은 항상, 대형은 롤러 옵션에 따라 롤러 쌍 또는 양문
    breakdown.push(
        CostCategory::SingleDoors,
        f64::from(closures.single_doors),
        QuantityUnit::Piece,
        pricing.single_door_price,
    );
    if options.use_rollers {
        breakdown.push(
            CostCategory::Roller15,
            f64::from(closures.rollers_15),
            QuantityUnit::Piece,
            pricing.roller_15_price,
        );
        breakdown.push(
            CostCategory::Roller2,
            f64::from(closures.rollers_2),
            QuantityUnit::Piece,
            pricing.roller_2_price,
        );
    } else {
        breakdown.push(
            CostCategory::DoubleDoors,
            f64::from(closures.double_doors),
            QuantityUnit::Piece,
            pricing.double_door_price,
        );
    }

    // 4. 킥커 플레이트: 전면벽 연장 기준
    breakdown.push(
        CostCategory::Kicker,
        layout.front_wall_length_m,
        QuantityUnit::LinearMeter,
        pricing.kicker_price_per_m,
    );

    // 5~10. 선택 설비
    if options.mesh {
        breakdown.push(
            CostCategory::Mesh,
            layout.total_unit_area_m2,
            QuantityUnit::SquareMeter,
            pricing.mesh_price_per_m2,
        );
    }
    if options.light_ceiling {
        breakdown.push(
            CostCategory::LightCeiling,
            layout.corridor_length_m,
            QuantityUnit::LinearMeter,
            pricing.light_ceiling_price_per_m,
        );
    }
    if options.electronic_locks {
        breakdown.push(
            CostCategory::ElectronicLocks,
            f64::from(layout.unit_count()),
            QuantityUnit::Piece,
            pricing.electronic_lock_price,
        );
    }
    if options.gate {
        breakdown.push(CostCategory::Gate, 1.0, QuantityUnit::Piece, pricing.gate_price);
    }
    if options.cameras {
        // 신고 면적 기준, 담당 면적당 3대
        let camera_count =
            (hall.declared_area_m2 / pricing.camera_density_m2 * 3.0).ceil();
        breakdown.push(
            CostCategory::Cameras,
            camera_count,
            QuantityUnit::Piece,
            pricing.camera_price,
        );
    }
    if options.lighting {
        let light_count = (layout.corridor_length_m / pricing.light_spacing_m).ceil();
        breakdown.push(
            CostCategory::Lighting,
            light_count,
            QuantityUnit::Piece,
            pricing.light_price,
        );
    }

    breakdown
}
