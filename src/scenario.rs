use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cashflow::FinancialParams;
use crate::costing::{FeatureOptions, PricingConfig};
use crate::layout::{HallSpec, SizeClassMix};
use crate::project::ProjectParams;

/// 비중 합계 경고를 띄우는 허용 오차 [%p].
pub const PERCENT_SUM_TOLERANCE: f64 = 0.1;

/// 시나리오 입력 레코드. 모든 필드가 선택 사항이며 비어 있으면
/// [`Scenario::resolve`]에서 문서화된 기본값이 적용된다.
///
/// TOML 파일의 평탄한 키 구조를 그대로 반영한다. 예:
/// ```toml
/// hall_width = 20.0
/// small_percent = 50.0
/// use_rollers = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    // 홀
    pub hall_area: Option<f64>,
    pub hall_width: Option<f64>,
    pub hall_length: Option<f64>,
    pub system_height: Option<f64>,
    pub corridor_width: Option<f64>,

    // 박스 구성
    pub small_percent: Option<f64>,
    pub medium_percent: Option<f64>,
    pub large_percent: Option<f64>,
    pub small_size: Option<f64>,
    pub medium_size: Option<f64>,
    pub large_size: Option<f64>,

    // 단가
    pub front_wall_price: Option<f64>,
    pub internal_wall_price: Option<f64>,
    pub single_door_price: Option<f64>,
    pub double_door_price: Option<f64>,
    pub roller15_price: Option<f64>,
    pub roller2_price: Option<f64>,
    pub kicker_price: Option<f64>,
    pub mesh_price: Option<f64>,
    pub light_ceiling_price: Option<f64>,
    pub electronic_lock_price: Option<f64>,
    pub gate_price: Option<f64>,
    pub camera_price: Option<f64>,
    pub camera_density: Option<f64>,
    pub light_price: Option<f64>,
    pub light_density: Option<f64>,

    // 선택 설비
    pub use_rollers: Option<bool>,
    pub has_mesh: Option<bool>,
    pub has_light_ceiling: Option<bool>,
    pub has_electronic_locks: Option<bool>,
    pub has_gate: Option<bool>,
    pub has_cameras: Option<bool>,
    pub has_lighting: Option<bool>,

    // 재무
    pub rental_price: Option<f64>,
    pub monthly_rental: Option<f64>,
    pub max_occupancy: Option<f64>,
    pub contract_length: Option<f64>,
    pub license_fee: Option<f64>,
    pub monthly_expenses: Option<f64>,
}

/// 시나리오 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ScenarioError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ScenarioError::Parse(e) => write!(f, "시나리오 파싱 오류: {e}"),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<std::io::Error> for ScenarioError {
    fn from(value: std::io::Error) -> Self {
        ScenarioError::Io(value)
    }
}

impl From<toml::de::Error> for ScenarioError {
    fn from(value: toml::de::Error) -> Self {
        ScenarioError::Parse(value)
    }
}

/// 시나리오 TOML 파일을 읽는다.
pub fn load(path: &Path) -> Result<Scenario, ScenarioError> {
    let content = fs::read_to_string(path)?;
    let scenario: Scenario = toml::from_str(&content)?;
    Ok(scenario)
}

impl Scenario {
    /// 빈 필드에 기본값을 채워 계산용 파라미터로 변환한다.
    /// 백분율 입력(최대 점유율, 수수료)은 여기서 소수로 바꾼다.
    /// 박스 비중은 합이 100이 아니어도 그대로 넘긴다.
    pub fn resolve(&self) -> ProjectParams {
        let hall = HallSpec {
            width_m: self.hall_width.unwrap_or(20.0),
            length_m: self.hall_length.unwrap_or(25.0),
            declared_area_m2: self.hall_area.unwrap_or(500.0),
            corridor_width_m: self.corridor_width.unwrap_or(1.5),
            system_height_mm: self.system_height.unwrap_or(2700.0),
        };

        let mix = SizeClassMix {
            small_percent: self.small_percent.unwrap_or(50.0),
            medium_percent: self.medium_percent.unwrap_or(30.0),
            large_percent: self.large_percent.unwrap_or(20.0),
            small_area_m2: self.small_size.unwrap_or(2.0),
            medium_area_m2: self.medium_size.unwrap_or(5.0),
            large_area_m2: self.large_size.unwrap_or(10.0),
        };

        let pricing = PricingConfig {
            front_wall_price_per_m2: self.front_wall_price.unwrap_or(110.0),
            internal_wall_price_per_m2: self.internal_wall_price.unwrap_or(84.0),
            single_door_price: self.single_door_price.unwrap_or(780.0),
            double_door_price: self.double_door_price.unwrap_or(1560.0),
            roller_15_price: self.roller15_price.unwrap_or(1700.0),
            roller_2_price: self.roller2_price.unwrap_or(1800.0),
            kicker_price_per_m: self.kicker_price.unwrap_or(81.0),
            mesh_price_per_m2: self.mesh_price.unwrap_or(50.0),
            light_ceiling_price_per_m: self.light_ceiling_price.unwrap_or(80.0),
            electronic_lock_price: self.electronic_lock_price.unwrap_or(550.0),
            gate_price: self.gate_price.unwrap_or(15000.0),
            camera_price: self.camera_price.unwrap_or(500.0),
            camera_density_m2: self.camera_density.unwrap_or(50.0),
            light_price: self.light_price.unwrap_or(150.0),
            light_spacing_m: self.light_density.unwrap_or(5.0),
        };

        let options = FeatureOptions {
            use_rollers: self.use_rollers.unwrap_or(false),
            mesh: self.has_mesh.unwrap_or(false),
            light_ceiling: self.has_light_ceiling.unwrap_or(false),
            electronic_locks: self.has_electronic_locks.unwrap_or(false),
            gate: self.has_gate.unwrap_or(false),
            cameras: self.has_cameras.unwrap_or(false),
            lighting: self.has_lighting.unwrap_or(false),
        };

        let financial = FinancialParams {
            rental_price_per_m2: self.rental_price.unwrap_or(80.0),
            absorption_m2_per_month: self.monthly_rental.unwrap_or(20.0),
            max_occupancy_fraction: self.max_occupancy.unwrap_or(85.0) / 100.0,
            contract_years: self.contract_length.unwrap_or(10.0),
            license_fee_fraction: self.license_fee.unwrap_or(15.0) / 100.0,
            monthly_expenses: self.monthly_expenses.unwrap_or(5000.0),
        };

        ProjectParams {
            hall,
            mix,
            pricing,
            options,
            financial,
        }
    }

    /// 박스 비중 세 값의 합 [%]. 기본값 적용 후 계산한다.
    pub fn mix_percent_sum(&self) -> f64 {
        self.small_percent.unwrap_or(50.0)
            + self.medium_percent.unwrap_or(30.0)
            + self.large_percent.unwrap_or(20.0)
    }

    /// 비중 합이 100에서 허용 오차 이상 벗어났는지 확인한다.
    /// 경고 표시용이며 계산 자체는 막지 않는다.
    pub fn mix_percent_sum_off(&self) -> bool {
        (self.mix_percent_sum() - 100.0).abs() > PERCENT_SUM_TOLERANCE
    }
}
