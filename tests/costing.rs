use self_storage_toolbox::costing::{self, CostCategory, FeatureOptions, PricingConfig};
use self_storage_toolbox::layout::{self, HallSpec, LayoutResult, SizeClass, SizeClassMix, StorageUnit};

fn default_hall() -> HallSpec {
    HallSpec {
        width_m: 20.0,
        length_m: 25.0,
        declared_area_m2: 500.0,
        corridor_width_m: 1.5,
        system_height_mm: 2700.0,
    }
}

fn default_mix() -> SizeClassMix {
    SizeClassMix {
        small_percent: 50.0,
        medium_percent: 30.0,
        large_percent: 20.0,
        small_area_m2: 2.0,
        medium_area_m2: 5.0,
        large_area_m2: 10.0,
    }
}

fn default_pricing() -> PricingConfig {
    PricingConfig {
        front_wall_price_per_m2: 110.0,
        internal_wall_price_per_m2: 84.0,
        single_door_price: 780.0,
        double_door_price: 1560.0,
        roller_15_price: 1700.0,
        roller_2_price: 1800.0,
        kicker_price_per_m: 81.0,
        mesh_price_per_m2: 50.0,
        light_ceiling_price_per_m: 80.0,
        electronic_lock_price: 550.0,
        gate_price: 15000.0,
        camera_price: 500.0,
        camera_density_m2: 50.0,
        light_price: 150.0,
        light_spacing_m: 5.0,
    }
}

fn single_unit_layout(class: SizeClass, width_m: f64, depth_m: f64, area_m2: f64) -> LayoutResult {
    LayoutResult {
        rows: Vec::new(),
        units: vec![StorageUnit {
            id: 0,
            class,
            x_m: 1.5,
            y_m: 1.5,
            width_m,
            depth_m,
            floor_area_m2: area_m2,
        }],
        small_count: u32::from(class == SizeClass::Small),
        medium_count: u32::from(class == SizeClass::Medium),
        large_count: u32::from(class == SizeClass::Large),
        total_unit_area_m2: area_m2,
        front_wall_length_m: width_m,
        internal_wall_length_m: 2.0 * depth_m + width_m,
        corridor_length_m: 70.0,
    }
}

#[test]
fn baseline_breakdown_has_exactly_five_items() {
    let hall = default_hall();
    let result = layout::plan(&hall, &default_mix());
    let breakdown = costing::estimate(
        &hall,
        &result,
        &default_pricing(),
        &FeatureOptions::default(),
    );

    let categories: Vec<CostCategory> = breakdown.items.iter().map(|i| i.category).collect();
    assert_eq!(
        categories,
        vec![
            CostCategory::FrontWalls,
            CostCategory::InternalWalls,
            CostCategory::SingleDoors,
            CostCategory::DoubleDoors,
            CostCategory::Kicker,
        ]
    );
}

#[test]
fn total_investment_matches_sum_of_items() {
    let hall = default_hall();
    let result = layout::plan(&hall, &default_mix());
    let options = FeatureOptions {
        use_rollers: false,
        mesh: true,
        light_ceiling: true,
        electronic_locks: true,
        gate: true,
        cameras: true,
        lighting: true,
    };
    let breakdown = costing::estimate(&hall, &result, &default_pricing(), &options);

    let sum: f64 = breakdown.items.iter().map(|i| i.total).sum();
    assert!((breakdown.total_investment - sum).abs() < 1e-6);
    for item in &breakdown.items {
        assert!((item.total - item.quantity * item.unit_price).abs() < 1e-6);
    }
}

#[test]
fn roller_option_replaces_double_doors() {
    let hall = default_hall();
    let result = layout::plan(&hall, &default_mix());
    let options = FeatureOptions {
        use_rollers: true,
        ..FeatureOptions::default()
    };
    let breakdown = costing::estimate(&hall, &result, &default_pricing(), &options);

    assert!(breakdown.item(CostCategory::DoubleDoors).is_none());
    let roller15 = breakdown.item(CostCategory::Roller15).expect("roller 1.5m");
    let roller2 = breakdown.item(CostCategory::Roller2).expect("roller 2m");
    // 기본 대형 박스 폭 √10×1.2 >= 2 m 기준을 넘으므로 전부 2 m 롤러
    assert_eq!(roller15.quantity, 0.0);
    assert_eq!(roller2.quantity, f64::from(result.large_count));
}

#[test]
fn door_openings_are_deducted_from_front_wall_surface() {
    let hall = default_hall();
    let layout = single_unit_layout(SizeClass::Small, 2.0, 1.0, 2.0);
    let breakdown = costing::estimate(
        &hall,
        &layout,
        &default_pricing(),
        &FeatureOptions::default(),
    );

    // 전면벽 면적 = 2.0 m × 2.7 m - 단문 개구부 1.0 m × 2.1 m
    let front = breakdown.item(CostCategory::FrontWalls).expect("front walls");
    assert!((front.quantity - (2.0 * 2.7 - 2.1)).abs() < 1e-9);
    assert!((front.total - (2.0 * 2.7 - 2.1) * 110.0).abs() < 1e-9);

    let singles = breakdown.item(CostCategory::SingleDoors).expect("single doors");
    assert_eq!(singles.quantity, 1.0);
}

#[test]
fn narrow_large_unit_gets_small_roller() {
    let hall = default_hall();
    // 대형 박스 폭이 2 m 미만이면 1.5 m 롤러가 배정된다
    let layout = single_unit_layout(SizeClass::Large, 1.8, 1.4, 2.5);
    let options = FeatureOptions {
        use_rollers: true,
        ..FeatureOptions::default()
    };
    let breakdown = costing::estimate(&hall, &layout, &default_pricing(), &options);

    assert_eq!(breakdown.item(CostCategory::Roller15).unwrap().quantity, 1.0);
    assert_eq!(breakdown.item(CostCategory::Roller2).unwrap().quantity, 0.0);
    // 개구부 공제도 1.5 m 기준
    let front = breakdown.item(CostCategory::FrontWalls).unwrap();
    assert!((front.quantity - (1.8 * 2.7 - 1.5 * 2.1)).abs() < 1e-9);
}

#[test]
fn optional_items_follow_documented_quantity_rules() {
    let hall = default_hall();
    let result = layout::plan(&hall, &default_mix());
    let options = FeatureOptions {
        use_rollers: false,
        mesh: true,
        light_ceiling: true,
        electronic_locks: true,
        gate: true,
        cameras: true,
        lighting: true,
    };
    let breakdown = costing::estimate(&hall, &result, &default_pricing(), &options);

    let mesh = breakdown.item(CostCategory::Mesh).expect("mesh");
    assert!((mesh.quantity - result.total_unit_area_m2).abs() < 1e-9);

    let ceiling = breakdown.item(CostCategory::LightCeiling).expect("ceiling");
    assert!((ceiling.quantity - 70.0).abs() < 1e-9);

    let locks = breakdown.item(CostCategory::ElectronicLocks).expect("locks");
    assert_eq!(locks.quantity, f64::from(result.unit_count()));

    let gate = breakdown.item(CostCategory::Gate).expect("gate");
    assert_eq!(gate.quantity, 1.0);
    assert!((gate.total - 15000.0).abs() < 1e-9);

    // 카메라: ceil(500 / 50 × 3) = 30대
    let cameras = breakdown.item(CostCategory::Cameras).expect("cameras");
    assert_eq!(cameras.quantity, 30.0);

    // 조명: ceil(70 / 5) = 14등
    let lighting = breakdown.item(CostCategory::Lighting).expect("lighting");
    assert_eq!(lighting.quantity, 14.0);
}

#[test]
fn empty_layout_yields_zero_breakdown() {
    let hall = HallSpec {
        width_m: 20.0,
        length_m: 25.0,
        declared_area_m2: 500.0,
        corridor_width_m: 10.0,
        system_height_mm: 2700.0,
    };
    let result = layout::plan(&hall, &default_mix());
    let breakdown = costing::estimate(
        &hall,
        &result,
        &default_pricing(),
        &FeatureOptions::default(),
    );

    assert_eq!(breakdown.total_investment, 0.0);
    for item in &breakdown.items {
        assert_eq!(item.total, 0.0);
    }
}
