//! Property tests for the building restriction calculator.
//!
//! The arithmetic is tiny, so properties concentrate on the guarantees the
//! presentation layer leans on: the zero-site guard, monotonicity of the
//! ratios, and the exact shape of the corner-lot relaxation.

use proptest::prelude::*;

use kisei_core::UseDistrict;
use kisei_zoning::{
    capacity, corner_adjusted_limit, coverage_percent, evaluate, BuildingPlan, ZoningCatalog,
    CORNER_LOT_RELAXATION,
};

fn area() -> impl Strategy<Value = f64> {
    0.0..1.0e7_f64
}

fn district() -> impl Strategy<Value = UseDistrict> {
    prop::sample::select(UseDistrict::all().to_vec())
}

proptest! {
    #[test]
    fn coverage_matches_the_definition_for_positive_sites(
        footprint in area(),
        site in 0.01..1.0e7_f64,
    ) {
        let got = coverage_percent(footprint, site);
        prop_assert_eq!(got, footprint / site * 100.0);
    }

    #[test]
    fn coverage_is_zero_on_a_zero_site(footprint in area()) {
        prop_assert_eq!(coverage_percent(footprint, 0.0), 0.0);
    }

    #[test]
    fn coverage_is_monotone_in_the_footprint(
        a in area(),
        b in area(),
        site in 0.01..1.0e7_f64,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(coverage_percent(lo, site) <= coverage_percent(hi, site));
    }

    #[test]
    fn corner_relaxation_adds_exactly_ten_points(base in 0.0..500.0_f64) {
        prop_assert_eq!(corner_adjusted_limit(base, true), base + CORNER_LOT_RELAXATION);
        prop_assert_eq!(corner_adjusted_limit(base, false), base);
    }

    #[test]
    fn verdict_agrees_with_the_per_dimension_flags(
        site in area(),
        building in area(),
        floor in area(),
        corner in any::<bool>(),
        district in district(),
    ) {
        let catalog = ZoningCatalog::hofu();
        let plan = BuildingPlan {
            site_area_sqm: site,
            building_area_sqm: building,
            total_floor_area_sqm: floor,
            corner_lot: corner,
        };
        let a = evaluate(&plan, catalog.rule(district)).unwrap();
        prop_assert_eq!(a.compliant, a.coverage_ok && a.floor_area_ok);
        prop_assert_eq!(a.coverage_ok, a.coverage_percent <= a.effective_coverage_limit);
        prop_assert_eq!(a.floor_area_ok, a.floor_area_percent <= a.effective_floor_area_limit);
    }

    #[test]
    fn a_plan_inside_capacity_always_complies(
        site in area(),
        corner in any::<bool>(),
        district in district(),
        fill in 0.0..0.99_f64,
    ) {
        let catalog = ZoningCatalog::hofu();
        let rule = catalog.rule(district);
        let cap = capacity(site, corner, rule).unwrap();
        let plan = BuildingPlan {
            site_area_sqm: site,
            building_area_sqm: cap.max_building_footprint_sqm * fill,
            total_floor_area_sqm: cap.max_total_floor_area_sqm * fill,
            corner_lot: corner,
        };
        let a = evaluate(&plan, rule).unwrap();
        prop_assert!(a.compliant, "plan inside capacity must pass: {a:?}");
    }

    #[test]
    fn evaluation_is_deterministic(
        site in area(),
        building in area(),
        floor in area(),
        corner in any::<bool>(),
        district in district(),
    ) {
        let catalog = ZoningCatalog::hofu();
        let plan = BuildingPlan {
            site_area_sqm: site,
            building_area_sqm: building,
            total_floor_area_sqm: floor,
            corner_lot: corner,
        };
        let first = evaluate(&plan, catalog.rule(district)).unwrap();
        let second = evaluate(&plan, catalog.rule(district)).unwrap();
        prop_assert_eq!(first, second);
    }
}
