//! # Building Restriction Calculator
//!
//! Pure, deterministic arithmetic from a [`BuildingPlan`] and a
//! [`ZoneRule`] to a [`ComplianceAssessment`]: the actual coverage and
//! floor-area ratios, the effective limits after the corner-lot
//! relaxation, and the pass/fail verdict.
//!
//! All functions are total over their documented domain. A zero-area site
//! yields 0% ratios rather than an error; the only failure mode is an
//! area input that is negative or not a finite number.

use serde::{Deserialize, Serialize};

use kisei_core::ValidationError;

use crate::catalog::ZoneRule;

/// Coverage-limit relaxation granted to corner lots (角地緩和), in
/// percentage points.
pub const CORNER_LOT_RELAXATION: f64 = 10.0;

/// The numeric inputs of one compliance check, as collected from form
/// fields. A value object; constructed per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingPlan {
    /// Lot area (敷地面積) in square metres.
    pub site_area_sqm: f64,
    /// Ground-level building footprint (建築面積) in square metres.
    pub building_area_sqm: f64,
    /// Total floor area across all stories (延べ床面積) in square metres.
    pub total_floor_area_sqm: f64,
    /// Whether the lot qualifies for the corner-lot relaxation.
    #[serde(default)]
    pub corner_lot: bool,
}

impl BuildingPlan {
    /// Validate the geometry: every area must be finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArea`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("site_area_sqm", self.site_area_sqm),
            ("building_area_sqm", self.building_area_sqm),
            ("total_floor_area_sqm", self.total_floor_area_sqm),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidArea { field, value });
            }
        }
        Ok(())
    }
}

/// The outcome of one compliance check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceAssessment {
    /// Actual building-coverage ratio of the plan, in percent.
    pub coverage_percent: f64,
    /// Actual floor-area ratio of the plan, in percent.
    pub floor_area_percent: f64,
    /// Coverage limit after any corner-lot relaxation, in percent.
    pub effective_coverage_limit: f64,
    /// Floor-area limit, in percent. The corner-lot relaxation does not
    /// apply to this dimension.
    pub effective_floor_area_limit: f64,
    /// Whether the coverage ratio is within its limit.
    pub coverage_ok: bool,
    /// Whether the floor-area ratio is within its limit.
    pub floor_area_ok: bool,
    /// Combined verdict: both dimensions within their limits.
    pub compliant: bool,
}

/// The buildable-capacity figures for a lot under one rule — the three
/// data points of the presentation layer's bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildableCapacity {
    /// Lot area in square metres.
    pub site_area_sqm: f64,
    /// Maximum permitted building footprint in square metres.
    pub max_building_footprint_sqm: f64,
    /// Maximum permitted total floor area in square metres.
    pub max_total_floor_area_sqm: f64,
}

/// Actual building-coverage ratio in percent: `footprint / site * 100`.
///
/// A site area of zero yields `0.0` rather than a division error; the
/// same guard covers non-positive values if a caller bypasses
/// [`BuildingPlan::validate`].
pub fn coverage_percent(building_area_sqm: f64, site_area_sqm: f64) -> f64 {
    if site_area_sqm > 0.0 {
        building_area_sqm / site_area_sqm * 100.0
    } else {
        0.0
    }
}

/// Actual floor-area ratio in percent: `total_floor / site * 100`, with
/// the same zero-site guard as [`coverage_percent`].
pub fn floor_area_percent(total_floor_area_sqm: f64, site_area_sqm: f64) -> f64 {
    coverage_percent(total_floor_area_sqm, site_area_sqm)
}

/// The effective coverage limit for a lot: the base limit, plus
/// [`CORNER_LOT_RELAXATION`] percentage points when the lot qualifies.
///
/// No cap is applied to the combined value: the published Hōfu table
/// leaves the relaxation uncapped, so 商業地域 on a corner lot evaluates
/// against 90%.
pub fn corner_adjusted_limit(base_limit: f64, corner_lot: bool) -> f64 {
    if corner_lot {
        base_limit + CORNER_LOT_RELAXATION
    } else {
        base_limit
    }
}

/// Maximum permitted building footprint for a lot:
/// `site * effective_coverage_limit / 100`.
pub fn max_building_footprint(site_area_sqm: f64, effective_coverage_limit: f64) -> f64 {
    site_area_sqm * effective_coverage_limit / 100.0
}

/// Maximum permitted total floor area for a lot:
/// `site * floor_area_limit / 100`.
pub fn max_total_floor_area(site_area_sqm: f64, floor_area_limit: f64) -> f64 {
    site_area_sqm * floor_area_limit / 100.0
}

/// Evaluate a plan against a zone rule.
///
/// Both comparisons are non-strict: a plan exactly at a limit is
/// compliant. Deterministic and side-effect-free; the only logging is a
/// debug trace of the verdict.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidArea`] if any plan area is negative
/// or non-finite.
pub fn evaluate(plan: &BuildingPlan, rule: &ZoneRule) -> Result<ComplianceAssessment, ValidationError> {
    plan.validate()?;

    let coverage = coverage_percent(plan.building_area_sqm, plan.site_area_sqm);
    let floor_area = floor_area_percent(plan.total_floor_area_sqm, plan.site_area_sqm);
    let coverage_limit = corner_adjusted_limit(f64::from(rule.coverage_limit), plan.corner_lot);
    let floor_area_limit = f64::from(rule.floor_area_limit);

    let coverage_ok = coverage <= coverage_limit;
    let floor_area_ok = floor_area <= floor_area_limit;

    let assessment = ComplianceAssessment {
        coverage_percent: coverage,
        floor_area_percent: floor_area,
        effective_coverage_limit: coverage_limit,
        effective_floor_area_limit: floor_area_limit,
        coverage_ok,
        floor_area_ok,
        compliant: coverage_ok && floor_area_ok,
    };

    tracing::debug!(
        district = %rule.district,
        coverage = assessment.coverage_percent,
        floor_area = assessment.floor_area_percent,
        compliant = assessment.compliant,
        "evaluated building plan"
    );

    Ok(assessment)
}

/// Buildable capacity of a lot under a rule: the lot area and the two
/// maxima, ready for chart rendering.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidArea`] if the site area is negative
/// or non-finite.
pub fn capacity(
    site_area_sqm: f64,
    corner_lot: bool,
    rule: &ZoneRule,
) -> Result<BuildableCapacity, ValidationError> {
    if !site_area_sqm.is_finite() || site_area_sqm < 0.0 {
        return Err(ValidationError::InvalidArea {
            field: "site_area_sqm",
            value: site_area_sqm,
        });
    }

    let coverage_limit = corner_adjusted_limit(f64::from(rule.coverage_limit), corner_lot);
    Ok(BuildableCapacity {
        site_area_sqm,
        max_building_footprint_sqm: max_building_footprint(site_area_sqm, coverage_limit),
        max_total_floor_area_sqm: max_total_floor_area(
            site_area_sqm,
            f64::from(rule.floor_area_limit),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ZoningCatalog;
    use kisei_core::UseDistrict;

    fn plan(site: f64, building: f64, floor: f64, corner: bool) -> BuildingPlan {
        BuildingPlan {
            site_area_sqm: site,
            building_area_sqm: building,
            total_floor_area_sqm: floor,
            corner_lot: corner,
        }
    }

    #[test]
    fn coverage_percent_basic_division() {
        assert_eq!(coverage_percent(50.0, 100.0), 50.0);
        assert_eq!(coverage_percent(33.0, 100.0), 33.0);
    }

    #[test]
    fn coverage_percent_guards_zero_site() {
        assert_eq!(coverage_percent(50.0, 0.0), 0.0);
        assert_eq!(coverage_percent(0.0, 0.0), 0.0);
    }

    #[test]
    fn corner_adjustment_adds_ten_points() {
        assert_eq!(corner_adjusted_limit(60.0, true), 70.0);
        assert_eq!(corner_adjusted_limit(60.0, false), 60.0);
    }

    #[test]
    fn corner_adjustment_is_uncapped() {
        // 商業地域 at 80% + relaxation exceeds 80; deliberately not capped.
        assert_eq!(corner_adjusted_limit(80.0, true), 90.0);
    }

    #[test]
    fn boundary_equality_is_compliant() {
        // 第一種低層住居専用地域: 50 / 80. A plan exactly at both limits passes.
        let catalog = ZoningCatalog::hofu();
        let rule = catalog.rule(UseDistrict::CategoryILowRise);
        let assessment = evaluate(&plan(100.0, 50.0, 80.0, false), rule).unwrap();

        assert_eq!(assessment.coverage_percent, 50.0);
        assert_eq!(assessment.floor_area_percent, 80.0);
        assert_eq!(assessment.effective_coverage_limit, 50.0);
        assert_eq!(assessment.effective_floor_area_limit, 80.0);
        assert!(assessment.compliant);
    }

    #[test]
    fn one_point_over_coverage_fails() {
        let catalog = ZoningCatalog::hofu();
        let rule = catalog.rule(UseDistrict::CategoryILowRise);
        let assessment = evaluate(&plan(100.0, 51.0, 80.0, false), rule).unwrap();

        assert_eq!(assessment.coverage_percent, 51.0);
        assert!(!assessment.coverage_ok);
        assert!(assessment.floor_area_ok);
        assert!(!assessment.compliant);
    }

    #[test]
    fn corner_relaxation_rescues_a_borderline_plan() {
        // 66% coverage fails the base 60% limit but passes the corner 70%.
        let catalog = ZoningCatalog::hofu();
        let rule = catalog.rule(UseDistrict::CategoryIResidential);

        let without = evaluate(&plan(100.0, 66.0, 100.0, false), rule).unwrap();
        assert!(!without.compliant);

        let with = evaluate(&plan(100.0, 66.0, 100.0, true), rule).unwrap();
        assert_eq!(with.effective_coverage_limit, 70.0);
        assert!(with.compliant);
    }

    #[test]
    fn relaxation_never_touches_the_floor_area_limit() {
        let catalog = ZoningCatalog::hofu();
        let rule = catalog.rule(UseDistrict::CategoryIResidential);
        let assessment = evaluate(&plan(100.0, 10.0, 10.0, true), rule).unwrap();
        assert_eq!(assessment.effective_floor_area_limit, 200.0);
    }

    #[test]
    fn zero_site_plan_is_compliant_not_an_error() {
        let catalog = ZoningCatalog::hofu();
        let rule = catalog.rule(UseDistrict::Commercial);
        let assessment = evaluate(&plan(0.0, 40.0, 90.0, false), rule).unwrap();
        assert_eq!(assessment.coverage_percent, 0.0);
        assert_eq!(assessment.floor_area_percent, 0.0);
        assert!(assessment.compliant);
    }

    #[test]
    fn negative_footprint_is_rejected() {
        let catalog = ZoningCatalog::hofu();
        let rule = catalog.rule(UseDistrict::CategoryILowRise);
        let err = evaluate(&plan(100.0, -1.0, 80.0, false), rule).unwrap_err();
        assert!(matches!(
            err,
            kisei_core::ValidationError::InvalidArea {
                field: "building_area_sqm",
                ..
            }
        ));
    }

    #[test]
    fn nan_site_is_rejected() {
        let catalog = ZoningCatalog::hofu();
        let rule = catalog.rule(UseDistrict::CategoryILowRise);
        let err = evaluate(&plan(f64::NAN, 1.0, 1.0, false), rule).unwrap_err();
        assert!(matches!(
            err,
            kisei_core::ValidationError::InvalidArea {
                field: "site_area_sqm",
                ..
            }
        ));
    }

    #[test]
    fn capacity_matches_the_sidebar_worked_example() {
        // 150㎡ lot, 60% coverage + corner relaxation → 70%, 200% floor area.
        let catalog = ZoningCatalog::hofu();
        let rule = catalog.rule(UseDistrict::CategoryIResidential);
        let cap = capacity(150.0, true, rule).unwrap();

        assert_eq!(cap.site_area_sqm, 150.0);
        assert_eq!(cap.max_building_footprint_sqm, 105.0);
        assert_eq!(cap.max_total_floor_area_sqm, 300.0);
    }

    #[test]
    fn max_area_helpers_scale_linearly() {
        assert_eq!(max_building_footprint(150.0, 70.0), 105.0);
        assert_eq!(max_total_floor_area(150.0, 200.0), 300.0);
        assert_eq!(max_building_footprint(0.0, 70.0), 0.0);
    }

    #[test]
    fn capacity_rejects_negative_site() {
        let catalog = ZoningCatalog::hofu();
        let rule = catalog.rule(UseDistrict::Commercial);
        assert!(capacity(-10.0, false, rule).is_err());
    }

    #[test]
    fn assessment_serializes_for_the_api_surface() {
        let catalog = ZoningCatalog::hofu();
        let rule = catalog.rule(UseDistrict::CategoryILowRise);
        let assessment = evaluate(&plan(100.0, 50.0, 80.0, false), rule).unwrap();
        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["compliant"], serde_json::json!(true));
        assert_eq!(json["coverage_percent"], serde_json::json!(50.0));
    }
}
