//! # Zoning Catalog
//!
//! The fixed table of ratio limits per use district, taken from the Hōfu
//! city plan (common published values). The catalog is an explicit value
//! constructed once at process start — not ambient module state — and is
//! immutable thereafter, so it can be shared (`Arc`) by any number of
//! concurrent callers without locking.

use serde::{Deserialize, Serialize};

use kisei_core::{UseDistrict, ValidationError};

/// The ratio limits for one use district.
///
/// Limits are integer percentages as published in the city-plan table.
/// The corner-lot relaxation is not baked in here; it is applied by the
/// calculator per plan (see [`crate::corner_adjusted_limit`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRule {
    /// The district this rule applies to.
    pub district: UseDistrict,
    /// Building-coverage limit (建ぺい率) in percent.
    pub coverage_limit: u16,
    /// Floor-area limit (容積率) in percent.
    pub floor_area_limit: u16,
}

/// Immutable lookup table from use district to ratio limits.
///
/// Iteration order is the statutory presentation order of
/// [`UseDistrict::all`], which is what selection controls display.
#[derive(Debug, Clone)]
pub struct ZoningCatalog {
    rules: Vec<ZoneRule>,
}

impl ZoningCatalog {
    /// Build the Hōfu City catalog.
    ///
    /// One entry per district, in presentation order. The values follow the
    /// city's published zoning table; 商業地域 carries the only 400% floor-area
    /// allowance, and the white area falls back to the common 60/200 pair.
    pub fn hofu() -> Self {
        let limits = |district: UseDistrict| -> (u16, u16) {
            match district {
                UseDistrict::CategoryILowRise => (50, 80),
                UseDistrict::CategoryIMediumHighRise => (60, 150),
                UseDistrict::CategoryIiMediumHighRise => (60, 200),
                UseDistrict::CategoryIResidential => (60, 200),
                UseDistrict::CategoryIiResidential => (60, 200),
                UseDistrict::QuasiResidential => (60, 200),
                UseDistrict::NeighborhoodCommercial => (80, 200),
                UseDistrict::Commercial => (80, 400),
                UseDistrict::QuasiIndustrial => (60, 200),
                UseDistrict::Industrial => (60, 200),
                UseDistrict::ExclusivelyIndustrial => (60, 200),
                UseDistrict::Undesignated => (60, 200),
            }
        };

        let rules = UseDistrict::all()
            .iter()
            .map(|&district| {
                let (coverage_limit, floor_area_limit) = limits(district);
                ZoneRule {
                    district,
                    coverage_limit,
                    floor_area_limit,
                }
            })
            .collect();

        Self { rules }
    }

    /// Look up the rule for a district. Total — every district has a rule
    /// by construction.
    pub fn rule(&self, district: UseDistrict) -> &ZoneRule {
        // Discriminants follow declaration order, which is the order rules
        // are built in, so positional lookup is safe (asserted in tests).
        &self.rules[district as usize]
    }

    /// Look up a rule by district name (official Japanese name or slug).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownDistrict`] if the name is not one
    /// of the twelve categories.
    pub fn get(&self, name: &str) -> Result<&ZoneRule, ValidationError> {
        let district = UseDistrict::from_name(name).map_err(|e| {
            tracing::debug!(name, "district lookup failed");
            e
        })?;
        Ok(self.rule(district))
    }

    /// All rules in presentation order.
    pub fn rules(&self) -> &[ZoneRule] {
        &self.rules
    }

    /// District names in presentation order, for populating a selection
    /// control.
    pub fn district_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.district.official_name())
    }
}

impl Default for ZoningCatalog {
    fn default() -> Self {
        Self::hofu()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_twelve_rules_in_presentation_order() {
        let catalog = ZoningCatalog::hofu();
        assert_eq!(catalog.rules().len(), UseDistrict::COUNT);
        for (rule, &district) in catalog.rules().iter().zip(UseDistrict::all()) {
            assert_eq!(rule.district, district);
        }
    }

    #[test]
    fn positional_rule_lookup_agrees_with_district_field() {
        let catalog = ZoningCatalog::hofu();
        for &district in UseDistrict::all() {
            assert_eq!(catalog.rule(district).district, district);
        }
    }

    #[test]
    fn low_rise_residential_is_strictest() {
        let catalog = ZoningCatalog::hofu();
        let rule = catalog.rule(UseDistrict::CategoryILowRise);
        assert_eq!(rule.coverage_limit, 50);
        assert_eq!(rule.floor_area_limit, 80);
    }

    #[test]
    fn commercial_carries_the_400_percent_floor_allowance() {
        let catalog = ZoningCatalog::hofu();
        let rule = catalog.rule(UseDistrict::Commercial);
        assert_eq!(rule.coverage_limit, 80);
        assert_eq!(rule.floor_area_limit, 400);
    }

    #[test]
    fn white_area_falls_back_to_60_200() {
        let catalog = ZoningCatalog::hofu();
        let rule = catalog.rule(UseDistrict::Undesignated);
        assert_eq!(rule.coverage_limit, 60);
        assert_eq!(rule.floor_area_limit, 200);
    }

    #[test]
    fn get_by_official_name() {
        let catalog = ZoningCatalog::hofu();
        let rule = catalog.get("第一種中高層住居専用地域").unwrap();
        assert_eq!(rule.coverage_limit, 60);
        assert_eq!(rule.floor_area_limit, 150);
    }

    #[test]
    fn get_rejects_unknown_name() {
        let catalog = ZoningCatalog::hofu();
        let err = catalog.get("nonexistent").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownDistrict(_)));
    }

    #[test]
    fn district_names_match_all_order() {
        let catalog = ZoningCatalog::hofu();
        let names: Vec<_> = catalog.district_names().collect();
        assert_eq!(names[0], "第一種低層住居専用地域");
        assert_eq!(names[7], "商業地域");
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn limits_stay_within_published_ranges() {
        let catalog = ZoningCatalog::hofu();
        for rule in catalog.rules() {
            assert!((50..=80).contains(&rule.coverage_limit), "{rule:?}");
            assert!((80..=400).contains(&rule.floor_area_limit), "{rule:?}");
        }
    }
}
