//! # Use Districts — Single Source of Truth
//!
//! Defines the [`UseDistrict`] enum with the twelve zoning categories
//! (用途地域) of the Hōfu city plan. This is the single definition used by
//! every crate in the workspace. The Rust compiler enforces exhaustive
//! `match` — adding a category forces every handler to address it.
//!
//! The catalog of per-district ratio limits lives in `kisei-zoning`; this
//! crate only fixes the identity and ordering of the categories.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A zoning category (用途地域) under the Hōfu city plan.
///
/// The variant order is the statutory presentation order used by every
/// selection control and report in the stack: residential categories first,
/// then commercial, then industrial, then the undesignated white area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseDistrict {
    /// 第一種低層住居専用地域 — category I exclusively low-rise residential.
    CategoryILowRise,
    /// 第一種中高層住居専用地域 — category I medium/high-rise residential.
    CategoryIMediumHighRise,
    /// 第二種中高層住居専用地域 — category II medium/high-rise residential.
    CategoryIiMediumHighRise,
    /// 第一種住居地域 — category I residential.
    CategoryIResidential,
    /// 第二種住居地域 — category II residential.
    CategoryIiResidential,
    /// 準住居地域 — quasi-residential.
    QuasiResidential,
    /// 近隣商業地域 — neighborhood commercial.
    NeighborhoodCommercial,
    /// 商業地域 — commercial.
    Commercial,
    /// 準工業地域 — quasi-industrial.
    QuasiIndustrial,
    /// 工業地域 — industrial.
    Industrial,
    /// 工業専用地域 — exclusively industrial.
    ExclusivelyIndustrial,
    /// 指定のない区域（白地地域）— undesignated white area.
    Undesignated,
}

impl UseDistrict {
    /// All districts in statutory presentation order.
    ///
    /// This is the order selection controls list the categories in, and the
    /// order the zoning catalog iterates them.
    pub fn all() -> &'static [UseDistrict] {
        &[
            Self::CategoryILowRise,
            Self::CategoryIMediumHighRise,
            Self::CategoryIiMediumHighRise,
            Self::CategoryIResidential,
            Self::CategoryIiResidential,
            Self::QuasiResidential,
            Self::NeighborhoodCommercial,
            Self::Commercial,
            Self::QuasiIndustrial,
            Self::Industrial,
            Self::ExclusivelyIndustrial,
            Self::Undesignated,
        ]
    }

    /// The total number of use districts.
    pub const COUNT: usize = 12;

    /// The official Japanese name, as printed on the city-plan table.
    pub fn official_name(&self) -> &'static str {
        match self {
            Self::CategoryILowRise => "第一種低層住居専用地域",
            Self::CategoryIMediumHighRise => "第一種中高層住居専用地域",
            Self::CategoryIiMediumHighRise => "第二種中高層住居専用地域",
            Self::CategoryIResidential => "第一種住居地域",
            Self::CategoryIiResidential => "第二種住居地域",
            Self::QuasiResidential => "準住居地域",
            Self::NeighborhoodCommercial => "近隣商業地域",
            Self::Commercial => "商業地域",
            Self::QuasiIndustrial => "準工業地域",
            Self::Industrial => "工業地域",
            Self::ExclusivelyIndustrial => "工業専用地域",
            Self::Undesignated => "指定のない区域（白地地域）",
        }
    }

    /// The snake_case machine slug, matching the serde representation.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::CategoryILowRise => "category_i_low_rise",
            Self::CategoryIMediumHighRise => "category_i_medium_high_rise",
            Self::CategoryIiMediumHighRise => "category_ii_medium_high_rise",
            Self::CategoryIResidential => "category_i_residential",
            Self::CategoryIiResidential => "category_ii_residential",
            Self::QuasiResidential => "quasi_residential",
            Self::NeighborhoodCommercial => "neighborhood_commercial",
            Self::Commercial => "commercial",
            Self::QuasiIndustrial => "quasi_industrial",
            Self::Industrial => "industrial",
            Self::ExclusivelyIndustrial => "exclusively_industrial",
            Self::Undesignated => "undesignated",
        }
    }

    /// Resolve a district from its official Japanese name or its slug.
    ///
    /// Leading/trailing whitespace is ignored. Any other string is rejected
    /// — the set of districts is closed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownDistrict`] carrying the rejected
    /// input.
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        let trimmed = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|d| d.official_name() == trimmed || d.slug() == trimmed)
            .ok_or_else(|| ValidationError::UnknownDistrict(name.to_string()))
    }
}

impl std::fmt::Display for UseDistrict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.official_name())
    }
}

impl std::str::FromStr for UseDistrict {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
