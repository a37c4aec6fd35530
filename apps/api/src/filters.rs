//! Filter Collector — the closed option sets behind the career-map controls.
//!
//! Every field is constrained to its catalog by construction: the wire form
//! of each enum is its display string, so an out-of-catalog value fails at
//! deserialization and never reaches the prompt builder.

use serde::{Deserialize, Serialize};

/// Degree track of the Master's program. Selects the persona block used to
/// steer the completion service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegreeTrack {
    #[default]
    #[serde(rename = "AI Management & Policy")]
    ManagementPolicy,
    #[serde(rename = "AI and Machine Learning")]
    MachineLearning,
}

impl DegreeTrack {
    pub const ALL: [DegreeTrack; 2] = [DegreeTrack::ManagementPolicy, DegreeTrack::MachineLearning];

    pub fn as_str(&self) -> &'static str {
        match self {
            DegreeTrack::ManagementPolicy => "AI Management & Policy",
            DegreeTrack::MachineLearning => "AI and Machine Learning",
        }
    }
}

/// Target industry. `Any` is a wildcard meaning no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Industry {
    #[default]
    Any,
    #[serde(rename = "Government / Public Sector")]
    GovernmentPublicSector,
    #[serde(rename = "Big Tech (FAANG)")]
    BigTech,
    #[serde(rename = "Consulting (Big 4)")]
    Consulting,
    #[serde(rename = "Nonprofit / NGO")]
    Nonprofit,
    #[serde(rename = "Defense & Aerospace")]
    DefenseAerospace,
    #[serde(rename = "Financial Services")]
    FinancialServices,
    Healthcare,
    #[serde(rename = "Consumer Tech")]
    ConsumerTech,
}

impl Industry {
    pub const ALL: [Industry; 9] = [
        Industry::Any,
        Industry::GovernmentPublicSector,
        Industry::BigTech,
        Industry::Consulting,
        Industry::Nonprofit,
        Industry::DefenseAerospace,
        Industry::FinancialServices,
        Industry::Healthcare,
        Industry::ConsumerTech,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Any => "Any",
            Industry::GovernmentPublicSector => "Government / Public Sector",
            Industry::BigTech => "Big Tech (FAANG)",
            Industry::Consulting => "Consulting (Big 4)",
            Industry::Nonprofit => "Nonprofit / NGO",
            Industry::DefenseAerospace => "Defense & Aerospace",
            Industry::FinancialServices => "Financial Services",
            Industry::Healthcare => "Healthcare",
            Industry::ConsumerTech => "Consumer Tech",
        }
    }
}

/// Preferred role function. `Any` is a wildcard meaning no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleFunction {
    #[default]
    Any,
    #[serde(rename = "Product & Strategy")]
    ProductStrategy,
    #[serde(rename = "Risk & Compliance")]
    RiskCompliance,
    #[serde(rename = "Policy & Research")]
    PolicyResearch,
    #[serde(rename = "Technical Program Mgmt")]
    TechnicalProgramMgmt,
    #[serde(rename = "Trust & Safety")]
    TrustSafety,
    #[serde(rename = "Engineering & Dev")]
    EngineeringDev,
    #[serde(rename = "Data Science")]
    DataScience,
}

impl RoleFunction {
    pub const ALL: [RoleFunction; 8] = [
        RoleFunction::Any,
        RoleFunction::ProductStrategy,
        RoleFunction::RiskCompliance,
        RoleFunction::PolicyResearch,
        RoleFunction::TechnicalProgramMgmt,
        RoleFunction::TrustSafety,
        RoleFunction::EngineeringDev,
        RoleFunction::DataScience,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleFunction::Any => "Any",
            RoleFunction::ProductStrategy => "Product & Strategy",
            RoleFunction::RiskCompliance => "Risk & Compliance",
            RoleFunction::PolicyResearch => "Policy & Research",
            RoleFunction::TechnicalProgramMgmt => "Technical Program Mgmt",
            RoleFunction::TrustSafety => "Trust & Safety",
            RoleFunction::EngineeringDev => "Engineering & Dev",
            RoleFunction::DataScience => "Data Science",
        }
    }
}

/// One snapshot of the user's control selections. Created per generate
/// action, never mutated, passed by value into the transformer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRecord {
    pub track: DegreeTrack,
    pub industry: Industry,
    pub role_function: RoleFunction,
}

/// The full option catalog, exposed so a front-end can build its selectors.
#[derive(Debug, Serialize)]
pub struct FilterCatalog {
    pub tracks: Vec<&'static str>,
    pub industries: Vec<&'static str>,
    pub role_functions: Vec<&'static str>,
}

impl FilterCatalog {
    pub fn current() -> Self {
        FilterCatalog {
            tracks: DegreeTrack::ALL.iter().map(DegreeTrack::as_str).collect(),
            industries: Industry::ALL.iter().map(Industry::as_str).collect(),
            role_functions: RoleFunction::ALL.iter().map(RoleFunction::as_str).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_wire_form_is_display_string() {
        let track: DegreeTrack = serde_json::from_str(r#""AI Management & Policy""#).unwrap();
        assert_eq!(track, DegreeTrack::ManagementPolicy);
        assert_eq!(
            serde_json::to_string(&DegreeTrack::MachineLearning).unwrap(),
            r#""AI and Machine Learning""#
        );
    }

    #[test]
    fn test_industry_round_trips_through_display_string() {
        for industry in Industry::ALL {
            let json = serde_json::to_string(&industry).unwrap();
            assert_eq!(json, format!("\"{}\"", industry.as_str()));
            let back: Industry = serde_json::from_str(&json).unwrap();
            assert_eq!(back, industry);
        }
    }

    #[test]
    fn test_out_of_catalog_industry_is_rejected() {
        let result = serde_json::from_str::<Industry>(r#""Cryptocurrency""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_filter_record_deserializes_from_display_strings() {
        let json = r#"{
            "track": "AI and Machine Learning",
            "industry": "Big Tech (FAANG)",
            "role_function": "Data Science"
        }"#;
        let filters: FilterRecord = serde_json::from_str(json).unwrap();
        assert_eq!(filters.track, DegreeTrack::MachineLearning);
        assert_eq!(filters.industry, Industry::BigTech);
        assert_eq!(filters.role_function, RoleFunction::DataScience);
    }

    #[test]
    fn test_defaults_are_first_track_and_wildcards() {
        let filters = FilterRecord::default();
        assert_eq!(filters.track, DegreeTrack::ManagementPolicy);
        assert_eq!(filters.industry, Industry::Any);
        assert_eq!(filters.role_function, RoleFunction::Any);
    }

    #[test]
    fn test_catalog_covers_every_variant() {
        let catalog = FilterCatalog::current();
        assert_eq!(catalog.tracks.len(), 2);
        assert_eq!(catalog.industries.len(), 9);
        assert_eq!(catalog.role_functions.len(), 8);
        assert!(catalog.industries.contains(&"Nonprofit / NGO"));
    }
}
