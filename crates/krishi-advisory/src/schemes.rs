//! Government scheme catalog.
//!
//! Central and state agricultural support programs with eligibility and
//! application details, plus the filter operation the scheme browser uses.

use std::sync::LazyLock;

use serde::Serialize;

// =============================================================================
// Types
// =============================================================================

/// Kind of support a scheme provides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeCategory {
    Subsidy,
    Insurance,
    Loan,
    Equipment,
    Training,
}

/// Enrollment state of a scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeStatus {
    Active,
    Upcoming,
    Closed,
}

/// One government support program.
#[derive(Clone, Debug, Serialize)]
pub struct Scheme {
    pub id: &'static str,
    pub title: &'static str,
    pub category: SchemeCategory,
    pub authority: &'static str,
    pub description: &'static str,
    pub amount: &'static str,
    pub eligibility: &'static str,
    pub deadline: &'static str,
    pub status: SchemeStatus,
    pub beneficiaries: &'static str,
    pub documents: &'static [&'static str],
    pub application_process: &'static str,
    /// Surfaced prominently in listings.
    pub featured: bool,
}

/// A headline statistic for the scheme overview.
#[derive(Clone, Debug, Serialize)]
pub struct SchemeStat {
    pub label: &'static str,
    pub value: &'static str,
}

// =============================================================================
// Catalog
// =============================================================================

static SCHEMES: LazyLock<Vec<Scheme>> = LazyLock::new(|| {
    vec![
        Scheme {
            id: "pm-kisan",
            title: "PM-KISAN Samman Nidhi",
            category: SchemeCategory::Subsidy,
            authority: "Ministry of Agriculture & Farmers Welfare",
            description:
                "Direct income support of \u{20b9}6,000 per year to small and marginal farmers",
            amount: "\u{20b9}6,000/year",
            eligibility: "Small and marginal farmers with up to 2 hectares land",
            deadline: "Ongoing",
            status: SchemeStatus::Active,
            beneficiaries: "11+ Crore",
            documents: &["Aadhaar Card", "Bank Details", "Land Records"],
            application_process: "Online through PM-KISAN portal or CSC centers",
            featured: true,
        },
        Scheme {
            id: "pmfby",
            title: "Pradhan Mantri Fasal Bima Yojana",
            category: SchemeCategory::Insurance,
            authority: "Ministry of Agriculture & Farmers Welfare",
            description: "Comprehensive crop insurance scheme providing financial support to farmers in case of crop loss",
            amount: "Up to \u{20b9}2 Lakhs",
            eligibility: "All farmers including tenant farmers and sharecroppers",
            deadline: "Before crop sowing season",
            status: SchemeStatus::Active,
            beneficiaries: "5.5+ Crore",
            documents: &[
                "Land Records",
                "Bank Details",
                "Aadhaar Card",
                "Sowing Certificate",
            ],
            application_process: "Through banks, insurance companies, or online portal",
            featured: true,
        },
        Scheme {
            id: "kcc",
            title: "Kisan Credit Card",
            category: SchemeCategory::Loan,
            authority: "All Scheduled Banks",
            description:
                "Flexible credit facility for farmers to meet agricultural and consumption needs",
            amount: "Based on crop pattern and scale of finance",
            eligibility: "All farmers including tenant farmers",
            deadline: "Ongoing",
            status: SchemeStatus::Active,
            beneficiaries: "7+ Crore",
            documents: &["Land Documents", "Identity Proof", "Address Proof"],
            application_process: "Apply at nearest bank branch",
            featured: false,
        },
        Scheme {
            id: "sub-mission-seeds",
            title: "Sub-Mission on Seeds and Planting Material",
            category: SchemeCategory::Subsidy,
            authority: "Department of Agriculture",
            description: "Support for production and distribution of quality seeds",
            amount: "Up to 50% subsidy",
            eligibility: "Seed producers and farmers",
            deadline: "March 2025",
            status: SchemeStatus::Active,
            beneficiaries: "50+ Lakhs",
            documents: &["Registration Certificate", "Land Records"],
            application_process: "Through State Agriculture Departments",
            featured: false,
        },
        Scheme {
            id: "farm-mechanization",
            title: "Sub-Mission on Agricultural Mechanization",
            category: SchemeCategory::Equipment,
            authority: "Ministry of Agriculture",
            description:
                "Financial assistance for purchase of agricultural machinery and equipment",
            amount: "25-80% subsidy",
            eligibility: "Individual farmers, FPOs, Custom Hiring Centers",
            deadline: "Ongoing",
            status: SchemeStatus::Active,
            beneficiaries: "15+ Lakhs",
            documents: &["Land Records", "Bank Details", "Quotations"],
            application_process: "Through Direct Benefit Transfer portal",
            featured: true,
        },
        Scheme {
            id: "soil-health-card",
            title: "Soil Health Card Scheme",
            category: SchemeCategory::Training,
            authority: "Department of Agriculture",
            description: "Soil testing and health cards to promote balanced fertilizer use",
            amount: "Free soil testing",
            eligibility: "All farmers",
            deadline: "Ongoing",
            status: SchemeStatus::Active,
            beneficiaries: "22+ Crore",
            documents: &["Land Records", "Farmer ID"],
            application_process: "Through local agriculture office",
            featured: false,
        },
        Scheme {
            id: "organic-farming",
            title: "Paramparagat Krishi Vikas Yojana",
            category: SchemeCategory::Subsidy,
            authority: "Ministry of Agriculture",
            description: "Promotion of organic farming through cluster approach",
            amount: "\u{20b9}50,000 per hectare over 3 years",
            eligibility: "Farmer groups (minimum 50 farmers)",
            deadline: "December 2024",
            status: SchemeStatus::Active,
            beneficiaries: "8+ Lakhs",
            documents: &["Group Formation Certificate", "Land Records"],
            application_process: "Through farmer groups and NGOs",
            featured: false,
        },
        Scheme {
            id: "micro-irrigation",
            title: "Micro Irrigation Fund",
            category: SchemeCategory::Subsidy,
            authority: "NABARD",
            description:
                "Support for micro-irrigation systems like drip and sprinkler irrigation",
            amount: "Up to 90% subsidy",
            eligibility: "Individual farmers and farmer groups",
            deadline: "March 2025",
            status: SchemeStatus::Active,
            beneficiaries: "12+ Lakhs",
            documents: &["Land Documents", "Water Source Certificate"],
            application_process: "Through NABARD and implementing agencies",
            featured: false,
        },
    ]
});

static STATS: LazyLock<Vec<SchemeStat>> = LazyLock::new(|| {
    vec![
        SchemeStat {
            label: "Active Schemes",
            value: "150+",
        },
        SchemeStat {
            label: "Total Beneficiaries",
            value: "25 Cr+",
        },
        SchemeStat {
            label: "Annual Budget",
            value: "\u{20b9}1.2 L Cr",
        },
        SchemeStat {
            label: "States Covered",
            value: "All 28",
        },
    ]
});

// =============================================================================
// Operations
// =============================================================================

/// All schemes, in catalog order.
pub fn schemes() -> &'static [Scheme] {
    &SCHEMES
}

/// Headline statistics for the overview panel.
pub fn stats() -> &'static [SchemeStat] {
    &STATS
}

/// Look up a scheme by its stable id.
pub fn scheme_by_id(id: &str) -> Option<&'static Scheme> {
    SCHEMES.iter().find(|s| s.id == id)
}

/// Filter schemes by optional category and a case-insensitive search term.
///
/// The term matches against title or description; an empty term matches
/// everything.
pub fn filter_schemes(category: Option<SchemeCategory>, search: &str) -> Vec<&'static Scheme> {
    let term = search.to_lowercase();
    SCHEMES
        .iter()
        .filter(|s| category.map_or(true, |c| s.category == c))
        .filter(|s| {
            s.title.to_lowercase().contains(&term) || s.description.to_lowercase().contains(&term)
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eight_schemes() {
        assert_eq!(schemes().len(), 8);
    }

    #[test]
    fn test_scheme_ids_are_unique() {
        let mut ids: Vec<_> = schemes().iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_pm_kisan_pinned() {
        let s = scheme_by_id("pm-kisan").unwrap();
        assert_eq!(s.title, "PM-KISAN Samman Nidhi");
        assert_eq!(s.category, SchemeCategory::Subsidy);
        assert_eq!(s.amount, "\u{20b9}6,000/year");
        assert!(s.featured);
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert!(scheme_by_id("no-such-scheme").is_none());
    }

    #[test]
    fn test_three_featured_schemes() {
        assert_eq!(schemes().iter().filter(|s| s.featured).count(), 3);
    }

    #[test]
    fn test_filter_by_category() {
        let subsidies = filter_schemes(Some(SchemeCategory::Subsidy), "");
        assert_eq!(subsidies.len(), 4);
    }

    #[test]
    fn test_filter_by_title_search() {
        let hits = filter_schemes(None, "kisan");
        // "PM-KISAN Samman Nidhi" and "Kisan Credit Card".
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_filter_by_description_search() {
        let hits = filter_schemes(None, "organic farming");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "organic-farming");
    }

    #[test]
    fn test_filter_category_and_search() {
        let hits = filter_schemes(Some(SchemeCategory::Insurance), "crop");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "pmfby");
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter_schemes(None, "xyzzy").is_empty());
    }

    #[test]
    fn test_four_stats() {
        assert_eq!(stats().len(), 4);
    }

    #[test]
    fn test_all_schemes_active() {
        assert!(schemes().iter().all(|s| s.status == SchemeStatus::Active));
    }
}
