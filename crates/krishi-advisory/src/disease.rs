//! Plant disease reference and the mock image analysis.
//!
//! The analysis is a stand-in for a real detection model: any readable
//! attachment yields the same fixed verdict. An unreadable handle yields
//! `None`, which callers treat like "no attachment".

use std::sync::LazyLock;

use serde::Serialize;
use tracing::debug;

use krishi_core::types::AttachmentRef;

// =============================================================================
// Types
// =============================================================================

/// How damaging a disease typically is when untreated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Reference entry for a common crop disease.
#[derive(Clone, Debug, Serialize)]
pub struct DiseaseProfile {
    pub name: &'static str,
    pub crop: &'static str,
    pub severity: Severity,
    pub symptoms: &'static str,
    pub treatment: &'static str,
    pub prevention: &'static str,
}

/// Guidance for taking a usable scan photo.
#[derive(Clone, Debug, Serialize)]
pub struct ScanningTip {
    pub title: &'static str,
    pub description: &'static str,
}

/// Verdict of an image analysis.
#[derive(Clone, Debug, Serialize)]
pub struct DiseaseAnalysis {
    pub disease: &'static str,
    /// Detection confidence, 0-100.
    pub confidence: u8,
    pub treatment: &'static str,
    pub severity: Severity,
    pub crops_affected: &'static [&'static str],
    pub prevention: &'static [&'static str],
}

// =============================================================================
// Catalog
// =============================================================================

static DISEASES: LazyLock<Vec<DiseaseProfile>> = LazyLock::new(|| {
    vec![
        DiseaseProfile {
            name: "Early Blight",
            crop: "Tomato",
            severity: Severity::Medium,
            symptoms: "Brown spots with concentric rings on leaves",
            treatment: "Apply copper-based fungicide, remove affected leaves",
            prevention: "Ensure good air circulation, avoid overhead watering",
        },
        DiseaseProfile {
            name: "Powdery Mildew",
            crop: "Cucumber",
            severity: Severity::Low,
            symptoms: "White powdery coating on leaves and stems",
            treatment: "Spray with neem oil or sulfur-based fungicide",
            prevention: "Maintain proper spacing, avoid high humidity",
        },
        DiseaseProfile {
            name: "Bacterial Leaf Spot",
            crop: "Pepper",
            severity: Severity::High,
            symptoms: "Small, dark water-soaked spots on leaves",
            treatment: "Use copper bactericide, remove infected plants",
            prevention: "Use certified seeds, practice crop rotation",
        },
        DiseaseProfile {
            name: "Downy Mildew",
            crop: "Grape",
            severity: Severity::High,
            symptoms: "Yellow patches on upper leaf surface, white growth underneath",
            treatment: "Apply systemic fungicide, improve ventilation",
            prevention: "Choose resistant varieties, avoid leaf wetness",
        },
    ]
});

static SCANNING_TIPS: LazyLock<Vec<ScanningTip>> = LazyLock::new(|| {
    vec![
        ScanningTip {
            title: "Good Lighting",
            description: "Take photos in natural daylight for best results",
        },
        ScanningTip {
            title: "Clear Focus",
            description: "Ensure affected areas are clearly visible and in focus",
        },
        ScanningTip {
            title: "Multiple Angles",
            description: "Upload 2-3 photos from different angles if possible",
        },
        ScanningTip {
            title: "Early Detection",
            description: "Scan plants regularly for early disease detection",
        },
    ]
});

/// The fixed verdict the mock analysis returns for every readable image.
static MOCK_ANALYSIS: DiseaseAnalysis = DiseaseAnalysis {
    disease: "Early Blight (Alternaria solani)",
    confidence: 87,
    treatment: "Remove affected leaves immediately and apply copper-based fungicide. \
        Improve air circulation around plants and water at the base to avoid wetting \
        leaves. Consider using resistant varieties for future planting.",
    severity: Severity::Medium,
    crops_affected: &["Tomato", "Potato", "Eggplant"],
    prevention: &[
        "Crop rotation with non-solanaceous plants",
        "Proper plant spacing for air circulation",
        "Avoid overhead watering",
        "Remove plant debris after harvest",
        "Use certified disease-free seeds",
    ],
};

// =============================================================================
// Operations
// =============================================================================

/// Reference entries for common crop diseases.
pub fn common_diseases() -> &'static [DiseaseProfile] {
    &DISEASES
}

/// Guidance for taking usable scan photos.
pub fn scanning_tips() -> &'static [ScanningTip] {
    &SCANNING_TIPS
}

/// Analyze an uploaded plant image.
///
/// The image bytes are never inspected; every readable attachment yields the
/// same fixed verdict. Returns `None` for an unreadable handle.
pub fn analyze_image(attachment: &AttachmentRef) -> Option<&'static DiseaseAnalysis> {
    if !attachment.is_readable() {
        debug!("Unreadable attachment handle, skipping analysis");
        return None;
    }
    debug!(reference = %attachment.reference, "Analyzing plant image");
    Some(&MOCK_ANALYSIS)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_disease_profiles() {
        assert_eq!(common_diseases().len(), 4);
    }

    #[test]
    fn test_early_blight_profile_pinned() {
        let blight = common_diseases()
            .iter()
            .find(|d| d.name == "Early Blight")
            .unwrap();
        assert_eq!(blight.crop, "Tomato");
        assert_eq!(blight.severity, Severity::Medium);
        assert_eq!(
            blight.symptoms,
            "Brown spots with concentric rings on leaves"
        );
    }

    #[test]
    fn test_four_scanning_tips() {
        assert_eq!(scanning_tips().len(), 4);
    }

    #[test]
    fn test_analysis_is_fixed_verdict() {
        let verdict = analyze_image(&AttachmentRef::new("file://leaf.jpg")).unwrap();
        assert_eq!(verdict.disease, "Early Blight (Alternaria solani)");
        assert_eq!(verdict.confidence, 87);
        assert_eq!(verdict.severity, Severity::Medium);
        assert_eq!(verdict.crops_affected, &["Tomato", "Potato", "Eggplant"]);
        assert_eq!(verdict.prevention.len(), 5);
    }

    #[test]
    fn test_analysis_ignores_reference_content() {
        let a = analyze_image(&AttachmentRef::new("anything-at-all")).unwrap();
        let b = analyze_image(&AttachmentRef::new("something-else")).unwrap();
        assert_eq!(a.disease, b.disease);
        assert_eq!(a.confidence, b.confidence);
    }

    #[test]
    fn test_unreadable_attachment_yields_none() {
        assert!(analyze_image(&AttachmentRef::new("")).is_none());
        assert!(analyze_image(&AttachmentRef::new("   ")).is_none());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }
}
