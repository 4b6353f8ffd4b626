//! Wire-format report structures.
//!
//! Field names follow the upstream API's camelCase JSON. Verdicts and
//! style categories are closed enums rather than free strings so invalid
//! payloads fail at the boundary instead of leaking into layout.

use serde::{Deserialize, Serialize};

use strand_doc::BadgeColor;

use crate::ReportError;

/// Viability verdict for a requested cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Altamente Recomendado")]
    HighlyRecommended,
    #[serde(rename = "Recomendado com Adaptações")]
    RecommendedWithAdaptations,
    #[serde(rename = "Não Recomendado")]
    NotRecommended,
}

impl Verdict {
    /// Label printed on the verdict badge.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::HighlyRecommended => "Altamente Recomendado",
            Verdict::RecommendedWithAdaptations => "Recomendado com Adaptações",
            Verdict::NotRecommended => "Não Recomendado",
        }
    }

    pub fn badge_color(self) -> BadgeColor {
        match self {
            Verdict::HighlyRecommended => BadgeColor::Emerald,
            Verdict::RecommendedWithAdaptations => BadgeColor::Amber,
            Verdict::NotRecommended => BadgeColor::Red,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViabilityAnalysis {
    pub verdict: Verdict,
    pub justification: String,
    #[serde(default)]
    pub adaptation_recommendations: Option<String>,
}

/// One technique diagram: a title plus raw SVG markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramSpec {
    pub title: String,
    pub svg: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreeDViews {
    pub front_prompt: String,
    pub side_prompt: String,
    pub back_prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuttingPlan {
    pub style_name: String,
    pub description: String,
    pub tools: Vec<String>,
    #[serde(default)]
    pub accessories: Vec<String>,
    #[serde(default)]
    pub preparation_steps: Vec<String>,
    pub steps: Vec<String>,
    #[serde(default)]
    pub finishing_steps: Vec<String>,
    #[serde(default)]
    pub diagrams: Vec<DiagramSpec>,
    /// Prompt the image editor uses to produce the realistic preview.
    #[serde(default)]
    pub detailed_prompt: String,
    #[serde(default)]
    pub three_d_views: Option<ThreeDViews>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyFacialFeatures {
    pub forehead: String,
    pub jawline: String,
    pub nose: String,
    #[serde(default)]
    pub eyes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HairAnalysis {
    pub hair_type: String,
    pub hair_density: String,
    #[serde(default)]
    pub current_condition: Option<String>,
}

/// Visagism analysis of the person in the reference image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceVisagismAnalysis {
    pub face_shape: String,
    pub key_facial_features: KeyFacialFeatures,
    pub hair_analysis: HairAnalysis,
    pub style_harmony: String,
}

/// The full hairstylist-visagist consultation report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HairstylistReport {
    pub viability_analysis: ViabilityAnalysis,
    pub cutting_plan: CuttingPlan,
    pub reference_visagism: ReferenceVisagismAnalysis,
}

impl HairstylistReport {
    /// Deserializes and validates one upstream payload.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_value(value)?;
        report.validate()?;
        Ok(report)
    }

    fn validate(&self) -> Result<(), ReportError> {
        if self.cutting_plan.style_name.trim().is_empty() {
            return Err(ReportError::Invalid("cutting plan has no style name".into()));
        }
        if self.cutting_plan.steps.is_empty() {
            return Err(ReportError::Invalid("cutting plan has no steps".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleCategory {
    #[serde(rename = "Corte")]
    Cut,
    #[serde(rename = "Coloração")]
    Coloring,
    #[serde(rename = "Penteado")]
    Hairdo,
}

impl StyleCategory {
    pub fn label(self) -> &'static str {
        match self {
            StyleCategory::Cut => "Corte",
            StyleCategory::Coloring => "Coloração",
            StyleCategory::Hairdo => "Penteado",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecommendation {
    pub style_name: String,
    pub description: String,
    pub category: StyleCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleToAvoid {
    pub style_name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisagismReport {
    pub face_shape: String,
    pub key_facial_features: KeyFacialFeatures,
    pub hair_analysis: HairAnalysis,
    pub style_recommendations: Vec<StyleRecommendation>,
    #[serde(default)]
    pub styles_to_avoid: Vec<StyleToAvoid>,
    #[serde(default)]
    pub makeup_tips: Vec<String>,
    #[serde(default)]
    pub accessories_tips: Vec<String>,
    pub summary: String,
}

impl VisagismReport {
    pub fn from_json(value: serde_json::Value) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_value(value)?;
        report.validate()?;
        Ok(report)
    }

    fn validate(&self) -> Result<(), ReportError> {
        if self.face_shape.trim().is_empty() {
            return Err(ReportError::Invalid("visagism report has no face shape".into()));
        }
        if self.style_recommendations.is_empty() {
            return Err(ReportError::Invalid(
                "visagism report has no style recommendations".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorimetryAnalysis {
    pub skin_tone: String,
    pub contrast: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MechasTechnique {
    pub name: String,
    pub description: String,
}

/// Application steps grouped by phase; empty phases are skipped when
/// building the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSteps {
    #[serde(default)]
    pub preparation: Vec<String>,
    #[serde(default)]
    pub mechas: Vec<String>,
    #[serde(default)]
    pub base_color: Vec<String>,
    #[serde(default)]
    pub toning: Vec<String>,
    #[serde(default)]
    pub treatment: Vec<String>,
}

impl ApplicationSteps {
    /// Phase titles paired with their steps, in application order.
    pub fn phases(&self) -> [(&'static str, &[String]); 5] {
        [
            ("Preparação", self.preparation.as_slice()),
            ("Aplicação das Mechas", self.mechas.as_slice()),
            ("Aplicação da Cor de Base", self.base_color.as_slice()),
            ("Tonalização", self.toning.as_slice()),
            ("Tratamento", self.treatment.as_slice()),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostChemicalCare {
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColoristReport {
    pub visagism_and_colorimetry_analysis: ColorimetryAnalysis,
    pub initial_diagnosis: String,
    pub products: Vec<String>,
    pub mechas_technique: MechasTechnique,
    pub application_steps: ApplicationSteps,
    #[serde(default)]
    pub diagrams: Vec<DiagramSpec>,
    /// Prompt the image editor uses to produce the try-on preview.
    #[serde(default)]
    pub try_on_image_prompt: String,
    #[serde(default)]
    pub post_chemical_care: Option<PostChemicalCare>,
}

impl ColoristReport {
    pub fn from_json(value: serde_json::Value) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_value(value)?;
        report.validate()?;
        Ok(report)
    }

    fn validate(&self) -> Result<(), ReportError> {
        if self.mechas_technique.name.trim().is_empty() {
            return Err(ReportError::Invalid("colorist report has no technique name".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn verdict_round_trips_portuguese_labels() {
        let v: Verdict = serde_json::from_str("\"Altamente Recomendado\"").unwrap();
        assert_eq!(v, Verdict::HighlyRecommended);
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"Altamente Recomendado\"");
        assert_eq!(v.label(), "Altamente Recomendado");
    }

    #[test]
    fn unknown_verdict_is_rejected_at_the_boundary() {
        assert!(serde_json::from_str::<Verdict>("\"Talvez\"").is_err());
    }

    #[test]
    fn verdict_badge_palette() {
        use strand_doc::BadgeColor;
        assert_eq!(Verdict::HighlyRecommended.badge_color(), BadgeColor::Emerald);
        assert_eq!(
            Verdict::RecommendedWithAdaptations.badge_color(),
            BadgeColor::Amber
        );
        assert_eq!(Verdict::NotRecommended.badge_color(), BadgeColor::Red);
    }

    #[test]
    fn hairstylist_report_requires_steps() {
        let payload = json!({
            "viabilityAnalysis": {
                "verdict": "Altamente Recomendado",
                "justification": "Harmoniza com o formato do rosto."
            },
            "cuttingPlan": {
                "styleName": "Long Bob",
                "description": "Corte médio com camadas.",
                "tools": ["tesoura"],
                "steps": []
            },
            "referenceVisagism": {
                "faceShape": "Oval",
                "keyFacialFeatures": {
                    "forehead": "proporcional",
                    "jawline": "suave",
                    "nose": "fino"
                },
                "hairAnalysis": {"hairType": "liso", "hairDensity": "média"},
                "styleHarmony": "equilíbrio entre linhas"
            }
        });
        let err = HairstylistReport::from_json(payload).unwrap_err();
        assert!(matches!(err, ReportError::Invalid(_)));
    }

    #[test]
    fn hairstylist_report_parses_a_complete_payload() {
        let payload = json!({
            "viabilityAnalysis": {
                "verdict": "Recomendado com Adaptações",
                "justification": "O fio fino pede camadas leves.",
                "adaptationRecommendations": "Reduzir o volume nas pontas."
            },
            "cuttingPlan": {
                "styleName": "Pixie",
                "description": "Curto e texturizado.",
                "tools": ["tesoura", "navalha"],
                "accessories": ["pente de corte"],
                "preparationSteps": ["Lavar os fios"],
                "steps": ["Seccionar", "Cortar a nuca"],
                "finishingSteps": ["Finalizar com pomada"],
                "diagrams": [{"title": "Seções", "svg": "<svg/>"}],
                "detailedPrompt": "pixie cut, textured"
            },
            "referenceVisagism": {
                "faceShape": "Coração",
                "keyFacialFeatures": {
                    "forehead": "ampla",
                    "jawline": "delicada",
                    "nose": "médio"
                },
                "hairAnalysis": {"hairType": "ondulado", "hairDensity": "alta"},
                "styleHarmony": "valoriza os olhos"
            }
        });
        let report = HairstylistReport::from_json(payload).unwrap();
        assert_eq!(report.cutting_plan.diagrams.len(), 1);
        assert_eq!(
            report.viability_analysis.verdict,
            Verdict::RecommendedWithAdaptations
        );
    }

    #[test]
    fn application_steps_expose_phases_in_order() {
        let steps = ApplicationSteps {
            preparation: vec!["p".into()],
            mechas: vec![],
            base_color: vec!["b".into()],
            toning: vec![],
            treatment: vec![],
        };
        let titles: Vec<_> = steps.phases().iter().map(|(t, _)| *t).collect();
        assert_eq!(
            titles,
            [
                "Preparação",
                "Aplicação das Mechas",
                "Aplicação da Cor de Base",
                "Tonalização",
                "Tratamento"
            ]
        );
    }
}
