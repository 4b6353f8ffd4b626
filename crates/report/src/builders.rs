//! Report builders: pure transforms from a domain report plus its
//! imagery into the document model, preserving the section order of the
//! original exports.

use strand_doc::{
    Columns, ContentBlock, Document, RuleStyle, SharedData, TextStyle, bullet_list, heading,
    numbered_list, paragraph, section_break, styled_paragraph,
};

use crate::model::{ColoristReport, DiagramSpec, HairstylistReport, VisagismReport};

/// Imagery accompanying a hairstylist report. Any slot may be missing;
/// the image row keeps column positions either way.
#[derive(Debug, Clone, Default)]
pub struct HairstylistImages {
    pub client: Option<SharedData>,
    pub reference: Option<SharedData>,
    pub realistic: Option<SharedData>,
}

#[derive(Debug, Clone, Default)]
pub struct ColoristImages {
    pub client: Option<SharedData>,
    pub try_on: Option<SharedData>,
}

#[derive(Debug, Clone, Default)]
pub struct VisagismImages {
    pub client: Option<SharedData>,
}

fn accent_rule() -> ContentBlock {
    ContentBlock::SectionBreak {
        style: RuleStyle::Accent,
    }
}

fn diagrams_section(doc: &mut Document, diagrams: &[DiagramSpec]) {
    if diagrams.is_empty() {
        return;
    }
    doc.push(section_break());
    doc.push(heading("Diagramas da Técnica", 2));
    for diagram in diagrams {
        doc.push(ContentBlock::Diagram {
            title: diagram.title.clone(),
            markup: diagram.svg.clone(),
        });
    }
}

/// Builds the hairstylist ("plano de corte") document.
pub fn build_hairstylist_document(
    report: &HairstylistReport,
    images: &HairstylistImages,
) -> Document {
    let plan = &report.cutting_plan;
    let mut doc = vec![
        accent_rule(),
        heading(format!("Plano de Corte: {}", plan.style_name), 1),
        styled_paragraph(plan.description.clone(), TextStyle::Italic),
        section_break(),
        heading("Visualização", 2),
        ContentBlock::ImageRow {
            images: vec![
                images.client.clone(),
                images.reference.clone(),
                images.realistic.clone(),
            ],
            labels: vec![
                "Cliente".into(),
                "Referência".into(),
                "Resultado (IA)".into(),
            ],
            columns: Columns::Three,
        },
        section_break(),
        heading("Análise de Viabilidade", 2),
        ContentBlock::Badge {
            text: report.viability_analysis.verdict.label().into(),
            color_key: report.viability_analysis.verdict.badge_color(),
        },
        heading("Justificativa", 3),
        paragraph(report.viability_analysis.justification.clone()),
    ];

    if let Some(adaptations) = &report.viability_analysis.adaptation_recommendations {
        doc.push(heading("Adaptações Recomendadas", 3));
        doc.push(paragraph(adaptations.clone()));
    }

    doc.push(section_break());
    doc.push(heading("Plano de Execução Técnico", 2));
    doc.push(heading("Ferramentas e Acessórios", 3));
    let mut items = plan.tools.clone();
    items.extend(plan.accessories.iter().cloned());
    doc.push(bullet_list(items));

    for (title, steps) in [
        ("Preparação", &plan.preparation_steps),
        ("Passo a Passo do Corte", &plan.steps),
        ("Finalização", &plan.finishing_steps),
    ] {
        if steps.is_empty() {
            continue;
        }
        doc.push(heading(title, 3));
        doc.push(numbered_list(steps.clone()));
    }

    diagrams_section(&mut doc, &plan.diagrams);
    doc
}

/// Builds the colorist ("colorimetria expert") document.
pub fn build_colorist_document(report: &ColoristReport, images: &ColoristImages) -> Document {
    let analysis = &report.visagism_and_colorimetry_analysis;
    let mut doc = vec![
        accent_rule(),
        heading("Relatório de Colorimetria Expert", 1),
        heading("Antes e Depois", 3),
        ContentBlock::ImageRow {
            images: vec![images.client.clone(), images.try_on.clone()],
            labels: vec![],
            columns: Columns::Two,
        },
        section_break(),
        heading("Análise de Visagismo e Colorimetria", 2),
        paragraph(format!("Subtom de Pele: {}", analysis.skin_tone)),
        paragraph(format!("Contraste Pessoal: {}", analysis.contrast)),
        styled_paragraph(analysis.recommendation.clone(), TextStyle::Italic),
        section_break(),
        heading("Diagnóstico e Produtos", 2),
        heading("Diagnóstico Inicial", 3),
        paragraph(report.initial_diagnosis.clone()),
        heading("Produtos Necessários", 3),
        bullet_list(report.products.clone()),
        section_break(),
        heading(format!("Técnica de Mechas: {}", report.mechas_technique.name), 2),
        paragraph(report.mechas_technique.description.clone()),
    ];

    for (title, steps) in report.application_steps.phases() {
        if steps.is_empty() {
            continue;
        }
        doc.push(heading(title, 3));
        doc.push(bullet_list(steps.to_vec()));
    }

    if let Some(care) = &report.post_chemical_care {
        doc.push(section_break());
        doc.push(heading("Cuidados Pós-Química", 2));
        if !care.recommendation.is_empty() {
            doc.push(paragraph(care.recommendation.clone()));
        }
        if !care.products.is_empty() {
            doc.push(heading("Produtos", 3));
            doc.push(bullet_list(care.products.clone()));
        }
        if !care.steps.is_empty() {
            doc.push(numbered_list(care.steps.clone()));
        }
    }

    diagrams_section(&mut doc, &report.diagrams);
    doc
}

/// Builds the visagism consultation document.
pub fn build_visagism_document(report: &VisagismReport, images: &VisagismImages) -> Document {
    let features = &report.key_facial_features;
    let hair = &report.hair_analysis;

    let mut facial = vec![
        format!("Forma do Rosto: {}", report.face_shape),
        format!("Testa: {}", features.forehead),
        format!("Maxilar: {}", features.jawline),
        format!("Nariz: {}", features.nose),
    ];
    if let Some(eyes) = &features.eyes {
        facial.push(format!("Olhos: {eyes}"));
    }

    let mut capillary = vec![
        format!("Tipo de Fio: {}", hair.hair_type),
        format!("Densidade: {}", hair.hair_density),
    ];
    if let Some(condition) = &hair.current_condition {
        capillary.push(format!("Condição Atual: {condition}"));
    }

    let mut doc = vec![
        accent_rule(),
        heading("Relatório de Visagismo", 1),
        paragraph(format!("Análise para Rosto {}", report.face_shape)),
        ContentBlock::ImageRow {
            images: vec![images.client.clone(), None],
            labels: vec!["Cliente".into(), String::new()],
            columns: Columns::Two,
        },
        heading("Análise Facial", 3),
        bullet_list(facial),
        heading("Análise Capilar", 3),
        bullet_list(capillary),
        section_break(),
        heading("Estilos que Valorizam", 2),
    ];

    for rec in &report.style_recommendations {
        doc.push(heading(
            format!("{} ({})", rec.style_name, rec.category.label()),
            3,
        ));
        doc.push(paragraph(rec.description.clone()));
    }

    if !report.styles_to_avoid.is_empty() {
        doc.push(section_break());
        doc.push(heading("Estilos a Evitar", 2));
        for rec in &report.styles_to_avoid {
            doc.push(heading(rec.style_name.clone(), 3));
            doc.push(paragraph(rec.description.clone()));
        }
    }

    if !report.makeup_tips.is_empty() || !report.accessories_tips.is_empty() {
        doc.push(section_break());
        doc.push(heading("Dicas Adicionais", 2));
        if !report.makeup_tips.is_empty() {
            doc.push(heading("Maquiagem", 3));
            doc.push(bullet_list(report.makeup_tips.clone()));
        }
        if !report.accessories_tips.is_empty() {
            doc.push(heading("Acessórios", 3));
            doc.push(bullet_list(report.accessories_tips.clone()));
        }
    }

    doc.push(section_break());
    doc.push(heading("Resumo da Consultoria", 2));
    doc.push(styled_paragraph(report.summary.clone(), TextStyle::Italic));
    doc
}
