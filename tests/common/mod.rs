use serde_json::{Value, json};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A complete hairstylist payload as the upstream API would return it.
pub fn hairstylist_payload() -> Value {
    json!({
        "viabilityAnalysis": {
            "verdict": "Altamente Recomendado",
            "justification": "O corte acompanha as linhas naturais do rosto oval.",
            "adaptationRecommendations": "Manter o comprimento acima dos ombros."
        },
        "cuttingPlan": {
            "styleName": "Long Bob Texturizado",
            "description": "Corte médio com camadas leves e acabamento desfiado.",
            "tools": ["tesoura fio navalha", "tesoura de desbaste"],
            "accessories": ["presilhas", "borrifador"],
            "preparationSteps": ["Lavar e desembaraçar os fios", "Dividir em quatro seções"],
            "steps": [
                "Definir a linha guia na nuca",
                "Elevar mechas a 45 graus e cortar",
                "Conferir o equilíbrio dos lados"
            ],
            "finishingSteps": ["Secar com difusor", "Aplicar leave-in"],
            "diagrams": [
                {
                    "title": "Divisão das seções",
                    "svg": "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"100\"><rect x=\"10\" y=\"10\" width=\"80\" height=\"80\" fill=\"none\" stroke=\"black\"/></svg>"
                }
            ],
            "detailedPrompt": "long bob, textured layers"
        },
        "referenceVisagism": {
            "faceShape": "Oval",
            "keyFacialFeatures": {
                "forehead": "proporcional",
                "jawline": "suave",
                "nose": "fino"
            },
            "hairAnalysis": {"hairType": "liso", "hairDensity": "média"},
            "styleHarmony": "O movimento das camadas valoriza os traços."
        }
    })
}

pub fn colorist_payload() -> Value {
    json!({
        "visagismAndColorimetryAnalysis": {
            "skinTone": "frio",
            "contrast": "alto",
            "recommendation": "Tons acinzentados preservam o contraste natural."
        },
        "initialDiagnosis": "Base natural castanho médio, sem química anterior.",
        "products": ["pó descolorante", "ox 20 volumes", "tonalizante 8.1"],
        "mechasTechnique": {
            "name": "Babylights",
            "description": "Mechas finas e difusas do início ao fim do fio."
        },
        "applicationSteps": {
            "preparation": ["Dividir o cabelo em seções finas"],
            "mechas": ["Tecer mechas finas", "Aplicar o descolorante"],
            "baseColor": [],
            "toning": ["Tonalizar por 15 minutos"],
            "treatment": ["Aplicar máscara reconstrutora"]
        },
        "diagrams": [],
        "tryOnImagePrompt": "babylights, cool blonde",
        "postChemicalCare": {
            "recommendation": "Hidratação semanal nas primeiras quatro semanas.",
            "products": ["máscara matizadora"],
            "steps": ["Lavar com água fria", "Aplicar a máscara"]
        }
    })
}

pub fn visagism_payload() -> Value {
    json!({
        "faceShape": "Redondo",
        "keyFacialFeatures": {
            "forehead": "curta",
            "jawline": "arredondada",
            "nose": "pequeno",
            "eyes": "grandes"
        },
        "hairAnalysis": {
            "hairType": "cacheado",
            "hairDensity": "alta",
            "currentCondition": "saudável"
        },
        "styleRecommendations": [
            {
                "styleName": "Camadas longas",
                "description": "Alongam visualmente o rosto.",
                "category": "Corte"
            },
            {
                "styleName": "Morena iluminada",
                "description": "Pontos de luz verticais.",
                "category": "Coloração"
            }
        ],
        "stylesToAvoid": [
            {"styleName": "Franja reta", "description": "Encurta o rosto."}
        ],
        "makeupTips": ["Contorno leve nas laterais"],
        "accessoriesTips": ["Brincos alongados"],
        "summary": "Aposte em linhas verticais e volume no topo."
    })
}

/// Encodes a solid-color PNG for use as client/reference imagery.
pub fn sample_png(w: u32, h: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(rgba));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();
    bytes
}

/// Parses PDF bytes and returns the page count.
pub fn pdf_page_count(bytes: &[u8]) -> usize {
    lopdf::Document::load_mem(bytes).unwrap().get_pages().len()
}

/// True when `needle` appears in any of the PDF's content streams.
/// Content streams are written uncompressed, so a plain byte scan works.
pub fn pdf_contains_text(bytes: &[u8], needle: &str) -> bool {
    let encoded: Vec<u8> = needle
        .chars()
        .map(|c| if (c as u32) <= 0xFF { c as u8 } else { b'?' })
        .collect();
    bytes
        .windows(encoded.len())
        .any(|window| window == encoded.as_slice())
}
