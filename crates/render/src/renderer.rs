use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};

use strand_doc::ContentBlock;
use strand_layout::style::IMAGE_ROW_HEIGHT;
use strand_layout::{FontMetrics, LaidOutDocument};
use strand_types::PageGeometry;
use strand_types::geometry::mm_to_pt;

use crate::content::PageOps;
use crate::xobject::{self, EmbeddedImage};
use crate::RenderError;

/// Document metadata written to the PDF Info dictionary.
#[derive(Debug, Clone, Default)]
pub struct DocInfo {
    pub title: Option<String>,
    /// PDF date string, e.g. `D:20250807120000Z`.
    pub creation_date: Option<String>,
}

/// Serializes a laid-out document into one multi-page PDF.
///
/// Text re-wraps with the same metrics the flow engine measured with, so
/// drawn lines always match the measured block heights.
pub struct PdfRenderer<'a> {
    metrics: &'a dyn FontMetrics,
    page: PageGeometry,
    image_row_height: f32,
    info: DocInfo,
}

const FONTS: [(&str, &str); 4] = [
    ("F1", "Helvetica"),
    ("F2", "Helvetica-Bold"),
    ("F3", "Helvetica-Oblique"),
    ("F4", "Helvetica-BoldOblique"),
];

impl<'a> PdfRenderer<'a> {
    pub fn new(metrics: &'a dyn FontMetrics, page: PageGeometry) -> Self {
        Self {
            metrics,
            page,
            image_row_height: IMAGE_ROW_HEIGHT,
            info: DocInfo::default(),
        }
    }

    pub fn with_info(mut self, info: DocInfo) -> Self {
        self.info = info;
        self
    }

    pub fn with_image_row_height(mut self, height: f32) -> Self {
        self.image_row_height = height;
        self
    }

    /// Renders every page and returns the finished PDF bytes.
    pub fn render(&self, laid: &LaidOutDocument) -> Result<Vec<u8>, RenderError> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let font_ids: Vec<(&str, ObjectId)> = FONTS
            .iter()
            .map(|(name, base)| {
                let id = doc.add_object(dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => *base,
                    "Encoding" => "WinAnsiEncoding",
                });
                (*name, id)
            })
            .collect();

        // An empty document still serializes as one blank page.
        let page_count = laid.page_count.max(1);
        let mut page_ids = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            let page_id = self.render_page(&mut doc, laid, page_index, pages_id, &font_ids)?;
            page_ids.push(page_id);
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<_>>(),
            "Count" => page_ids.len() as i64,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut info = Dictionary::new();
        info.set(
            "Producer",
            Object::string_literal("strand report engine"),
        );
        if let Some(title) = &self.info.title {
            info.set("Title", Object::string_literal(title.as_str()));
        }
        if let Some(date) = &self.info.creation_date {
            info.set("CreationDate", Object::string_literal(date.as_str()));
        }
        let info_id = doc.add_object(Object::Dictionary(info));
        doc.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut std::io::Cursor::new(&mut bytes))?;
        log::debug!("rendered {} page(s), {} bytes", page_count, bytes.len());
        Ok(bytes)
    }

    fn render_page(
        &self,
        doc: &mut Document,
        laid: &LaidOutDocument,
        page_index: usize,
        pages_id: ObjectId,
        font_ids: &[(&str, ObjectId)],
    ) -> Result<ObjectId, RenderError> {
        let mut ops = PageOps::new(self.metrics, self.page, self.image_row_height);
        let mut xobjects: Vec<(String, ObjectId)> = Vec::new();

        for (block_index, placed) in laid.page(page_index) {
            let mut cell_images: Vec<Option<(String, u32, u32)>> = Vec::new();
            let mut diagram_image: Option<(String, u32, u32)> = None;

            match &placed.block {
                ContentBlock::ImageRow { images, .. } => {
                    for image in images {
                        match image {
                            Some(bytes) => {
                                let embedded = xobject::embed_encoded(doc, bytes)?;
                                cell_images
                                    .push(Some(self.register_xobject(&mut xobjects, embedded)));
                            }
                            None => cell_images.push(None),
                        }
                    }
                }
                ContentBlock::Diagram { .. } => {
                    if let Some(bitmap) = laid.diagram_rasters.get(&block_index) {
                        let embedded = xobject::embed_rgba(doc, bitmap)?;
                        diagram_image = Some(self.register_xobject(&mut xobjects, embedded));
                    }
                }
                _ => {}
            }

            ops.draw_block(placed, &cell_images, diagram_image.as_ref());
        }

        let content = Content {
            operations: ops.ops,
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().map_err(|e| RenderError::Pdf(e.to_string()))?,
        ));

        let mut font_dict = Dictionary::new();
        for (name, id) in font_ids {
            font_dict.set(name.as_bytes(), Object::Reference(*id));
        }
        let mut resources = dictionary! { "Font" => font_dict };
        if !xobjects.is_empty() {
            let mut xobject_dict = Dictionary::new();
            for (name, id) in &xobjects {
                xobject_dict.set(name.as_bytes(), Object::Reference(*id));
            }
            resources.set("XObject", xobject_dict);
        }

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.0.into(),
                0.0.into(),
                mm_to_pt(self.page.width).into(),
                mm_to_pt(self.page.height).into(),
            ],
            "Contents" => content_id,
            "Resources" => resources,
        };
        Ok(doc.add_object(page_dict))
    }

    fn register_xobject(
        &self,
        xobjects: &mut Vec<(String, ObjectId)>,
        embedded: EmbeddedImage,
    ) -> (String, u32, u32) {
        let name = xobject::image_name(xobjects.len());
        xobjects.push((name.clone(), embedded.id));
        (name, embedded.width, embedded.height)
    }
}
