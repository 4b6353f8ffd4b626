use strand_doc::{
    ContentBlock, Columns, bullet_list, heading, numbered_list, paragraph, section_break,
};
use strand_types::PageGeometry;

use crate::engine::{DiagramPolicy, FlowEngine, LayoutOptions};
use crate::fonts::ApproxMetrics;
use crate::pagination::FIT_EPSILON;
use crate::test_utils::StubRasterizer;
use crate::{LaidOutDocument, LayoutError};

fn layout(document: &[ContentBlock]) -> LaidOutDocument {
    let metrics = ApproxMetrics::default();
    let rasterizer = StubRasterizer::square();
    FlowEngine::new(&metrics, &rasterizer)
        .layout(&document.to_vec(), &PageGeometry::a4())
        .expect("layout")
}

fn lorem(n: usize) -> String {
    "lorem ipsum dolor sit amet consectetur adipiscing elit sed do "
        .chars()
        .cycle()
        .take(n)
        .collect()
}

#[test]
fn block_order_is_preserved_through_layout() {
    let doc = vec![
        heading("Plano X", 1),
        paragraph(lorem(300)),
        section_break(),
        numbered_list((1..=12).map(|i| format!("passo {i}"))),
        bullet_list(["tesoura", "navalha"]),
        ContentBlock::ImageRow {
            images: vec![None, None],
            labels: vec![],
            columns: Columns::Two,
        },
    ];
    let out = layout(&doc);
    assert_eq!(out.placed.len(), doc.len());

    let mut sorted = out.placed.clone();
    sorted.sort_by(|a, b| {
        a.page_index
            .cmp(&b.page_index)
            .then(a.y.partial_cmp(&b.y).unwrap())
    });
    let sorted_blocks: Vec<_> = sorted.into_iter().map(|p| p.block).collect();
    assert_eq!(sorted_blocks, doc);
}

#[test]
fn no_block_crosses_the_bottom_margin_except_fresh_page_overflow() {
    let mut doc = vec![heading("Relatório", 1)];
    for i in 0..40 {
        doc.push(paragraph(format!("{i} {}", lorem(160))));
    }
    let page = PageGeometry::a4();
    let out = layout(&doc);
    assert!(out.page_count > 1, "expected overflow onto further pages");
    for p in &out.placed {
        let fits = p.y + p.height <= page.content_bottom() + FIT_EPSILON;
        let fresh_page_overflow = (p.y - page.margin_all).abs() < 0.1;
        assert!(fits || fresh_page_overflow, "{:?} clipped mid-page", p.block);
    }
}

#[test]
fn layout_is_deterministic() {
    let doc = vec![
        heading("Plano X", 1),
        paragraph(lorem(500)),
        numbered_list((1..=20).map(|i| format!("passo {i} {}", lorem(40)))),
    ];
    let a = layout(&doc);
    let b = layout(&doc);
    assert_eq!(a.placed, b.placed);
    assert_eq!(a.page_count, b.page_count);
}

#[test]
fn scenario_heading_paragraph_list_image_row_on_a4() {
    let page = PageGeometry::a4();
    let doc = vec![
        heading("Plano X", 1),
        paragraph(lorem(300)),
        numbered_list((1..=12).map(|i| format!("passo {i}"))),
        ContentBlock::ImageRow {
            images: vec![None, None],
            labels: vec![],
            columns: Columns::Two,
        },
    ];
    let out = layout(&doc);

    // Short blocks at body sizes: everything fits comfortably on page 0.
    let combined: f32 = out.placed.iter().take(3).map(|p| p.height).sum();
    assert!(combined <= page.content_height());
    assert!(out.placed.iter().all(|p| p.page_index == 0));
    assert_eq!(out.page_count, 1);

    // Cursor starts at the margin and advances monotonically.
    assert_eq!(out.placed[0].y, page.margin_all);
    for pair in out.placed.windows(2) {
        assert!(pair[1].y >= pair[0].y + pair[0].height);
    }
    assert!(out.placed.iter().all(|p| p.x == page.margin_all));
    assert!(out.placed.iter().all(|p| p.width == page.content_width()));
}

#[test]
fn long_list_moves_whole_to_a_fresh_page() {
    let page = PageGeometry::a4();
    // Fill most of page 0, then a list too tall for the remainder.
    let doc = vec![
        paragraph(lorem(3000)),
        numbered_list((1..=30).map(|i| format!("passo {i}"))),
    ];
    let out = layout(&doc);
    let list = &out.placed[1];
    assert_eq!(list.page_index, 1);
    assert_eq!(list.y, page.margin_all);
}

#[test]
fn page_height_exceeding_block_is_placed_on_a_fresh_page_with_overflow() {
    let page = PageGeometry::a4();
    let doc = vec![paragraph(lorem(200)), paragraph(lorem(20_000))];
    let out = layout(&doc);
    let giant = &out.placed[1];
    assert_eq!(giant.y, page.margin_all);
    assert!(giant.height > page.content_height());
    assert_eq!(out.page_count, giant.page_index + 1);
}

#[test]
fn section_break_participates_in_the_overflow_check() {
    let page = PageGeometry::a4();
    // Leave less room than the rule gap needs at the bottom of page 0.
    let mut doc = vec![paragraph(lorem(3300))];
    doc.push(section_break());
    doc.push(paragraph("após a seção"));
    let out = layout(&doc);
    let rule = &out.placed[1];
    if rule.page_index == 0 {
        assert!(rule.y + rule.height <= page.content_bottom() + FIT_EPSILON);
    } else {
        assert_eq!(rule.y, page.margin_all);
    }
}

#[test]
fn diagram_rasters_are_keyed_by_placed_index() {
    let doc = vec![
        heading("Diagramas", 2),
        ContentBlock::Diagram {
            title: "Seções do corte".into(),
            markup: "<svg/>".into(),
        },
    ];
    let out = layout(&doc);
    assert_eq!(out.placed.len(), 2);
    assert!(out.diagram_rasters.contains_key(&1));
    assert!(!out.diagram_rasters.contains_key(&0));
}

#[test]
fn failing_diagram_aborts_by_default() {
    let metrics = ApproxMetrics::default();
    let rasterizer = StubRasterizer::failing();
    let doc = vec![ContentBlock::Diagram {
        title: "Mechas".into(),
        markup: "<svg/>".into(),
    }];
    let err = FlowEngine::new(&metrics, &rasterizer)
        .layout(&doc, &PageGeometry::a4())
        .unwrap_err();
    assert!(matches!(err, LayoutError::Diagram { .. }));
}

#[test]
fn failing_diagram_is_skipped_under_skip_policy() {
    let metrics = ApproxMetrics::default();
    let rasterizer = StubRasterizer::failing();
    let doc = vec![
        heading("Diagramas", 2),
        ContentBlock::Diagram {
            title: "Mechas".into(),
            markup: "<svg/>".into(),
        },
        paragraph("continua"),
    ];
    let out = FlowEngine::new(&metrics, &rasterizer)
        .with_options(LayoutOptions {
            diagram_policy: DiagramPolicy::Skip,
            ..LayoutOptions::default()
        })
        .layout(&doc, &PageGeometry::a4())
        .unwrap();
    assert_eq!(out.placed.len(), 2);
    assert!(out.diagram_rasters.is_empty());
    assert_eq!(out.placed[1].block.kind(), "paragraph");
}

#[test]
fn image_row_with_too_many_images_is_rejected() {
    let metrics = ApproxMetrics::default();
    let rasterizer = StubRasterizer::square();
    let doc = vec![ContentBlock::ImageRow {
        images: vec![None, None, None],
        labels: vec![],
        columns: Columns::Two,
    }];
    let err = FlowEngine::new(&metrics, &rasterizer)
        .layout(&doc, &PageGeometry::a4())
        .unwrap_err();
    assert!(matches!(err, LayoutError::ImageRowArity { .. }));
}

#[test]
fn labeled_image_rows_reserve_the_caption_strip() {
    let unlabeled = layout(&[ContentBlock::ImageRow {
        images: vec![None, None],
        labels: vec![],
        columns: Columns::Two,
    }]);
    let labeled = layout(&[ContentBlock::ImageRow {
        images: vec![None, None],
        labels: vec!["Antes".into(), "Depois".into()],
        columns: Columns::Two,
    }]);
    assert!(labeled.placed[0].height > unlabeled.placed[0].height);
}

#[test]
fn empty_document_yields_no_pages() {
    let out = layout(&[]);
    assert!(out.placed.is_empty());
    assert_eq!(out.page_count, 0);
}
