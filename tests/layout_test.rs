//! Integration tests for layout reconstruction.

use pagetidy::layout::{merge_lines, order_fragments, segment_paragraphs};
use pagetidy::{
    read_pages_bytes, reconstruct, LayoutAnalyzer, LayoutOptions, Line, Page, PageSelection,
    TextFragment,
};

fn frag(text: &str, x: f32, y: f32, width: f32, height: f32) -> TextFragment {
    TextFragment::new(text, x, y, width, height)
}

/// A heading and a wrapped paragraph in scrambled content-stream order,
/// plus a whitespace-only fragment.
fn scrambled_page() -> Page {
    Page::from(vec![
        frag("exceeds the short line limit.", 330.0, 650.0, 190.0, 12.0),
        frag("Introduction", 72.0, 720.0, 90.0, 14.0),
        frag("This first body line is long and", 72.0, 665.0, 150.0, 12.0),
        frag(" ", 72.0, 700.0, 3.0, 12.0),
        frag("the second line also", 72.0, 650.0, 150.0, 12.0),
        frag("clearly", 250.0, 665.0, 45.0, 12.0),
    ])
}

#[test]
fn test_same_row_fragments_ascend_by_x() {
    let page = Page::from(vec![
        frag("c", 200.0, 100.0, 10.0, 10.0),
        frag("a", 0.0, 101.0, 10.0, 10.0),
        frag("b", 100.0, 99.0, 10.0, 10.0),
    ]);
    let ordered: Vec<&str> = order_fragments(&page, 0.5)
        .into_iter()
        .map(|f| f.text.as_str())
        .collect();
    assert_eq!(ordered, ["a", "b", "c"]);
}

#[test]
fn test_hello_world_spacing() {
    let options = LayoutOptions::default();

    let spaced = [frag("Hello", 0.0, 100.0, 40.0, 10.0), frag("World", 65.0, 101.0, 40.0, 10.0)];
    let lines = merge_lines(&spaced, &options);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "Hello World");

    let tight = [frag("Hello", 0.0, 100.0, 40.0, 10.0), frag("World", 45.0, 101.0, 40.0, 10.0)];
    let lines = merge_lines(&tight, &options);
    assert_eq!(lines[0].text, "HelloWorld");
}

#[test]
fn test_paragraph_property() {
    let lines = vec![
        Line::from_text("Introduction"),
        Line::from_text(""),
        Line::from_text("Body text that is long enough to exceed thirty characters easily."),
    ];
    let paragraphs = segment_paragraphs(&lines, &LayoutOptions::default());
    assert_eq!(
        paragraphs,
        [
            "Introduction",
            "",
            "Body text that is long enough to exceed thirty characters easily."
        ]
    );
}

#[test]
fn test_scrambled_page_reconstruction() {
    let doc = reconstruct(&[scrambled_page()], &LayoutOptions::default());
    let page = doc.get_page(1).unwrap();

    assert_eq!(page.fragment_count, 6);
    assert_eq!(page.line_count, 3);
    assert_eq!(
        page.paragraphs,
        [
            "Introduction",
            "This first body line is long and clearly the second line also exceeds the short line limit."
        ]
    );
}

#[test]
fn test_reconstruction_is_deterministic() {
    let pages: Vec<Page> = (0..8).map(|_| scrambled_page()).collect();
    let first = reconstruct(&pages, &LayoutOptions::default());
    let second = reconstruct(&pages, &LayoutOptions::default().sequential());
    assert_eq!(first, second);
    assert_eq!(first.page_count(), 8);
}

#[test]
fn test_page_selection_keeps_source_numbers() {
    let pages: Vec<Page> = (0..5).map(|_| scrambled_page()).collect();
    let options = LayoutOptions::default().with_pages(PageSelection::parse("2,4-5").unwrap());
    let doc = LayoutAnalyzer::new(options).analyze(&pages);

    let numbers: Vec<u32> = doc.pages.iter().map(|p| p.number).collect();
    assert_eq!(numbers, [2, 4, 5]);
}

#[test]
fn test_empty_input() {
    let doc = reconstruct(&[], &LayoutOptions::default());
    assert!(doc.is_empty());

    let doc = reconstruct(&[Page::new()], &LayoutOptions::default());
    assert_eq!(doc.page_count(), 1);
    assert!(doc.pages[0].paragraphs.is_empty());
}

#[test]
fn test_reconstruct_from_json() {
    let json = br#"[[
        {"str": "World", "x": 65, "y": 101, "width": 40, "height": 10, "fontName": "f1"},
        {"str": "Hello", "x": 0, "y": 100, "width": 40, "height": 10, "fontName": "f1"}
    ]]"#;
    let pages = read_pages_bytes(json).unwrap();
    let doc = reconstruct(&pages, &LayoutOptions::default());
    assert_eq!(doc.plain_text(), "Hello World");
}

#[test]
fn test_reconstruct_from_pdfjs_text_content() {
    let json = br#"[[
        {"str": "second line here", "dir": "ltr", "transform": [12, 0, 0, 12, 72, 680], "width": 90, "height": 12, "hasEOL": false},
        {"str": "Title", "dir": "ltr", "transform": [12, 0, 0, 12, 72, 720], "width": 30, "height": 12, "hasEOL": true}
    ]]"#;
    let pages = read_pages_bytes(json).unwrap();
    assert_eq!((pages[0].fragments[1].x, pages[0].fragments[1].y), (72.0, 720.0));

    let doc = reconstruct(&pages, &LayoutOptions::default());
    assert_eq!(doc.pages[0].paragraphs, ["Title", "second line here"]);
}

#[test]
fn test_custom_thresholds() {
    let options = LayoutOptions::default()
        .with_word_gap_ratio(1.0)
        .with_short_line_chars(5);

    let page = Page::from(vec![
        frag("Hello", 0.0, 100.0, 40.0, 10.0),
        frag("World", 65.0, 100.0, 40.0, 10.0),
        frag("again", 0.0, 80.0, 40.0, 10.0),
    ]);
    let doc = reconstruct(&[page], &options);
    assert_eq!(doc.pages[0].paragraphs, ["HelloWorld again"]);
}
