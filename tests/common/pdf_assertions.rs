use billet_render_core::utils::from_win_ansi;
use lopdf::Document as LopdfDocument;
use lopdf::content::Content;
use std::collections::BTreeSet;

/// One `Tj` operation together with the text position and font in effect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font: String,
    pub size: f32,
}

/// Decode the content stream of a page and collect every shown string
pub fn drawn_text(doc: &LopdfDocument, page_num: u32) -> Vec<DrawnText> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page_num) else {
        return Vec::new();
    };
    let Ok(raw) = doc.get_page_content(*page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&raw) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    let (mut x, mut y) = (0.0, 0.0);
    let (mut font, mut size) = (String::new(), 0.0);
    for op in content.operations {
        match op.operator.as_str() {
            "Tf" if op.operands.len() == 2 => {
                font = op.operands[0]
                    .as_name()
                    .map(|n| String::from_utf8_lossy(n).into_owned())
                    .unwrap_or_default();
                size = op.operands[1].as_float().unwrap_or(0.0);
            }
            "Td" if op.operands.len() == 2 => {
                x = op.operands[0].as_float().unwrap_or(0.0);
                y = op.operands[1].as_float().unwrap_or(0.0);
            }
            "Tj" => {
                if let Some(Ok(bytes)) = op.operands.first().map(|o| o.as_str()) {
                    out.push(DrawnText {
                        text: from_win_ansi(bytes),
                        x,
                        y,
                        font: font.clone(),
                        size,
                    });
                }
            }
            _ => {}
        }
    }
    out
}

/// All drawn strings of the first page joined by newlines
pub fn extract_text(doc: &LopdfDocument) -> String {
    drawn_text(doc, 1)
        .into_iter()
        .map(|t| t.text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Find the first drawn string equal to `text`
pub fn find_text(doc: &LopdfDocument, text: &str) -> Option<DrawnText> {
    drawn_text(doc, 1).into_iter().find(|t| t.text == text)
}

/// Resolve the BaseFont names referenced by the page resources
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = BTreeSet::new();
    for page_id in doc.get_pages().values() {
        let Ok(page_dict) = doc.get_dictionary(*page_id) else {
            continue;
        };
        let resources = match page_dict.get(b"Resources") {
            Ok(obj) => match obj.as_reference() {
                Ok(id) => doc.get_dictionary(id).ok(),
                Err(_) => obj.as_dict().ok(),
            },
            Err(_) => None,
        };
        let Some(font_dict) = resources
            .and_then(|r| r.get(b"Font").ok())
            .and_then(|f| f.as_dict().ok())
        else {
            continue;
        };
        for (_, font) in font_dict.iter() {
            if let Some(name) = font
                .as_dict()
                .ok()
                .and_then(|d| d.get(b"BaseFont").ok())
                .and_then(|b| b.as_name().ok())
            {
                fonts.insert(String::from_utf8_lossy(name).into_owned());
            }
        }
    }
    fonts.into_iter().collect()
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_num)?;
    let page_dict = doc.get_dictionary(*page_id).ok()?;
    let arr = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let width = arr[2].as_float().ok()? - arr[0].as_float().ok()?;
    let height = arr[3].as_float().ok()? - arr[1].as_float().ok()?;
    Some((width, height))
}

/// The Title entry of the document info dictionary
pub fn document_title(doc: &LopdfDocument) -> Option<String> {
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let title = doc.get_dictionary(info_id).ok()?.get(b"Title").ok()?;
    lopdf::decode_text_string(title).ok()
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that PDF contains specific drawn text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.lines().any(|line| line == $text),
            "PDF should contain '{}', but drawn text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific drawn text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.lines().any(|line| line == $text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert the size of a page in points
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let (w, h) = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page)
            .expect("page should have a MediaBox");
        assert!(
            (w - $width).abs() < 0.01 && (h - $height).abs() < 0.01,
            "Expected page size {}x{}, got {}x{}",
            $width,
            $height,
            w,
            h
        );
    };
}

/// Assert that PDF references a font with the given BaseFont name
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $name:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f == $name),
            "PDF should reference font '{}', found: {:?}",
            $name,
            fonts
        );
    };
}
