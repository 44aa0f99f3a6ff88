use crate::error::RenderError;
use billet_layout::LaidOutPage;
use billet_types::TextStyle;
use std::io::{Seek, Write};

/// A trait for document renderers, abstracting the PDF-writing primitives.
///
/// Coordinates are PDF user space: origin at the bottom-left of the page,
/// y growing upwards, `(x, y)` naming the baseline start of the text.
pub trait DocumentRenderer<W: Write + Seek + Send> {
    /// Starts a new document that will be written to `writer` on `finish`.
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError>;

    /// Sets the document title recorded in the info dictionary.
    fn set_title(&mut self, title: &str);

    /// Opens a new page. Any previously opened page must have been ended.
    fn begin_page(&mut self, width: f32, height: f32) -> Result<(), RenderError>;

    fn draw_text(&mut self, x: f32, y: f32, text: &str, style: &TextStyle) -> Result<(), RenderError>;

    fn end_page(&mut self) -> Result<(), RenderError>;

    /// Writes the remaining document structure and hands back the sink.
    fn finish(self: Box<Self>) -> Result<W, RenderError>;
}

/// Replays a laid out page onto a renderer as one complete page.
pub fn paint_page<W, R>(renderer: &mut R, page: &LaidOutPage) -> Result<(), RenderError>
where
    W: Write + Seek + Send,
    R: DocumentRenderer<W> + ?Sized,
{
    renderer.begin_page(page.width, page.height)?;
    for element in &page.elements {
        renderer.draw_text(element.position.x, element.position.y, &element.text, &element.style)?;
    }
    renderer.end_page()
}
