use crate::helpers::PageContext;
use crate::writer::PdfDocumentWriter;
use billet_render_core::utils::font_resource_name;
use billet_render_core::{DocumentRenderer, RenderError};
use billet_types::{FontWeight, TextStyle};
use lopdf::{dictionary, Dictionary, Object};
use std::collections::HashMap;
use std::io::{Seek, Write};

const FONT_WEIGHTS: [FontWeight; 2] = [FontWeight::Regular, FontWeight::Bold];

struct OpenPage {
    context: PageContext,
    width: f32,
    height: f32,
}

/// A PDF renderer using the `lopdf` library.
///
/// Operations must follow `begin_document`, then any number of
/// `begin_page` / `draw_text` / `end_page` cycles, then `finish`. Anything
/// else is reported as [`RenderError::InvalidState`].
pub struct LopdfRenderer<W: Write + Seek + Send> {
    writer: Option<PdfDocumentWriter<W>>,
    font_map: HashMap<FontWeight, String>,
    page: Option<OpenPage>,
    title: Option<String>,
}

impl<W: Write + Seek + Send> LopdfRenderer<W> {
    pub fn new() -> Self {
        let font_map = FONT_WEIGHTS
            .iter()
            .enumerate()
            .map(|(i, weight)| (*weight, font_resource_name(i)))
            .collect();

        Self {
            writer: None,
            font_map,
            page: None,
            title: None,
        }
    }

    fn font_dictionary(&self) -> Dictionary {
        let mut font_dict = Dictionary::new();
        for weight in FONT_WEIGHTS {
            if let Some(internal_name) = self.font_map.get(&weight) {
                let single_font_dict = dictionary! {
                    "Type" => "Font", "Subtype" => "Type1", "BaseFont" => weight.postscript_name(), "Encoding" => "WinAnsiEncoding",
                };
                font_dict.set(internal_name.as_bytes(), Object::Dictionary(single_font_dict));
            }
        }
        font_dict
    }

    pub fn page_count(&self) -> usize {
        self.writer.as_ref().map_or(0, |w| w.page_count())
    }
}

impl<W: Write + Seek + Send> Default for LopdfRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Seek + Send> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError> {
        if self.writer.is_some() {
            return Err(RenderError::InvalidState("document already started"));
        }
        let font_dict = self.font_dictionary();
        self.writer = Some(PdfDocumentWriter::new(writer, "1.7", font_dict));
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn begin_page(&mut self, width: f32, height: f32) -> Result<(), RenderError> {
        if self.writer.is_none() {
            return Err(RenderError::InvalidState("document not started"));
        }
        if self.page.is_some() {
            return Err(RenderError::InvalidState("previous page was not ended"));
        }
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(RenderError::Other(format!("Invalid page size {}x{}", width, height)));
        }
        self.page = Some(OpenPage {
            context: PageContext::new(),
            width,
            height,
        });
        Ok(())
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, style: &TextStyle) -> Result<(), RenderError> {
        let page = self
            .page
            .as_mut()
            .ok_or(RenderError::InvalidState("no page is open"))?;
        let font_name = self
            .font_map
            .get(&style.weight)
            .ok_or_else(|| RenderError::Other(format!("No font registered for {:?}", style.weight)))?;
        page.context.draw_text(x, y, text, font_name, style.size);
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        let page = self.page.take().ok_or(RenderError::InvalidState("no page is open"))?;
        let writer = self
            .writer
            .as_mut()
            .ok_or(RenderError::InvalidState("document not started"))?;

        let content_id = writer.write_content_stream(page.context.finish())?;
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), page.width.into(), page.height.into()],
            "Contents" => content_id,
            "Resources" => writer.resources_id,
        };
        let page_id = writer.write_object(page_dict.into());
        writer.add_page_id(page_id);
        log::debug!("Wrote page {} ({}x{})", writer.page_count(), page.width, page.height);
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<W, RenderError> {
        let mut renderer = *self;
        if renderer.page.is_some() {
            return Err(RenderError::InvalidState("page left open at finish"));
        }
        let mut writer = renderer
            .writer
            .take()
            .ok_or(RenderError::InvalidState("document was never started with begin_document"))?;
        writer.set_title(renderer.title.take());
        writer.finish()
    }
}
