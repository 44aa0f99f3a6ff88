use billet_render_core::RenderError;
use lopdf::content::Content;
use lopdf::{dictionary, text_string, Dictionary, Document, Object, ObjectId, Stream};
use std::io::{Seek, Write};

const PRODUCER: &str = concat!("billet ", env!("CARGO_PKG_VERSION"));

/// Collects the objects of one PDF document and serializes it to `W` on `finish`.
///
/// The resources, page tree and catalog ids are reserved up front so pages
/// can reference them before the tree itself is written.
pub struct PdfDocumentWriter<W: Write + Seek> {
    writer: W,
    document: Document,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    title: Option<String>,
}

impl<W: Write + Seek> PdfDocumentWriter<W> {
    pub fn new(writer: W, version: &str, font_dict: Dictionary) -> Self {
        let mut document = Document::with_version(version);
        let resources_id = document.add_object(dictionary! { "Font" => font_dict });
        let pages_id = document.new_object_id();
        let catalog_id = document.new_object_id();

        Self {
            writer,
            document,
            catalog_id,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            title: None,
        }
    }

    pub fn write_object(&mut self, object: Object) -> ObjectId {
        self.document.add_object(object)
    }

    pub fn write_content_stream(&mut self, content: Content) -> Result<ObjectId, RenderError> {
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(self.document.add_object(stream))
    }

    pub fn add_page_id(&mut self, page_id: ObjectId) {
        self.page_ids.push(page_id);
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// Writes the page tree, catalog, info dictionary and trailer, then
    /// flushes the complete file to the sink.
    pub fn finish(mut self) -> Result<W, RenderError> {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.document.objects.insert(self.pages_id, pages_dict.into());

        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.document.objects.insert(self.catalog_id, catalog_dict.into());

        let mut info_dict = dictionary! { "Producer" => Object::string_literal(PRODUCER) };
        if let Some(title) = &self.title {
            info_dict.set("Title", text_string(title));
        }
        let info_id = self.document.add_object(info_dict);

        self.document.trailer.set("Root", self.catalog_id);
        self.document.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        self.document.save_to(&mut buffer)?;
        self.writer.write_all(&buffer)?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}
