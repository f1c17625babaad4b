use crate::content::ContentStream;
use crate::error::Result;
use crate::objects::{Dictionary, Object, ObjectId};
use crate::page::PageSize;
use crate::text::FontResource;
use crate::writer::PdfWriter;
use std::io::Write;

pub const CATALOG_ID: ObjectId = ObjectId::new(1, 0);
pub const PAGE_TREE_ID: ObjectId = ObjectId::new(2, 0);
pub const PAGE_ID: ObjectId = ObjectId::new(3, 0);
pub const CONTENTS_ID: ObjectId = ObjectId::new(6, 0);

/// One indirect object of the fixed single-page object graph.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentObject {
    Catalog {
        pages: ObjectId,
    },
    PageTree {
        kids: Vec<ObjectId>,
    },
    Page {
        parent: ObjectId,
        media_box: PageSize,
        fonts: Vec<(FontResource, ObjectId)>,
        contents: ObjectId,
    },
    Font(FontResource),
    ContentStream(Vec<u8>),
}

impl DocumentObject {
    /// Lowers the object into the generic value written by [`PdfWriter`].
    pub fn to_object(&self) -> Object {
        match self {
            DocumentObject::Catalog { pages } => Dictionary::new()
                .with("Type", Object::name("Catalog"))
                .with("Pages", *pages)
                .into(),
            DocumentObject::PageTree { kids } => Dictionary::new()
                .with("Type", Object::name("Pages"))
                .with(
                    "Kids",
                    kids.iter().copied().map(Object::Reference).collect::<Vec<_>>(),
                )
                .with("Count", kids.len() as i64)
                .into(),
            DocumentObject::Page {
                parent,
                media_box,
                fonts,
                contents,
            } => {
                let font_dict: Dictionary = fonts
                    .iter()
                    .map(|(font, id)| (font.resource_name().to_string(), Object::Reference(*id)))
                    .collect();
                let resources = Dictionary::new().with("Font", font_dict);

                Dictionary::new()
                    .with("Type", Object::name("Page"))
                    .with("Parent", *parent)
                    .with(
                        "MediaBox",
                        vec![
                            Object::Integer(0),
                            Object::Integer(0),
                            Object::Real(media_box.width),
                            Object::Real(media_box.height),
                        ],
                    )
                    .with("Resources", resources)
                    .with("Contents", *contents)
                    .into()
            }
            DocumentObject::Font(font) => Dictionary::new()
                .with("Type", Object::name("Font"))
                .with("Subtype", Object::name("Type1"))
                .with("BaseFont", Object::name(font.base_font()))
                .into(),
            DocumentObject::ContentStream(data) => {
                let dict = Dictionary::new().with("Length", data.len() as i64);
                Object::Stream(dict, data.clone())
            }
        }
    }
}

/// A finished single-page document: page geometry plus its content stream.
///
/// The object graph is always the same six objects, numbered in this order:
/// catalog, page tree, page, bold font, regular font, content stream.
#[derive(Debug, Clone, PartialEq)]
pub struct SinglePageDocument {
    page_size: PageSize,
    content: ContentStream,
}

impl SinglePageDocument {
    pub fn new(page_size: PageSize, content: ContentStream) -> Self {
        Self { page_size, content }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn content(&self) -> &ContentStream {
        &self.content
    }

    /// The object graph in identity order; the object at index `i` is number `i + 1`.
    pub fn objects(&self) -> Vec<DocumentObject> {
        let font_ids = FontResource::ALL
            .iter()
            .enumerate()
            .map(|(i, font)| (*font, ObjectId::new(PAGE_ID.number() + 1 + i as u32, 0)))
            .collect::<Vec<_>>();

        let mut objects = vec![
            DocumentObject::Catalog {
                pages: PAGE_TREE_ID,
            },
            DocumentObject::PageTree {
                kids: vec![PAGE_ID],
            },
            DocumentObject::Page {
                parent: PAGE_TREE_ID,
                media_box: self.page_size,
                fonts: font_ids.clone(),
                contents: CONTENTS_ID,
            },
        ];
        objects.extend(font_ids.iter().map(|(font, _)| DocumentObject::Font(*font)));
        objects.push(DocumentObject::ContentStream(self.content.as_bytes().to_vec()));
        objects
    }

    /// Serializes the complete file into memory.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(buffer)
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        PdfWriter::new_with_writer(writer).write_document(self)?;
        Ok(())
    }
}
