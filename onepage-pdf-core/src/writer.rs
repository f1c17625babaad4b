use crate::document::{SinglePageDocument, CATALOG_ID};
use crate::error::Result;
use crate::objects::{format_real, Dictionary, Object, ObjectId};
use std::io::Write;

pub const PDF_HEADER: &[u8] = b"%PDF-1.4\n";
/// Comment with high-bit bytes so readers treat the file as binary.
pub const BINARY_MARKER: &[u8] = &[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'];
const FREE_LIST_HEAD: &[u8] = b"0000000000 65535 f \n";

pub struct PdfWriter<W: Write> {
    writer: W,
    xref_positions: Vec<(ObjectId, u64)>,
    current_position: u64,
}

impl<W: Write> PdfWriter<W> {
    pub fn new_with_writer(writer: W) -> Self {
        Self {
            writer,
            xref_positions: Vec::new(),
            current_position: 0,
        }
    }

    /// Byte offsets recorded so far, in the order objects were written.
    pub fn xref_positions(&self) -> &[(ObjectId, u64)] {
        &self.xref_positions
    }

    /// Writes the complete file and returns the offset recorded for each
    /// object. The writer is consumed, so it always holds exactly one file.
    pub fn write_document(
        mut self,
        document: &SinglePageDocument,
    ) -> Result<Vec<(ObjectId, u64)>> {
        self.write_header()?;

        let objects = document.objects();
        for (index, object) in objects.iter().enumerate() {
            let id = ObjectId::new(index as u32 + 1, 0);
            self.write_object(id, &object.to_object())?;
        }

        let xref_position = self.current_position;
        self.write_xref()?;
        self.write_trailer(CATALOG_ID, xref_position)?;
        self.writer.flush()?;

        tracing::debug!(
            objects = objects.len(),
            bytes = self.current_position,
            xref = xref_position,
            "wrote single-page document"
        );
        Ok(self.xref_positions)
    }

    fn write_header(&mut self) -> Result<()> {
        self.write_bytes(PDF_HEADER)?;
        self.write_bytes(BINARY_MARKER)?;
        Ok(())
    }

    fn write_object(&mut self, id: ObjectId, object: &Object) -> Result<()> {
        tracing::trace!(object = id.number(), offset = self.current_position, "object");
        self.xref_positions.push((id, self.current_position));

        let header = format!("{} {} obj\n", id.number(), id.generation());
        self.write_bytes(header.as_bytes())?;

        self.write_object_value(object)?;

        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    fn write_object_value(&mut self, object: &Object) -> Result<()> {
        match object {
            Object::Integer(i) => self.write_bytes(i.to_string().as_bytes())?,
            Object::Real(f) => self.write_bytes(format_real(*f).as_bytes())?,
            Object::Name(n) => {
                self.write_bytes(b"/")?;
                self.write_bytes(n.as_bytes())?;
            }
            Object::Array(arr) => {
                self.write_bytes(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        self.write_bytes(b" ")?;
                    }
                    self.write_object_value(obj)?;
                }
                self.write_bytes(b"]")?;
            }
            Object::Dictionary(dict) => self.write_dictionary(dict)?,
            Object::Stream(dict, data) => {
                self.write_dictionary(dict)?;
                self.write_bytes(b"\nstream\n")?;
                self.write_bytes(data)?;
                self.write_bytes(b"\nendstream")?;
            }
            Object::Reference(id) => {
                let ref_str = format!("{} {} R", id.number(), id.generation());
                self.write_bytes(ref_str.as_bytes())?;
            }
        }
        Ok(())
    }

    fn write_dictionary(&mut self, dict: &Dictionary) -> Result<()> {
        self.write_bytes(b"<<")?;
        for (key, value) in dict.entries() {
            self.write_bytes(b" /")?;
            self.write_bytes(key.as_bytes())?;
            self.write_bytes(b" ")?;
            self.write_object_value(value)?;
        }
        self.write_bytes(b" >>")?;
        Ok(())
    }

    fn write_xref(&mut self) -> Result<()> {
        let size = self.xref_positions.len() + 1;
        self.write_bytes(format!("xref\n0 {size}\n").as_bytes())?;
        self.write_bytes(FREE_LIST_HEAD)?;

        let entries = self
            .xref_positions
            .iter()
            .map(|(id, position)| format!("{:010} {:05} n \n", position, id.generation()))
            .collect::<Vec<_>>();
        for entry in entries {
            self.write_bytes(entry.as_bytes())?;
        }

        Ok(())
    }

    fn write_trailer(&mut self, root: ObjectId, xref_position: u64) -> Result<()> {
        let trailer = Dictionary::new()
            .with("Size", (self.xref_positions.len() + 1) as i64)
            .with("Root", root);

        self.write_bytes(b"trailer\n")?;
        self.write_dictionary(&trailer)?;
        self.write_bytes(b"\nstartxref\n")?;
        self.write_bytes(xref_position.to_string().as_bytes())?;
        self.write_bytes(b"\n%%EOF\n")?;

        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.current_position += data.len() as u64;
        Ok(())
    }
}
