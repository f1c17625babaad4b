/// The two font resources every page declares.
///
/// Both are standard Type 1 fonts, so nothing is embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontResource {
    /// Bold weight used by titles and headings (`/F1`, Helvetica-Bold)
    F1,
    /// Regular weight used by body text (`/F2`, Helvetica)
    F2,
}

impl FontResource {
    /// All resources in the order their font objects are written.
    pub const ALL: [FontResource; 2] = [FontResource::F1, FontResource::F2];

    /// Local name under the page's `/Font` resource dictionary.
    pub fn resource_name(&self) -> &'static str {
        match self {
            FontResource::F1 => "F1",
            FontResource::F2 => "F2",
        }
    }

    /// The standard 14 font this resource is bound to.
    pub fn base_font(&self) -> &'static str {
        match self {
            FontResource::F1 => "Helvetica-Bold",
            FontResource::F2 => "Helvetica",
        }
    }
}

/// Font, size and leading for one kind of text block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: FontResource,
    pub size: f64,
    pub leading: f64,
}

impl TextStyle {
    pub const TITLE: TextStyle = TextStyle {
        font: FontResource::F1,
        size: 18.0,
        leading: 22.0,
    };

    pub const HEADING: TextStyle = TextStyle {
        font: FontResource::F1,
        size: 12.0,
        leading: 14.0,
    };

    pub const BODY: TextStyle = TextStyle {
        font: FontResource::F2,
        size: 10.0,
        leading: 12.0,
    };
}
