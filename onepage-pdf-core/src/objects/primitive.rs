use crate::objects::Dictionary;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    number: u32,
    generation: u16,
}

impl ObjectId {
    pub const fn new(number: u32, generation: u16) -> Self {
        Self { number, generation }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn generation(&self) -> u16 {
        self.generation
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.number, self.generation)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Integer(i64),
    Real(f64),
    Name(String),
    Array(Vec<Object>),
    Dictionary(Dictionary),
    Stream(Dictionary, Vec<u8>),
    Reference(ObjectId),
}

impl Object {
    pub fn name(name: &str) -> Self {
        Object::Name(name.to_string())
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Object::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Object::Name(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<ObjectId> {
        match self {
            Object::Reference(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(dict) => Some(dict),
            Object::Stream(dict, _) => Some(dict),
            _ => None,
        }
    }
}

impl From<i64> for Object {
    fn from(i: i64) -> Self {
        Object::Integer(i)
    }
}

impl From<f64> for Object {
    fn from(f: f64) -> Self {
        Object::Real(f)
    }
}

impl From<ObjectId> for Object {
    fn from(id: ObjectId) -> Self {
        Object::Reference(id)
    }
}

impl From<Vec<Object>> for Object {
    fn from(v: Vec<Object>) -> Self {
        Object::Array(v)
    }
}

impl From<Dictionary> for Object {
    fn from(d: Dictionary) -> Self {
        Object::Dictionary(d)
    }
}

/// Formats a real number with at most six decimals and no trailing zeros.
pub fn format_real(value: f64) -> String {
    let formatted = format!("{value:.6}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-" | "-0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_display() {
        let id = ObjectId::new(6, 0);
        assert_eq!(id.to_string(), "6 0 R");
        assert_eq!(id.number(), 6);
        assert_eq!(id.generation(), 0);
    }

    #[test]
    fn test_object_id_ordering() {
        assert!(ObjectId::new(1, 0) < ObjectId::new(2, 0));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Object::Integer(7).as_integer(), Some(7));
        assert_eq!(Object::Real(1.0).as_integer(), None);
        assert_eq!(Object::name("Page").as_name(), Some("Page"));
        assert_eq!(
            Object::from(ObjectId::new(3, 0)).as_reference(),
            Some(ObjectId::new(3, 0))
        );
        assert!(Object::Dictionary(Dictionary::new()).as_dict().is_some());
        assert!(Object::Stream(Dictionary::new(), vec![]).as_dict().is_some());
    }

    #[test]
    fn test_format_real() {
        assert_eq!(format_real(612.0), "612");
        assert_eq!(format_real(595.5), "595.5");
        assert_eq!(format_real(0.0), "0");
        assert_eq!(format_real(-0.0), "0");
        assert_eq!(format_real(0.25), "0.25");
        assert_eq!(format_real(1.0 / 3.0), "0.333333");
        assert_eq!(format_real(-12.5), "-12.5");
        assert_eq!(format_real(100.0), "100");
    }
}
