//! One-byte type discriminants.

use std::fmt;

/// Type tag written in front of every encoded value.
///
/// The numbering is part of the wire format and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tag {
    Bool = 0,
    Char = 1,
    Int32 = 2,
    Int64 = 3,
    Float = 4,
    Double = 5,
    String = 6,
    Vector = 7,
    List = 8,
    Map = 9,
    Set = 10,
    Custom = 11,
}

impl Tag {
    pub const ALL: [Tag; 12] = [
        Tag::Bool,
        Tag::Char,
        Tag::Int32,
        Tag::Int64,
        Tag::Float,
        Tag::Double,
        Tag::String,
        Tag::Vector,
        Tag::List,
        Tag::Map,
        Tag::Set,
        Tag::Custom,
    ];

    /// Maps a raw byte back to its tag, or `None` for unrecognized bytes.
    pub fn from_byte(byte: u8) -> Option<Tag> {
        Tag::ALL.get(byte as usize).copied()
    }

    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Payload width for fixed-width primitives.
    pub fn fixed_width(self) -> Option<usize> {
        match self {
            Tag::Bool | Tag::Char => Some(1),
            Tag::Int32 | Tag::Float => Some(4),
            Tag::Int64 | Tag::Double => Some(8),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tag::Bool => "BOOL",
            Tag::Char => "CHAR",
            Tag::Int32 => "INT32",
            Tag::Int64 => "INT64",
            Tag::Float => "FLOAT",
            Tag::Double => "DOUBLE",
            Tag::String => "STRING",
            Tag::Vector => "VECTOR",
            Tag::List => "LIST",
            Tag::Map => "MAP",
            Tag::Set => "SET",
            Tag::Custom => "CUSTOM",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Tag {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Tag::from_byte(byte).ok_or(byte)
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> u8 {
        tag as u8
    }
}
