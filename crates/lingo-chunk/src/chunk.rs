use lingo_types::{Document, Entries};

/// An ordered run of top-level entries and its serialized form.
#[derive(Clone, Debug, PartialEq)]
pub struct Chunk {
    /// Position of this chunk in the slice output.
    pub index: usize,
    /// The entries, in original document order.
    pub entries: Entries,
    /// Compact JSON serialization of `entries`.
    pub text: String,
}

impl Chunk {
    /// Number of entries in the chunk.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the chunk holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialized length, counted in characters.
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }

    /// The entries as a standalone object document.
    pub fn to_document(&self) -> Document {
        Document::Object(self.entries.clone())
    }
}
