use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::editing::Cmd;

/// Id given to the single wrapped block when legacy freeform content is
/// migrated into block form.
pub const LEGACY_BLOCK_ID: &str = "legacy";

/// Stable identifier for a block, unique within one document.
///
/// Assigned at creation and never reused after deletion. Uniqueness is only
/// required within a single document, so no global registry is involved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Generate a fresh id for a newly created block.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Discriminant for the four block shapes.
///
/// A block's type is fixed at creation; there is no in-place conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Heading,
    Paragraph,
    Image,
    Video,
}

impl BlockType {
    /// The `type` tag used in the persisted form.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Heading => "heading",
            BlockType::Paragraph => "paragraph",
            BlockType::Image => "image",
            BlockType::Video => "video",
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Block payload, tagged with `type` in the persisted form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockKind {
    /// Plain section heading text.
    Heading { value: String },
    /// Inline-rich markup produced by the delegated editor; opaque here.
    Paragraph { value: String },
    /// Image URL (empty until one is chosen) plus an optional caption.
    Image {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    /// Raw video URL exactly as typed by the author.
    Video { value: String },
}

impl BlockKind {
    /// Empty payload for a freshly added block of the given type.
    pub fn empty(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Heading => BlockKind::Heading {
                value: String::new(),
            },
            BlockType::Paragraph => BlockKind::Paragraph {
                value: String::new(),
            },
            BlockType::Image => BlockKind::Image {
                value: String::new(),
                caption: Some(String::new()),
            },
            BlockType::Video => BlockKind::Video {
                value: String::new(),
            },
        }
    }

    pub fn block_type(&self) -> BlockType {
        match self {
            BlockKind::Heading { .. } => BlockType::Heading,
            BlockKind::Paragraph { .. } => BlockType::Paragraph,
            BlockKind::Image { .. } => BlockType::Image,
            BlockKind::Video { .. } => BlockType::Video,
        }
    }

    /// The semantic payload string, whatever the type.
    pub fn value(&self) -> &str {
        match self {
            BlockKind::Heading { value }
            | BlockKind::Paragraph { value }
            | BlockKind::Image { value, .. }
            | BlockKind::Video { value } => value,
        }
    }

    /// Caption text; only image blocks carry one.
    pub fn caption(&self) -> Option<&str> {
        match self {
            BlockKind::Image { caption, .. } => caption.as_deref(),
            _ => None,
        }
    }
}

/// Atomic unit of a content document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl Block {
    /// Create a fresh block with a new unique id and an empty payload.
    pub fn new(block_type: BlockType) -> Self {
        Self {
            id: BlockId::random(),
            kind: BlockKind::empty(block_type),
        }
    }

    /// Wrap legacy freeform content verbatim in a single paragraph block.
    fn legacy(text: &str) -> Self {
        Self {
            id: BlockId::from(LEGACY_BLOCK_ID),
            kind: BlockKind::Paragraph {
                value: text.to_string(),
            },
        }
    }
}

/// Ordered block sequence behind one record's content field.
///
/// Insertion order is the only ordering signal; reordering is a destructive
/// swap, not an assigned sort key. An empty document is valid and renders as
/// "no content".
///
/// A document is constructed once per editing session by normalizing the
/// record's stored content, lives in the editing surface's memory, and is
/// serialized back out by the host when it changes. Editing a different
/// record means constructing a new document; normalization never re-runs on
/// a live one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentDocument {
    blocks: Vec<Block>,
}

impl ContentDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from an explicit block list.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Normalize whatever the record currently stores into a block sequence.
    ///
    /// A bracket-delimited string that parses as a block array is trusted
    /// as-is. Anything else that is non-empty (legacy HTML, plain text,
    /// malformed JSON) is wrapped verbatim as a single paragraph block so
    /// the author never loses content. Empty input yields an empty document.
    pub fn from_stored(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::new();
        }
        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            match serde_json::from_str::<Vec<Block>>(trimmed) {
                Ok(blocks) => return Self { blocks },
                Err(err) => {
                    tracing::debug!(error = %err, "stored content is not a block array, wrapping as legacy");
                }
            }
        }
        Self {
            blocks: vec![Block::legacy(raw)],
        }
    }

    /// Canonical serialization of the full block sequence.
    pub fn serialize(&self) -> String {
        serde_json::to_string(&self.blocks).expect("block list serializes to JSON")
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    /// Apply a command; returns whether the document was structurally changed.
    pub fn apply(&mut self, cmd: &Cmd) -> bool {
        crate::editing::commands::apply_command(self, cmd)
    }

    pub(crate) fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    pub(crate) fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub(crate) fn block_mut(&mut self, id: &BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| &b.id == id)
    }

    pub(crate) fn remove_block(&mut self, id: &BlockId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.blocks.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn swap_blocks(&mut self, a: usize, b: usize) {
        self.blocks.swap(a, b);
    }
}
