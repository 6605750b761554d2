use std::collections::HashSet;

use tracing::{debug, warn};

use crate::editing::commands::{Cmd, Direction};
use crate::editing::document::{BlockId, BlockType, ContentDocument};
use crate::editing::inline::InlineFormatter;
use crate::editing::patch::Patch;
use crate::editing::upload::{
    ImageStore, UploadError, UploadOutcome, UploadSource, UploadTransfer,
};

/// Host-facing editing surface over one record's content document.
///
/// The surface normalizes the stored content once at construction and owns
/// the resulting [`ContentDocument`] for the life of the editing session.
/// Every mutation re-serializes the full block sequence and invokes the
/// registered change listener only when the canonical form differs from the
/// last value reported outward, so no-op mutations never reach the host and
/// the host re-supplying the same content cannot loop back in.
///
/// Construct one surface per record being edited; switching records means
/// constructing a new surface.
pub struct EditingSurface<S> {
    document: ContentDocument,
    store: S,
    on_change: Box<dyn FnMut(&str)>,
    last_reported: String,
    version: u64,
    uploading: HashSet<BlockId>,
}

impl<S> EditingSurface<S> {
    /// Normalize `stored_content` and wire up the host change listener.
    ///
    /// The listener is not invoked here: the first report goes out with the
    /// first mutation that actually changes the canonical form. For a legacy
    /// record that is when the migrated serialization reaches storage.
    pub fn new(stored_content: &str, store: S, on_change: impl FnMut(&str) + 'static) -> Self {
        let document = ContentDocument::from_stored(stored_content);
        let last_reported = document.serialize();
        debug!(blocks = document.len(), "editing session opened");
        Self {
            document,
            store,
            on_change: Box::new(on_change),
            last_reported,
            version: 0,
            uploading: HashSet::new(),
        }
    }

    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    /// Count of effective edits since construction.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply a command, then synchronously diff-and-notify.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        self.document.apply(&cmd);
        self.report()
    }

    /// Append a fresh block and return its id along with the edit result.
    pub fn add_block(&mut self, block_type: BlockType) -> (BlockId, Patch) {
        let patch = self.apply(Cmd::AddBlock { block_type });
        let id = self
            .document
            .blocks()
            .last()
            .expect("add appends a block")
            .id
            .clone();
        (id, patch)
    }

    /// Replace a block's value (and caption, for image blocks).
    pub fn update_block(
        &mut self,
        id: &BlockId,
        value: impl Into<String>,
        caption: Option<String>,
    ) -> Patch {
        self.apply(Cmd::UpdateBlock {
            id: id.clone(),
            value: value.into(),
            caption,
        })
    }

    /// Route the span being edited through the delegated inline formatter
    /// and store the markup it produced.
    pub fn update_paragraph(
        &mut self,
        id: &BlockId,
        span: &str,
        formatter: &impl InlineFormatter,
    ) -> Patch {
        let markup = formatter.markup(span);
        self.update_block(id, markup, None)
    }

    pub fn delete_block(&mut self, id: &BlockId) -> Patch {
        self.apply(Cmd::DeleteBlock { id: id.clone() })
    }

    pub fn move_block(&mut self, index: usize, direction: Direction) -> Patch {
        self.apply(Cmd::MoveBlock { index, direction })
    }

    /// Whether an upload is currently in flight for this block. Move and
    /// delete controls for it should be disabled while this holds.
    pub fn is_uploading(&self, id: &BlockId) -> bool {
        self.uploading.contains(id)
    }

    /// Busy signal: number of uploads currently in flight across all blocks.
    pub fn uploads_in_flight(&self) -> usize {
        self.uploading.len()
    }

    fn report(&mut self) -> Patch {
        let serialized = self.document.serialize();
        if serialized == self.last_reported {
            return Patch {
                changed: false,
                version: self.version,
            };
        }
        self.version += 1;
        debug!(
            version = self.version,
            blocks = self.document.len(),
            "content changed"
        );
        self.last_reported = serialized;
        (self.on_change)(&self.last_reported);
        Patch {
            changed: true,
            version: self.version,
        }
    }
}

impl<S: ImageStore + Clone + 'static> EditingSurface<S> {
    /// Hand a newly chosen file to the upload collaborator for an image
    /// block.
    ///
    /// Marks the block busy and returns the transfer future; the host drives
    /// it (alongside any other in-flight transfers) and feeds the resolution
    /// back through [`finish_upload`](Self::finish_upload). Returns `None`,
    /// a defined no-op, when the id is unknown, the block is not an image,
    /// or an upload for that block is already in flight.
    ///
    /// The block's current value is left untouched until the transfer
    /// resolves.
    pub fn begin_upload(&mut self, id: &BlockId, source: UploadSource) -> Option<UploadTransfer> {
        let block_type = self.document.get(id).map(|b| b.kind.block_type())?;
        if block_type != BlockType::Image {
            warn!(block = %id, "upload requested for a non-image block");
            return None;
        }
        if !self.uploading.insert(id.clone()) {
            return None;
        }
        debug!(block = %id, file = %source.file_name, "upload started");
        let store = self.store.clone();
        let block_id = id.clone();
        Some(Box::pin(async move {
            let result = store.upload(source).await;
            UploadOutcome { block_id, result }
        }))
    }

    /// Feed a finished upload back into the surface.
    ///
    /// Success routes the resolved URL through an ordinary update (so the
    /// usual diff-and-notify applies); failure leaves the block exactly as
    /// it was and hands the error back for the host's transient notice. If
    /// the block was deleted while the transfer was in flight, the update is
    /// a no-op like any other unknown-id mutation.
    pub fn finish_upload(&mut self, outcome: UploadOutcome) -> Result<Patch, UploadError> {
        self.uploading.remove(&outcome.block_id);
        match outcome.result {
            Ok(url) => {
                debug!(block = %outcome.block_id, "upload resolved");
                Ok(self.update_block(&outcome.block_id, url, None))
            }
            Err(err) => {
                warn!(block = %outcome.block_id, error = %err, "upload failed");
                Err(err)
            }
        }
    }
}
