use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::editing::document::BlockId;

/// Transfer future handed to the host to drive, possibly alongside other
/// in-flight transfers; resolves to the outcome to feed back into the
/// surface.
pub type UploadTransfer = Pin<Box<dyn Future<Output = UploadOutcome>>>;

/// A file chosen in the editor, ready to hand to the upload collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSource {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadSource {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The collaborator could not store the file. Shown to the author as a
    /// transient, dismissible notice; the block keeps its previous value.
    #[error("image upload failed: {0}")]
    Transfer(String),
}

/// Upload collaborator: stores an image and yields its public URL.
///
/// One async call per file; the engine does not retry on failure. Hosts
/// implement this against whatever storage issues their URLs.
pub trait ImageStore {
    fn upload(&self, source: UploadSource) -> impl Future<Output = Result<String, UploadError>> + Send;
}

/// Resolution of one upload, fed back into the surface on its thread of
/// control via [`EditingSurface::finish_upload`].
///
/// [`EditingSurface::finish_upload`]: crate::editing::EditingSurface::finish_upload
#[derive(Debug)]
pub struct UploadOutcome {
    pub(crate) block_id: BlockId,
    pub(crate) result: Result<String, UploadError>,
}

impl UploadOutcome {
    /// The block this upload belongs to.
    pub fn block_id(&self) -> &BlockId {
        &self.block_id
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}
