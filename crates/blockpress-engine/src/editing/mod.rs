/*!
 * # Editing Core Module
 *
 * The editing system that backs the admin-side content editor:
 *
 * ### 1. Single Source of Truth: the block list
 * - One record's content lives in a single [`ContentDocument`], an ordered
 *   list of blocks normalized once from whatever the record stores
 * - Legacy freeform content is wrapped, never rejected, so old records stay
 *   editable without a storage migration
 *
 * ### 2. Command-Based Editing
 * - All edits are represented as **Commands** (`Cmd` enum) applied
 *   synchronously against the block list
 * - Unknown ids and boundary moves are defined no-ops, not errors
 *
 * ### 3. Change Notification
 * - The [`EditingSurface`] re-serializes after every mutation and invokes the
 *   host callback only when the canonical form actually differs from the last
 *   value it reported
 * - The host owns persistence; the surface never writes storage itself
 *
 * ### 4. Asynchronous Image Upload
 * - Image files are handed to an [`ImageStore`] collaborator; the resolved
 *   URL is routed back through an ordinary update command
 * - A failed transfer leaves the block exactly as it was
 *
 * ## Module Structure
 *
 * - **`document`**: block model, `ContentDocument`, and stored-content
 *   normalization
 * - **`commands`**: `Cmd` enum and its application logic
 * - **`surface`**: host-facing surface with change notification and uploads
 * - **`inline`**: delegation boundary toward the inline rich-text editor
 * - **`upload`**: upload collaborator trait and outcome types
 * - **`patch`**: edit result metadata
 */

pub mod commands;
pub mod document;
pub mod inline;
pub mod patch;
pub mod surface;
pub mod upload;

// Public API re-exports
pub use commands::{Cmd, Direction};
pub use document::{Block, BlockId, BlockKind, BlockType, ContentDocument, LEGACY_BLOCK_ID};
pub use inline::{InlineFormatter, PlainText};
pub use patch::Patch;
pub use surface::EditingSurface;
pub use upload::{ImageStore, UploadError, UploadOutcome, UploadSource, UploadTransfer};
