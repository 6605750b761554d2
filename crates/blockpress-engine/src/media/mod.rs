//! Shared media helpers used by both the editor and the public renderer:
//! external-video reference parsing and focal point coordinates.

pub mod focal;
pub mod video;

pub use focal::{FocalPoint, PreviewBounds};
pub use video::{DEFAULT_EMBED_HOST, VideoId, parse_video_id};
