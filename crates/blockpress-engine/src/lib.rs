pub mod editing;
pub mod io;
pub mod media;
pub mod render;

// Re-export key types for easier usage
pub use editing::{commands::*, document::*, inline::*, patch::*, surface::*, upload::*};
pub use media::{focal::*, video::*};
pub use render::*;
