//! Reference renderer for the public site: turns a stored content document
//! back into display markup.
//!
//! The persisted block array is the whole contract between the editor and
//! this side; anything that can read it can render it. `HtmlRenderer` is the
//! implementation the bundled tooling uses; hosts with their own templating
//! implement [`DocumentRenderer`] over the same document instead.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::editing::document::{Block, BlockKind, ContentDocument};
use crate::media::focal::FocalPoint;
use crate::media::video::{DEFAULT_EMBED_HOST, parse_video_id};

/// Read-only consumer of a content document.
pub trait DocumentRenderer {
    type Output;

    fn render(&self, document: &ContentDocument) -> Self::Output;
}

/// Renders a content document to display HTML.
///
/// Per-block behavior:
/// - headings become section headings with their text escaped
/// - paragraph markup is emitted directly: it is the trusted output of the
///   delegated inline editor and is never re-escaped here (the legacy
///   wrapped paragraph renders as plain body text through the same path)
/// - images render with the caption as alt text; an image with no URL yet
///   renders nothing at all
/// - videos render as an embed frame in a 16:9 box when an identifier can
///   be extracted, and nothing otherwise
///
/// An empty document renders as empty output. Blocks whose value is empty
/// render as empty elements at their position rather than being dropped,
/// except the image case above.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    embed_host: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            embed_host: DEFAULT_EMBED_HOST.to_string(),
        }
    }

    /// Use a different embed host for video frames (e.g. the no-cookie one).
    pub fn with_embed_host(host: impl Into<String>) -> Self {
        Self {
            embed_host: host.into(),
        }
    }

    /// `object-position` declaration honoring a record's stored focal point
    /// on its cover-fit lead image.
    pub fn lead_image_style(focal: &FocalPoint) -> String {
        format!("object-fit: cover; object-position: {focal};")
    }

    fn render_block(&self, block: &Block, out: &mut String) {
        match &block.kind {
            BlockKind::Heading { value } => {
                out.push_str("<h2>");
                out.push_str(&encode_text(value));
                out.push_str("</h2>\n");
            }
            BlockKind::Paragraph { value } => {
                out.push_str("<div class=\"rich-text\">");
                out.push_str(value);
                out.push_str("</div>\n");
            }
            BlockKind::Image { value, caption } => {
                if value.is_empty() {
                    return;
                }
                let caption = caption.as_deref().unwrap_or("");
                out.push_str("<figure><img src=\"");
                out.push_str(&encode_double_quoted_attribute(value));
                out.push_str("\" alt=\"");
                out.push_str(&encode_double_quoted_attribute(caption));
                out.push_str("\">");
                if !caption.is_empty() {
                    out.push_str("<figcaption>");
                    out.push_str(&encode_text(caption));
                    out.push_str("</figcaption>");
                }
                out.push_str("</figure>\n");
            }
            BlockKind::Video { value } => {
                let Some(id) = parse_video_id(value) else {
                    return;
                };
                out.push_str("<div class=\"video-frame\" style=\"aspect-ratio: 16 / 9;\">");
                out.push_str("<iframe src=\"");
                out.push_str(&encode_double_quoted_attribute(&id.embed_url(&self.embed_host)));
                out.push_str("\" title=\"Video player\" allowfullscreen></iframe></div>\n");
            }
        }
    }
}

impl DocumentRenderer for HtmlRenderer {
    type Output = String;

    fn render(&self, document: &ContentDocument) -> String {
        let mut out = String::new();
        for block in document.blocks() {
            self.render_block(block, &mut out);
        }
        out
    }
}
