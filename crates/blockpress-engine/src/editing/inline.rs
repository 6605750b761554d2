/// Capability the paragraph block delegates inline formatting to.
///
/// The engine never interprets paragraph markup: whatever the formatter
/// produces for the span being edited is stored opaquely and later emitted
/// directly by the renderer. Hosts plug in their rich-text engine here;
/// bold/italic/link/list/quote handling all live behind this seam.
pub trait InlineFormatter {
    /// Produce inline-formatted markup for the text span currently being
    /// edited.
    fn markup(&self, span: &str) -> String;
}

/// Passthrough formatter for hosts without a rich-text engine: plain text
/// in, plain text out.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainText;

impl InlineFormatter for PlainText {
    fn markup(&self, span: &str) -> String {
        span.to_string()
    }
}
