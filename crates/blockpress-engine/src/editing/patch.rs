/// Result of applying a command through the editing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Whether the canonical serialization actually changed (and the host
    /// was notified).
    pub changed: bool,
    /// Count of effective edits since the surface was constructed.
    pub version: u64,
}
