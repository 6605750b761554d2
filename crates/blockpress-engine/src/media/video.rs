use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Host used for embed frames unless the site configures another one.
pub const DEFAULT_EMBED_HOST: &str = "www.youtube.com";

/// Canonical 11-character identifier for an externally hosted video.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Player-frame URL for this video on the given embed host.
    pub fn embed_url(&self, host: &str) -> String {
        format!("https://{}/embed/{}", host, self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn video_url_regex() -> &'static Regex {
    // Recognizes the short-link, raw-ID path, user-channel, embed-path,
    // watch?v= and secondary &v= URL shapes, capturing the trailing segment.
    static VIDEO_URL_REGEX: OnceLock<Regex> = OnceLock::new();
    VIDEO_URL_REGEX.get_or_init(|| {
        Regex::new(r"(?:youtu\.be/|/v/|/u/\w/|/embed/|watch\?v=|&v=)([^#&?]*)")
            .expect("Invalid video URL regex")
    })
}

/// Extract the canonical video identifier from a raw URL, if one is present.
///
/// The capture is accepted only when it is exactly 11 characters long.
/// `None` is the expected state while an author is still typing the URL;
/// callers treat it as "nothing to preview yet", never as an error.
pub fn parse_video_id(url: &str) -> Option<VideoId> {
    let captures = video_url_regex().captures(url)?;
    let id = captures.get(1)?.as_str();
    (id.len() == 11).then(|| VideoId(id.to_string()))
}
