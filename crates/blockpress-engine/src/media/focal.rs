use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Stored form of "no explicit focal point chosen".
const CENTER: &str = "center center";

/// Where a cover-cropped image stays anchored when it is displayed at a
/// different aspect ratio than the source.
///
/// Persisted as a sibling string field next to the record's lead image:
/// either the sentinel `"center center"` or `"{x}% {y}%"` with whole
/// percentages in `[0, 100]`. Anything else found in storage is treated as
/// the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocalPoint {
    /// No explicit choice; renderers center the crop.
    #[default]
    Center,
    /// Percent offsets from the top-left corner of the image.
    At { x: u8, y: u8 },
}

/// Pixel bounding box of the image preview the editor clicks within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl FocalPoint {
    /// Focal point for a click at `(x, y)`, in the same coordinate space as
    /// `bounds`, rounded to whole percentages.
    pub fn from_click(x: f64, y: f64, bounds: PreviewBounds) -> Self {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return FocalPoint::Center;
        }
        let px = (100.0 * (x - bounds.left) / bounds.width).round();
        let py = (100.0 * (y - bounds.top) / bounds.height).round();
        FocalPoint::At {
            x: clamp_percent(px),
            y: clamp_percent(py),
        }
    }

    /// Read a stored coordinate; values that are neither the two-percent
    /// form nor the sentinel come back as [`FocalPoint::Center`].
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == CENTER {
            return FocalPoint::Center;
        }
        let Some((x, y)) = raw.split_once(' ') else {
            return FocalPoint::Center;
        };
        match (parse_percent(x), parse_percent(y)) {
            (Some(x), Some(y)) => FocalPoint::At { x, y },
            _ => FocalPoint::Center,
        }
    }
}

fn clamp_percent(value: f64) -> u8 {
    value.clamp(0.0, 100.0) as u8
}

fn parse_percent(part: &str) -> Option<u8> {
    let digits = part.strip_suffix('%')?;
    let value: u8 = digits.parse().ok()?;
    (value <= 100).then_some(value)
}

impl fmt::Display for FocalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocalPoint::Center => f.write_str(CENTER),
            FocalPoint::At { x, y } => write!(f, "{x}% {y}%"),
        }
    }
}

impl Serialize for FocalPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FocalPoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(FocalPoint::parse(&raw))
    }
}
