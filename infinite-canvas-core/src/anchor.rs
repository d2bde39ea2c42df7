use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Alignment along a single axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
}

impl Align {
    /// Fraction of the extent at which the alignment point sits (0, ½ or 1).
    pub fn factor(self) -> f64 {
        match self {
            Align::Start => 0.0,
            Align::Center => 0.5,
            Align::End => 1.0,
        }
    }
}

/// One of the nine named alignment points of a rectangle.
///
/// Used both to place overlays inside the viewport and to choose which point of a
/// navigation target is aligned with the same point of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorPosition {
    TopLeft,
    #[default]
    TopCenter,
    TopRight,
    CenterLeft,
    CenterCenter,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl AnchorPosition {
    pub const ALL: [AnchorPosition; 9] = [
        AnchorPosition::TopLeft,
        AnchorPosition::TopCenter,
        AnchorPosition::TopRight,
        AnchorPosition::CenterLeft,
        AnchorPosition::CenterCenter,
        AnchorPosition::CenterRight,
        AnchorPosition::BottomLeft,
        AnchorPosition::BottomCenter,
        AnchorPosition::BottomRight,
    ];

    pub fn horizontal(self) -> Align {
        match self {
            AnchorPosition::TopLeft | AnchorPosition::CenterLeft | AnchorPosition::BottomLeft => {
                Align::Start
            }
            AnchorPosition::TopCenter
            | AnchorPosition::CenterCenter
            | AnchorPosition::BottomCenter => Align::Center,
            AnchorPosition::TopRight
            | AnchorPosition::CenterRight
            | AnchorPosition::BottomRight => Align::End,
        }
    }

    pub fn vertical(self) -> Align {
        match self {
            AnchorPosition::TopLeft | AnchorPosition::TopCenter | AnchorPosition::TopRight => {
                Align::Start
            }
            AnchorPosition::CenterLeft
            | AnchorPosition::CenterCenter
            | AnchorPosition::CenterRight => Align::Center,
            AnchorPosition::BottomLeft
            | AnchorPosition::BottomCenter
            | AnchorPosition::BottomRight => Align::End,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnchorPosition::TopLeft => "top-left",
            AnchorPosition::TopCenter => "top-center",
            AnchorPosition::TopRight => "top-right",
            AnchorPosition::CenterLeft => "center-left",
            AnchorPosition::CenterCenter => "center-center",
            AnchorPosition::CenterRight => "center-right",
            AnchorPosition::BottomLeft => "bottom-left",
            AnchorPosition::BottomCenter => "bottom-center",
            AnchorPosition::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for AnchorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnchorPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnchorPosition::ALL
            .into_iter()
            .find(|anchor| anchor.as_str() == s)
            .ok_or_else(|| format!("Unknown anchor position: {s}"))
    }
}
