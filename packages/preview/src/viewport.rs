use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Simulated device class for previews
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    /// Mobile: 375x667 (iPhone SE)
    Mobile,

    /// Tablet: 768x1024 (iPad)
    Tablet,

    /// Desktop: fluid width
    #[default]
    Desktop,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid viewport: {0}. Use: mobile, tablet, or desktop")]
pub struct ViewportParseError(pub String);

impl Viewport {
    pub const ALL: [Viewport; 3] = [Viewport::Mobile, Viewport::Tablet, Viewport::Desktop];

    /// Reference size in CSS pixels; `None` for the fluid desktop frame
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            Viewport::Mobile => Some((375, 667)),
            Viewport::Tablet => Some((768, 1024)),
            Viewport::Desktop => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Viewport::Mobile => "mobile",
            Viewport::Tablet => "tablet",
            Viewport::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Viewport {
    type Err = ViewportParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(Viewport::Mobile),
            "tablet" => Ok(Viewport::Tablet),
            "desktop" => Ok(Viewport::Desktop),
            _ => Err(ViewportParseError(s.to_string())),
        }
    }
}
