/// Shared types used across the codebase

use serde::{Deserialize, Serialize};

/// Content kinds recognized by the CMS surface.
/// Wire values are SCREAMING_SNAKE_CASE (`BOX`, `PAGE`, `IMAGE`, `FILE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentKind {
    Box,
    Page,
    Image,
    File,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Box => "BOX",
            ContentKind::Page => "PAGE",
            ContentKind::Image => "IMAGE",
            ContentKind::File => "FILE",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
