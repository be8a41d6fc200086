// SPDX-License-Identifier: MPL-2.0
//! Translation modes, one per tab.

/// The active input mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Text,
    Image,
    Pdf,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Text, Mode::Image, Mode::Pdf];

    /// Short tag identifying the mode (`text`, `image`, `pdf`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Mode::Text => "text",
            Mode::Image => "image",
            Mode::Pdf => "pdf",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_distinct() {
        assert_ne!(Mode::Text.tag(), Mode::Image.tag());
        assert_ne!(Mode::Image.tag(), Mode::Pdf.tag());
    }
}
