// SPDX-License-Identifier: MPL-2.0
//! Language catalog and the source/target selection.

use std::fmt;

/// Code the server understands as "detect the source language".
pub const AUTO_DETECT: &str = "auto";

/// One selectable language: the code sent to the server and its display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn is_auto_detect(&self) -> bool {
        self.code == AUTO_DETECT
    }
}

/// Pick lists render the display name.
impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Source and target languages offered by the server, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageCatalog {
    pub source: Vec<Language>,
    pub target: Vec<Language>,
}

impl LanguageCatalog {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty() && self.target.is_empty()
    }

    #[must_use]
    pub fn find_source(&self, code: &str) -> Option<&Language> {
        self.source.iter().find(|lang| lang.code == code)
    }

    #[must_use]
    pub fn find_target(&self, code: &str) -> Option<&Language> {
        self.target.iter().find(|lang| lang.code == code)
    }
}

/// The two pick list selections.
///
/// A side is `None` when nothing valid is selected, which is sent to the
/// server as an empty code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageSelection {
    pub source: Option<Language>,
    pub target: Option<Language>,
}

impl LanguageSelection {
    /// Selects the default codes, leaving a side empty when its code is not
    /// in the catalog.
    #[must_use]
    pub fn with_defaults(catalog: &LanguageCatalog, source: &str, target: &str) -> Self {
        Self {
            source: catalog.find_source(source).cloned(),
            target: catalog.find_target(target).cloned(),
        }
    }

    #[must_use]
    pub fn source_code(&self) -> &str {
        self.source.as_ref().map_or("", |lang| lang.code.as_str())
    }

    #[must_use]
    pub fn target_code(&self) -> &str {
        self.target.as_ref().map_or("", |lang| lang.code.as_str())
    }

    #[must_use]
    pub fn is_auto_detect(&self) -> bool {
        self.source.as_ref().is_some_and(Language::is_auto_detect)
    }

    /// Exchanges source and target.
    ///
    /// Does nothing when the source is auto-detect, which is not a valid
    /// target. A code missing from the other side's catalog leaves that side
    /// unselected. Returns whether anything changed.
    pub fn swap(&mut self, catalog: &LanguageCatalog) -> bool {
        if self.is_auto_detect() {
            return false;
        }

        let new_source = catalog.find_source(self.target_code()).cloned();
        let new_target = catalog.find_target(self.source_code()).cloned();
        self.source = new_source;
        self.target = new_target;
        true
    }
}
