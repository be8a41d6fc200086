// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`language`]: Language catalog and selection ([`LanguageCatalog`](language::LanguageCatalog),
//!   [`LanguageSelection`](language::LanguageSelection))
//! - [`mode`]: Tab modes ([`Mode`](mode::Mode))
//! - [`upload`]: Upload zone rules ([`UploadKind`](upload::UploadKind),
//!   [`SelectedFile`](upload::SelectedFile))

pub mod language;
pub mod mode;
pub mod upload;
