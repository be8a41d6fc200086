// SPDX-License-Identifier: MPL-2.0
//! Internationalization support using Fluent.
//!
//! - Locale resolution from CLI flag, config file, or system settings
//! - Translations embedded from `assets/i18n/*.ftl`
//! - Fallback to the default locale when translations are missing

pub mod fluent;
