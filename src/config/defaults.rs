// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Server**: Backend location
//! - **Languages**: Initial pick list selections
//! - **Upload**: File size limit

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Base URL of the translation server when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

// ==========================================================================
// Language Defaults
// ==========================================================================

/// Source language selected after the catalog loads.
pub const DEFAULT_SOURCE_LANG: &str = crate::domain::language::AUTO_DETECT;

/// Target language selected after the catalog loads.
pub const DEFAULT_TARGET_LANG: &str = "zh-TW";

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Maximum upload size accepted by the server, in megabytes.
pub const DEFAULT_MAX_FILE_MB: u32 = 50;

/// Smallest configurable upload limit.
pub const MIN_MAX_FILE_MB: u32 = 1;

/// Largest configurable upload limit.
pub const MAX_MAX_FILE_MB: u32 = 1024;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_FILE_MB > 0);
    assert!(MAX_MAX_FILE_MB >= MIN_MAX_FILE_MB);
    assert!(DEFAULT_MAX_FILE_MB >= MIN_MAX_FILE_MB);
    assert!(DEFAULT_MAX_FILE_MB <= MAX_MAX_FILE_MB);
};
