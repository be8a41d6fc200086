// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns a `State`, handles its `Message`s and reports `Event`s to the app.
//!
//! # Components
//!
//! - [`tabs`] - Text/Image/PDF tab strip
//! - [`language_bar`] - Source and target pick lists with swap
//! - [`upload_zone`] - Drag-and-drop target and file browser
//! - [`panels`] - Content of each tab
//! - [`status_bar`] - Busy indicator owned by the latest request
//! - [`alert`] - Blocking failure alert
//! - [`notifications`] - Toast notification system
//!
//! # Shared Infrastructure
//!
//! - [`dispatch`] - Request state machine shared by the three flows
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod alert;
pub mod design_tokens;
pub mod dispatch;
pub mod language_bar;
pub mod notifications;
pub mod panels;
pub mod status_bar;
pub mod styles;
pub mod tabs;
pub mod theming;
pub mod upload_zone;
