// SPDX-License-Identifier: MPL-2.0
//! `iced_translator` is a desktop client for a self-hosted translation
//! server, built with the Iced GUI framework.
//!
//! It translates free text, images and PDF documents through the server's
//! HTTP API, with Fluent localization and TOML preferences.

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
