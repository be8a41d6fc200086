// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::BackendStatus;
use crate::domain::language::LanguageCatalog;
use crate::error::Error;
use crate::ui::dispatch::{Flow, RequestToken};
use crate::ui::notifications;
use crate::ui::panels::{image, pdf, text};
use crate::ui::{alert, language_bar, tabs};
use iced::widget::image::Handle;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded; the rest are results of asynchronous work and window events.
#[derive(Debug, Clone)]
pub enum Message {
    Tabs(tabs::Message),
    Languages(language_bar::Message),
    TextPanel(text::Message),
    ImagePanel(image::Message),
    PdfPanel(pdf::Message),
    Alert(alert::Message),
    Notification(notifications::NotificationMessage),
    CatalogLoaded(Result<LanguageCatalog, Error>),
    BackendStatusChecked(Result<BackendStatus, Error>),
    TextTranslated {
        token: RequestToken,
        result: Result<String, Error>,
    },
    /// An image or PDF translation answered with a download URL.
    FileTranslated {
        flow: Flow,
        token: RequestToken,
        result: Result<String, Error>,
    },
    PreviewLoaded {
        url: String,
        result: Result<Handle, Error>,
    },
    /// The save dialog for a translated file closed; `None` when cancelled.
    SaveDialogResult {
        url: String,
        path: Option<PathBuf>,
    },
    DownloadCompleted(Result<PathBuf, Error>),
    /// Files are being dragged over the window.
    FilesHovered,
    FilesHoveredLeft,
    FileDropped(PathBuf),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional server URL, taking precedence over `[server] base_url`.
    pub server: Option<String>,
}
