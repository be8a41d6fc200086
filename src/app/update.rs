// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Components report what the user asked for through their `Event`s; the
//! handlers here turn those into requests, dialogs and downloads, and feed
//! the answers back into the components.

use super::Message;
use crate::api::{ApiClient, BackendStatus, TextRequest};
use crate::config::Config;
use crate::domain::language::LanguageCatalog;
use crate::domain::mode::Mode;
use crate::domain::upload::{SelectedFile, UploadKind, UploadRejection};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::alert::{self, Alert};
use crate::ui::dispatch::{Completion, Flow, RequestToken, TokenSource};
use crate::ui::notifications::{self, Notification};
use crate::ui::panels::{image, pdf, text};
use crate::ui::{language_bar, status_bar, tabs, upload_zone};
use iced::widget::image::Handle;
use iced::Task;
use std::future::Future;
use std::path::PathBuf;

/// Key prefix of every upload rejection toast.
const UPLOAD_NOTIFICATION_PREFIX: &str = "notification-upload-";

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub api: &'a Result<ApiClient, Error>,
    pub tabs: &'a mut tabs::State,
    pub languages: &'a mut language_bar::State,
    pub text_panel: &'a mut text::State,
    pub image_panel: &'a mut image::State,
    pub pdf_panel: &'a mut pdf::State,
    pub status: &'a mut status_bar::State,
    pub tokens: &'a mut TokenSource,
    pub alerts: &'a mut alert::State,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    /// Runs `request` against the server, or fails right away with the
    /// client construction error.
    fn request<T, F, Fut>(
        &self,
        request: F,
        on_done: impl FnOnce(Result<T, Error>) -> Message + Send + 'static,
    ) -> Task<Message>
    where
        T: Send + 'static,
        F: FnOnce(ApiClient) -> Fut,
        Fut: Future<Output = Result<T, Error>> + Send + 'static,
    {
        match self.api {
            Ok(api) => Task::perform(request(api.clone()), on_done),
            Err(err) => Task::done(on_done(Err(err.clone()))),
        }
    }

    fn max_upload_bytes(&self) -> u64 {
        self.config.upload.max_file_bytes()
    }
}

/// A window drag-and-drop event.
#[derive(Debug, Clone)]
pub enum Drag {
    Entered,
    Left,
    Dropped(PathBuf),
}

pub fn handle_tabs_message(ctx: &mut UpdateContext<'_>, message: tabs::Message) -> Task<Message> {
    ctx.tabs.update(message);
    Task::none()
}

pub fn handle_languages_message(
    ctx: &mut UpdateContext<'_>,
    message: language_bar::Message,
) -> Task<Message> {
    ctx.languages.update(message);
    Task::none()
}

pub fn handle_catalog_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<LanguageCatalog, Error>,
) -> Task<Message> {
    match result {
        Ok(catalog) => ctx.languages.load(catalog, &ctx.config.languages),
        // Lists stay empty; requests go out with empty codes
        Err(err) => tracing::warn!("failed to load language catalog: {err}"),
    }
    Task::none()
}

pub fn handle_backend_status(
    ctx: &mut UpdateContext<'_>,
    result: Result<BackendStatus, Error>,
) -> Task<Message> {
    match result {
        Ok(status) if status.is_ready() => {
            tracing::info!(model = ?status.model, "translation engine ready");
        }
        Ok(BackendStatus { running: false, .. }) => {
            ctx.notifications
                .push(Notification::warning("notification-engine-offline"));
        }
        Ok(status) => {
            ctx.notifications.push(
                Notification::warning("notification-model-not-ready")
                    .with_arg("model", status.model.unwrap_or_default()),
            );
        }
        Err(err) => {
            tracing::warn!("server status check failed: {err}");
            let url = ctx
                .api
                .as_ref()
                .map(|api| api.base_url().to_string())
                .unwrap_or_default();
            ctx.notifications
                .push(Notification::warning("notification-server-unreachable").with_arg("url", url));
        }
    }
    Task::none()
}

// ---------------------------------------------------------------------------
// Text flow
// ---------------------------------------------------------------------------

pub fn handle_text_panel_message(
    ctx: &mut UpdateContext<'_>,
    message: text::Message,
) -> Task<Message> {
    match ctx.text_panel.update(message) {
        text::Event::None => Task::none(),
        text::Event::Translate(text) => dispatch_text(ctx, text),
    }
}

fn dispatch_text(ctx: &mut UpdateContext<'_>, text: String) -> Task<Message> {
    let token = begin(ctx, Flow::Text);
    let selection = ctx.languages.selection();
    let request = TextRequest {
        text,
        source_lang: selection.source_code().to_string(),
        target_lang: selection.target_code().to_string(),
    };

    ctx.request(
        move |api| async move { api.translate_text(&request).await },
        move |result| Message::TextTranslated { token, result },
    )
}

pub fn handle_text_translated(
    ctx: &mut UpdateContext<'_>,
    token: RequestToken,
    result: Result<String, Error>,
) -> Task<Message> {
    ctx.status.hide(token);
    match ctx.text_panel.dispatcher_mut().complete(token, result) {
        Completion::Succeeded(translated) => ctx.text_panel.show_result(&translated),
        Completion::Failed(err) => ctx.alerts.push(Alert::failure(Flow::Text, &err, ctx.i18n)),
    }
    Task::none()
}

// ---------------------------------------------------------------------------
// Image and PDF flows
// ---------------------------------------------------------------------------

pub fn handle_image_panel_message(
    ctx: &mut UpdateContext<'_>,
    message: image::Message,
) -> Task<Message> {
    let max_bytes = ctx.max_upload_bytes();
    match ctx.image_panel.update(message, max_bytes) {
        image::Event::None => Task::none(),
        image::Event::Zone(event) => handle_zone_event(ctx, event),
        image::Event::Translate(file) => dispatch_file(ctx, Flow::Image, file),
        image::Event::Download(url) => open_save_dialog(url),
    }
}

pub fn handle_pdf_panel_message(
    ctx: &mut UpdateContext<'_>,
    message: pdf::Message,
) -> Task<Message> {
    let max_bytes = ctx.max_upload_bytes();
    match ctx.pdf_panel.update(message, max_bytes) {
        pdf::Event::None => Task::none(),
        pdf::Event::Zone(event) => handle_zone_event(ctx, event),
        pdf::Event::Translate(file) => dispatch_file(ctx, Flow::Pdf, file),
        pdf::Event::Download(url) => open_save_dialog(url),
    }
}

fn handle_zone_event(ctx: &mut UpdateContext<'_>, event: upload_zone::Event) -> Task<Message> {
    match event {
        upload_zone::Event::None => Task::none(),
        upload_zone::Event::OpenDialog(kind) => open_browse_dialog(ctx.i18n, kind),
        upload_zone::Event::Selected(_) => {
            ctx.notifications.clear_with_prefix(UPLOAD_NOTIFICATION_PREFIX);
            Task::none()
        }
        upload_zone::Event::Rejected(rejection) => {
            ctx.notifications.push(rejection_notification(&rejection));
            Task::none()
        }
    }
}

fn rejection_notification(rejection: &UploadRejection) -> Notification {
    let notification = Notification::warning(rejection.i18n_key());
    match rejection {
        UploadRejection::NotAFile => notification,
        UploadRejection::UnsupportedExtension { extension } => {
            notification.with_arg("extension", extension.as_str())
        }
        UploadRejection::TooLarge {
            size_bytes,
            max_bytes,
        } => notification
            .with_arg("size", format_megabytes(*size_bytes))
            .with_arg("max", format_megabytes(*max_bytes)),
    }
}

fn format_megabytes(bytes: u64) -> String {
    format!("{:.1}", bytes as f64 / (1024.0 * 1024.0))
}

fn open_browse_dialog(i18n: &I18n, kind: UploadKind) -> Task<Message> {
    let (title_key, filter_key) = match kind {
        UploadKind::Image => ("dialog-open-image-title", "dialog-filter-images"),
        UploadKind::Pdf => ("dialog-open-pdf-title", "dialog-filter-pdf"),
    };
    let title = i18n.tr(title_key);
    let filter_name = i18n.tr(filter_key);

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(&filter_name, kind.extensions())
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        move |path| zone_message(kind, upload_zone::Message::Browsed(path)),
    )
}

/// Wraps a zone message for the panel that owns zones of `kind`.
fn zone_message(kind: UploadKind, message: upload_zone::Message) -> Message {
    match kind {
        UploadKind::Image => Message::ImagePanel(image::Message::Zone(message)),
        UploadKind::Pdf => Message::PdfPanel(pdf::Message::Zone(message)),
    }
}

fn dispatch_file(ctx: &mut UpdateContext<'_>, flow: Flow, file: SelectedFile) -> Task<Message> {
    let token = begin(ctx, flow);
    let selection = ctx.languages.selection();
    let source_lang = selection.source_code().to_string();
    let target_lang = selection.target_code().to_string();

    ctx.request(
        move |api| async move { api.translate_file(&file, &source_lang, &target_lang).await },
        move |result| Message::FileTranslated {
            flow,
            token,
            result,
        },
    )
}

pub fn handle_file_translated(
    ctx: &mut UpdateContext<'_>,
    flow: Flow,
    token: RequestToken,
    result: Result<String, Error>,
) -> Task<Message> {
    ctx.status.hide(token);
    let dispatcher = match flow {
        Flow::Image => ctx.image_panel.dispatcher_mut(),
        Flow::Pdf => ctx.pdf_panel.dispatcher_mut(),
        Flow::Text => {
            tracing::error!(?token, "text answer routed as a file answer");
            return Task::none();
        }
    };

    match dispatcher.complete(token, result) {
        Completion::Succeeded(url) => match flow {
            Flow::Image => {
                ctx.image_panel.show_result(url.clone());
                fetch_preview(ctx, url)
            }
            _ => {
                ctx.pdf_panel.show_result(url);
                Task::none()
            }
        },
        Completion::Failed(err) => {
            ctx.alerts.push(Alert::failure(flow, &err, ctx.i18n));
            Task::none()
        }
    }
}

fn fetch_preview(ctx: &UpdateContext<'_>, url: String) -> Task<Message> {
    let fetch_url = url.clone();
    ctx.request(
        move |api| async move { api.fetch_bytes(&fetch_url).await.map(Handle::from_bytes) },
        move |result| Message::PreviewLoaded { url, result },
    )
}

pub fn handle_preview_loaded(
    ctx: &mut UpdateContext<'_>,
    url: &str,
    result: Result<Handle, Error>,
) -> Task<Message> {
    let preview = match result {
        Ok(handle) => image::Preview::Ready(handle),
        Err(err) => {
            tracing::warn!(url, "preview unavailable: {err}");
            image::Preview::Unavailable
        }
    };
    ctx.image_panel.set_preview(url, preview);
    Task::none()
}

// ---------------------------------------------------------------------------
// Downloads
// ---------------------------------------------------------------------------

fn open_save_dialog(url: String) -> Task<Message> {
    let file_name = suggested_file_name(&url);
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_file_name(&file_name)
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        move |path| Message::SaveDialogResult { url, path },
    )
}

/// Last path segment of the download URL, without any query string.
fn suggested_file_name(url: &str) -> String {
    url.split(['?', '#'])
        .next()
        .and_then(|path| path.rsplit('/').find(|segment| !segment.is_empty()))
        .unwrap_or("translated")
        .to_string()
}

pub fn handle_save_dialog_result(
    ctx: &mut UpdateContext<'_>,
    url: String,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    ctx.request(
        move |api| async move { api.download_to(&url, &path).await.map(|_| path) },
        Message::DownloadCompleted,
    )
}

pub fn handle_download_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    let notification = match result {
        Ok(path) => Notification::success("notification-download-success")
            .with_arg("path", path.display().to_string()),
        Err(err) => {
            Notification::error("notification-download-error").with_arg("error", err.to_string())
        }
    };
    ctx.notifications.push(notification);
    Task::none()
}

// ---------------------------------------------------------------------------
// Window drag-and-drop
// ---------------------------------------------------------------------------

/// Routes a window drag event to the upload zone of the visible tab.
/// The text tab has no zone, so drops there are ignored, as are drops
/// while the alert is open.
pub fn handle_drag_event(ctx: &mut UpdateContext<'_>, drag: Drag) -> Task<Message> {
    if ctx.alerts.current().is_some() {
        tracing::debug!(?drag, "drag event ignored while the alert is open");
        return Task::none();
    }

    let message = match drag {
        Drag::Entered => upload_zone::Message::DragEntered,
        Drag::Left => upload_zone::Message::DragLeft,
        Drag::Dropped(path) => upload_zone::Message::Dropped(path),
    };

    match ctx.tabs.active() {
        Mode::Text => Task::none(),
        Mode::Image => handle_image_panel_message(ctx, image::Message::Zone(message)),
        Mode::Pdf => handle_pdf_panel_message(ctx, pdf::Message::Zone(message)),
    }
}

/// Issues a token for `flow`, marks the flow busy and shows its status.
fn begin(ctx: &mut UpdateContext<'_>, flow: Flow) -> RequestToken {
    let token = ctx.tokens.issue();
    let dispatcher = match flow {
        Flow::Text => ctx.text_panel.dispatcher_mut(),
        Flow::Image => ctx.image_panel.dispatcher_mut(),
        Flow::Pdf => ctx.pdf_panel.dispatcher_mut(),
    };
    dispatcher.begin(token);
    ctx.status.show(token, ctx.i18n.tr(flow.status_key()));
    token
}
