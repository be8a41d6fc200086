// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the panels and the
//! translation server.
//!
//! The `App` struct wires together the components (tabs, language bar,
//! panels, status bar, alert, toasts) and translates their events into
//! side effects: HTTP requests, file dialogs and downloads.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::ApiClient;
use crate::config::{self, defaults, Config};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::dispatch::TokenSource;
use crate::ui::notifications::{self, Notification};
use crate::ui::panels::{image, pdf, text};
use crate::ui::status_bar;
use crate::ui::theming::ThemeMode;
use crate::ui::{alert, language_bar, tabs};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// `Err` when no usable server URL could be built; requests then fail
    /// with that error instead of reaching the network.
    api: Result<ApiClient, Error>,
    theme_mode: ThemeMode,
    tabs: tabs::State,
    languages: language_bar::State,
    text_panel: text::State,
    image_panel: image::State,
    pdf_panel: pdf::State,
    status: status_bar::State,
    tokens: TokenSource,
    alerts: alert::State,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_tab", &self.tabs.active())
            .field("server", &self.api.as_ref().map(|api| api.base_url().as_str()))
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; the flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        Self::boot(config, i18n, flags.server, config_warning)
    }

    /// Builds the initial state from already loaded settings and starts the
    /// language catalog and backend status requests.
    pub(crate) fn boot(
        config: Config,
        i18n: I18n,
        server_override: Option<String>,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let server_url = server_override.unwrap_or_else(|| config.server.base_url.clone());
        let api = ApiClient::new(&server_url).or_else(|err| {
            tracing::warn!(url = %server_url, "unusable server URL: {err}");
            notifications.push(
                Notification::warning("notification-server-url-invalid").with_arg("url", &server_url),
            );
            ApiClient::new(defaults::DEFAULT_SERVER_URL)
        });
        if let Ok(api) = &api {
            tracing::info!(server = %api.base_url(), "translation server");
        }

        let app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            api,
            tabs: tabs::State::new(),
            languages: language_bar::State::new(),
            text_panel: text::State::new(),
            image_panel: image::State::new(),
            pdf_panel: pdf::State::new(),
            status: status_bar::State::new(),
            tokens: TokenSource::new(),
            alerts: alert::State::new(),
            notifications,
        };

        let task = match &app.api {
            Ok(api) => {
                let catalog_api = api.clone();
                let status_api = api.clone();
                Task::batch([
                    Task::perform(
                        async move { catalog_api.languages().await },
                        Message::CatalogLoaded,
                    ),
                    Task::perform(
                        async move { status_api.backend_status().await },
                        Message::BackendStatusChecked,
                    ),
                ])
            }
            Err(err) => Task::done(Message::CatalogLoaded(Err(err.clone()))),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            config: &self.config,
            api: &self.api,
            tabs: &mut self.tabs,
            languages: &mut self.languages,
            text_panel: &mut self.text_panel,
            image_panel: &mut self.image_panel,
            pdf_panel: &mut self.pdf_panel,
            status: &mut self.status,
            tokens: &mut self.tokens,
            alerts: &mut self.alerts,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Tabs(message) => update::handle_tabs_message(&mut ctx, message),
            Message::Languages(message) => update::handle_languages_message(&mut ctx, message),
            Message::TextPanel(message) => update::handle_text_panel_message(&mut ctx, message),
            Message::ImagePanel(message) => update::handle_image_panel_message(&mut ctx, message),
            Message::PdfPanel(message) => update::handle_pdf_panel_message(&mut ctx, message),
            Message::Alert(message) => {
                ctx.alerts.update(message);
                Task::none()
            }
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::CatalogLoaded(result) => update::handle_catalog_loaded(&mut ctx, result),
            Message::BackendStatusChecked(result) => {
                update::handle_backend_status(&mut ctx, result)
            }
            Message::TextTranslated { token, result } => {
                update::handle_text_translated(&mut ctx, token, result)
            }
            Message::FileTranslated {
                flow,
                token,
                result,
            } => update::handle_file_translated(&mut ctx, flow, token, result),
            Message::PreviewLoaded { url, result } => {
                update::handle_preview_loaded(&mut ctx, &url, result)
            }
            Message::SaveDialogResult { url, path } => {
                update::handle_save_dialog_result(&mut ctx, url, path)
            }
            Message::DownloadCompleted(result) => {
                update::handle_download_completed(&mut ctx, result)
            }
            Message::FilesHovered => update::handle_drag_event(&mut ctx, update::Drag::Entered),
            Message::FilesHoveredLeft => update::handle_drag_event(&mut ctx, update::Drag::Left),
            Message::FileDropped(path) => {
                update::handle_drag_event(&mut ctx, update::Drag::Dropped(path))
            }
            Message::Tick(now) => {
                ctx.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            tabs: &self.tabs,
            languages: &self.languages,
            text_panel: &self.text_panel,
            image_panel: &self.image_panel,
            pdf_panel: &self.pdf_panel,
            status: &self.status,
            alerts: &self.alerts,
            notifications: &self.notifications,
        })
    }
}
