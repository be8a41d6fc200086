// SPDX-License-Identifier: MPL-2.0
//! Content of the three tabs.
//!
//! Each panel owns its inputs, its result area and the [`Dispatcher`] of its
//! flow. Panels never talk to the network: they emit events and the
//! application turns those into requests.
//!
//! [`Dispatcher`]: crate::ui::dispatch::Dispatcher

pub mod image;
pub mod pdf;
pub mod text;

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Button, Text};

/// Submit button shared by the panels, disabled when `on_press` is `None`.
fn submit_button<'a, M: Clone + 'a>(i18n: &I18n, key: &str, on_press: Option<M>) -> Button<'a, M> {
    button(Text::new(i18n.tr(key)).size(typography::BODY_LG))
        .on_press_maybe(on_press)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
}

/// "Download" link under a translated file.
fn download_button<'a, M: Clone + 'a>(i18n: &I18n, on_press: M) -> Button<'a, M> {
    button(Text::new(format!("⬇ {}", i18n.tr("result-download"))).size(typography::BODY))
        .on_press(on_press)
        .padding(0)
        .style(styles::button::link)
}
