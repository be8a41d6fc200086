// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only window drag-and-drop events are routed; the widgets handle their
//! own keyboard and mouse input.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Forwards file drag-and-drop events from the window.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::FileHovered(_)) => Some(Message::FilesHovered),
        event::Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    })
}

/// Ticks while toasts are on screen so they can expire.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(250)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
