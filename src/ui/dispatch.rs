// SPDX-License-Identifier: MPL-2.0
//! Request dispatch state machine shared by the three translation flows.
//!
//! Each flow walks `Idle -> Busy -> {Succeeded | Failed} -> Idle`:
//!
//! - [`Dispatcher::begin`] moves to `Busy` for a freshly issued token.
//! - [`Dispatcher::complete`] records the outcome of one request and returns
//!   it for rendering, then settles back to `Idle` once the most recent
//!   request of the flow has answered.
//!
//! Flows never block each other and a request is never cancelled. When the
//! same flow is triggered again while busy, every answer is still rendered
//! in arrival order (last write wins).

use crate::error::Error;

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Hands out strictly increasing request tokens.
#[derive(Debug, Default)]
pub struct TokenSource {
    next: u64,
}

impl TokenSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestToken {
        self.next += 1;
        RequestToken(self.next)
    }
}

/// The three translation flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Text,
    Image,
    Pdf,
}

impl Flow {
    /// i18n key of the status message shown while busy.
    #[must_use]
    pub fn status_key(self) -> &'static str {
        match self {
            Flow::Text => "status-translating-text",
            Flow::Image => "status-translating-image",
            Flow::Pdf => "status-translating-pdf",
        }
    }

    /// i18n key of the label prefixed to failure alerts.
    #[must_use]
    pub fn failure_key(self) -> &'static str {
        match self {
            Flow::Text => "alert-text-failed",
            Flow::Image => "alert-image-failed",
            Flow::Pdf => "alert-pdf-failed",
        }
    }
}

/// Where a flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// At least one request is in flight; `latest` is the newest one.
    Busy {
        latest: RequestToken,
        in_flight: usize,
    },
}

/// The result of [`Dispatcher::complete`].
#[derive(Debug, Clone, PartialEq)]
pub enum Completion<T> {
    /// Render the value.
    Succeeded(T),
    /// Surface the error to the user.
    Failed(Error),
}

/// Per-flow state machine.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    flow: Flow,
    phase: Phase,
}

impl Dispatcher {
    #[must_use]
    pub fn new(flow: Flow) -> Self {
        Self {
            flow,
            phase: Phase::Idle,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Busy { .. })
    }

    /// `Idle | Busy -> Busy` for a newly issued request.
    pub fn begin(&mut self, token: RequestToken) {
        let in_flight = match self.phase {
            Phase::Idle => 0,
            Phase::Busy { in_flight, .. } => in_flight,
        };
        self.phase = Phase::Busy {
            latest: token,
            in_flight: in_flight + 1,
        };
        tracing::debug!(flow = ?self.flow, ?token, "dispatch started");
    }

    /// `Busy -> {Succeeded | Failed} -> Idle` for one answered request.
    ///
    /// The flow only returns to `Idle` when no request remains in flight.
    pub fn complete<T>(
        &mut self,
        token: RequestToken,
        result: Result<T, Error>,
    ) -> Completion<T> {
        self.phase = match self.phase {
            Phase::Busy { latest, in_flight } if in_flight > 1 => Phase::Busy {
                latest,
                in_flight: in_flight - 1,
            },
            _ => Phase::Idle,
        };

        match result {
            Ok(value) => {
                tracing::debug!(flow = ?self.flow, ?token, "dispatch succeeded");
                Completion::Succeeded(value)
            }
            Err(err) => {
                tracing::warn!(flow = ?self.flow, ?token, "dispatch failed: {err}");
                Completion::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_strictly_increasing() {
        let mut source = TokenSource::new();
        let a = source.issue();
        let b = source.issue();
        assert!(b > a);
    }

    #[test]
    fn single_request_goes_busy_then_idle() {
        let mut tokens = TokenSource::new();
        let mut dispatcher = Dispatcher::new(Flow::Text);
        assert_eq!(dispatcher.phase(), Phase::Idle);

        let token = tokens.issue();
        dispatcher.begin(token);
        assert!(dispatcher.is_busy());

        let completion = dispatcher.complete(token, Ok("bonjour"));
        assert_eq!(completion, Completion::Succeeded("bonjour"));
        assert_eq!(dispatcher.phase(), Phase::Idle);
    }

    #[test]
    fn failure_returns_error_and_settles() {
        let mut tokens = TokenSource::new();
        let mut dispatcher = Dispatcher::new(Flow::Pdf);
        let token = tokens.issue();
        dispatcher.begin(token);

        let completion: Completion<String> =
            dispatcher.complete(token, Err(Error::Api("X".to_string())));
        assert_eq!(completion, Completion::Failed(Error::Api("X".to_string())));
        assert_eq!(dispatcher.phase(), Phase::Idle);
    }

    #[test]
    fn overlapping_requests_stay_busy_until_all_answer() {
        let mut tokens = TokenSource::new();
        let mut dispatcher = Dispatcher::new(Flow::Image);
        let first = tokens.issue();
        let second = tokens.issue();
        dispatcher.begin(first);
        dispatcher.begin(second);

        assert_eq!(
            dispatcher.phase(),
            Phase::Busy {
                latest: second,
                in_flight: 2
            }
        );

        // Out-of-order answers are both rendered
        assert!(matches!(
            dispatcher.complete(second, Ok(2)),
            Completion::Succeeded(2)
        ));
        assert!(dispatcher.is_busy());
        assert!(matches!(
            dispatcher.complete(first, Ok(1)),
            Completion::Succeeded(1)
        ));
        assert_eq!(dispatcher.phase(), Phase::Idle);
    }

    #[test]
    fn every_flow_has_distinct_keys() {
        let flows = [Flow::Text, Flow::Image, Flow::Pdf];
        for a in flows {
            for b in flows {
                if a != b {
                    assert_ne!(a.status_key(), b.status_key());
                    assert_ne!(a.failure_key(), b.failure_key());
                }
            }
        }
    }
}
