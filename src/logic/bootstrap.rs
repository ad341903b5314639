//! Bootstrap sequencing
//!
//! On startup the client runs at most two remote probes, strictly in order,
//! and lands on exactly one top-level screen:
//!
//! 1. Status probe. A transport failure fails open to the login screen
//!    (there is no "offline" screen). "setup_required" resolves to the
//!    setup screen without ever issuing the session probe.
//! 2. Session probe. Success means an ambient cookie already identifies a
//!    user; any failure resolves to the login screen, silently.
//!
//! The machine is the only place allowed to pick the initial screen. Later
//! transitions (login/setup completion, sign-out) are explicit and never
//! re-run the probes.

use anyhow::Result;

use crate::api::ServerStatus;

/// Top-level screen selection. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Loading,
    SetupRequired,
    Unauthenticated,
    Authenticated,
}

/// The two startup probes, in the only order they may run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Status,
    Session,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    StatusPending,
    SessionPending,
    Resolved(AppView),
}

/// One-shot probe sequencer.
///
/// The driver asks `next_probe()` which call to issue and feeds the outcome
/// back through `on_status` / `on_session`. Skipping the status probe or
/// issuing the session probe after "setup_required" is unrepresentable: the
/// machine never names a probe out of order.
#[derive(Debug)]
pub struct BootstrapMachine {
    stage: Stage,
}

impl BootstrapMachine {
    pub fn new() -> Self {
        Self {
            stage: Stage::StatusPending,
        }
    }

    /// The probe the driver must issue next, if any
    pub fn next_probe(&self) -> Option<Probe> {
        match self.stage {
            Stage::StatusPending => Some(Probe::Status),
            Stage::SessionPending => Some(Probe::Session),
            Stage::Resolved(_) => None,
        }
    }

    /// The final screen, once both probes (or the short-circuit) are done
    pub fn resolved(&self) -> Option<AppView> {
        match self.stage {
            Stage::Resolved(view) => Some(view),
            _ => None,
        }
    }

    /// Feed the status probe outcome. Returns the resolved view if this
    /// outcome settles the machine. Out-of-order calls are ignored.
    pub fn on_status(&mut self, outcome: Result<ServerStatus>) -> Option<AppView> {
        if self.stage != Stage::StatusPending {
            return None;
        }

        self.stage = match outcome {
            // Backend unreachable: fail open to the login screen
            Err(_) => Stage::Resolved(AppView::Unauthenticated),
            Ok(status) if status.setup_required() => Stage::Resolved(AppView::SetupRequired),
            Ok(_) => Stage::SessionPending,
        };
        self.resolved()
    }

    /// Feed the session probe outcome (any error collapses to `false`)
    pub fn on_session(&mut self, active: bool) -> Option<AppView> {
        if self.stage != Stage::SessionPending {
            return None;
        }

        self.stage = if active {
            Stage::Resolved(AppView::Authenticated)
        } else {
            Stage::Resolved(AppView::Unauthenticated)
        };
        self.resolved()
    }
}

impl Default for BootstrapMachine {
    fn default() -> Self {
        Self::new()
    }
}
