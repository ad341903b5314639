//! Tests for the startup probe sequence
//!
//! Startup runs at most two remote probes, strictly in order: server
//! status first, then (only if the server is configured) the session
//! check. Each scenario below pins one row of the resolution table:
//!
//!   status unreachable          -> login screen (fail open)
//!   status = setup_required     -> setup screen, session probe never runs
//!   status ok, session active   -> dashboard
//!   status ok, session missing  -> login screen

use anyhow::anyhow;
use filetui::api::ServerStatus;
use filetui::logic::bootstrap::{AppView, BootstrapMachine, Probe};

fn status(value: &str) -> anyhow::Result<ServerStatus> {
    Ok(ServerStatus {
        status: value.to_string(),
    })
}

#[test]
fn test_unreachable_server_lands_on_login() {
    let mut machine = BootstrapMachine::new();
    assert_eq!(machine.next_probe(), Some(Probe::Status));

    let view = machine.on_status(Err(anyhow!("connection refused")));
    assert_eq!(view, Some(AppView::Unauthenticated));
    assert_eq!(machine.next_probe(), None);
}

#[test]
fn test_setup_required_lands_on_setup_without_session_probe() {
    let mut machine = BootstrapMachine::new();
    let view = machine.on_status(status("setup_required"));
    assert_eq!(view, Some(AppView::SetupRequired));

    // The session probe is never requested
    assert_eq!(machine.next_probe(), None);

    // A stray session result afterwards changes nothing
    assert_eq!(machine.on_session(true), None);
    assert_eq!(machine.resolved(), Some(AppView::SetupRequired));
}

#[test]
fn test_active_session_lands_on_dashboard() {
    let mut machine = BootstrapMachine::new();
    assert_eq!(machine.on_status(status("ready")), None);
    assert_eq!(machine.next_probe(), Some(Probe::Session));

    assert_eq!(machine.on_session(true), Some(AppView::Authenticated));
    assert_eq!(machine.next_probe(), None);
}

#[test]
fn test_missing_session_lands_on_login() {
    let mut machine = BootstrapMachine::new();
    machine.on_status(status("ready"));
    assert_eq!(machine.on_session(false), Some(AppView::Unauthenticated));
}

#[test]
fn test_probes_never_run_out_of_order() {
    let mut machine = BootstrapMachine::new();

    // A session result cannot arrive before the status probe settled
    assert_eq!(machine.on_session(true), None);
    assert_eq!(machine.next_probe(), Some(Probe::Status));

    // Once resolved, further probe results of either kind are inert
    machine.on_status(Err(anyhow!("down")));
    assert_eq!(machine.on_status(status("ready")), None);
    assert_eq!(machine.on_session(true), None);
    assert_eq!(machine.resolved(), Some(AppView::Unauthenticated));
}

#[test]
fn test_unrecognized_status_value_still_checks_session() {
    // A server newer than this client may report statuses we do not know;
    // anything that is not "setup_required" proceeds to the session check
    let mut machine = BootstrapMachine::new();
    assert_eq!(machine.on_status(status("maintenance")), None);
    assert_eq!(machine.next_probe(), Some(Probe::Session));
    assert_eq!(machine.on_session(false), Some(AppView::Unauthenticated));
}
