//! App Orchestration
//!
//! The `App` struct wires the pure state (bootstrap machine, browser,
//! forms, preference store) to the gateway worker and exposes the methods
//! the run loop and keyboard handlers drive. Submodules group `impl App`
//! methods by domain:
//! - navigation: listing refresh, descend/ascend, opening files

pub(crate) mod navigation;

use tokio::sync::mpsc;

use filetui::api::GatewayClient;
use filetui::config::Config;
use filetui::logic::bootstrap::{AppView, BootstrapMachine, Probe};
use filetui::model::{AuthForm, Browser};
use filetui::model::forms::login_failure_message;
use filetui::prefs::PrefStore;
use filetui::utils::log_debug;

use crate::services::gateway::{GatewayRequest, GatewayResponse};

pub struct App {
    pub view: AppView,
    pub bootstrap: BootstrapMachine,
    pub browser: Browser,
    pub login_form: AuthForm,
    pub setup_form: AuthForm,
    pub prefs: PrefStore,

    pub settings_open: bool,
    pub search_focused: bool,
    pub should_quit: bool,
    pub spinner_frame: usize,

    client: GatewayClient,
    open_command: Option<String>,
    gateway_tx: mpsc::UnboundedSender<GatewayRequest>,
    gateway_rx: mpsc::UnboundedReceiver<GatewayResponse>,
}

impl App {
    pub fn new(config: Config, prefs: PrefStore) -> anyhow::Result<Self> {
        let client = GatewayClient::new(config.base_url.clone())?;
        let (gateway_tx, gateway_rx) = crate::services::gateway::spawn(client.clone());

        Ok(Self {
            view: AppView::Loading,
            bootstrap: BootstrapMachine::new(),
            browser: Browser::new(),
            login_form: AuthForm::new(),
            setup_form: AuthForm::new(),
            prefs,
            settings_open: false,
            search_focused: false,
            should_quit: false,
            spinner_frame: 0,
            client,
            open_command: config.open_command,
            gateway_tx,
            gateway_rx,
        })
    }

    /// Kick off the startup probe sequence
    pub fn start_bootstrap(&mut self) {
        self.issue_next_probe();
    }

    fn issue_next_probe(&mut self) {
        match self.bootstrap.next_probe() {
            Some(Probe::Status) => {
                let _ = self.gateway_tx.send(GatewayRequest::ProbeStatus);
            }
            Some(Probe::Session) => {
                let _ = self.gateway_tx.send(GatewayRequest::ProbeSession);
            }
            None => {}
        }
    }

    /// Drain pending gateway responses without blocking
    pub fn drain_gateway_responses(&mut self) {
        while let Ok(response) = self.gateway_rx.try_recv() {
            self.handle_gateway_response(response);
        }
    }

    fn handle_gateway_response(&mut self, response: GatewayResponse) {
        match response {
            GatewayResponse::Status(outcome) => {
                if let Some(view) = self.bootstrap.on_status(outcome) {
                    self.enter_view(view);
                } else {
                    self.issue_next_probe();
                }
            }

            GatewayResponse::Session(active) => {
                if let Some(view) = self.bootstrap.on_session(active) {
                    self.enter_view(view);
                }
            }

            GatewayResponse::Login(result) => match result {
                Ok(()) => {
                    self.login_form = AuthForm::new();
                    self.enter_view(AppView::Authenticated);
                }
                Err(e) => self.login_form.fail(login_failure_message(e)),
            },

            GatewayResponse::Setup(result) => match result {
                Ok(()) => {
                    // Setup establishes the session as a side effect
                    self.setup_form = AuthForm::new();
                    self.enter_view(AppView::Authenticated);
                }
                Err(e) => self.setup_form.fail(e.to_string()),
            },

            GatewayResponse::Listing { ticket, result } => {
                self.browser.apply_listing(&ticket, result);
            }
        }
    }

    /// Switch top-level screens. Entering the dashboard triggers the first
    /// listing fetch; no other transition touches the network.
    fn enter_view(&mut self, view: AppView) {
        log_debug(&format!("Entering view {:?}", view));
        self.view = view;
        if view == AppView::Authenticated {
            self.refresh_listing();
        }
    }

    pub fn submit_login(&mut self) {
        if !self.login_form.can_submit() {
            return;
        }
        self.login_form.begin_submit();
        let _ = self.gateway_tx.send(GatewayRequest::Login {
            username: self.login_form.username.clone(),
            password: self.login_form.password.clone(),
        });
    }

    pub fn submit_setup(&mut self) {
        if !self.setup_form.can_submit() {
            return;
        }
        self.setup_form.begin_submit();
        let _ = self.gateway_tx.send(GatewayRequest::Setup {
            username: self.setup_form.username.clone(),
            password: self.setup_form.password.clone(),
        });
    }

    /// Sign out. Clears every piece of session-scoped state and lands on a
    /// fresh login screen; preferences survive, and no request is sent.
    pub fn logout(&mut self) {
        self.browser.reset();
        self.login_form = AuthForm::new();
        self.settings_open = false;
        self.search_focused = false;
        self.view = AppView::Unauthenticated;
    }

    /// Advance the loading spinner. Called once per frame.
    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }
}
