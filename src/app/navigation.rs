//! Navigation orchestration methods
//!
//! Methods for moving through the directory tree:
//! - Refreshing the listing for the current path
//! - Entering the selected folder and going back up
//! - Opening the selected file through the configured command

use crate::services::gateway::GatewayRequest;
use crate::App;
use filetui::utils::log_debug;

impl App {
    /// Fetch the listing for the current path.
    ///
    /// The only fetch trigger in the app: called on entering the dashboard,
    /// after descend/ascend, and on explicit refresh. View-mode and search
    /// changes never come through here.
    pub(crate) fn refresh_listing(&mut self) {
        let ticket = self.browser.begin_fetch();
        let _ = self.gateway_tx.send(GatewayRequest::List { ticket });
    }

    /// Enter the selected entry if it is a folder
    pub(crate) fn descend_selected(&mut self) {
        let Some(entry) = self.browser.selected_entry() else {
            return;
        };
        if self.browser.descend(&entry.name) {
            self.refresh_listing();
        }
    }

    /// Go up one level; no-op at the share root
    pub(crate) fn ascend(&mut self) {
        if self.browser.ascend() {
            self.refresh_listing();
        }
    }

    /// Hand the selected file's download URL to the configured opener.
    /// Folders are entered instead; without an `open_command` this is a no-op.
    pub(crate) fn open_selected(&mut self) {
        let Some(entry) = self.browser.selected_entry() else {
            return;
        };
        if entry.is_dir {
            self.descend_selected();
            return;
        }

        let Some(command) = self.open_command.clone() else {
            log_debug("No open_command configured, ignoring open request");
            return;
        };

        let url = self.client.download_url(self.browser.path(), &entry.name);
        match std::process::Command::new(&command)
            .arg(&url)
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
        {
            Ok(_) => log_debug(&format!("Opened {} with {}", url, command)),
            Err(e) => log_debug(&format!("Failed to run {}: {}", command, e)),
        }
    }
}
