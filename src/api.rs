use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::logic::path::NavPath;

/// One entry in a directory listing, as returned by `/api/files`.
///
/// Listings are scoped to exactly one path and replaced wholesale on every
/// fetch; nothing here is merged or diffed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileEntry {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub is_dir: bool,
    #[serde(default)]
    pub mod_time: String,
    /// Extension-style tag assigned by the server (e.g. ".png"), empty for directories
    #[serde(rename = "type", default)]
    pub entry_type: String,
}

/// Response of the status probe (`/api/system/status`).
#[derive(Debug, Clone, Deserialize)]
pub struct ServerStatus {
    pub status: String,
}

impl ServerStatus {
    /// The server answers `"setup_required"` until the first admin account
    /// exists, and `"ready"` afterwards. Branch only on the former so that
    /// future status values keep routing to the login screen.
    pub fn setup_required(&self) -> bool {
        self.status == "setup_required"
    }
}

/// Login failure, split into the two cases the UI must word differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    /// HTTP 423: the server refuses logins until first-run setup completes
    SetupRequired,
    /// Bad credentials, or any failure the server did not classify
    Rejected,
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::SetupRequired => {
                write!(f, "System setup required. Complete the setup step first.")
            }
            LoginError::Rejected => write!(f, "Invalid credentials. Please try again."),
        }
    }
}

impl std::error::Error for LoginError {}

/// HTTP client for the file server.
///
/// Authentication rides on a session cookie set by login/setup, so the
/// underlying client keeps a cookie store; no credential is attached
/// explicitly to individual requests.
#[derive(Clone)]
pub struct GatewayClient {
    base_url: String,
    client: Client,
}

impl GatewayClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Status probe: is the server configured yet?
    pub async fn system_status(&self) -> Result<ServerStatus> {
        let url = format!("{}/api/system/status", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach server")?
            .error_for_status()
            .context("Status probe rejected")?;

        response.json().await.context("Failed to parse server status")
    }

    /// Session probe: does the ambient cookie identify a logged-in user?
    pub async fn session(&self) -> Result<()> {
        let url = format!("{}/api/me", self.base_url);
        self.client
            .get(&url)
            .send()
            .await
            .context("Failed to reach server")?
            .error_for_status()
            .context("No active session")?;

        Ok(())
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<(), LoginError> {
        let url = format!("{}/api/login", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .map_err(|_| LoginError::Rejected)?;

        match response.status() {
            s if s.is_success() => Ok(()),
            StatusCode::LOCKED => Err(LoginError::SetupRequired),
            _ => Err(LoginError::Rejected),
        }
    }

    /// First-run setup: creates the admin account and establishes a session.
    /// Errors are surfaced raw; the setup screen shows them as-is.
    pub async fn setup(&self, username: &str, password: &str) -> Result<()> {
        let url = format!("{}/api/setup", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .context("Failed to reach server")?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Setup failed ({}): {}", status, text.trim());
        }

        Ok(())
    }

    /// Fetch the listing for a directory. The empty path is the share root.
    pub async fn list_directory(&self, path: &NavPath) -> Result<Vec<FileEntry>> {
        let url = format!(
            "{}/api/files?path={}",
            self.base_url,
            urlencoding::encode(&path.joined())
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to request directory listing")?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Listing error ({}): {}", status, text.trim());
        }

        response
            .json()
            .await
            .context("Failed to parse directory listing")
    }

    /// URL for downloading a file. Pure construction, no request is made.
    pub fn download_url(&self, path: &NavPath, name: &str) -> String {
        self.entry_url("download", path, name)
    }

    /// URL for a server-rendered thumbnail. Pure construction.
    pub fn thumbnail_url(&self, path: &NavPath, name: &str) -> String {
        self.entry_url("thumbnail", path, name)
    }

    fn entry_url(&self, endpoint: &str, path: &NavPath, name: &str) -> String {
        let relative = if path.is_root() {
            name.to_string()
        } else {
            format!("{}/{}", path.joined(), name)
        };
        format!(
            "{}/api/{}?path={}",
            self.base_url,
            endpoint,
            urlencoding::encode(&relative)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GatewayClient {
        GatewayClient::new("http://localhost:8080/".to_string()).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        assert_eq!(client().base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_download_url_at_root() {
        let url = client().download_url(&NavPath::root(), "report.pdf");
        assert_eq!(url, "http://localhost:8080/api/download?path=report.pdf");
    }

    #[test]
    fn test_download_url_nested() {
        let mut path = NavPath::root();
        assert!(path.descend("docs"));
        assert!(path.descend("2024"));
        let url = client().download_url(&path, "report.pdf");
        assert_eq!(
            url,
            "http://localhost:8080/api/download?path=docs%2F2024%2Freport.pdf"
        );
    }

    #[test]
    fn test_thumbnail_url_encodes_spaces() {
        let mut path = NavPath::root();
        assert!(path.descend("My Photos"));
        let url = client().thumbnail_url(&path, "beach day.jpg");
        assert_eq!(
            url,
            "http://localhost:8080/api/thumbnail?path=My%20Photos%2Fbeach%20day.jpg"
        );
    }

    #[test]
    fn test_url_construction_is_deterministic() {
        let mut path = NavPath::root();
        assert!(path.descend("docs"));
        let a = client().download_url(&path, "a.txt");
        let b = client().download_url(&path, "a.txt");
        assert_eq!(a, b);
    }

    #[test]
    fn test_server_status_branching() {
        let setup = ServerStatus {
            status: "setup_required".to_string(),
        };
        let ready = ServerStatus {
            status: "ready".to_string(),
        };
        // Unknown future values must keep routing to the login path
        let unknown = ServerStatus {
            status: "degraded".to_string(),
        };
        assert!(setup.setup_required());
        assert!(!ready.setup_required());
        assert!(!unknown.setup_required());
    }

    #[test]
    fn test_login_error_messages_are_distinct() {
        let locked = LoginError::SetupRequired.to_string();
        let rejected = LoginError::Rejected.to_string();
        assert!(locked.contains("setup"));
        assert!(rejected.contains("Invalid credentials"));
        assert_ne!(locked, rejected);
    }

    #[test]
    fn test_file_entry_wire_format() {
        let raw = r#"{
            "name": "photo.jpg",
            "size": 2048,
            "is_dir": false,
            "mod_time": "2025-06-01T12:00:00Z",
            "type": ".jpg"
        }"#;
        let entry: FileEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.name, "photo.jpg");
        assert_eq!(entry.size, 2048);
        assert!(!entry.is_dir);
        assert_eq!(entry.entry_type, ".jpg");
    }

    #[test]
    fn test_file_entry_defaults_for_directories() {
        // Directories may omit size and type
        let raw = r#"{ "name": "docs", "is_dir": true, "mod_time": "2025-06-01T12:00:00Z" }"#;
        let entry: FileEntry = serde_json::from_str(raw).unwrap();
        assert!(entry.is_dir);
        assert_eq!(entry.size, 0);
        assert_eq!(entry.entry_type, "");
    }
}
