//! Token resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

use crate::config::credentials;
use crate::error::{Result, TabError};

/// Credentials file structure (`~/.tableau/credentials.json`)
#[derive(Deserialize, Debug)]
struct TabCredentials {
    credentials: HashMap<String, TabCredential>,
}

/// Single credential entry, keyed by server host
#[derive(Deserialize, Debug)]
struct TabCredential {
    token: String,
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    server: String,
}

impl TokenResolver {
    /// Create a new token resolver for the given server
    pub fn new(server: &str) -> Self {
        Self {
            server: server.to_string(),
        }
    }

    /// Resolve the token secret from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (TABLEAU_TOKEN, TAB_TOKEN - in order)
    /// 3. Credentials file (~/.tableau/credentials.json)
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        for env_var in credentials::TOKEN_ENV_VARS {
            if let Ok(token) = std::env::var(env_var) {
                debug!("Using token from {} environment variable", env_var);
                return Ok(token);
            }
        }

        debug!(
            "No token in environment variables {:?}, trying credentials file",
            credentials::TOKEN_ENV_VARS
        );
        self.read_from_credentials_file()
    }

    fn read_from_credentials_file(&self) -> Result<String> {
        let credentials_path = Self::credentials_path()
            .ok_or_else(|| TabError::TokenNotFound(self.token_not_found_message(None)))?;

        debug!(
            "Looking for credentials file at: {}",
            credentials_path.display()
        );

        let content = match fs::read_to_string(&credentials_path) {
            Ok(content) => content,
            Err(_) => {
                return Err(TabError::TokenNotFound(
                    self.token_not_found_message(Some(&credentials_path)),
                ));
            }
        };

        let creds: TabCredentials = serde_json::from_str(&content).map_err(|e| {
            TabError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                credentials_path.display(),
                e
            ))
        })?;

        let host = self.host();
        creds
            .credentials
            .get(host)
            .map(|cred| {
                debug!(
                    "Using token from credentials file {} for host: {}",
                    credentials_path.display(),
                    host
                );
                cred.token.clone()
            })
            .ok_or_else(|| {
                TabError::TokenNotFound(self.token_not_found_message(Some(&credentials_path)))
            })
    }

    /// Host portion of the server URL, used as the credentials file key
    fn host(&self) -> &str {
        self.server
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
    }

    /// Generate a helpful error message when the token is not found
    fn token_not_found_message(&self, credentials_path: Option<&std::path::Path>) -> String {
        let env_vars = credentials::TOKEN_ENV_VARS.join(", ");
        let creds_info = credentials_path
            .map(|p| format!(" or in credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No personal access token found for '{}'. Please provide a token using one of:\n\
             \n\
             1. CLI argument:      tabctl --token <SECRET>\n\
             2. Environment var:   export TABLEAU_TOKEN=<SECRET>  (also: TAB_TOKEN)\n\
             3. Credentials file:  ~/{}\n\
             \n\
             Checked: env vars [{}]{}",
            self.server,
            credentials::FILE_PATH,
            env_vars,
            creds_info
        )
    }

    fn credentials_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|p| p.join(credentials::FILE_PATH))
    }
}
