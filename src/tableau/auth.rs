//! Sign-in and sign-out against the Tableau auth endpoints

use log::debug;
use serde::Deserialize;

use crate::error::{Result, TabError};
use crate::tableau::TabClient;

/// Credentials block of the sign-in response
#[derive(Deserialize, Debug)]
struct SignInResponse {
    credentials: SessionCredentials,
}

#[derive(Deserialize, Debug)]
struct SessionCredentials {
    token: String,
    site: SiteRef,
}

#[derive(Deserialize, Debug)]
struct SiteRef {
    id: String,
}

/// Server info from GET /serverinfo
#[derive(Deserialize, Debug)]
pub struct ServerInfo {
    #[serde(rename = "productVersion")]
    pub product_version: ProductVersion,
    #[serde(rename = "restApiVersion")]
    pub rest_api_version: String,
}

#[derive(Deserialize, Debug)]
pub struct ProductVersion {
    pub value: String,
}

#[derive(Deserialize, Debug)]
struct ServerInfoResponse {
    #[serde(rename = "serverInfo")]
    server_info: ServerInfo,
}

impl TabClient {
    /// Sign in with a personal access token and return an authenticated client
    ///
    /// `site` is the content URL of the site (empty string for the default
    /// site). A rejected sign-in surfaces as `TabError::Auth`.
    pub async fn sign_in(
        server: &str,
        site: &str,
        token_name: &str,
        token_secret: &str,
    ) -> Result<TabClient> {
        let base_url = Self::api_base_url(server);
        let url = format!("{}/auth/signin", base_url);
        let payload = serde_json::json!({
            "credentials": {
                "personalAccessTokenName": token_name,
                "personalAccessTokenSecret": token_secret,
                "site": { "contentUrl": site }
            }
        });

        debug!("Signing in to {} (site '{}')", url, site);

        let client = Self::http_client();
        let response = client
            .post(&url)
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TabError::Auth(format!(
                "sign-in to '{}' rejected with status {}",
                server,
                response.status().as_u16()
            )));
        }

        let body: SignInResponse = response.json().await?;
        debug!("Signed in, site LUID {}", body.credentials.site.id);

        Ok(TabClient::from_session(
            server,
            body.credentials.token,
            body.credentials.site.id,
        ))
    }

    /// Release the session
    ///
    /// Called on every exit path; a failed sign-out is logged and otherwise
    /// ignored since the token expires server-side anyway.
    pub async fn sign_out(&self) -> Result<()> {
        let url = format!("{}/auth/signout", self.base_url());
        debug!("Signing out via {}", url);

        let response = self.post(&url).send().await?;
        self.expect_success(response, "sign-out").await
    }

    /// Fetch server version information
    pub async fn server_info(&self) -> Result<ServerInfo> {
        let url = format!("{}/serverinfo", self.base_url());
        let response = self.get(&url).send().await?;
        let body: ServerInfoResponse = self.parse_api_response(response, "server info").await?;
        Ok(body.server_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_sign_in_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!(
                "/api/{}/auth/signin",
                crate::config::api::VERSION
            )))
            .and(body_partial_json(serde_json::json!({
                "credentials": {
                    "personalAccessTokenName": "tabctl",
                    "site": { "contentUrl": "analytics" }
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "credentials": {
                    "token": "session-token-abc",
                    "site": { "id": "site-luid-1", "contentUrl": "analytics" },
                    "user": { "id": "user-luid-1" }
                }
            })))
            .mount(&mock_server)
            .await;

        let client = TabClient::sign_in(&mock_server.uri(), "analytics", "tabctl", "secret")
            .await
            .unwrap();

        assert_eq!(client.site_luid(), "site-luid-1");
    }

    #[tokio::test]
    async fn test_sign_in_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!(
                "/api/{}/auth/signin",
                crate::config::api::VERSION
            )))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let result = TabClient::sign_in(&mock_server.uri(), "", "tabctl", "bad-secret").await;

        match result.unwrap_err() {
            TabError::Auth(msg) => assert!(msg.contains("401")),
            other => panic!("Expected TabError::Auth, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_sign_out_success() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/auth/signout"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        assert!(client.sign_out().await.is_ok());
    }

    #[tokio::test]
    async fn test_server_info() {
        let mock_server = MockServer::start().await;
        let client = TabClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/serverinfo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "serverInfo": {
                    "productVersion": { "value": "2024.3.0", "build": "20243.1" },
                    "restApiVersion": "3.24"
                }
            })))
            .mount(&mock_server)
            .await;

        let info = client.server_info().await.unwrap();
        assert_eq!(info.product_version.value, "2024.3.0");
        assert_eq!(info.rest_api_version, "3.24");
    }
}
