//! Tableau HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TabError};
use crate::tableau::traits::PagedResponse;

/// Authenticated Tableau API client
///
/// Holds the session token and site LUID obtained at sign-in. The session is
/// scoped to one CLI invocation: `sign_in` acquires it, `sign_out` releases it.
#[derive(Debug)]
pub struct TabClient {
    pub(crate) client: Client,
    pub(crate) token: String,
    pub(crate) site_luid: String,
    /// API base URL, e.g. `https://host/api/3.24`
    base_url: String,
}

impl TabClient {
    /// Create a client from an already-established session
    pub(crate) fn from_session(server: &str, token: String, site_luid: String) -> Self {
        Self {
            client: Self::http_client(),
            token,
            site_luid,
            base_url: Self::api_base_url(server),
        }
    }

    /// Build the underlying HTTP client with connection settings
    pub(crate) fn http_client() -> Client {
        Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| Client::new())
    }

    /// Build the API base URL for a server address
    pub(crate) fn api_base_url(server: &str) -> String {
        format!("{}/api/{}", server.trim_end_matches('/'), api::VERSION)
    }

    /// Base URL for site-independent endpoints (auth, serverinfo)
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL for site-scoped endpoints
    pub(crate) fn site_url(&self) -> String {
        format!("{}/sites/{}", self.base_url, self.site_luid)
    }

    /// The site LUID of the active session
    pub fn site_luid(&self) -> &str {
        &self.site_luid
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("X-Tableau-Auth", &self.token)
            .header("Accept", "application/json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create a PUT request builder with standard headers
    pub(crate) fn put(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.put(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(url))
    }

    /// Parse an API response, returning an error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(TabError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// Check a write response, returning an error for non-success status codes
    ///
    /// Used for POST/PUT/DELETE calls whose body we do not need. The response
    /// body, if any, is folded into the error message.
    pub(crate) async fn expect_success(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<()> {
        if response.status().is_success() {
            return Ok(());
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(TabError::Api {
            status,
            message: format!("{}: {}", error_context, body),
        })
    }

    /// Fetch a binary payload, such as a packaged workbook or data source
    ///
    /// A non-success status is folded into an API error with the response
    /// body text, mirroring `expect_success`.
    pub(crate) async fn fetch_content(&self, url: &str, error_context: &str) -> Result<Vec<u8>> {
        let response = self.get(url).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TabError::Api {
                status,
                message: format!("{}: {}", error_context, body),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Fetch all pages from a paged site-scoped list endpoint
    ///
    /// Pages are requested strictly one at a time starting at page 1, in
    /// server order. The loop stops once the running item count reaches the
    /// reported `totalAvailable`, or when a page comes back empty (defensive
    /// stop against a server miscount). A response without a pagination block
    /// is treated as a single page.
    ///
    /// # Arguments
    /// * `path` - site-relative path (e.g. "/users" or "/users?fields=...")
    /// * `error_context` - context for error messages (e.g. "users")
    pub async fn fetch_all_pages<T, R>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PagedResponse<T>,
    {
        let separator = if path.contains('?') { "&" } else { "?" };
        let mut all_items: Vec<T> = Vec::new();
        let mut page: u32 = 1;

        loop {
            let url = format!(
                "{}{}{}pageSize={}&pageNumber={}",
                self.site_url(),
                path,
                separator,
                api::DEFAULT_PAGE_SIZE,
                page
            );

            debug!("Fetching page {} from: {}", page, url);

            let response = self.get(&url).send().await?;
            let page_context = format!("{} (page {})", error_context, page);
            let resp: R = self.parse_api_response(response, &page_context).await?;

            let total = resp.pagination().map(|p| p.total_available());
            let items = resp.into_items();
            let page_count = items.len();
            all_items.extend(items);

            debug!(
                "Page {} returned {} items ({} of {:?} total)",
                page,
                page_count,
                all_items.len(),
                total
            );

            match total {
                // No pagination block means a single page.
                None => break,
                Some(total) => {
                    if all_items.len() as u32 >= total || page_count == 0 {
                        break;
                    }
                    page += 1;
                }
            }
        }

        debug!("Fetched {} total items for {}", all_items.len(), error_context);
        Ok(all_items)
    }
}

#[cfg(test)]
impl TabClient {
    /// Create a test client pointed at a mock server
    ///
    /// The mock server URI stands in for the `/api/<version>` base, so mock
    /// paths look like `/sites/site-1/users`.
    pub fn test_client(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            token: "test-token".to_string(),
            site_luid: "site-1".to_string(),
            base_url: base_url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_url() {
        assert_eq!(
            TabClient::api_base_url("https://tableau.example.com"),
            format!("https://tableau.example.com/api/{}", api::VERSION)
        );
    }

    #[test]
    fn test_api_base_url_strips_trailing_slash() {
        let url = TabClient::api_base_url("https://tableau.example.com/");
        assert!(!url.contains("//api"));
    }

    #[test]
    fn test_site_url() {
        let client = TabClient::test_client("http://mock");
        assert_eq!(client.site_url(), "http://mock/sites/site-1");
    }
}
