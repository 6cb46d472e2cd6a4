//! OpenAlex API client

use citeboard_core::{ApiError, MAX_ATTEMPTS, SHARED_RUNTIME, backoff_delay, http_client};
use reqwest::header;

/// OpenAlex REST client: endpoint plus the polite-pool contact address.
///
/// The contact address is injected as a `mailto` query parameter on every
/// request and embedded in the `User-Agent` header. An empty address
/// disables the parameter but keeps the header.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    mailto: String,
    user_agent: String,
}

impl ApiClient {
    pub fn new(base_url: &str, mailto: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            mailto: mailto.to_string(),
            user_agent: format!("citeboard (+{mailto})"),
        }
    }

    /// Caller params plus the contact parameter, when one is configured.
    fn build_query<'a>(&'a self, params: &[(&'a str, String)]) -> Vec<(&'a str, String)> {
        let mut query = params.to_vec();
        if !self.mailto.is_empty() {
            query.push(("mailto", self.mailto.clone()));
        }
        query
    }

    /// HTTP GET against an API path, returning the response body.
    ///
    /// Every non-200 status is retried on the linear backoff schedule up to
    /// [`MAX_ATTEMPTS`] total attempts; the last status is returned as an
    /// error once the budget is spent. Connection-level failures are
    /// returned immediately without retrying.
    pub fn get(&self, path: &str, params: &[(&str, String)]) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let query = self.build_query(params);

        let mut attempt = 1u32;
        loop {
            let (status, final_url, body) = SHARED_RUNTIME.handle().block_on(async {
                let resp = http_client()
                    .get(&url)
                    .header(header::USER_AGENT, &self.user_agent)
                    .query(&query)
                    .send()
                    .await?;
                let status = resp.status().as_u16();
                let final_url = resp.url().to_string();
                let body = resp.text().await?;
                Ok::<_, ApiError>((status, final_url, body))
            })?;

            if status == 200 {
                return Ok(body);
            }
            if attempt >= MAX_ATTEMPTS {
                return Err(ApiError::Status {
                    status,
                    url: final_url,
                });
            }
            log::warn!(
                "GET {path} returned HTTP {status}, retry {attempt}/{} in {:?}",
                MAX_ATTEMPTS - 1,
                backoff_delay(attempt)
            );
            std::thread::sleep(backoff_delay(attempt));
            attempt += 1;
        }
    }
}
