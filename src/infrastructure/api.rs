use crate::domain::{ApiError, ApiResult, GreetingOfTheDay, PersonalGreeting};
use serde::de::DeserializeOwned;
use url::Url;

/// Blocking HTTP client for the two greeting API endpoints.
///
/// Every failure mode - transport error, non-success HTTP status,
/// malformed response body - is normalized into the single
/// [`ApiError`] kind and never raised past this boundary.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(server_url: &str) -> Result<Self, String> {
        let base_url = Url::parse(server_url).map_err(|e| format!("Invalid server URL - {}", e))?;
        if base_url.cannot_be_a_base() {
            return Err(format!("Invalid server URL - {} cannot carry a path", server_url));
        }

        Ok(Self {
            base_url,
            http: reqwest::blocking::Client::new(),
        })
    }

    pub fn fetch_greeting_of_the_day(&self) -> ApiResult<GreetingOfTheDay> {
        self.get_json(self.hello_url())
    }

    pub fn fetch_personal_greeting(&self, name: &str) -> ApiResult<PersonalGreeting> {
        self.get_json(self.greet_url(name))
    }

    fn hello_url(&self) -> Url {
        self.endpoint(&["api", "hello"])
    }

    fn greet_url(&self, name: &str) -> Url {
        self.endpoint(&["api", "greet", name])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // new() rejects cannot-be-a-base URLs, so the segment writer is
        // always available. Each segment is percent-encoded on the way in.
        if let Ok(mut parts) = url.path_segments_mut() {
            parts.pop_if_empty().extend(segments);
        }
        url
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        log::debug!("GET {}", url);
        let response = self
            .http
            .get(url.as_str())
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| ApiError::RemoteReadFailed(e.to_string()))?;
        let body = response
            .text()
            .map_err(|e| ApiError::RemoteReadFailed(e.to_string()))?;

        serde_json::from_str(&body)
            .map_err(|e| ApiError::RemoteReadFailed(format!("Invalid response body - {}", e)))
    }
}
