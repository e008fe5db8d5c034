//! HTTP access to the quiz API.

use crate::models::question::Question;

/// Minimal client for the quiz API. The shipped UI only ever calls the
/// random-question endpoint.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url: String = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch one random question. Transport failures and non-2xx statuses
    /// surface as the same error; the state machine treats them uniformly.
    pub async fn random_question(&self) -> Result<Question, reqwest::Error> {
        self.http
            .get(format!("{}/api/questions/random", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<Question>()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client = ApiClient::new("http://127.0.0.1:3001///");
        assert_eq!(client.base_url, "http://127.0.0.1:3001");
    }
}
