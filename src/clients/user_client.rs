use crate::framework::{LookupError, RecordLookup};
use crate::model::User;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::{debug, instrument, warn};

/// HTTP client for checking users held by the user service.
///
/// Sends `GET {base_url}/users/{id}` and reads only the status code.
/// The underlying `reqwest::Client` uses library defaults (no explicit timeout).
///
/// Ids `.` and `..` are answered `Ok(false)` without a request: URL
/// normalization removes such segments (escaped or not), so no URL can name them.
#[derive(Debug, Clone)]
pub struct UserClient {
    http: reqwest::Client,
    base_url: Url,
}

impl UserClient {
    /// Creates a client for the user service at `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client that reuses an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `None` for ids that cannot be a path segment.
    fn user_url(&self, id: &str) -> Result<Option<Url>, LookupError> {
        if is_dot_segment(id) {
            return Ok(None);
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| LookupError::Transport(format!("invalid base url {}", self.base_url)))?
            .pop_if_empty()
            .extend(["users", id]);
        Ok(Some(url))
    }
}

fn is_dot_segment(id: &str) -> bool {
    matches!(id, "." | "..")
}

#[async_trait]
impl RecordLookup<User> for UserClient {
    #[instrument(skip(self))]
    async fn exists(&self, id: &str) -> Result<bool, LookupError> {
        let Some(url) = self.user_url(id)? else {
            warn!("Id is not addressable, treating as absent");
            return Ok(false);
        };
        debug!(%url, "Sending request");

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!(error = %e, "User service unreachable");
            LookupError::Transport(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            Ok(true)
        } else if status == StatusCode::NOT_FOUND {
            Ok(false)
        } else {
            warn!(status = status.as_u16(), "Unexpected status from user service");
            Err(LookupError::UnexpectedStatus(status.as_u16()))
        }
    }
}
