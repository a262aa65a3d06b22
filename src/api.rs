//! Backend API Bindings
//!
//! HTTP wrappers over the activity endpoints, using the browser's fetch
//! API via gloo_net. All URLs are same-origin relative paths.

use gloo_net::http::{Request, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{ActivityMap, DetailBody, MessageBody};

/// Outcome of a backend call, split the way the UI reports it
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a usable response (fetch or JSON
    /// parse failure). Shown to the user as a generic message.
    Network(String),
    /// The backend answered with an error payload. The detail string
    /// is shown verbatim.
    Server(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "network error: {e}"),
            ApiError::Server(detail) => write!(f, "{detail}"),
        }
    }
}

/// Same escape set as JavaScript's encodeURIComponent: everything but
/// ASCII alphanumerics and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode(component: &str) -> String {
    utf8_percent_encode(component, URI_COMPONENT).to_string()
}

fn signup_url(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/signup?email={}",
        encode(activity),
        encode(email)
    )
}

fn participants_url(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/participants?email={}",
        encode(activity),
        encode(email)
    )
}

/// Extract the `{detail}` body from a non-2xx response, falling back to
/// the status code when the body isn't the expected shape.
async fn server_error(resp: Response) -> ApiError {
    match resp.json::<DetailBody>().await {
        Ok(body) => ApiError::Server(body.detail),
        Err(_) => ApiError::Server(format!("Request failed with status {}", resp.status())),
    }
}

async fn read_message(resp: Response) -> Result<String, ApiError> {
    resp.json::<MessageBody>()
        .await
        .map(|body| body.message)
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// GET /activities
pub async fn fetch_activities() -> Result<ActivityMap, ApiError> {
    let resp = Request::get("/activities")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(server_error(resp).await);
    }

    resp.json::<ActivityMap>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// POST /activities/{name}/signup?email={email}
pub async fn sign_up(activity: &str, email: &str) -> Result<String, ApiError> {
    let resp = Request::post(&signup_url(activity, email))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(server_error(resp).await);
    }

    read_message(resp).await
}

/// DELETE /activities/{name}/participants?email={email}
pub async fn remove_participant(activity: &str, email: &str) -> Result<String, ApiError> {
    let resp = Request::delete(&participants_url(activity, email))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(server_error(resp).await);
    }

    read_message(resp).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode("Chess Club"), "Chess%20Club");
        assert_eq!(encode("a@x.com"), "a%40x.com");
        assert_eq!(encode("plain-name_1.txt"), "plain-name_1.txt");
        assert_eq!(encode("it's (fine)!~*"), "it's%20(fine)!~*");
    }

    #[test]
    fn builds_signup_url() {
        assert_eq!(
            signup_url("Chess Club", "newstudent@mergington.edu"),
            "/activities/Chess%20Club/signup?email=newstudent%40mergington.edu"
        );
    }

    #[test]
    fn builds_participants_url() {
        assert_eq!(
            participants_url("Gym Class", "a@x.com"),
            "/activities/Gym%20Class/participants?email=a%40x.com"
        );
    }
}
