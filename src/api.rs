//! Typed client for the finance tracker REST endpoints.

use gloo_net::http::{Request, Response};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;
use web_sys::RequestCredentials;

use crate::error::ApiError;
use crate::models::{Category, NewTransaction, SummaryPayload, Transaction, UploadOutcome};

/// Whether the browser carries a live backend session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Checking,
    Authenticated,
    Unauthenticated,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient { base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn probe_session(&self) -> SessionState {
        match self.fetch_categories().await {
            Ok(_) => SessionState::Authenticated,
            Err(err) => {
                log::info!("No active session: {}", err);
                SessionState::Unauthenticated
            }
        }
    }

    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        let resp = Request::get(&self.url("/categories"))
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        read_json(resp).await
    }

    pub async fn create_category(&self, name: &str) -> Result<Category, ApiError> {
        let resp = Request::post(&self.url("/categories"))
            .credentials(RequestCredentials::Include)
            .json(&serde_json::json!({ "name": name }))?
            .send()
            .await?;
        read_json(resp).await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        let resp = Request::delete(&self.url(&format!("/categories/{}", id)))
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        read_json::<IgnoredAny>(resp).await.map(|_| ())
    }

    pub async fn fetch_summary(&self) -> Result<SummaryPayload, ApiError> {
        let resp = Request::get(&self.url("/transactions/get_summary"))
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        read_json(resp).await
    }

    pub async fn add_transaction(&self, tx: &NewTransaction) -> Result<Transaction, ApiError> {
        let resp = Request::post(&self.url("/transactions/add_transaction"))
            .credentials(RequestCredentials::Include)
            .json(tx)?
            .send()
            .await?;
        read_json(resp).await
    }

    pub async fn delete_transaction(&self, id: i64) -> Result<(), ApiError> {
        let resp = Request::delete(&self.url(&format!("/transactions/delete_transaction/{}", id)))
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        read_json::<IgnoredAny>(resp).await.map(|_| ())
    }

    pub async fn upload_pdf(&self, file: &web_sys::File) -> Result<UploadOutcome, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Browser("could not create form data".to_string()))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| ApiError::Browser("could not attach file".to_string()))?;

        // No explicit content type: the browser sets the multipart boundary.
        let resp = Request::post(&self.url("/transactions/upload_pdf"))
            .credentials(RequestCredentials::Include)
            .body(form)?
            .send()
            .await?;
        read_json(resp).await
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let ok = resp.ok();
    let text = resp.text().await?;
    decode_body(ok, status, &text)
}

/// Maps a raw response onto the expected type or the matching [`ApiError`].
pub fn decode_body<T: DeserializeOwned>(ok: bool, status: u16, body: &str) -> Result<T, ApiError> {
    let value = if body.trim().is_empty() {
        Value::Null
    } else {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => value,
            Err(_) if !ok => return Err(ApiError::Status(status)),
            Err(err) => return Err(err.into()),
        }
    };

    let backend_error = value
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string);

    if !ok {
        return Err(backend_error
            .map(ApiError::Backend)
            .unwrap_or(ApiError::Status(status)));
    }
    if let Some(message) = backend_error {
        return Err(ApiError::Backend(message));
    }

    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.url("/categories"), "http://localhost:5000/categories");
        assert_eq!(ApiClient::new("").url("/categories"), "/categories");
    }

    #[test]
    fn decodes_successful_body() {
        let categories: Vec<Category> = decode_body(
            true,
            200,
            r#"[{"id": 1, "name": "Food", "is_default": true}, {"id": 2, "name": "Fun", "is_default": false}]"#,
        )
        .unwrap();
        assert_eq!(categories.len(), 2);
        assert!(categories[0].is_default);
    }

    #[test]
    fn error_field_wins_on_success_status() {
        let result = decode_body::<UploadOutcome>(true, 200, r#"{"error": "Invalid file type"}"#);
        match result {
            Err(ApiError::Backend(msg)) => assert_eq!(msg, "Invalid file type"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn failed_status_uses_error_message_when_present() {
        let result = decode_body::<IgnoredAny>(false, 400, r#"{"error": "Cannot delete default category"}"#);
        assert!(matches!(result, Err(ApiError::Backend(ref m)) if m == "Cannot delete default category"));

        let result = decode_body::<IgnoredAny>(false, 502, "<html>Bad gateway</html>");
        assert!(matches!(result, Err(ApiError::Status(502))));
    }

    #[test]
    fn login_page_instead_of_json_is_a_decode_error() {
        let result = decode_body::<Vec<Category>>(true, 200, "<!doctype html><form>login</form>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn delete_acknowledgement_is_accepted() {
        assert!(decode_body::<IgnoredAny>(true, 200, r#"{"message": "Transaction deleted"}"#).is_ok());
        assert!(decode_body::<IgnoredAny>(true, 200, "").is_ok());
    }
}
