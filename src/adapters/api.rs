//! REST adapter for the Hanami backend.
//!
//! Implements [`ContentSource`] and [`SettingsSource`] on top of any
//! [`HttpClient`]. Every successful body is wrapped in a `data` envelope;
//! non-2xx responses become [`NetworkError::HttpStatus`] carrying the
//! server's `error`/`message` field when it sent one.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ErrorContext, HanamiResult, NetworkError, ResultExt};
use crate::models::{
    Content, ContentPatch, ContentQuery, Envelope, NewContent, SettingsUpdate, TeacherSettings,
};
use crate::traits::{ContentSource, Headers, HttpClient, HttpError, Response, SettingsSource};

const CONTENT_PATH: &str = "/api/content";
const SETTINGS_PATH: &str = "/api/teacher/settings";

/// Header carrying the client-chosen key for at-most-once creates.
pub const IDEMPOTENCY_HEADER: &str = "Idempotency-Key";

/// HTTP-backed data source.
#[derive(Debug, Clone)]
pub struct ApiClient<C: HttpClient> {
    http: C,
    base_url: String,
    token: Option<String>,
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(http: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());
        if let Some(ref token) = self.token {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn content_item_url(&self, id: &str) -> String {
        self.url(&format!("{}/{}", CONTENT_PATH, id))
    }

    fn content_list_url(&self, query: &ContentQuery) -> Result<String, HttpError> {
        let base = self.url(CONTENT_PATH);
        let pairs = query.to_query_pairs();
        if pairs.is_empty() {
            return Ok(base);
        }
        reqwest::Url::parse_with_params(&base, &pairs)
            .map(String::from)
            .map_err(|e| HttpError::InvalidUrl(format!("{}: {}", base, e)))
    }

    async fn send_create(&self, content: &NewContent, headers: &Headers) -> HanamiResult<Content> {
        let body = encode(content)?;
        let response = self
            .http
            .post(&self.url(CONTENT_PATH), &body, headers)
            .await?;
        decode(check(response)?)
    }
}

/// Reject non-2xx responses, keeping the server's explanation if present.
fn check(response: Response) -> HanamiResult<Response> {
    if response.is_success() {
        return Ok(response);
    }
    let message = server_message(&response);
    Err(NetworkError::HttpStatus {
        status: response.status,
        message,
    }
    .into())
}

/// The `error` or `message` field of a JSON error body. Anything else
/// (HTML error pages, plain text) is only logged.
fn server_message(response: &Response) -> String {
    if let Ok(value) = response.json::<serde_json::Value>() {
        for key in ["error", "message"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.trim().to_string();
            }
        }
    }
    if let Ok(text) = response.text() {
        let text = text.trim();
        if !text.is_empty() {
            let preview: String = text.chars().take(200).collect();
            tracing::debug!(status = response.status, body = %preview, "unstructured error body");
        }
    }
    String::new()
}

fn decode<T: DeserializeOwned>(response: Response) -> HanamiResult<T> {
    let envelope: Envelope<T> = response.json()?;
    Ok(envelope.data)
}

fn encode<T: Serialize>(value: &T) -> HanamiResult<String> {
    Ok(serde_json::to_string(value)?)
}

#[async_trait]
impl<C: HttpClient> ContentSource for ApiClient<C> {
    async fn list_content(&self, query: &ContentQuery) -> HanamiResult<Vec<Content>> {
        let url = self
            .content_list_url(query)
            .context(ErrorContext::new("list_content").with_component("api"))?;
        tracing::debug!(%url, "listing content");

        let response = self.http.get(&url, &self.headers()).await?;
        check(response)
            .and_then(decode)
            .with_context(|| ErrorContext::new("list_content").with_resource(url.clone()))
    }

    async fn create_content(&self, content: &NewContent) -> HanamiResult<Content> {
        tracing::debug!(title = %content.title, "creating content");
        self.send_create(content, &self.headers())
            .await
            .with_context(|| {
                ErrorContext::new("create_content").with_resource(content.title.clone())
            })
    }

    async fn create_content_once(
        &self,
        content: &NewContent,
        idempotency_key: &str,
    ) -> HanamiResult<Content> {
        let mut headers = self.headers();
        headers.insert(IDEMPOTENCY_HEADER.to_string(), idempotency_key.to_string());
        tracing::debug!(title = %content.title, key = idempotency_key, "creating content once");
        self.send_create(content, &headers).await.with_context(|| {
            ErrorContext::new("create_content_once").with_resource(idempotency_key.to_string())
        })
    }

    async fn update_content(&self, id: &str, patch: &ContentPatch) -> HanamiResult<Content> {
        let body = encode(patch)?;
        let response = self
            .http
            .put(&self.content_item_url(id), &body, &self.headers())
            .await?;
        check(response)
            .and_then(decode)
            .with_context(|| ErrorContext::new("update_content").with_resource(id.to_string()))
    }

    async fn delete_content(&self, id: &str) -> HanamiResult<()> {
        let response = self
            .http
            .delete(&self.content_item_url(id), &self.headers())
            .await?;
        check(response)
            .map(|_| ())
            .with_context(|| ErrorContext::new("delete_content").with_resource(id.to_string()))
    }
}

#[async_trait]
impl<C: HttpClient> SettingsSource for ApiClient<C> {
    async fn fetch_settings(&self) -> HanamiResult<TeacherSettings> {
        let response = self
            .http
            .get(&self.url(SETTINGS_PATH), &self.headers())
            .await?;
        check(response)
            .and_then(decode)
            .context(ErrorContext::new("fetch_settings"))
    }

    async fn update_settings(&self, update: &SettingsUpdate) -> HanamiResult<()> {
        let body = encode(update)?;
        let response = self
            .http
            .put(&self.url(SETTINGS_PATH), &body, &self.headers())
            .await?;
        check(response)
            .map(|_| ())
            .context(ErrorContext::new("update_settings"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::catalog::PREDEFINED_GAMES;
    use crate::models::{ContentType, NotificationChange, SettingsChange};
    use bytes::Bytes;
    use serde_json::json;

    const BASE: &str = "http://api.test";

    fn client() -> (MockHttpClient, ApiClient<MockHttpClient>) {
        let http = MockHttpClient::new();
        (http.clone(), ApiClient::new(http, format!("{}/", BASE)))
    }

    fn games_envelope() -> serde_json::Value {
        let games: Vec<Content> = PREDEFINED_GAMES
            .iter()
            .enumerate()
            .map(|(i, g)| g.to_content(i))
            .collect();
        json!({ "data": games })
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let (_, api) = client();
        assert_eq!(api.base_url(), BASE);
    }

    #[test]
    fn test_content_list_url_encodes_query() {
        let (_, api) = client();
        let query = ContentQuery::new()
            .with_type(ContentType::Game)
            .with_search("deep breathing");
        let url = api.content_list_url(&query).unwrap();
        assert_eq!(
            url,
            "http://api.test/api/content?type=game&search=deep+breathing"
        );

        let url = api.content_list_url(&ContentQuery::new()).unwrap();
        assert_eq!(url, "http://api.test/api/content");
    }

    #[tokio::test]
    async fn test_list_content_unwraps_envelope() {
        let (http, api) = client();
        http.set_response(
            "http://api.test/api/content",
            MockResponse::Success(Response::json_body(200, &games_envelope())),
        );

        let items = api.list_content(&ContentQuery::new()).await.unwrap();
        assert_eq!(items.len(), PREDEFINED_GAMES.len());
        assert_eq!(items[0].id, "game-1");
    }

    #[tokio::test]
    async fn test_headers_include_token() {
        let (http, api) = client();
        let api = api.with_token("secret");
        http.set_default_response(MockResponse::Success(Response::json_body(
            200,
            &json!({ "data": [] }),
        )));

        api.list_content(&ContentQuery::new()).await.unwrap();

        let requests = http.requests();
        assert_eq!(
            requests[0].headers.get("Authorization"),
            Some(&"Bearer secret".to_string())
        );
        assert_eq!(
            requests[0].headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_error_status_carries_server_message() {
        let (http, api) = client();
        http.set_response(
            "http://api.test/api/content",
            MockResponse::Success(Response::json_body(
                400,
                &json!({ "error": "Unknown category" }),
            )),
        );

        let err = api
            .list_content(&ContentQuery::new().with_category("nope"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Unknown category");
        assert_eq!(err.context().unwrap().operation, "list_content");
    }

    #[tokio::test]
    async fn test_conflict_and_unprocessable_carry_server_message() {
        let (http, api) = client();
        let new_content = PREDEFINED_GAMES[0].to_new_content();

        for (status, body, expected) in [
            (409, json!({ "error": "Title already exists" }), "Title already exists"),
            (422, json!({ "message": "Duration must be positive" }), "Duration must be positive"),
        ] {
            http.set_response(
                "http://api.test/api/content",
                MockResponse::Success(Response::json_body(status, &body)),
            );
            let err = api.create_content(&new_content).await.unwrap_err();
            assert_eq!(err.user_message(), expected);
        }
    }

    #[tokio::test]
    async fn test_html_error_page_is_not_shown() {
        let (http, api) = client();
        http.set_response(
            "http://api.test/api/teacher/settings",
            MockResponse::Success(Response::new(
                502,
                Bytes::from_static(b"<html><body>Bad Gateway</body></html>"),
            )),
        );

        let err = api.fetch_settings().await.unwrap_err();
        assert_eq!(
            err.user_message(),
            "The server is experiencing issues. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_create_once_sends_idempotency_key() {
        let (http, api) = client();
        let game = &PREDEFINED_GAMES[0];
        http.set_response(
            "http://api.test/api/content",
            MockResponse::Success(Response::json_body(
                201,
                &json!({ "data": game.to_content(0) }),
            )),
        );

        let created = api
            .create_content_once(&game.to_new_content(), "predefined-game:breathing-bubbles")
            .await
            .unwrap();
        assert_eq!(created.title, game.title);

        let posts = http.requests_with_method("POST");
        assert_eq!(posts.len(), 1);
        assert_eq!(
            posts[0].headers.get(IDEMPOTENCY_HEADER),
            Some(&"predefined-game:breathing-bubbles".to_string())
        );
        let body: serde_json::Value =
            serde_json::from_str(posts[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["status"], "published");
        assert_eq!(body["type"], "game");
    }

    #[tokio::test]
    async fn test_update_and_delete_hit_item_url() {
        let (http, api) = client();
        let mut updated = PREDEFINED_GAMES[1].to_content(1);
        updated.title = "Renamed".to_string();
        http.set_response(
            "http://api.test/api/content/game-2",
            MockResponse::Success(Response::json_body(200, &json!({ "data": updated }))),
        );

        let patch = ContentPatch {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        let result = api.update_content("game-2", &patch).await.unwrap();
        assert_eq!(result.title, "Renamed");

        api.delete_content("game-2").await.unwrap();

        let put = &http.requests_with_method("PUT")[0];
        assert_eq!(put.body.as_deref(), Some(r#"{"title":"Renamed"}"#));
        assert_eq!(http.requests_with_method("DELETE")[0].url, put.url);
    }

    #[tokio::test]
    async fn test_settings_roundtrip() {
        let (http, api) = client();
        let mut settings = TeacherSettings::default();
        settings.apply(SettingsChange::Notifications(NotificationChange::Email(false)));
        http.set_response(
            "http://api.test/api/teacher/settings",
            MockResponse::Success(Response::json_body(200, &json!({ "data": settings }))),
        );

        let fetched = api.fetch_settings().await.unwrap();
        assert_eq!(fetched, settings);

        api.update_settings(&SettingsUpdate::from(fetched))
            .await
            .unwrap();
        let put = &http.requests_with_method("PUT")[0];
        let body: serde_json::Value = serde_json::from_str(put.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["notifications"]["email"], false);
        assert_eq!(body["calendar"]["weekStartsOn"], 1);
    }

    #[tokio::test]
    async fn test_update_settings_server_error() {
        let (http, api) = client();
        http.set_response(
            "http://api.test/api/teacher/settings",
            MockResponse::Success(Response::new(503, Bytes::new())),
        );

        let err = api
            .update_settings(&SettingsUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(
            err.user_message(),
            "The server is experiencing issues. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let (http, api) = client();
        http.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));

        let err = api.fetch_settings().await.unwrap_err();
        assert!(err.category().is_retryable());
    }
}
