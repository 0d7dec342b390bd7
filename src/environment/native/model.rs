use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use strum_macros::Display;
use url::Url;

use crate::environment::config::Config;
use crate::environment::types::ApiError;

#[derive(Display, Debug, Clone, Copy, Eq, PartialEq)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: &impl serde::Serialize) -> Result<Self, ApiError> {
        let path = path.into();
        let body = serde_json::to_value(body).api_error(&path)?;
        Ok(Self {
            method: Method::Post,
            path,
            body: Some(body),
        })
    }

    pub fn put(path: impl Into<String>, body: Option<&impl serde::Serialize>) -> Result<Self, ApiError> {
        let path = path.into();
        let body = body
            .map(|b| serde_json::to_value(b).api_error(&path))
            .transpose()?;
        Ok(Self {
            method: Method::Put,
            path,
            body,
        })
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }

    /// Used for log lines and error messages
    pub fn call(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

/// The transport behind every effect. The reducers never see it.
#[async_trait]
pub trait Api: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;

    /// Sign all following requests with this token
    fn set_token(&self, token: Option<String>);
}

#[derive(Clone)]
pub struct Model {
    pub url: Url,
    client: reqwest::Client,
    token: Arc<Mutex<Option<String>>>,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model").field("url", &self.url.as_str()).finish()
    }
}

impl Model {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .api_error("client")?;
        let mut url = config.api_url.clone();
        // `Url::join` would otherwise drop the last path segment
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            url,
            client,
            token: Arc::default(),
        })
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    fn token(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.url
            .join(path.trim_start_matches('/'))
            .api_error("endpoint")
    }
}

#[async_trait]
impl Api for Model {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let call = request.call();
        log::trace!("{call}");
        let url = self.endpoint(&request.path)?;
        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };
        if let Some(token) = self.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.api_error(&call)?;
        let status = response.status();
        let bytes = response.bytes().await.api_error(&call)?;
        if !status.is_success() {
            return Err(error_from_response(&call, status, &bytes));
        }
        log::trace!("{call} arrived {} bytes", bytes.len());
        Ok(parse_body(&bytes))
    }

    fn set_token(&self, token: Option<String>) {
        if let Ok(mut current) = self.token.lock() {
            *current = token;
        }
    }
}

/// Deletes answer with plain text on some servers
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

fn error_from_response(call: &str, status: StatusCode, bytes: &[u8]) -> ApiError {
    let message = match parse_body(bytes) {
        Value::Object(map) => ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(|v| v.as_str()).map(str::to_string)),
        Value::String(text) if !text.trim().is_empty() => Some(text),
        _ => None,
    }
    .unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    });
    log::error!("API Error: {call} {status} {message}");
    ApiError::with_status(message, status.as_u16())
}

pub(crate) trait ResultExt {
    type Output;
    fn api_error(self, call: &str) -> Result<Self::Output, ApiError>;
}

impl<T, E: std::fmt::Display + std::fmt::Debug> ResultExt for Result<T, E> {
    type Output = T;
    fn api_error(self, call: &str) -> Result<T, ApiError> {
        self.map_err(|e| {
            log::error!("API Error: {call} {e:?}");
            ApiError::new(e.to_string())
        })
    }
}

#[allow(unused)]
#[cfg(debug_assertions)]
pub mod mock {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::Value;

    use super::{Api, ApiRequest};
    use crate::environment::types::*;

    pub fn make_user(id: u64) -> User {
        User {
            id: UserId(id),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            gender: Some("female".to_string()),
            pro_image: String::new(),
        }
    }

    pub fn make_post(id: u64, caption: &str) -> Post {
        Post {
            id: PostId(id),
            caption: caption.to_string(),
            user: make_user(1),
            ..Default::default()
        }
    }

    pub fn make_meal_plan(id: u64, caption: &str) -> MealPlanPost {
        MealPlanPost {
            id: PostId(id),
            caption: caption.to_string(),
            description: "2 eggs, 1 banana".to_string(),
            user: make_user(1),
            ..Default::default()
        }
    }

    pub fn make_status(id: u64, caption: &str) -> StatusPost {
        StatusPost {
            id: PostId(id),
            caption: caption.to_string(),
            distance_run: 5.0,
            pushups_completed: 30,
            weight_lifted: 60.0,
            user: make_user(1),
            ..Default::default()
        }
    }

    pub fn make_comment(id: u64, content: &str) -> Comment {
        Comment {
            id: CommentId(id),
            content: content.to_string(),
            user: make_user(2),
            created_at: None,
        }
    }

    /// Answers calls from a queue and remembers what was asked.
    /// An empty queue answers `null`.
    #[derive(Default)]
    pub struct MockApi {
        responses: Mutex<VecDeque<Result<Value, ApiError>>>,
        requests: Mutex<Vec<ApiRequest>>,
        token: Mutex<Option<String>>,
    }

    impl MockApi {
        pub fn respond(&self, response: Result<Value, ApiError>) -> &Self {
            self.responses.lock().unwrap().push_back(response);
            self
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub fn token(&self) -> Option<String> {
            self.token.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Api for MockApi {
        async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(Value::Null))
        }

        fn set_token(&self, token: Option<String>) {
            *self.token.lock().unwrap() = token;
        }
    }
}
