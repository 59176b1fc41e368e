use crate::error::RequestError;
use futures::future::{BoxFuture, FutureExt};
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Url};
use serde_json::Value;

/// The HTTP capability `HeroService` talks through.
///
/// Paths are relative (`api/heroes/7`) and resolved by the implementation.
/// Every call yields the decoded JSON body; an empty body comes back as
/// `Value::Null`.
pub trait HttpClient: Send + Sync {
    fn get<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<Value, RequestError>>;

    fn post<'a>(
        &'a self,
        path: &'a str,
        body: Value,
        headers: &'a HeaderMap,
    ) -> BoxFuture<'a, Result<Value, RequestError>>;

    fn put<'a>(
        &'a self,
        path: &'a str,
        body: Value,
        headers: &'a HeaderMap,
    ) -> BoxFuture<'a, Result<Value, RequestError>>;

    fn delete<'a>(
        &'a self,
        path: &'a str,
        headers: &'a HeaderMap,
    ) -> BoxFuture<'a, Result<Value, RequestError>>;
}

pub struct ReqwestClient {
    client: Client,
    base_url: Url,
}

impl ReqwestClient {
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, url::ParseError> {
        // Url::join drops the last segment unless the base ends with a slash.
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: Option<&HeaderMap>,
    ) -> Result<Value, RequestError> {
        let url = self.base_url.join(path)?;
        let mut request = self.client.request(method, url.clone());
        if let Some(headers) = headers {
            request = request.headers(headers.clone());
        }
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(&body).map_err(RequestError::Encode)?);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&body)?)
    }
}

impl HttpClient for ReqwestClient {
    fn get<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<Value, RequestError>> {
        self.send(Method::GET, path, None, None).boxed()
    }

    fn post<'a>(
        &'a self,
        path: &'a str,
        body: Value,
        headers: &'a HeaderMap,
    ) -> BoxFuture<'a, Result<Value, RequestError>> {
        self.send(Method::POST, path, Some(body), Some(headers)).boxed()
    }

    fn put<'a>(
        &'a self,
        path: &'a str,
        body: Value,
        headers: &'a HeaderMap,
    ) -> BoxFuture<'a, Result<Value, RequestError>> {
        self.send(Method::PUT, path, Some(body), Some(headers)).boxed()
    }

    fn delete<'a>(
        &'a self,
        path: &'a str,
        headers: &'a HeaderMap,
    ) -> BoxFuture<'a, Result<Value, RequestError>> {
        self.send(Method::DELETE, path, None, Some(headers)).boxed()
    }
}
