use crate::api::{api_hero, api_search, API_HEROES};
use crate::error::RequestError;
use crate::http::HttpClient;
use crate::message::MessageSink;
use crate::types::{Hero, HeroList, NewHero};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Data access for heroes.
///
/// No operation ever returns an error. A failed request is logged to the
/// message sink as `"<operation> failed: <reason>"` and the operation resolves
/// with its fallback: `None` for single values, an empty list for lists.
pub struct HeroService {
    http: Arc<dyn HttpClient>,
    messages: Arc<dyn MessageSink>,
    http_options: HeaderMap,
}

impl HeroService {
    pub fn new(http: Arc<dyn HttpClient>, messages: Arc<dyn MessageSink>) -> Self {
        let mut http_options = HeaderMap::new();
        http_options.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Self {
            http,
            messages,
            http_options,
        }
    }

    /// A success with an empty or `null` body also resolves to `None`, but is
    /// logged as fetched.
    pub async fn get_hero(&self, id: i32) -> Option<Hero> {
        let path = api_hero(id);
        let result = decode::<Option<Hero>>(self.http.get(&path).await);
        self.handle(result, &format!("getHero id: {id}"), |_| {
            format!("fetched hero id: {id}")
        })
        .flatten()
    }

    pub async fn get_heroes(&self) -> HeroList {
        let result = decode(self.http.get(API_HEROES).await);
        self.handle(result, "getHeroes", |_| "fetched heroes".to_string())
            .unwrap_or_default()
    }

    pub async fn add_hero(&self, hero: NewHero) -> Option<Hero> {
        let result = match encode(&hero) {
            Ok(body) => decode(self.http.post(API_HEROES, body, &self.http_options).await),
            Err(err) => Err(err),
        };
        self.handle(result, "addHero", |new_hero: &Hero| {
            format!("added hero w/ id: {}", new_hero.id)
        })
    }

    /// Resolves with whatever the server answered; `Value::Null` for an empty body.
    pub async fn update_hero(&self, hero: &Hero) -> Option<Value> {
        let result = match encode(hero) {
            Ok(body) => self.http.put(API_HEROES, body, &self.http_options).await,
            Err(err) => Err(err),
        };
        self.handle(result, "updateHero", |_| {
            format!("updated hero id: {}", hero.id)
        })
    }

    /// Resolves with the echoed hero; `None` when the server answers without
    /// a body (e.g. 204), which still counts as a successful delete.
    pub async fn delete_hero(&self, id: i32) -> Option<Hero> {
        let path = api_hero(id);
        let result = decode::<Option<Hero>>(self.http.delete(&path, &self.http_options).await);
        self.handle(result, "deleteHero", |_| format!("deleted hero id: {id}"))
            .flatten()
    }

    /// Heroes whose name matches `term`. A blank term resolves to an empty
    /// list without touching the network or the message log.
    pub async fn search_heroes(&self, term: &str) -> HeroList {
        if term.trim().is_empty() {
            return Vec::new();
        }

        let path = api_search(term);
        let result = decode(self.http.get(&path).await);
        self.handle(result, "searchHeroes", |heroes: &HeroList| {
            if heroes.is_empty() {
                format!("no heroes matching \"{term}\"")
            } else {
                format!("found heroes matching \"{term}\"")
            }
        })
        .unwrap_or_default()
    }

    fn handle<T>(
        &self,
        result: Result<T, RequestError>,
        operation: &str,
        on_success: impl FnOnce(&T) -> String,
    ) -> Option<T> {
        match result {
            Ok(value) => {
                self.log(on_success(&value));
                Some(value)
            }
            Err(err) => {
                tracing::error!(operation, error = ?err, "hero request failed");
                self.log(format!("{operation} failed: {err}"));
                None
            }
        }
    }

    fn log(&self, message: String) {
        self.messages.add(format!("HeroService: {message}"));
    }
}

fn decode<T: DeserializeOwned>(response: Result<Value, RequestError>) -> Result<T, RequestError> {
    Ok(serde_json::from_value(response?)?)
}

fn encode<T: Serialize>(body: &T) -> Result<Value, RequestError> {
    serde_json::to_value(body).map_err(RequestError::Encode)
}
