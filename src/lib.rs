//! Data access for the `api/heroes` REST resource.
//!
//! `HeroService` never fails its caller: a failed request resolves with a
//! fallback value and leaves a line in the shared message log.

pub mod api;
pub mod error;
pub mod http;
pub mod message;
pub mod service;
pub mod types;

pub use error::RequestError;
pub use http::{HttpClient, ReqwestClient};
pub use message::{MessageService, MessageSink};
pub use service::HeroService;
pub use types::{Hero, HeroList, NewHero};
