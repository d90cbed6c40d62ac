//! Port implementations shipped with the library

mod http_api_client;
mod json_topic_cache;

pub use http_api_client::HttpApiClient;
pub use json_topic_cache::JsonFileTopicCache;
