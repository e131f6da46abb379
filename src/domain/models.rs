use serde::Deserialize;

use super::errors::ApiResult;

/// Response body of `GET /api/hello`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GreetingOfTheDay {
    pub message: String,
    pub description: String,
    pub version: String,
}

/// Response body of `GET /api/greet/{name}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PersonalGreeting {
    pub message: String,
}

/// Outcome of a remote read, delivered from a worker thread back to the
/// UI thread once the request settles.
#[derive(Debug)]
pub enum RemoteEvent {
    HelloSettled(ApiResult<GreetingOfTheDay>),
    GreetingSettled(ApiResult<PersonalGreeting>),
}
