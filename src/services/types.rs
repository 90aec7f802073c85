//! Wire types shared by the greeting, name and aggregator services.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Greetings served by `GET /greet`.
pub const GREETINGS: &[&str] = &["Hi", "Hello"];

/// Names served by `GET /name`.
pub const NAMES: &[&str] = &["Alice", "Bob", "Charlie", "Dheeraj"];

/// Body of `GET /greet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub greeting: String,
}

/// Body of `GET /name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameResponse {
    pub name: String,
}

/// Body of the aggregator's `GET /` and `GET /other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResponse {
    pub message: String,
}

impl AggregateResponse {
    /// Join a greeting and a name with a single space.
    pub fn compose(greeting: &str, name: &str) -> Self {
        Self {
            message: format!("{} {}", greeting, name),
        }
    }
}

/// Pick one entry uniformly at random.
///
/// Both choice sets are non-empty constants; an empty slice yields `""`.
pub fn pick(choices: &'static [&'static str]) -> &'static str {
    choices.choose(&mut rand::thread_rng()).copied().unwrap_or_default()
}
