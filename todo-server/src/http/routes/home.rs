//! Greeting endpoint

use axum::{routing::get, Json, Router};

/// Fixed greeting returned by `GET /`
pub const GREETING: &str = "أهلا بالعالم";

/// GET /
async fn greet() -> Json<&'static str> {
    Json(GREETING)
}

/// Home routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(greet))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn greet_returns_fixed_string() {
        let Json(body) = greet().await;
        assert_eq!(body, GREETING);
    }
}
