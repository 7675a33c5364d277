use super::RESULTS;
use super::traits::Schema;

/// One classified hand headed for durable storage: the request-scoped
/// identifier, the hand exactly as submitted, and the category name.
/// Hands that fail validation are never recorded.
#[derive(Debug, Clone)]
pub struct Evaluation {
    request_id: String,
    hand: String,
    category: String,
}

impl Evaluation {
    pub fn new(request_id: &str, hand: &str, category: &str) -> Self {
        Self {
            request_id: String::from(request_id),
            hand: String::from(hand),
            category: String::from(category),
        }
    }
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
    pub fn hand(&self) -> &str {
        &self.hand
    }
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Schema for Evaluation {
    fn name() -> &'static str {
        RESULTS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            RESULTS,
            " (
                id          SERIAL PRIMARY KEY,
                request_id  VARCHAR(255),
                hand        VARCHAR(255),
                result      VARCHAR(255),
                timestamp   TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX IF NOT EXISTS idx_results_request ON ",
            RESULTS,
            " (request_id);"
        )
    }
}
