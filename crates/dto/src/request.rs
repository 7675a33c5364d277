use serde::Deserialize;

/// One batch of textual hands to evaluate.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub hands: Vec<String>,
}
