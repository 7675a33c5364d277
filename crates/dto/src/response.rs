use serde::Serialize;

/// A successfully classified hand.
#[derive(Debug, Clone, Serialize)]
pub struct HandResult {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub hand: String,
    pub category: String,
    pub strongest: bool,
}

/// A hand diverted to the error list; the rest of the batch is unaffected.
#[derive(Debug, Clone, Serialize)]
pub struct HandFailure {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub hand: String,
    #[serde(rename = "errorMessage")]
    pub error_message: String,
}

/// The evaluation endpoint's 200 body: classified hands and per-hand
/// failures, each in submission order.
#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub results: Vec<HandResult>,
    pub errors: Vec<HandFailure>,
}

/// Body for whole-request failures (400/500).
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    /// The inbound payload could not be decoded into a batch.
    pub fn malformed() -> Self {
        Self {
            message: String::from("the request body could not be decoded"),
        }
    }
    /// Infrastructure failure; deliberately free of internal detail.
    pub fn internal() -> Self {
        Self {
            message: String::from("an error occurred on the server"),
        }
    }
}
