use showdown_cards::Hand;
use showdown_cards::Showdown;
use showdown_cards::Strength;
use showdown_database::Evaluation;
use showdown_database::PgErr;
use showdown_database::Sink;
use showdown_dto::EvaluateResponse;
use showdown_dto::HandFailure;
use showdown_dto::HandResult;
use std::sync::Arc;

/// The request-scoped evaluation pipeline behind `POST /results`.
///
/// Holds only the injected persistence capability; every batch carries
/// its own hands, leader tracking, and flags, so concurrent requests
/// share no mutable state and need no locking.
pub struct API {
    sink: Arc<dyn Sink>,
}

impl API {
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self { sink }
    }

    /// Evaluates one batch of textual hands.
    ///
    /// Each hand is assigned its positional request id, then parsed,
    /// validated, classified, and recorded. Illegal hands divert to the
    /// error list without disturbing the rest of the batch; a storage
    /// failure aborts the whole request. After the pass over the batch,
    /// the strongest flag is resolved across the surviving hands.
    pub async fn evaluate(&self, hands: &[String]) -> Result<EvaluateResponse, PgErr> {
        let mut results = Vec::new();
        let mut errors = Vec::new();
        let mut strengths = Vec::new();
        for (index, text) in hands.iter().enumerate() {
            let request_id = format!("01-00002-{:02}", index + 1);
            match Hand::try_from(text.as_str()) {
                Err(error) => errors.push(HandFailure {
                    request_id,
                    hand: text.clone(),
                    error_message: error.to_string(),
                }),
                Ok(hand) => {
                    let strength = Strength::from(&hand);
                    let category = strength.category().to_string();
                    self.sink
                        .record(&Evaluation::new(&request_id, text, &category))
                        .await?;
                    results.push(HandResult {
                        request_id,
                        hand: text.clone(),
                        category,
                        strongest: false,
                    });
                    strengths.push(strength);
                }
            }
        }
        for (result, strongest) in results.iter_mut().zip(Showdown::from(strengths).strongest()) {
            result.strongest = strongest;
        }
        Ok(EvaluateResponse { results, errors })
    }
}
