use super::PgErr;
use super::RESULTS;
use super::record::Evaluation;
use tokio_postgres::Client;

/// Sink defines the write interface between classified hands and
/// PostgreSQL. It is a capability handed to the server's API at
/// construction time rather than a process-wide handle, so the
/// evaluation pipeline can run against a no-op sink in tests.
#[async_trait::async_trait]
pub trait Sink: Send + Sync {
    async fn record(&self, evaluation: &Evaluation) -> Result<(), PgErr>;
}

#[async_trait::async_trait]
impl Sink for Client {
    async fn record(&self, evaluation: &Evaluation) -> Result<(), PgErr> {
        #[rustfmt::skip]
        const SQL: &str = const_format::concatcp!(
            "INSERT INTO ", RESULTS, " (request_id, hand, result, timestamp) ",
            "VALUES                    ($1,         $2,   $3,     now())"
        );
        log::info!(
            "recording {} {} as {}",
            evaluation.request_id(),
            evaluation.hand(),
            evaluation.category()
        );
        self.execute(
            SQL,
            &[
                &evaluation.request_id(),
                &evaluation.hand(),
                &evaluation.category(),
            ],
        )
        .await
        .map(|_| ())
    }
}
