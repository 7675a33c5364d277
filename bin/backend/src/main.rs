//! Hand Evaluation Service Binary
//!
//! Serves the batch evaluation API over HTTP on BIND_ADDR
//! (e.g. 0.0.0.0:8080), persisting classified hands to PostgreSQL.

#[tokio::main]
async fn main() {
    showdown_server::log();
    showdown_server::interrupt();
    showdown_server::run().await.unwrap();
}
