// helper method to enable structured logging for embedding applications
pub fn setup_tracing() {
    // try_init so repeated calls (e.g. from tests) are a no-op instead of a panic
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .try_init();
}
