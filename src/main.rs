#[tokio::main]
async fn main() -> anyhow::Result<()> {
    streamlist::logging::init_tracing();
    streamlist::cli::run().await
}
