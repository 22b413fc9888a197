#[tokio::main]
async fn main() -> anyhow::Result<()> {
    maya_server::start().await
}
