#[tokio::main]
async fn main() -> std::io::Result<()> {
    cube_dodge::run_with_config().await
}
