#[tokio::main]
async fn main() {
    sotd::server::main::run_server().await;
}
