#[tokio::main]
async fn main() {
    eventech_backend::run().await;
}
