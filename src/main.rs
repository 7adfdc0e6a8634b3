#[tokio::main]
async fn main() {
    shift_scheduler::run().await;
}
