#[tokio::main]
async fn main() {
    if let Err(e) = medqueue_lib::run().await {
        eprintln!("medqueue: {e}");
        std::process::exit(1);
    }
}
