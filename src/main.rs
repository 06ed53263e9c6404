#[tokio::main]
async fn main() {
    if let Err(e) = contract_reviewer::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
