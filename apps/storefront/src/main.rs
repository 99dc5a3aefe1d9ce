//! # Padaria Storefront Entry Point
//!
//! The setup and loop live in lib.rs so the shell can be tested without a
//! terminal.

#[tokio::main]
async fn main() {
    if let Err(e) = padaria_storefront::run().await {
        eprintln!("padaria: {}", e);
        std::process::exit(1);
    }
}
