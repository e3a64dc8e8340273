use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    customer_registry_cli::run().await
}
