use spesen::commands::Cli;
use spesen::msg_error;

#[tokio::main]
async fn main() {
    if let Err(e) = Cli::menu().await {
        msg_error!(format!("{:#}", e));
        std::process::exit(1);
    }
}
