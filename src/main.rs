use clap::Parser;

use polyscope::cli::{self, output, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(error) = cli::execute(cli).await {
        output::error(&error.to_string());
        std::process::exit(1);
    }
}
