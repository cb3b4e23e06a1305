use clap::Parser;
use gitrid::cli::{self, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let context = match cli::prepare(&cli) {
        Ok(context) => context,
        Err((logger, e)) => logger.fail(cli::failure_message(&e)),
    };

    match cli::execute_command(&context).await {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => context.logger.fail(cli::failure_message(&e)),
    }
}
