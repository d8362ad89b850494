use folio::cli;
use folio::logger::Logger;
use std::env::args;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut logger = Logger::new_real();
    let behavior = cli::parse(args().skip(1));
    cli::execute(behavior, &mut logger).await
}
