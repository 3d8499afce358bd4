use invoice_sync::{Daemon, Environment, Error, Result};

#[tokio::main]
async fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  if let Err(error) = run().await {
    if let Error::Clap { source, .. } = error {
      source.exit();
    } else {
      error.print_backtrace(&mut termcolor::StandardStream::stderr(
        termcolor::ColorChoice::Auto,
      ));
      eprintln!("{}", error);
      std::process::exit(1);
    }
  }
}

async fn run() -> Result<()> {
  let environment = Environment::production()?;
  let daemon = Daemon::setup(&environment).await?;
  daemon.run().await
}
