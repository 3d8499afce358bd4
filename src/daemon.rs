use {
  crate::{common::*, environment::Environment, invoice_handler::LogHandler},
  openssl::x509::X509,
};

/// Connects to LND, mirrors its invoices and logs every update until the
/// subscription ends.
pub struct Daemon {
  adapter: InvoiceSyncAdapter<lnd_client::Client>,
}

impl Daemon {
  pub async fn setup(environment: &Environment) -> Result<Self> {
    let arguments = environment.arguments()?;

    let config = match &arguments.config {
      Some(path) => Config::load(&environment.resolve(path))?,
      None => Config::default(),
    };

    let certificate = match &arguments.lnd_rpc_cert_path {
      Some(path) => {
        let pem = Self::read(&environment.resolve(path))?;
        Some(X509::from_pem(&pem).context(error::LndRpcCertificateParse)?)
      }
      None => None,
    };

    let macaroon = match &arguments.lnd_rpc_macaroon_path {
      Some(path) => Some(Self::read(&environment.resolve(path))?),
      None => None,
    };

    let client = lnd_client::Client::new(arguments.lnd_rpc_authority.clone(), certificate, macaroon)
      .context(error::LndRpcConnect)?;

    client.ping().await.context(error::LndRpcStatus)?;

    log::info!("Connected to LND at {}", arguments.lnd_rpc_authority);

    let adapter = InvoiceSyncAdapter::new(client, config);
    adapter.add_handler(Arc::new(LogHandler));

    Ok(Self { adapter })
  }

  fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).context(error::FilesystemIo { path })
  }

  pub async fn run(self) -> Result<()> {
    let subscription = self.adapter.sync().await?;
    subscription.await.context(error::SubscriptionTaskPanic)
  }
}
