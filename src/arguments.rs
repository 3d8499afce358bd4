use {crate::common::*, http::uri::Authority};

#[derive(StructOpt, Debug)]
#[structopt(about = "Mirror LND invoices and log every invoice update")]
pub(crate) struct Arguments {
  #[structopt(
    long,
    help = "Connect to LND gRPC server with host and port <lnd-rpc-authority>. By default a locally running LND instance will expose its gRPC API on `localhost:10009`."
  )]
  pub(crate) lnd_rpc_authority: Authority,
  #[structopt(
    long,
    help = "Read LND's TLS certificate from <lnd-rpc-cert-path>. Needed if LND uses a self-signed certificate. By default LND writes its TLS certificate to `~/.lnd/tls.cert`."
  )]
  pub(crate) lnd_rpc_cert_path: Option<PathBuf>,
  #[structopt(
    long,
    help = "Read LND gRPC macaroon from <lnd-rpc-macaroon-path>. The macaroon must include permissions for creating and reading invoices. By default LND writes its invoice macaroon to `~/.lnd/data/chain/bitcoin/mainnet/invoice.macaroon`."
  )]
  pub(crate) lnd_rpc_macaroon_path: Option<PathBuf>,
  #[structopt(long, help = "Read sync settings from YAML file at <config>")]
  pub(crate) config: Option<PathBuf>,
}
