use {
  crate::common::*,
  color_backtrace::BacktracePrinter,
  snafu::{ErrorCompat, Snafu},
  std::{num::TryFromIntError, path::MAIN_SEPARATOR},
  structopt::clap,
  termcolor::WriteColor,
  tokio::task::JoinError,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
  #[snafu(context(false), display("{}", source))]
  Clap {
    backtrace: Backtrace,
    source: clap::Error,
  },
  #[snafu(display("Failed to deserialize config file at `{}`: {}", path.display(), source))]
  ConfigDeserialize {
    backtrace: Backtrace,
    path: PathBuf,
    source: serde_yaml::Error,
  },
  #[snafu(display("Config file at `{}` sets `page-size` to 0", path.display()))]
  ConfigPageSize { backtrace: Backtrace, path: PathBuf },
  #[snafu(display("Failed to retrieve current directory: {}", source))]
  CurrentDir {
    backtrace: Backtrace,
    source: io::Error,
  },
  #[snafu(display("IO error accessing filesystem at `{}`: {}", path.display(), source))]
  FilesystemIo {
    backtrace: Backtrace,
    path: PathBuf,
    source: io::Error,
  },
  #[snafu(display("Invoice handler failed: {}", message))]
  Handler {
    backtrace: Backtrace,
    message: String,
  },
  #[snafu(display("Invoice {} has invalid value of {} msat: {}", hash, value_msat, source))]
  InvoiceValue {
    backtrace: Backtrace,
    hash: String,
    value_msat: i64,
    source: TryFromIntError,
  },
  #[snafu(display("OpenSSL error parsing LND RPC certificate: {}", source))]
  LndRpcCertificateParse {
    backtrace: Backtrace,
    source: openssl::error::ErrorStack,
  },
  #[snafu(display("OpenSSL error connecting to LND RPC server: {}", source))]
  LndRpcConnect {
    backtrace: Backtrace,
    source: openssl::error::ErrorStack,
  },
  #[snafu(display("LND RPC call failed: {}", source))]
  LndRpcStatus {
    backtrace: Backtrace,
    source: tonic::Status,
  },
  #[snafu(display("Backfill page size must be greater than 0"))]
  PageSizeZero { backtrace: Backtrace },
  #[snafu(display("Invoice subscription task panicked: {}", source))]
  SubscriptionTaskPanic {
    backtrace: Backtrace,
    source: JoinError,
  },
}

impl Error {
  /// Failure reported by an `InvoiceHandler`.
  pub fn handler(message: impl Into<String>) -> Self {
    Handler { message }.build()
  }

  pub fn print_backtrace(&self, write_color: &mut impl WriteColor) {
    if let Some(backtrace) = ErrorCompat::backtrace(self) {
      BacktracePrinter::new()
        .add_frame_filter(Box::new(|frames| {
          frames.retain(
            |frame| match frame.filename.as_ref().and_then(|x| x.to_str()) {
              Some(file) => {
                !(file.starts_with("/rustc/")
                  || file.contains(&format!(
                    "{}.cargo{}registry{}",
                    MAIN_SEPARATOR, MAIN_SEPARATOR, MAIN_SEPARATOR
                  )))
              }
              None => false,
            },
          );
        }))
        .print_trace(backtrace, write_color)
        .ok();
    }
  }
}

#[derive(Debug)]
pub struct Backtrace {
  inner: Option<snafu::Backtrace>,
}

impl snafu::GenerateBacktrace for Backtrace {
  fn generate() -> Self {
    Self {
      inner: if cfg!(test) || env::var_os("INVOICE_SYNC_SUPPRESS_BACKTRACE").is_some() {
        None
      } else {
        Some(snafu::Backtrace::generate())
      },
    }
  }

  fn as_backtrace(&self) -> Option<&snafu::Backtrace> {
    self.inner.as_ref()
  }
}
