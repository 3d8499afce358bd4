pub(crate) use crate::{
  app_invoice::AppInvoice,
  config::{BackfillTermination, Config, HandlerFailure},
  create_invoice_result::CreateInvoiceResult,
  error::{self, Error, Result},
  invoice_handler::InvoiceHandler,
  invoice_rpc::{InvoiceRpc, InvoiceUpdates},
  invoice_sync_adapter::InvoiceSyncAdapter,
};

pub(crate) use ::{
  async_trait::async_trait,
  futures::{stream::BoxStream, StreamExt},
  lnd_client::{
    lnrpc::{AddInvoiceResponse, Invoice, ListInvoiceResponse},
    LightningInvoice, Millisatoshi,
  },
  serde::Deserialize,
  snafu::ResultExt,
  std::{
    collections::HashMap,
    convert::TryFrom,
    env,
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, RwLock},
  },
  structopt::StructOpt,
  tokio::task::{self, JoinHandle},
  tonic::Status,
};

#[cfg(test)]
pub(crate) use ::{std::time::Duration, tempfile::TempDir};
