//! Mirrors the invoices of an LND node into an in-process cache and notifies
//! registered handlers whenever an invoice is created or updated.

#[cfg(test)]
#[macro_use]
mod test_utils;

mod app_invoice;
mod arguments;
mod common;
mod config;
mod create_invoice_result;
mod daemon;
mod environment;
mod error;
mod invoice_handler;
mod invoice_rpc;
mod invoice_sync_adapter;

pub use crate::{
  app_invoice::AppInvoice,
  config::{BackfillTermination, Config, HandlerFailure},
  create_invoice_result::CreateInvoiceResult,
  daemon::Daemon,
  environment::Environment,
  error::{Error, Result},
  invoice_handler::{InvoiceHandler, LogHandler},
  invoice_rpc::{InvoiceRpc, InvoiceUpdates},
  invoice_sync_adapter::InvoiceSyncAdapter,
};
