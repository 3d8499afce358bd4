use crate::common::*;

/// Subscriber notified of every invoice the adapter processes, new or updated.
#[async_trait]
pub trait InvoiceHandler: Send + Sync {
  async fn handle(&self, invoice: &AppInvoice) -> Result<()>;
}

/// Logs each invoice at `info`.
pub struct LogHandler;

#[async_trait]
impl InvoiceHandler for LogHandler {
  async fn handle(&self, invoice: &AppInvoice) -> Result<()> {
    log::info!(
      "Invoice {} {}: {} {:?}",
      invoice.hash,
      if invoice.settled { "settled" } else { "open" },
      invoice.value_msat,
      invoice.memo,
    );
    Ok(())
  }
}
