use crate::common::*;

pub type InvoiceUpdates = BoxStream<'static, Result<Invoice, Status>>;

/// The node operations the adapter depends on.
#[async_trait]
pub trait InvoiceRpc: Clone + Send + Sync + 'static {
  async fn add_invoice(
    &self,
    value_msat: Millisatoshi,
    memo: &str,
    preimage: &[u8],
  ) -> Result<AddInvoiceResponse, Status>;

  async fn subscribe_invoices(&self) -> Result<InvoiceUpdates, Status>;

  async fn list_invoices(
    &self,
    index_offset: u64,
    num_max_invoices: u64,
  ) -> Result<ListInvoiceResponse, Status>;
}

#[async_trait]
impl InvoiceRpc for lnd_client::Client {
  async fn add_invoice(
    &self,
    value_msat: Millisatoshi,
    memo: &str,
    preimage: &[u8],
  ) -> Result<AddInvoiceResponse, Status> {
    lnd_client::Client::add_invoice(self, memo, value_msat, preimage).await
  }

  async fn subscribe_invoices(&self) -> Result<InvoiceUpdates, Status> {
    Ok(
      lnd_client::Client::subscribe_invoices(self)
        .await?
        .boxed(),
    )
  }

  async fn list_invoices(
    &self,
    index_offset: u64,
    num_max_invoices: u64,
  ) -> Result<ListInvoiceResponse, Status> {
    lnd_client::Client::list_invoices(self, index_offset, num_max_invoices).await
  }
}
