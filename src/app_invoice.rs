use crate::common::*;

/// Application-level snapshot of a node invoice, handed to every
/// `InvoiceHandler`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInvoice {
  pub memo: String,
  /// Hex encoded. `None` until the node reports a preimage.
  pub preimage: Option<String>,
  /// Lowercase hex encoded payment hash, also the cache key.
  pub hash: String,
  pub value_msat: Millisatoshi,
  pub settled: bool,
}

impl TryFrom<&Invoice> for AppInvoice {
  type Error = Error;

  fn try_from(invoice: &Invoice) -> Result<Self> {
    let hash = invoice.payment_hash_hex();

    let value_msat = invoice.value_msat().context(error::InvoiceValue {
      hash: hash.clone(),
      value_msat: invoice.value_msat,
    })?;

    Ok(Self {
      memo: invoice.memo.clone(),
      preimage: invoice.preimage().map(hex::encode),
      hash,
      value_msat,
      settled: invoice.is_settled(),
    })
  }
}
