use {
  crate::{
    lnrpc::{invoice::InvoiceState, Invoice},
    millisatoshi::Millisatoshi,
  },
  std::{convert::TryFrom, num::TryFromIntError},
};

/// Read access to the invoice fields a consumer of LND cares about.
pub trait LightningInvoice {
  fn payment_hash(&self) -> &[u8];

  /// Lowercase hex encoding of the payment hash.
  fn payment_hash_hex(&self) -> String {
    hex::encode(self.payment_hash())
  }

  /// `None` when the node did not report a preimage.
  fn preimage(&self) -> Option<&[u8]>;

  fn value_msat(&self) -> Result<Millisatoshi, TryFromIntError>;

  fn is_settled(&self) -> bool;
}

impl LightningInvoice for Invoice {
  fn payment_hash(&self) -> &[u8] {
    &self.r_hash
  }

  fn preimage(&self) -> Option<&[u8]> {
    if self.r_preimage.is_empty() {
      None
    } else {
      Some(self.r_preimage.as_slice())
    }
  }

  fn value_msat(&self) -> Result<Millisatoshi, TryFromIntError> {
    Millisatoshi::try_from(self.value_msat)
  }

  #[allow(deprecated)]
  fn is_settled(&self) -> bool {
    self.state() == InvoiceState::Settled || self.settled
  }
}
