use crate::common::*;

/// Outcome of asking the node for a new invoice. Failures are carried as
/// values so callers never have to handle a raised error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateInvoiceResult {
  Success { payment_request: String },
  Failure { error: String },
}

impl CreateInvoiceResult {
  pub fn is_success(&self) -> bool {
    matches!(self, Self::Success { .. })
  }

  pub fn payment_request(&self) -> Option<&str> {
    match self {
      Self::Success { payment_request } => Some(payment_request.as_str()),
      Self::Failure { .. } => None,
    }
  }

  pub fn error(&self) -> Option<&str> {
    match self {
      Self::Success { .. } => None,
      Self::Failure { error } => Some(error.as_str()),
    }
  }
}

impl From<Result<AddInvoiceResponse, Status>> for CreateInvoiceResult {
  fn from(result: Result<AddInvoiceResponse, Status>) -> Self {
    match result {
      Ok(response) => Self::Success {
        payment_request: response.payment_request,
      },
      Err(status) => Self::Failure {
        error: status.message().to_owned(),
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn success() {
    let result = CreateInvoiceResult::from(Ok(AddInvoiceResponse {
      payment_request: "lnbcrt10n1foo".into(),
      ..AddInvoiceResponse::default()
    }));
    assert!(result.is_success());
    assert_eq!(result.payment_request(), Some("lnbcrt10n1foo"));
    assert_eq!(result.error(), None);
  }

  #[test]
  fn failure_carries_status_message() {
    let result = CreateInvoiceResult::from(Err(Status::invalid_argument(
      "invoice with payment hash already exists",
    )));
    assert!(!result.is_success());
    assert_eq!(result.payment_request(), None);
    assert_eq!(
      result.error(),
      Some("invoice with payment hash already exists")
    );
  }
}
