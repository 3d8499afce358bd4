use crate::common::*;

#[derive(PartialEq, Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
  /// Maximum number of invoices requested per backfill page.
  pub page_size: u64,
  pub backfill_termination: BackfillTermination,
  pub handler_failure: HandlerFailure,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      page_size: 1000,
      backfill_termination: BackfillTermination::default(),
      handler_failure: HandlerFailure::default(),
    }
  }
}

impl Config {
  pub fn load(path: &Path) -> Result<Self> {
    let yaml = fs::read_to_string(path).context(error::FilesystemIo { path })?;
    let config: Self = serde_yaml::from_str(&yaml).context(error::ConfigDeserialize { path })?;
    if config.page_size == 0 {
      return error::ConfigPageSize { path }.fail();
    }
    Ok(config)
  }
}

/// Decides whether backfill requests another page after the one just received.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackfillTermination {
  /// Continue only while the last page reported `first_index_offset ==
  /// last_index_offset`. A page spanning several invoices ends backfill, and
  /// an empty `0..0` page does not.
  FirstEqualsLast,
  /// Continue while the last page came back full.
  FullPage,
}

impl Default for BackfillTermination {
  fn default() -> Self {
    Self::FirstEqualsLast
  }
}

impl BackfillTermination {
  pub(crate) fn continues(self, page: &ListInvoiceResponse, page_size: u64) -> bool {
    match self {
      Self::FirstEqualsLast => page.first_index_offset == page.last_index_offset,
      Self::FullPage => page.invoices.len() as u64 >= page_size,
    }
  }
}

/// What happens to the remaining handlers when one fails.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandlerFailure {
  /// Stop dispatching this invoice and return the error.
  Abort,
  /// Log the error and keep dispatching.
  Continue,
}

impl Default for HandlerFailure {
  fn default() -> Self {
    Self::Abort
  }
}
