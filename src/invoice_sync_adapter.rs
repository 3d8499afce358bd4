use crate::common::*;

/// Mirrors a node's invoices into a process-local cache and notifies the
/// registered handlers about every invoice it sees.
///
/// Clones share the same cache and handler list, which is how the background
/// subscription task reaches them.
#[derive(Clone)]
pub struct InvoiceSyncAdapter<C> {
  client: C,
  config: Config,
  cache: Arc<Mutex<HashMap<String, Invoice>>>,
  handlers: Arc<RwLock<Vec<Arc<dyn InvoiceHandler>>>>,
}

impl<C: InvoiceRpc> InvoiceSyncAdapter<C> {
  pub fn new(client: C, config: Config) -> Self {
    Self {
      client,
      config,
      cache: Arc::new(Mutex::new(HashMap::new())),
      handlers: Arc::new(RwLock::new(Vec::new())),
    }
  }

  /// Registers `handler`. Registering the same `Arc` twice has no effect.
  pub fn add_handler(&self, handler: Arc<dyn InvoiceHandler>) {
    let mut handlers = self
      .handlers
      .write()
      .expect("InvoiceSyncAdapter::add_handler: handler lock poisoned");
    if !handlers
      .iter()
      .any(|registered| Arc::ptr_eq(registered, &handler))
    {
      handlers.push(handler);
    }
  }

  /// Asks the node to create an invoice. The new invoice reaches handlers
  /// through the subscription once the node reports it.
  pub async fn add_invoice(
    &self,
    value_msat: Millisatoshi,
    memo: &str,
    preimage: &[u8],
  ) -> CreateInvoiceResult {
    let result = self.client.add_invoice(value_msat, memo, preimage).await;
    if let Err(status) = &result {
      log::debug!("Failed to add invoice for {}: {}", value_msat, status);
    }
    result.into()
  }

  /// Subscribes to invoice updates, then backfills existing invoices page by
  /// page. Returns once backfill ends; the subscription keeps running in the
  /// returned task. If backfill fails the subscription is cancelled.
  pub async fn sync(&self) -> Result<JoinHandle<()>> {
    if self.config.page_size == 0 {
      return error::PageSizeZero.fail();
    }

    let updates = self
      .client
      .subscribe_invoices()
      .await
      .context(error::LndRpcStatus)?;

    let subscription = task::spawn(self.clone().dispatch_updates(updates));

    if let Err(error) = self.backfill().await {
      subscription.abort();
      return Err(error);
    }

    Ok(subscription)
  }

  /// Cache writes happen here, in stream order. Only the handler fan-out is
  /// spawned.
  async fn dispatch_updates(self, mut updates: InvoiceUpdates) {
    while let Some(update) = updates.next().await {
      match update {
        Ok(invoice) => {
          let app_invoice = match self.record(invoice) {
            Ok(app_invoice) => app_invoice,
            Err(error) => {
              log::error!("Failed to process invoice update: {}", error);
              continue;
            }
          };
          let adapter = self.clone();
          task::spawn(async move {
            if let Err(error) = adapter.notify(&app_invoice).await {
              log::error!("Failed to process invoice update: {}", error);
            }
          });
        }
        Err(status) => {
          log::error!("Invoice subscription failed: {}", status);
          return;
        }
      }
    }
    log::info!("Invoice subscription closed by node");
  }

  async fn backfill(&self) -> Result<()> {
    let page_size = self.config.page_size;
    let mut index_offset = 0;

    loop {
      let page = self
        .client
        .list_invoices(index_offset, page_size)
        .await
        .context(error::LndRpcStatus)?;

      log::debug!(
        "Fetched {} invoices at index offset {} (first {}, last {})",
        page.invoices.len(),
        index_offset,
        page.first_index_offset,
        page.last_index_offset,
      );

      let more = self
        .config
        .backfill_termination
        .continues(&page, page_size);
      index_offset = page.last_index_offset.saturating_add(1);

      for invoice in page.invoices {
        self.process_invoice(invoice).await?;
      }

      if !more {
        break;
      }
    }

    log::info!(
      "Backfill finished with {} cached invoices",
      self.cached_invoice_count()
    );

    Ok(())
  }

  pub(crate) async fn process_invoice(&self, invoice: Invoice) -> Result<()> {
    let app_invoice = self.record(invoice)?;
    self.notify(&app_invoice).await
  }

  /// Upserts the cache and derives the handler snapshot. The cache is
  /// updated even if derivation fails.
  fn record(&self, invoice: Invoice) -> Result<AppInvoice> {
    let app_invoice = AppInvoice::try_from(&invoice);

    self
      .cache
      .lock()
      .expect("InvoiceSyncAdapter::record: cache lock poisoned")
      .insert(invoice.payment_hash_hex(), invoice);

    app_invoice
  }

  async fn notify(&self, app_invoice: &AppInvoice) -> Result<()> {
    log::debug!(
      "Processing invoice {} (settled: {})",
      app_invoice.hash,
      app_invoice.settled
    );

    let handlers = self
      .handlers
      .read()
      .expect("InvoiceSyncAdapter::notify: handler lock poisoned")
      .clone();

    for handler in handlers {
      if let Err(error) = handler.handle(app_invoice).await {
        match self.config.handler_failure {
          HandlerFailure::Abort => return Err(error),
          HandlerFailure::Continue => log::warn!(
            "Invoice handler failed for {}: {}",
            app_invoice.hash,
            error
          ),
        }
      }
    }

    Ok(())
  }

  /// Latest node record seen for the lowercase hex `hash`.
  pub fn cached_invoice(&self, hash: &str) -> Option<Invoice> {
    self
      .cache
      .lock()
      .expect("InvoiceSyncAdapter::cached_invoice: cache lock poisoned")
      .get(hash)
      .cloned()
  }

  pub fn cached_invoice_count(&self) -> usize {
    self
      .cache
      .lock()
      .expect("InvoiceSyncAdapter::cached_invoice_count: cache lock poisoned")
      .len()
  }
}
