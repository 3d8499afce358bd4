use crate::common::*;
use futures::channel::mpsc;
use std::collections::VecDeque;

macro_rules! assert_matches {
  ($expression:expr, $( $pattern:pat )|+ $( if $guard:expr )?) => {
    match $expression {
      $( $pattern )|+ $( if $guard )? => {}
      left => panic!(
        "assertion failed: (left ~= right)\n  left: `{:?}`\n right: `{}`",
        left,
        stringify!($($pattern)|+ $(if $guard)?)
      ),
    }
  }
}

/// Open invoice whose payment hash is `byte` repeated 32 times.
pub(crate) fn invoice(byte: u8, value_msat: i64) -> Invoice {
  Invoice {
    memo: format!("invoice {}", byte),
    r_hash: vec![byte; 32],
    value_msat,
    ..Invoice::default()
  }
}

/// Listing page holding one invoice per index in `first..=last`, each worth
/// its index in millisatoshis.
pub(crate) fn page(first_index_offset: u64, last_index_offset: u64) -> ListInvoiceResponse {
  ListInvoiceResponse {
    invoices: (first_index_offset..=last_index_offset)
      .map(|index| {
        let mut r_hash = vec![0; 32];
        r_hash[24..].copy_from_slice(&index.to_be_bytes());
        Invoice {
          r_hash,
          value_msat: index as i64,
          add_index: index,
          ..Invoice::default()
        }
      })
      .collect(),
    first_index_offset,
    last_index_offset,
  }
}

/// Polls `condition` for up to one second.
pub(crate) async fn eventually(condition: impl Fn() -> bool) {
  for _ in 0..100 {
    if condition() {
      return;
    }
    tokio::time::sleep(Duration::from_millis(10)).await;
  }
  panic!("condition not met after one second");
}

struct FakeRpcState {
  pages: VecDeque<ListInvoiceResponse>,
  list_requests: Vec<(u64, u64)>,
  add_invoice_response: Result<AddInvoiceResponse, Status>,
  add_invoice_requests: Vec<(Millisatoshi, String, Vec<u8>)>,
  subscribe_failure: Option<Status>,
  updates_sender: Option<mpsc::UnboundedSender<Result<Invoice, Status>>>,
  updates_receiver: Option<mpsc::UnboundedReceiver<Result<Invoice, Status>>>,
}

/// In-memory node with scripted listing pages and a channel-backed
/// subscription. Clones share state.
#[derive(Clone)]
pub(crate) struct FakeRpc {
  state: Arc<Mutex<FakeRpcState>>,
}

impl FakeRpc {
  pub(crate) fn new() -> Self {
    let (sender, receiver) = mpsc::unbounded();
    Self {
      state: Arc::new(Mutex::new(FakeRpcState {
        pages: VecDeque::new(),
        list_requests: Vec::new(),
        add_invoice_response: Err(Status::unimplemented("no add_invoice response scripted")),
        add_invoice_requests: Vec::new(),
        subscribe_failure: None,
        updates_sender: Some(sender),
        updates_receiver: Some(receiver),
      })),
    }
  }

  fn state(&self) -> std::sync::MutexGuard<FakeRpcState> {
    self.state.lock().unwrap()
  }

  pub(crate) fn push_page(&self, page: ListInvoiceResponse) {
    self.state().pages.push_back(page);
  }

  pub(crate) fn list_requests(&self) -> Vec<(u64, u64)> {
    self.state().list_requests.clone()
  }

  pub(crate) fn add_invoice_succeeds(&self, payment_request: &str) {
    self.state().add_invoice_response = Ok(AddInvoiceResponse {
      payment_request: payment_request.to_owned(),
      ..AddInvoiceResponse::default()
    });
  }

  pub(crate) fn add_invoice_fails(&self, status: Status) {
    self.state().add_invoice_response = Err(status);
  }

  pub(crate) fn add_invoice_requests(&self) -> Vec<(Millisatoshi, String, Vec<u8>)> {
    self.state().add_invoice_requests.clone()
  }

  pub(crate) fn subscribe_fails(&self, status: Status) {
    self.state().subscribe_failure = Some(status);
  }

  fn send(&self, update: Result<Invoice, Status>) {
    self
      .state()
      .updates_sender
      .as_ref()
      .expect("subscription already closed")
      .unbounded_send(update)
      .unwrap();
  }

  pub(crate) fn send_update(&self, invoice: Invoice) {
    self.send(Ok(invoice));
  }

  pub(crate) fn send_update_error(&self, status: Status) {
    self.send(Err(status));
  }

  /// Whether the subscription stream was handed out and then dropped.
  pub(crate) fn subscription_dropped(&self) -> bool {
    let state = self.state();
    state.updates_receiver.is_none()
      && state
        .updates_sender
        .as_ref()
        .map(|sender| sender.is_closed())
        .unwrap_or(true)
  }

  pub(crate) fn close_updates(&self) {
    self.state().updates_sender = None;
  }
}

#[async_trait]
impl InvoiceRpc for FakeRpc {
  async fn add_invoice(
    &self,
    value_msat: Millisatoshi,
    memo: &str,
    preimage: &[u8],
  ) -> Result<AddInvoiceResponse, Status> {
    let mut state = self.state();
    state
      .add_invoice_requests
      .push((value_msat, memo.to_owned(), preimage.to_vec()));
    match &state.add_invoice_response {
      Ok(response) => Ok(response.clone()),
      Err(status) => Err(Status::new(status.code(), status.message())),
    }
  }

  async fn subscribe_invoices(&self) -> Result<InvoiceUpdates, Status> {
    let mut state = self.state();
    if let Some(status) = state.subscribe_failure.take() {
      return Err(status);
    }
    state
      .updates_receiver
      .take()
      .map(|receiver| receiver.boxed())
      .ok_or_else(|| Status::already_exists("already subscribed"))
  }

  async fn list_invoices(
    &self,
    index_offset: u64,
    num_max_invoices: u64,
  ) -> Result<ListInvoiceResponse, Status> {
    let mut state = self.state();
    state.list_requests.push((index_offset, num_max_invoices));
    state
      .pages
      .pop_front()
      .ok_or_else(|| Status::out_of_range("no more pages scripted"))
  }
}

pub(crate) type HandlerLog = Arc<Mutex<Vec<(&'static str, AppInvoice)>>>;

/// Records every invoice it receives, tagged with its name.
pub(crate) struct RecordingHandler {
  name: &'static str,
  log: HandlerLog,
}

impl RecordingHandler {
  pub(crate) fn new(name: &'static str) -> Arc<Self> {
    Self::with_log(name, &Self::shared_log())
  }

  pub(crate) fn with_log(name: &'static str, log: &HandlerLog) -> Arc<Self> {
    Arc::new(Self {
      name,
      log: log.clone(),
    })
  }

  pub(crate) fn shared_log() -> HandlerLog {
    Arc::new(Mutex::new(Vec::new()))
  }

  pub(crate) fn invoices(&self) -> Vec<AppInvoice> {
    self
      .log
      .lock()
      .unwrap()
      .iter()
      .filter(|(name, _)| *name == self.name)
      .map(|(_, invoice)| invoice.clone())
      .collect()
  }
}

#[async_trait]
impl InvoiceHandler for RecordingHandler {
  async fn handle(&self, invoice: &AppInvoice) -> Result<()> {
    self
      .log
      .lock()
      .unwrap()
      .push((self.name, invoice.clone()));
    Ok(())
  }
}

pub(crate) struct FailingHandler;

#[async_trait]
impl InvoiceHandler for FailingHandler {
  async fn handle(&self, _invoice: &AppInvoice) -> Result<()> {
    Err(Error::handler("handler exploded"))
  }
}
