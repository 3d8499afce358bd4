use {
  crate::https_service::HttpsService,
  http::uri::Authority,
  lnrpc::{
    lightning_client::LightningClient, AddInvoiceResponse, Invoice, InvoiceSubscription,
    ListInvoiceRequest, ListInvoiceResponse,
  },
  openssl::x509::X509,
  std::convert::TryFrom,
  tonic::{
    metadata::AsciiMetadataValue,
    service::{interceptor::InterceptedService, Interceptor},
    Code, Request, Status, Streaming,
  },
};

mod https_service;
mod invoice;
mod millisatoshi;

pub use {invoice::LightningInvoice, millisatoshi::Millisatoshi};

pub mod lnrpc {
  tonic::include_proto!("lnrpc");
}

#[derive(Clone, Debug)]
struct MacaroonInterceptor {
  macaroon: Option<AsciiMetadataValue>,
}

impl Interceptor for MacaroonInterceptor {
  fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
    if let Some(macaroon) = &self.macaroon {
      request
        .metadata_mut()
        .insert("macaroon", macaroon.clone());
    }
    Ok(request)
  }
}

#[derive(Clone)]
pub struct Client {
  inner: LightningClient<InterceptedService<HttpsService, MacaroonInterceptor>>,
}

impl Client {
  pub fn new(
    authority: Authority,
    certificate: Option<X509>,
    macaroon: Option<Vec<u8>>,
  ) -> Result<Client, openssl::error::ErrorStack> {
    let https_service = HttpsService::new(authority, certificate)?;

    let macaroon = macaroon.map(|macaroon| {
      hex::encode_upper(macaroon)
        .parse::<AsciiMetadataValue>()
        .expect("Client::new: hex characters are valid metadata values")
    });

    let inner = LightningClient::with_interceptor(https_service, MacaroonInterceptor { macaroon });

    Ok(Client { inner })
  }

  /// Issues an empty invoice listing to check connectivity and credentials.
  pub async fn ping(&self) -> Result<(), Status> {
    self.list_invoices(0, 0).await?;
    Ok(())
  }

  pub async fn add_invoice(
    &self,
    memo: &str,
    value_msat: Millisatoshi,
    preimage: &[u8],
  ) -> Result<AddInvoiceResponse, Status> {
    let request = tonic::Request::new(Invoice {
      memo: memo.to_owned(),
      value_msat: i64::try_from(value_msat).map_err(|source| {
        Status::new(
          Code::InvalidArgument,
          format!("invalid value for `value_msat`: {}", source),
        )
      })?,
      r_preimage: preimage.to_vec(),
      ..Invoice::default()
    });
    Ok(self.inner.clone().add_invoice(request).await?.into_inner())
  }

  pub async fn list_invoices(
    &self,
    index_offset: u64,
    num_max_invoices: u64,
  ) -> Result<ListInvoiceResponse, Status> {
    let request = tonic::Request::new(ListInvoiceRequest {
      index_offset,
      num_max_invoices,
      pending_only: false,
      reversed: false,
    });
    Ok(self.inner.clone().list_invoices(request).await?.into_inner())
  }

  /// Streams every invoice addition and settlement from now on.
  pub async fn subscribe_invoices(&self) -> Result<Streaming<Invoice>, Status> {
    let request = tonic::Request::new(InvoiceSubscription {
      add_index: 0,
      settle_index: 0,
    });
    Ok(
      self
        .inner
        .clone()
        .subscribe_invoices(request)
        .await?
        .into_inner(),
    )
  }
}
