use http::uri::{Authority, Scheme, Uri};
use hyper::{client::connect::HttpConnector, Body, Request, Response};
use hyper_openssl::HttpsConnector;
use openssl::{
  error::ErrorStack,
  ssl::{SslConnector, SslMethod},
  x509::X509,
};
use std::task::{Context, Poll};
use tonic::body::BoxBody;

/// HTTP/2-over-TLS transport for the generated gRPC client. LND usually runs
/// with a self-signed certificate, so an extra trusted certificate may be
/// added to the store.
#[derive(Clone, Debug)]
pub(crate) struct HttpsService {
  authority: Authority,
  hyper_client: hyper::Client<HttpsConnector<HttpConnector>, BoxBody>,
}

impl HttpsService {
  pub(crate) fn new(authority: Authority, certificate: Option<X509>) -> Result<Self, ErrorStack> {
    let hyper_client = hyper::Client::builder()
      .http2_only(true)
      .build(Self::connector(certificate)?);

    Ok(Self {
      authority,
      hyper_client,
    })
  }

  fn connector(certificate: Option<X509>) -> Result<HttpsConnector<HttpConnector>, ErrorStack> {
    let mut http_connector = HttpConnector::new();
    http_connector.enforce_http(false);

    let mut ssl_connector = SslConnector::builder(SslMethod::tls_client())?;
    if let Some(certificate) = certificate {
      ssl_connector.cert_store_mut().add_cert(certificate)?;
    }

    HttpsConnector::with_connector(http_connector, ssl_connector)
  }

  fn rewrite_uri(&self, uri: &Uri) -> Uri {
    let mut builder = Uri::builder()
      .scheme(Scheme::HTTPS)
      .authority(self.authority.clone());
    if let Some(path_and_query) = uri.path_and_query() {
      builder = builder.path_and_query(path_and_query.clone());
    }
    builder
      .build()
      .expect("HttpsService::rewrite_uri: Uri constructed from valid parts cannot fail")
  }
}

impl tower::Service<Request<BoxBody>> for HttpsService {
  type Response = Response<Body>;
  type Error = hyper::Error;
  type Future = hyper::client::ResponseFuture;

  fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
    Ok(()).into()
  }

  fn call(&mut self, mut req: Request<BoxBody>) -> Self::Future {
    *req.uri_mut() = self.rewrite_uri(req.uri());
    self.hyper_client.request(req)
  }
}
