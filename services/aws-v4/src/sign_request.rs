use crate::canonical_request::CanonicalRequest;
use crate::constants::*;
use crate::encoding::encode_query_component;
use crate::key::generate_signing_key;
use crate::provide_credential::DefaultCredentialProvider;
use crate::{CanonicalHeaders, Config, Credential, CredentialScope, HttpRequest};
use http::request::Parts;
use http::uri::PathAndQuery;
use http::{header, HeaderMap, HeaderName, HeaderValue, Uri};
use log::debug;
use sigv4_core::hash::{hex_hmac_sha256, hex_sha256};
use sigv4_core::time::{format_iso8601, DateTime};
use sigv4_core::{Context, Error, ProvideCredential, Result, SigningMethod};
use std::fmt::Write;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Longest lifetime a presigned request may have: 7 days.
const MAX_EXPIRES_IN: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Builder collects everything a [`Signer`] needs besides the request itself.
///
/// ```
/// use sigv4_aws::{Credential, HttpRequest, Signer};
///
/// # fn main() -> sigv4_core::Result<()> {
/// let req = HttpRequest::new("GET", "/", None);
/// let signer = Signer::builder()
///     .credential(Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY"))
///     .header("Host", "example.amazonaws.com")
///     .header("X-Amz-Date", "20150830T123600Z")
///     .build(&req, "service", sigv4_core::hash::EMPTY_STRING_SHA256)?;
///
/// assert!(signer.authorization().ends_with(
///     "Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
/// ));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    credential: Option<Credential>,
    region: String,
    headers: Vec<(String, String)>,
    config: Option<Arc<Config>>,
    context: Context,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            credential: None,
            region: DEFAULT_REGION.to_string(),
            headers: Vec::new(),
            config: None,
            context: Context::new(),
        }
    }
}

impl Builder {
    /// Sign with this credential instead of looking one up.
    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Region of the scope, `us-east-1` by default.
    pub fn region(mut self, region: &str) -> Self {
        self.region = region.to_string();
        self
    }

    /// Add a header to sign. Names may repeat.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Add several headers to sign.
    pub fn headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.headers.extend(
            headers
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string())),
        );
        self
    }

    /// Add every header of a `HeaderMap`.
    ///
    /// Returns an `EncodingFailure` error if a value is not visible ASCII.
    pub fn http_headers(mut self, headers: &HeaderMap) -> Result<Self> {
        for (name, value) in headers {
            self.headers
                .push((name.as_str().to_string(), value.to_str()?.to_string()));
        }
        Ok(self)
    }

    /// Set the `X-Amz-Date` header from a timestamp.
    pub fn date(self, date: DateTime) -> Self {
        let value = format_iso8601(date);
        self.header(X_AMZ_DATE, &value)
    }

    /// Environment to look credentials up in when none is set.
    pub fn context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Take region and keys from a [`Config`].
    ///
    /// Configured keys are tried before the environment.
    pub fn config(mut self, config: &Config) -> Self {
        if let Some(region) = &config.region {
            self.region = region.clone();
        }
        self.config = Some(Arc::new(config.clone()));
        self
    }

    /// Sign `req` for `service` in header form.
    pub fn build(
        &self,
        req: &HttpRequest,
        service: &str,
        content_sha256: &str,
    ) -> Result<Signer> {
        self.sign(req, service, content_sha256, SigningMethod::Header)
    }

    /// Sign a S3 request.
    pub fn build_s3(&self, req: &HttpRequest, content_sha256: &str) -> Result<Signer> {
        self.build(req, S3, content_sha256)
    }

    /// Sign a Glacier request.
    pub fn build_glacier(&self, req: &HttpRequest, content_sha256: &str) -> Result<Signer> {
        self.build(req, GLACIER, content_sha256)
    }

    /// Sign an API Gateway request.
    pub fn build_api_gateway(&self, req: &HttpRequest, content_sha256: &str) -> Result<Signer> {
        self.build(req, API_GATEWAY, content_sha256)
    }

    /// Sign `req` for `service` in query form, valid for `expires_in`.
    ///
    /// Returns an `InvalidArgument` error unless `expires_in` is between one
    /// second and seven days.
    pub fn presign(
        &self,
        req: &HttpRequest,
        service: &str,
        expires_in: Duration,
        content_sha256: &str,
    ) -> Result<Signer> {
        if expires_in.as_secs() < 1 || expires_in > MAX_EXPIRES_IN {
            return Err(Error::invalid_argument(format!(
                "expires_in must be between 1 second and 7 days, got {}s",
                expires_in.as_secs()
            )));
        }

        self.sign(req, service, content_sha256, SigningMethod::Query(expires_in))
    }

    /// Presign a S3 request with an unsigned payload.
    pub fn presign_s3(&self, req: &HttpRequest, expires_in: Duration) -> Result<Signer> {
        self.presign(req, S3, expires_in, UNSIGNED_PAYLOAD)
    }

    fn canonical_headers(&self) -> Result<CanonicalHeaders> {
        let builder = self
            .headers
            .iter()
            .try_fold(CanonicalHeaders::builder(), |b, (k, v)| b.add(k, v))?;
        Ok(builder.build())
    }

    fn load_credential(&self) -> Result<Credential> {
        if let Some(cred) = &self.credential {
            return Ok(cred.clone());
        }

        let provider = match &self.config {
            Some(cfg) => DefaultCredentialProvider::with_config(cfg.clone()),
            None => DefaultCredentialProvider::new(),
        };
        provider
            .provide_credential(&self.context)?
            .ok_or_else(|| Error::no_credentials_available("no AWS credentials were provided"))
    }

    fn sign(
        &self,
        req: &HttpRequest,
        service: &str,
        content_sha256: &str,
        method: SigningMethod,
    ) -> Result<Signer> {
        let headers = self.canonical_headers()?;
        let date = headers
            .first_value(X_AMZ_DATE)
            .ok_or_else(|| Error::missing_required_header("headers missing 'X-Amz-Date' header"))?
            .to_string();
        let scope = CredentialScope::from_timestamp(&date, &self.region, service)?;
        debug!("calculated scope: {scope}");

        let credential = self.load_credential()?;

        let (canonical_request, signed_headers) = match method {
            SigningMethod::Header => (
                CanonicalRequest::new(service, req, &headers, content_sha256)?,
                headers.signed_headers().to_string(),
            ),
            SigningMethod::Query(expires_in) => {
                // The timestamp travels in the query, not in a signed header.
                let headers = headers.without(X_AMZ_DATE);
                let signed_headers = headers.signed_headers().to_string();
                let extra = [
                    (X_AMZ_ALGORITHM, ALGORITHM.to_string()),
                    (
                        X_AMZ_CREDENTIAL,
                        format!("{}/{}", credential.access_key_id, scope),
                    ),
                    (X_AMZ_DATE, date.clone()),
                    (X_AMZ_EXPIRES, expires_in.as_secs().to_string()),
                    (X_AMZ_SIGNED_HEADERS, signed_headers.clone()),
                ]
                .map(|(k, v)| (k.to_string(), v));

                (
                    CanonicalRequest::with_extra_query(
                        service,
                        req,
                        &headers,
                        content_sha256,
                        &extra,
                    )?,
                    signed_headers,
                )
            }
        };

        let encoded_req = hex_sha256(canonical_request.as_str().as_bytes());
        debug!("calculated hashed canonical request: {encoded_req}");

        // StringToSign:
        //
        // AWS4-HMAC-SHA256
        // 20220313T072004Z
        // 20220313/<region>/<service>/aws4_request
        // <hashed_canonical_request>
        let string_to_sign = {
            let mut f = String::new();
            writeln!(f, "{ALGORITHM}")?;
            writeln!(f, "{date}")?;
            writeln!(f, "{scope}")?;
            write!(f, "{encoded_req}")?;
            f
        };
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = generate_signing_key(&credential.secret_access_key, &scope)?;
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes())?;
        debug!("calculated signature: {signature}");

        Ok(Signer {
            canonical_request,
            string_to_sign,
            signature,
            credential,
            date,
            scope,
            signed_headers,
            method,
        })
    }
}

/// Signer holds the signature of a single request.
///
/// Everything is computed once by [`Builder`]; a `Signer` never changes
/// afterwards.
#[derive(Debug, Clone)]
pub struct Signer {
    canonical_request: CanonicalRequest,
    string_to_sign: String,
    signature: String,
    credential: Credential,
    date: String,
    scope: CredentialScope,
    signed_headers: String,
    method: SigningMethod,
}

impl Signer {
    /// Create a new builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The canonical request that was signed.
    pub fn canonical_request(&self) -> &CanonicalRequest {
        &self.canonical_request
    }

    /// The string that was signed, see [`CanonicalRequest`] for what it hashes.
    pub fn string_to_sign(&self) -> &str {
        &self.string_to_sign
    }

    /// Lower-case hex signature.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Scope the signature is bound to.
    pub fn scope(&self) -> &CredentialScope {
        &self.scope
    }

    /// Whether this signer produces a header or a presigned query.
    pub fn signing_method(&self) -> SigningMethod {
        self.method
    }

    /// The `Authorization` header value:
    ///
    /// ```text
    /// AWS4-HMAC-SHA256 Credential=<ak>/<scope>, SignedHeaders=<names>, Signature=<hex>
    /// ```
    pub fn authorization(&self) -> String {
        format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            ALGORITHM,
            self.credential.access_key_id,
            self.scope,
            self.signed_headers,
            self.signature
        )
    }

    /// The presigned query string, without the leading `?`.
    ///
    /// Returns an `InvalidArgument` error if the signer was built for the
    /// header form.
    pub fn presigned_query(&self) -> Result<String> {
        match self.method {
            SigningMethod::Query(expires_in) => Ok(self.query_string(expires_in)),
            SigningMethod::Header => Err(Error::invalid_argument(
                "signer was built for header signing, use presign to get a query",
            )),
        }
    }

    /// The authorization header value or the presigned query, whichever the
    /// signer was built for.
    pub fn sign(&self) -> String {
        match self.method {
            SigningMethod::Header => self.authorization(),
            SigningMethod::Query(expires_in) => self.query_string(expires_in),
        }
    }

    /// Write the signature into `parts`.
    ///
    /// Header form sets `Authorization` (and `X-Amz-Date` if missing), query
    /// form appends the presigned query to the URI.
    pub fn apply(&self, parts: &mut Parts) -> Result<()> {
        match self.method {
            SigningMethod::Header => {
                if !parts.headers.contains_key(X_AMZ_DATE) {
                    parts.headers.insert(
                        HeaderName::from_static("x-amz-date"),
                        HeaderValue::from_str(&self.date)?,
                    );
                }

                let mut authorization = HeaderValue::from_str(&self.authorization())?;
                authorization.set_sensitive(true);
                parts.headers.insert(header::AUTHORIZATION, authorization);
            }
            SigningMethod::Query(expires_in) => {
                let query = self.query_string(expires_in);
                let path_and_query = match parts.uri.query() {
                    Some(q) if !q.is_empty() => format!("{}?{q}&{query}", parts.uri.path()),
                    _ => format!("{}?{query}", parts.uri.path()),
                };

                let mut uri_parts = parts.uri.clone().into_parts();
                uri_parts.path_and_query = Some(PathAndQuery::from_str(&path_and_query)?);
                parts.uri = Uri::from_parts(uri_parts)?;
            }
        }

        Ok(())
    }

    fn query_string(&self, expires_in: Duration) -> String {
        let credential = format!("{}/{}", self.credential.access_key_id, self.scope);
        let expires = expires_in.as_secs().to_string();

        [
            (X_AMZ_ALGORITHM, ALGORITHM),
            (X_AMZ_CREDENTIAL, credential.as_str()),
            (X_AMZ_DATE, self.date.as_str()),
            (X_AMZ_EXPIRES, expires.as_str()),
            (X_AMZ_SIGNED_HEADERS, self.signed_headers.as_str()),
            (X_AMZ_SIGNATURE, self.signature.as_str()),
        ]
        .iter()
        .map(|(k, v)| format!("{k}={}", encode_query_component(v)))
        .collect::<Vec<_>>()
        .join("&")
    }
}
