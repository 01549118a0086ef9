//! HTTP-backed collection resources.
//!
//! [`ApiClient`] builds the one reqwest client every panel shares:
//! JSON content negotiation, a persistent cookie store so server
//! credentials ride along on every request, the optional bearer token,
//! and connect/total timeouts. [`ApiClient::collection`] hands out
//! per-kind [`RestCollection`] handles that implement the wire contract:
//!
//! - `GET /{kind}/` → JSON array of records
//! - `POST /{kind}/` with the field set as query parameters → created record
//! - `PUT /{kind}/{id}` with the field set as query parameters → updated record
//! - `DELETE /{kind}/{id}` → any 2xx, body ignored

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header;
use reqwest::{Client, Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretBox};
use url::Url;

use crate::config::Config;
use crate::error::Result;
use crate::remote::CollectionResource;
use crate::remote::error::check_status;
use crate::resource::{RecordId, Resource};

struct ClientInner {
    http: Client,
    base: Url,
    token: Option<SecretBox<String>>,
}

/// Factory for per-kind collection handles sharing one HTTP client.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

impl ApiClient {
    /// Build the shared HTTP client from configuration.
    ///
    /// Configures a 30s connect timeout and 60s total timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let base = config.base_url()?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(30))
            .cookie_store(true)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base,
                token: config
                    .api_token()
                    .map(|token| SecretBox::new(Box::new(token))),
            }),
        })
    }

    /// A handle on the collection resource for one kind.
    pub fn collection<R: Resource>(&self) -> RestCollection<R> {
        RestCollection {
            inner: Arc::clone(&self.inner),
            _kind: PhantomData,
        }
    }

    /// The resolved API base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base
    }
}

/// One remote collection resource over HTTP.
pub struct RestCollection<R: Resource> {
    inner: Arc<ClientInner>,
    _kind: PhantomData<R>,
}

impl<R: Resource> Clone for RestCollection<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _kind: PhantomData,
        }
    }
}

impl<R: Resource> RestCollection<R> {
    fn collection_url(&self) -> Result<Url> {
        Ok(self.inner.base.join(&format!("{}/", R::BASE))?)
    }

    fn record_url(&self, id: RecordId) -> Result<Url> {
        Ok(self.inner.base.join(&format!("{}/{id}", R::BASE))?)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.inner.http.request(method, url);
        match &self.inner.token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }
}

impl<R: Resource> CollectionResource<R> for RestCollection<R> {
    async fn list(&self) -> Result<Vec<R>> {
        let url = self.collection_url()?;
        tracing::debug!(kind = R::BASE, %url, "listing collection");
        let response = self.request(Method::GET, url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, fields: &R::Fields) -> Result<R> {
        let url = self.collection_url()?;
        tracing::debug!(kind = R::BASE, %url, "creating record");
        let response = self
            .request(Method::POST, url)
            .query(fields)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: RecordId, fields: &R::Fields) -> Result<R> {
        let url = self.record_url(id)?;
        tracing::debug!(kind = R::BASE, id, %url, "updating record");
        let response = self.request(Method::PUT, url).query(fields).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: RecordId) -> Result<()> {
        let url = self.record_url(id)?;
        tracing::debug!(kind = R::BASE, id, %url, "deleting record");
        let response = self.request(Method::DELETE, url).send().await?;
        // Success is any 2xx; the body (if present) is ignored.
        check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{Issue, Property, Tenant};

    fn client_for(base: &str) -> ApiClient {
        let mut config = Config::default();
        config.api.base_url = Some(base.to_string());
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn test_collection_url_keeps_trailing_slash() {
        let client = client_for("http://localhost:8000");
        let tenants = client.collection::<Tenant>();
        assert_eq!(
            tenants.collection_url().unwrap().as_str(),
            "http://localhost:8000/tenants/"
        );
    }

    #[test]
    fn test_record_url() {
        let client = client_for("http://localhost:8000");
        let issues = client.collection::<Issue>();
        assert_eq!(
            issues.record_url(42).unwrap().as_str(),
            "http://localhost:8000/issues/42"
        );
    }

    #[test]
    fn test_urls_nest_under_base_path() {
        let client = client_for("https://manager.example.com/api");
        let properties = client.collection::<Property>();
        assert_eq!(
            properties.collection_url().unwrap().as_str(),
            "https://manager.example.com/api/properties/"
        );
        assert_eq!(
            properties.record_url(7).unwrap().as_str(),
            "https://manager.example.com/api/properties/7"
        );
    }
}
