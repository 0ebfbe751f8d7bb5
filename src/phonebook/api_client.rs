use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{Error, Result};
use super::{
    contact::{Contact, ContactId, NewContact},
    person_service::PersonService,
};

/// HTTP client for the contact collection rooted at `base_url`.
pub struct ApiClient {
    base_url    : Url,
    client      : Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Argument(format!("Invalid base url: {}", base_url)));
        }

        let client = Client::builder().build().map_err(|e| {
            Error::State(format!("Http error: building http client error {e}"))
        })?;

        Ok(Self {
            base_url,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn item_url(&self, id: &ContactId) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Argument(format!("Invalid base url: {}", self.base_url)))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    fn check(rsp: reqwest::Result<Response>) -> Result<Response> {
        let rsp = rsp.map_err(|e| {
            Error::Network(format!("Http error: sending http request error {e}"))
        })?;

        match rsp.error_for_status() {
            Ok(rsp) => Ok(rsp),
            Err(e) => match e.status() {
                Some(StatusCode::NOT_FOUND) | Some(StatusCode::GONE) => {
                    Err(Error::NotFound(format!("Http error: resource not found {e}")))
                }
                _ => Err(Error::Network(format!("Http error: invalid http response {e}"))),
            }
        }
    }

    async fn decode<T: DeserializeOwned>(rsp: Response) -> Result<T> {
        rsp.json::<T>().await.map_err(|e| {
            Error::Protocol(format!("Http error: deserialize json error {e}"))
        })
    }
}

#[async_trait]
impl PersonService for ApiClient {
    async fn get_all(&self) -> Result<Vec<Contact>> {
        debug!("GET {}", self.base_url);
        let rsp = self.client.get(self.base_url.clone())
            .header("Accept", "application/json")
            .send()
            .await;

        let rsp = Self::check(rsp).inspect_err(|e| {
            warn!("Fetching contacts failed: {e}");
        })?;
        Self::decode::<Vec<Contact>>(rsp).await
    }

    async fn create(&self, contact: &NewContact) -> Result<Contact> {
        debug!("POST {} name={}", self.base_url, contact.name());
        let rsp = self.client.post(self.base_url.clone())
            .json(contact)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .send()
            .await;

        let rsp = Self::check(rsp).inspect_err(|e| {
            warn!("Creating contact {} failed: {e}", contact.name());
        })?;
        Self::decode::<Contact>(rsp).await
    }

    async fn update(&self, id: &ContactId, contact: &Contact) -> Result<Contact> {
        let url = self.item_url(id)?;
        debug!("PUT {}", url);
        let rsp = self.client.put(url)
            .json(contact)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .send()
            .await;

        let rsp = Self::check(rsp).inspect_err(|e| {
            warn!("Updating contact {} failed: {e}", id);
        })?;
        Self::decode::<Contact>(rsp).await
    }

    async fn remove(&self, id: &ContactId) -> Result<()> {
        let url = self.item_url(id)?;
        debug!("DELETE {}", url);
        let rsp = self.client.delete(url)
            .send()
            .await;

        Self::check(rsp).inspect_err(|e| {
            warn!("Removing contact {} failed: {e}", id);
        })?;
        Ok(())
    }
}
