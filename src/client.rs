use crate::errors::SyncError;
use crate::models::{NewOffer, OfferList};
use reqwest::{Client, Url};

const OFFER_LIST_PATH: &str = "/offerlist";
const RESET_PATH: &str = "/reset";

/// Thin wrapper over the offers API. One request per call, no retry.
#[derive(Clone)]
pub struct OfferClient {
    http: Client,
    base_url: Url,
}

impl OfferClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn fetch_list(&self) -> Result<OfferList, SyncError> {
        let resp = self
            .http
            .get(self.url(OFFER_LIST_PATH))
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|err| classify(OFFER_LIST_PATH, err))?;

        resp.json()
            .await
            .map_err(|source| SyncError::Decode {
                path: OFFER_LIST_PATH,
                source,
            })
    }

    pub async fn create(&self, offer: &NewOffer) -> Result<(), SyncError> {
        self.http
            .post(self.url(OFFER_LIST_PATH))
            .json(offer)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|err| classify(OFFER_LIST_PATH, err))?;
        Ok(())
    }

    pub async fn reset(&self) -> Result<(), SyncError> {
        self.http
            .get(self.url(RESET_PATH))
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|err| classify(RESET_PATH, err))?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }
}

fn classify(path: &'static str, err: reqwest::Error) -> SyncError {
    match err.status() {
        Some(status) => SyncError::Status { path, status },
        None => SyncError::Transport { path, source: err },
    }
}
