use crate::client::OfferClient;
use crate::form::build_new_offer;
use crate::models::OfferForm;
use crate::state::{Tab, ViewState};
use chrono::Local;
use std::future::Future;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{debug, error, info, warn};

/// Tab lifecycle plus the three remote operations. Every remote call runs in
/// its own spawned task and always runs to completion; the returned handles
/// exist so callers can wait, never to cancel.
#[derive(Clone)]
pub struct Controller {
    client: OfferClient,
    view: Arc<Mutex<ViewState>>,
    next_seq: Arc<AtomicU64>,
}

impl Controller {
    pub fn new(client: OfferClient) -> Self {
        Self {
            client,
            view: Arc::new(Mutex::new(ViewState::default())),
            next_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn snapshot(&self) -> ViewState {
        self.view.lock().await.clone()
    }

    /// Initial programmatic switch to the list, which loads it.
    pub async fn start(&self) -> Option<JoinHandle<()>> {
        info!(api = %self.client.base_url(), "starting on list tab");
        self.switch_tab(Tab::List, None).await
    }

    /// Shows `target` and, for the list tab, fires a refresh without waiting
    /// for it.
    pub async fn switch_tab(&self, target: Tab, trigger: Option<Tab>) -> Option<JoinHandle<()>> {
        let mut view = self.view.lock().await;
        view.show(target, trigger);
        debug!(tab = target.region_id(), triggered = trigger.is_some(), "switched tab");

        (target == Tab::List).then(|| self.spawn_refresh(&mut view))
    }

    pub async fn submit_offer(&self, form: OfferForm) -> JoinHandle<()> {
        let (offer, issues) = build_new_offer(&form);
        for issue in &issues {
            warn!("{issue}");
        }

        let mut view = self.view.lock().await;
        view.draft = form;
        view.notices = issues.iter().map(ToString::to_string).collect();

        let this = self.clone();
        self.spawn_tracked(&mut view, async move {
            match this.client.create(&offer).await {
                Ok(()) => {
                    info!(upc = %offer.upc, "offer added");
                    if let Some(refresh) = this.switch_tab(Tab::List, None).await {
                        let _ = refresh.await;
                    }
                }
                Err(err) => error!("add offer failed: {err}"),
            }
        })
    }

    pub async fn request_reset(&self) -> JoinHandle<()> {
        let mut view = self.view.lock().await;
        let this = self.clone();
        self.spawn_tracked(&mut view, async move {
            match this.client.reset().await {
                Ok(()) => {
                    info!("offer list reset");
                    let refresh = this.spawn_refresh(&mut *this.view.lock().await);
                    let _ = refresh.await;
                }
                Err(err) => error!("reset failed: {err}"),
            }
        })
    }

    fn spawn_refresh(&self, view: &mut ViewState) -> JoinHandle<()> {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let this = self.clone();
        self.spawn_tracked(view, async move { this.refresh_list(seq).await })
    }

    async fn refresh_list(&self, seq: u64) {
        match self.client.fetch_list().await {
            Ok(list) => {
                let refreshed_at = Local::now().format("%H:%M:%S").to_string();
                let mut view = self.view.lock().await;
                if view.apply_list(seq, list, refreshed_at) {
                    // Last to complete wins, even when a newer request already landed.
                    warn!(seq, "applied an out-of-order list response");
                }
                info!(seq, rows = view.offers.len(), "offer list refreshed");
            }
            Err(err) => error!(seq, "list refresh failed: {err}"),
        }
    }

    fn spawn_tracked<F>(&self, view: &mut ViewState, op: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        view.in_flight += 1;
        let this = self.clone();
        tokio::spawn(async move {
            op.await;
            let mut view = this.view.lock().await;
            view.in_flight = view.in_flight.saturating_sub(1);
        })
    }
}
