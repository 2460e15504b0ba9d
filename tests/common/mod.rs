#![allow(dead_code)]

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use reqwest::Url;
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex,
};

/// In-process stand-in for the offers API: `/offerlist` (GET, POST) and
/// `/reset` (GET), with switches to make calls fail.
#[derive(Default)]
pub struct FakeApi {
    pub offers: Mutex<Vec<Value>>,
    pub posted: Mutex<Vec<String>>,
    pub list_hits: AtomicUsize,
    pub fail_list: AtomicBool,
    pub fail_create: AtomicBool,
    pub fail_reset: AtomicBool,
    next_id: AtomicUsize,
}

impl FakeApi {
    pub fn seed(&self, offers: Vec<Value>) {
        *self.offers.lock().unwrap() = offers;
    }

    pub fn list_hits(&self) -> usize {
        self.list_hits.load(Ordering::SeqCst)
    }

    pub fn posted(&self) -> Vec<String> {
        self.posted.lock().unwrap().clone()
    }
}

pub fn widget() -> Value {
    json!({
        "id": 1,
        "upc": "123",
        "name": "Widget",
        "partyName": "ACME",
        "semanticName": "acme-widget",
        "mainImageFileUrl": "http://img/widget.png",
        "partyImageFileUrl": "http://img/acme.png",
        "productCategory": "tools",
        "price": 9.99,
        "rating": 4.5,
        "numReviews": 10
    })
}

pub fn named(id: u64, name: &str) -> Value {
    json!({ "id": id, "name": name, "price": 1.0, "rating": 2.0, "numReviews": 3 })
}

pub async fn spawn_fake_api() -> (Url, Arc<FakeApi>) {
    let api = Arc::new(FakeApi {
        next_id: AtomicUsize::new(100),
        ..FakeApi::default()
    });
    let app = Router::new()
        .route("/offerlist", get(list).post(create))
        .route("/reset", get(reset))
        .with_state(Arc::clone(&api));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let url = Url::parse(&format!("http://{addr}")).unwrap();
    (url, api)
}

/// Base URL of a port nobody listens on.
pub fn unreachable_url() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    Url::parse(&format!("http://127.0.0.1:{port}")).unwrap()
}

async fn list(State(api): State<Arc<FakeApi>>) -> Result<Json<Value>, StatusCode> {
    api.list_hits.fetch_add(1, Ordering::SeqCst);
    if api.fail_list.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let offers = api.offers.lock().unwrap().clone();
    Ok(Json(json!({ "list": offers })))
}

async fn create(State(api): State<Arc<FakeApi>>, body: String) -> Result<StatusCode, StatusCode> {
    api.posted.lock().unwrap().push(body.clone());
    if api.fail_create.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    let mut offer: Value = serde_json::from_str(&body).map_err(|_| StatusCode::BAD_REQUEST)?;
    let object = offer.as_object_mut().ok_or(StatusCode::BAD_REQUEST)?;
    // Like a typed server decoder: null numbers land as zero.
    for value in object.values_mut() {
        if value.is_null() {
            *value = json!(0);
        }
    }
    object.insert("id".into(), json!(api.next_id.fetch_add(1, Ordering::SeqCst)));
    api.offers.lock().unwrap().push(offer);
    Ok(StatusCode::CREATED)
}

async fn reset(State(api): State<Arc<FakeApi>>) -> StatusCode {
    if api.fail_reset.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    api.offers.lock().unwrap().clear();
    StatusCode::OK
}
