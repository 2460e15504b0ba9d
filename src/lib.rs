pub mod app;
pub mod client;
pub mod config;
pub mod controller;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod state;
pub mod ui;

pub use app::router;
pub use client::OfferClient;
pub use config::Config;
pub use controller::Controller;
pub use state::{Tab, ViewState};
