use crate::controller::Controller;
use crate::errors::AppError;
use crate::models::OfferForm;
use crate::state::{Tab, ViewState};
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};

pub async fn index(State(controller): State<Controller>) -> Html<String> {
    let view = controller.snapshot().await;
    Html(render_index(&view))
}

pub async fn get_view(State(controller): State<Controller>) -> Json<ViewState> {
    Json(controller.snapshot().await)
}

pub async fn switch_tab(
    State(controller): State<Controller>,
    Path(slug): Path<String>,
) -> Result<Redirect, AppError> {
    let tab = Tab::from_slug(&slug).ok_or_else(|| AppError::not_found(format!("no such tab: {slug}")))?;
    controller.switch_tab(tab, Some(tab)).await;
    Ok(Redirect::to("/"))
}

pub async fn add_offer(
    State(controller): State<Controller>,
    Form(form): Form<OfferForm>,
) -> Redirect {
    controller.submit_offer(form).await;
    Redirect::to("/")
}

pub async fn reset(State(controller): State<Controller>) -> Redirect {
    controller.request_reset().await;
    Redirect::to("/")
}
