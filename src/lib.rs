pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod templates;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{catalog::CatalogClient, config::Config, store::MovieStore};

pub struct AppState {
    pub config: Arc<Config>,
    pub store: MovieStore,
    pub catalog: Arc<CatalogClient>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/update/{id}", get(routes::edit_movie).post(routes::update_movie))
        .route("/specify", get(routes::specify_movie).post(routes::specify_movie))
        .route("/select", get(routes::select_form).post(routes::select_movie))
        .route("/add/{external_id}", get(routes::add_movie).post(routes::add_movie))
        .route("/delete/{id}", get(routes::delete_movie).post(routes::delete_movie))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
