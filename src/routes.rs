use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    response::{Html, Redirect},
};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{NewMovie, SpecifyMovieForm, UpdateMovieForm},
    templates,
};

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.store.list().await?;
    Ok(Html(templates::index_page(&movies)))
}

pub async fn edit_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let movie = state.store.get(id).await?.ok_or(AppError::NotFound)?;
    Ok(Html(templates::edit_page(&movie)))
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Form(form): Form<UpdateMovieForm>,
) -> AppResult<Redirect> {
    let rating = form.rating()?;
    let review = form.review();
    state.store.update_fields(id, rating, review).await?;
    Ok(Redirect::to("/"))
}

pub async fn specify_movie() -> Html<String> {
    Html(templates::specify_page())
}

pub async fn select_form() -> Html<String> {
    Html(templates::specify_page())
}

pub async fn select_movie(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SpecifyMovieForm>,
) -> AppResult<Html<String>> {
    let query = form.new_movie.trim().to_string();
    if query.is_empty() {
        return Err(AppError::Validation("movie title is required".to_string()));
    }

    let results = state.catalog.search(&query).await?;
    Ok(Html(templates::select_page(&query, &results)))
}

pub async fn add_movie(
    State(state): State<Arc<AppState>>,
    Path(external_id): Path<i64>,
) -> AppResult<Redirect> {
    let details = state.catalog.details(external_id).await?;
    let new = NewMovie::from_details(details, &state.config.tmdb_image_base_url)?;
    let id = state.store.create(new).await?;
    Ok(Redirect::to(&format!("/update/{id}")))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    state.store.delete(id).await?;
    Ok(Redirect::to("/"))
}
