use std::sync::Arc;

use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};
use axum_test::TestServer;
use serde_json::{Value, json};

use movielog::{
    AppState, catalog::CatalogClient, config::Config, db, router, store::MovieStore,
};

const INCEPTION_ID: i64 = 27205;
const NO_POSTER_ID: i64 = 563;
const NO_DATE_ID: i64 = 564;

async fn mock_catalog_search() -> Json<Value> {
    Json(json!({
        "results": [{
            "id": INCEPTION_ID,
            "title": "Inception",
            "poster_path": "/abc.jpg",
            "release_date": "2010-07-15",
            "overview": "A thief who steals corporate secrets through dream-sharing."
        }]
    }))
}

async fn mock_catalog_details(Path(id): Path<i64>) -> Json<Value> {
    let body = match id {
        INCEPTION_ID => json!({
            "title": "Inception",
            "poster_path": "/abc.jpg",
            "release_date": "2010-07-15",
            "overview": "A thief who steals corporate secrets through dream-sharing."
        }),
        NO_POSTER_ID => json!({
            "title": "Unposterable",
            "poster_path": null,
            "release_date": "2001-01-01",
            "overview": "No artwork anywhere."
        }),
        NO_DATE_ID => json!({
            "title": "Undated",
            "poster_path": "/undated.jpg",
            "release_date": "",
            "overview": "Never released."
        }),
        _ => json!({
            "title": "Other",
            "poster_path": "/other.jpg",
            "release_date": "1999-05-05",
            "overview": ""
        }),
    };
    Json(body)
}

async fn spawn_mock_catalog() -> String {
    let app = Router::new()
        .route("/search/movie", get(mock_catalog_search))
        .route("/movie/{id}", get(mock_catalog_details));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

async fn test_app() -> (TestServer, MovieStore) {
    let base_url = spawn_mock_catalog().await;

    let db = db::connect_and_migrate("sqlite::memory:").await.unwrap();
    let store = MovieStore::new(db);

    let config = Arc::new(Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        database_url: "sqlite::memory:".to_string(),
        tmdb_api_key: "test-key".to_string(),
        tmdb_base_url: base_url.clone(),
        tmdb_image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
        secret_key: None,
    });

    let catalog = Arc::new(CatalogClient::new(
        reqwest::Client::new(),
        config.tmdb_api_key.clone(),
        config.tmdb_base_url.clone(),
    ));

    let state = Arc::new(AppState { config, store: store.clone(), catalog });
    (TestServer::new(router(state)).unwrap(), store)
}

#[tokio::test]
async fn index_renders_on_empty_store() {
    let (server, _store) = test_app().await;

    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("Add Movie"));
}

#[tokio::test]
async fn specify_and_select_render_the_search_form() {
    let (server, _store) = test_app().await;

    server.get("/specify").await.assert_status_ok();
    server.get("/select").await.assert_status_ok();
    server.post("/specify").await.assert_status_ok();
}

#[tokio::test]
async fn search_then_add_then_update_end_to_end() {
    let (server, store) = test_app().await;

    // Search renders a selectable result pointing at the add route.
    let response = server.post("/select").form(&[("new_movie", "Inception")]).await;
    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Inception"));
    assert!(body.contains(&format!("/add/{INCEPTION_ID}")));

    // Adding creates the record from catalog details and redirects to edit.
    let response = server.get(&format!("/add/{INCEPTION_ID}")).await;
    response.assert_status(StatusCode::SEE_OTHER);

    let movies = store.list().await.unwrap();
    assert_eq!(movies.len(), 1);
    let movie = &movies[0];
    assert_eq!(movie.title, "Inception");
    assert_eq!(movie.year, 2010);
    assert!(movie.img_url.ends_with("/abc.jpg"));
    assert_eq!(movie.rating, 0.0);
    assert_eq!(movie.review, "");

    response.assert_header("location", format!("/update/{}", movie.id));

    // The edit form is pre-bound to the new id.
    let response = server.get(&format!("/update/{}", movie.id)).await;
    response.assert_status_ok();
    assert!(response.text().contains("Inception"));

    // Rating and review land in the store; blank fields are ignored.
    let response = server
        .post(&format!("/update/{}", movie.id))
        .form(&[("new_rating", "9.1"), ("new_review", "Dreamy.")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    response.assert_header("location", "/");

    let movie = store.get(movie.id).await.unwrap().unwrap();
    assert_eq!(movie.rating, 9.1);
    assert_eq!(movie.review, "Dreamy.");
}

#[tokio::test]
async fn add_without_poster_path_is_an_integration_error() {
    let (server, store) = test_app().await;

    let response = server.get(&format!("/add/{NO_POSTER_ID}")).await;
    response.assert_status(StatusCode::BAD_GATEWAY);
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn add_without_release_date_is_an_integration_error() {
    let (server, store) = test_app().await;

    let response = server.get(&format!("/add/{NO_DATE_ID}")).await;
    response.assert_status(StatusCode::BAD_GATEWAY);
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn adding_the_same_title_twice_is_a_conflict() {
    let (server, store) = test_app().await;

    server.get(&format!("/add/{INCEPTION_ID}")).await.assert_status(StatusCode::SEE_OTHER);
    let response = server.get(&format!("/add/{INCEPTION_ID}")).await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_with_blank_fields_changes_nothing() {
    let (server, store) = test_app().await;

    server.get(&format!("/add/{INCEPTION_ID}")).await.assert_status(StatusCode::SEE_OTHER);
    let id = store.list().await.unwrap()[0].id;

    let response = server
        .post(&format!("/update/{id}"))
        .form(&[("new_rating", ""), ("new_review", "")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);

    let movie = store.get(id).await.unwrap().unwrap();
    assert_eq!(movie.rating, 0.0);
    assert_eq!(movie.review, "");
}

#[tokio::test]
async fn update_with_unparseable_rating_is_rejected() {
    let (server, store) = test_app().await;

    server.get(&format!("/add/{INCEPTION_ID}")).await.assert_status(StatusCode::SEE_OTHER);
    let id = store.list().await.unwrap()[0].id;

    let response = server
        .post(&format!("/update/{id}"))
        .form(&[("new_rating", "lots"), ("new_review", "")])
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(store.get(id).await.unwrap().unwrap().rating, 0.0);
}

#[tokio::test]
async fn update_on_missing_id_is_not_found() {
    let (server, _store) = test_app().await;

    let response =
        server.post("/update/42").form(&[("new_rating", "5"), ("new_review", "")]).await;
    response.assert_status(StatusCode::NOT_FOUND);

    server.get("/update/42").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_on_missing_id_still_redirects() {
    let (server, _store) = test_app().await;

    let response = server.get("/delete/42").await;
    response.assert_status(StatusCode::SEE_OTHER);
    response.assert_header("location", "/");
}

#[tokio::test]
async fn delete_removes_the_movie_from_the_index() {
    let (server, store) = test_app().await;

    server.get(&format!("/add/{INCEPTION_ID}")).await.assert_status(StatusCode::SEE_OTHER);
    let id = store.list().await.unwrap()[0].id;

    server.get(&format!("/delete/{id}")).await.assert_status(StatusCode::SEE_OTHER);
    assert!(store.list().await.unwrap().is_empty());
}
