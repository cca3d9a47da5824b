use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, SqlErr,
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::NewMovie,
};

/// All access to the movie table goes through this handle; it is constructed
/// once at startup and injected into the handlers, never held as a global.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a movie with rating 0, ranking 0 and an empty review,
    /// returning the generated id. A duplicate title is a `Conflict` and
    /// leaves the store unchanged.
    pub async fn create(&self, new: NewMovie) -> AppResult<i32> {
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(new.title),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(0.0),
            ranking: Set(0),
            review: Set(String::new()),
            img_url: Set(new.img_url),
        };

        match movie::Entity::insert(model).exec(&self.db).await {
            Ok(res) => {
                tracing::info!(id = res.last_insert_id, "movie created");
                Ok(res.last_insert_id)
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::Conflict),
                _ => Err(err.into()),
            },
        }
    }

    /// All movies, lowest rating first.
    pub async fn list(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().order_by_asc(movie::Column::Rating).all(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Writes the provided fields in a single update; `None` fields keep the
    /// stored value. Fails with `NotFound` when the id is absent.
    pub async fn update_fields(
        &self,
        id: i32,
        rating: Option<f64>,
        review: Option<String>,
    ) -> AppResult<()> {
        let existing = self.get(id).await?.ok_or(AppError::NotFound)?;
        if rating.is_none() && review.is_none() {
            return Ok(());
        }

        let mut model: movie::ActiveModel = existing.into();
        if let Some(rating) = rating {
            model.rating = Set(rating);
        }
        if let Some(review) = review {
            model.review = Set(review);
        }
        model.update(&self.db).await?;

        tracing::debug!(id, "movie updated");
        Ok(())
    }

    /// Deletes the movie if present; deleting an absent id is a no-op.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected > 0 {
            tracing::info!(id, "movie deleted");
        }
        Ok(())
    }
}
