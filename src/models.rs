use serde::Deserialize;

use crate::{
    catalog::MovieDetails,
    error::{AppError, AppResult},
};

/// Edit-form submission for `/update/{id}`. Blank fields leave the stored
/// value untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateMovieForm {
    #[serde(default)]
    pub new_rating: String,
    #[serde(default)]
    pub new_review: String,
}

impl UpdateMovieForm {
    pub fn rating(&self) -> AppResult<Option<f64>> {
        let raw = self.new_rating.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse::<f64>()
            .map(Some)
            .map_err(|_| AppError::Validation(format!("rating must be a number, got {raw:?}")))
    }

    pub fn review(&self) -> Option<String> {
        let raw = self.new_review.trim();
        (!raw.is_empty()).then(|| raw.to_string())
    }
}

/// Search-form submission for `/select`.
#[derive(Debug, Deserialize)]
pub struct SpecifyMovieForm {
    pub new_movie: String,
}

/// Fields of a movie record derived from catalog details; rating, ranking and
/// review start at their defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub img_url: String,
}

impl NewMovie {
    /// Derives a record from catalog details. A payload without a poster path
    /// or a parseable release year is rejected rather than stored malformed.
    pub fn from_details(details: MovieDetails, image_base_url: &str) -> AppResult<Self> {
        let poster_path = details.poster_path.filter(|p| !p.is_empty()).ok_or_else(|| {
            AppError::Integration(format!("catalog details for {:?} lack a poster path", details.title))
        })?;

        let release_date = details.release_date.unwrap_or_default();
        let year: i32 = release_date
            .get(..4)
            .and_then(|y| y.parse().ok())
            .ok_or_else(|| {
                AppError::Integration(format!(
                    "catalog details for {:?} have unparseable release date {release_date:?}",
                    details.title
                ))
            })?;

        Ok(Self {
            title: details.title,
            year,
            description: details.overview,
            img_url: format!("{}{}", image_base_url.trim_end_matches('/'), poster_path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> MovieDetails {
        MovieDetails {
            title: "Inception".to_string(),
            poster_path: Some("/abc.jpg".to_string()),
            release_date: Some("2010-07-15".to_string()),
            overview: "A thief who steals corporate secrets.".to_string(),
        }
    }

    #[test]
    fn derives_year_and_poster_url() {
        let new = NewMovie::from_details(details(), "https://image.tmdb.org/t/p/w500").unwrap();
        assert_eq!(new.year, 2010);
        assert_eq!(new.img_url, "https://image.tmdb.org/t/p/w500/abc.jpg");
    }

    #[test]
    fn missing_poster_path_is_rejected() {
        let mut d = details();
        d.poster_path = None;
        assert!(matches!(
            NewMovie::from_details(d, "https://image.tmdb.org/t/p/w500"),
            Err(AppError::Integration(_))
        ));
    }

    #[test]
    fn malformed_release_date_is_rejected() {
        let mut d = details();
        d.release_date = Some("soon".to_string());
        assert!(matches!(
            NewMovie::from_details(d, "https://image.tmdb.org/t/p/w500"),
            Err(AppError::Integration(_))
        ));
    }

    #[test]
    fn blank_form_fields_are_none() {
        let form = UpdateMovieForm { new_rating: " ".to_string(), new_review: "".to_string() };
        assert_eq!(form.rating().unwrap(), None);
        assert_eq!(form.review(), None);
    }

    #[test]
    fn unparseable_rating_is_a_validation_error() {
        let form = UpdateMovieForm { new_rating: "ten".to_string(), new_review: "".to_string() };
        assert!(matches!(form.rating(), Err(AppError::Validation(_))));
    }
}
