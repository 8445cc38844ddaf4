/// Movie catalog models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// A movie record held by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub isbn: String,
    pub title: String,
    pub director: Director,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Director of a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub firstname: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub lastname: String,
}

/// Body accepted by create and update
///
/// Only `isbn`, `title` and the presence of `director` are checked; the
/// director's name fields are accepted as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MovieRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub isbn: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(required)]
    pub director: Option<Director>,
    pub release_year: Option<i64>,
    pub genre: Option<String>,
    pub rating: Option<f64>,
}

/// Decode a JSON `null` string as empty, so it fails the required-field check
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Director {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }
}

impl Movie {
    /// Build a new record from a validated request
    pub(crate) fn from_request(
        id: String,
        request: MovieRequest,
        director: Director,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            isbn: request.isbn,
            title: request.title,
            director,
            release_year: request.release_year,
            genre: request.genre,
            rating: request.rating,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every mutable field and refresh `updated_at`
    pub(crate) fn apply(&mut self, request: MovieRequest, director: Director, now: DateTime<Utc>) {
        self.isbn = request.isbn;
        self.title = request.title;
        self.director = director;
        self.release_year = request.release_year;
        self.genre = request.genre;
        self.rating = request.rating;
        // Keep updated_at monotonic even if the wall clock steps back
        self.updated_at = now.max(self.updated_at);
    }
}

/// The two records the catalog starts with
pub fn sample_movies(now: DateTime<Utc>) -> Vec<Movie> {
    vec![
        Movie {
            id: "1".to_string(),
            isbn: "438227".to_string(),
            title: "Movie One".to_string(),
            director: Director::new("John", "Doe"),
            release_year: Some(2020),
            genre: Some("Action".to_string()),
            rating: Some(8.5),
            created_at: now,
            updated_at: now,
        },
        Movie {
            id: "2".to_string(),
            isbn: "45455".to_string(),
            title: "Movie Two".to_string(),
            director: Director::new("Steve", "Smith"),
            release_year: Some(2021),
            genre: Some("Drama".to_string()),
            rating: Some(7.8),
            created_at: now,
            updated_at: now,
        },
    ]
}
