/// In-memory record store
use crate::movies::models::{Director, Movie, MovieRequest};
use chrono::{DateTime, Utc};

/// Ordered collection of movie records
///
/// Holds no lock of its own; callers serialize access (see `MovieManager`).
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `movies` in the given order
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// All records in insertion order
    pub fn list(&self) -> &[Movie] {
        &self.movies
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Append a record to the end
    pub fn insert(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    /// Overwrite the mutable fields of the record with `id`
    ///
    /// Returns `None` when no record matches.
    pub fn replace(
        &mut self,
        id: &str,
        request: MovieRequest,
        director: Director,
        now: DateTime<Utc>,
    ) -> Option<&Movie> {
        let movie = self.movies.iter_mut().find(|m| m.id == id)?;
        movie.apply(request, director, now);
        Some(movie)
    }

    /// Remove the record with `id`, keeping the order of the rest
    pub fn remove(&mut self, id: &str) -> Option<Movie> {
        let index = self.movies.iter().position(|m| m.id == id)?;
        Some(self.movies.remove(index))
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movies::models::sample_movies;

    fn seeded() -> MovieStore {
        MovieStore::with_movies(sample_movies(Utc::now()))
    }

    fn request(title: &str) -> MovieRequest {
        MovieRequest {
            isbn: "999".to_string(),
            title: title.to_string(),
            director: Some(Director::new("Ada", "Lovelace")),
            release_year: None,
            genre: Some("Documentary".to_string()),
            rating: None,
        }
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut store = seeded();
        let mut extra = store.list()[0].clone();
        extra.id = "3".to_string();
        store.insert(extra);

        let ids: Vec<&str> = store.list().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_find_by_id() {
        let store = seeded();
        assert_eq!(store.find_by_id("2").unwrap().title, "Movie Two");
        assert!(store.find_by_id("99").is_none());
        assert!(!MovieStore::new().contains("1"));
    }

    #[test]
    fn test_replace_keeps_identity() {
        let mut store = seeded();
        let before = store.find_by_id("1").unwrap().clone();
        let later = before.updated_at + chrono::Duration::seconds(5);

        let updated = store
            .replace("1", request("Renamed"), Director::new("Ada", "Lovelace"), later)
            .unwrap();

        assert_eq!(updated.id, before.id);
        assert_eq!(updated.created_at, before.created_at);
        assert_eq!(updated.updated_at, later);
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.release_year, None);
        assert_eq!(updated.genre.as_deref(), Some("Documentary"));
    }

    #[test]
    fn test_replace_missing() {
        let mut store = seeded();
        let result = store.replace("99", request("x"), Director::new("a", "b"), Utc::now());
        assert!(result.is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = seeded();
        let mut third = store.list()[1].clone();
        third.id = "3".to_string();
        store.insert(third);

        let removed = store.remove("2").unwrap();
        assert_eq!(removed.id, "2");

        let ids: Vec<&str> = store.list().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(store.remove("2").is_none());
    }

    #[test]
    fn test_empty_store() {
        let store = MovieStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }
}
