use tracing::info;

use crate::models::NewMovie;
use crate::store::{BookingStore, StoreError};

pub fn sample_movies() -> Vec<NewMovie> {
    vec![
        NewMovie::new("dark-knight")
            .description("A moving story of hope and color.")
            .poster("images/dark-knight.jpg")
            .price(150),
        NewMovie::new("loki")
            .description("Fast-paced thriller with stunning chases.")
            .poster("images/loki_movie.jpg")
            .price(200),
        NewMovie::new("Inception")
            .description("thriller fantasic.")
            .poster("images/inception.jpg")
            .price(100),
        NewMovie::new("Alvin")
            .description(" Comedy thriller fantasic.")
            .poster("images/alvin.jpg")
            .price(150),
        NewMovie::new("Interstellar")
            .description(" Comedy thriller fantasic.")
            .poster("images/interstellar.jpg")
            .price(120),
    ]
}

/// Seeds the sample catalogue when the store holds no movies yet.
/// Returns how many movies were inserted.
pub async fn seed_movies(store: &dyn BookingStore) -> Result<usize, StoreError> {
    if store.count_movies().await? > 0 {
        info!("Movies already present, skipping seed");
        return Ok(0);
    }

    let movies = sample_movies();
    let count = movies.len();
    for movie in movies {
        store.insert_movie(movie).await?;
    }
    info!("Seeded {} sample movies", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn seeds_only_an_empty_store() {
        let store = MemoryStore::new();
        assert_eq!(seed_movies(&store).await.unwrap(), 5);
        assert_eq!(seed_movies(&store).await.unwrap(), 0);
        assert_eq!(store.count_movies().await.unwrap(), 5);

        let first = store.find_movie(1).await.unwrap().unwrap();
        assert_eq!(first.title, "dark-knight");
        assert_eq!(first.price, 150);
    }
}
