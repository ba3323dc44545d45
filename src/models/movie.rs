use serde::Serialize;
use sqlx::FromRow;

pub const DEFAULT_PRICE: i64 = 150;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub poster: Option<String>,
    pub price: i64,
}

// Movie before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub description: Option<String>,
    pub poster: Option<String>,
    pub price: i64,
}

impl NewMovie {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            poster: None,
            price: DEFAULT_PRICE,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn with_id(self, id: i64) -> Movie {
        Movie {
            id,
            title: self.title,
            description: self.description,
            poster: self.poster,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_movie_defaults_price() {
        let movie = NewMovie::new("loki").with_id(7);
        assert_eq!(movie.id, 7);
        assert_eq!(movie.price, DEFAULT_PRICE);
        assert!(movie.description.is_none());
        assert!(movie.poster.is_none());
    }
}
