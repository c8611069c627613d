use anyhow::Result;
use chrono::NaiveDate;
use rand::Rng;

use crate::{
    catalog::MOTIVATIONAL_QUOTES,
    store::{QuoteCache, Storage},
};

/// The motivational quote for `today`. Cached per calendar day; a new day
/// draws a fresh quote that differs from the previous one. A corrupt cache
/// was already purged by the store and reads as absent.
pub async fn daily_quote(storage: &Storage, today: NaiveDate) -> Result<String> {
    let cached = storage.load_quote_cache().await?;

    if let Some(cache) = &cached {
        if cache.date == today {
            return Ok(cache.quote.clone());
        }
    }

    let last_quote = cached.map(|c| c.quote);
    let mut rng = rand::thread_rng();
    let mut quote = MOTIVATIONAL_QUOTES[rng.gen_range(0..MOTIVATIONAL_QUOTES.len())];
    while MOTIVATIONAL_QUOTES.len() > 1 && Some(quote) == last_quote.as_deref() {
        quote = MOTIVATIONAL_QUOTES[rng.gen_range(0..MOTIVATIONAL_QUOTES.len())];
    }

    storage
        .save_quote_cache(&QuoteCache {
            quote: quote.to_string(),
            date: today,
        })
        .await?;

    Ok(quote.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::storage;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn same_day_reuses_cached_quote() {
        let (_dir, storage) = storage();
        let today = date("2024-05-01");

        let first = daily_quote(&storage, today).await.unwrap();
        let second = daily_quote(&storage, today).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn new_day_draws_a_different_quote() {
        let (_dir, storage) = storage();

        let yesterday = daily_quote(&storage, date("2024-05-01")).await.unwrap();
        let today = daily_quote(&storage, date("2024-05-02")).await.unwrap();
        assert_ne!(yesterday, today);

        let cache = storage.load_quote_cache().await.unwrap().unwrap();
        assert_eq!(cache.date, date("2024-05-02"));
        assert_eq!(cache.quote, today);
    }
}
