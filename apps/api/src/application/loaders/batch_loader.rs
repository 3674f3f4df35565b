use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::hash::Hash;
use tokio::sync::Mutex;

/// One batched fetch: every requested key that exists comes back in the map.
#[async_trait]
pub trait BatchFn: Send + Sync {
    type Key: Eq + Hash + Clone + Send + Sync;
    type Value: Clone + Send + Sync;

    async fn load(
        &self,
        keys: &[Self::Key],
    ) -> Result<HashMap<Self::Key, Self::Value>, DomainError>;
}

/// Request-scoped memo in front of a [`BatchFn`].
///
/// Create one per inbound request and drop it with the request; nothing is
/// shared between requests. Misses are cached too, so a key is fetched at
/// most once per loader.
pub struct BatchLoader<F: BatchFn> {
    batch: F,
    cache: Mutex<HashMap<F::Key, Option<F::Value>>>,
}

impl<F: BatchFn> BatchLoader<F> {
    pub fn new(batch: F) -> Self {
        Self {
            batch,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolves `keys` in order, fetching every uncached key in one call.
    pub async fn load_many(&self, keys: &[F::Key]) -> Result<Vec<Option<F::Value>>, DomainError> {
        // Held across the fetch so concurrent callers never load the same key twice.
        let mut cache = self.cache.lock().await;

        let mut missing: Vec<F::Key> = Vec::new();
        for key in keys {
            if !cache.contains_key(key) && !missing.contains(key) {
                missing.push(key.clone());
            }
        }

        if !missing.is_empty() {
            let mut found = self.batch.load(&missing).await?;
            for key in missing {
                let value = found.remove(&key);
                cache.insert(key, value);
            }
        }

        Ok(keys
            .iter()
            .map(|key| cache.get(key).cloned().flatten())
            .collect())
    }

    pub async fn load(&self, key: &F::Key) -> Result<Option<F::Value>, DomainError> {
        let mut values = self.load_many(std::slice::from_ref(key)).await?;
        Ok(values.pop().flatten())
    }
}
