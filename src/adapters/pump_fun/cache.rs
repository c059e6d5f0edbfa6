//! Token Lookup Cache
//!
//! TTL cache for token lookups keyed by contract address. Both successful
//! snapshots and upstream not-found answers are cached, so a token the API
//! rejects is not re-fetched on every message. Trades are never cached.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::ports::market_data::TokenSnapshot;

/// Outcome of a token lookup worth remembering
///
/// Transport and decode failures are transient and never cached; only a
/// definitive upstream answer (a snapshot or a not-found) lands here.
#[derive(Debug, Clone)]
pub enum TokenOutcome {
    /// Upstream returned market data
    Found(TokenSnapshot),
    /// Upstream flagged the address as unknown or invalid
    NotFound,
}

/// Cache entry with TTL tracking
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub outcome: TokenOutcome,
    pub inserted_at: Instant,
    pub ttl: Duration,
}

impl CacheEntry {
    /// Create a new cache entry
    pub fn new(outcome: TokenOutcome, ttl: Duration) -> Self {
        Self {
            outcome,
            inserted_at: Instant::now(),
            ttl,
        }
    }

    /// Check if entry is still valid
    pub fn is_valid(&self) -> bool {
        self.inserted_at.elapsed() < self.ttl
    }

    /// Get time remaining before expiry
    pub fn time_remaining(&self) -> Option<Duration> {
        let elapsed = self.inserted_at.elapsed();
        if elapsed < self.ttl {
            Some(self.ttl - elapsed)
        } else {
            None
        }
    }
}

/// TTL cache for token lookup outcomes
///
/// Reads filter out expired entries but never delete them; expired entries
/// are swept on insert, and the oldest entry is dropped when the cache is
/// still full after a sweep.
#[derive(Debug)]
pub struct TokenCache {
    entries: HashMap<String, CacheEntry>,
    /// TTL applied to every entry
    ttl: Duration,
    /// Maximum entries before cleanup
    max_entries: usize,
}

impl TokenCache {
    /// Default TTL for token lookups (60 seconds)
    pub const DEFAULT_TTL: Duration = Duration::from_secs(60);
    /// Default max cache entries
    pub const DEFAULT_MAX_ENTRIES: usize = 512;

    /// Create a new cache with default settings
    pub fn new() -> Self {
        Self::with_config(Self::DEFAULT_TTL, Self::DEFAULT_MAX_ENTRIES)
    }

    /// Create a new cache with custom TTL settings
    pub fn with_config(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            max_entries,
        }
    }

    /// Insert a lookup outcome, evicting if at capacity
    pub fn insert(&mut self, address: String, outcome: TokenOutcome) {
        // Cleanup if we're at capacity
        if self.entries.len() >= self.max_entries {
            self.cleanup();
        }

        // Still at capacity after cleanup? Remove oldest entry
        if self.entries.len() >= self.max_entries {
            self.remove_oldest();
        }

        let entry = CacheEntry::new(outcome, self.ttl);
        self.entries.insert(address, entry);
    }

    /// Get a cached outcome if valid
    pub fn get(&self, address: &str) -> Option<&TokenOutcome> {
        self.entries
            .get(address)
            .filter(|entry| entry.is_valid())
            .map(|entry| &entry.outcome)
    }

    /// Get a cached entry with metadata if valid
    pub fn get_entry(&self, address: &str) -> Option<&CacheEntry> {
        self.entries.get(address).filter(|entry| entry.is_valid())
    }

    /// Check if a valid entry exists
    pub fn contains(&self, address: &str) -> bool {
        self.get(address).is_some()
    }

    /// Remove expired entries
    pub fn cleanup(&mut self) {
        self.entries.retain(|_, entry| entry.is_valid());
    }

    /// Remove the oldest entry
    fn remove_oldest(&mut self) {
        if let Some(oldest_key) = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.inserted_at)
            .map(|(key, _)| key.clone())
        {
            self.entries.remove(&oldest_key);
        }
    }

    /// Get the number of entries (including expired)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of valid entries
    pub fn valid_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_valid()).count()
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let total = self.entries.len();
        let valid = self.valid_count();
        let found = self
            .entries
            .values()
            .filter(|e| e.is_valid() && matches!(e.outcome, TokenOutcome::Found(_)))
            .count();
        let not_found = self
            .entries
            .values()
            .filter(|e| e.is_valid() && matches!(e.outcome, TokenOutcome::NotFound))
            .count();

        CacheStats {
            total_entries: total,
            valid_entries: valid,
            expired_entries: total - valid,
            found_entries: found,
            not_found_entries: not_found,
        }
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub expired_entries: usize,
    pub found_entries: usize,
    pub not_found_entries: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_snapshot(symbol: &str) -> TokenSnapshot {
        TokenSnapshot {
            name: "Test Token".to_string(),
            symbol: symbol.to_string(),
            price: 0.001,
            volume_24h: 10_000.0,
            liquidity: 8_000.0,
            market_cap: 100_000.0,
            holders: 200,
        }
    }

    fn create_found(symbol: &str) -> TokenOutcome {
        TokenOutcome::Found(create_snapshot(symbol))
    }

    #[test]
    fn test_cache_insert_and_get() {
        let mut cache = TokenCache::new();

        cache.insert("addr1".to_string(), create_found("AAA"));

        let cached = cache.get("addr1");
        assert!(matches!(
            cached,
            Some(TokenOutcome::Found(s)) if s.symbol == "AAA"
        ));
    }

    #[test]
    fn test_cache_stores_not_found() {
        let mut cache = TokenCache::new();

        cache.insert("bad".to_string(), TokenOutcome::NotFound);

        assert!(matches!(cache.get("bad"), Some(TokenOutcome::NotFound)));
    }

    #[test]
    fn test_cache_expiry() {
        let short_ttl = Duration::from_millis(10);
        let mut cache = TokenCache::with_config(short_ttl, 100);

        cache.insert("addr1".to_string(), create_found("AAA"));

        // Should be valid immediately
        assert!(cache.contains("addr1"));

        // Wait for expiry
        std::thread::sleep(Duration::from_millis(20));

        // Should be expired now
        assert!(!cache.contains("addr1"));
    }

    #[test]
    fn test_get_does_not_evict_expired() {
        let short_ttl = Duration::from_millis(10);
        let mut cache = TokenCache::with_config(short_ttl, 100);

        cache.insert("addr1".to_string(), create_found("AAA"));
        std::thread::sleep(Duration::from_millis(20));

        // The read misses but the entry stays until the next cleanup
        assert!(cache.get("addr1").is_none());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.valid_count(), 0);
    }

    #[test]
    fn test_cache_cleanup() {
        let short_ttl = Duration::from_millis(10);
        let mut cache = TokenCache::with_config(short_ttl, 100);

        for i in 0..5 {
            cache.insert(format!("addr{i}"), create_found("AAA"));
        }

        assert_eq!(cache.len(), 5);

        std::thread::sleep(Duration::from_millis(20));

        cache.cleanup();

        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_cache_max_entries() {
        let mut cache = TokenCache::with_config(
            Duration::from_secs(60),
            3, // Very small max
        );

        for i in 0..5 {
            cache.insert(format!("addr{i}"), create_found("AAA"));
        }

        // Should be at or below max
        assert!(cache.len() <= 3);
    }

    #[test]
    fn test_oldest_entry_is_evicted_first() {
        let mut cache = TokenCache::with_config(Duration::from_secs(60), 2);

        cache.insert("first".to_string(), create_found("AAA"));
        std::thread::sleep(Duration::from_millis(5));
        cache.insert("second".to_string(), create_found("BBB"));
        std::thread::sleep(Duration::from_millis(5));
        cache.insert("third".to_string(), create_found("CCC"));

        assert!(!cache.contains("first"));
        assert!(cache.contains("second"));
        assert!(cache.contains("third"));
    }

    #[test]
    fn test_reinsert_refreshes_entry() {
        let mut cache = TokenCache::new();

        cache.insert("addr1".to_string(), create_found("OLD"));
        cache.insert("addr1".to_string(), create_found("NEW"));

        assert_eq!(cache.len(), 1);
        assert!(matches!(
            cache.get("addr1"),
            Some(TokenOutcome::Found(s)) if s.symbol == "NEW"
        ));
    }

    #[test]
    fn test_cache_stats() {
        let mut cache = TokenCache::new();

        cache.insert("a".to_string(), create_found("AAA"));
        cache.insert("b".to_string(), create_found("BBB"));
        cache.insert("c".to_string(), TokenOutcome::NotFound);

        let stats = cache.stats();

        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.valid_entries, 3);
        assert_eq!(stats.found_entries, 2);
        assert_eq!(stats.not_found_entries, 1);
    }

    #[test]
    fn test_cache_entry_time_remaining() {
        let ttl = Duration::from_millis(100);
        let entry = CacheEntry::new(create_found("AAA"), ttl);

        let remaining = entry.time_remaining();
        assert!(remaining.is_some());
        assert!(remaining.unwrap() <= ttl);

        // Wait for expiry
        std::thread::sleep(Duration::from_millis(110));

        let remaining = entry.time_remaining();
        assert!(remaining.is_none());
    }
}
