//! Latest-only search and cover resolution for one editor.
//!
//! Searches wait for a quiet period before going out, and both searches and
//! cover fetches drop responses that belong to a request that has since been
//! superseded. Lookup failures degrade to "no results" and "no image".

use bingors_core::LookupResult;
use std::time::Duration;
use tracing::{debug, warn};

use crate::GameLookup;
use crate::sequence::RequestSequencer;

/// Outcome of a guarded request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Latest<T> {
    /// Response for the newest request; safe to apply.
    Current(T),
    /// A newer request was started; discard.
    Superseded,
}

impl<T> Latest<T> {
    #[must_use]
    pub fn current(self) -> Option<T> {
        match self {
            Self::Current(value) => Some(value),
            Self::Superseded => None,
        }
    }
}

pub struct LookupSession<L> {
    lookup: L,
    debounce: Duration,
    searches: RequestSequencer,
    covers: RequestSequencer,
}

impl<L: GameLookup> LookupSession<L> {
    pub const fn new(lookup: L, debounce: Duration) -> Self {
        Self {
            lookup,
            debounce,
            searches: RequestSequencer::new(),
            covers: RequestSequencer::new(),
        }
    }

    pub const fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Debounced candidate search. Blank queries resolve to no candidates
    /// without a request.
    pub async fn search(&self, query: &str) -> Latest<Vec<LookupResult>> {
        let ticket = self.searches.begin();
        tokio::time::sleep(self.debounce).await;
        if !self.searches.is_latest(ticket) {
            debug!("Search \"{query}\" superseded before sending");
            return Latest::Superseded;
        }

        let query = query.trim();
        let results = if query.is_empty() {
            Vec::new()
        } else {
            self.lookup.search(query).await.unwrap_or_else(|e| {
                warn!("Search \"{query}\" failed: {e}");
                Vec::new()
            })
        };

        if self.searches.accept(ticket) {
            Latest::Current(results)
        } else {
            debug!("Discarding stale results for \"{query}\"");
            Latest::Superseded
        }
    }

    /// Cover image for a selected candidate. `Current(None)` means no image
    /// is available.
    pub async fn resolve_cover(&self, candidate: &LookupResult) -> Latest<Option<String>> {
        let ticket = self.covers.begin();
        let slug = candidate.slug();

        let cover = match self.lookup.fetch_image(slug).await {
            Ok(url) => Some(url),
            Err(e) => {
                warn!("No cover for {slug}: {e}");
                None
            }
        };

        if self.covers.accept(ticket) {
            Latest::Current(cover)
        } else {
            debug!("Discarding stale cover for {slug}");
            Latest::Superseded
        }
    }
}
