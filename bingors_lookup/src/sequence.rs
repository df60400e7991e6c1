use std::sync::atomic::{AtomicU64, Ordering};

/// Token handed out when a request starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Monotonic request counter that lets only the newest response through.
///
/// A response is accepted when its ticket is still the most recently issued
/// one and is newer than every response accepted before it.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: AtomicU64,
    accepted: AtomicU64,
}

impl RequestSequencer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
            accepted: AtomicU64::new(0),
        }
    }

    /// Start a new request, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    #[must_use]
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Claim the right to apply the response for `ticket`.
    pub fn accept(&self, ticket: Ticket) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.accepted.fetch_max(ticket.0, Ordering::SeqCst) < ticket.0
    }
}
