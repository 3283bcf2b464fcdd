use crate::content::ContentTable;
use crate::models::Category;
use crate::session::SessionTracker;
use rand::{SeedableRng, rngs::StdRng};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentTable>,
    pub sessions: Arc<Mutex<SessionStore>>,
}

impl AppState {
    pub fn new(content: ContentTable, sessions: SessionStore) -> Self {
        Self {
            content: Arc::new(content),
            sessions: Arc::new(Mutex::new(sessions)),
        }
    }
}

struct SessionSlot {
    tracker: SessionTracker,
    last_seen: Instant,
}

/// Live trackers keyed by the id carried in the session cookie.
///
/// Only submissions create sessions; reads go through [`SessionStore::peek`].
pub struct SessionStore {
    slots: HashMap<Uuid, SessionSlot>,
    ttl: Duration,
    seed: Option<u64>,
    preview_rng: StdRng,
}

impl SessionStore {
    pub fn new(ttl: Duration, seed: Option<u64>) -> Self {
        Self {
            slots: HashMap::new(),
            ttl,
            seed,
            preview_rng: new_rng(seed),
        }
    }

    /// Returns the tracker for `id` without creating one. A hit counts as
    /// activity for expiry.
    pub fn peek(&mut self, id: Option<Uuid>) -> Option<&SessionTracker> {
        self.peek_at(id, Instant::now())
    }

    pub fn peek_at(&mut self, id: Option<Uuid>, now: Instant) -> Option<&SessionTracker> {
        self.prune(now);
        let slot = self.slots.get_mut(&id?)?;
        slot.last_seen = now;
        Some(&slot.tracker)
    }

    /// Returns the tracker for `id`, creating a fresh session when the id is
    /// missing, unknown or expired. The returned id is the one to hand back
    /// to the client.
    pub fn checkout(&mut self, id: Option<Uuid>) -> (Uuid, &mut SessionTracker) {
        self.checkout_at(id, Instant::now())
    }

    pub fn checkout_at(&mut self, id: Option<Uuid>, now: Instant) -> (Uuid, &mut SessionTracker) {
        self.prune(now);

        let id = match id {
            Some(id) if self.slots.contains_key(&id) => id,
            _ => Uuid::new_v4(),
        };

        let seed = self.seed;
        let slot = self.slots.entry(id).or_insert_with(|| {
            debug!(session = %id, "starting session");
            SessionSlot {
                tracker: SessionTracker::new(new_rng(seed)),
                last_seen: now,
            }
        });
        slot.last_seen = now;
        (id, &mut slot.tracker)
    }

    /// Draws a tip, quote and image for `category` without touching any
    /// session.
    pub fn preview(
        &mut self,
        content: &ContentTable,
        category: &Category,
    ) -> (String, String, String) {
        let key = category.key();
        (
            content.tip_for(key, &mut self.preview_rng).to_string(),
            content.quote_for(key, &mut self.preview_rng).to_string(),
            content.image_for(key).to_string(),
        )
    }

    pub fn end(&mut self, id: Uuid) -> bool {
        let removed = self.slots.remove(&id).is_some();
        if removed {
            debug!(session = %id, "session ended");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.slots.retain(|id, slot| {
            let alive = now.saturating_duration_since(slot.last_seen) <= ttl;
            if !alive {
                debug!(session = %id, "session expired");
            }
            alive
        });
    }
}

fn new_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
