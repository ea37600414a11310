//! In-memory, per-session garage and the assistant hook that writes into it.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;

use cm_assistant::GarageHook;
use cm_catalog::Vehicle;

/// Minimal saved view of a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GarageEntry {
    pub id: String,
    pub name: String,
    pub trim: String,
    pub msrp: f64,
    pub currency: String,
    pub model_code: String,
    pub added_at: DateTime<Utc>,
}

impl From<&Vehicle> for GarageEntry {
    fn from(v: &Vehicle) -> Self {
        Self {
            id: v.id.clone(),
            name: v.name.clone(),
            trim: v.trim.clone(),
            msrp: v.msrp,
            currency: v.currency.clone(),
            model_code: v.model_code.clone(),
            added_at: Utc::now(),
        }
    }
}

/// Default cap on concurrently tracked sessions.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug)]
struct SessionItems {
    items: Vec<GarageEntry>,
    touched: u64,
}

#[derive(Debug, Default)]
struct Sessions {
    by_id: HashMap<String, SessionItems>,
    clock: u64,
}

impl Sessions {
    /// Items for `session`, created if absent. Creating a session past
    /// `max` evicts the least recently touched one.
    fn touch(&mut self, session: &str, max: usize) -> &mut Vec<GarageEntry> {
        self.clock += 1;
        if !self.by_id.contains_key(session) && self.by_id.len() >= max {
            self.evict_oldest();
        }
        let entry = self
            .by_id
            .entry(session.to_string())
            .or_insert_with(|| SessionItems {
                items: Vec::new(),
                touched: 0,
            });
        entry.touched = self.clock;
        &mut entry.items
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .by_id
            .iter()
            .min_by_key(|(_, s)| s.touched)
            .map(|(id, _)| id.clone());
        if let Some(id) = oldest {
            self.by_id.remove(&id);
            tracing::debug!(session = %id, "garage session evicted");
        }
    }
}

/// Saved vehicles keyed by session id, bounded to `max_sessions` sessions.
///
/// Uses a blocking lock: every critical section is a short in-memory
/// update, and the assistant hook is synchronous. Each mutation runs
/// under a single write guard.
#[derive(Debug, Clone)]
pub struct GarageStore {
    sessions: Arc<RwLock<Sessions>>,
    max_sessions: usize,
}

impl GarageStore {
    pub fn new() -> Self {
        Self::with_max_sessions(DEFAULT_MAX_SESSIONS)
    }

    /// Store holding at most `max_sessions` sessions (minimum 1).
    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::default(),
            max_sessions: max_sessions.max(1),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Sessions> {
        self.sessions.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Save a vehicle. Returns false if it was already saved.
    pub fn add(&self, session: &str, vehicle: &Vehicle) -> bool {
        let mut sessions = self.write();
        let items = sessions.touch(session, self.max_sessions);
        if items.iter().any(|e| e.id == vehicle.id) {
            return false;
        }
        items.push(GarageEntry::from(vehicle));
        true
    }

    /// Remove a vehicle by id. Returns whether anything was removed.
    pub fn remove(&self, session: &str, vehicle_id: &str) -> bool {
        let mut sessions = self.write();
        let Some(saved) = sessions.by_id.get_mut(session) else {
            return false;
        };
        let before = saved.items.len();
        saved.items.retain(|e| e.id != vehicle_id);
        saved.items.len() != before
    }

    /// Add if absent, remove if present. Returns whether it is now saved.
    pub fn toggle(&self, session: &str, vehicle: &Vehicle) -> bool {
        let mut sessions = self.write();
        let items = sessions.touch(session, self.max_sessions);
        match items.iter().position(|e| e.id == vehicle.id) {
            Some(pos) => {
                items.remove(pos);
                false
            }
            None => {
                items.push(GarageEntry::from(vehicle));
                true
            }
        }
    }

    pub fn clear(&self, session: &str) {
        self.write().by_id.remove(session);
    }

    pub fn list(&self, session: &str) -> Vec<GarageEntry> {
        let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);
        sessions
            .by_id
            .get(session)
            .map(|s| s.items.clone())
            .unwrap_or_default()
    }

    /// Number of sessions currently tracked.
    pub fn session_count(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_id
            .len()
    }

    /// A hook that saves into `session`.
    pub fn hook_for(&self, session: impl Into<String>) -> SessionGarage {
        SessionGarage {
            store: self.clone(),
            session: session.into(),
        }
    }
}

impl Default for GarageStore {
    fn default() -> Self {
        Self::new()
    }
}

/// `GarageHook` bound to one session of a `GarageStore`.
pub struct SessionGarage {
    store: GarageStore,
    session: String,
}

impl GarageHook for SessionGarage {
    fn add_to_garage(&self, vehicle: &Vehicle) {
        let added = self.store.add(&self.session, vehicle);
        tracing::info!(
            session = %self.session,
            vehicle_id = %vehicle.id,
            added,
            "garage updated"
        );
    }
}
