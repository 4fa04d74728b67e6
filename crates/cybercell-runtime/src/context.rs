//! Providers built once at the app root and threaded down to every page.
//!
//! All timestamps are offsets from app start so behavior is reproducible
//! under a fake clock.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;

// ==========================================
// Query cache
// ==========================================

#[derive(Debug, Clone)]
struct CachedQuery {
    value: Value,
    fetched_at: Duration,
}

/// Keyed in-memory cache with a stale time. The site issues no queries of
/// its own; the cache is there for pages that do.
#[derive(Debug, Clone)]
pub struct QueryClient {
    stale_time: Duration,
    entries: HashMap<String, CachedQuery>,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl QueryClient {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            stale_time,
            entries: HashMap::new(),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value, now: Duration) {
        self.entries.insert(
            key.into(),
            CachedQuery {
                value,
                fetched_at: now,
            },
        );
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).map(|q| &q.value)
    }

    /// Missing entries count as stale.
    pub fn is_stale(&self, key: &str, now: Duration) -> bool {
        self.entries
            .get(key)
            .is_none_or(|q| now.saturating_sub(q.fetched_at) >= self.stale_time)
    }

    pub fn invalidate(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ==========================================
// Tooltips
// ==========================================

/// Shows a hovered element's tooltip once the pointer has rested on it for
/// `delay`. Moving to another element restarts the wait.
#[derive(Debug, Clone)]
pub struct TooltipProvider {
    delay: Duration,
    hovered: Option<(String, Duration)>,
}

impl TooltipProvider {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            hovered: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn hover(&mut self, label: Option<&str>, now: Duration) {
        match (label, &self.hovered) {
            (Some(label), Some((current, _))) if current == label => {}
            (Some(label), _) => self.hovered = Some((label.to_string(), now)),
            (None, _) => self.hovered = None,
        }
    }

    pub fn visible(&self, now: Duration) -> Option<&str> {
        self.hovered
            .as_ref()
            .filter(|(_, since)| now.saturating_sub(*since) >= self.delay)
            .map(|(label, _)| label.as_str())
    }
}

// ==========================================
// Toasts
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
    #[serde(skip)]
    pub created_at: Duration,
}

/// A toast surface. The toaster shows one toast at a time and a new one
/// replaces it; sonner stacks a few.
#[derive(Debug, Clone)]
pub struct ToastSurface {
    name: &'static str,
    limit: usize,
    duration: Duration,
    toasts: VecDeque<Toast>,
    next_id: u64,
}

impl ToastSurface {
    pub const TOASTER_LIMIT: usize = 1;
    pub const SONNER_LIMIT: usize = 3;

    pub fn toaster(duration: Duration) -> Self {
        Self::new("toaster", Self::TOASTER_LIMIT, duration)
    }

    pub fn sonner(duration: Duration) -> Self {
        Self::new("sonner", Self::SONNER_LIMIT, duration)
    }

    fn new(name: &'static str, limit: usize, duration: Duration) -> Self {
        Self {
            name,
            limit: limit.max(1),
            duration,
            toasts: VecDeque::new(),
            next_id: 1,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, level: ToastLevel, now: Duration) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        while self.toasts.len() >= self.limit {
            self.toasts.pop_front();
        }
        let message = message.into();
        debug!(surface = self.name, id, %message, "toast");
        self.toasts.push_back(Toast {
            id,
            message,
            level,
            created_at: now,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop toasts whose duration has elapsed.
    pub fn expire(&mut self, now: Duration) {
        let duration = self.duration;
        self.toasts
            .retain(|t| now.saturating_sub(t.created_at) < duration);
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Everything the app root provides to the tree below it.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub queries: QueryClient,
    pub tooltips: TooltipProvider,
    pub toaster: ToastSurface,
    pub sonner: ToastSurface,
}

impl AppContext {
    pub fn new(config: &Config) -> Self {
        let toast_duration = Duration::from_millis(config.toasts.duration_ms);
        Self {
            queries: QueryClient::default(),
            tooltips: TooltipProvider::new(Duration::from_millis(config.tooltips.delay_ms)),
            toaster: ToastSurface::toaster(toast_duration),
            sonner: ToastSurface::sonner(toast_duration),
        }
    }

    pub fn expire(&mut self, now: Duration) {
        self.toaster.expire(now);
        self.sonner.expire(now);
    }
}
