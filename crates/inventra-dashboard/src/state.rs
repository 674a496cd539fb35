//! Shared reactive state provided via context: dashboard statistics and the
//! transient notification queue.

use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout;
use leptos::*;

use crate::api::Api;
use crate::models::{DashboardStats, RecentAsset};
use crate::services::asset;

/// How long a notification stays on screen.
const TOAST_DISMISS_MS: u64 = 4000;

// ============================================================================
// Dashboard stats
// ============================================================================

/// Dashboard aggregates and the recent-assets preview, fetched together.
///
/// Both requests issue in parallel; if either fails the combined operation is
/// reported as failed and the previous data is left in place. The assets page
/// calls [`StatsState::refetch`] after every mutation so both views stay
/// consistent with the underlying collection.
#[derive(Clone, Copy)]
pub struct StatsState {
    pub stats: RwSignal<Option<DashboardStats>>,
    pub recent: RwSignal<Vec<RecentAsset>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl StatsState {
    pub fn new() -> Self {
        Self {
            stats: create_rw_signal(None),
            recent: create_rw_signal(Vec::new()),
            is_loading: create_rw_signal(true),
            error: create_rw_signal(None),
        }
    }

    pub fn refetch(&self, api: &Api) {
        let state = *self;
        let api = api.clone();
        state.is_loading.set(true);
        state.error.set(None);
        spawn_local(async move {
            let (stats, recent) =
                futures::join!(asset::get_stats(&api), asset::get_recent_assets(&api));
            match (stats, recent) {
                (Ok(stats), Ok(recent)) => {
                    state.stats.set(Some(stats));
                    state.recent.set(recent);
                }
                (Err(err), _) | (_, Err(err)) => {
                    log::error!("dashboard fetch failed: {err}");
                    state
                        .error
                        .set(Some("Failed to fetch dashboard data".to_string()));
                }
            }
            state.is_loading.set(false);
        });
    }
}

impl Default for StatsState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Transient notification queue. Errors caught at the point of a user action
/// end up here; nothing is retried and nothing is fatal.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn items(&self) -> RwSignal<Vec<Toast>> {
        self.items
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(Toast { id, level, message }));

        let items = self.items;
        set_timeout(
            move || items.update(|list| list.retain(|t| t.id != id)),
            Duration::from_millis(TOAST_DISMISS_MS),
        );
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Display formatting
// ============================================================================

/// Group digits with thousands separators: 1234567 -> "1,234,567".
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// USD currency display: 2499.5 -> "$2,499.50".
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = format_number(cents / 100);
    let fraction = cents % 100;
    let sign = if negative { "-" } else { "" };
    format!("{sign}${whole}.{fraction:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_numbers_with_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn formats_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(2499.5), "$2,499.50");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-12.3), "-$12.30");
    }
}
