//! Realtime Sync Listener
//!
//! One long-lived WebSocket per page. Inbound events are applied to the
//! store synchronously, in receipt order; unknown discriminants are ignored
//! so the server can add message types without breaking old clients.
//! Transport errors are logged only; no reconnect is attempted.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, MessageEvent, WebSocket};

use crate::models::{Coupon, CouponStatus, Stats};
use crate::notifications::{notify, Severity};
use crate::store::{AppStateStoreFields, AppStore};

/// How long a row keeps its update highlight.
pub const FLASH_MS: u32 = 2000;

/// Inbound push messages, routed on the `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum RealtimeEvent {
    #[serde(rename = "coupon_claimed", rename_all = "camelCase")]
    CouponClaimed {
        coupon_id: String,
        new_usage_count: u32,
        coupon_code: String,
    },
    #[serde(rename = "coupon_expired", rename_all = "camelCase")]
    CouponExpired { coupon_id: String },
    #[serde(rename = "stats_updated")]
    StatsUpdated { stats: Stats },
}

/// Update a row's usage count in place. Unknown ids are a no-op.
pub fn apply_usage_update(coupons: &mut [Coupon], coupon_id: &str, new_usage_count: u32) -> bool {
    match coupons.iter_mut().find(|c| c.id == coupon_id) {
        Some(coupon) => {
            coupon.usage_count = new_usage_count;
            true
        }
        None => false,
    }
}

/// Mark a row expired in place. Unknown ids are a no-op.
pub fn apply_expiry(coupons: &mut [Coupon], coupon_id: &str) -> bool {
    match coupons.iter_mut().find(|c| c.id == coupon_id) {
        Some(coupon) => {
            coupon.status = CouponStatus::Expired;
            true
        }
        None => false,
    }
}

/// Apply one event to the store and surface user-facing feedback.
pub fn dispatch(store: AppStore, event: RealtimeEvent) {
    match event {
        RealtimeEvent::CouponClaimed {
            coupon_id,
            new_usage_count,
            coupon_code,
        } => {
            let updated = apply_usage_update(
                &mut store.coupons().write(),
                &coupon_id,
                new_usage_count,
            );
            if updated {
                flash_row(store, coupon_id);
            }
            notify(
                store,
                format!("Coupon \"{coupon_code}\" was just claimed!"),
                Severity::Info,
            );
        }
        RealtimeEvent::CouponExpired { coupon_id } => {
            apply_expiry(&mut store.coupons().write(), &coupon_id);
        }
        RealtimeEvent::StatsUpdated { stats } => {
            store.stats().set(Some(stats));
        }
    }
}

fn flash_row(store: AppStore, coupon_id: String) {
    store.flashing().write().insert(coupon_id.clone());
    Timeout::new(FLASH_MS, move || {
        store.flashing().write().remove(&coupon_id);
    })
    .forget();
}

/// The page's WebSocket connection. Created on load, closed on teardown.
pub struct RealtimeConnection {
    socket: WebSocket,
    _onmessage: Closure<dyn FnMut(MessageEvent)>,
    _onerror: Closure<dyn FnMut(ErrorEvent)>,
}

impl RealtimeConnection {
    /// Connect to `{ws|wss}://<host>/ws` and start dispatching events.
    pub fn connect(store: AppStore) -> Result<Self, String> {
        let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
        let location = window.location();
        let scheme = match location.protocol().map_err(|e| format!("{e:?}"))?.as_str() {
            "https:" => "wss:",
            _ => "ws:",
        };
        let host = location.host().map_err(|e| format!("{e:?}"))?;
        let url = format!("{scheme}//{host}/ws");

        let socket = WebSocket::new(&url).map_err(|e| format!("{e:?}"))?;

        let onmessage = Closure::wrap(Box::new(move |event: MessageEvent| {
            let Some(text) = event.data().as_string() else {
                return;
            };
            // Unknown `type` values fail to decode and are dropped here.
            if let Ok(parsed) = serde_json::from_str::<RealtimeEvent>(&text) {
                dispatch(store, parsed);
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        socket.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));

        let onerror = Closure::wrap(Box::new(move |event: ErrorEvent| {
            web_sys::console::error_1(
                &format!("[WS] WebSocket error: {}", event.message()).into(),
            );
        }) as Box<dyn FnMut(ErrorEvent)>);
        socket.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        Ok(Self {
            socket,
            _onmessage: onmessage,
            _onerror: onerror,
        })
    }

    /// Tear down the connection on navigation.
    pub fn close(&self) {
        self.socket.set_onmessage(None);
        self.socket.set_onerror(None);
        let _ = self.socket.close();
    }
}

impl Drop for RealtimeConnection {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupons() -> Vec<Coupon> {
        vec![Coupon {
            id: "c1".to_string(),
            code: "SUMMER10".to_string(),
            name: "Summer sale".to_string(),
            description: String::new(),
            discount_type: "percentage".to_string(),
            discount_value: 10.0,
            status: CouponStatus::Active,
            usage_count: 4,
            expiry_date: "2027-01-01".to_string(),
            assigned_to_email: None,
        }]
    }

    #[test]
    fn claimed_event_decodes_camel_case_payload() {
        let event: RealtimeEvent = serde_json::from_str(
            r#"{"type":"coupon_claimed","couponId":"c1","newUsageCount":5,"couponCode":"SUMMER10"}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            RealtimeEvent::CouponClaimed {
                coupon_id: "c1".to_string(),
                new_usage_count: 5,
                coupon_code: "SUMMER10".to_string(),
            }
        );
    }

    #[test]
    fn unknown_discriminant_fails_to_decode() {
        let result = serde_json::from_str::<RealtimeEvent>(r#"{"type":"server_rebooted"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn usage_update_mutates_matching_row() {
        let mut rows = coupons();
        assert!(apply_usage_update(&mut rows, "c1", 5));
        assert_eq!(rows[0].usage_count, 5);
    }

    #[test]
    fn usage_update_for_unknown_id_is_a_noop() {
        let mut rows = coupons();
        assert!(!apply_usage_update(&mut rows, "ghost", 99));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].usage_count, 4);
    }

    #[test]
    fn expiry_sets_status() {
        let mut rows = coupons();
        assert!(apply_expiry(&mut rows, "c1"));
        assert_eq!(rows[0].status, CouponStatus::Expired);
        assert!(!apply_expiry(&mut rows, "ghost"));
    }
}
