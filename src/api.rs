//! API Client
//!
//! Fetch wrappers over the backend JSON endpoints. Every call resolves or
//! rejects exactly once; no timeout or cancellation is applied.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::models::{ActivityEntry, Coupon, CouponStatus, NewCoupon, Stats};

fn js_err(err: JsValue) -> String {
    format!("{err:?}")
}

async fn send(method: &str, url: &str, body: Option<String>) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    let headers = Headers::new().map_err(js_err)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_err)?;
    opts.set_headers(&headers);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = response.dyn_into().map_err(js_err)?;
    if !response.ok() {
        return Err(format!("HTTP error! status: {}", response.status()));
    }
    Ok(response)
}

async fn fetch_json<T: DeserializeOwned>(
    method: &str,
    url: &str,
    body: Option<String>,
) -> Result<T, String> {
    let response = send(method, url, body).await?;
    let value = JsFuture::from(response.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

fn json_body<T: Serialize>(payload: &T) -> Result<Option<String>, String> {
    serde_json::to_string(payload)
        .map(Some)
        .map_err(|e| e.to_string())
}

// ========================
// Request Body Structs
// ========================

#[derive(Serialize)]
struct StatusArgs {
    status: CouponStatus,
}

#[derive(Serialize)]
struct BulkDeleteArgs<'a> {
    #[serde(rename = "couponIds")]
    coupon_ids: &'a [String],
}

#[derive(Serialize)]
struct BulkStatusArgs<'a> {
    #[serde(rename = "couponIds")]
    coupon_ids: &'a [String],
    status: CouponStatus,
}

// ========================
// Endpoints
// ========================

pub async fn list_coupons() -> Result<Vec<Coupon>, String> {
    fetch_json("GET", "/api/coupons", None).await
}

pub async fn get_stats() -> Result<Stats, String> {
    fetch_json("GET", "/api/stats", None).await
}

pub async fn get_recent_activity() -> Result<Vec<ActivityEntry>, String> {
    fetch_json("GET", "/api/recent-activity", None).await
}

pub async fn create_coupon(coupon: &NewCoupon) -> Result<Coupon, String> {
    fetch_json("POST", "/api/coupons", json_body(coupon)?).await
}

pub async fn delete_coupon(coupon_id: &str) -> Result<(), String> {
    send("DELETE", &format!("/api/coupons/{coupon_id}"), None)
        .await
        .map(|_| ())
}

pub async fn update_coupon_status(coupon_id: &str, status: CouponStatus) -> Result<(), String> {
    let body = json_body(&StatusArgs { status })?;
    send("PATCH", &format!("/api/coupons/{coupon_id}/status"), body)
        .await
        .map(|_| ())
}

pub async fn bulk_delete(coupon_ids: &[String]) -> Result<(), String> {
    let body = json_body(&BulkDeleteArgs { coupon_ids })?;
    send("POST", "/api/coupons/bulk-delete", body)
        .await
        .map(|_| ())
}

pub async fn bulk_update_status(coupon_ids: &[String], status: CouponStatus) -> Result<(), String> {
    let body = json_body(&BulkStatusArgs { coupon_ids, status })?;
    send("POST", "/api/coupons/bulk-status", body)
        .await
        .map(|_| ())
}
