//! Frontend Models
//!
//! Data structures matching the backend wire format. Coupon records use the
//! server's snake_case field names; realtime payloads and bulk-action bodies
//! use the camelCase names the push channel speaks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a coupon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponStatus {
    Active,
    Inactive,
    Expired,
}

impl CouponStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CouponStatus::Active => "active",
            CouponStatus::Inactive => "inactive",
            CouponStatus::Expired => "expired",
        }
    }

    /// The status a toggle action moves to. Expired coupons reactivate.
    pub fn toggled(&self) -> CouponStatus {
        match self {
            CouponStatus::Active => CouponStatus::Inactive,
            CouponStatus::Inactive | CouponStatus::Expired => CouponStatus::Active,
        }
    }
}

impl fmt::Display for CouponStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coupon record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub discount_type: String,
    pub discount_value: f64,
    pub status: CouponStatus,
    #[serde(default)]
    pub usage_count: u32,
    pub expiry_date: String,
    #[serde(default)]
    pub assigned_to_email: Option<String>,
}

impl Coupon {
    /// Lowercased concatenation of every rendered cell, the haystack for
    /// the text filter. Searching "10" finds discount values and usage
    /// counts, not just codes.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {} {} {} {} {}",
            self.code,
            self.name,
            self.description,
            self.discount_type,
            self.discount_value,
            self.status,
            self.usage_count,
            self.expiry_date
        )
        .to_lowercase()
    }
}

/// Body for `POST /api/coupons`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCoupon {
    pub code: String,
    pub name: String,
    pub description: String,
    pub discount_type: String,
    pub discount_value: f64,
    pub expiry_date: String,
    pub assigned_to_email: Option<String>,
}

/// Aggregate dashboard counters from `GET /api/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_coupons: i64,
    pub active_coupons: i64,
    pub total_claims: i64,
    pub total_savings: f64,
}

/// One entry of `GET /api/recent-activity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub timestamp: String,
}
