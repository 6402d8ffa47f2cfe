//! Coupon Tracker Frontend
//!
//! Browser-side interaction layer for the coupon admin: a filter/sort
//! engine over a live table, optimistic admin actions, toast notifications
//! and a WebSocket listener for realtime updates.

pub mod actions;
pub mod api;
pub mod app;
pub mod components;
pub mod context;
pub mod format;
pub mod models;
pub mod notifications;
pub mod realtime;
pub mod store;
pub mod table;
pub mod timing;
pub mod validate;
