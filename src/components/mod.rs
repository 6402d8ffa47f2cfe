//! UI Components
//!
//! Leptos components rendering the store.

mod activity_feed;
mod bulk_toolbar;
mod coupon_form;
mod coupon_table;
mod filter_bar;
mod notification_area;
mod search_bar;
mod stats_grid;

pub use activity_feed::ActivityFeed;
pub use bulk_toolbar::BulkToolbar;
pub use coupon_form::CouponForm;
pub use coupon_table::CouponTable;
pub use filter_bar::FilterBar;
pub use notification_area::NotificationArea;
pub use search_bar::SearchBar;
pub use stats_grid::StatsGrid;
