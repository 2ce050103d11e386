pub mod dashboard;
pub mod status;
pub mod units;

pub use dashboard::{
    EXPIRY_WINDOW_DAYS, InventoryStats, expired, expiring_soon, inventory_stats, low_stock,
};
pub use status::{
    MaterialStatus, STATUS_EXEMPT_TYPE, derive_status, display_status, expiry_date, is_expired,
    is_status_exempt, low_stock_threshold,
};
pub use units::format_quantity;
