// UI and formatting module

pub mod dashboard;
pub mod formatters;
pub mod notifications;

// Re-export commonly used items for cleaner imports
pub use formatters::{
    format_flow, format_percent, format_ph, format_pressure, format_salinity, format_turbidity,
};
pub use notifications::{Notification, NotificationFeed, NotificationLevel};
