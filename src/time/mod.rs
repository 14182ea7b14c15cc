pub mod wall;

// Re-export the wall-clock helpers used throughout the services layer
pub use wall::{
    end_instant, format_12h, format_24h, is_same_day, parse_start_instant, time_display,
    wall_minutes,
};
