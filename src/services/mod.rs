//! Service layer for calendar view-model derivation.
//!
//! This module contains the services that sit between the raw appointment
//! feed and the rendering layer: formatting, derived queries, aggregate
//! statistics, and week-grid geometry.

pub mod calendar;
pub mod layout;
pub mod queries;
pub mod stats;

pub use calendar::{
    compute_calendar_view_data, format_appointment, format_for_calendar,
    format_for_calendar_lossy, CalendarViewData,
};
pub use layout::{BlockPosition, GridGeometry};
pub use queries::{
    appointments_by_status, can_modify_appointment, next_appointment, todays_appointments,
    upcoming_appointments, StatusBuckets,
};
pub use stats::{compute_appointment_stats, AppointmentStats};
