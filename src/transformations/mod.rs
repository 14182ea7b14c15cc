//! Filtering and ordering utilities for formatted appointments.
//!
//! These back the dashboard's list views, where status toggles, doctor
//! pickers, and date ranges narrow one formatted dataset.
//!
//! # Modules
//!
//! - [`filtering`]: Filter and sort appointment lists by various criteria

pub mod filtering;

pub use filtering::{
    filter_appointments, filter_by_day, filter_by_doctor, filter_by_status, sort_by_start,
    AppointmentFilter,
};
