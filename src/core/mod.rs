//! Core domain models for the appointment calendar.
//!
//! This module defines the fundamental data structures used throughout the
//! crate, representing raw appointment records, statuses, and formatted
//! calendar entries, along with the crate's error type.

pub mod domain;
pub mod error;

pub use domain::{
    AppointmentId, AppointmentStatus, FormattedAppointment, RawAppointment, StatusStyle,
};
pub use error::{CalendarError, CalendarResult};
