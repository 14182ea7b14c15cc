//! Appointment calendar view-model engine for the clinic dashboard.
//!
//! Transforms raw appointment records from the practice data source into
//! display-ready, time-bucketed, styled entries for a week-grid calendar,
//! and derives the aggregate statistics and grid geometry the dashboard
//! renders around them. All operations are synchronous pure functions; any
//! helper that depends on "now" takes the current instant as an explicit
//! parameter.
//!
//! All timestamps use a single UTC-fixed policy, see [`time`].
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use clinic_rust::preprocessing::CalendarPipeline;
//! use clinic_rust::services::{compute_appointment_stats, next_appointment};
//!
//! let feed = r#"{
//!     "appointments": [
//!         {
//!             "id": 1,
//!             "startDateTime": "2025-08-20T09:00:00",
//!             "durationMinutes": 80,
//!             "status": "scheduled",
//!             "services": ["Annual Physical"],
//!             "doctorName": "Rivera"
//!         }
//!     ]
//! }"#;
//!
//! let prepared = CalendarPipeline::new().process_json_str(feed).unwrap();
//! assert_eq!(prepared.view.entries[0].time_display, "9:00 AM - 10:20 AM");
//!
//! let now = Utc.with_ymd_and_hms(2025, 8, 19, 12, 0, 0).unwrap();
//! let stats = compute_appointment_stats(&prepared.view.entries, now);
//! assert_eq!(stats.upcoming, 1);
//! assert!(next_appointment(&prepared.view.entries, now).is_some());
//! ```

pub mod config;
pub mod core;
pub mod parsing;
pub mod preprocessing;
pub mod services;
pub mod time;
pub mod transformations;

pub use config::CalendarConfig;
pub use core::domain::{
    AppointmentId, AppointmentStatus, FormattedAppointment, RawAppointment, StatusStyle,
};
pub use core::error::{CalendarError, CalendarResult};
