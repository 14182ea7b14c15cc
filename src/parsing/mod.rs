//! Parsers for appointment feed data.
//!
//! The practice data source delivers appointments as JSON, either wrapped
//! in an `appointments` object or as a bare array. Parsing tolerates ids
//! arriving as strings and unknown status values, and reports malformed
//! documents with the JSON path that failed.
//!
//! # Example
//!
//! ```no_run
//! use clinic_rust::parsing::json_parser::parse_appointment_feed;
//! use std::path::Path;
//!
//! let appointments = parse_appointment_feed(Path::new("appointments.json"))
//!     .expect("Failed to parse feed");
//! ```

pub mod json_parser;


pub use json_parser::{parse_appointment_feed, parse_appointment_feed_str};
