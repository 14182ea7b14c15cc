use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::Path;

use crate::core::domain::RawAppointment;
use crate::core::error::CalendarError;
use crate::preprocessing::validator::{AppointmentValidator, ValidationResult};
use crate::services::calendar::{
    compute_calendar_view_data, format_for_calendar, format_for_calendar_lossy, CalendarViewData,
};

/// How the pipeline treats records whose start time cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailurePolicy {
    /// Stop the whole batch on the first unparseable record.
    Halt,
    /// Drop unparseable records and report them in the result.
    Skip,
}

/// Configuration for the calendar preparation pipeline
#[derive(Debug, Clone, Copy)]
pub struct PrepareConfig {
    pub validate: bool,
    pub on_parse_failure: ParseFailurePolicy,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            validate: true,
            on_parse_failure: ParseFailurePolicy::Halt,
        }
    }
}

/// Result of preparing a feed for the calendar view
#[derive(Debug)]
pub struct PreparedCalendar {
    pub view: CalendarViewData,
    pub validation: ValidationResult,
    /// Per-record failures when running under [`ParseFailurePolicy::Skip`].
    pub dropped: Vec<CalendarError>,
    pub total_appointments: usize,
}

/// Main calendar preparation pipeline
pub struct CalendarPipeline {
    config: PrepareConfig,
}

impl CalendarPipeline {
    /// Create a new pipeline with default configuration
    pub fn new() -> Self {
        Self {
            config: PrepareConfig::default(),
        }
    }

    /// Create a pipeline with custom configuration
    pub fn with_config(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Process an appointment feed file into calendar view data
    ///
    /// # Arguments
    /// * `feed_path` - Path to the JSON appointment feed
    ///
    /// # Returns
    /// PreparedCalendar with view data and validation info
    pub fn process(&self, feed_path: &Path) -> Result<PreparedCalendar> {
        let appointments = crate::parsing::json_parser::parse_appointment_feed(feed_path)
            .context("Failed to load appointment feed")?;

        self.build(appointments)
    }

    /// Process from a JSON string (useful for testing or API usage)
    pub fn process_json_str(&self, json_str: &str) -> Result<PreparedCalendar> {
        let appointments = crate::parsing::json_parser::parse_appointment_feed_str(json_str)
            .context("Failed to parse appointment feed")?;

        self.build(appointments)
    }

    /// Build view data from already-loaded raw appointments
    pub fn build(&self, appointments: Vec<RawAppointment>) -> Result<PreparedCalendar> {
        let total_appointments = appointments.len();
        debug!("preparing calendar view for {} appointments", total_appointments);

        let validation = if self.config.validate {
            AppointmentValidator::validate_appointments(&appointments)
        } else {
            ValidationResult::new()
        };

        let (entries, dropped) = match self.config.on_parse_failure {
            ParseFailurePolicy::Halt => {
                let entries = format_for_calendar(&appointments)
                    .context("Failed to format appointments for the calendar")?;
                (entries, Vec::new())
            }
            ParseFailurePolicy::Skip => format_for_calendar_lossy(&appointments),
        };

        if !dropped.is_empty() {
            warn!(
                "calendar view dropped {} of {} appointments",
                dropped.len(),
                total_appointments
            );
        }

        Ok(PreparedCalendar {
            view: compute_calendar_view_data(entries),
            validation,
            dropped,
            total_appointments,
        })
    }
}

impl Default for CalendarPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to prepare a calendar view from a feed file
pub fn prepare_calendar(feed_path: &Path, validate: bool) -> Result<PreparedCalendar> {
    let config = PrepareConfig {
        validate,
        on_parse_failure: ParseFailurePolicy::Halt,
    };

    let pipeline = CalendarPipeline::with_config(config);
    pipeline.process(feed_path)
}
