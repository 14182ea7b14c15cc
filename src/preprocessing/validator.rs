//! Appointment feed validation with detailed error and warning reporting.
//!
//! This module validates raw appointment data for completeness and
//! correctness before formatting. It checks for unparseable start times,
//! zero durations, duplicate ids, and other data quality issues.

use serde::{Deserialize, Serialize};

use crate::core::domain::{AppointmentStatus, RawAppointment};
use crate::time::parse_start_instant;

/// Validation result with categorized issues and statistics.
///
/// Errors make `is_valid` false, while warnings are informational but
/// don't fail validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ValidationStats,
}

/// Summary statistics computed during validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationStats {
    pub total_appointments: usize,
    pub invalid_start_times: usize,
    pub zero_durations: usize,
    pub duplicate_ids: usize,
    pub unknown_statuses: usize,
    pub missing_doctor: usize,
    pub empty_services: usize,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: ValidationStats::default(),
        }
    }

    /// Adds a critical error and marks the result as invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Adds a non-critical warning without invalidating the result.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for raw appointment feed data.
///
/// # Examples
///
/// ```no_run
/// use clinic_rust::preprocessing::validator::AppointmentValidator;
/// use clinic_rust::core::domain::RawAppointment;
///
/// # fn example(appointments: &[RawAppointment]) {
/// let result = AppointmentValidator::validate_appointments(appointments);
/// if !result.is_valid {
///     eprintln!("Validation failed: {:?}", result.errors);
/// }
/// println!("Validated {} appointments", result.stats.total_appointments);
/// # }
/// ```
pub struct AppointmentValidator;

impl AppointmentValidator {
    /// Validates a collection of raw appointments.
    ///
    /// Errors: duplicate ids, unparseable start times, zero durations.
    /// Warnings: unknown statuses, missing doctor names, empty service
    /// lists.
    pub fn validate_appointments(appointments: &[RawAppointment]) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.stats.total_appointments = appointments.len();

        result.stats.duplicate_ids = Self::check_duplicates(appointments, &mut result);

        for appointment in appointments {
            Self::validate_appointment(appointment, &mut result);
        }

        result
    }

    fn validate_appointment(appointment: &RawAppointment, result: &mut ValidationResult) {
        if parse_start_instant(&appointment.start_date_time).is_err() {
            result.stats.invalid_start_times += 1;
            if result.stats.invalid_start_times <= 5 {
                result.add_error(format!(
                    "Appointment {} has unparseable start time: {:?}",
                    appointment.id, appointment.start_date_time
                ));
            }
        }

        if appointment.duration_minutes == 0 {
            result.stats.zero_durations += 1;
            if result.stats.zero_durations <= 5 {
                result.add_error(format!(
                    "Appointment {} has zero duration",
                    appointment.id
                ));
            }
        }

        if let AppointmentStatus::Other(status) = &appointment.status {
            result.stats.unknown_statuses += 1;
            result.add_warning(format!(
                "Appointment {} has unknown status: {:?}",
                appointment.id, status
            ));
        }

        match appointment.doctor_name.as_deref() {
            None | Some("") => {
                result.stats.missing_doctor += 1;
                result.add_warning(format!(
                    "Appointment {} has no doctor name",
                    appointment.id
                ));
            }
            Some(_) => {}
        }

        if appointment.services.is_empty() {
            result.stats.empty_services += 1;
        }
    }

    fn check_duplicates(appointments: &[RawAppointment], result: &mut ValidationResult) -> usize {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        let mut duplicates = 0;

        for appointment in appointments {
            if !seen.insert(appointment.id) {
                duplicates += 1;
                if duplicates <= 5 {
                    result.add_error(format!("Duplicate appointment id: {}", appointment.id));
                }
            }
        }

        if duplicates > 5 {
            result.add_error(format!("Total duplicate ids: {} (showing first 5)", duplicates));
        }

        duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::AppointmentId;

    fn raw(id: i64, start: &str, minutes: u32, status: &str) -> RawAppointment {
        RawAppointment {
            id: AppointmentId(id),
            start_date_time: start.to_string(),
            duration_minutes: minutes,
            status: AppointmentStatus::from(status),
            services: vec!["Checkup".to_string()],
            doctor_name: Some("Rivera".to_string()),
            doctor_specialization: None,
            notes: None,
            location: None,
            fee: None,
            billing_type: None,
        }
    }

    #[test]
    fn test_validate_valid_appointments() {
        let appointments = vec![
            raw(1, "2025-08-20T09:00:00", 30, "scheduled"),
            raw(2, "2025-08-20T10:00:00", 45, "completed"),
        ];

        let result = AppointmentValidator::validate_appointments(&appointments);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.stats.total_appointments, 2);
        assert_eq!(result.stats.duplicate_ids, 0);
    }

    #[test]
    fn test_validate_empty_feed_is_valid() {
        let result = AppointmentValidator::validate_appointments(&[]);
        assert!(result.is_valid);
        assert_eq!(result.stats.total_appointments, 0);
    }

    #[test]
    fn test_invalid_start_time_is_an_error() {
        let appointments = vec![raw(1, "yesterday-ish", 30, "scheduled")];

        let result = AppointmentValidator::validate_appointments(&appointments);
        assert!(!result.is_valid);
        assert_eq!(result.stats.invalid_start_times, 1);
    }

    #[test]
    fn test_zero_duration_is_an_error() {
        let appointments = vec![raw(1, "2025-08-20T09:00:00", 0, "scheduled")];

        let result = AppointmentValidator::validate_appointments(&appointments);
        assert!(!result.is_valid);
        assert_eq!(result.stats.zero_durations, 1);
    }

    #[test]
    fn test_duplicate_ids_detected() {
        let appointments = vec![
            raw(1, "2025-08-20T09:00:00", 30, "scheduled"),
            raw(1, "2025-08-20T10:00:00", 30, "scheduled"),
        ];

        let result = AppointmentValidator::validate_appointments(&appointments);
        assert!(!result.is_valid);
        assert_eq!(result.stats.duplicate_ids, 1);
    }

    #[test]
    fn test_unknown_status_is_a_warning_only() {
        let appointments = vec![raw(1, "2025-08-20T09:00:00", 30, "telehealth")];

        let result = AppointmentValidator::validate_appointments(&appointments);
        assert!(result.is_valid);
        assert_eq!(result.stats.unknown_statuses, 1);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_missing_doctor_is_a_warning_only() {
        let mut appointment = raw(1, "2025-08-20T09:00:00", 30, "scheduled");
        appointment.doctor_name = None;

        let result = AppointmentValidator::validate_appointments(&[appointment]);
        assert!(result.is_valid);
        assert_eq!(result.stats.missing_doctor, 1);
    }

    #[test]
    fn test_error_reporting_capped_at_five() {
        let appointments: Vec<RawAppointment> = (0..8)
            .map(|i| raw(i, "garbage", 30, "scheduled"))
            .collect();

        let result = AppointmentValidator::validate_appointments(&appointments);
        assert_eq!(result.stats.invalid_start_times, 8);
        // Only the first five produce individual messages
        let start_time_errors = result
            .errors
            .iter()
            .filter(|e| e.contains("unparseable start time"))
            .count();
        assert_eq!(start_time_errors, 5);
    }
}
