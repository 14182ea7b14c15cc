use chrono::{DateTime, Utc};

use crate::core::domain::{AppointmentStatus, FormattedAppointment};
use crate::time::is_same_day;

/// Filter appointments by a single status
pub fn filter_by_status(
    appointments: &[FormattedAppointment],
    status: &AppointmentStatus,
) -> Vec<FormattedAppointment> {
    appointments
        .iter()
        .filter(|a| &a.status == status)
        .cloned()
        .collect()
}

/// Filter appointments by doctor name (case-insensitive)
pub fn filter_by_doctor(
    appointments: &[FormattedAppointment],
    doctor_name: &str,
) -> Vec<FormattedAppointment> {
    appointments
        .iter()
        .filter(|a| {
            a.doctor_name
                .as_deref()
                .map(|name| name.eq_ignore_ascii_case(doctor_name))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Filter appointments to a single calendar day
pub fn filter_by_day(
    appointments: &[FormattedAppointment],
    day: DateTime<Utc>,
) -> Vec<FormattedAppointment> {
    appointments
        .iter()
        .filter(|a| is_same_day(a.date, day))
        .cloned()
        .collect()
}

/// Composable filter over formatted appointments.
///
/// Every field is optional; unset fields match everything. Used by the
/// dashboard's list views where several controls narrow one dataset.
#[derive(Debug, Clone, Default)]
pub struct AppointmentFilter {
    pub statuses: Option<Vec<AppointmentStatus>>,
    pub doctor_name: Option<String>,
    pub service: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// Filter appointments by multiple conditions
pub fn filter_appointments(
    appointments: &[FormattedAppointment],
    filter: &AppointmentFilter,
) -> Vec<FormattedAppointment> {
    let mut filtered: Vec<FormattedAppointment> = appointments.to_vec();

    if let Some(statuses) = &filter.statuses {
        filtered.retain(|a| statuses.contains(&a.status));
    }

    if let Some(doctor_name) = &filter.doctor_name {
        filtered.retain(|a| {
            a.doctor_name
                .as_deref()
                .map(|name| name.eq_ignore_ascii_case(doctor_name))
                .unwrap_or(false)
        });
    }

    if let Some(service) = &filter.service {
        filtered.retain(|a| a.services.iter().any(|s| s.eq_ignore_ascii_case(service)));
    }

    if let Some(from) = filter.from {
        filtered.retain(|a| a.date >= from);
    }

    if let Some(to) = filter.to {
        filtered.retain(|a| a.date <= to);
    }

    filtered
}

/// Sort appointments by start instant, ids breaking ties.
///
/// Stable with respect to the formatted order, so records sharing a start
/// instant and id keep their relative positions.
pub fn sort_by_start(appointments: &mut [FormattedAppointment]) {
    appointments.sort_by_key(|a| (a.date, a.id));
}
