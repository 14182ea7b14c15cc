//! Derived queries over formatted appointments.
//!
//! All queries are pure functions over an already-formatted sequence.
//! Every time-relative query takes the current instant as an explicit
//! parameter so callers (and tests) control the clock.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::core::domain::{AppointmentStatus, FormattedAppointment};
use crate::time::is_same_day;

/// Named status partitions of a formatted appointment list.
///
/// Records with an [`AppointmentStatus::Other`] status belong to no bucket;
/// they render with the default styling but are not counted here.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBuckets {
    pub scheduled: Vec<FormattedAppointment>,
    pub completed: Vec<FormattedAppointment>,
    pub cancelled: Vec<FormattedAppointment>,
    pub requested: Vec<FormattedAppointment>,
    pub no_show: Vec<FormattedAppointment>,
}

/// Partition appointments into the five named status buckets.
pub fn appointments_by_status(appointments: &[FormattedAppointment]) -> StatusBuckets {
    let mut buckets = StatusBuckets::default();

    for appointment in appointments {
        match appointment.status {
            AppointmentStatus::Scheduled => buckets.scheduled.push(appointment.clone()),
            AppointmentStatus::Completed => buckets.completed.push(appointment.clone()),
            AppointmentStatus::Cancelled => buckets.cancelled.push(appointment.clone()),
            AppointmentStatus::Requested => buckets.requested.push(appointment.clone()),
            AppointmentStatus::NoShow => buckets.no_show.push(appointment.clone()),
            AppointmentStatus::Other(_) => {}
        }
    }

    buckets
}

/// Appointments strictly in the future with a `scheduled` or `requested`
/// status.
pub fn upcoming_appointments(
    appointments: &[FormattedAppointment],
    now: DateTime<Utc>,
) -> Vec<FormattedAppointment> {
    appointments
        .iter()
        .filter(|a| {
            a.date > now
                && matches!(
                    a.status,
                    AppointmentStatus::Scheduled | AppointmentStatus::Requested
                )
        })
        .cloned()
        .collect()
}

/// Appointments falling on the same calendar day as `now`, any status.
pub fn todays_appointments(
    appointments: &[FormattedAppointment],
    now: DateTime<Utc>,
) -> Vec<FormattedAppointment> {
    appointments
        .iter()
        .filter(|a| is_same_day(a.date, now))
        .cloned()
        .collect()
}

/// The soonest upcoming appointment, or `None` when nothing is upcoming.
pub fn next_appointment(
    appointments: &[FormattedAppointment],
    now: DateTime<Utc>,
) -> Option<FormattedAppointment> {
    upcoming_appointments(appointments, now)
        .into_iter()
        .min_by_key(|a| a.date)
}

/// Whether the patient may still modify this appointment.
///
/// Only `scheduled` appointments more than 24 hours away qualify; the
/// exactly-24-hour boundary is exclusive.
pub fn can_modify_appointment(appointment: &FormattedAppointment, now: DateTime<Utc>) -> bool {
    appointment.status == AppointmentStatus::Scheduled
        && appointment.date - now > Duration::hours(24)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::{AppointmentId, RawAppointment};
    use crate::services::calendar::format_appointment;
    use chrono::TimeZone;

    fn entry(id: i64, start: &str, status: &str) -> FormattedAppointment {
        let raw = RawAppointment {
            id: AppointmentId(id),
            start_date_time: start.to_string(),
            duration_minutes: 30,
            status: AppointmentStatus::from(status),
            services: vec![],
            doctor_name: None,
            doctor_specialization: None,
            notes: None,
            location: None,
            fee: None,
            billing_type: None,
        };
        format_appointment(&raw).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_buckets_partition_by_status() {
        let appointments = vec![
            entry(1, "2025-08-20T09:00:00", "scheduled"),
            entry(2, "2025-08-20T10:00:00", "completed"),
            entry(3, "2025-08-20T11:00:00", "cancelled"),
            entry(4, "2025-08-20T12:00:00", "requested"),
            entry(5, "2025-08-20T13:00:00", "no-show"),
            entry(6, "2025-08-20T14:00:00", "walk-in"),
        ];

        let buckets = appointments_by_status(&appointments);
        assert_eq!(buckets.scheduled.len(), 1);
        assert_eq!(buckets.completed.len(), 1);
        assert_eq!(buckets.cancelled.len(), 1);
        assert_eq!(buckets.requested.len(), 1);
        assert_eq!(buckets.no_show.len(), 1);
        // The unknown status lands in no bucket
        let bucketed = buckets.scheduled.len()
            + buckets.completed.len()
            + buckets.cancelled.len()
            + buckets.requested.len()
            + buckets.no_show.len();
        assert_eq!(bucketed, 5);
    }

    #[test]
    fn test_upcoming_requires_future_and_open_status() {
        let appointments = vec![
            entry(1, "2025-08-20T09:00:00", "scheduled"), // past
            entry(2, "2025-08-20T15:00:00", "scheduled"),
            entry(3, "2025-08-21T09:00:00", "requested"),
            entry(4, "2025-08-21T10:00:00", "completed"), // wrong status
        ];

        let upcoming = upcoming_appointments(&appointments, now());
        let ids: Vec<i64> = upcoming.iter().map(|a| a.id.value()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_todays_ignores_status() {
        let appointments = vec![
            entry(1, "2025-08-20T08:00:00", "completed"),
            entry(2, "2025-08-20T16:00:00", "cancelled"),
            entry(3, "2025-08-21T09:00:00", "scheduled"),
        ];

        let today = todays_appointments(&appointments, now());
        assert_eq!(today.len(), 2);
    }

    #[test]
    fn test_next_appointment_picks_soonest() {
        let appointments = vec![
            entry(1, "2025-08-20T15:00:00", "scheduled"), // T+3h
            entry(2, "2025-08-20T13:00:00", "requested"), // T+1h
            entry(3, "2025-08-20T14:00:00", "scheduled"), // T+2h
        ];

        let next = next_appointment(&appointments, now()).unwrap();
        assert_eq!(next.id, AppointmentId(2));
    }

    #[test]
    fn test_next_appointment_none_when_empty() {
        assert!(next_appointment(&[], now()).is_none());

        let only_past = vec![entry(1, "2025-08-19T09:00:00", "scheduled")];
        assert!(next_appointment(&only_past, now()).is_none());
    }

    #[test]
    fn test_modify_boundary_is_exclusive() {
        // Exactly 24h out: not modifiable
        let at_boundary = entry(1, "2025-08-21T12:00:00", "scheduled");
        assert!(!can_modify_appointment(&at_boundary, now()));

        // One second past the boundary: modifiable
        let past_boundary = entry(2, "2025-08-21T12:00:01", "scheduled");
        assert!(can_modify_appointment(&past_boundary, now()));

        // One second short: not modifiable
        let short = entry(3, "2025-08-21T11:59:59", "scheduled");
        assert!(!can_modify_appointment(&short, now()));
    }

    #[test]
    fn test_modify_requires_scheduled_status() {
        let completed = entry(1, "2025-09-20T12:00:00", "completed");
        assert!(!can_modify_appointment(&completed, now()));

        let requested = entry(2, "2025-09-20T12:00:00", "requested");
        assert!(!can_modify_appointment(&requested, now()));
    }
}
