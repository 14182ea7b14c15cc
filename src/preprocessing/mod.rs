pub mod pipeline;
pub mod validator;

pub use pipeline::{
    prepare_calendar, CalendarPipeline, ParseFailurePolicy, PrepareConfig, PreparedCalendar,
};
pub use validator::{AppointmentValidator, ValidationResult, ValidationStats};
