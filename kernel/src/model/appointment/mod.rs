use crate::model::id::AppointmentId;
use chrono::NaiveDate;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub appointment_id: AppointmentId,
    pub patient_name: String,
    pub doctor: String,
    pub date: NaiveDate,
    pub slot: String,
    pub username: String,
}

// Projection used when the listing is scoped to a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAppointment {
    pub doctor: String,
    pub date: NaiveDate,
    pub slot: String,
}
