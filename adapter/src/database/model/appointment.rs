use chrono::NaiveDate;
use kernel::model::{
    appointment::{Appointment, UserAppointment},
    id::AppointmentId,
};

#[derive(sqlx::FromRow)]
pub struct AppointmentRow {
    pub appointment_id: AppointmentId,
    pub patient_name: String,
    pub doctor: String,
    pub date: NaiveDate,
    pub slot: String,
    pub username: String,
}

impl From<AppointmentRow> for Appointment {
    fn from(value: AppointmentRow) -> Self {
        let AppointmentRow {
            appointment_id,
            patient_name,
            doctor,
            date,
            slot,
            username,
        } = value;
        Appointment {
            appointment_id,
            patient_name,
            doctor,
            date,
            slot,
            username,
        }
    }
}

// Narrow projection used by the per-user listing query.
#[derive(sqlx::FromRow)]
pub struct UserAppointmentRow {
    pub doctor: String,
    pub date: NaiveDate,
    pub slot: String,
}

impl From<UserAppointmentRow> for UserAppointment {
    fn from(value: UserAppointmentRow) -> Self {
        let UserAppointmentRow { doctor, date, slot } = value;
        UserAppointment { doctor, date, slot }
    }
}
