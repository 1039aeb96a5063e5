use chrono::NaiveDate;
use garde::Validate;
use kernel::model::appointment::{event::CreateAppointment, Appointment, UserAppointment};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    #[serde(default)]
    #[garde(length(min = 1))]
    pub patient: String,
    #[serde(default)]
    #[garde(length(min = 1))]
    pub doctor: String,
    // A string on the wire; parsed into a calendar date in TryFrom.
    #[serde(default)]
    #[garde(length(min = 1))]
    pub date: String,
    #[serde(default)]
    #[garde(length(min = 1))]
    pub slot: String,
    #[serde(default)]
    #[garde(length(min = 1))]
    pub username: String,
}

impl TryFrom<CreateAppointmentRequest> for CreateAppointment {
    type Error = AppError;

    fn try_from(value: CreateAppointmentRequest) -> Result<Self, Self::Error> {
        let CreateAppointmentRequest {
            patient,
            doctor,
            date,
            slot,
            username,
        } = value;
        let date = date.parse::<NaiveDate>().map_err(|e| {
            AppError::ConversionEntityError(format!("date must be formatted as YYYY-MM-DD: {e}"))
        })?;
        Ok(CreateAppointment::new(patient, doctor, date, slot, username))
    }
}

#[derive(Debug, Deserialize)]
pub struct AppointmentListQuery {
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub patient: String,
    pub doctor: String,
    pub date: NaiveDate,
    pub slot: String,
}

impl From<Appointment> for AppointmentResponse {
    fn from(value: Appointment) -> Self {
        let Appointment {
            appointment_id: _,
            patient_name,
            doctor,
            date,
            slot,
            username: _,
        } = value;
        Self {
            patient: patient_name,
            doctor,
            date,
            slot,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAppointmentResponse {
    pub doctor: String,
    pub date: NaiveDate,
    pub slot: String,
}

impl From<UserAppointment> for UserAppointmentResponse {
    fn from(value: UserAppointment) -> Self {
        let UserAppointment { doctor, date, slot } = value;
        Self { doctor, date, slot }
    }
}
