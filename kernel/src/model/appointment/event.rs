use chrono::NaiveDate;
use derive_new::new;

#[derive(new, Debug)]
pub struct CreateAppointment {
    pub patient_name: String,
    pub doctor: String,
    pub date: NaiveDate,
    pub slot: String,
    pub username: String,
}
