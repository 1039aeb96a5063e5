use crate::database::{
    model::appointment::{AppointmentRow, UserAppointmentRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    appointment::{event::CreateAppointment, Appointment, UserAppointment},
    id::AppointmentId,
};
use kernel::repository::appointment::AppointmentRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct AppointmentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AppointmentRepository for AppointmentRepositoryImpl {
    async fn create(&self, event: CreateAppointment) -> AppResult<AppointmentId> {
        let appointment_id = AppointmentId::new();

        // No prior availability check. The UNIQUE constraint on
        // (doctor, date, slot) decides the conflict, also when two
        // bookings race for the same slot.
        let res = sqlx::query(
            r#"
                INSERT INTO appointments
                (appointment_id, patient_name, doctor, date, slot, username)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(appointment_id)
        .bind(&event.patient_name)
        .bind(&event.doctor)
        .bind(event.date)
        .bind(&event.slot)
        .bind(&event.username)
        .execute(self.db.inner_ref())
        .await;

        match res {
            Ok(done) if done.rows_affected() < 1 => Err(AppError::NoRowsAffectedError(
                "No appointment record has been created".into(),
            )),
            Ok(_) => Ok(appointment_id),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AppError::Conflict("Slot already booked".into()))
            }
            Err(e) => Err(AppError::SpecificOperationError(e)),
        }
    }

    async fn find_all(&self) -> AppResult<Vec<Appointment>> {
        sqlx::query_as::<_, AppointmentRow>(
            r#"
                SELECT appointment_id, patient_name, doctor, date, slot, username
                FROM appointments
                ORDER BY date, slot
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Appointment::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Vec<UserAppointment>> {
        sqlx::query_as::<_, UserAppointmentRow>(
            r#"
                SELECT doctor, date, slot
                FROM appointments
                WHERE username = $1
                ORDER BY date, slot
            "#,
        )
        .bind(username)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(UserAppointment::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}
