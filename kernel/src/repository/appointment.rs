use crate::model::{
    appointment::{event::CreateAppointment, Appointment, UserAppointment},
    id::AppointmentId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    // The (doctor, date, slot) uniqueness constraint is the authoritative
    // conflict signal.
    async fn create(&self, event: CreateAppointment) -> AppResult<AppointmentId>;
    // System-wide listing, ordered by date then slot.
    async fn find_all(&self) -> AppResult<Vec<Appointment>>;
    // Listing for one user, same ordering, narrower projection.
    async fn find_by_username(&self, username: &str) -> AppResult<Vec<UserAppointment>>;
}
