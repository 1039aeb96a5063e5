use crate::model::appointment::{
    AppointmentListQuery, AppointmentResponse, CreateAppointmentRequest, UserAppointmentResponse,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use garde::Validate;
use kernel::model::appointment::event::CreateAppointment;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn book_appointment(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateAppointmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate(&())?;
    let event = CreateAppointment::try_from(req)?;

    registry.appointment_repository().create(event).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": "Appointment booked" })),
    ))
}

pub async fn show_appointment_list(
    Query(query): Query<AppointmentListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Response> {
    // An empty username parameter means the same as no parameter.
    match query.username.filter(|name| !name.is_empty()) {
        Some(username) => registry
            .appointment_repository()
            .find_by_username(&username)
            .await
            .map(|rows| {
                let items: Vec<UserAppointmentResponse> =
                    rows.into_iter().map(UserAppointmentResponse::from).collect();
                Json(items).into_response()
            }),
        None => registry.appointment_repository().find_all().await.map(|rows| {
            let items: Vec<AppointmentResponse> =
                rows.into_iter().map(AppointmentResponse::from).collect();
            Json(items).into_response()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use kernel::model::{
        appointment::{Appointment, UserAppointment},
        id::{AppointmentId, UserId},
        role::Role,
        user::{event::CreateUser, User},
    };
    use kernel::repository::{
        appointment::AppointmentRepository, auth::AuthRepository, health::HealthCheckRepository,
        user::UserRepository,
    };
    use shared::error::AppResult;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryAppointmentRepository {
        appointments: Mutex<Vec<Appointment>>,
    }

    #[async_trait]
    impl AppointmentRepository for InMemoryAppointmentRepository {
        async fn create(&self, event: CreateAppointment) -> AppResult<AppointmentId> {
            let mut appointments = self.appointments.lock().unwrap();
            if appointments
                .iter()
                .any(|a| a.doctor == event.doctor && a.date == event.date && a.slot == event.slot)
            {
                return Err(AppError::Conflict("Slot already booked".into()));
            }
            let appointment_id = AppointmentId::new();
            appointments.push(Appointment {
                appointment_id,
                patient_name: event.patient_name,
                doctor: event.doctor,
                date: event.date,
                slot: event.slot,
                username: event.username,
            });
            Ok(appointment_id)
        }

        async fn find_all(&self) -> AppResult<Vec<Appointment>> {
            let mut rows: Vec<Appointment> =
                self.appointments.lock().unwrap().iter().cloned().collect();
            rows.sort_by(|a, b| (a.date, &a.slot).cmp(&(b.date, &b.slot)));
            Ok(rows)
        }

        async fn find_by_username(&self, username: &str) -> AppResult<Vec<UserAppointment>> {
            let mut rows: Vec<UserAppointment> = self
                .appointments
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.username == username)
                .map(|a| UserAppointment {
                    doctor: a.doctor.clone(),
                    date: a.date,
                    slot: a.slot.clone(),
                })
                .collect();
            rows.sort_by(|a, b| (a.date, &a.slot).cmp(&(b.date, &b.slot)));
            Ok(rows)
        }
    }

    struct DenyAllAuth;

    #[async_trait]
    impl AuthRepository for DenyAllAuth {
        async fn verify_user(
            &self,
            _username: &str,
            _password: &str,
            _role: Role,
        ) -> AppResult<User> {
            Err(AppError::UnauthenticatedError)
        }
    }

    struct NoUsers;

    #[async_trait]
    impl UserRepository for NoUsers {
        async fn create(&self, _event: CreateUser) -> AppResult<UserId> {
            unimplemented!()
        }
    }

    struct AlwaysHealthy;

    #[async_trait]
    impl HealthCheckRepository for AlwaysHealthy {
        async fn check_db(&self) -> bool {
            true
        }
    }

    fn test_registry() -> AppRegistry {
        AppRegistry::from_parts(
            Arc::new(InMemoryAppointmentRepository::default()),
            Arc::new(DenyAllAuth),
            Arc::new(AlwaysHealthy),
            Arc::new(NoUsers),
        )
    }

    fn request(patient: &str, doctor: &str, date: &str, slot: &str, username: &str) -> CreateAppointmentRequest {
        CreateAppointmentRequest {
            patient: patient.into(),
            doctor: doctor.into(),
            date: date.into(),
            slot: slot.into(),
            username: username.into(),
        }
    }

    async fn body_json(res: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn booking_a_taken_slot_is_rejected() {
        let registry = test_registry();

        let res = book_appointment(
            State(registry.clone()),
            Json(request("John Smith", "Dr. A", "2024-01-01", "10:00", "alice")),
        )
        .await
        .into_response();
        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(body_json(res).await["message"], "Appointment booked");

        // Same slot, different patient and booking user.
        let res = book_appointment(
            State(registry),
            Json(request("Jane Roe", "Dr. A", "2024-01-01", "10:00", "bob")),
        )
        .await
        .into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(res).await["message"], "Slot already booked");
    }

    #[tokio::test]
    async fn booking_validates_before_any_query() {
        let registry = test_registry();

        let req: CreateAppointmentRequest = serde_json::from_value(serde_json::json!({
            "patient": "John Smith", "doctor": "Dr. A", "date": "2024-01-01"
        }))
        .unwrap();
        let res = book_appointment(State(registry.clone()), Json(req))
            .await
            .into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = book_appointment(
            State(registry),
            Json(request("John Smith", "Dr. A", "January 1st", "10:00", "alice")),
        )
        .await
        .into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn listing_projects_by_mode() {
        let registry = test_registry();

        for (patient, doctor, date, slot, username) in [
            ("John Smith", "Dr. B", "2024-01-02", "09:00", "alice"),
            ("Jane Roe", "Dr. A", "2024-01-01", "11:00", "bob"),
            ("John Smith", "Dr. A", "2024-01-01", "09:30", "alice"),
        ] {
            let res = book_appointment(
                State(registry.clone()),
                Json(request(patient, doctor, date, slot, username)),
            )
            .await
            .into_response();
            assert_eq!(res.status(), StatusCode::CREATED);
        }

        // System-wide mode carries the patient name.
        let res = show_appointment_list(
            Query(AppointmentListQuery { username: None }),
            State(registry.clone()),
        )
        .await
        .into_response();
        assert_eq!(res.status(), StatusCode::OK);
        let value = body_json(res).await;
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["patient"], "John Smith");
        assert_eq!(items[0]["date"], "2024-01-01");
        assert_eq!(items[0]["slot"], "09:30");

        // Per-user mode narrows both the rows and the projection.
        let res = show_appointment_list(
            Query(AppointmentListQuery {
                username: Some("alice".into()),
            }),
            State(registry.clone()),
        )
        .await
        .into_response();
        let value = body_json(res).await;
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].get("patient").is_none());
        assert_eq!(items[0]["doctor"], "Dr. A");
        assert_eq!(items[1]["doctor"], "Dr. B");

        // An empty username parameter behaves like no parameter.
        let res = show_appointment_list(
            Query(AppointmentListQuery {
                username: Some(String::new()),
            }),
            State(registry),
        )
        .await
        .into_response();
        let value = body_json(res).await;
        assert_eq!(value.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn empty_listing_is_an_empty_array() {
        let registry = test_registry();

        let res = show_appointment_list(
            Query(AppointmentListQuery { username: None }),
            State(registry.clone()),
        )
        .await
        .into_response();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, serde_json::json!([]));

        let res = show_appointment_list(
            Query(AppointmentListQuery {
                username: Some("alice".into()),
            }),
            State(registry),
        )
        .await
        .into_response();
        assert_eq!(body_json(res).await, serde_json::json!([]));
    }
}
