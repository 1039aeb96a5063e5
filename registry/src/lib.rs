use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::appointment::AppointmentRepositoryImpl;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::repository::appointment::AppointmentRepository;
use kernel::repository::auth::AuthRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::user::UserRepository;

#[derive(Clone)]
pub struct AppRegistry {
    appointment_repository: Arc<dyn AppointmentRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let appointment_repository = Arc::new(AppointmentRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(pool.clone()));
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool));
        Self {
            appointment_repository,
            auth_repository,
            health_check_repository,
            user_repository,
        }
    }

    // Assemble from explicit implementations. Handlers only ever see the
    // traits, so any implementation of the contract can stand in here.
    pub fn from_parts(
        appointment_repository: Arc<dyn AppointmentRepository>,
        auth_repository: Arc<dyn AuthRepository>,
        health_check_repository: Arc<dyn HealthCheckRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            appointment_repository,
            auth_repository,
            health_check_repository,
            user_repository,
        }
    }

    pub fn appointment_repository(&self) -> Arc<dyn AppointmentRepository> {
        self.appointment_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }
}
