use derive_new::new;

#[derive(new)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
}
