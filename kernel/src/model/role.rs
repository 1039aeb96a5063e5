use strum::{AsRefStr, EnumString};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Role {
    Admin,
    #[default]
    User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_round_trips_through_text() {
        assert_eq!(Role::User.as_ref(), "user");
        assert_eq!(Role::Admin.as_ref(), "admin");
        assert_eq!(Role::from_str("user").unwrap(), Role::User);
        assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
        assert!(Role::from_str("superuser").is_err());
    }
}
