//! Validated registration input and tier-dependent defaults.

use crate::domain::foundation::{DomainError, ErrorCode};

use super::country::Country;
use super::gender::Gender;

/// Registration input after field validation and enumeration mapping.
///
/// Constructing a `Registration` performs every check that must happen
/// before any store access: required fields, field formats, and the
/// country enumeration.
#[derive(Debug, Clone)]
pub struct Registration {
    username: String,
    password: String,
    email: String,
    gender: Gender,
    country: Country,
}

impl Registration {
    pub fn new(
        username: &str,
        password: &str,
        email: &str,
        gender: &str,
        country: &str,
    ) -> Result<Self, DomainError> {
        if username.is_empty()
            || password.is_empty()
            || email.is_empty()
            || gender.is_empty()
            || country.is_empty()
        {
            return Err(DomainError::validation("All fields are required"));
        }

        if username.len() < 3 || username.len() > 20 {
            return Err(DomainError::validation(
                "Username must be between 3 and 20 characters",
            ));
        }

        if !looks_like_email(email) {
            return Err(DomainError::validation("Invalid email format"));
        }

        if password.len() < 6 {
            return Err(DomainError::validation(
                "Password must be at least 6 characters long",
            ));
        }

        let country = Country::from_name(country).ok_or_else(|| {
            DomainError::new(ErrorCode::InvalidCountry, "Invalid country selected")
        })?;

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
            gender: Gender::from_submission(gender),
            country,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn country(&self) -> Country {
        self.country
    }
}

/// `local@domain.tld`, no whitespace anywhere.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Account tier decided at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountTier {
    Standard,
    Admin,
}

/// Starting values written by the registration transaction.
///
/// Grade is mirrored into TotalGrade, SeasonGrade and CountryGrade; the
/// three authority columns all receive the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationDefaults {
    pub money: i64,
    pub cash: i64,
    pub authority: i32,
    pub grade: i32,
    pub game_points: i32,
}

impl RegistrationDefaults {
    pub fn for_tier(tier: AccountTier) -> Self {
        match tier {
            AccountTier::Standard => Self {
                money: 250_000,
                cash: 125_000,
                authority: 1,
                grade: 19,
                game_points: 1000,
            },
            AccountTier::Admin => Self {
                money: 900_000,
                cash: 900_000,
                authority: 100,
                grade: 20,
                game_points: 1000,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Result<Registration, DomainError> {
        Registration::new("alice", "secret1", "a@x.com", "Female", "USA")
    }

    #[test]
    fn valid_registration_passes() {
        let reg = valid().unwrap();
        assert_eq!(reg.username(), "alice");
        assert_eq!(reg.gender().code(), 1);
        assert_eq!(reg.country().code(), 207);
    }

    #[test]
    fn missing_fields_are_rejected() {
        let err = Registration::new("", "secret1", "a@x.com", "Female", "USA").unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        let err = Registration::new("alice", "secret1", "a@x.com", "", "USA").unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn short_username_is_rejected() {
        let err = Registration::new("al", "secret1", "a@x.com", "Male", "USA").unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(err.message().contains("between 3 and 20"));
    }

    #[test]
    fn long_username_is_rejected() {
        let name = "a".repeat(21);
        assert!(Registration::new(&name, "secret1", "a@x.com", "Male", "USA").is_err());
    }

    #[test]
    fn short_password_is_rejected() {
        let err = Registration::new("alice", "12345", "a@x.com", "Male", "USA").unwrap_err();
        assert!(err.message().contains("at least 6"));
    }

    #[test]
    fn bad_email_is_rejected() {
        for email in ["ax.com", "a@xcom", "a @x.com", "a@x@y.com", "@x.com", "a@.com"] {
            let result = Registration::new("alice", "secret1", email, "Male", "USA");
            assert!(result.is_err(), "accepted bad email {email:?}");
        }
    }

    #[test]
    fn unknown_country_is_rejected_with_its_own_code() {
        let err = Registration::new("alice", "secret1", "a@x.com", "Male", "Atlantis").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidCountry);
    }

    #[test]
    fn standard_defaults() {
        let d = RegistrationDefaults::for_tier(AccountTier::Standard);
        assert_eq!(d.money, 250_000);
        assert_eq!(d.cash, 125_000);
        assert_eq!(d.authority, 1);
        assert_eq!(d.grade, 19);
        assert_eq!(d.game_points, 1000);
    }

    #[test]
    fn admin_defaults_are_elevated() {
        let d = RegistrationDefaults::for_tier(AccountTier::Admin);
        assert_eq!(d.money, 900_000);
        assert_eq!(d.cash, 900_000);
        assert_eq!(d.authority, 100);
        assert_eq!(d.grade, 20);
        assert_eq!(d.game_points, 1000);
    }
}
