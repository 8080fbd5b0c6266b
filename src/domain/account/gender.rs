//! Gender flag as persisted in the account tables.

/// Binary gender code: 0 = male, 1 = female.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Map a submitted string to the stored code.
    ///
    /// Only the exact string "Male" maps to male; every other value falls
    /// through to female. The legacy clients always send "Male"/"Female",
    /// so the fallthrough is kept for schema compatibility.
    pub fn from_submission(value: &str) -> Self {
        if value == "Male" {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    /// Numeric code as persisted in the schema.
    pub fn code(&self) -> i32 {
        match self {
            Gender::Male => 0,
            Gender::Female => 1,
        }
    }
}
