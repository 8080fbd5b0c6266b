//! Account domain: registration input, enumerations and row records.

mod country;
mod gender;
mod records;
mod registration;

pub use country::Country;
pub use gender::Gender;
pub use records::{AccountRecord, CashRecord, GameProfileRecord, NewPlayer};
pub use registration::{AccountTier, Registration, RegistrationDefaults};
