//! Session lifecycle: token issuance, validation, and member lookups.

pub mod authority;
pub mod outcome;

pub use authority::SessionAuthority;
pub use outcome::{AuthOutcome, PaymentView, SessionView};
