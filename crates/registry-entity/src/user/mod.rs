//! User domain entities.

pub mod id;
pub mod model;

pub use id::{MEMBER_NO_UPPER_BOUND, generate_member_no, generate_user_id};
pub use model::{NewUser, UserPatch, UserRecord};
