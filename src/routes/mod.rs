pub mod verify_auth;

pub use verify_auth::*;
