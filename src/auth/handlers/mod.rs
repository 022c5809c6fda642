//! HTTP handlers for the authentication endpoints.
//!
//! - **`signup`** - user registration (`POST /user/signup`)
//! - **`login`** - user authentication (`POST /user/login`)
//! - **`me`** - current user info (`GET /user/me`)
//! - **`types`** - request/response types shared by the handlers

pub mod login;
pub mod me;
pub mod signup;
pub mod types;

pub use login::login;
pub use me::get_me;
pub use signup::signup;
