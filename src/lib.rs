//! Carpool organizer: a roster of people with riding constraints, and an
//! engine that turns today's participants into car groups.

pub mod error;
pub mod validation;
pub mod config;
pub mod model;
pub mod ops;
pub mod queries;
pub mod db;
pub mod migrate;
pub mod session;

pub use error::{CarpoolError, CarpoolResult, OrganizeError, OrganizeWarning};
pub use session::Session;
