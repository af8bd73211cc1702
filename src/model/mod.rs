pub mod ids;
pub mod person;
pub mod roster;
pub mod assignment;

// Re-exports for convenience
pub use ids::Id;
pub use person::Person;
pub use roster::Roster;
pub use assignment::{Assignment, Destination, Group, MoveOutcome, Organized};
