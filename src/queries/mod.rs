pub mod roster_queries;
pub mod assignment_queries;
pub mod stats_queries;

pub use assignment_queries::Placement;
pub use stats_queries::RosterStats;
