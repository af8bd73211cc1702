pub mod roster_ops;
pub mod organize_ops;
pub mod move_ops;

pub use roster_ops::PersonUpdate;
