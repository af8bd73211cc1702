pub mod schema;
pub mod person_repo;
pub mod assignment_repo;
