// Birth-data profile: persistence and the submission workflow endpoints.

pub mod handlers;
pub mod store;
