//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod novedad_repo;
pub mod trabajo_repo;

pub use admin_repo::AdminRepo;
pub use novedad_repo::NovedadRepo;
pub use trabajo_repo::TrabajoRepo;
