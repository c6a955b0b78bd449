pub mod session;
pub mod summary;
pub mod target;
