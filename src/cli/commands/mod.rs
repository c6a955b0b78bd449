pub mod backup;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod start;
pub mod status;
pub mod stop;
pub mod summary;
pub mod target;
