pub mod config;
pub mod dates;
pub mod export;
pub mod init;
pub mod show;
pub mod theme;
