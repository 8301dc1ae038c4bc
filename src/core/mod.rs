pub mod parser;
pub mod roster;

pub use roster::Roster;
