pub mod files;
pub mod merge;
pub mod thumbnail;
