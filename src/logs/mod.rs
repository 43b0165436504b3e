pub mod logger;
pub mod multi;
