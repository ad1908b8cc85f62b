pub mod config;
pub mod rollcall;
