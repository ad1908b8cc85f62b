pub mod coral;
