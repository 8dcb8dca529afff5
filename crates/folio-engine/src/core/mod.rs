pub mod controller;
pub mod reveal;
