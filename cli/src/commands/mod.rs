pub mod project;
pub mod swing;
