pub mod gui;
pub mod logic;
