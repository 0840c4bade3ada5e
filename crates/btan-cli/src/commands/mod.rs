pub mod check;
pub mod dump;
pub mod extract;
pub mod input_loader;
