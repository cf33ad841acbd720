pub mod mvi;
pub mod runtime;
pub mod screen;
