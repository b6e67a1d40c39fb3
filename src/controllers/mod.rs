pub mod benchmark;
pub mod ports;
pub mod settings;
pub mod timing;
