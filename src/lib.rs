pub mod app;
pub mod sampler;
pub mod ui;
