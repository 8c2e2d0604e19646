pub mod app;
pub mod modules;
pub mod shared;

pub use app::run;
