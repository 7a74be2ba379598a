pub mod generate;
pub mod list;
pub mod plugin;

pub use generate::{GenerateConfig, generate_code};
pub use list::list_services;
pub use plugin::run_plugin;
