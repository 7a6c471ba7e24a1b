pub mod config;
pub mod edit;
pub mod list;
pub mod new;
pub mod start;
pub mod status;
pub mod stop;
