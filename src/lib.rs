pub mod config;
pub mod event;
pub mod http;
pub mod model;
pub mod store;
pub mod sync;
pub mod ui;
pub mod util;
