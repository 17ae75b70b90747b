pub mod config;
pub mod event;
pub mod http;
pub mod i18n;
pub mod model;
pub mod ui;
pub mod util;
