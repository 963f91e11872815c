pub mod command;
pub mod config;
pub mod error;
pub mod logger;
pub mod post;
pub mod publisher;
mod test_data;
mod text_utils;
