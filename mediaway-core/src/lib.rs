pub mod cli;
pub mod conf;
pub mod library;
pub mod logging;
pub mod media;
pub mod server;
