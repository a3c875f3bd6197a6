pub mod animation;
pub mod client;
pub mod config;
pub mod packet;
