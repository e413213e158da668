//! Static process configuration

pub mod config;
