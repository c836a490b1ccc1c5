//! API Module - entry points for the presentation layer

pub mod commands;
