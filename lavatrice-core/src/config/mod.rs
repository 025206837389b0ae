//! Machine settings
//!
//! Limits the controller applies to every request. Hosts may persist them
//! as a postcard image (see [`settings`]).

pub mod settings;

pub use settings::*;
