// Crate root library declaration and module exports.
pub mod config;
pub mod context;
pub mod help;
pub mod logging;
pub mod model;
pub mod store;
