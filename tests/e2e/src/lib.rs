//! Browser and process helpers for end-to-end tests against a locally spawned site.

pub mod browser;
pub mod test_server;
