//! Wire-level constants shared by the server and its clients.

/// JSON array of every talk, in schedule order.
pub const TALKS_ROUTE: &str = "/api/talks";

/// Body returned on any failure to read the talk list.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load data";
