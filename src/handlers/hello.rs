//! Fixed-response handler for the benchmark route
//!
//! The handler ignores every part of the incoming request and always
//! replies with the same payload, so measured differences come from the
//! HTTP stack rather than application work.

use std::convert::Infallible;

use warp::Filter;

use crate::constants::{HELLO_WORLD, SERVER_NAME, TEXT_PLAIN};

/// Build the route set served by the benchmark server
///
/// A single filter matches every method and path, so there is no route
/// differentiation and no rejection path.
pub fn routes() -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
    warp::any().map(hello_reply)
}

// Reply with the fixed payload and the two fixed headers
fn hello_reply() -> impl warp::Reply {
    warp::reply::with_header(
        warp::reply::with_header(HELLO_WORLD, "Server", SERVER_NAME),
        "Content-Type",
        TEXT_PLAIN,
    )
}
