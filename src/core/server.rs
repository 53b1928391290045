//! Serve loop for the fixed-response benchmark server
//!
//! Routing and reply construction are warp filters; the filters are
//! served through hyper's server builder so the fixed connection
//! timeouts can be applied.

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;

use hyper::service::make_service_fn;
use hyper::Server;
use log::{error, info};

use crate::config::ServerConfig;
use crate::error::{HelloBenchError, Result};
use crate::handlers;

/// Bind the listener and return the bound address plus the serving future
///
/// Binding is separated from serving so callers can learn the actual
/// address (ephemeral ports in tests) and decide how to drive the loop.
///
/// # Arguments
/// * `config` - Server configuration with address and timeouts
///
/// # Returns
/// A `Result` containing the bound address and the serve-loop future,
/// or a bind error if the address is unavailable
pub fn bind(config: &ServerConfig) -> Result<(SocketAddr, impl Future<Output = Result<()>>)> {
    let addr = config.bind_addr()?;

    let service = warp::service(handlers::routes());
    let make_svc = make_service_fn(move |_conn| {
        let service = service.clone();
        async move { Ok::<_, Infallible>(service) }
    });

    // hyper's header-read timer runs between requests on kept-alive
    // connections, so it enforces both the read and the idle bound.
    let conn_timeout = config.read_timeout.min(config.idle_timeout);

    let server = Server::try_bind(&addr)
        .map_err(|e| HelloBenchError::BindError(format!("Failed to bind {}: {}", addr, e)))?
        .http1_header_read_timeout(conn_timeout)
        .tcp_nodelay(true)
        .serve(make_svc);

    let local_addr = server.local_addr();

    let serving = async move {
        server.await.map_err(|e| {
            error!("Server error: {}", e);
            HelloBenchError::ServeError(format!("Serve loop terminated: {}", e))
        })
    };

    Ok((local_addr, serving))
}

/// Bind and serve forever on the configured address
pub async fn run(config: &ServerConfig) -> Result<()> {
    let (addr, serving) = bind(config)?;

    info!("Listening on http://{}", addr);

    serving.await
}
