use std::path::Path;

use anyhow::{Result, bail};
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::router::create_router;

/// Hosts the compiled dashboard bundle until the process is stopped.
pub async fn serve(dist: &str, bind_address: &str) -> Result<()> {
    trace!("Entering serve function");
    debug!("Dashboard bundle directory: {}", dist);
    debug!("Bind address: {}", bind_address);

    let dist = Path::new(dist);
    if !dist.join("index.html").is_file() {
        bail!(
            "No dashboard bundle found at {} (build it with `trunk build` in workspace/frontend)",
            dist.display()
        );
    }

    let app = create_router(dist);
    debug!("Router created successfully");

    trace!("Attempting to bind TCP listener to {}", bind_address);
    let listener = match TcpListener::bind(bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("ChainTrack dashboard running on http://{}", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
