use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::routing::{RouteContext, Router};
use crate::store::FsStore;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!(
        "Listening on {}, serving files from {}",
        cfg.server.listen_addr,
        cfg.files.root_dir.display()
    );

    let ctx = RouteContext::new(Arc::new(FsStore::new(cfg.files.root_dir.clone())));
    serve(listener, Arc::new(Router::new()), ctx).await
}

/// Accepts connections forever, one task per connection.
///
/// Errors from a single connection (or a single failed accept) are logged
/// and never stop the loop.
pub async fn serve(listener: TcpListener, router: Arc<Router>, ctx: RouteContext) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to accept connection");
                continue;
            }
        };
        tracing::debug!("Accepted connection from {}", peer);

        let router = router.clone();
        let ctx = ctx.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, router, ctx);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}
