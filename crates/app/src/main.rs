//! Heirloom marketplace client - composition root
//!
//! Wires the adapters to the client core: loads configuration, builds
//! one session store per tenant, hydrates them, and hands the shell
//! three tenant-bound API clients plus the redirect channel.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use heirloom_application::{
    ApiClient, AuthGate, HttpTransport, Navigator, SessionPersistence, SessionStore, TenantSession,
};
use heirloom_domain::Tenant;
use heirloom_infrastructure::{
    ChannelNavigator, ClientConfig, FileSessionStorage, ReqwestTransport,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let storage = Arc::new(FileSessionStorage::default_location()?);
    let config = ClientConfig::load(&storage.dir().join("config.json")).await?;
    tracing::info!(base_url = %config.base_url, "starting heirloom client");

    let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(&config)?);
    let (navigator, redirects) = ChannelNavigator::new();

    let mut clients = Vec::with_capacity(Tenant::ALL.len());
    for tenant in Tenant::ALL {
        let store = Arc::new(TenantSession::new(tenant, Arc::clone(&storage) as Arc<dyn SessionPersistence>));
        store.hydrate().await;

        let client = ApiClient::new(
            Arc::clone(&transport),
            Arc::clone(&store) as Arc<dyn SessionStore>,
            Arc::clone(&navigator) as Arc<dyn Navigator>,
            config.public_routes.clone(),
        );

        match AuthGate::evaluate(store.as_ref(), tenant.path_prefix()) {
            AuthGate::Authenticated(_) => {
                let name = store.display_name().await;
                tracing::info!(%tenant, display_name = name.as_deref(), "session restored");
            }
            AuthGate::LoginRequired { redirect } => {
                tracing::info!(%tenant, login = redirect, "no session");
            }
            AuthGate::Pending => {}
        }

        clients.push((store, client));
    }

    // The embedding shell owns the event loop from here: it drains
    // `redirects`, keeps `navigator` in sync with its routing, and
    // issues backend calls through `clients`.
    run_shell(clients, redirects).await;
    Ok(())
}

/// Placeholder for the embedding shell's event loop. Logs redirect
/// requests for the life of the process.
async fn run_shell(
    clients: Vec<(Arc<TenantSession>, ApiClient)>,
    mut redirects: tokio::sync::mpsc::UnboundedReceiver<String>,
) {
    for (store, client) in &clients {
        tracing::debug!(tenant = %client.tenant(), ready = store.snapshot().is_ready(), "client ready");
    }

    while let Some(target) = redirects.recv().await {
        tracing::info!(target_path = target, "redirect requested");
    }
}
