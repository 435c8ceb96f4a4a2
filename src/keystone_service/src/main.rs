use color_eyre::eyre::Result;
use keystone_adapters::{HashMapAccountStore, PostgresAccountStore, Settings};
use keystone_core::AccountStore;
use keystone_service::{AccountService, configure_postgresql, tracing::init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;

    match settings.database.url.clone() {
        Some(url) => {
            let pool = configure_postgresql(&url, &settings.database).await?;
            serve(&settings, PostgresAccountStore::new(pool)).await
        }
        None => {
            tracing::warn!("No database configured, accounts are kept in memory");
            serve(&settings, HashMapAccountStore::new()).await
        }
    }
}

async fn serve<S: AccountStore + 'static>(settings: &Settings, store: S) -> Result<()> {
    let service = AccountService::from_settings(settings, store)?;

    let listener = TcpListener::bind(settings.server.address()).await?;
    service.run_standalone(listener, settings).await?;

    Ok(())
}
