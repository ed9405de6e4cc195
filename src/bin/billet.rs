//! Development server: in-memory store behind the form-handler surface.
//!
//! Configuration comes from the YAML file named by `BILLET_CONFIG` (all
//! fields optional), then `BILLET_LISTEN_ADDR`/`DATABASE_URL` overrides.

use billet::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    billet::server::init_tracing();

    let config = match std::env::var("BILLET_CONFIG") {
        Ok(path) => AppConfig::from_yaml_file(&path)?,
        Err(_) => AppConfig::default(),
    }
    .with_env_overrides();

    let ctx = ActionContext::new(
        Arc::new(InMemoryStore::new()),
        Arc::new(InMemoryCache::new()),
        Arc::new(StaticAuthProvider::new().with_user("user@nextmail.com", "123456")),
    )
    .with_paths(config.redirect_paths());

    billet::server::serve(&config.listen_addr, build_router(Arc::new(ctx))).await
}
