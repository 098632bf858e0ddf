use std::sync::Arc;

use gmoji_core::{
    cipher::CipherEngine,
    config::Config,
    session::{FileModeStore, ModeStore},
};

#[tokio::main]
async fn main() -> Result<(), gmoji_core::Error> {
    gmoji_core::logging::init("gmoji")?;

    let cfg = Arc::new(Config::load()?);
    let engine = Arc::new(CipherEngine::new());
    let store: Arc<dyn ModeStore> = Arc::new(FileModeStore::load(cfg.modes_file.clone()));

    gmoji_telegram::router::run(cfg, engine, store)
        .await
        .map_err(|e| gmoji_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
