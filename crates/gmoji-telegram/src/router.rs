use std::net::SocketAddr;
use std::sync::Arc;

use teloxide::{
    dispatching::Dispatcher, dptree, error_handlers::LoggingErrorHandler, prelude::*,
    update_listeners::webhooks,
};

use gmoji_core::{
    cipher::CipherEngine, config::Config, messaging::port::MessagingPort, session::ModeStore,
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub engine: Arc<CipherEngine>,
    pub store: Arc<dyn ModeStore>,
    pub messenger: Arc<dyn MessagingPort>,
}

/// Run the bot until shutdown.
///
/// With `EXPOSED_URL` configured, updates arrive on `{EXPOSED_URL}/webhook`
/// through teloxide's axum webhook listener, which registers the URL with
/// Telegram on startup; `/healthz` answers the hosting platform's checks on
/// the same server. Without it the bot long-polls, clearing any stale
/// webhook first.
pub async fn run(
    cfg: Arc<Config>,
    engine: Arc<CipherEngine>,
    store: Arc<dyn ModeStore>,
) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.bot_token.clone());

    if let Ok(me) = bot.get_me().await {
        tracing::info!("gmoji started: @{}", me.username());
    }

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let state = Arc::new(AppState {
        cfg: cfg.clone(),
        engine,
        store,
        messenger,
    });

    let handler = dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .dependencies(dptree::deps![state])
        .build();

    match cfg.exposed_url.as_deref() {
        Some(exposed) => {
            let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
            let url: url::Url = format!("{exposed}/webhook")
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid EXPOSED_URL: {e}"))?;
            tracing::info!("webhook delivery on port {} for {url}", cfg.port);

            let (listener, stop_flag, router) =
                webhooks::axum_to_router(bot, webhooks::Options::new(addr, url)).await?;
            let router = router.route("/healthz", axum::routing::get(healthz));

            tokio::spawn(async move {
                if let Err(e) = axum::Server::bind(&addr)
                    .serve(router.into_make_service())
                    .with_graceful_shutdown(stop_flag)
                    .await
                {
                    tracing::warn!("webhook server failed: {e}");
                }
            });

            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
        None => {
            tracing::info!("long-polling delivery");
            // Polling only works with no webhook registered.
            if let Err(e) = bot.delete_webhook().await {
                tracing::warn!("failed to delete webhook: {e}");
            }
            dispatcher.dispatch().await;
        }
    }

    Ok(())
}

async fn healthz() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
