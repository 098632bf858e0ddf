use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{errors::Error, Result};

/// Typed configuration for the bot.
///
/// Mirrors the deployment surface of the original hosting setup: a bot
/// token, an optional public URL for webhook delivery, and the location of
/// the persisted chat-mode map.
#[derive(Clone, Debug)]
pub struct Config {
    /// Telegram bot token (`TG_TOKEN`). Required.
    pub bot_token: String,

    /// Public base URL of this deployment (`EXPOSED_URL`), e.g.
    /// `https://your-app.example.com`. When set, updates are delivered to
    /// `{EXPOSED_URL}/webhook`; when absent the bot long-polls.
    pub exposed_url: Option<String>,

    /// Port the webhook server binds (`PORT`).
    pub port: u16,

    /// Path of the persisted chat-mode map (`MODES_FILE`).
    pub modes_file: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let bot_token = env_str("TG_TOKEN").unwrap_or_default();
        if bot_token.trim().is_empty() {
            return Err(Error::Config(
                "TG_TOKEN environment variable is required".to_string(),
            ));
        }

        let exposed_url = env_str("EXPOSED_URL")
            .and_then(non_empty)
            .map(|u| u.trim_end_matches('/').to_string());

        let port = env_str("PORT")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .unwrap_or(8080);

        let modes_file =
            PathBuf::from(env_str("MODES_FILE").unwrap_or_else(|| "modes.json".to_string()));

        Ok(Self {
            bot_token,
            exposed_url,
            port,
            modes_file,
        })
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
