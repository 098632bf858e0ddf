//! Per-chat mode persistence.
//!
//! The store is a port so the handlers stay testable and the core stays
//! free of process-wide state. The default implementation keeps the whole
//! map in memory and rewrites a flat JSON file on every mutation.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{domain::ChatId, mode::Mode, Result};

/// Port for per-chat mode persistence.
#[async_trait]
pub trait ModeStore: Send + Sync {
    /// The stored mode label for a chat, defaulting to the emoji scheme for
    /// chats never seen before. Labels are returned verbatim: a value
    /// written by an older deployment stays visible (and dispatches as
    /// identity) instead of being coerced or erased.
    async fn mode(&self, chat: ChatId) -> String;

    /// Persist a new mode for a chat. Only valid modes are accepted here;
    /// label validation happens at the command layer.
    async fn set_mode(&self, chat: ChatId, mode: Mode) -> Result<()>;
}

/// JSON-file store: `{ "<chat id>": "emoji" | "unicode", ... }`.
///
/// Loaded entirely at construction; the file is rewritten as a whole on
/// every mutation. A single mutex serializes read-modify-write so racing
/// mode changes cannot lose updates.
pub struct FileModeStore {
    path: PathBuf,
    modes: Mutex<HashMap<String, String>>,
}

impl FileModeStore {
    /// Open the store, reading any existing map. A missing file is a first
    /// run; an unreadable one is logged and ignored rather than failing
    /// startup.
    pub fn load(path: PathBuf) -> Self {
        let modes = match std::fs::read_to_string(&path) {
            Ok(txt) => match serde_json::from_str::<HashMap<String, String>>(&txt) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!("ignoring unreadable mode map {}: {e}", path.display());
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            modes: Mutex::new(modes),
        }
    }
}

#[async_trait]
impl ModeStore for FileModeStore {
    async fn mode(&self, chat: ChatId) -> String {
        let modes = self.modes.lock().await;
        modes
            .get(&chat.0.to_string())
            .cloned()
            .unwrap_or_else(|| Mode::DEFAULT.as_str().to_string())
    }

    async fn set_mode(&self, chat: ChatId, mode: Mode) -> Result<()> {
        let mut modes = self.modes.lock().await;
        modes.insert(chat.0.to_string(), mode.as_str().to_string());
        let txt = serde_json::to_string_pretty(&*modes)?;
        std::fs::write(&self.path, txt)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_store_path(name: &str) -> PathBuf {
        let dir = PathBuf::from(format!("/tmp/gmoji-store-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[tokio::test]
    async fn defaults_to_emoji_for_unseen_chats() {
        let store = FileModeStore::load(tmp_store_path("defaults.json"));
        assert_eq!(store.mode(ChatId(42)).await, "emoji");
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = FileModeStore::load(tmp_store_path("set-get.json"));
        store.set_mode(ChatId(1), Mode::Unicode).await.unwrap();
        assert_eq!(store.mode(ChatId(1)).await, "unicode");
        // Other chats are unaffected.
        assert_eq!(store.mode(ChatId(2)).await, "emoji");
    }

    #[tokio::test]
    async fn persists_across_a_reload() {
        let path = tmp_store_path("reload.json");
        {
            let store = FileModeStore::load(path.clone());
            store.set_mode(ChatId(7), Mode::Unicode).await.unwrap();
            store.set_mode(ChatId(8), Mode::Emoji).await.unwrap();
        }

        let reloaded = FileModeStore::load(path);
        assert_eq!(reloaded.mode(ChatId(7)).await, "unicode");
        assert_eq!(reloaded.mode(ChatId(8)).await, "emoji");
    }

    #[tokio::test]
    async fn unknown_stored_labels_are_preserved_verbatim() {
        let path = tmp_store_path("legacy.json");
        std::fs::write(&path, r#"{ "5": "rot13" }"#).unwrap();

        let store = FileModeStore::load(path);
        assert_eq!(store.mode(ChatId(5)).await, "rot13");
    }

    #[tokio::test]
    async fn corrupt_file_starts_empty() {
        let path = tmp_store_path("corrupt.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileModeStore::load(path);
        assert_eq!(store.mode(ChatId(1)).await, "emoji");
    }
}
