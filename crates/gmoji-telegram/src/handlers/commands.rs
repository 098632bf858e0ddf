use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use gmoji_core::{
    domain::ChatId, formatting::escape_html, messaging::port::MessagingPort, mode::Mode,
    session::ModeStore,
};

use crate::router::AppState;

const HELP_TEXT: &str = "/start - Welcome\n\
/help - This message\n\
/mode - Show current mode\n\
/changemod [emoji|unicode] - Change/toggle mode\n\
/encode TEXT - Encode to current mode\n\
/decode GLYPHS - Decode from current mode\n\n\
Send plain text to auto-encode.";

/// Split `/cmd@botname arg...` into a lowercase command and the trimmed
/// remainder.
fn parse_command(text: &str) -> (String, String) {
    // Telegram may send `/cmd@botname arg1 ...`
    let mut parts = text.trim().splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    (cmd, rest)
}

pub async fn handle_command(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let chat = ChatId(msg.chat.id.0);
    let (cmd, arg) = parse_command(text);
    tracing::info!("command /{cmd} from chat {}", chat.0);

    match cmd.as_str() {
        "start" => start(&state, chat).await,
        "help" => help(&state, chat).await,
        "mode" => show_mode(&state, chat).await,
        "changemod" => change_mode(&state, chat, &arg).await,
        "encode" => encode(&state, chat, &arg).await,
        "decode" => decode(&state, chat, &arg).await,
        _ => {}
    }

    Ok(())
}

async fn start(state: &AppState, chat: ChatId) {
    let mode = state.store.mode(chat).await;
    let body = format!(
        "GlyphMoji bot ready. Current mode: <b>{}</b>\n\n{HELP_TEXT}",
        escape_html(&mode)
    );
    send_html(state, chat, &body).await;
}

async fn help(state: &AppState, chat: ChatId) {
    send_html(state, chat, HELP_TEXT).await;
}

async fn show_mode(state: &AppState, chat: ChatId) {
    let mode = state.store.mode(chat).await;
    let body = format!(
        "Current mode for this chat: <b>{}</b>",
        escape_html(&mode)
    );
    send_html(state, chat, &body).await;
}

/// `/changemod` with an argument sets that mode, rejecting anything but the
/// two known labels without touching stored state. Without an argument it
/// toggles; an unknown stored label toggles onto the default.
async fn change_mode(state: &AppState, chat: ChatId, arg: &str) {
    let arg = arg
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase();

    if arg.is_empty() {
        let current = state.store.mode(chat).await;
        let next = Mode::parse(&current)
            .map(Mode::toggled)
            .unwrap_or(Mode::DEFAULT);
        persist_mode(state, chat, next).await;
        send_html(state, chat, &format!("Toggled mode: <b>{}</b>", next.as_str())).await;
        return;
    }

    let Some(mode) = Mode::parse(&arg) else {
        send_html(state, chat, "Invalid mode. Use 'emoji' or 'unicode'.").await;
        return;
    };
    persist_mode(state, chat, mode).await;
    send_html(state, chat, &format!("Mode set to <b>{}</b>", mode.as_str())).await;
}

async fn encode(state: &AppState, chat: ChatId, arg: &str) {
    if arg.is_empty() {
        send_text(state, chat, "Usage: /encode your text here").await;
        return;
    }
    let mode = state.store.mode(chat).await;
    send_text(state, chat, &state.engine.encode(arg, &mode)).await;
}

async fn decode(state: &AppState, chat: ChatId, arg: &str) {
    if arg.is_empty() {
        send_text(state, chat, "Usage: /decode <glyphs>").await;
        return;
    }
    let mode = state.store.mode(chat).await;
    send_text(state, chat, &state.engine.decode(arg, &mode)).await;
}

async fn persist_mode(state: &AppState, chat: ChatId, mode: Mode) {
    // The in-memory map is updated either way; a failed rewrite only costs
    // durability, not this session's behavior.
    if let Err(e) = state.store.set_mode(chat, mode).await {
        tracing::warn!("failed to persist mode for chat {}: {e}", chat.0);
    }
}

async fn send_text(state: &AppState, chat: ChatId, text: &str) {
    if let Err(e) = state.messenger.send_text(chat, text).await {
        tracing::warn!("send failed for chat {}: {e}", chat.0);
    }
}

async fn send_html(state: &AppState, chat: ChatId, html: &str) {
    if let Err(e) = state.messenger.send_html(chat, html).await {
        tracing::warn!("send failed for chat {}: {e}", chat.0);
    }
}
