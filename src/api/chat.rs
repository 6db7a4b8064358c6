//! Chat demo page and the echo socket behind it.

use axum::extract::ws::{close_code, CloseFrame, Message, WebSocket, WebSocketUpgrade};
use axum::response::{Html, Response};
use tracing::{debug, warn};

const CHAT_PAGE: &str = include_str!("chat.html");

pub const ECHO_PREFIX: &str = "Message text was: ";

pub async fn index() -> Html<&'static str> {
    Html(CHAT_PAGE)
}

pub async fn ws_handler(ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(echo_session)
}

pub fn echo_reply(text: &str) -> String {
    format!("{}{}", ECHO_PREFIX, text)
}

/// Reply to every text frame until the peer goes away.
///
/// A binary frame ends the session with an "unsupported data" close.
async fn echo_session(mut socket: WebSocket) {
    debug!("Echo session opened");

    while let Some(frame) = socket.recv().await {
        let frame = match frame {
            Ok(frame) => frame,
            Err(e) => {
                debug!("Echo session receive error: {}", e);
                return;
            }
        };

        match frame {
            Message::Text(text) => {
                if let Err(e) = socket.send(Message::Text(echo_reply(&text))).await {
                    debug!("Echo session send error: {}", e);
                    return;
                }
            }
            Message::Binary(_) => {
                warn!("Echo session received a binary frame, closing");
                let _ = socket
                    .send(Message::Close(Some(CloseFrame {
                        code: close_code::UNSUPPORTED,
                        reason: "text frames only".into(),
                    })))
                    .await;
                return;
            }
            // Pings are answered by the transport.
            Message::Ping(_) | Message::Pong(_) => {}
            Message::Close(_) => break,
        }
    }

    debug!("Echo session closed");
}
