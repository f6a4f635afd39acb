//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ChatMessage, Session, UserName},
    infrastructure::dto::websocket::{DeliveryMessage, MessageType, SubmitMessage},
    ui::state::{AppState, ConnectQuery},
    usecase::{
        ConnectSessionUseCase, DisconnectSessionUseCase, RouteMessageUseCase,
        error::ConnectError,
    },
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    // Convert String -> UserName (Domain Model). An invalid identity means
    // the handshake fails before any session exists.
    let user_name = match UserName::new(query.user.clone()) {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!("Rejecting handshake with invalid user name: {}", e);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    // Create the channel feeding this connection's write task
    let (tx, rx) = mpsc::unbounded_channel();

    // Use ConnectSessionUseCase to register the session
    let connect_usecase = ConnectSessionUseCase::new(state.registry.clone());

    match connect_usecase.execute(user_name, tx).await {
        Ok(session) => {
            tracing::info!(
                "User '{}' connected with session {}",
                session.user_name(),
                session.id()
            );
            Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, session, rx)))
        }
        Err(ConnectError::RegistryCapacityExceeded) => {
            tracing::warn!("Session registry full; refusing connection for '{}'", query.user);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

async fn handle_socket(
    socket: WebSocket,
    state: Arc<AppState>,
    session: Arc<Session>,
    mut rx: mpsc::UnboundedReceiver<ChatMessage>,
) {
    let (mut sender, mut receiver) = socket.split();

    let session_clone = session.clone();
    let state_clone = state.clone();

    // Spawn a task to receive frames from this client and route them
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    // Decode the submission frame; a malformed frame is a
                    // connection-level condition and is never routed.
                    let frame = match serde_json::from_str::<SubmitMessage>(&text) {
                        Ok(frame) => frame,
                        Err(e) => {
                            tracing::warn!(
                                "Malformed frame from session {}: {}",
                                session_clone.id(),
                                e
                            );
                            continue;
                        }
                    };

                    if !matches!(frame.r#type, MessageType::ChatSend) {
                        tracing::warn!(
                            "Unexpected frame type from session {}; ignoring",
                            session_clone.id()
                        );
                        continue;
                    }

                    let message = frame.into_chat_message();

                    // Use RouteMessageUseCase to deliver the message
                    let route_usecase = RouteMessageUseCase::new(state_clone.registry.clone());
                    match route_usecase.execute(message).await {
                        Ok(delivered) => {
                            tracing::debug!("Routed message to {} session(s)", delivered);
                        }
                        Err(e) => {
                            tracing::warn!(
                                "Rejected message from session {}: {}",
                                session_clone.id(),
                                e
                            );
                        }
                    }
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Session {} requested close", session_clone.id());
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to write routed deliveries to this client
    let mut send_task = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            let delivery = DeliveryMessage::from(message);
            let json = match serde_json::to_string(&delivery) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to encode delivery frame: {}", e);
                    continue;
                }
            };
            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Use DisconnectSessionUseCase to close and unregister exactly once
    let disconnect_usecase = DisconnectSessionUseCase::new(state.registry.clone());
    disconnect_usecase.execute(&session).await;
    tracing::info!(
        "User '{}' disconnected (session {})",
        session.user_name(),
        session.id()
    );
}
