//! Core domain models for the message relay.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};
use tokio::sync::mpsc::UnboundedSender;

use super::{
    error::SessionSendError,
    value_object::{SessionId, Timestamp, UserName},
};

/// A relayed message.
///
/// Plain immutable value with exactly the four fields that travel on the
/// wire. Constructed on inbound decode, consumed by the router, and
/// discarded after the forwarding attempts complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sender's user name, relayed verbatim
    pub sender: String,
    /// Receiver's user name; routing key
    pub receiver: String,
    /// Message text (may be empty)
    pub content: String,
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(sender: String, receiver: String, content: String, timestamp: i64) -> Self {
        Self {
            sender,
            receiver,
            content,
            timestamp,
        }
    }
}

/// Lifecycle state of a session.
///
/// Transitions are one-way: `Connecting → Active → Closed`. There is no
/// transition out of `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Handshake in progress; not yet registered
    Connecting,
    /// Registered and eligible to send/receive
    Active,
    /// Terminal; the send capability is invalid
    Closed,
}

const STATE_CONNECTING: u8 = 0;
const STATE_ACTIVE: u8 = 1;
const STATE_CLOSED: u8 = 2;

impl SessionState {
    fn from_u8(value: u8) -> Self {
        match value {
            STATE_CONNECTING => SessionState::Connecting,
            STATE_ACTIVE => SessionState::Active,
            _ => SessionState::Closed,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            SessionState::Connecting => STATE_CONNECTING,
            SessionState::Active => STATE_ACTIVE,
            SessionState::Closed => STATE_CLOSED,
        }
    }
}

/// One live client connection bound to a user name.
///
/// Owns the outbound send capability (the channel feeding the connection's
/// write task). The `user_name`/`id` pair is unique process-wide for the
/// session's lifetime.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    user_name: UserName,
    sender: UnboundedSender<ChatMessage>,
    connected_at: Timestamp,
    state: AtomicU8,
}

impl Session {
    /// Create a new session in the `Connecting` state.
    pub fn new(
        id: SessionId,
        user_name: UserName,
        sender: UnboundedSender<ChatMessage>,
        connected_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_name,
            sender,
            connected_at,
            state: AtomicU8::new(STATE_CONNECTING),
        }
    }

    /// Session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// User name the session is bound to.
    pub fn user_name(&self) -> &UserName {
        &self.user_name
    }

    /// Timestamp at which the session connected.
    pub fn connected_at(&self) -> Timestamp {
        self.connected_at
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        SessionState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Transition `Connecting → Active`.
    ///
    /// Returns `true` if the transition happened; `false` if the session was
    /// not in `Connecting` (a closed session stays closed).
    pub fn activate(&self) -> bool {
        self.state
            .compare_exchange(
                STATE_CONNECTING,
                STATE_ACTIVE,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Transition to `Closed`. Idempotent.
    pub fn close(&self) {
        self.state
            .store(SessionState::Closed.as_u8(), Ordering::Release);
    }

    /// Push one message onto the session's outbound channel.
    ///
    /// Non-blocking. Fails if the session is not active or if the connection
    /// side of the channel is gone; both are per-session conditions the
    /// caller handles by unregistering this session.
    pub fn send(&self, message: ChatMessage) -> Result<(), SessionSendError> {
        if self.state() != SessionState::Active {
            return Err(SessionSendError::SessionClosed);
        }
        self.sender
            .send(message)
            .map_err(|_| SessionSendError::ChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::factory::SessionIdFactory;
    use tokio::sync::mpsc;

    fn test_session() -> (Session, mpsc::UnboundedReceiver<ChatMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = Session::new(
            SessionIdFactory::generate(),
            UserName::new("alice".to_string()).unwrap(),
            tx,
            Timestamp::new(1000),
        );
        (session, rx)
    }

    #[test]
    fn test_chat_message_new() {
        // テスト項目: 4 フィールドのメッセージを作成できる
        // when (操作):
        let message = ChatMessage::new(
            "alice".to_string(),
            "bob".to_string(),
            "hi".to_string(),
            1000,
        );

        // then (期待する結果):
        assert_eq!(message.sender, "alice");
        assert_eq!(message.receiver, "bob");
        assert_eq!(message.content, "hi");
        assert_eq!(message.timestamp, 1000);
    }

    #[test]
    fn test_chat_message_empty_content_allowed() {
        // テスト項目: content は空文字列でもよい
        // when (操作):
        let message =
            ChatMessage::new("alice".to_string(), "bob".to_string(), String::new(), 0);

        // then (期待する結果):
        assert_eq!(message.content, "");
    }

    #[test]
    fn test_session_starts_connecting() {
        // テスト項目: 新しいセッションは Connecting 状態で作成される
        // given (前提条件):
        let (session, _rx) = test_session();

        // then (期待する結果):
        assert_eq!(session.state(), SessionState::Connecting);
    }

    #[test]
    fn test_session_activate() {
        // テスト項目: Connecting → Active に遷移できる
        // given (前提条件):
        let (session, _rx) = test_session();

        // when (操作):
        let activated = session.activate();

        // then (期待する結果):
        assert!(activated);
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn test_session_activate_twice_fails() {
        // テスト項目: すでに Active のセッションは再度 activate できない
        // given (前提条件):
        let (session, _rx) = test_session();
        session.activate();

        // when (操作):
        let activated_again = session.activate();

        // then (期待する結果):
        assert!(!activated_again);
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn test_session_close_is_terminal() {
        // テスト項目: Closed からは他の状態に遷移できない
        // given (前提条件):
        let (session, _rx) = test_session();
        session.activate();

        // when (操作):
        session.close();
        let reactivated = session.activate();

        // then (期待する結果):
        assert!(!reactivated);
        assert_eq!(session.state(), SessionState::Closed);
    }

    #[test]
    fn test_session_close_idempotent() {
        // テスト項目: close は何度呼んでもよい
        // given (前提条件):
        let (session, _rx) = test_session();
        session.activate();

        // when (操作):
        session.close();
        session.close();

        // then (期待する結果):
        assert_eq!(session.state(), SessionState::Closed);
    }

    #[test]
    fn test_session_send_active() {
        // テスト項目: Active なセッションにメッセージを送信できる
        // given (前提条件):
        let (session, mut rx) = test_session();
        session.activate();
        let message = ChatMessage::new(
            "bob".to_string(),
            "alice".to_string(),
            "hi".to_string(),
            1000,
        );

        // when (操作):
        let result = session.send(message.clone());

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(rx.try_recv().unwrap(), message);
    }

    #[test]
    fn test_session_send_before_activate_fails() {
        // テスト項目: Connecting のセッションには送信できない
        // given (前提条件):
        let (session, _rx) = test_session();
        let message =
            ChatMessage::new("bob".to_string(), "alice".to_string(), "hi".to_string(), 0);

        // when (操作):
        let result = session.send(message);

        // then (期待する結果):
        assert_eq!(result, Err(SessionSendError::SessionClosed));
    }

    #[test]
    fn test_session_send_after_close_fails() {
        // テスト項目: Closed のセッションへの送信は no-op でエラー報告される
        // given (前提条件):
        let (session, _rx) = test_session();
        session.activate();
        session.close();
        let message =
            ChatMessage::new("bob".to_string(), "alice".to_string(), "hi".to_string(), 0);

        // when (操作):
        let result = session.send(message);

        // then (期待する結果):
        assert_eq!(result, Err(SessionSendError::SessionClosed));
    }

    #[test]
    fn test_session_send_channel_dropped_fails() {
        // テスト項目: 接続側の channel が破棄された場合は ChannelClosed
        // given (前提条件):
        let (session, rx) = test_session();
        session.activate();
        drop(rx);
        let message =
            ChatMessage::new("bob".to_string(), "alice".to_string(), "hi".to_string(), 0);

        // when (操作):
        let result = session.send(message);

        // then (期待する結果):
        assert_eq!(result, Err(SessionSendError::ChannelClosed));
    }
}
