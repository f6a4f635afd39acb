//! WebSocket message DTOs for the relay.

use serde::{Deserialize, Serialize};

use crate::domain::ChatMessage;

/// Message type enum
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MessageType {
    /// Inbound submission (client → server)
    #[serde(rename = "chat.send")]
    ChatSend,
    /// Outbound delivery into the receiver's inbox (server → client)
    #[serde(rename = "chat.message")]
    ChatMessage,
}

/// Inbound frame: a client submits one message for relay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitMessage {
    pub r#type: MessageType,
    pub sender: String,
    pub receiver: String,
    pub content: String,
    pub timestamp: i64,
}

impl SubmitMessage {
    /// Convert the decoded frame into the domain message.
    pub fn into_chat_message(self) -> ChatMessage {
        ChatMessage::new(self.sender, self.receiver, self.content, self.timestamp)
    }
}

/// Outbound frame: one delivery to a receiving session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryMessage {
    pub r#type: MessageType,
    pub sender: String,
    pub receiver: String,
    pub content: String,
    pub timestamp: i64,
}

impl From<ChatMessage> for DeliveryMessage {
    fn from(message: ChatMessage) -> Self {
        Self {
            r#type: MessageType::ChatMessage,
            sender: message.sender,
            receiver: message.receiver,
            content: message.content,
            timestamp: message.timestamp,
        }
    }
}
