use serde::{Deserialize, Serialize};

/// One message in a chat session. The full ordered history lives in client
/// memory and travels with every turn; the gateway holds no session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Assistant reply as returned by the conversational capability.
/// The text is relayed unmodified; the client renders it as lightweight
/// markdown, never as executable content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}
