use super::types::ChatMessage;

pub const TUTOR_SYSTEM_PROMPT: &str = "You are an English teacher helping beginners.";

pub const COFFEE_DIALOGUE_PROMPT: &str = "Give me a short English dialogue about buying coffee.";

/// The fixed conversation sent by `/api/chat`. Caller input is never mixed in.
pub fn coffee_dialogue() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(TUTOR_SYSTEM_PROMPT),
        ChatMessage::user(COFFEE_DIALOGUE_PROMPT),
    ]
}
