pub mod mock_bot;

use bot_core::{Chat, Message, User};

/// Text message from user `user_id` in their private chat.
pub fn text_message(user_id: i64, text: &str) -> Message {
    Message::from_text(
        "test_message_id",
        User::new(user_id, Some("test_user".to_string())),
        Chat::private(user_id),
        text,
    )
}
