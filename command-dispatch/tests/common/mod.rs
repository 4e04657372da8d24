pub mod mock_bot;

use bot_core::{Chat, Message, User};

pub fn text_message(text: &str) -> Message {
    Message::from_text(
        "test_message_id",
        User::new(123, Some("test_user".to_string())),
        Chat::private(456),
        text,
    )
}
