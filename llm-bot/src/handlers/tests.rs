//! Unit tests for StartHandler, HelpHandler and FallbackHandler.

use bot_core::{Chat, Handler, HandlerResponse, Message, User};

use super::fallback::preview;
use super::texts::{FALLBACK_TEXT, HELP_TEXT, WELCOME_TEXT};
use super::{FallbackHandler, HelpHandler, StartHandler};

fn sample_message(text: &str) -> Message {
    Message::from_text("1", User::new(42, Some("tester".to_string())), Chat::private(42), text)
}

fn reply_text(response: HandlerResponse) -> String {
    match response {
        HandlerResponse::Reply(text) => text,
        HandlerResponse::NoReply => panic!("expected a reply"),
    }
}

#[tokio::test]
async fn test_start_handler_replies_with_welcome() {
    let text = reply_text(StartHandler.handle(&sample_message("/start")).await.unwrap());

    assert_eq!(text, WELCOME_TEXT);
    assert!(text.contains("Добро пожаловать!"));
    assert!(text.contains("/start"));
    assert!(text.contains("/help"));
}

#[tokio::test]
async fn test_start_handler_tolerates_unknown_sender() {
    let msg = Message::from_text("1", User::unknown(), Chat::private(42), "/start");
    let text = reply_text(StartHandler.handle(&msg).await.unwrap());
    assert_eq!(text, WELCOME_TEXT);
}

#[tokio::test]
async fn test_help_handler_contains_commands_and_version() {
    let text = reply_text(HelpHandler.handle(&sample_message("/help")).await.unwrap());

    assert_eq!(text, HELP_TEXT);
    assert!(text.contains("Справка по боту"));
    assert!(text.contains("/start"));
    assert!(text.contains("/help"));
    assert!(text.contains("v0.1.0"));
}

#[tokio::test]
async fn test_fallback_handler_for_text_and_media() {
    let text = reply_text(FallbackHandler.handle(&sample_message("Hello, bot!")).await.unwrap());
    assert_eq!(text, FALLBACK_TEXT);
    assert!(text.contains("не умею обрабатывать"));
    assert!(text.contains("/start"));
    assert!(text.contains("/help"));

    let media = Message::without_text("2", User::new(42, None), Chat::private(42));
    let text = reply_text(FallbackHandler.handle(&media).await.unwrap());
    assert_eq!(text, FALLBACK_TEXT);
}

#[test]
fn test_preview_is_char_safe() {
    assert_eq!(preview("short", 50), "short");
    assert_eq!(preview("абвгд", 3), "абв");
    let long = "x".repeat(80);
    assert_eq!(preview(&long, 50).len(), 50);
}

#[test]
fn test_texts_are_html_safe() {
    for text in [WELCOME_TEXT, HELP_TEXT, FALLBACK_TEXT] {
        assert!(!text.contains('<'));
        assert!(!text.contains('&'));
    }
}
