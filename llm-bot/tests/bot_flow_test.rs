//! End-to-end dispatch through the registered handlers with a recording Bot.

mod common;

use bot_core::{Chat, Message, User};
use common::mock_bot::MockBot;
use common::text_message;
use llm_bot::build_dispatcher;

#[tokio::test]
async fn test_start_command_sends_welcome() {
    let bot = MockBot::new();
    let dispatcher = build_dispatcher(bot.clone(), None);

    let reply = dispatcher
        .dispatch(&text_message(42, "/start"))
        .await
        .unwrap()
        .expect("start must reply");

    assert_eq!(reply.chat.id, 42);
    assert!(reply.text.contains("Добро пожаловать!"));
    assert!(reply.text.contains("/start"));
    assert!(reply.text.contains("/help"));

    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0], (42, reply.text));
}

#[tokio::test]
async fn test_help_command_sends_help_with_version() {
    let bot = MockBot::new();
    let dispatcher = build_dispatcher(bot.clone(), None);

    let reply = dispatcher
        .dispatch(&text_message(42, "/help extra args"))
        .await
        .unwrap()
        .expect("help must reply");

    assert!(reply.text.contains("Справка по боту"));
    assert!(reply.text.contains("/start"));
    assert!(reply.text.contains("/help"));
    assert!(reply.text.contains("v0.1.0"));
}

#[tokio::test]
async fn test_plain_text_gets_fallback() {
    let bot = MockBot::new();
    let dispatcher = build_dispatcher(bot.clone(), None);

    let reply = dispatcher
        .dispatch(&text_message(42, "Hello, bot!"))
        .await
        .unwrap()
        .expect("fallback must reply");

    assert!(reply.text.contains("не умею обрабатывать"));
    assert!(reply.text.contains("/start"));
    assert!(reply.text.contains("/help"));
}

#[tokio::test]
async fn test_non_text_and_case_variants_get_fallback() {
    let bot = MockBot::new();
    let dispatcher = build_dispatcher(bot.clone(), None);

    let media = Message::without_text("m1", User::unknown(), Chat::private(7));
    let upper = text_message(42, "/Start");
    let glued = text_message(42, "/starting");

    for msg in [media, upper, glued] {
        let reply = dispatcher.dispatch(&msg).await.unwrap().unwrap();
        assert!(reply.text.contains("не умею обрабатывать"));
    }
    assert_eq!(bot.sent().len(), 3);
}

#[tokio::test]
async fn test_command_addressed_to_bot() {
    let bot = MockBot::new();
    let dispatcher = build_dispatcher(bot.clone(), Some("my_llm_bot".to_string()));

    let reply = dispatcher
        .dispatch(&text_message(42, "/help@my_llm_bot"))
        .await
        .unwrap()
        .unwrap();
    assert!(reply.text.contains("Справка по боту"));

    let reply = dispatcher
        .dispatch(&text_message(42, "/help@other_bot"))
        .await
        .unwrap()
        .unwrap();
    assert!(reply.text.contains("не умею обрабатывать"));
}

#[tokio::test]
async fn test_repeated_dispatch_gives_same_reply() {
    let bot = MockBot::new();
    let dispatcher = build_dispatcher(bot.clone(), None);
    let msg = text_message(42, "/start");

    let first = dispatcher.dispatch(&msg).await.unwrap();
    let second = dispatcher.dispatch(&msg).await.unwrap();

    assert_eq!(first, second);
    let sent = bot.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0], sent[1]);
}

#[test]
fn test_routes_registered_in_order() {
    let dispatcher = build_dispatcher(MockBot::new(), None);

    let names: Vec<&str> = dispatcher.routes().iter().map(|r| r.handler_name()).collect();
    assert_eq!(names, ["StartHandler", "HelpHandler", "FallbackHandler"]);
    assert!(dispatcher.has_catch_all());
}
