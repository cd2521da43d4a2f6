//! BDD step definitions for the polling loop feature

use std::sync::Arc;
use std::time::Duration;

use cucumber::gherkin::Step;
use cucumber::{given, then, when};
use tokio_util::sync::CancellationToken;

use homework_bot::engine::Engine;
use homework_bot::practicum::PracticumClient;

use crate::steps::support::{RecordingNotifier, ScriptedApi};
use crate::world::BotWorld;

const ENDPOINT: &str = "https://example.test/api/user_api/homework_statuses/";

fn build_engine(world: &BotWorld, retry_period: Duration, cancel: CancellationToken) -> Engine {
    let api = world.api.clone().expect("API not set");
    let notifier = world
        .notifier
        .clone()
        .unwrap_or_else(|| Arc::new(RecordingNotifier::default()));
    let client = PracticumClient::new(ENDPOINT, "token", api);
    Engine::new(client, notifier, retry_period, world.start_cursor, cancel)
}

fn recording_notifier(world: &mut BotWorld) -> Arc<RecordingNotifier> {
    world
        .notifier
        .get_or_insert_with(|| Arc::new(RecordingNotifier::default()))
        .clone()
}

#[given(expr = "the cursor starts at {int}")]
fn cursor_starts(world: &mut BotWorld, cursor: i64) {
    world.start_cursor = cursor;
}

#[given("the status API replies with")]
fn api_replies_with(world: &mut BotWorld, step: &Step) {
    let body = step.docstring.as_ref().expect("missing docstring");
    world.api = Some(Arc::new(ScriptedApi::replying(200, body)));
}

#[given(expr = "the status API replies with status {int}")]
fn api_replies_status(world: &mut BotWorld, status: u16) {
    world.api = Some(Arc::new(ScriptedApi::replying(status, "")));
}

#[given("the status API is unreachable")]
fn api_unreachable(world: &mut BotWorld) {
    world.api = Some(Arc::new(ScriptedApi::unreachable("connection refused")));
}

#[given("the chat rejects every message")]
fn chat_rejects(world: &mut BotWorld) {
    world.notifier = Some(Arc::new(RecordingNotifier::failing()));
}

#[when("the bot runs one iteration")]
async fn run_one_iteration(world: &mut BotWorld) {
    recording_notifier(world);
    let mut engine = build_engine(world, Duration::from_secs(600), CancellationToken::new());
    engine.run_iteration().await;
    world.engine = Some(engine);
}

#[when(expr = "the bot runs until {int} notifications were sent")]
async fn run_until_notified(world: &mut BotWorld, count: usize) {
    // Cancellation fires from inside the last delivery, so the loop stops
    // at the following sleep without depending on wall-clock timing
    let cancel = CancellationToken::new();
    world.notifier = Some(Arc::new(RecordingNotifier::stopping_after(
        count,
        cancel.clone(),
    )));
    let mut engine = build_engine(world, Duration::from_millis(1), cancel);
    engine.run().await;
    world.engine = Some(engine);
}

#[then("no notification should be sent")]
fn no_notification(world: &mut BotWorld) {
    let notifier = world.notifier.as_ref().expect("notifier not set");
    assert!(notifier.messages().is_empty(), "{:?}", notifier.messages());
}

#[then(expr = "exactly one notification should be sent: {string}")]
fn one_notification(world: &mut BotWorld, expected: String) {
    let notifier = world.notifier.as_ref().expect("notifier not set");
    assert_eq!(notifier.messages(), vec![expected]);
}

#[then(expr = "every notification should start with {string}")]
fn notifications_start_with(world: &mut BotWorld, prefix: String) {
    let notifier = world.notifier.as_ref().expect("notifier not set");
    let messages = notifier.messages();
    assert!(!messages.is_empty());
    for message in messages {
        assert!(message.starts_with(&prefix), "{}", message);
    }
}

#[then(expr = "the cursor should be {int}")]
fn cursor_is(world: &mut BotWorld, expected: i64) {
    let engine = world.engine.as_ref().expect("engine not run");
    assert_eq!(engine.cursor(), expected);
}

#[then(expr = "the status API should have been called {int} times")]
fn api_called(world: &mut BotWorld, times: usize) {
    let api = world.api.as_ref().expect("API not set");
    assert_eq!(api.get_count(), times);
}
