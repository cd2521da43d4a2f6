//! BDD step definitions for the credential check feature

use cucumber::{given, then, when};

use homework_bot::check_tokens;

use crate::world::BotWorld;

#[given("all three credentials are set")]
fn all_credentials(world: &mut BotWorld) {
    world.credentials.practicum_token = "practicum".to_string();
    world.credentials.telegram_token = "telegram".to_string();
    world.credentials.telegram_chat_id = "12345".to_string();
}

#[given(expr = "the {string} credential is empty")]
fn credential_empty(world: &mut BotWorld, name: String) {
    match name.as_str() {
        "PRACTICUM_TOKEN" => world.credentials.practicum_token.clear(),
        "TELEGRAM_TOKEN" => world.credentials.telegram_token.clear(),
        "TELEGRAM_CHAT_ID" => world.credentials.telegram_chat_id.clear(),
        other => panic!("Unknown credential: {}", other),
    }
}

#[when("the credentials are checked")]
fn check(world: &mut BotWorld) {
    world.tokens_ok = Some(check_tokens(&world.credentials));
}

#[then("the check should pass")]
fn check_passes(world: &mut BotWorld) {
    assert_eq!(world.tokens_ok, Some(true));
}

#[then("the check should fail")]
fn check_fails(world: &mut BotWorld) {
    assert_eq!(world.tokens_ok, Some(false));
}
