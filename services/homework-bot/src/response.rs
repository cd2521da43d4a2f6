//! Shape checks for the homework status API answer

use serde_json::Value;

use crate::BotError;

/// Check the answer shape and return its `homeworks` list unchanged
pub fn check_response(response: &Value) -> crate::Result<&Vec<Value>> {
    let Some(answer) = response.as_object() else {
        return Err(BotError::MalformedResponse("wrong list format".to_string()));
    };

    let Some(homeworks) = answer.get("homeworks") else {
        return Err(BotError::MalformedResponse("no homework list".to_string()));
    };

    if !answer.contains_key("current_date") {
        return Err(BotError::MalformedResponse("no current date".to_string()));
    }

    homeworks
        .as_array()
        .ok_or_else(|| BotError::MalformedResponse("homework list is not a list".to_string()))
}

/// Read the server timestamp the next request should start from
pub fn current_date(response: &Value) -> crate::Result<i64> {
    response
        .get("current_date")
        .and_then(Value::as_i64)
        .ok_or_else(|| BotError::MalformedResponse("current date is not an integer".to_string()))
}
