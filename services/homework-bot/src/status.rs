//! Review statuses and the message rendered for each of them

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::BotError;

/// Review status of a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Verdict text sent to the chat for this status
    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomeworkStatus::Approved => write!(f, "approved"),
            HomeworkStatus::Reviewing => write!(f, "reviewing"),
            HomeworkStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(BotError::UnknownStatus(other.to_string())),
        }
    }
}

/// Render the chat message for a single homework record
pub fn parse_status(homework: &Value) -> crate::Result<String> {
    let name = homework
        .get("homework_name")
        .ok_or_else(|| BotError::MissingField("homework_name".to_string()))?;
    let status = homework
        .get("status")
        .ok_or_else(|| BotError::MissingField("status".to_string()))?;

    let status: HomeworkStatus = match status {
        Value::String(s) => s.parse()?,
        other => return Err(BotError::UnknownStatus(other.to_string())),
    };

    let name = match name {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    tracing::debug!("Homework \"{}\" is {}", name, status);

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}
