use serde::{Deserialize, Serialize};
use std::fmt;

/// Body sent to the holiday lookup service.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub id_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl LookupRequest {
    /// An empty display name is not sent.
    pub fn new(id_number: &str, display_name: &str) -> Self {
        LookupRequest {
            id_number: id_number.to_string(),
            name: (!display_name.is_empty()).then(|| display_name.to_string()),
        }
    }
}

/// Response of the holiday lookup service. Missing and `null` fields are `None`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub message: Option<String>,
    pub description: Option<String>,
    /// One holiday per line.
    pub all_holidays: Option<String>,
    pub year: Option<LookupYear>,
}

/// The service reports the year either as a string or as any JSON number.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum LookupYear {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for LookupYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // 2024.0 reads as 2024
            LookupYear::Number(year) => match year.as_f64() {
                Some(float) if year.is_f64() && float.fract() == 0.0 => {
                    write!(f, "{}", float as i64)
                }
                _ => write!(f, "{year}"),
            },
            LookupYear::Text(year) => f.write_str(year),
        }
    }
}

impl LookupResult {
    const INVALID_MARKER: &'static str = "invalid";

    /// The service flags identity numbers it rejects with a message containing "invalid".
    pub fn rejection_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|message| message.to_lowercase().contains(Self::INVALID_MARKER))
    }

    pub fn holidays(&self) -> Vec<String> {
        match self.all_holidays.as_deref() {
            Some(all_holidays) if !all_holidays.is_empty() => {
                all_holidays.split('\n').map(str::to_string).collect()
            }
            _ => vec![],
        }
    }
}
