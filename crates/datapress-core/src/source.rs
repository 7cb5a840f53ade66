use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SourceError;

/// Canonical source identifiers used to tag combined-export records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceId {
    Weather,
    Stocks,
    News,
    Images,
    Covid,
}

impl SourceId {
    /// Fixed emission order for combined exports, independent of request
    /// parameter order and of fetch completion order.
    pub const COMBINED_PRIORITY: [Self; 4] = [Self::Weather, Self::Stocks, Self::News, Self::Covid];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Stocks => "stocks",
            Self::News => "news",
            Self::Images => "images",
            Self::Covid => "covid",
        }
    }
}

impl Display for SourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceId {
    type Err = SourceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "weather" => Ok(Self::Weather),
            "stocks" => Ok(Self::Stocks),
            "news" => Ok(Self::News),
            "images" => Ok(Self::Images),
            "covid" => Ok(Self::Covid),
            other => Err(SourceError::invalid_request(format!(
                "invalid source '{other}', expected one of weather, stocks, news, images, covid"
            ))),
        }
    }
}
