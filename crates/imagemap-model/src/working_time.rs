use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Estimated time a learner needs to answer a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WorkingTime {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl WorkingTime {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Result<Self, ModelError> {
        if minutes > 59 || seconds > 59 {
            return Err(ModelError::InvalidWorkingTime(format!(
                "{hours:02}:{minutes:02}:{seconds:02}"
            )));
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    #[must_use]
    pub fn hours(&self) -> u32 {
        self.hours
    }

    #[must_use]
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    #[must_use]
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// ISO 8601 duration as used in `duration` elements of QTI items.
    #[must_use]
    pub fn to_qti_duration(&self) -> String {
        format!("P0Y0M0DT{}H{}M{}S", self.hours, self.minutes, self.seconds)
    }
}

impl Default for WorkingTime {
    fn default() -> Self {
        Self {
            hours: 0,
            minutes: 1,
            seconds: 0,
        }
    }
}

impl fmt::Display for WorkingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl FromStr for WorkingTime {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidWorkingTime(s.to_owned());
        let mut parts = s.trim().split(':').map(str::parse::<u32>);
        let (Some(Ok(hours)), Some(Ok(minutes)), Some(Ok(seconds)), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        Self::new(hours, minutes, seconds).map_err(|_| invalid())
    }
}

impl TryFrom<String> for WorkingTime {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WorkingTime> for String {
    fn from(value: WorkingTime) -> Self {
        value.to_string()
    }
}
