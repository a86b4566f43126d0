//! Coverage levels offered on a quote. Descriptive only; they do not change
//! the premium.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Coverage {
    #[default]
    Comprehensive,
    FireAndTheft,
    ThirdParty,
}

#[derive(Debug, Error)]
#[error("unknown coverage '{0}' (expected comprehensive, fire-and-theft or third-party)")]
pub struct CoverageParseError(String);

impl Coverage {
    pub const ALL: [Coverage; 3] = [
        Coverage::Comprehensive,
        Coverage::FireAndTheft,
        Coverage::ThirdParty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Comprehensive => "comprehensive",
            Self::FireAndTheft => "fire-and-theft",
            Self::ThirdParty => "third-party",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Comprehensive => "Comprehensive",
            Self::FireAndTheft => "Third Party, Fire & Theft",
            Self::ThirdParty => "Third Party Property",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Comprehensive => {
                "Covers damage to your vehicle and other people's property, \
                 including accidents, theft, fire, storms and flood."
            }
            Self::FireAndTheft => {
                "Covers damage you cause to other people's property, plus \
                 your own vehicle if it is stolen or damaged by fire."
            }
            Self::ThirdParty => {
                "Covers damage you cause to other people's vehicles and \
                 property. Your own vehicle is not covered."
            }
        }
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Coverage {
    type Err = CoverageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "comprehensive" => Ok(Self::Comprehensive),
            "fire-and-theft" | "fire_and_theft" => Ok(Self::FireAndTheft),
            "third-party" | "third_party" => Ok(Self::ThirdParty),
            other => Err(CoverageParseError(other.to_string())),
        }
    }
}
