//! Provider kind enumeration.
//!
//! Defines [`ProviderKind`], the closed set of vendors the proxy can reach,
//! along with the JSON path at which each vendor's envelope carries the
//! generated text.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};

/// Identifies which upstream AI vendor the proxy should call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// OpenAI (chat completions envelope).
    OpenAI,
    /// Anthropic (messages envelope).
    Anthropic,
    /// Google (Gemini generateContent envelope).
    Google,
}

impl ProviderKind {
    /// Every provider, in display order.
    pub const ALL: &'static [ProviderKind] = &[Self::OpenAI, Self::Anthropic, Self::Google];

    /// Wire identifier sent to the proxy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::Anthropic => "anthropic",
            Self::Google => "google",
        }
    }

    /// JSON pointer to the generated text inside this provider's envelope.
    pub fn text_pointer(&self) -> &'static str {
        match self {
            Self::OpenAI => "/choices/0/message/content",
            Self::Anthropic => "/content/0/text",
            Self::Google => "/candidates/0/content/parts/0/text",
        }
    }

    /// The provider after this one in [`ProviderKind::ALL`], wrapping around.
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The provider before this one in [`ProviderKind::ALL`], wrapping around.
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    /// Matching is case-insensitive. Returns an error for unknown providers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAI),
            "anthropic" => Ok(Self::Anthropic),
            "google" => Ok(Self::Google),
            other => Err(anyhow!(
                "Unknown provider: {other}. Supported: openai, anthropic, google"
            )),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("OpenAI".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAI);
        assert_eq!("google".parse::<ProviderKind>().unwrap(), ProviderKind::Google);
        assert!("mistral".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_round_trips_wire_id() {
        for kind in ProviderKind::ALL {
            assert_eq!(kind.as_str().parse::<ProviderKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(ProviderKind::Google.next(), ProviderKind::OpenAI);
        assert_eq!(ProviderKind::OpenAI.prev(), ProviderKind::Google);
        assert_eq!(ProviderKind::OpenAI.next().prev(), ProviderKind::OpenAI);
    }
}
