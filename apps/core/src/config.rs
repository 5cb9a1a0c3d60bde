//! Chat configuration.
//!
//! Values come from CLI flags with environment fallbacks (a `.env` file is
//! loaded first by the binary) and are validated before any actor starts.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::{Validate, ValidationError};

use crate::cli::Args;
use crate::error::AppError;

/// Runtime configuration for a chat session.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[validate(schema(function = "validate_delay_window"))]
pub struct ChatConfig {
    /// Display name of the assistant.
    #[validate(length(min = 1))]
    pub assistant_name: String,
    /// Lower bound of the simulated typing delay.
    #[validate(range(max = 10000))]
    pub typing_delay_min_ms: u64,
    /// Upper bound of the simulated typing delay.
    #[validate(range(max = 10000))]
    pub typing_delay_max_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            assistant_name: "Nexus AI Assistant".to_string(),
            typing_delay_min_ms: 800,
            typing_delay_max_ms: 2000,
        }
    }
}

fn validate_delay_window(config: &ChatConfig) -> Result<(), ValidationError> {
    if config.typing_delay_min_ms > config.typing_delay_max_ms {
        let mut err = ValidationError::new("delay_window");
        err.message = Some("typing delay minimum exceeds maximum".into());
        return Err(err);
    }
    Ok(())
}

impl ChatConfig {
    /// Builds and validates the configuration from parsed arguments.
    pub fn from_args(args: &Args) -> Result<Self, AppError> {
        let (min, max) = if args.no_delay {
            (0, 0)
        } else {
            (args.typing_delay_min_ms, args.typing_delay_max_ms)
        };

        let config = Self {
            assistant_name: args.assistant_name.trim().to_string(),
            typing_delay_min_ms: min,
            typing_delay_max_ms: max,
        };
        config.validate()?;
        Ok(config)
    }

    /// Configuration with the typing delay disabled.
    #[allow(dead_code)]
    pub fn instant() -> Self {
        Self {
            typing_delay_min_ms: 0,
            typing_delay_max_ms: 0,
            ..Self::default()
        }
    }

    pub fn typing_delay(&self) -> TypingDelay {
        TypingDelay {
            min_ms: self.typing_delay_min_ms,
            max_ms: self.typing_delay_max_ms,
        }
    }
}

/// Randomized pause before a reply is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingDelay {
    min_ms: u64,
    max_ms: u64,
}

impl TypingDelay {
    #[allow(dead_code)]
    pub fn none() -> Self {
        Self { min_ms: 0, max_ms: 0 }
    }

    pub fn is_none(&self) -> bool {
        self.max_ms == 0
    }

    /// Draws a delay uniformly from `[min, max]`.
    pub fn sample(&self) -> Duration {
        if self.min_ms >= self.max_ms {
            return Duration::from_millis(self.max_ms.min(self.min_ms));
        }
        let millis = rand::thread_rng().gen_range(self.min_ms..=self.max_ms);
        Duration::from_millis(millis)
    }
}
