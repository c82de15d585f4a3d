//! Service tiers and the model parameters each one selects.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Cheaper, faster models.
    Tier1,
    /// Premium models.
    Tier2,
}

/// Model and image parameters bound to one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierProfile {
    pub chat_model: &'static str,
    pub image_model: &'static str,
    pub image_quality: &'static str,
    pub image_size: &'static str,
}

static TIER1_PROFILE: TierProfile = TierProfile {
    chat_model: "gpt-3.5-turbo",
    image_model: "gpt-image-1-mini",
    image_quality: "low",
    image_size: "1024x1024",
};

static TIER2_PROFILE: TierProfile = TierProfile {
    chat_model: "gpt-4o-mini",
    image_model: "gpt-image-1.5",
    image_quality: "high",
    image_size: "1024x1024",
};

impl Tier {
    pub const ALL: [Tier; 2] = [Tier::Tier1, Tier::Tier2];

    /// Identifier used as the route prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Tier1 => "tier1",
            Tier::Tier2 => "tier2",
        }
    }

    pub fn profile(&self) -> &'static TierProfile {
        match self {
            Tier::Tier1 => &TIER1_PROFILE,
            Tier::Tier2 => &TIER2_PROFILE,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
