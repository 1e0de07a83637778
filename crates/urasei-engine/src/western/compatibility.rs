use crate::western::signs::ZodiacSign;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityTier {
    Best,
    Good,
    Normal,
    Challenging,
}

impl CompatibilityTier {
    /// Score band drawn from, in percent.
    pub fn score_range(self) -> RangeInclusive<u8> {
        match self {
            CompatibilityTier::Best => 85..=99,
            CompatibilityTier::Good => 70..=84,
            CompatibilityTier::Normal => 55..=69,
            CompatibilityTier::Challenging => 40..=54,
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            CompatibilityTier::Best => {
                "Being your natural selves will deepen the bond. Praise each other's strengths freely."
            }
            CompatibilityTier::Good => {
                "Value communication and respect each other's values; that is the key to growing together."
            }
            CompatibilityTier::Normal => {
                "Look for the good in your partner and engage actively to grow closer."
            }
            CompatibilityTier::Challenging => {
                "Don't treat your differences as negatives. Learning from each other makes for a unique, stimulating relationship."
            }
        }
    }

    fn analysis(self, user: ZodiacSign, partner: ZodiacSign) -> String {
        let (a, b) = (user.name(), partner.name());
        match self {
            CompatibilityTier::Best => format!(
                "{} and {} are a perfect match! Your traits fit together beautifully and can build a wonderful partnership.",
                a, b
            ),
            CompatibilityTier::Good => format!(
                "{} and {} are a good match. Understanding each other leads to a fulfilling relationship.",
                a, b
            ),
            CompatibilityTier::Normal => format!(
                "{} and {} are an average match. With effort on both sides you can build a lovely relationship.",
                a, b
            ),
            CompatibilityTier::Challenging => format!(
                "{} and {} are a somewhat challenging pair. Accepting your differences lets you grow together.",
                a, b
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub user_sign: ZodiacSign,
    pub partner_sign: ZodiacSign,
    pub tier: CompatibilityTier,
    /// Percent score within the tier's band
    pub compatibility: u8,
    pub analysis: String,
    pub advice: String,
}

/// Tier of a pairing from the user's side. Groups are checked best, good,
/// challenging; anything else is normal.
pub fn compatibility_tier(user: ZodiacSign, partner: ZodiacSign) -> CompatibilityTier {
    let groups = &user.meta().compatibility;
    if groups.best.contains(&partner) {
        CompatibilityTier::Best
    } else if groups.good.contains(&partner) {
        CompatibilityTier::Good
    } else if groups.challenging.contains(&partner) {
        CompatibilityTier::Challenging
    } else {
        CompatibilityTier::Normal
    }
}

pub fn calculate_compatibility<R: Rng + ?Sized>(
    user: ZodiacSign,
    partner: ZodiacSign,
    rng: &mut R,
) -> CompatibilityResult {
    let tier = compatibility_tier(user, partner);
    CompatibilityResult {
        user_sign: user,
        partner_sign: partner,
        tier,
        compatibility: rng.gen_range(tier.score_range()),
        analysis: tier.analysis(user, partner),
        advice: tier.advice().to_string(),
    }
}
