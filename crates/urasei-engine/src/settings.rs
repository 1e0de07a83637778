//! Tuning constants for the calculators.
//!
//! The values are empirical thresholds, not domain law. They are kept here so
//! they can be adjusted (or loaded from config) without touching the formulas.

use serde::{Deserialize, Serialize};

/// Self-strength above which the day master counts as strong.
pub const STRENGTH_THRESHOLD: f64 = 2.5;
/// Mean element weight above which a chart reads as balanced.
pub const BALANCE_THRESHOLD: f64 = 2.0;
/// Weight of a branch's element relative to a stem's.
pub const BRANCH_WEIGHT: f64 = 0.5;
/// Share of the generating element added to self-strength.
pub const SUPPORT_WEIGHT: f64 = 0.5;

/// Fraction of the retrograde cycle during which a body moves backwards.
pub const RETROGRADE_WINDOW: (f64, f64) = (0.6, 0.9);
/// Apparent speed multiplier while retrograde (applied after negation).
pub const RETROGRADE_SPEED_FACTOR: f64 = 0.3;
/// Transit orbs are this fraction of the natal orbs.
pub const TRANSIT_ORB_SCALE: f64 = 0.7;
/// Orb at or below which an aspect counts as exact.
pub const EXACT_ORB: f64 = 1.0;
/// Aspect-specific lines added after the moon phase line.
pub const MAX_ASPECT_RECOMMENDATIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaziSettings {
    pub strength_threshold: f64,
    pub balance_threshold: f64,
    pub branch_weight: f64,
    pub support_weight: f64,
}

impl Default for BaziSettings {
    fn default() -> Self {
        Self {
            strength_threshold: STRENGTH_THRESHOLD,
            balance_threshold: BALANCE_THRESHOLD,
            branch_weight: BRANCH_WEIGHT,
            support_weight: SUPPORT_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetrogradeWindow {
    pub start: f64,
    pub end: f64,
}

impl RetrogradeWindow {
    /// Open interval check: the window edges are not retrograde.
    pub fn contains(&self, progress: f64) -> bool {
        progress > self.start && progress < self.end
    }
}

impl Default for RetrogradeWindow {
    fn default() -> Self {
        Self {
            start: RETROGRADE_WINDOW.0,
            end: RETROGRADE_WINDOW.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AstrologySettings {
    pub retrograde_window: RetrogradeWindow,
    pub retrograde_speed_factor: f64,
    pub transit_orb_scale: f64,
    pub exact_orb: f64,
    pub max_aspect_recommendations: usize,
}

impl Default for AstrologySettings {
    fn default() -> Self {
        Self {
            retrograde_window: RetrogradeWindow::default(),
            retrograde_speed_factor: RETROGRADE_SPEED_FACTOR,
            transit_orb_scale: TRANSIT_ORB_SCALE,
            exact_orb: EXACT_ORB,
            max_aspect_recommendations: MAX_ASPECT_RECOMMENDATIONS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub bazi: BaziSettings,
    pub astrology: AstrologySettings,
}
