pub mod compatibility;
pub mod signs;

pub use compatibility::{
    calculate_compatibility, compatibility_tier, CompatibilityResult, CompatibilityTier,
};
pub use signs::{normalize_degrees, sun_sign_for, SignElement, ZodiacSign, ALL_SIGNS};
