use serde::Deserialize;
use std::fs;
use std::path::Path;
use urasei_engine::settings::{AstrologySettings, BaziSettings, EngineSettings, RetrogradeWindow};

pub const CONFIG_PATHS: [&str; 2] = ["configs/urasei.toml", "../../configs/urasei.toml"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BaziToml {
    #[serde(default)]
    strength_threshold: Option<f64>,
    #[serde(default)]
    balance_threshold: Option<f64>,
    #[serde(default)]
    branch_weight: Option<f64>,
    #[serde(default)]
    support_weight: Option<f64>,
}

impl BaziToml {
    fn into_settings(self) -> BaziSettings {
        let d = BaziSettings::default();
        BaziSettings {
            strength_threshold: self.strength_threshold.unwrap_or(d.strength_threshold),
            balance_threshold: self.balance_threshold.unwrap_or(d.balance_threshold),
            branch_weight: self.branch_weight.unwrap_or(d.branch_weight),
            support_weight: self.support_weight.unwrap_or(d.support_weight),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RetrogradeWindowToml {
    #[serde(default)]
    start: Option<f64>,
    #[serde(default)]
    end: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AstrologyToml {
    #[serde(default)]
    retrograde_window: Option<RetrogradeWindowToml>,
    #[serde(default)]
    retrograde_speed_factor: Option<f64>,
    #[serde(default)]
    transit_orb_scale: Option<f64>,
    #[serde(default)]
    exact_orb: Option<f64>,
    #[serde(default)]
    max_aspect_recommendations: Option<usize>,
}

impl AstrologyToml {
    fn into_settings(self) -> AstrologySettings {
        let d = AstrologySettings::default();
        let window = self.retrograde_window.unwrap_or_default();
        AstrologySettings {
            retrograde_window: RetrogradeWindow {
                start: window.start.unwrap_or(d.retrograde_window.start),
                end: window.end.unwrap_or(d.retrograde_window.end),
            },
            retrograde_speed_factor: self.retrograde_speed_factor.unwrap_or(d.retrograde_speed_factor),
            transit_orb_scale: self.transit_orb_scale.unwrap_or(d.transit_orb_scale),
            exact_orb: self.exact_orb.unwrap_or(d.exact_orb),
            max_aspect_recommendations: self
                .max_aspect_recommendations
                .unwrap_or(d.max_aspect_recommendations),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootConfigToml {
    #[serde(default)]
    bazi: Option<BaziToml>,
    #[serde(default)]
    astrology: Option<AstrologyToml>,
}

/// Try the common relative paths for `configs/urasei.toml`.
pub fn read_config_toml_text() -> anyhow::Result<String> {
    for p in &CONFIG_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load urasei.toml from {:?}", CONFIG_PATHS);
}

/// Settings from the first config file found, or the built-in defaults
/// when there is none. A file that exists but is invalid is an error.
pub fn load_engine_settings() -> anyhow::Result<EngineSettings> {
    match read_config_toml_text() {
        Ok(text) => parse_engine_settings(&text),
        Err(e) => {
            log::info!("{e}; using default engine settings");
            Ok(EngineSettings::default())
        }
    }
}

pub fn load_engine_settings_from(path: &Path) -> anyhow::Result<EngineSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    parse_engine_settings(&text)
}

/// Parse and validate. Missing sections and keys keep their defaults.
pub fn parse_engine_settings(text: &str) -> anyhow::Result<EngineSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse urasei.toml: {e}"))?;
    let settings = EngineSettings {
        bazi: root.bazi.unwrap_or_default().into_settings(),
        astrology: root.astrology.unwrap_or_default().into_settings(),
    };
    validate_engine_settings(&settings)?;
    log::debug!("Loaded engine settings: {:?}", settings);
    Ok(settings)
}

fn require_positive(name: &str, value: f64) -> anyhow::Result<()> {
    if !value.is_finite() || value <= 0.0 {
        anyhow::bail!("{name} must be a positive finite number, got {value}");
    }
    Ok(())
}

pub fn validate_engine_settings(settings: &EngineSettings) -> anyhow::Result<()> {
    let bazi = &settings.bazi;
    require_positive("bazi.strength_threshold", bazi.strength_threshold)?;
    require_positive("bazi.balance_threshold", bazi.balance_threshold)?;
    require_positive("bazi.branch_weight", bazi.branch_weight)?;
    require_positive("bazi.support_weight", bazi.support_weight)?;

    let astro = &settings.astrology;
    let window = astro.retrograde_window;
    if !(0.0..=1.0).contains(&window.start)
        || !(0.0..=1.0).contains(&window.end)
        || window.start >= window.end
    {
        anyhow::bail!(
            "astrology.retrograde_window must satisfy 0 <= start < end <= 1, got {}..{}",
            window.start,
            window.end
        );
    }
    require_positive("astrology.retrograde_speed_factor", astro.retrograde_speed_factor)?;
    require_positive("astrology.transit_orb_scale", astro.transit_orb_scale)?;
    if astro.transit_orb_scale > 1.0 {
        anyhow::bail!(
            "astrology.transit_orb_scale must be in (0, 1], got {}",
            astro.transit_orb_scale
        );
    }
    if !astro.exact_orb.is_finite() || astro.exact_orb < 0.0 {
        anyhow::bail!("astrology.exact_orb must be a non-negative finite number, got {}", astro.exact_orb);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_empty_file_is_default() {
        init_logger();
        assert_eq!(parse_engine_settings("").unwrap(), EngineSettings::default());
    }

    #[test]
    fn test_partial_override() {
        init_logger();
        let text = r#"
            [bazi]
            strength_threshold = 3.0

            [astrology]
            transit_orb_scale = 0.5

            [astrology.retrograde_window]
            start = 0.5
            end = 0.8
        "#;
        let settings = parse_engine_settings(text).unwrap();
        assert_eq!(settings.bazi.strength_threshold, 3.0);
        assert_eq!(settings.bazi.branch_weight, 0.5);
        assert_eq!(settings.astrology.transit_orb_scale, 0.5);
        assert_eq!(settings.astrology.retrograde_window.start, 0.5);
        assert_eq!(settings.astrology.exact_orb, 1.0);
        assert_eq!(settings.astrology.max_aspect_recommendations, 3);
    }

    #[test]
    fn test_rejects_bad_values() {
        init_logger();
        assert!(parse_engine_settings("[bazi]\nstrength_threshold = -1.0").is_err());
        assert!(parse_engine_settings("[astrology]\ntransit_orb_scale = 1.5").is_err());
        assert!(parse_engine_settings("[astrology]\nretrograde_window = { start = 0.9, end = 0.6 }").is_err());
        assert!(parse_engine_settings("[astrology]\nexact_orb = -0.5").is_err());
        assert!(parse_engine_settings("[tarot]\nenabled = true").is_err());
        assert!(parse_engine_settings("[bazi\n").is_err());
    }

    #[test]
    fn test_rejects_misspelled_keys() {
        init_logger();
        let err = parse_engine_settings("[bazi]\nstrenght_threshold = 3.0").unwrap_err();
        assert!(err.to_string().contains("strenght_threshold"));
        assert!(parse_engine_settings("[astrology]\ntransit_orb = 0.5").is_err());
        assert!(parse_engine_settings("[astrology.retrograde_window]\nbegin = 0.5").is_err());
    }

    #[test]
    fn test_window_edge_override() {
        init_logger();
        let settings = parse_engine_settings("[astrology.retrograde_window]\nend = 0.95").unwrap();
        assert_eq!(settings.astrology.retrograde_window.start, 0.6);
        assert_eq!(settings.astrology.retrograde_window.end, 0.95);
    }

    #[test]
    fn test_load_from_file() {
        init_logger();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[astrology]\nmax_aspect_recommendations = 5").unwrap();
        let settings = load_engine_settings_from(file.path()).unwrap();
        assert_eq!(settings.astrology.max_aspect_recommendations, 5);
        assert_eq!(settings.bazi, BaziSettings::default());
    }

    #[test]
    fn test_missing_file() {
        init_logger();
        let dir = tempfile::tempdir().unwrap();
        let err = load_engine_settings_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }
}
