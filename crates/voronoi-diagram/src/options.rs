//! Parameter types for the three skeletonization strategies.
//!
//! Every strategy shares the same front end (gray conversion with a
//! selectable channel order, then a fixed threshold) and differs only in
//! how its iteration cap is expressed. All structs deserialize from JSON
//! with missing fields falling back to [`Default`].

use crate::error::{DiagramError, DiagramResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use voronoi_core::ChannelOrder;

/// Gray level a pixel must exceed to count as foreground.
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Skeletonization strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Two-pass thinning to a Voronoi skeleton
    #[default]
    Voronoi,
    /// Zhang–Suen thinning
    Thinning,
    /// Morphological-residue skeleton
    Skeleton,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Voronoi, Strategy::Thinning, Strategy::Skeleton];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Voronoi => "voronoi",
            Strategy::Thinning => "thinning",
            Strategy::Skeleton => "skeleton",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown strategy: {s}"))
    }
}

/// Options for [`crate::voronoi`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoronoiOptions {
    pub threshold: u8,
    pub channel_order: ChannelOrder,
    /// Cap on outer iterations; `None` uses `foreground + 1`.
    pub max_iterations: Option<u32>,
}

impl Default for VoronoiOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            channel_order: ChannelOrder::default(),
            max_iterations: None,
        }
    }
}

/// Options for [`crate::thinning`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThinningOptions {
    pub threshold: u8,
    pub channel_order: ChannelOrder,
    /// Zhang–Suen iterations; 0 runs until nothing changes.
    pub max_iterations: u32,
}

impl Default for ThinningOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            channel_order: ChannelOrder::default(),
            max_iterations: 0,
        }
    }
}

/// Options for [`crate::skeletonize`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkeletonOptions {
    pub threshold: u8,
    pub channel_order: ChannelOrder,
    /// Cap on erosion rounds; `None` uses `max(width, height) + 1`.
    pub max_iterations: Option<u32>,
}

impl Default for SkeletonOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            channel_order: ChannelOrder::default(),
            max_iterations: None,
        }
    }
}

/// Strategy selection plus the options of every strategy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramOptions {
    pub strategy: Strategy,
    pub voronoi: VoronoiOptions,
    pub thinning: ThinningOptions,
    pub skeleton: SkeletonOptions,
}

impl DiagramOptions {
    /// Apply one threshold to all strategies.
    pub fn set_threshold(&mut self, threshold: u8) {
        self.voronoi.threshold = threshold;
        self.thinning.threshold = threshold;
        self.skeleton.threshold = threshold;
    }

    /// Apply one channel order to all strategies.
    pub fn set_channel_order(&mut self, order: ChannelOrder) {
        self.voronoi.channel_order = order;
        self.thinning.channel_order = order;
        self.skeleton.channel_order = order;
    }

    /// Apply one iteration cap to all strategies.
    pub fn set_max_iterations(&mut self, max_iterations: u32) {
        self.voronoi.max_iterations = Some(max_iterations);
        self.thinning.max_iterations = max_iterations;
        self.skeleton.max_iterations = Some(max_iterations);
    }
}

/// Load [`DiagramOptions`] from a JSON file.
pub fn load_options(path: &Path) -> DiagramResult<DiagramOptions> {
    let data = fs::read_to_string(path).map_err(|source| DiagramError::OptionsRead {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| DiagramError::OptionsParse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = DiagramOptions::default();
        assert_eq!(opts.strategy, Strategy::Voronoi);
        assert_eq!(opts.voronoi.threshold, 127);
        assert_eq!(opts.voronoi.channel_order, ChannelOrder::Rgb);
        assert_eq!(opts.voronoi.max_iterations, None);
        assert_eq!(opts.thinning.max_iterations, 0);
        assert_eq!(opts.skeleton.max_iterations, None);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let json = r#"{
            "strategy": "thinning",
            "voronoi": { "channel_order": "bgr" },
            "thinning": { "threshold": 200, "max_iterations": 4 }
        }"#;
        let opts: DiagramOptions = serde_json::from_str(json).unwrap();
        assert_eq!(opts.strategy, Strategy::Thinning);
        assert_eq!(opts.voronoi.channel_order, ChannelOrder::Bgr);
        assert_eq!(opts.voronoi.threshold, 127);
        assert_eq!(opts.thinning.threshold, 200);
        assert_eq!(opts.thinning.max_iterations, 4);
        assert_eq!(opts.skeleton, SkeletonOptions::default());
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!(serde_json::from_str::<DiagramOptions>(r#"{"strategy":"medial"}"#).is_err());
        assert!("medial".parse::<Strategy>().is_err());
        assert_eq!("Skeleton".parse::<Strategy>(), Ok(Strategy::Skeleton));
    }

    #[test]
    fn test_setters_reach_every_strategy() {
        let mut opts = DiagramOptions::default();
        opts.set_threshold(10);
        opts.set_channel_order(ChannelOrder::Bgr);
        opts.set_max_iterations(3);
        assert_eq!(opts.skeleton.threshold, 10);
        assert_eq!(opts.thinning.channel_order, ChannelOrder::Bgr);
        assert_eq!(opts.voronoi.max_iterations, Some(3));
        assert_eq!(opts.thinning.max_iterations, 3);
    }

    #[test]
    fn test_load_options_missing_file() {
        let err = load_options(Path::new("/nonexistent/voronoi.json")).unwrap_err();
        assert!(matches!(err, DiagramError::OptionsRead { .. }));
    }
}
