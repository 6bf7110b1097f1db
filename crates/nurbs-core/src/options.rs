//! Curve evaluation options, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NurbsError, Result};
use crate::traits::Validate;

/// Default number of parameter samples per evaluation.
pub const DEFAULT_SAMPLES: usize = 100;
/// Default curve degree (cubic).
pub const DEFAULT_DEGREE: usize = 3;
/// Sample count from which the per-sample loop runs in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// How the upper end of the parameter domain is handled.
///
/// Basis functions are half-open on every knot span, so at `t == t_max` all of
/// them vanish. `Trim` keeps that convention and drops the last sample; `Close`
/// closes the final span so the curve ends exactly on the last control point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointPolicy {
    #[default]
    Trim,
    Close,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveOptions {
    /// Number of evenly spaced parameter values (at least 2).
    pub samples: usize,
    /// Polynomial degree of the basis functions.
    pub degree: usize,
    pub endpoint: EndpointPolicy,
    /// Admit zero and negative weights; samples whose weight sum is not
    /// positive are then flagged instead of the input being rejected.
    pub allow_nonpositive_weights: bool,
    pub parallel_threshold: usize,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            degree: DEFAULT_DEGREE,
            endpoint: EndpointPolicy::Trim,
            allow_nonpositive_weights: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl CurveOptions {
    pub fn new(degree: usize, samples: usize) -> Self {
        Self {
            degree,
            samples,
            ..Self::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: EndpointPolicy) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_nonpositive_weights(mut self, allow: bool) -> Self {
        self.allow_nonpositive_weights = allow;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Number of points an evaluation returns under these options.
    pub fn output_len(&self) -> usize {
        match self.endpoint {
            EndpointPolicy::Trim => self.samples.saturating_sub(1),
            EndpointPolicy::Close => self.samples,
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let opts: Self = toml::from_str(content)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Loads options from a TOML file. Falls back to defaults on error.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Curve options loaded from: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Invalid curve options file, using defaults: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No curve options file found, using defaults");
                Self::default()
            }
        }
    }

    /// Loads options from a TOML file, reporting any failure.
    pub fn try_load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Curve options saved to: {}", path.display());
        Ok(())
    }
}

impl Validate for CurveOptions {
    fn validate(&self) -> Result<()> {
        if self.samples < 2 {
            return Err(NurbsError::invalid_config(format!(
                "samples must be at least 2, got {}",
                self.samples
            )));
        }
        Ok(())
    }
}
