use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fraction of the longest grid span used as the initial displacement amplitude.
pub const HEIGHT_VARIATION_FACTOR: f32 = 0.2;

/// Default per-depth amplitude damping.
pub const DEFAULT_ROUGHNESS: f32 = 0.5;

/// Generation parameters. Every field has a default, so a JSON config may
/// specify any subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateParams {
    pub seed: u64,
    /// Amplitude multiplier per recursion depth, in (0, 1).
    /// Larger values keep more fine-scale displacement: rougher terrain.
    pub roughness: f32,
    /// Displacement amplitude at depth 0. `None` derives it from the grid size.
    pub amplitude: Option<f32>,
    /// Top-left, top-right, bottom-left, bottom-right. `None` draws them from the seed.
    pub corner_values: Option<[f32; 4]>,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            seed: 42,
            roughness: DEFAULT_ROUGHNESS,
            amplitude: None,
            corner_values: None,
        }
    }
}

impl GenerateParams {
    pub fn new(seed: u64, roughness: f32) -> Self {
        Self { seed, roughness, ..Self::default() }
    }

    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = Some(amplitude);
        self
    }

    pub fn with_corners(mut self, corners: [f32; 4]) -> Self {
        self.corner_values = Some(corners);
        self
    }

    /// Reject parameters the engine cannot honour.
    pub fn validate(&self) -> Result<()> {
        if !(self.roughness > 0.0 && self.roughness < 1.0) {
            return Err(Error::InvalidParameter { name: "roughness", value: self.roughness });
        }
        if let Some(a) = self.amplitude {
            if !a.is_finite() || a < 0.0 {
                return Err(Error::InvalidParameter { name: "amplitude", value: a });
            }
        }
        if let Some(corners) = self.corner_values {
            if let Some(&v) = corners.iter().find(|v| !v.is_finite()) {
                return Err(Error::InvalidParameter { name: "corner value", value: v });
            }
        }
        Ok(())
    }

    /// Depth-0 amplitude for a grid whose longest span is `max_span` steps.
    pub fn initial_amplitude(&self, max_span: usize) -> f32 {
        self.amplitude
            .unwrap_or(HEIGHT_VARIATION_FACTOR * max_span as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GenerateParams::default().validate().is_ok());
    }

    #[test]
    fn roughness_must_be_inside_open_unit_interval() {
        for r in [0.0, 1.0, -0.3, 1.5, f32::NAN] {
            let p = GenerateParams::new(1, r);
            assert!(
                matches!(p.validate(), Err(Error::InvalidParameter { name: "roughness", .. })),
                "roughness {r} should be rejected"
            );
        }
        assert!(GenerateParams::new(1, 0.99).validate().is_ok());
    }

    #[test]
    fn negative_or_infinite_amplitude_rejected() {
        assert!(GenerateParams::default().with_amplitude(-1.0).validate().is_err());
        assert!(GenerateParams::default().with_amplitude(f32::INFINITY).validate().is_err());
        assert!(GenerateParams::default().with_amplitude(0.0).validate().is_ok());
    }

    #[test]
    fn non_finite_corner_rejected() {
        let p = GenerateParams::default().with_corners([0.0, f32::NAN, 1.0, 2.0]);
        assert!(matches!(
            p.validate(),
            Err(Error::InvalidParameter { name: "corner value", .. })
        ));
    }

    #[test]
    fn amplitude_derived_from_span_when_unset() {
        let p = GenerateParams::default();
        assert!((p.initial_amplitude(10) - 2.0).abs() < 1e-6);
        assert_eq!(p.with_amplitude(0.75).initial_amplitude(10), 0.75);
    }

    #[test]
    fn partial_json_config_fills_defaults() {
        let p: GenerateParams = serde_json::from_str(r#"{ "seed": 7, "roughness": 0.6 }"#).unwrap();
        assert_eq!(p, GenerateParams::new(7, 0.6));

        let p: GenerateParams =
            serde_json::from_str(r#"{ "corner_values": [1.0, 2.0, 3.0, 4.0] }"#).unwrap();
        assert_eq!(p.seed, 42);
        assert_eq!(p.corner_values, Some([1.0, 2.0, 3.0, 4.0]));
    }
}
