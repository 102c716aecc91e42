//! Standardizing scaler fitted offline.
//!
//! Each column is centred on its training mean and divided by its
//! training scale. A zero scale (constant training column) leaves the
//! centred value as-is.

use serde::{Deserialize, Serialize};

use super::error::{InferenceError, InferenceResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self { mean, scale }
    }

    /// Identity transform of the given width.
    pub fn identity(n_features: usize) -> Self {
        Self::new(vec![0.0; n_features], vec![1.0; n_features])
    }

    /// Width of the vectors this scaler was fitted on.
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Structural check run once at load time.
    pub fn validate(&self) -> Result<(), String> {
        if self.mean.len() != self.scale.len() {
            return Err(format!(
                "mean has {} entries but scale has {}",
                self.mean.len(),
                self.scale.len()
            ));
        }
        if let Some(i) = self
            .mean
            .iter()
            .chain(&self.scale)
            .position(|v| !v.is_finite())
        {
            return Err(format!("non-finite parameter at position {}", i));
        }
        Ok(())
    }

    pub fn transform(&self, x: &[f64]) -> InferenceResult<Vec<f64>> {
        if x.len() != self.n_features() {
            return Err(InferenceError::dimension(
                "scaler",
                self.n_features(),
                x.len(),
            ));
        }

        Ok(x.iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(value, (mean, scale))| {
                let centred = value - mean;
                if *scale == 0.0 {
                    centred
                } else {
                    centred / scale
                }
            })
            .collect())
    }
}
