//! Feature and target scalers
//!
//! Column-wise affine transforms fitted once per training run and reused for every
//! later prediction in that run:
//! - `standard`: `(x - mean) / std` (population std, zero-variance columns keep scale 1)
//! - `minmax`: `(x - min) / (max - min)` into `[0, 1]` (constant columns keep scale 1)
//!
//! Both keep their fitted parameters so predictions can be mapped back with
//! [`Scaler::inverse_transform`].

pub mod error;

use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix2};
use serde::{Deserialize, Serialize};

pub use error::ScalerError;

/// Scaler selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalerKind {
    Standard,
    MinMax,
}

impl ScalerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalerKind::Standard => "standard",
            ScalerKind::MinMax => "minmax",
        }
    }
}

impl FromStr for ScalerKind {
    type Err = ScalerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(ScalerKind::Standard),
            "minmax" => Ok(ScalerKind::MinMax),
            other => Err(ScalerError::InvalidScalerKind(other.to_string())),
        }
    }
}

impl fmt::Display for ScalerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fitted column-wise scaler: `scaled = (x - offset) / scale`
#[derive(Debug, Clone, PartialEq)]
pub struct Scaler {
    kind: ScalerKind,
    offset: Array1<f32>,
    scale: Array1<f32>,
}

impl Scaler {
    /// Fit per-column parameters on `data`
    pub fn fit<S: Data<Elem = f32>>(
        kind: ScalerKind,
        data: &ArrayBase<S, Ix2>,
    ) -> Result<Self, ScalerError> {
        if data.nrows() == 0 {
            return Err(ScalerError::EmptyInput);
        }

        let columns = data.axis_iter(Axis(1));
        let (offset, scale): (Vec<f32>, Vec<f32>) = match kind {
            ScalerKind::Standard => columns
                .map(|col| {
                    let n = col.len() as f64;
                    let mean = col.iter().map(|&x| x as f64).sum::<f64>() / n;
                    let var = col.iter().map(|&x| (x as f64 - mean).powi(2)).sum::<f64>() / n;
                    (mean as f32, non_zero(var.sqrt()))
                })
                .unzip(),
            ScalerKind::MinMax => columns
                .map(|col| {
                    let min = col.iter().copied().fold(f32::INFINITY, f32::min);
                    let max = col.iter().copied().fold(f32::NEG_INFINITY, f32::max);
                    (min, non_zero(max as f64 - min as f64))
                })
                .unzip(),
        };

        Ok(Self {
            kind,
            offset: Array1::from(offset),
            scale: Array1::from(scale),
        })
    }

    /// Map `data` into the scaled space
    pub fn transform<S: Data<Elem = f32>>(
        &self,
        data: &ArrayBase<S, Ix2>,
    ) -> Result<Array2<f32>, ScalerError> {
        self.check_width(data.ncols())?;
        Ok((data - &self.offset) / &self.scale)
    }

    /// Map scaled values back to the original space
    pub fn inverse_transform<S: Data<Elem = f32>>(
        &self,
        data: &ArrayBase<S, Ix2>,
    ) -> Result<Array2<f32>, ScalerError> {
        self.check_width(data.ncols())?;
        Ok(data * &self.scale + &self.offset)
    }

    pub fn kind(&self) -> ScalerKind {
        self.kind
    }

    /// Number of columns the scaler was fitted on
    pub fn width(&self) -> usize {
        self.offset.len()
    }

    fn check_width(&self, found: usize) -> Result<(), ScalerError> {
        if found != self.width() {
            return Err(ScalerError::ShapeMismatch {
                expected: self.width(),
                found,
            });
        }
        Ok(())
    }
}

fn non_zero(scale: f64) -> f32 {
    if scale.abs() < f64::EPSILON {
        1.0
    } else {
        scale as f32
    }
}

/// Fit a scaler selected by name and return the scaled data with it
pub fn fit_scale<S: Data<Elem = f32>>(
    data: &ArrayBase<S, Ix2>,
    kind: &str,
) -> Result<(Array2<f32>, Scaler), ScalerError> {
    let scaler = Scaler::fit(kind.parse()?, data)?;
    let scaled = scaler.transform(data)?;
    Ok((scaled, scaler))
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn test_minmax_unit_interval() {
        let data = array![[1.0_f32], [2.0], [3.0]];
        let (scaled, scaler) = fit_scale(&data, "minmax").unwrap();
        assert_eq!(scaled, array![[0.0_f32], [0.5], [1.0]]);
        assert_eq!(scaler.kind(), ScalerKind::MinMax);
        assert_eq!(scaler.inverse_transform(&scaled).unwrap(), data);
    }

    #[test]
    fn test_standard_zero_mean_unit_variance() {
        let data = array![[1.0_f32, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0]];
        let (scaled, _) = fit_scale(&data, "standard").unwrap();

        for col in scaled.axis_iter(Axis(1)) {
            let mean = col.sum() / col.len() as f32;
            let var = col.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / col.len() as f32;
            assert!(mean.abs() < 1e-6);
            assert!((var - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_constant_column() {
        let data = array![[5.0_f32, 1.0], [5.0, 2.0]];
        for kind in [ScalerKind::Standard, ScalerKind::MinMax] {
            let scaler = Scaler::fit(kind, &data).unwrap();
            let scaled = scaler.transform(&data).unwrap();
            assert!(scaled.column(0).iter().all(|&x| x == 0.0));
            assert_eq!(scaler.inverse_transform(&scaled).unwrap(), data);
        }
    }

    #[test]
    fn test_invalid_kind() {
        let data = array![[1.0_f32]];
        assert_eq!(
            fit_scale(&data, "robust").unwrap_err(),
            ScalerError::InvalidScalerKind("robust".to_string())
        );
        assert!("MinMax".parse::<ScalerKind>().is_err());
    }

    #[test]
    fn test_shape_checks() {
        let empty = Array2::<f32>::zeros((0, 2));
        assert_eq!(
            Scaler::fit(ScalerKind::Standard, &empty).unwrap_err(),
            ScalerError::EmptyInput
        );

        let scaler = Scaler::fit(ScalerKind::MinMax, &array![[1.0_f32, 2.0]]).unwrap();
        assert_eq!(
            scaler.transform(&array![[1.0_f32]]).unwrap_err(),
            ScalerError::ShapeMismatch {
                expected: 2,
                found: 1
            }
        );
    }
}
