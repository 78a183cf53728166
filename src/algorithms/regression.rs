//! Seasonal + trend regression over monthly traffic.
//!
//! Fits `y = intercept + slope * t + seasonal[month]` where `t` is fractional
//! time (`year + (month - 1) / 12`), the trend comes from ordinary least
//! squares, and the seasonal component is the per-month mean of the trend
//! residuals. The model is fully deterministic for identical input and keeps
//! working across a gap of removed years, since the trend is fit on calendar
//! time rather than sample index.
//!
//! Intended for projections at most one year past the training range.

use thiserror::Error;

use crate::models::MonthlyTraffic;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model has not been fitted")]
    NotFitted,

    #[error("insufficient training data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },
}

/// Deterministic seasonal + linear-trend regressor.
#[derive(Debug, Clone, Default)]
pub struct SeasonalTrendModel {
    intercept: f64,
    slope: f64,
    /// Mean trend residual per calendar month; 0.0 for months absent from
    /// training.
    monthly_offsets: [f64; 12],
    r_squared: f64,
    n_observations: usize,
    fitted: bool,
}

/// Fractional calendar time: January 2023 -> 2023.0, December 2023 -> ~2023.917.
fn fractional_time(year: i32, month: u32) -> f64 {
    f64::from(year) + f64::from(month - 1) / 12.0
}

impl SeasonalTrendModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Coefficient of determination of the trend-plus-seasonal fit.
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// Fit the trend and seasonal offsets on observed monthly points.
    pub fn fit(&mut self, points: &[MonthlyTraffic]) -> Result<(), ModelError> {
        if points.len() < 2 {
            return Err(ModelError::InsufficientData {
                required: 2,
                actual: points.len(),
            });
        }

        let n = points.len() as f64;
        let times: Vec<f64> = points
            .iter()
            .map(|p| fractional_time(p.year, p.month))
            .collect();

        let sum_t: f64 = times.iter().sum();
        let sum_y: f64 = points.iter().map(|p| p.passengers).sum();
        let sum_t2: f64 = times.iter().map(|t| t * t).sum();
        let sum_ty: f64 = times
            .iter()
            .zip(points.iter())
            .map(|(t, p)| t * p.passengers)
            .sum();

        let denominator = n * sum_t2 - sum_t * sum_t;
        if denominator.abs() < f64::EPSILON {
            // All observations share one time point; fall back to the mean.
            self.slope = 0.0;
            self.intercept = sum_y / n;
        } else {
            self.slope = (n * sum_ty - sum_t * sum_y) / denominator;
            self.intercept = (sum_y - self.slope * sum_t) / n;
        }

        // Seasonal component: mean trend residual per calendar month.
        let mut residual_sums = [0.0f64; 12];
        let mut residual_counts = [0usize; 12];
        for (t, p) in times.iter().zip(points.iter()) {
            let residual = p.passengers - (self.intercept + self.slope * t);
            let idx = (p.month - 1) as usize;
            residual_sums[idx] += residual;
            residual_counts[idx] += 1;
        }
        for idx in 0..12 {
            self.monthly_offsets[idx] = if residual_counts[idx] > 0 {
                residual_sums[idx] / residual_counts[idx] as f64
            } else {
                0.0
            };
        }

        // R-squared of the full fit.
        let mean_y = sum_y / n;
        let ss_tot: f64 = points.iter().map(|p| (p.passengers - mean_y).powi(2)).sum();
        let ss_res: f64 = times
            .iter()
            .zip(points.iter())
            .map(|(t, p)| {
                let fitted =
                    self.intercept + self.slope * t + self.monthly_offsets[(p.month - 1) as usize];
                (p.passengers - fitted).powi(2)
            })
            .sum();
        self.r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 1.0 };

        self.n_observations = points.len();
        self.fitted = true;
        Ok(())
    }

    /// Predict passengers for one calendar month.
    ///
    /// Predictions are floored at 0: passenger counts are non-negative and a
    /// declining trend can undershoot.
    pub fn predict(&self, year: i32, month: u32) -> Result<f64, ModelError> {
        if !self.fitted {
            return Err(ModelError::NotFitted);
        }
        let t = fractional_time(year, month);
        let raw = self.intercept + self.slope * t + self.monthly_offsets[(month - 1) as usize];
        Ok(raw.max(0.0))
    }
}
