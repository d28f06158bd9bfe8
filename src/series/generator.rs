//! Decorative Series Generator
//! Produces the synthetic price path drawn behind the price readout.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SeriesParamsError {
    #[error("Series must have at least one point")]
    NoPoints,
    #[error("Series lower bound {min} is above upper bound {max}")]
    InvertedBounds { min: f64, max: f64 },
    #[error("Series parameter `{0}` must be finite")]
    NonFinite(&'static str),
    #[error("Volatility must not be negative (got {0})")]
    NegativeVolatility(f64),
    #[error("Series parameter `{0}` is too large for the path to stay finite")]
    Overflow(&'static str),
}

/// Shape constants of the decorative path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesParams {
    pub points: usize,
    pub base: f64,
    pub min: f64,
    pub max: f64,
    /// Half-width of the uniform perturbation drawn per step.
    pub volatility: f64,
    pub volatility_weight: f64,
    /// Total upward drift across the series, spread as `(i / points) * drift / points`.
    pub drift: f64,
    pub wave_frequency: f64,
    pub wave_amplitude: f64,
    pub wave_weight: f64,
}

impl Default for SeriesParams {
    fn default() -> Self {
        Self {
            points: 40,
            base: 25.0,
            min: 15.0,
            max: 95.0,
            volatility: 10.0,
            volatility_weight: 0.4,
            drift: 50.0,
            wave_frequency: 0.3,
            wave_amplitude: 8.0,
            wave_weight: 0.2,
        }
    }
}

impl SeriesParams {
    /// Reject parameter sets the generator cannot honour.
    pub fn validate(&self) -> Result<(), SeriesParamsError> {
        if self.points == 0 {
            return Err(SeriesParamsError::NoPoints);
        }

        let fields = [
            ("base", self.base),
            ("min", self.min),
            ("max", self.max),
            ("volatility", self.volatility),
            ("volatility_weight", self.volatility_weight),
            ("drift", self.drift),
            ("wave_frequency", self.wave_frequency),
            ("wave_amplitude", self.wave_amplitude),
            ("wave_weight", self.wave_weight),
        ];
        if let Some(&(name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SeriesParamsError::NonFinite(name));
        }

        if self.min > self.max {
            return Err(SeriesParamsError::InvertedBounds {
                min: self.min,
                max: self.max,
            });
        }
        if self.volatility < 0.0 {
            return Err(SeriesParamsError::NegativeVolatility(self.volatility));
        }

        // The sampled range spans 2 * volatility.
        if !(2.0 * self.volatility).is_finite() {
            return Err(SeriesParamsError::Overflow("volatility"));
        }

        let n = self.points as f64;
        if !(self.wave_frequency.abs() * n).is_finite() {
            return Err(SeriesParamsError::Overflow("wave_frequency"));
        }

        // Worst-case distance the accumulator can travel from zero.
        let per_step = self.volatility * self.volatility_weight.abs()
            + self.drift.abs() / n
            + self.wave_amplitude.abs() * self.wave_weight.abs();
        if !(self.base.abs() + n * per_step).is_finite() {
            return Err(SeriesParamsError::Overflow("base"));
        }

        Ok(())
    }
}

/// A generated path. Every value lies within the bounds it was generated with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Sample index on x, value on y.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect()
    }
}

/// Generates decorative series from a fixed parameter set.
#[derive(Debug, Clone, Default)]
pub struct SeriesGenerator {
    params: SeriesParams,
}

impl SeriesGenerator {
    pub fn new(params: SeriesParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SeriesParams {
        &self.params
    }

    /// Generate with the thread-local, unseeded random source.
    pub fn generate(&self) -> Series {
        self.generate_with(&mut rand::rng())
    }

    /// Generate a reproducible series from `seed`.
    pub fn generate_seeded(&self, seed: u64) -> Series {
        self.generate_with(&mut StdRng::seed_from_u64(seed))
    }

    /// Generate with an injected random source.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Series {
        let p = &self.params;
        let n = p.points as f64;
        let mut acc = p.base;
        let mut values = Vec::with_capacity(p.points);

        for i in 0..p.points {
            let step = i as f64;
            let volatility = if p.volatility > 0.0 {
                rng.random_range(-p.volatility..=p.volatility)
            } else {
                0.0
            };
            let drift = (step / n) * p.drift;
            let wave = (step * p.wave_frequency).sin() * p.wave_amplitude;

            // The accumulator itself stays unclamped; only emitted samples are bounded.
            acc += volatility * p.volatility_weight + drift / n + wave * p.wave_weight;
            let sample = if acc.is_nan() {
                p.min
            } else {
                acc.clamp(p.min, p.max)
            };
            values.push(sample);
        }

        Series { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_bounds(series: &Series, min: f64, max: f64) -> bool {
        series.values().iter().all(|v| (min..=max).contains(v))
    }

    #[test]
    fn default_series_has_forty_points_within_bounds() {
        let generator = SeriesGenerator::default();
        for _ in 0..200 {
            let series = generator.generate();
            assert_eq!(series.len(), 40);
            assert!(in_bounds(&series, 15.0, 95.0), "{:?}", series);
        }
    }

    #[test]
    fn two_unseeded_calls_are_each_valid() {
        let generator = SeriesGenerator::default();
        let a = generator.generate();
        let b = generator.generate();
        assert_eq!(a.len(), 40);
        assert_eq!(b.len(), 40);
        assert!(in_bounds(&a, 15.0, 95.0));
        assert!(in_bounds(&b, 15.0, 95.0));
    }

    #[test]
    fn same_seed_reproduces_series() {
        let generator = SeriesGenerator::default();
        assert_eq!(generator.generate_seeded(42), generator.generate_seeded(42));
        assert_ne!(generator.generate_seeded(1), generator.generate_seeded(2));
    }

    #[test]
    fn zero_volatility_follows_drift_and_wave() {
        let params = SeriesParams {
            volatility: 0.0,
            ..SeriesParams::default()
        };
        let series = SeriesGenerator::new(params).generate();

        let mut expected: f64 = 25.0;
        for (i, &v) in series.values().iter().enumerate() {
            let i = i as f64;
            expected += (i / 40.0) * 50.0 / 40.0 + (i * 0.3).sin() * 8.0 * 0.2;
            assert!((v - expected.clamp(15.0, 95.0)).abs() < 1e-9);
        }
        assert_eq!(series.values()[0], 25.0);
    }

    #[test]
    fn accumulator_is_not_clamped_between_steps() {
        // Starting far below the floor: a clamped accumulator would climb off 15.
        let params = SeriesParams {
            base: -100.0,
            volatility: 0.0,
            ..SeriesParams::default()
        };
        let series = SeriesGenerator::new(params).generate();
        assert!(series.values().iter().all(|&v| v == 15.0));

        let params = SeriesParams {
            base: 500.0,
            volatility: 0.0,
            ..SeriesParams::default()
        };
        let series = SeriesGenerator::new(params).generate();
        assert!(series.values().iter().all(|&v| v == 95.0));
    }

    #[test]
    fn custom_params_respected() {
        let params = SeriesParams {
            points: 7,
            min: 20.0,
            max: 30.0,
            ..SeriesParams::default()
        };
        let series = SeriesGenerator::new(params).generate_seeded(7);
        assert_eq!(series.len(), 7);
        assert!(in_bounds(&series, 20.0, 30.0));
    }

    #[test]
    fn series_accessors() {
        let series = SeriesGenerator::default().generate_seeded(3);
        let min = series.min().unwrap();
        let max = series.max().unwrap();
        assert!(min <= max);
        assert_eq!(series.last(), series.values().last().copied());

        let points = series.points();
        assert_eq!(points.len(), 40);
        assert_eq!(points[5], [5.0, series.values()[5]]);

        let empty = Series::default();
        assert!(empty.is_empty());
        assert_eq!(empty.min(), None);
    }

    #[test]
    fn validate_rejects_bad_params() {
        assert!(SeriesParams::default().validate().is_ok());

        let p = SeriesParams { points: 0, ..Default::default() };
        assert_eq!(p.validate(), Err(SeriesParamsError::NoPoints));

        let p = SeriesParams { min: 90.0, max: 10.0, ..Default::default() };
        assert_eq!(
            p.validate(),
            Err(SeriesParamsError::InvertedBounds { min: 90.0, max: 10.0 })
        );

        let p = SeriesParams { drift: f64::NAN, ..Default::default() };
        assert_eq!(p.validate(), Err(SeriesParamsError::NonFinite("drift")));

        let p = SeriesParams { volatility: -1.0, ..Default::default() };
        assert_eq!(p.validate(), Err(SeriesParamsError::NegativeVolatility(-1.0)));
    }

    #[test]
    fn validate_rejects_params_that_overflow_the_path() {
        let p = SeriesParams { volatility: 1e308, ..Default::default() };
        assert_eq!(p.validate(), Err(SeriesParamsError::Overflow("volatility")));

        let p = SeriesParams { wave_frequency: 1e307, ..Default::default() };
        assert_eq!(p.validate(), Err(SeriesParamsError::Overflow("wave_frequency")));

        let p = SeriesParams {
            volatility: 1e300,
            volatility_weight: 1e10,
            ..Default::default()
        };
        assert_eq!(p.validate(), Err(SeriesParamsError::Overflow("base")));

        let p = SeriesParams {
            wave_amplitude: 1e300,
            wave_weight: 1e300,
            ..Default::default()
        };
        assert_eq!(p.validate(), Err(SeriesParamsError::Overflow("base")));
    }

    #[test]
    fn large_but_valid_params_stay_within_bounds() {
        let p = SeriesParams {
            volatility: 1e300,
            volatility_weight: 1e5,
            drift: -1e300,
            ..Default::default()
        };
        assert!(p.validate().is_ok());

        let series = SeriesGenerator::new(p).generate_seeded(1);
        assert_eq!(series.len(), 40);
        assert!(in_bounds(&series, 15.0, 95.0), "{:?}", series);
    }
}
