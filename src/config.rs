//! Optical and rendering parameters

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("refractive indices must be positive (n1 = {0}, n2 = {1})")]
    RefractiveIndex(f64, f64),
    #[error("film thickness must be positive ({0}m)")]
    Thickness(f64),
    #[error("lens focal length must not be zero")]
    FocalLength,
    #[error("the wavelength set is empty")]
    EmptyWavelengths,
    #[error("field side length must be positive ({0})")]
    Side(f64),
    #[error("field resolution must be at least 1 point per side")]
    Points,
    #[error("radius quantization step must be positive ({0})")]
    Quantization(f64),
}

/// Thin-film model and field rendering parameters
///
/// The defaults describe a 1mm dielectric film (n = 1.5) in air observed
/// through a f = 5 lens under a single 500nm illumination sample, rendered
/// over a 1000x1000 unit square field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// refractive index of the incident medium
    pub n1: f64,
    /// refractive index of the film
    pub n2: f64,
    /// film thickness [m]
    pub thickness: f64,
    /// lens focal length
    pub focal_length: f64,
    /// illumination sample wavelengths [nm]
    pub wavelengths: Vec<f64>,
    /// physical side length of the square field
    pub side: f64,
    /// grid resolution [points per side]
    pub points: usize,
    /// radius cache bucket width, in the same unit as `side`
    pub quantization: f64,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            n1: 1.,
            n2: 1.5,
            thickness: 1e-3,
            focal_length: 5.,
            wavelengths: vec![500.],
            side: 1.,
            points: 1000,
            quantization: 1e-3,
        }
    }
}
impl Config {
    /// Sets the refractive index of the incident medium
    pub fn n1(mut self, value: f64) -> Self {
        self.n1 = value;
        self
    }
    /// Sets the refractive index of the film
    pub fn n2(mut self, value: f64) -> Self {
        self.n2 = value;
        self
    }
    /// Sets the film thickness [m]
    pub fn thickness(mut self, value: f64) -> Self {
        self.thickness = value;
        self
    }
    /// Sets the lens focal length
    pub fn focal_length(mut self, value: f64) -> Self {
        self.focal_length = value;
        self
    }
    /// Sets the illumination sample wavelengths [nm]
    pub fn wavelengths(mut self, value: Vec<f64>) -> Self {
        self.wavelengths = value;
        self
    }
    /// Sets the physical side length of the square field
    pub fn side(mut self, value: f64) -> Self {
        self.side = value;
        self
    }
    /// Sets the grid resolution [points per side]
    pub fn points(mut self, value: usize) -> Self {
        self.points = value;
        self
    }
    /// Sets the radius cache bucket width
    pub fn quantization(mut self, value: f64) -> Self {
        self.quantization = value;
        self
    }
    /// Checks every field, failing on the first invalid one
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n1 <= 0. || self.n2 <= 0. {
            return Err(ConfigError::RefractiveIndex(self.n1, self.n2));
        }
        if self.thickness <= 0. {
            return Err(ConfigError::Thickness(self.thickness));
        }
        if self.focal_length == 0. {
            return Err(ConfigError::FocalLength);
        }
        if self.wavelengths.is_empty() {
            return Err(ConfigError::EmptyWavelengths);
        }
        if self.side <= 0. {
            return Err(ConfigError::Side(self.side));
        }
        if self.points == 0 {
            return Err(ConfigError::Points);
        }
        if self.quantization <= 0. {
            return Err(ConfigError::Quantization(self.quantization));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn invalid_configs_are_rejected() {
        assert!(matches!(
            Config::default().n1(0.).validate(),
            Err(ConfigError::RefractiveIndex(..))
        ));
        assert!(matches!(
            Config::default().n2(-1.5).validate(),
            Err(ConfigError::RefractiveIndex(..))
        ));
        assert!(matches!(
            Config::default().thickness(0.).validate(),
            Err(ConfigError::Thickness(_))
        ));
        assert!(matches!(
            Config::default().focal_length(0.).validate(),
            Err(ConfigError::FocalLength)
        ));
        assert!(matches!(
            Config::default().wavelengths(vec![]).validate(),
            Err(ConfigError::EmptyWavelengths)
        ));
        assert!(matches!(
            Config::default().side(-1.).validate(),
            Err(ConfigError::Side(_))
        ));
        assert!(matches!(
            Config::default().points(0).validate(),
            Err(ConfigError::Points)
        ));
        assert!(matches!(
            Config::default().quantization(0.).validate(),
            Err(ConfigError::Quantization(_))
        ));
    }

    #[test]
    fn negative_focal_length_is_valid() {
        assert!(Config::default().focal_length(-5.).validate().is_ok());
    }
}
