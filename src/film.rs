//! Two-beam interference model of a thin dielectric film observed through a lens

use std::f64::consts::PI;
use std::fmt;

use crate::{
    config::{Config, ConfigError},
    spectrum::{Rgb, WavelengthSet},
};

#[derive(Debug, thiserror::Error)]
pub enum FilmError {
    #[error(
        "total internal reflection at radius {radius}: the refraction sine {sine} is outside [-1,1]"
    )]
    TotalInternalReflection { radius: f64, sine: f64 },
}
type Result<T> = std::result::Result<T, FilmError>;

/// Fresnel-like amplitude coefficients of the film interfaces
#[derive(Debug, Clone, Copy)]
pub struct Coefficients {
    /// outer interface reflectance
    pub r: f64,
    /// outer interface transmittance
    pub t: f64,
    /// inner interface reflectance
    pub rr: f64,
    /// inner interface transmittance
    pub tt: f64,
}
impl Coefficients {
    fn new(n1: f64, n2: f64) -> Self {
        let r = (n1 - n2) / (n1 + n2);
        Self {
            r,
            t: 2. * n1 / (n1 + n2),
            rr: -r,
            tt: 2. * n2 / (n1 + n2),
        }
    }
}

/// Thin-film interference model
///
/// Carries the physical parameters of the film together with the values
/// derived once at construction: the interface [`Coefficients`], the
/// visibility terms of the two-beam intensity formula and the illumination
/// [`WavelengthSet`] with its RGB weights.
#[derive(Debug, Clone)]
pub struct ThinFilm {
    pub(crate) n1: f64,
    pub(crate) n2: f64,
    pub(crate) thickness: f64,
    pub(crate) focal_length: f64,
    pub(crate) side: f64,
    pub(crate) points: usize,
    pub(crate) quantization: f64,
    coefficients: Coefficients,
    a: f64,
    b: f64,
    normalization: f64,
    wavelengths: WavelengthSet,
}
impl ThinFilm {
    /// Builds the model from a [`Config`], validated eagerly
    pub fn new(config: &Config) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let coefficients = Coefficients::new(config.n1, config.n2);
        let alpha = (coefficients.t * coefficients.tt).abs();
        let a = coefficients.r * coefficients.r * (1. + alpha * alpha);
        let b = 2. * alpha / (1. + alpha * alpha);
        Ok(Self {
            n1: config.n1,
            n2: config.n2,
            thickness: config.thickness,
            focal_length: config.focal_length,
            side: config.side,
            points: config.points,
            quantization: config.quantization,
            coefficients,
            a,
            b,
            normalization: a * (1. + b),
            wavelengths: WavelengthSet::new(&config.wavelengths),
        })
    }
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }
    pub fn wavelengths(&self) -> &WavelengthSet {
        &self.wavelengths
    }
    /// Round-trip optical phase accumulated in the film at `radius` from the optical axis
    ///
    /// Fails past the total internal reflection limit, where the lens-to-film
    /// refraction path no longer exists.
    pub fn phase_at(&self, radius: f64) -> Result<f64> {
        let sine = self.n1 * (radius / self.focal_length).atan().sin() / self.n2;
        if !(-1. ..=1.).contains(&sine) {
            return Err(FilmError::TotalInternalReflection { radius, sine });
        }
        Ok(4. * PI * self.n2 * self.thickness * sine.asin().cos())
    }
    // Normalized two-beam intensity of a single wavelength [nm] sample
    fn modulation(&self, phase0: f64, wavelength: f64) -> f64 {
        if self.a == 0. {
            // r = 0: no reflected beams, the fringes vanish with the normalization
            return 0.;
        }
        self.a * (1. - self.b * (phase0 * 1e9 / wavelength).cos()) / self.normalization
    }
    /// Scalar interference intensity of a single `wavelength` [nm] sample at `radius`
    pub fn intensity_profile(&self, radius: f64, wavelength: f64) -> Result<f64> {
        Ok(self.modulation(self.phase_at(radius)?, wavelength))
    }
    /// Color-weighted intensity accumulated over the illumination spectrum at `radius`
    pub fn intensity_at(&self, radius: f64) -> Result<Rgb> {
        let phase0 = self.phase_at(radius)?;
        Ok(self
            .wavelengths
            .iter()
            .fold(Rgb::zeros(), |intensity, (wavelength, rgb)| {
                intensity + rgb * self.modulation(phase0, *wavelength)
            }))
    }
    /// Largest radius the lens-to-film refraction path can reach
    ///
    /// `None` when n1 <= n2, i.e. when every radius is valid.
    pub fn max_radius(&self) -> Option<f64> {
        (self.n1 > self.n2).then(|| self.focal_length.abs() * (self.n2 / self.n1).asin().tan())
    }
}
impl fmt::Display for ThinFilm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "thin film: n1 = {}, n2 = {}, thickness = {:e}m, focal length = {}, {} wavelength sample(s)",
            self.n1,
            self.n2,
            self.thickness,
            self.focal_length,
            self.wavelengths.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients_derivation() {
        let film = ThinFilm::new(&Config::default()).unwrap();
        let c = film.coefficients();
        assert!((c.r + 0.2).abs() < 1e-15);
        assert!((c.t - 0.8).abs() < 1e-15);
        assert_eq!(c.rr, -c.r);
        assert!((c.tt - 1.2).abs() < 1e-15);
    }

    #[test]
    fn matched_indices_flatten_the_field() {
        let film = ThinFilm::new(&Config::default().n1(1.5).n2(1.5)).unwrap();
        let c = film.coefficients();
        assert_eq!(c.r, 0.);
        assert_eq!(c.t, 1.);
        assert_eq!(c.tt, 1.);
        for radius in [0., 0.1, 0.25, 0.5] {
            assert_eq!(film.intensity_at(radius).unwrap(), Rgb::zeros());
        }
    }

    #[test]
    fn on_axis_intensity_is_defined() {
        for focal_length in [5., -5., 0.1] {
            let film = ThinFilm::new(&Config::default().focal_length(focal_length)).unwrap();
            assert!(film.intensity_at(0.).is_ok());
        }
    }

    #[test]
    fn on_axis_phase() {
        let film = ThinFilm::new(&Config::default()).unwrap();
        // normal incidence: 4 pi n2 e
        let expected = 4. * PI * 1.5 * 1e-3;
        assert!((film.phase_at(0.).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn total_internal_reflection_is_an_error() {
        let film = ThinFilm::new(&Config::default().n1(1.5).n2(1.)).unwrap();
        let radius = 40.;
        match film.phase_at(radius) {
            Err(FilmError::TotalInternalReflection { radius: r, sine }) => {
                assert_eq!(r, radius);
                assert!(sine > 1.);
            }
            Ok(phase) => panic!("expected a domain error, got phase {phase}"),
        }
    }

    #[test]
    fn max_radius_matches_phase_domain() {
        let film = ThinFilm::new(&Config::default().n1(1.5).n2(1.)).unwrap();
        let limit = film.max_radius().unwrap();
        assert!(film.phase_at(limit * 0.999).is_ok());
        assert!(film.phase_at(limit * 1.001).is_err());
        assert!(ThinFilm::new(&Config::default())
            .unwrap()
            .max_radius()
            .is_none());
    }
}
