//! Visible spectrum to perceptual color mapping

use std::ops::Deref;

use nalgebra::Vector3;

/// Linear RGB triple
pub type Rgb = Vector3<f64>;

/// Lower edge of the visible range [nm]
pub const VISIBLE_MIN_NM: f64 = 380.;
/// Upper edge of the visible range [nm]
pub const VISIBLE_MAX_NM: f64 = 750.;

/// Maps a wavelength [nm] to a linear RGB triple in [0,1]³
///
/// Piecewise-linear approximation of the visible spectrum divided into six
/// contiguous bands; the two edge bands fade toward the violet and red limits
/// of visibility and wavelengths outside [380,750]nm map to black.
pub fn wavelength_to_rgb(wavelength: f64) -> Rgb {
    if (380. ..=440.).contains(&wavelength) {
        let attenuation = 0.3 + 0.7 * (wavelength - 380.) / (440. - 380.);
        Rgb::new(
            -(wavelength - 440.) / (440. - 380.) * attenuation,
            0.,
            attenuation,
        )
    } else if (440. ..=490.).contains(&wavelength) {
        Rgb::new(0., (wavelength - 440.) / (490. - 440.), 1.)
    } else if (490. ..=510.).contains(&wavelength) {
        Rgb::new(0., 1., -(wavelength - 510.) / (510. - 490.))
    } else if (510. ..=580.).contains(&wavelength) {
        Rgb::new((wavelength - 510.) / (580. - 510.), 1., 0.)
    } else if (580. ..=645.).contains(&wavelength) {
        Rgb::new(1., -(wavelength - 645.) / (645. - 580.), 0.)
    } else if (645. ..=750.).contains(&wavelength) {
        let attenuation = 0.3 + 0.7 * (750. - wavelength) / (750. - 645.);
        Rgb::new(attenuation, 0., 0.)
    } else {
        Rgb::zeros()
    }
}

/// Ordered illumination samples with their perceptual RGB weights
#[derive(Debug, Clone)]
pub struct WavelengthSet(Vec<(f64, Rgb)>);
impl Deref for WavelengthSet {
    type Target = Vec<(f64, Rgb)>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl WavelengthSet {
    /// Maps each sample wavelength [nm] to its RGB weight, preserving order
    pub fn new(wavelengths: &[f64]) -> Self {
        Self(
            wavelengths
                .iter()
                .map(|&wavelength| (wavelength, wavelength_to_rgb(wavelength)))
                .collect(),
        )
    }
}
