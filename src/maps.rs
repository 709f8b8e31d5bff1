//! Display collaborators: image export and plots of the rendered field

use std::{
    collections::HashMap,
    fs::File,
    io,
    path::{Path, PathBuf},
};

use image::save_buffer;
use serde_pickle as pkl;

use crate::{
    film::ThinFilm,
    render::{radius_buckets, FieldImage},
};

#[derive(Debug, thiserror::Error)]
pub enum MapsError {
    #[error("failed to save the fringe map to {1:?}")]
    Save(#[source] image::ImageError, PathBuf),
    #[error("failed to create {1:?}")]
    File(#[source] io::Error, PathBuf),
    #[error("failed to pickle the field to {1:?}")]
    Pickle(#[source] pkl::Error, PathBuf),
}
type Result<T> = std::result::Result<T, MapsError>;

impl FieldImage {
    /// 8-bit RGB rendition of the field, clamped to [0,1]
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels()
            .iter()
            .flat_map(|rgb| [rgb.x, rgb.y, rgb.z].map(|c| (c.clamp(0., 1.) * 255.) as u8))
            .collect()
    }
    /// Saves the field as a PNG image
    pub fn save_png(&self, filename: impl AsRef<Path>) -> Result<()> {
        let path = filename.as_ref();
        save_buffer(
            path,
            &self.to_rgb8(),
            self.points as u32,
            self.points as u32,
            image::ColorType::Rgb8,
        )
        .map_err(|e| MapsError::Save(e, path.to_path_buf()))
    }
    /// Pickles the raw field record for offline analysis
    pub fn save_pickle(&self, filename: impl AsRef<Path>) -> Result<()> {
        let path = filename.as_ref();
        let mut file = File::create(path).map_err(|e| MapsError::File(e, path.to_path_buf()))?;
        pkl::to_writer(&mut file, self, Default::default())
            .map_err(|e| MapsError::Pickle(e, path.to_path_buf()))
    }
}

/// Monochromatic fringe map of a single `wavelength` [nm] sample, colormapped to PNG
pub fn luminance_map(film: &ThinFilm, wavelength: f64, filename: impl AsRef<Path>) -> Result<()> {
    let mut cache: HashMap<u64, f64> = HashMap::new();
    let frame: Vec<f64> = radius_buckets(film.side, film.points, film.quantization)
        .into_iter()
        .map(|bucket| {
            *cache.entry(bucket).or_insert_with(|| {
                film.intensity_profile(bucket as f64 * film.quantization, wavelength)
                    // beyond the total internal reflection limit: dark
                    .unwrap_or(0.)
            })
        })
        .collect();
    let max = frame.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = frame.iter().cloned().fold(f64::INFINITY, f64::min);
    let range = max - min;
    let rgb: Vec<u8> = frame
        .iter()
        .map(|&value| if range > 0. { (value - min) / range } else { 0.5 })
        .flat_map(|value| {
            let color = colorous::CUBEHELIX.eval_continuous(value);
            [color.r, color.g, color.b]
        })
        .collect();
    let path = filename.as_ref();
    save_buffer(
        path,
        &rgb,
        film.points as u32,
        film.points as u32,
        image::ColorType::Rgb8,
    )
    .map_err(|e| MapsError::Save(e, path.to_path_buf()))
}

#[cfg(feature = "plot")]
impl FieldImage {
    /// Plots the fringe map with physical extent axes
    pub fn plot(&self, filename: &str) {
        use plotters::prelude::*;
        let n = self.points as u32;
        let root = BitMapBackend::new(filename, (n + 70, n + 50)).into_drawing_area();
        root.fill(&WHITE).unwrap();
        let mut chart = ChartBuilder::on(&root)
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .margin(5)
            .build_cartesian_2d(0. ..self.side, 0. ..self.side)
            .unwrap();
        chart.configure_mesh().x_desc("x").y_desc("y").draw().unwrap();
        // image rows run top-down, the y axis runs bottom-up
        let mut buffer = Vec::with_capacity(3 * self.field.len());
        for row in (0..self.points).rev() {
            for col in 0..self.points {
                let rgb = self.pixel(row, col);
                buffer.extend([rgb.x, rgb.y, rgb.z].map(|c| (c.clamp(0., 1.) * 255.) as u8));
            }
        }
        let bitmap: BitMapElement<_> =
            BitMapElement::with_owned_buffer((0., self.side), (n, n), buffer).unwrap();
        chart.draw_series(std::iter::once(bitmap)).unwrap();
    }
}

/// Plots the radial intensity profile of each illumination sample out to the field corner
#[cfg(feature = "plot")]
pub fn radial_profile(film: &ThinFilm, filename: &str) {
    let corner = film.side / 2. * 2f64.sqrt();
    let data = (0..=film.points).map(|k| {
        let radius = corner * k as f64 / film.points as f64;
        (
            radius,
            film.wavelengths()
                .iter()
                .map(|(wavelength, _)| film.intensity_profile(radius, *wavelength).unwrap_or(0.))
                .collect::<Vec<f64>>(),
        )
    });
    let config = complot::Config::new()
        .filename(filename)
        .xaxis(complot::Axis::new().label("Radius"))
        .yaxis(complot::Axis::new().label("Normalized intensity"));
    let _: complot::Plot = (data, Some(config)).into();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, render::FieldRenderer, spectrum::Rgb, ThinFilm};

    #[test]
    fn rgb8_clamps() {
        let image = FieldImage {
            field: vec![Rgb::new(-0.5, 0.5, 1.5)],
            points: 1,
            side: 1.,
        };
        assert_eq!(image.to_rgb8(), vec![0, 127, 255]);
    }

    #[test]
    fn png_export() {
        let film = ThinFilm::new(&Config::default().points(16)).unwrap();
        let field = FieldRenderer::new(&film).field();
        let path = std::env::temp_dir().join("fringe_maps_field.png");
        field.save_png(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn luminance_export() {
        let film = ThinFilm::new(&Config::default().points(16)).unwrap();
        let path = std::env::temp_dir().join("fringe_maps_luminance.png");
        luminance_map(&film, 500., &path).unwrap();
        assert!(path.exists());
    }
}
