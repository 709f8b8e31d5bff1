//! Interference field renderer

use std::collections::HashMap;

use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    film::{FilmError, ThinFilm},
    spectrum::Rgb,
};

/// Square full-color map of the interference field
#[derive(Debug, Clone, Serialize)]
pub struct FieldImage {
    pub(crate) field: Vec<Rgb>,
    pub(crate) points: usize,
    pub(crate) side: f64,
}
impl FieldImage {
    /// Grid resolution [points per side]
    pub fn points(&self) -> usize {
        self.points
    }
    /// Physical extent of the field
    pub fn side(&self) -> f64 {
        self.side
    }
    /// RGB triple at (`row`,`col`)
    pub fn pixel(&self, row: usize, col: usize) -> &Rgb {
        &self.field[row * self.points + col]
    }
    /// Row-major RGB triples
    pub fn pixels(&self) -> &[Rgb] {
        &self.field
    }
}

// Quantized-radius bucket of each grid node, row-major
pub(crate) fn radius_buckets(side: f64, points: usize, step: f64) -> Vec<u64> {
    let spacing = side / points as f64;
    let half = side / 2.;
    (0..points)
        .cartesian_product(0..points)
        .map(|(i, j)| {
            let (x, y) = (spacing * j as f64, spacing * i as f64);
            let radius = (half - x).hypot(half - y);
            (radius / step).round() as u64
        })
        .collect()
}

/// Renders the full-color interference field of a [`ThinFilm`]
///
/// The intensity only depends on the quantized radius, so each distinct
/// radius bucket is evaluated once and the grid is filled by lookup. Buckets
/// beyond the total internal reflection limit render black.
pub struct FieldRenderer<'a> {
    film: &'a ThinFilm,
}
impl<'a> FieldRenderer<'a> {
    pub fn new(film: &'a ThinFilm) -> Self {
        Self { film }
    }
    /// Renders the field
    pub fn field(&self) -> FieldImage {
        let film = self.film;
        let buckets = radius_buckets(film.side, film.points, film.quantization);
        let evaluated: Vec<(u64, Option<Rgb>)> = buckets
            .iter()
            .copied()
            .unique()
            .collect::<Vec<u64>>()
            .into_par_iter()
            .map(|bucket| {
                let radius = bucket as f64 * film.quantization;
                match film.intensity_at(radius) {
                    Ok(rgb) => (bucket, Some(rgb)),
                    Err(FilmError::TotalInternalReflection { .. }) => (bucket, None),
                }
            })
            .collect();
        let dark = evaluated.iter().filter(|(_, rgb)| rgb.is_none()).count();
        if dark > 0 {
            log::warn!(
                "{dark} radius bucket(s) beyond the total internal reflection limit rendered black"
            );
        }
        let cache: HashMap<u64, Rgb> = evaluated
            .into_iter()
            .map(|(bucket, rgb)| (bucket, rgb.unwrap_or_else(Rgb::zeros)))
            .collect();
        FieldImage {
            field: buckets.into_iter().map(|bucket| cache[&bucket]).collect(),
            points: film.points,
            side: film.side,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn bucket_idempotence() {
        let step = 1e-3;
        // radii equal once quantized share a bucket
        assert_eq!(
            (0.7071_f64 / step).round() as u64,
            (0.70749_f64 / step).round() as u64
        );
        assert_eq!(radius_buckets(1., 4, step), radius_buckets(1., 4, step));
    }

    #[test]
    fn cached_pixels_are_identical() {
        let film = ThinFilm::new(&Config::default().points(4)).unwrap();
        let field = FieldRenderer::new(&film).field();
        assert_eq!(field.points(), 4);
        assert_eq!(field.side(), 1.);
        // the 4 nodes at radius 0.25 sqrt(2) from the center share one cached value
        let inner = field.pixel(1, 1);
        for (i, j) in [(1, 3), (3, 1), (3, 3)] {
            assert_eq!(inner, field.pixel(i, j));
        }
        // the (0,0) corner sits at radius 0.5 sqrt(2), a different bucket
        assert_ne!(inner, field.pixel(0, 0));
    }

    #[test]
    fn render_twice_bit_for_bit() {
        let film = ThinFilm::new(&Config::default().points(8)).unwrap();
        let first = FieldRenderer::new(&film).field();
        let second = FieldRenderer::new(&film).field();
        assert_eq!(first.pixels(), second.pixels());
    }

    #[test]
    fn dark_beyond_total_internal_reflection() {
        let film = ThinFilm::new(&Config::default().n1(1.5).n2(1.).side(8.).points(5)).unwrap();
        // the corners sit beyond f tan(asin(n2/n1)) = 4.47, the center does not
        let field = FieldRenderer::new(&film).field();
        assert_eq!(field.pixel(0, 0), &Rgb::zeros());
        assert_ne!(field.pixel(2, 2), &Rgb::zeros());
    }
}
