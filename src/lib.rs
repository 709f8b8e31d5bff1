/*!
# Fringe maps

Thin-film interference fringe pattern renderer: a thin dielectric layer
illuminated through a lens of fixed focal length produces fringes of equal
inclination, and this crate computes the resulting color field and exports it
as an image.

The optical model sums, over the illumination wavelengths, the two-beam
interference intensity weighted by each wavelength's perceptual color. The
intensity only depends on the distance to the optical axis, so the renderer
evaluates one intensity per quantized radius and fills the square field by
lookup.

## Usage

```rust,no_run
use fringe_maps::{Config, FieldRenderer, ThinFilm};

# fn main() -> anyhow::Result<()> {
let film = ThinFilm::new(&Config::default())?;
let field = FieldRenderer::new(&film).field();
field.save_png("fringes.png")?;
# Ok(())
# }
```
*/

mod config;
mod error;
pub mod film;
pub mod maps;
pub mod render;
pub mod spectrum;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use film::{FilmError, ThinFilm};
pub use maps::MapsError;
pub use render::{FieldImage, FieldRenderer};
pub use spectrum::{wavelength_to_rgb, Rgb, WavelengthSet};
