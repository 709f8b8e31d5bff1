use std::time::Instant;

use fringe_maps::{maps, Config, FieldRenderer, ThinFilm};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "fringe-maps", about = "Thin-film interference fringe pattern renderer")]
struct Opt {
    /// Refractive index of the incident medium
    #[structopt(long, default_value = "1.0")]
    n1: f64,
    /// Refractive index of the film
    #[structopt(long, default_value = "1.5")]
    n2: f64,
    /// Film thickness [m]
    #[structopt(short, long, default_value = "1e-3")]
    thickness: f64,
    /// Lens focal length
    #[structopt(short, long, default_value = "5.0")]
    focal_length: f64,
    /// Illumination sample wavelengths [nm] (default: 380 to 780nm every 50nm)
    #[structopt(short, long)]
    wavelengths: Vec<f64>,
    /// Physical side length of the square field
    #[structopt(short, long, default_value = "1.0")]
    side: f64,
    /// Grid resolution [points per side]
    #[structopt(short, long, default_value = "1000")]
    points: usize,
    /// Radius cache quantization step, in the same unit as the side length
    #[structopt(long, default_value = "1e-3")]
    quantization: f64,
    /// Output image file
    #[structopt(short, long, default_value = "fringes.png")]
    output: String,
    /// Monochromatic fringe map file of the first wavelength sample
    #[structopt(long)]
    luminance: Option<String>,
    /// Save the raw field record to a pickle file
    #[structopt(long)]
    pickle: Option<String>,
    /// Plot the fringe map with labeled axes and the radial intensity profiles
    #[cfg(feature = "plot")]
    #[structopt(long)]
    plot: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let wavelengths = if opt.wavelengths.is_empty() {
        (380..780).step_by(50).map(|w| w as f64).collect()
    } else {
        opt.wavelengths.clone()
    };
    let config = Config::default()
        .n1(opt.n1)
        .n2(opt.n2)
        .thickness(opt.thickness)
        .focal_length(opt.focal_length)
        .wavelengths(wavelengths)
        .side(opt.side)
        .points(opt.points)
        .quantization(opt.quantization);
    let film = ThinFilm::new(&config)?;
    log::info!("{film}");

    let now = Instant::now();
    let field = FieldRenderer::new(&film).field();
    log::info!(
        "{0}x{0} field rendered in {1}ms",
        opt.points,
        now.elapsed().as_millis()
    );

    field.save_png(&opt.output)?;
    log::info!("fringe map saved to {}", opt.output);
    if let Some(filename) = &opt.luminance {
        maps::luminance_map(&film, film.wavelengths()[0].0, filename)?;
    }
    if let Some(filename) = &opt.pickle {
        field.save_pickle(filename)?;
    }
    #[cfg(feature = "plot")]
    if opt.plot {
        field.plot("fringes_chart.png");
        maps::radial_profile(&film, "radial_profile.png");
    }

    Ok(())
}
