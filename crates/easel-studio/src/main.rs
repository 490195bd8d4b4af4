use std::f32::consts::{PI, TAU};
use std::path::PathBuf;

use anyhow::{Context, Result};

use easel_engine::DrawError;
use easel_engine::canvas::VectorCanvas;
use easel_engine::image::Image;
use easel_engine::logging::{LoggingConfig, init_logging};
use easel_engine::paint::Color;
use easel_engine::primitives::CoordMode;
use easel_engine::shape::Shape;
use easel_engine::style::StrokeJoin;
use easel_sketch::{Frame, PixmapCanvas, Sketch, SketchConfig, SketchRunner, load_image};

const DEFAULT_OUTPUT: &str = "easel-studio.png";
const DEFAULT_FRAMES: u64 = 30;

/// Orbiting planets over a striped sky; exercises most of the drawing API.
struct Orrery {
    planet: Option<Shape>,
    badge: Option<Image>,
}

impl<C: VectorCanvas> Sketch<C> for Orrery {
    fn setup(&mut self, f: &mut Frame<'_, C>) -> Result<(), DrawError> {
        f.title("orrery");
        f.curve_resolution(32);

        // Planet with a moon: one shape tree, drawn with a single submit.
        f.fill(Color::from_rgb8(70, 130, 180));
        f.stroke_weight(2.0);
        let mut planet = f.create_shape(Some("circle"), &[0.0, 0.0, 40.0])?;
        f.fill(Color::from_rgb8(220, 220, 210));
        let mut moon = f.build_circle((0.0, 0.0), 12.0)?;
        moon.translate(34.0, 0.0);
        planet.add_child(moon);
        self.planet = Some(planet);
        Ok(())
    }

    fn draw(&mut self, f: &mut Frame<'_, C>) -> Result<(), DrawError> {
        let (w, h) = (f.width() as f32, f.height() as f32);
        let t = f.frame_count() as f32 / 30.0;

        f.background(Color::from_rgb8(18, 18, 38))?;

        // Sky stripes.
        {
            let mut s = f.scoped_style();
            s.no_stroke();
            for i in 0..6 {
                let shade = 30 + i as u8 * 8;
                s.fill(Color::from_rgba8(shade, shade, 70, 160));
                s.rect((0.0, i as f32 * 24.0), w, 12.0)?;
            }
        }

        // Sun with a chord-cut glow.
        {
            let mut s = f.scoped_style();
            s.no_stroke();
            s.fill(Color::from_rgb8(250, 200, 80));
            s.circle((w / 2.0, h / 2.0), 90.0)?;
            s.fill(Color::rgba(1.0, 0.6, 0.2, 0.5));
            s.arc_with_mode((w / 2.0, h / 2.0), 130.0, 130.0, 0.0, PI, "CHORD")?;
        }

        // Orbits.
        {
            let mut s = f.scoped_style();
            s.no_fill();
            s.stroke(Color::rgba(1.0, 1.0, 1.0, 0.3));
            s.set_stroke_join(StrokeJoin::Round);
            s.stroke_cap("round")?;
            s.ellipse((w / 2.0, h / 2.0), 360.0, 220.0)?;
            s.bezier((40.0, h - 40.0), (w / 3.0, h - 140.0), (2.0 * w / 3.0, h), (w - 40.0, h - 60.0))?;
            s.curve((0.0, h), (60.0, h - 20.0), (w - 60.0, 40.0), (w, 0.0))?;
        }

        // Planet on its orbit, moon rotating around it.
        if let Some(planet) = self.planet.as_mut() {
            let angle = t * TAU / 4.0;
            let mut m = f.scoped_matrix();
            m.translate(w / 2.0 + 180.0 * angle.cos(), h / 2.0 + 110.0 * angle.sin());
            planet.reset_transform();
            planet.rotate(t * TAU);
            m.submit(planet)?;
        }

        // Star field: deterministic points.
        {
            let mut s = f.scoped_style();
            s.no_smooth();
            s.fill(Color::WHITE);
            for i in 0..40u32 {
                let x = (i * 97 % 800) as f32;
                let y = (i * 53 % 180) as f32;
                s.point((x, y))?;
            }
        }

        // Corner badge, placed through CORNERS mode.
        {
            let mut s = f.scoped_style();
            s.rect_mode(CoordMode::Corners);
            s.fill(Color::from_rgb8(200, 60, 90));
            s.stroke(Color::WHITE);
            s.rect((w - 20.0, h - 20.0), w - 80.0, h - 50.0)?;
            s.triangle((w - 70.0, h - 25.0), (w - 50.0, h - 45.0), (w - 30.0, h - 25.0))?;
        }

        if let Some(badge) = &self.badge {
            let mut s = f.scoped_style();
            s.tint(Color::rgba(1.0, 1.0, 1.0, 0.8));
            s.image_sized(badge, (16.0, 16.0), 64.0, 64.0)?;
        }

        Ok(())
    }
}

/// `easel-studio [OUT.png] [FRAMES] [BADGE_IMAGE]`
struct Args {
    out: PathBuf,
    frames: u64,
    badge: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);
    let out = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let frames = match args.next() {
        Some(n) => n.parse().with_context(|| format!("invalid frame count `{n}`"))?,
        None => DEFAULT_FRAMES,
    };
    let badge = args.next().map(PathBuf::from);
    Ok(Args { out, frames, badge })
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let Args { out, frames, badge } = parse_args()?;
    let badge = badge.map(load_image).transpose()?;

    let config = SketchConfig::new().title("easel studio").size(800, 600);
    let canvas = PixmapCanvas::new(config.viewport()).context("failed to create canvas")?;

    let mut runner = SketchRunner::new(config, canvas, Orrery { planet: None, badge });
    let drawn = runner.run_headless(frames)?;

    let title = runner.title().to_string();
    let (_, canvas) = runner.into_parts();
    canvas.save_png(&out)?;
    log::info!("{title}: wrote {} after {drawn} frame(s)", out.display());
    Ok(())
}
