//! Execution of parsed commands.

use crate::cli::{self, Command, CurveArg};
use crate::input;
use anyhow::{Context, Result};
use config::constants::SamplingConfig;
use glam::DVec3;
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use swept_curve::{eval_bezier, eval_bspline_seeded, eval_circle, Curve, CurvePoint};
use swept_surface::{
    make_generalized_cylinder, make_surface_of_revolution_with, write_obj, RevolveParams,
    SeamMode, Surface,
};

/// Samples written by the curve commands.
#[derive(Serialize)]
struct CurveDump<'a> {
    kind: &'static str,
    steps: u32,
    samples: &'a [CurvePoint],
}

/// Runs one parsed command, writing results to stdout or `--out`.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Help => {
            println!("{}", cli::USAGE);
            Ok(())
        }
        Command::Curve { curve, steps } => {
            let samples = eval_curve(&curve, steps, None)?;
            info!("evaluated {} samples", samples.len());
            write_curve_json(BufWriter::new(io::stdout().lock()), &curve, steps, &samples)
        }
        Command::Revolve {
            profile,
            sampling,
            weld,
            out,
        } => {
            let surface = revolve(&profile, sampling, weld)?;
            emit(&surface, out.as_deref())
        }
        Command::Sweep {
            sweep,
            steps,
            profile_radius,
            profile_steps,
            out,
        } => {
            let sweep = eval_curve(&sweep, steps, None)?;
            let profile = eval_circle(profile_radius, profile_steps)?;
            let surface = make_generalized_cylinder(&profile, &sweep)?;
            emit(&surface, out.as_deref())
        }
    }
}

/// Evaluates a curve argument, loading control points from disk if needed.
fn eval_curve(curve: &CurveArg, steps: u32, initial_binormal: Option<DVec3>) -> Result<Curve> {
    let samples = match curve {
        CurveArg::Circle(radius) => eval_circle(*radius, steps)?,
        CurveArg::Bezier(path) => eval_bezier(&input::load_points(path)?, steps, initial_binormal)
            .with_context(|| format!("evaluate {}", path.display()))?,
        CurveArg::Bspline(path) => {
            eval_bspline_seeded(&input::load_points(path)?, steps, initial_binormal)
                .with_context(|| format!("evaluate {}", path.display()))?
        }
    };
    Ok(samples)
}

/// Builds the surface of revolution for a profile curve.
fn revolve(profile: &CurveArg, sampling: SamplingConfig, weld: bool) -> Result<Surface> {
    // Seeding +Z keeps normals of XY-plane profiles in the plane
    let profile = eval_curve(profile, sampling.curve_steps, Some(DVec3::Z))?;
    let params = RevolveParams {
        steps: sampling.revolve_steps,
        seam: if weld {
            SeamMode::Welded
        } else {
            SeamMode::Duplicate
        },
    };
    Ok(make_surface_of_revolution_with(&profile, &params)?)
}

fn write_curve_json<W: Write>(
    mut out: W,
    curve: &CurveArg,
    steps: u32,
    samples: &[CurvePoint],
) -> Result<()> {
    let dump = CurveDump {
        kind: curve.name(),
        steps,
        samples,
    };
    serde_json::to_writer_pretty(&mut out, &dump)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn emit(surface: &Surface, path: Option<&Path>) -> Result<()> {
    info!(
        "surface: {} vertices, {} triangles",
        surface.vertex_count(),
        surface.triangle_count()
    );

    match path {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            write_obj(BufWriter::new(file), surface)
                .with_context(|| format!("write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => write_obj(BufWriter::new(io::stdout().lock()), surface)?,
    }
    Ok(())
}
