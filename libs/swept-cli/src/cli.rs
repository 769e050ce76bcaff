//! Argument parsing for the `swept` binary.

use anyhow::{anyhow, bail, Context, Result};
use config::constants::{validate_steps, SamplingConfig, DEFAULT_PROFILE_RADIUS};
use std::path::PathBuf;

pub const USAGE: &str = r#"swept (swept-surface)

USAGE:
  swept bezier <points-file> [--steps N]
  swept bspline <points-file> [--steps N]
  swept circle <radius> [--steps N]
  swept revolve <bezier|bspline|circle> <points-file|radius> [options]
  swept sweep <bezier|bspline|circle> <points-file|radius> [options]

Curve commands print the sampled frames as JSON on stdout.
Surface commands print OBJ on stdout unless --out is given.

POINTS FILE:
  One control point per line as `x y z`; blank lines and `#` comments skipped

OPTIONS:
  --steps <N>            Samples per curve segment
  --sweep-steps <N>      Angular steps around the Y axis (revolve)
  --weld                 Share the seam vertices instead of duplicating them (revolve)
  --profile-radius <R>   Radius of the circular profile (sweep, default 0.25)
  --profile-steps <N>    Samples around the circular profile (sweep)
  --out <path>           Write OBJ to this file
  -h, --help             Show this help
"#;

/// A curve named on the command line, with the input its family needs.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveArg {
    /// Bézier chain loaded from a control-point file
    Bezier(PathBuf),
    /// Uniform cubic B-spline loaded from a control-point file
    Bspline(PathBuf),
    /// Circle of the given radius in the XY plane
    Circle(f64),
}

impl CurveArg {
    fn parse(kind: &str, word: &str) -> Result<Self> {
        match kind {
            "bezier" => Ok(Self::Bezier(PathBuf::from(word))),
            "bspline" => Ok(Self::Bspline(PathBuf::from(word))),
            "circle" => Ok(Self::Circle(parse_radius(word)?)),
            other => bail!("unknown curve kind `{other}` (expected bezier, bspline or circle)"),
        }
    }

    /// Command-line name of the curve family.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bezier(_) => "bezier",
            Self::Bspline(_) => "bspline",
            Self::Circle(_) => "circle",
        }
    }
}

/// A fully parsed invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Curve {
        curve: CurveArg,
        steps: u32,
    },
    Revolve {
        profile: CurveArg,
        sampling: SamplingConfig,
        weld: bool,
        out: Option<PathBuf>,
    },
    Sweep {
        sweep: CurveArg,
        steps: u32,
        profile_radius: f64,
        profile_steps: u32,
        out: Option<PathBuf>,
    },
}

/// Parses the arguments after the program name.
pub fn parse(args: Vec<String>) -> Result<Command> {
    let mut args = Args::new(args);

    let Some(command) = args.next() else {
        return Ok(Command::Help);
    };

    match command.as_str() {
        "bezier" | "bspline" | "circle" => {
            let curve = CurveArg::parse(&command, &args.value(&command)?)?;
            let mut steps = SamplingConfig::default().curve_steps;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--steps" => steps = args.steps("--steps")?,
                    "-h" | "--help" => return Ok(Command::Help),
                    other => bail!("unknown option `{other}`\n\n{USAGE}"),
                }
            }
            Ok(Command::Curve { curve, steps })
        }
        "revolve" => {
            let profile = args.curve("revolve")?;
            let mut curve_steps = SamplingConfig::default().curve_steps;
            let mut revolve_steps = SamplingConfig::default().revolve_steps;
            let mut weld = false;
            let mut out = None;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--steps" => curve_steps = args.steps("--steps")?,
                    "--sweep-steps" => revolve_steps = args.steps("--sweep-steps")?,
                    "--weld" => weld = true,
                    "--out" => out = Some(PathBuf::from(args.value("--out")?)),
                    "-h" | "--help" => return Ok(Command::Help),
                    other => bail!("unknown option `{other}`\n\n{USAGE}"),
                }
            }
            Ok(Command::Revolve {
                profile,
                sampling: SamplingConfig::new(curve_steps, revolve_steps)?,
                weld,
                out,
            })
        }
        "sweep" => {
            let sweep = args.curve("sweep")?;
            let mut steps = SamplingConfig::default().curve_steps;
            let mut profile_radius = DEFAULT_PROFILE_RADIUS;
            let mut profile_steps = SamplingConfig::default().curve_steps;
            let mut out = None;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--steps" => steps = args.steps("--steps")?,
                    "--profile-radius" => {
                        profile_radius = parse_radius(&args.value("--profile-radius")?)?
                    }
                    "--profile-steps" => profile_steps = args.steps("--profile-steps")?,
                    "--out" => out = Some(PathBuf::from(args.value("--out")?)),
                    "-h" | "--help" => return Ok(Command::Help),
                    other => bail!("unknown option `{other}`\n\n{USAGE}"),
                }
            }
            Ok(Command::Sweep {
                sweep,
                steps,
                profile_radius,
                profile_steps,
                out,
            })
        }
        "-h" | "--help" | "help" => Ok(Command::Help),
        other => Err(anyhow!("unknown command `{other}`\n\n{USAGE}")),
    }
}

fn parse_radius(word: &str) -> Result<f64> {
    let radius: f64 = word
        .parse()
        .with_context(|| format!("invalid radius `{word}`"))?;
    if !radius.is_finite() || radius <= 0.0 {
        bail!("radius must be a positive number, got {radius}");
    }
    Ok(radius)
}

struct Args {
    args: Vec<String>,
    pos: usize,
}

impl Args {
    fn new(args: Vec<String>) -> Self {
        Self { args, pos: 0 }
    }

    fn next(&mut self) -> Option<String> {
        let arg = self.args.get(self.pos)?.clone();
        self.pos += 1;
        Some(arg)
    }

    fn value(&mut self, flag: &str) -> Result<String> {
        self.next()
            .ok_or_else(|| anyhow!("missing value for {flag}"))
    }

    fn steps(&mut self, flag: &str) -> Result<u32> {
        let word = self.value(flag)?;
        let steps: u32 = word
            .parse()
            .with_context(|| format!("invalid value `{word}` for {flag}"))?;
        Ok(validate_steps(steps)?)
    }

    fn curve(&mut self, command: &str) -> Result<CurveArg> {
        let kind = self.value(command)?;
        CurveArg::parse(&kind, &self.value(command)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_empty_is_help() {
        assert_eq!(parse(Vec::new()).unwrap(), Command::Help);
        assert_eq!(parse(args("--help")).unwrap(), Command::Help);
    }

    #[test]
    fn test_curve_command() {
        let command = parse(args("bezier pts.txt --steps 8")).unwrap();
        assert_eq!(
            command,
            Command::Curve {
                curve: CurveArg::Bezier(PathBuf::from("pts.txt")),
                steps: 8,
            }
        );
    }

    #[test]
    fn test_circle_default_steps() {
        let command = parse(args("circle 2.5")).unwrap();
        assert_eq!(
            command,
            Command::Curve {
                curve: CurveArg::Circle(2.5),
                steps: SamplingConfig::default().curve_steps,
            }
        );
    }

    #[test]
    fn test_revolve_options() {
        let command =
            parse(args("revolve bspline vase.txt --steps 4 --sweep-steps 24 --weld --out v.obj"))
                .unwrap();
        assert_eq!(
            command,
            Command::Revolve {
                profile: CurveArg::Bspline(PathBuf::from("vase.txt")),
                sampling: SamplingConfig::new(4, 24).unwrap(),
                weld: true,
                out: Some(PathBuf::from("v.obj")),
            }
        );
    }

    #[test]
    fn test_sweep_options() {
        let command = parse(args("sweep circle 3 --profile-radius 0.5 --profile-steps 12")).unwrap();
        let Command::Sweep {
            sweep,
            profile_radius,
            profile_steps,
            out,
            ..
        } = command
        else {
            panic!("expected sweep command");
        };
        assert_eq!(sweep, CurveArg::Circle(3.0));
        assert_eq!(profile_radius, 0.5);
        assert_eq!(profile_steps, 12);
        assert_eq!(out, None);
    }

    #[test]
    fn test_curve_arg_carries_its_input() {
        let Command::Revolve { profile, .. } = parse(args("revolve circle 1.5")).unwrap() else {
            panic!("expected revolve command");
        };
        assert_eq!(profile, CurveArg::Circle(1.5));
        assert_eq!(profile.name(), "circle");

        let Command::Sweep {
            sweep,
            profile_radius,
            ..
        } = parse(args("sweep bezier path.txt")).unwrap()
        else {
            panic!("expected sweep command");
        };
        assert_eq!(sweep, CurveArg::Bezier(PathBuf::from("path.txt")));
        assert_eq!(sweep.name(), "bezier");
        assert_eq!(profile_radius, DEFAULT_PROFILE_RADIUS);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse(args("bezier")).is_err());
        assert!(parse(args("circle -1")).is_err());
        assert!(parse(args("circle abc")).is_err());
        assert!(parse(args("circle 1 --steps 0")).is_err());
        assert!(parse(args("circle 1 --steps")).is_err());
        assert!(parse(args("circle 1 --frobnicate")).is_err());
        assert!(parse(args("revolve spiral 1")).is_err());
        assert!(parse(args("explode")).is_err());
    }
}
