//! Control-point files.

use anyhow::{bail, Context, Result};
use glam::DVec3;
use std::fs;
use std::path::Path;

/// Reads one `x y z` control point per line from `path`.
pub fn load_points(path: &Path) -> Result<Vec<DVec3>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_points(&text).with_context(|| format!("parse {}", path.display()))
}

/// Parses control points; blank lines and `#` comments are skipped.
pub fn parse_points(text: &str) -> Result<Vec<DVec3>> {
    let mut points = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let coords = line
            .split_whitespace()
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("line {}: bad number", index + 1))?;

        let [x, y, z] = coords[..] else {
            bail!("line {}: expected 3 coordinates, got {}", index + 1, coords.len());
        };
        points.push(DVec3::new(x, y, z));
    }

    Ok(points)
}
