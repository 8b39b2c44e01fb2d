//! Radar Chart Derivation
//!
//! Pure geometry for the detail overlay's stat radar: the four tracked
//! stats in fixed order, the dynamic axis maximum, and the SVG polygon
//! coordinates. The component only assembles these into markup.

use crate::models::Pokemon;

/// Tracked stats in display order: (stat entry name, axis label).
pub const RADAR_AXES: [(&str, &str); 4] =
    [("hp", "HP"), ("attack", "Attack"), ("defense", "Defense"), ("speed", "Speed")];

/// Values for the four axes plus the chart's upper bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadarSeries {
    pub values: [u32; 4],
    /// `max(values) + 10`, so the largest point stays below the rim.
    pub axis_max: u32,
}

/// Extract the radar series from a record; missing stats count as 0.
pub fn radar_series(pokemon: &Pokemon) -> RadarSeries {
    let mut values = [0u32; 4];
    for (i, (stat, _)) in RADAR_AXES.iter().enumerate() {
        values[i] = pokemon.stat(stat);
    }
    let axis_max = values.iter().copied().max().unwrap_or(0) + 10;
    RadarSeries { values, axis_max }
}

/// Point on axis `axis` (0 = top, clockwise) at `fraction` of the radius.
fn vertex(axis: usize, fraction: f64, cx: f64, cy: f64, radius: f64) -> (f64, f64) {
    // four axes, so each step is a quarter turn from straight up
    let angle = std::f64::consts::FRAC_PI_2 * axis as f64 - std::f64::consts::FRAC_PI_2;
    let r = radius * fraction;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// SVG `points` attribute for the value polygon.
pub fn polygon_points(values: &[u32; 4], axis_max: u32, cx: f64, cy: f64, radius: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(axis, value)| {
            let fraction = if axis_max == 0 {
                0.0
            } else {
                f64::from(*value) / f64::from(axis_max)
            };
            let (x, y) = vertex(axis, fraction, cx, cy, radius);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// SVG `points` attribute for a grid ring at `fraction` of the radius.
pub fn grid_points(fraction: f64, cx: f64, cy: f64, radius: f64) -> String {
    (0..4)
        .map(|axis| {
            let (x, y) = vertex(axis, fraction, cx, cy, radius);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Outer endpoint of each axis line, in axis order.
pub fn axis_endpoints(cx: f64, cy: f64, radius: f64) -> [(f64, f64); 4] {
    [
        vertex(0, 1.0, cx, cy, radius),
        vertex(1, 1.0, cx, cy, radius),
        vertex(2, 1.0, cx, cy, radius),
        vertex(3, 1.0, cx, cy, radius),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NamedResource, StatEntry};

    fn make_pokemon(stats: &[(&str, u32)]) -> Pokemon {
        Pokemon {
            id: 1,
            name: "pikachu".to_string(),
            types: Vec::new(),
            stats: stats
                .iter()
                .map(|(stat, value)| StatEntry {
                    base_stat: *value,
                    stat: NamedResource { name: stat.to_string() },
                })
                .collect(),
            abilities: Vec::new(),
            sprites: Default::default(),
        }
    }

    #[test]
    fn test_series_order_and_axis_max() {
        let pokemon =
            make_pokemon(&[("speed", 90), ("hp", 35), ("defense", 40), ("attack", 55)]);
        let series = radar_series(&pokemon);
        assert_eq!(series.values, [35, 55, 40, 90]); // hp, attack, defense, speed
        assert_eq!(series.axis_max, 100); // max + 10 headroom
    }

    #[test]
    fn test_missing_stats_default_to_zero() {
        let series = radar_series(&make_pokemon(&[("attack", 55)]));
        assert_eq!(series.values, [0, 55, 0, 0]);
        assert_eq!(series.axis_max, 65);

        let empty = radar_series(&make_pokemon(&[]));
        assert_eq!(empty.values, [0, 0, 0, 0]);
        assert_eq!(empty.axis_max, 10);
    }

    #[test]
    fn test_full_scale_polygon_hits_cardinal_points() {
        // every value equal to axis_max lands on the rim: top, right, bottom, left
        let points = polygon_points(&[100, 100, 100, 100], 100, 50.0, 50.0, 40.0);
        assert_eq!(points, "50.0,10.0 90.0,50.0 50.0,90.0 10.0,50.0");
    }

    #[test]
    fn test_zero_values_collapse_to_center() {
        let points = polygon_points(&[0, 0, 0, 0], 10, 50.0, 50.0, 40.0);
        assert_eq!(points, "50.0,50.0 50.0,50.0 50.0,50.0 50.0,50.0");
    }

    #[test]
    fn test_grid_ring_scales_with_fraction() {
        assert_eq!(grid_points(0.5, 50.0, 50.0, 40.0), "50.0,30.0 70.0,50.0 50.0,70.0 30.0,50.0");
    }

    #[test]
    fn test_axis_endpoints_sit_on_the_rim() {
        let ends = axis_endpoints(50.0, 50.0, 40.0);
        let expected = [(50.0, 10.0), (90.0, 50.0), (50.0, 90.0), (10.0, 50.0)];
        for ((x, y), (ex, ey)) in ends.iter().zip(expected) {
            assert!((x - ex).abs() < 1e-9 && (y - ey).abs() < 1e-9);
        }
    }
}
