//! Summary statistics and deviation from the corner plane.
use serde::Serialize;

use crate::error::Result;
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GridStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
    pub std: f32,
    /// Largest |cell − bilinear interpolation of the four grid corners|.
    pub max_plane_deviation: f32,
}

/// Bilinear blend of `[top-left, top-right, bottom-left, bottom-right]`
/// at fractional position `ty` down and `tx` across, both in [0, 1].
pub fn bilinear(corners: [f32; 4], ty: f32, tx: f32) -> f32 {
    let [v00, v01, v10, v11] = corners;
    v00 * (1.0 - tx) * (1.0 - ty) + v01 * tx * (1.0 - ty) + v10 * (1.0 - tx) * ty + v11 * tx * ty
}

/// Fails with `UnsetCell` on an incomplete grid.
pub fn compute_stats(grid: &Grid) -> Result<GridStats> {
    let data = grid.values()?;
    let corners = grid.corners()?;
    let (width, height) = (grid.width(), grid.height());

    let min = data.iter().cloned().fold(f32::INFINITY, f32::min);
    let max = data.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let n = data.len() as f64;
    let mean = data.iter().map(|&v| v as f64).sum::<f64>() / n;
    let var = data.iter().map(|&v| (v as f64 - mean).powi(2)).sum::<f64>() / n;

    // 1-wide or 1-tall grids have no extent along that axis.
    let frac = |i: usize, len: usize| if len > 1 { i as f32 / (len - 1) as f32 } else { 0.0 };
    let mut max_plane_deviation = 0.0f32;
    for r in 0..height {
        let ty = frac(r, height);
        for c in 0..width {
            let plane = bilinear(corners, ty, frac(c, width));
            max_plane_deviation = max_plane_deviation.max((data[r * width + c] - plane).abs());
        }
    }

    Ok(GridStats { min, max, mean: mean as f32, std: var.sqrt() as f32, max_plane_deviation })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use crate::params::GenerateParams;
    use approx::assert_abs_diff_eq;

    #[test]
    fn bilinear_hits_corners_and_center() {
        let c = [10.0, 20.0, 30.0, 40.0];
        assert_abs_diff_eq!(bilinear(c, 0.0, 0.0), 10.0);
        assert_abs_diff_eq!(bilinear(c, 0.0, 1.0), 20.0);
        assert_abs_diff_eq!(bilinear(c, 1.0, 0.0), 30.0);
        assert_abs_diff_eq!(bilinear(c, 1.0, 1.0), 40.0);
        assert_abs_diff_eq!(bilinear(c, 0.5, 0.5), 25.0, epsilon = 1e-5);
    }

    #[test]
    fn stats_of_known_grid() {
        let mut g = Grid::new(2, 2).unwrap();
        for (i, v) in [1.0, 3.0, 5.0, 7.0].into_iter().enumerate() {
            g.set(i / 2, i % 2, v).unwrap();
        }
        let s = compute_stats(&g).unwrap();
        assert_eq!((s.min, s.max), (1.0, 7.0));
        assert_abs_diff_eq!(s.mean, 4.0, epsilon = 1e-6);
        assert_abs_diff_eq!(s.std, 5.0f32.sqrt(), epsilon = 1e-6);
        assert_eq!(s.max_plane_deviation, 0.0);
    }

    #[test]
    fn displacement_bounded_by_geometric_amplitude_sum() {
        // Edge midpoints add one offset per depth and centers two, so with
        // flat corners no cell can stray further than 2·a₀ / (1 − r).
        for (w, h, r) in [(65, 65, 0.5), (45, 25, 0.7), (13, 9, 0.6), (1, 300, 0.9), (200, 2, 0.4)] {
            let a0 = 3.0f32;
            let p = GenerateParams::new(11, r).with_amplitude(a0).with_corners([0.0; 4]);
            let stats = compute_stats(&generate(w, h, &p).unwrap()).unwrap();
            let bound = 2.0 * a0 / (1.0 - r);
            assert!(
                stats.max_plane_deviation <= bound,
                "{w}x{h} r={r}: deviation {} exceeds {bound}", stats.max_plane_deviation
            );
            assert!(stats.max_plane_deviation > 0.0);
        }
    }

    #[test]
    fn output_scales_linearly_with_amplitude() {
        let base = GenerateParams::new(4, 0.55).with_corners([0.0; 4]);
        let one = generate(30, 19, &base.clone().with_amplitude(1.0)).unwrap().values().unwrap();
        let two = generate(30, 19, &base.with_amplitude(2.0)).unwrap().values().unwrap();
        for (a, b) in one.iter().zip(&two) {
            assert_eq!(a * 2.0, *b);
        }
    }

    #[test]
    fn finer_levels_displace_less() {
        // Neighbour differences shrink relative to long-range differences:
        // the field is spatially coherent, not white noise.
        let p = GenerateParams::new(21, 0.5).with_amplitude(8.0).with_corners([0.0; 4]);
        let g = generate(129, 129, &p).unwrap();
        let mean_diff = |lag: usize| {
            let mut sum = 0.0f64;
            let mut n = 0u32;
            for r in 0..129 {
                for c in 0..129 - lag {
                    sum += (g.get(r, c).unwrap() - g.get(r, c + lag).unwrap()).abs() as f64;
                    n += 1;
                }
            }
            sum / n as f64
        };
        assert!(mean_diff(1) < mean_diff(4));
        assert!(mean_diff(4) < mean_diff(16));
        assert!(mean_diff(16) < mean_diff(64));
    }
}
