//! Truth-value curve evaluation.
//!
//! [`Curve`] samples a membership function at unit-integer steps across a
//! variable's range, yielding the `(x, y)` points a front end plots. Sampling
//! runs from `floor(range_min)` to `floor(range_max)` inclusive. Evaluation is
//! total: degenerate parameters produce defined values (see the trapezoid
//! override below), never errors.

use crate::mf::{MembershipFunction, MfShape};

/// A finite, restartable sequence of `(x, y)` samples. Cloning restarts the
/// iteration from the first sample.
#[derive(Debug, Clone)]
pub struct Curve {
    samples: Vec<(i64, f64)>,
    next: usize,
}

impl Curve {
    pub fn new(mf: &MembershipFunction, range_min: f64, range_max: f64) -> Curve {
        let x0 = range_min.floor() as i64;
        let x1 = range_max.floor() as i64;
        let xs: Vec<i64> = (x0..=x1).collect();

        let ys = match *mf.shape() {
            MfShape::Gaussian {
                sigma,
                mean,
                height,
            } => xs.iter().map(|&x| gaussian(x as f64, sigma, mean, height)).collect(),
            MfShape::GaussianB {
                left_sigma,
                left_mean,
                right_sigma,
                right_mean,
                height,
            } => gaussian_b(
                &xs, left_sigma, left_mean, right_sigma, right_mean, height,
            ),
            MfShape::Triangular {
                left,
                mean,
                right,
                height,
            } => xs
                .iter()
                .map(|&x| {
                    let x = x as f64;
                    let a = (x - left) / (mean - left);
                    let b = (right - x) / (right - mean);
                    height * a.min(b).max(0.0)
                })
                .collect(),
            MfShape::Trapezoidal {
                left_foot,
                left_shoulder,
                right_shoulder,
                right_foot,
                height,
            } => xs
                .iter()
                .map(|&x| {
                    let x = x as f64;
                    let a = (x - left_foot) / (left_shoulder - left_foot);
                    let c = (right_foot - x) / (right_foot - right_shoulder);
                    // A vertical edge (foot == shoulder) divides zero by zero
                    // exactly at the edge; the sample counts as fully true.
                    if a.is_nan() || c.is_nan() {
                        1.0
                    } else {
                        height * a.min(1.0).min(c).max(0.0)
                    }
                })
                .collect(),
        };

        Curve {
            samples: xs.into_iter().zip(ys).collect(),
            next: 0,
        }
    }

    pub fn samples(&self) -> &[(i64, f64)] {
        &self.samples
    }
}

impl Iterator for Curve {
    type Item = (i64, f64);

    fn next(&mut self) -> Option<(i64, f64)> {
        let s = self.samples.get(self.next).copied();
        if s.is_some() {
            self.next += 1;
        }
        s
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.samples.len() - self.next;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Curve {}

fn gaussian(x: f64, sigma: f64, mean: f64, height: f64) -> f64 {
    height * (-((x - mean).powi(2)) / (2.0 * sigma.powi(2))).exp()
}

/// Two-sided Gaussian. Samples at `x <= left_mean` use the left branch,
/// samples at `x >= right_mean` the right branch (left wins where both apply),
/// and samples strictly between the means default to zero, except the single
/// sample after the last left-branch sample, which is patched to the mean of
/// its two neighbors. The patch is a persisted-format compatibility artifact,
/// not a formula; it is skipped when no left-branch sample exists or a
/// neighbor would fall outside the range.
fn gaussian_b(
    xs: &[i64],
    left_sigma: f64,
    left_mean: f64,
    right_sigma: f64,
    right_mean: f64,
    height: f64,
) -> Vec<f64> {
    let mut ys = vec![0.0; xs.len()];
    let mut last_left = None;

    for (j, &x) in xs.iter().enumerate() {
        let x = x as f64;
        if x <= left_mean {
            ys[j] = gaussian(x, left_sigma, left_mean, height);
            last_left = Some(j);
        } else if x >= right_mean {
            ys[j] = gaussian(x, right_sigma, right_mean, height);
        }
    }

    if let Some(l) = last_left {
        if l + 2 < ys.len() {
            ys[l + 1] = (ys[l] + ys[l + 2]) / 2.0;
        }
    }

    ys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mf::MembershipFunction;

    fn curve(shape: MfShape, min: f64, max: f64) -> Vec<(i64, f64)> {
        Curve::new(&MembershipFunction::new("t", shape), min, max).collect()
    }

    fn assert_close(got: &[(i64, f64)], want: &[f64], tol: f64) {
        assert_eq!(got.len(), want.len());
        for (&(x, y), &w) in got.iter().zip(want) {
            assert!(
                (y - w).abs() <= tol,
                "at x={}: got {}, want {} (±{})",
                x,
                y,
                w,
                tol
            );
        }
    }

    #[test]
    fn gaussian_unit_bell() {
        let got = curve(
            MfShape::Gaussian {
                sigma: 1.0,
                mean: 0.0,
                height: 1.0,
            },
            -2.0,
            2.0,
        );
        assert_close(&got, &[0.1353, 0.6065, 1.0, 0.6065, 0.1353], 1e-4);
        assert_eq!(got[0].0, -2);
        assert_eq!(got[4].0, 2);
    }

    #[test]
    fn gaussian_b_patches_sample_after_left_branch() {
        let got = curve(
            MfShape::GaussianB {
                left_sigma: 1.0,
                left_mean: 0.0,
                right_sigma: 1.0,
                right_mean: 3.0,
                height: 1.0,
            },
            -2.0,
            5.0,
        );
        // x=1 is the sample after the last left-branch sample (x=0); it takes
        // the mean of its neighbors (1.0 and 0.0) instead of either formula.
        assert_close(
            &got,
            &[0.1353, 0.6065, 1.0, 0.5, 0.0, 1.0, 0.6065, 0.1353],
            1e-4,
        );
    }

    #[test]
    fn gaussian_b_reversed_means_keeps_left_branch_priority() {
        // left_mean > right_mean is not rejected; both branch conditions can
        // hold and the left branch wins, so the curve peaks at left_mean and
        // the patch lands one sample later. Pinned, not endorsed.
        let got = curve(
            MfShape::GaussianB {
                left_sigma: 1.0,
                left_mean: 3.0,
                right_sigma: 1.0,
                right_mean: 0.0,
                height: 1.0,
            },
            0.0,
            5.0,
        );
        assert!((got[3].1 - 1.0).abs() < 1e-9); // x=3: left branch peak
        assert!((got[4].1 - 0.5).abs() < 1e-3); // x=4: patched neighbor mean
    }

    #[test]
    fn gaussian_b_all_right_branch_skips_patch() {
        // Every sample sits past both means: no left-branch sample, no patch.
        let got = curve(
            MfShape::GaussianB {
                left_sigma: 1.0,
                left_mean: -10.0,
                right_sigma: 1.0,
                right_mean: -5.0,
                height: 1.0,
            },
            0.0,
            3.0,
        );
        for (x, y) in got {
            let want = gaussian(x as f64, 1.0, -5.0, 1.0);
            assert!((y - want).abs() < 1e-12);
        }
    }

    #[test]
    fn triangular_ramp() {
        let got = curve(
            MfShape::Triangular {
                left: 0.0,
                mean: 5.0,
                right: 10.0,
                height: 1.0,
            },
            0.0,
            10.0,
        );
        assert_close(
            &got,
            &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0, 0.8, 0.6, 0.4, 0.2, 0.0],
            1e-9,
        );
    }

    #[test]
    fn triangular_clamps_below_zero() {
        let got = curve(
            MfShape::Triangular {
                left: 4.0,
                mean: 5.0,
                right: 6.0,
                height: 1.0,
            },
            0.0,
            10.0,
        );
        assert_eq!(got[0].1, 0.0);
        assert_eq!(got[10].1, 0.0);
        assert_eq!(got[5].1, 1.0);
    }

    #[test]
    fn trapezoid_vertical_edge_is_fully_true() {
        let got = curve(
            MfShape::Trapezoidal {
                left_foot: 0.0,
                left_shoulder: 0.0,
                right_shoulder: 5.0,
                right_foot: 5.0,
                height: 1.0,
            },
            0.0,
            5.0,
        );
        // x=0 and x=5 hit 0/0 on a degenerate edge; both are forced to 1.
        assert_close(&got, &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0], 1e-9);
    }

    #[test]
    fn trapezoid_plateau_and_slopes() {
        let got = curve(
            MfShape::Trapezoidal {
                left_foot: 0.0,
                left_shoulder: 2.0,
                right_shoulder: 4.0,
                right_foot: 6.0,
                height: 1.0,
            },
            0.0,
            6.0,
        );
        assert_close(&got, &[0.0, 0.5, 1.0, 1.0, 1.0, 0.5, 0.0], 1e-9);
    }

    #[test]
    fn height_scales_samples() {
        let got = curve(
            MfShape::Gaussian {
                sigma: 1.0,
                mean: 0.0,
                height: 0.5,
            },
            0.0,
            0.0,
        );
        assert_eq!(got, vec![(0, 0.5)]);
    }

    #[test]
    fn curve_is_restartable() {
        let c = Curve::new(
            &MembershipFunction::new(
                "t",
                MfShape::Gaussian {
                    sigma: 1.0,
                    mean: 0.0,
                    height: 1.0,
                },
            ),
            -2.0,
            2.0,
        );
        let first: Vec<_> = c.clone().collect();
        let second: Vec<_> = c.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn fractional_range_floors_both_ends() {
        let got = curve(
            MfShape::Gaussian {
                sigma: 1.0,
                mean: 0.0,
                height: 1.0,
            },
            -1.7,
            2.9,
        );
        let xs: Vec<i64> = got.iter().map(|&(x, _)| x).collect();
        assert_eq!(xs, vec![-2, -1, 0, 1, 2]);
    }
}
