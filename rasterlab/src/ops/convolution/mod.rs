//! Direct 2D convolution of scalar fields with small square integer kernels.
//!
//! Only pixels whose full kernel footprint lies inside the grid are
//! recomputed. Border pixels within `radius` of an edge keep their input value,
//! so no read ever falls outside the grid.


use crate::common::{Error, Plane, Result};
use crate::field::ScalarField;

/// Odd-sized square kernel of signed integer weights.
///
/// Weights are addressed by offset `(dx, dy)` in `[-radius, radius]`; row
/// `dy + radius` and column `dx + radius` of the source rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    size: usize,
    weights: Vec<i32>,
}

impl Kernel {
    /// Builds a kernel from its rows, top to bottom.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Kernel> {
        let size = rows.len();
        if size % 2 == 0 {
            return Err(Error::Range(format!(
                "kernel size must be odd, got {}",
                size
            )));
        }
        if let Some(row) = rows.iter().find(|row| row.as_ref().len() != size) {
            return Err(Error::Range(format!(
                "kernel must be square: row of length {} in a {}-row kernel",
                row.as_ref().len(),
                size
            )));
        }

        let weights = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();

        Ok(Kernel { size, weights })
    }

    fn square<const N: usize>(rows: [[i32; N]; N]) -> Kernel {
        debug_assert!(N % 2 == 1);
        Kernel {
            size: N,
            weights: rows.into_iter().flatten().collect(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Weight at offset `(dx, dy)` from the center, `None` outside
    /// `[-radius, radius]`.
    #[inline]
    pub fn weight(&self, dx: isize, dy: isize) -> Option<i32> {
        let r = self.radius() as isize;
        if !(-r..=r).contains(&dx) || !(-r..=r).contains(&dy) {
            return None;
        }
        Some(self.weights[(dy + r) as usize * self.size + (dx + r) as usize])
    }

    /// Non-zero weights with their offsets.
    fn taps(&self) -> Vec<(isize, isize, f64)> {
        let r = self.radius() as isize;
        self.weights
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0)
            .map(|(i, &w)| {
                let dx = (i % self.size) as isize - r;
                let dy = (i / self.size) as isize - r;
                (dx, dy, w as f64)
            })
            .collect()
    }

    pub fn prewitt_x() -> Kernel {
        Kernel::square([[1, 1, 1], [0, 0, 0], [-1, -1, -1]])
    }

    pub fn prewitt_y() -> Kernel {
        Kernel::square([[-1, 0, 1], [-1, 0, 1], [-1, 0, 1]])
    }

    pub fn sobel_x() -> Kernel {
        Kernel::square([[1, 2, 1], [0, 0, 0], [-1, -2, -1]])
    }

    pub fn sobel_y() -> Kernel {
        Kernel::square([[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]])
    }

    /// 4-neighbour Laplacian.
    pub fn laplacian() -> Kernel {
        Kernel::square([[0, 1, 0], [1, -4, 1], [0, 1, 0]])
    }

    /// 8-neighbour Laplacian.
    pub fn laplacian_diagonal() -> Kernel {
        Kernel::square([[1, 1, 1], [1, -8, 1], [1, 1, 1]])
    }
}

/// Convolves `input` with `kernel`.
///
/// Output pixel `(x, y)` with `radius <= x < width - radius` and
/// `radius <= y < height - radius` is `sum(kernel[dx, dy] * input[x - dx, y - dy])`.
/// All other pixels are copied from `input`. A plane smaller than the kernel
/// is returned unchanged.
pub fn convolve_plane(input: &Plane<f64>, kernel: &Kernel) -> Plane<f64> {
    let width = input.width();
    let height = input.height();
    let r = kernel.radius();
    let taps = kernel.taps();

    let mut output = input.clone();

    tracing::trace!(width, height, kernel_size = kernel.size(), "convolve");

    for y in r..height.saturating_sub(r) {
        for x in r..width.saturating_sub(r) {
            let sum: f64 = taps
                .iter()
                .map(|&(dx, dy, w)| {
                    let sx = (x as isize - dx) as usize;
                    let sy = (y as isize - dy) as usize;
                    w * input[(sx, sy)]
                })
                .sum();
            output[(x, y)] = sum;
        }
    }

    output
}

/// Convolves a scalar field in its own value scale (0..255 or 0..1).
///
/// The result is an unbounded response plane of the same size; see
/// [`normalize`](crate::normalize) to bring it back into a field.
pub fn convolve(field: &ScalarField, kernel: &Kernel) -> Plane<f64> {
    convolve_plane(&field.to_samples(), kernel)
}
