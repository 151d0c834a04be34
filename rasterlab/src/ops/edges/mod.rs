//! Edge detection: derivative kernels, magnitude combination and min-max
//! normalization back into a [0, 1] field.


use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::common::{Error, Plane, Result};
use crate::field::{FieldKind, LuminanceSource, ScalarField};
use crate::image::Image;
use crate::ops::convolution::{convolve, Kernel};

/// Derivative operator used to find edges.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EdgeOperator {
    /// Horizontal and vertical Prewitt kernels, `|gx| + |gy|`.
    #[default]
    Prewitt,
    /// Horizontal and vertical Sobel kernels, `|gx| + |gy|`.
    Sobel,
    /// 4-neighbour Laplacian, `|response|`.
    #[strum(serialize = "laplacian4")]
    #[serde(rename = "laplacian4")]
    Laplacian4,
    /// 8-neighbour Laplacian, `|response|`.
    #[strum(serialize = "laplacian8")]
    #[serde(rename = "laplacian8")]
    Laplacian8,
}

impl EdgeOperator {
    /// Kernels whose absolute responses are summed.
    pub fn kernels(&self) -> Vec<Kernel> {
        match self {
            EdgeOperator::Prewitt => vec![Kernel::prewitt_x(), Kernel::prewitt_y()],
            EdgeOperator::Sobel => vec![Kernel::sobel_x(), Kernel::sobel_y()],
            EdgeOperator::Laplacian4 => vec![Kernel::laplacian()],
            EdgeOperator::Laplacian8 => vec![Kernel::laplacian_diagonal()],
        }
    }

    /// True for first-derivative operators with a horizontal and vertical kernel.
    pub fn is_directional(&self) -> bool {
        matches!(self, EdgeOperator::Prewitt | EdgeOperator::Sobel)
    }
}

/// Settings for [`apply_edge_detection`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeDetectionConfig {
    pub operator: EdgeOperator,
    /// Intensity the edges are computed on.
    pub luminance: LuminanceSource,
    /// Dark edges on white instead of white edges on black.
    pub invert: bool,
    /// Binarize the normalized magnitude: values at or above become 1, the rest 0.
    pub threshold: Option<f64>,
}

impl Default for EdgeDetectionConfig {
    fn default() -> Self {
        Self {
            operator: EdgeOperator::default(),
            luminance: LuminanceSource::default(),
            invert: false,
            threshold: None,
        }
    }
}

impl EdgeDetectionConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(threshold) = self.threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(Error::Range(format!(
                    "edge threshold {} is outside [0, 1]",
                    threshold
                )));
            }
        }
        Ok(())
    }
}

/// L1 combination `|a| + |b|` of two responses.
///
/// # Panics
/// Panics if the planes differ in size.
pub fn gradient_magnitude(a: &Plane<f64>, b: &Plane<f64>) -> Plane<f64> {
    a.zip_map(b, |x, y| x.abs() + y.abs())
}

/// Min-max normalizes a response into a [0, 1] field.
///
/// A response with no spread maps to all zeros. Spread within rounding noise of
/// the response's magnitude counts as none, so cancellation residue from
/// fractional samples does not stretch to 1.
pub fn normalize(response: &Plane<f64>) -> ScalarField {
    ScalarField::Normalized(normalize_plane(response))
}

/// Rounding noise allowed per unit of response magnitude.
const UNIFORM_TOLERANCE: f64 = 1024.0 * f64::EPSILON;

fn normalize_plane(response: &Plane<f64>) -> Plane<f64> {
    let (lo, hi) = response
        .values()
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let range = hi - lo;
    let scale = hi.abs().max(lo.abs()).max(1.0);
    if range > UNIFORM_TOLERANCE * scale {
        response.map(|&v| (v - lo) / range)
    } else {
        tracing::debug!(value = lo, "uniform response, normalizing to zero");
        response.map(|_| 0.0)
    }
}

/// Edge magnitude of `field`, normalized to [0, 1].
///
/// Pixels within the kernel radius of an edge have no gradient and are 0.
pub fn detect_edges(field: &ScalarField, operator: EdgeOperator) -> ScalarField {
    ScalarField::Normalized(edge_magnitude(field, operator))
}

fn edge_magnitude(field: &ScalarField, operator: EdgeOperator) -> Plane<f64> {
    let kernels = operator.kernels();
    let mut magnitude = Plane::new_filled(field.width(), field.height(), 0.0);
    for kernel in &kernels {
        let response = convolve(field, kernel);
        magnitude = gradient_magnitude(&magnitude, &response);
    }

    let radius = kernels.iter().map(Kernel::radius).max().unwrap_or(0);
    clear_border(&mut magnitude, radius);

    normalize_plane(&magnitude)
}

/// Zeroes the band of `radius` pixels along every edge.
///
/// Convolution copies those pixels through unchanged, so they carry input
/// intensity rather than a gradient.
fn clear_border(plane: &mut Plane<f64>, radius: usize) {
    let width = plane.width();
    let height = plane.height();
    for y in 0..height {
        for x in 0..width {
            let inside = (radius..width.saturating_sub(radius)).contains(&x)
                && (radius..height.saturating_sub(radius)).contains(&y);
            if !inside {
                plane[(x, y)] = 0.0;
            }
        }
    }
}

/// Replaces the color channels of `image` with its edge map. Alpha is kept.
pub fn apply_edge_detection(image: &mut Image, config: &EdgeDetectionConfig) -> Result<()> {
    config.validate()?;

    tracing::debug!(
        width = image.width(),
        height = image.height(),
        operator = %config.operator,
        "edge detection"
    );

    let field = ScalarField::from_image(image, config.luminance, FieldKind::Normalized);
    let mut values = edge_magnitude(&field, config.operator);

    if let Some(threshold) = config.threshold {
        values = values.map(|&v| if v >= threshold { 1.0 } else { 0.0 });
    }
    if config.invert {
        values = values.map(|&v| 1.0 - v);
    }

    ScalarField::Normalized(values).apply_to(image)
}
