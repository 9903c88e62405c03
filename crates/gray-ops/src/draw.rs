//! Drawing primitives for packed grayscale images.
//!
//! # Functions
//!
//! - [`line`] - Draw a line between two points (Bresenham's algorithm)
//! - [`line_points`] - Pixels a line would cover, without drawing
//! - [`triangle_shape`] - Draw a triangle outline
//! - [`fill_neighbors`] - Paint the 4-connected neighbors of a point
//!
//! # Coordinates
//!
//! Points are `(x, y)` with `x` addressing the image **row** and `y` the
//! **column**, i.e. a point maps to `set_point(x, y)`. Coordinates are
//! signed so that callers can pass computed values; anything outside the
//! image is rejected with [`OpsError::OutOfBounds`] before a pixel is
//! written.

use crate::{OpsError, OpsResult};
use gray_core::PixelStore;
use tracing::trace;

/// Iterator over the pixels of an integer line.
///
/// Yields `(x, y)` pairs. Lines are walked along their major axis from the
/// smaller coordinate to the larger one, so both endpoint orders yield the
/// same pixels.
///
/// The walk state is kept in `i128`, so any pair of `i64` endpoints is
/// accepted; only the yielded points are narrowed back to `i64`.
#[derive(Debug, Clone)]
pub struct LineIter {
    x: i128,
    x_end: i128,
    y: i128,
    y_step: i128,
    dx: i128,
    derror: i128,
    error: i128,
    steep: bool,
}

impl LineIter {
    /// Creates an iterator from `(x0, y0)` to `(x1, y1)`, both inclusive.
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        let (mut x0, mut y0) = (i128::from(x0), i128::from(y0));
        let (mut x1, mut y1) = (i128::from(x1), i128::from(y1));

        let steep = (x0 - x1).abs() < (y0 - y1).abs();
        if steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = y1 - y0;
        Self {
            x: x0,
            x_end: x1,
            y: y0,
            y_step: if y1 > y0 { 1 } else { -1 },
            dx,
            derror: dy.abs() * 2,
            error: 0,
            steep,
        }
    }

    /// Number of points left to yield.
    ///
    /// Can exceed `usize::MAX` for lines spanning most of the `i64` range.
    pub fn remaining(&self) -> u128 {
        u128::try_from(self.x_end - self.x + 1).unwrap_or(0)
    }
}

impl Iterator for LineIter {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x > self.x_end {
            return None;
        }
        // Both coordinates stay between the endpoints, which came from i64
        let (x, y) = (self.x as i64, self.y as i64);
        let point = if self.steep { (y, x) } else { (x, y) };

        self.error += self.derror;
        if self.error > self.dx {
            self.y += self.y_step;
            self.error -= self.dx * 2;
        }
        self.x += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Returns the pixels [`line`] would paint, in walk order.
///
/// # Example
///
/// ```rust
/// use gray_ops::draw::line_points;
///
/// let pts = line_points(0, 0, 4, 2);
/// assert_eq!(pts, vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]);
/// ```
pub fn line_points(x0: i64, y0: i64, x1: i64, y1: i64) -> Vec<(i64, i64)> {
    LineIter::new(x0, y0, x1, y1).collect()
}

/// Draw a line from `(x0, y0)` to `(x1, y1)` with Bresenham's algorithm.
///
/// Both endpoints are inclusive. Every pixel of the line lies inside the
/// endpoints' bounding box, so checking the endpoints is enough: on error
/// nothing has been drawn.
///
/// # Arguments
///
/// * `image` - Destination pixel store
/// * `x0`, `y0` - Start point (row, column)
/// * `x1`, `y1` - End point (row, column)
/// * `color` - Gray value to paint
///
/// # Example
///
/// ```rust
/// use gray_core::{PackedImage, PixelStore};
/// use gray_ops::draw::line;
///
/// let mut img = PackedImage::new("diag", 10, 10, 255).unwrap();
/// line(&mut img, 0, 0, 9, 9, 255).unwrap();
/// assert_eq!(img.get_point(5, 5).unwrap(), 255);
/// ```
pub fn line<S: PixelStore + ?Sized>(
    image: &mut S,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    color: u8,
) -> OpsResult<()> {
    check_point(image, x0, y0)?;
    check_point(image, x1, y1)?;
    trace!(x0, y0, x1, y1, color, "line");

    for (x, y) in LineIter::new(x0, y0, x1, y1) {
        image.set_point(x as usize, y as usize, color)?;
    }
    Ok(())
}

/// Draw the outline of a triangle.
///
/// Vertices are ordered by ascending `x` before the three edges are drawn.
/// No interior fill is performed. All vertices are checked before drawing.
///
/// # Example
///
/// ```rust
/// use gray_core::{PackedImage, PixelStore};
/// use gray_ops::draw::triangle_shape;
///
/// let mut img = PackedImage::new("tri", 100, 100, 255).unwrap();
/// img.fill(255);
/// triangle_shape(&mut img, 33, 33, 88, 88, 0, 60, 0).unwrap();
/// assert_eq!(img.get_point(0, 60).unwrap(), 0);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn triangle_shape<S: PixelStore + ?Sized>(
    image: &mut S,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    x2: i64,
    y2: i64,
    color: u8,
) -> OpsResult<()> {
    let mut a = (x0, y0);
    let mut b = (x1, y1);
    let mut c = (x2, y2);
    for &(x, y) in &[a, b, c] {
        check_point(image, x, y)?;
    }

    if a.0 > b.0 {
        std::mem::swap(&mut a, &mut b);
    }
    if a.0 > c.0 {
        std::mem::swap(&mut a, &mut c);
    }
    if b.0 > c.0 {
        std::mem::swap(&mut b, &mut c);
    }
    trace!(?a, ?b, ?c, color, "triangle");

    line(image, a.0, a.1, b.0, b.1, color)?;
    line(image, b.0, b.1, c.0, c.1, color)?;
    line(image, c.0, c.1, a.0, a.1, color)
}

/// Paint the 4-connected neighbors of `(x, y)`.
///
/// Neighbors outside the image are skipped; the point itself is not
/// painted. Returns the number of pixels painted.
pub fn fill_neighbors<S: PixelStore + ?Sized>(
    image: &mut S,
    x: i64,
    y: i64,
    color: u8,
) -> OpsResult<usize> {
    check_point(image, x, y)?;

    let mut painted = 0;
    for (nx, ny) in [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)] {
        if let Ok((row, col)) = check_point(image, nx, ny) {
            image.set_point(row, col, color)?;
            painted += 1;
        }
    }
    trace!(x, y, painted, "fill_neighbors");
    Ok(painted)
}

/// Converts a signed point to `(row, col)` if it lies inside the image.
///
/// This is the check [`line`] runs on its endpoints; callers walking
/// [`LineIter`] themselves can use it to get the same guarantee.
pub fn check_point<S: PixelStore + ?Sized>(
    image: &S,
    x: i64,
    y: i64,
) -> OpsResult<(usize, usize)> {
    let row = usize::try_from(x).ok().filter(|&r| r < image.height());
    let col = usize::try_from(y).ok().filter(|&c| c < image.width());
    match (row, col) {
        (Some(row), Some(col)) => Ok((row, col)),
        _ => Err(OpsError::OutOfBounds {
            x,
            y,
            width: image.width(),
            height: image.height(),
        }),
    }
}
