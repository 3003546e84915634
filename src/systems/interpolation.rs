use crate::utils::PerformanceError;

/// Bilinear interpolation over a rectangular grid.
///
/// # Arguments
/// * `x`, `y` - Point to interpolate at.
/// * `grid_x`, `grid_y` - Strictly increasing grid axes.
/// * `value_at` - Value stored at `(grid_x[i], grid_y[j])`, looked up by index pair.
///
/// # Returns
/// The interpolated value, or `PerformanceError::OutOfBounds` when the point lies
/// outside either axis (non-finite coordinates included).
pub fn bilinear_interpolate<F>(
    x: f64,
    y: f64,
    grid_x: &[f64],
    grid_y: &[f64],
    value_at: F,
) -> Result<f64, PerformanceError>
where
    F: Fn(usize, usize) -> f64,
{
    if !within_axis(grid_x, x) || !within_axis(grid_y, y) {
        return Err(PerformanceError::OutOfBounds { x, y });
    }

    let (i0, i1) = bracket(grid_x, x);
    let (j0, j1) = bracket(grid_y, y);

    // Exact grid point, no weights to compute
    if i0 == i1 && j0 == j1 {
        return Ok(value_at(i0, j0));
    }

    let tx = fraction(grid_x[i0], grid_x[i1], x);
    let ty = fraction(grid_y[j0], grid_y[j1], y);

    let v00 = value_at(i0, j0);
    let v10 = value_at(i1, j0);
    let v01 = value_at(i0, j1);
    let v11 = value_at(i1, j1);

    Ok((1.0 - tx) * (1.0 - ty) * v00
        + tx * (1.0 - ty) * v10
        + (1.0 - tx) * ty * v01
        + tx * ty * v11)
}

fn within_axis(axis: &[f64], value: f64) -> bool {
    match (axis.first(), axis.last()) {
        (Some(&lo), Some(&hi)) => lo <= value && value <= hi,
        _ => false,
    }
}

/// Indices of the tightest grid values enclosing `value`; equal when `value` is on the grid.
/// `value` must already be within the axis.
fn bracket(axis: &[f64], value: f64) -> (usize, usize) {
    let upper = axis
        .partition_point(|&g| g < value)
        .min(axis.len() - 1);
    if axis[upper] == value {
        (upper, upper)
    } else {
        (upper.saturating_sub(1), upper)
    }
}

#[inline]
fn fraction(lo: f64, hi: f64, value: f64) -> f64 {
    if hi == lo {
        0.0
    } else {
        (value - lo) / (hi - lo)
    }
}
