//! Grayscale morphological operations
//!
//! Dilation (neighborhood maximum), erosion (neighborhood minimum),
//! and the morphological gradient (dilation minus erosion) for 2-D
//! images. The gradient highlights intensity transitions and is the
//! usual upstream supplier for RATS threshold selection.
//!
//! Pixels outside the image are handled by clamping the neighbor index
//! to the nearest edge pixel, so border gradients never see synthetic
//! values.

use crate::error::{MorphError, MorphResult};
use crate::sel::Sel;
use rats_core::{Image2, Pixel};

/// Neighborhood extremum selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extremum {
    Min,
    Max,
}

/// Dilate: each output pixel is the maximum input value over the SEL
/// neighborhood.
pub fn dilate_gray<T: Pixel>(image: &Image2<T>, sel: &Sel) -> MorphResult<Image2<T>> {
    extremum_filter(image, sel, Extremum::Max)
}

/// Erode: each output pixel is the minimum input value over the SEL
/// neighborhood.
pub fn erode_gray<T: Pixel>(image: &Image2<T>, sel: &Sel) -> MorphResult<Image2<T>> {
    extremum_filter(image, sel, Extremum::Min)
}

/// Morphological gradient: dilation minus erosion.
///
/// The output is congruent to the input and every pixel is
/// non-negative, which is exactly what a gradient-weighted reduction
/// downstream requires.
pub fn gradient_gray<T: Pixel>(image: &Image2<T>, sel: &Sel) -> MorphResult<Image2<T>> {
    let dilated = dilate_gray(image, sel)?;
    let eroded = erode_gray(image, sel)?;

    let mut output: Image2<T> = Image2::new_congruent_to(image)?;
    let pixels = output
        .as_mut_slice()
        .iter_mut()
        .zip(dilated.as_slice().iter().zip(eroded.as_slice()));
    for (out, (&dil, &ero)) in pixels {
        *out = T::from_f64(dil.to_f64() - ero.to_f64());
    }
    Ok(output)
}

fn extremum_filter<T: Pixel>(
    image: &Image2<T>,
    sel: &Sel,
    which: Extremum,
) -> MorphResult<Image2<T>> {
    if sel.is_empty() {
        return Err(MorphError::EmptySel);
    }

    let mut output: Image2<T> = Image2::new_congruent_to(image)?;
    if image.is_empty() {
        return Ok(output);
    }

    let region = image.region();
    let [x0, y0] = region.index();
    let [w, h] = region.extent();
    let (x_max, y_max) = (x0 + w as i64 - 1, y0 + h as i64 - 1);

    for y in y0..=y_max {
        for x in x0..=x_max {
            let mut best: Option<T> = None;
            for &[dx, dy] in sel.offsets() {
                let nx = (x + dx).clamp(x0, x_max);
                let ny = (y + dy).clamp(y0, y_max);
                // Clamped index is always inside the region
                let v = image.get([nx, ny]).unwrap_or(T::ZERO);
                best = Some(match best {
                    None => v,
                    Some(b) => match which {
                        Extremum::Max if v > b => v,
                        Extremum::Min if v < b => v,
                        _ => b,
                    },
                });
            }
            if let Some(b) = best {
                output.set([x, y], b)?;
            }
        }
    }
    Ok(output)
}
