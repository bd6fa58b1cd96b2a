use crate::common::*;

/// Extends an (N, C, H, W) tensor to (N, C, H+1, W) by reflecting the
/// bottom row. Used to adapt frames whose height falls one row short of
/// a multiple required by the strided convolutions.
pub fn pad_bottom_reflect(input: &Tensor) -> Tensor {
    input.reflection_pad2d(&[0, 0, 0, 1])
}

/// Warps a frame with a flow field by bilinear grid sampling.
///
/// The frame has shape (N, C, H, W) and the flow field (N, 2, H, W) with
/// per-pixel sampling coordinates normalized to [-1, 1]. The flow channels
/// move to the trailing axis to match the sampler's (N, H, W, 2) grid
/// convention. Out-of-range coordinates follow the sampler's own boundary
/// policy.
pub fn warp(frame: &Tensor, flow_field: &Tensor) -> Tensor {
    let grid = flow_field.permute(&[0, 2, 3, 1]);
    // bilinear interpolation, zero padding, align_corners = false
    frame.grid_sampler(&grid, 0, 0, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_bottom_reflect_appends_reflected_row() {
        let input = Tensor::rand(&[2, 3, 5, 4], (Kind::Float, Device::Cpu));
        let padded = pad_bottom_reflect(&input);

        assert_eq!(padded.size(), &[2, 3, 6, 4]);
        // reflection about the last row picks row H-2
        let appended = padded.select(2, 5);
        let reflected = input.select(2, 3);
        let diff = (&appended - &reflected).abs().max().double_value(&[]);
        assert_eq!(diff, 0.0);
        // existing rows are untouched
        let kept = padded.narrow(2, 0, 5);
        let diff = (&kept - &input).abs().max().double_value(&[]);
        assert_eq!(diff, 0.0);
    }

    #[test]
    fn warp_with_identity_grid_is_identity() {
        tch::manual_seed(42);
        let (height, width) = (8, 6);
        let frame = Tensor::rand(&[1, 3, height, width], (Kind::Float, Device::Cpu));

        // with align_corners = false, pixel i samples exactly at
        // normalized coordinate (2i + 1) / size - 1
        let xs = Tensor::linspace(
            -1.0 + 1.0 / width as f64,
            1.0 - 1.0 / width as f64,
            width,
            (Kind::Float, Device::Cpu),
        )
        .view([1, 1, 1, width])
        .expand(&[1, 1, height, width], false);
        let ys = Tensor::linspace(
            -1.0 + 1.0 / height as f64,
            1.0 - 1.0 / height as f64,
            height,
            (Kind::Float, Device::Cpu),
        )
        .view([1, 1, height, 1])
        .expand(&[1, 1, height, width], false);
        let flow_field = Tensor::cat(&[xs, ys], 1);

        let warped = warp(&frame, &flow_field);
        let diff = (&warped - &frame).abs().max().double_value(&[]);
        assert!(diff < 1e-5, "max abs diff {}", diff);
    }
}
