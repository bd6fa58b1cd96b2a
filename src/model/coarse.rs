use super::params;
use crate::common::*;

/// Coarse flow network.
///
/// Stacks two frames along the channel axis, applies five convolutions
/// (k5-s2, k3-s1, k5-s2, k3-s1, k3-s1) with ReLU activations and a tanh
/// head, then recovers near-input resolution with a 4x pixel shuffle.
/// The tanh bounds the flow field in [-1, 1].
pub fn coarse_flow<'p, P>(
    path: P,
    frame_channels: i64,
) -> Box<dyn Fn(&Tensor, &Tensor) -> Tensor + Send>
where
    P: Borrow<nn::Path<'p>>,
{
    let path = path.borrow();

    let conv_config = |padding, stride| nn::ConvConfig {
        padding,
        stride,
        ..Default::default()
    };

    let hidden = params::HIDDEN_CHANNELS;
    let conv1 = nn::conv2d(
        path / "conv1",
        frame_channels * 2,
        hidden,
        5,
        conv_config(2, 2),
    );
    let conv2 = nn::conv2d(path / "conv2", hidden, hidden, 3, conv_config(1, 1));
    let conv3 = nn::conv2d(path / "conv3", hidden, hidden, 5, conv_config(2, 2));
    let conv4 = nn::conv2d(path / "conv4", hidden, hidden, 3, conv_config(1, 1));
    let conv5 = nn::conv2d(
        path / "conv5",
        hidden,
        params::COARSE_HEAD_CHANNELS,
        3,
        conv_config(1, 1),
    );

    Box::new(move |frame_t, frame_tp1| {
        let net = Tensor::cat(&[frame_t, frame_tp1], 1);
        let net = net.apply(&conv1).relu();
        let net = net.apply(&conv2).relu();
        let net = net.apply(&conv3).relu();
        let net = net.apply(&conv4).relu();
        let net = net.apply(&conv5).tanh();
        net.pixel_shuffle(params::COARSE_UPSCALE_FACTOR)
    })
}
