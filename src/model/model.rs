use super::{
    coarse::coarse_flow,
    fine::fine_flow,
    ops::warp,
    params,
};

use crate::common::*;
use tch_tensor_like::TensorLike;

// input type

#[derive(Debug, TensorLike)]
pub struct FlowFieldInput {
    pub frame_t: Tensor,
    pub frame_tp1: Tensor,
}

// output type

#[derive(Debug, TensorLike)]
pub struct FlowFieldOutput {
    /// Final flow field, coarse estimate plus fine correction.
    pub flow: Tensor,
    // intermediates
    pub coarse_flow: Tensor,
    pub fine_flow: Tensor,
    pub coarse_frame_tp1: Tensor,
}

#[derive(Debug, Clone)]
pub struct FlowFieldInit {
    pub frame_channels: i64,
}

impl FlowFieldInit {
    pub fn new(frame_channels: i64) -> Self {
        Self { frame_channels }
    }

    /// Registers both flow networks under `path` and returns the forward
    /// pass: coarse estimate, warp of frame t toward t+1, fine residual
    /// correction, residual sum.
    pub fn build<'p, P>(self, path: P) -> Box<dyn Fn(&FlowFieldInput) -> FlowFieldOutput + Send>
    where
        P: Borrow<nn::Path<'p>>,
    {
        let path = path.borrow();
        let Self { frame_channels } = self;

        debug!(
            "initialize flow field model with {} frame channels",
            frame_channels
        );

        let coarse_net = coarse_flow(path / "coarse_flow", frame_channels);
        let fine_net = fine_flow(path / "fine_flow", frame_channels);

        Box::new(move |input: &FlowFieldInput| -> FlowFieldOutput {
            let FlowFieldInput { frame_t, frame_tp1 } = input;

            let coarse_flow = coarse_net(frame_t, frame_tp1);
            debug_assert_eq!(coarse_flow.size4().unwrap().1, params::FLOW_CHANNELS);

            let coarse_frame_tp1 = warp(frame_t, &coarse_flow);
            let fine_flow = fine_net(frame_t, frame_tp1, &coarse_flow, &coarse_frame_tp1);
            let flow = &fine_flow + &coarse_flow;

            FlowFieldOutput {
                flow,
                coarse_flow,
                fine_flow,
                coarse_frame_tp1,
            }
        })
    }
}
