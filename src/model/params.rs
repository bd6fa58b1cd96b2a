// flow field encoding
pub const FLOW_CHANNELS: i64 = 2;

// hyper-parameters: coarse flow network
pub const HIDDEN_CHANNELS: i64 = 24;
pub const COARSE_UPSCALE_FACTOR: i64 = 4;
pub const COARSE_HEAD_CHANNELS: i64 = 32; // = FLOW_CHANNELS * COARSE_UPSCALE_FACTOR^2

// hyper-parameters: fine flow network
pub const FINE_UPSCALE_FACTOR: i64 = 2;
pub const FINE_HEAD_CHANNELS: i64 = 8; // = FLOW_CHANNELS * FINE_UPSCALE_FACTOR^2
