//! CLI library components for the remap tool.

pub mod distribute;
pub mod logging;
pub mod pipeline;
