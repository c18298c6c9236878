//! Recoat Pipeline — the debounced render loop.
//!
//! Owns the current parameters, source bitmap, and output bitmap, and
//! drives `recoat-core`'s bake + apply on a dedicated worker thread.
//! Bursts of parameter changes (slider drags) are coalesced: at most one
//! render pass runs at a time, always with the latest values.
//!
//! Output is published from the worker thread; subscribers that own
//! UI state are responsible for marshalling back to their own context.

mod pipeline;

pub use pipeline::{DEFAULT_DEBOUNCE, PipelineStats, RenderPipeline};
