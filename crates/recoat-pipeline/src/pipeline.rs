//! Debounced render pipeline: owns parameters + source + output and runs
//! bake + apply on a worker thread.

use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use recoat_core::{Bitmap, ColorCube, TintConfig, TintParams};

/// Default interval that bursts of parameter changes are coalesced over.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(10);

/// Counters for completed render passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineStats {
    /// Completed bake + apply passes.
    pub passes: u64,
    /// Wall time of the most recent pass.
    pub last_pass: Duration,
}

/// Everything the worker and the setters share. Last write wins on
/// parameters and source; only the worker writes output and stats.
struct State {
    params: TintParams,
    config: TintConfig,
    source: Option<Arc<Bitmap>>,
    output: Option<Arc<Bitmap>>,
    stats: PipelineStats,
    dirty: bool,
    shutdown: bool,
}

struct Shared {
    state: Mutex<State>,
    wake: Condvar,
    // Separate lock so the callback never runs under the state lock and
    // may itself call back into the setters.
    subscriber: Mutex<Option<Box<dyn Fn(&Bitmap) + Send>>>,
}

/// The render pipeline.
///
/// Parameter and source setters mark the state dirty and wake the worker.
/// The worker waits out the debounce interval so a slider drag collapses
/// into a single pass, snapshots the latest state, bakes a [`ColorCube`],
/// applies it, and publishes the result. At most one pass is ever in
/// flight; a mutation arriving mid-pass guarantees a follow-up pass with
/// the newest values rather than queuing one pass per mutation.
pub struct RenderPipeline {
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
}

impl RenderPipeline {
    /// Pipeline with default tuning and the default debounce interval.
    pub fn new() -> Self {
        Self::with_config(TintConfig::default(), DEFAULT_DEBOUNCE)
    }

    /// Pipeline with explicit tuning constants and debounce interval.
    pub fn with_config(config: TintConfig, debounce: Duration) -> Self {
        let shared = Arc::new(Shared {
            state: Mutex::new(State {
                params: TintParams::default(),
                config,
                source: None,
                output: None,
                stats: PipelineStats::default(),
                dirty: false,
                shutdown: false,
            }),
            wake: Condvar::new(),
            subscriber: Mutex::new(None),
        });

        let worker_shared = shared.clone();
        let worker = std::thread::Builder::new()
            .name("recoat-render".into())
            .spawn(move || worker_loop(&worker_shared, debounce))
            .expect("failed to spawn render worker");

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Register the output subscriber, replacing any previous one.
    ///
    /// The callback runs on the render worker thread; callers that own UI
    /// state must marshal to their own context.
    pub fn on_output(&self, callback: impl Fn(&Bitmap) + Send + 'static) {
        *self.shared.subscriber.lock() = Some(Box::new(callback));
    }

    /// Set the brightness delta.
    pub fn set_brightness(&self, brightness: f32) {
        self.mutate(|state| {
            let changed = state.params.brightness != brightness;
            state.params.brightness = brightness;
            changed
        });
    }

    /// Set the saturation delta.
    pub fn set_saturation(&self, saturation: f32) {
        self.mutate(|state| {
            let changed = state.params.saturation != saturation;
            state.params.saturation = saturation;
            changed
        });
    }

    /// Set the target hue in turns.
    pub fn set_target_hue(&self, target_hue: f32) {
        self.mutate(|state| {
            let changed = state.params.target_hue != target_hue;
            state.params.target_hue = target_hue;
            changed
        });
    }

    /// Replace the whole parameter set.
    pub fn set_params(&self, params: TintParams) {
        self.mutate(|state| {
            let changed = state.params != params;
            state.params = params;
            changed
        });
    }

    /// Replace the source bitmap and trigger a render.
    pub fn set_source(&self, source: Bitmap) {
        self.mutate(|state| {
            state.source = Some(Arc::new(source));
            true
        });
    }

    /// Drop the source bitmap. The last output is retained.
    pub fn clear_source(&self) {
        self.mutate(|state| {
            let changed = state.source.is_some();
            state.source = None;
            changed
        });
    }

    /// Current parameter snapshot.
    pub fn params(&self) -> TintParams {
        self.shared.state.lock().params
    }

    /// Latest published output, if any pass has completed.
    pub fn output(&self) -> Option<Arc<Bitmap>> {
        self.shared.state.lock().output.clone()
    }

    /// Render pass counters.
    pub fn stats(&self) -> PipelineStats {
        self.shared.state.lock().stats
    }

    fn mutate(&self, apply: impl FnOnce(&mut State) -> bool) {
        let mut state = self.shared.state.lock();
        if apply(&mut state) {
            state.dirty = true;
            drop(state);
            self.shared.wake.notify_one();
        }
    }
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RenderPipeline {
    fn drop(&mut self) {
        {
            let mut state = self.shared.state.lock();
            state.shutdown = true;
        }
        self.shared.wake.notify_one();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn worker_loop(shared: &Shared, debounce: Duration) {
    loop {
        {
            let mut state = shared.state.lock();
            while !state.dirty && !state.shutdown {
                shared.wake.wait(&mut state);
            }
            if state.shutdown {
                return;
            }
        }

        // Let the rest of a mutation burst land before snapshotting, so a
        // slider drag becomes one pass instead of one per event.
        if !debounce.is_zero() {
            std::thread::sleep(debounce);
        }

        let (params, config, source) = {
            let mut state = shared.state.lock();
            if state.shutdown {
                return;
            }
            state.dirty = false;
            (state.params, state.config, state.source.clone())
        };

        let Some(source) = source else {
            tracing::debug!("render skipped: no source bitmap");
            continue;
        };

        let start = Instant::now();
        let cube = ColorCube::bake(config.cube_size, &params, &config);
        match cube.apply(&source) {
            Ok(output) => {
                let elapsed = start.elapsed();
                let output = Arc::new(output);
                {
                    let mut state = shared.state.lock();
                    state.output = Some(output.clone());
                    state.stats.passes += 1;
                    state.stats.last_pass = elapsed;
                }
                tracing::debug!(
                    "render pass: {}³ cube over {}x{} in {:.2}ms",
                    config.cube_size,
                    source.width(),
                    source.height(),
                    elapsed.as_secs_f64() * 1000.0
                );
                if let Some(callback) = shared.subscriber.lock().as_ref() {
                    callback(&output);
                }
            }
            Err(err) => {
                // Failed passes publish nothing; the prior output stays.
                tracing::warn!("render pass failed: {err}");
            }
        }
    }
}
