use {
    crate::{LatestReceiver, LatestSender, LoopError, latest},
    base::{Epoch, Stamped},
    emotion::{Classifier, EmotionLabel, classify_or_unlabeled},
    std::{
        sync::{Arc, Mutex, MutexGuard, mpsc as std_mpsc},
        thread::{self, JoinHandle},
        time::{Duration, Instant},
    },
    tokio::{
        runtime,
        sync::{mpsc, watch},
        time::{self, MissedTickBehavior},
    },
    video::{CaptureError, Frame, FrameSource},
};

const MIN_PERIOD: Duration = Duration::from_millis(1);
const MAX_PERIOD: Duration = Duration::from_secs(3600);

/// Lifecycle of an [`AcquisitionLoop`]. `Terminated` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Paused,
    Terminated,
}

/// When the consumer should feed labels to the emotion state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishMode {
    /// Only the label held at the moment of pausing.
    #[default]
    Checkpoint,
    /// Every tick's label, plus the checkpoint.
    Continuous,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoopConfig {
    target_fps: f64,
    publish: PublishMode,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            target_fps: 30.0,
            publish: PublishMode::Checkpoint,
        }
    }
}

impl LoopConfig {
    pub fn with_target_fps(mut self, target_fps: f64) -> Self {
        self.target_fps = target_fps;
        self
    }

    pub fn with_publish(mut self, publish: PublishMode) -> Self {
        self.publish = publish;
        self
    }

    pub fn target_fps(&self) -> f64 {
        self.target_fps
    }

    pub fn publish(&self) -> PublishMode {
        self.publish
    }

    /// Tick period, between 1 ms and one hour. Falls back to the default
    /// rate when `target_fps` is not a positive number.
    pub fn period(&self) -> Duration {
        let fps = if self.target_fps.is_finite() && self.target_fps > 0.0 {
            self.target_fps
        } else {
            Self::default().target_fps
        };
        Duration::try_from_secs_f64(1.0 / fps)
            .unwrap_or(MAX_PERIOD)
            .clamp(MIN_PERIOD, MAX_PERIOD)
    }
}

/// Output of one tick.
#[derive(Debug, Clone)]
pub struct TickResult {
    /// Tick counter, starting at 1. Gaps mean results were discarded.
    pub seq: u64,
    pub label: Option<EmotionLabel>,
    /// Annotated frame for display.
    pub frame: Frame,
    /// Read plus classify time.
    pub latency: Duration,
}

/// Loop events that must not be dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopEvent {
    /// Label held when the loop was paused.
    Checkpoint(Option<EmotionLabel>),
    /// Fatal capture error. The loop has terminated.
    Failed(CaptureError),
    /// Device released. Always the last event.
    Terminated,
}

/// Consumer ends of an [`AcquisitionLoop`].
#[derive(Debug)]
pub struct LoopOutputs {
    pub results: LatestReceiver<TickResult>,
    pub events: mpsc::UnboundedReceiver<LoopEvent>,
}

#[derive(Debug)]
struct Shared {
    control: watch::Sender<LoopState>,
    epoch: Epoch,
    // label of the last published tick; held while publishing and while
    // changing state so the two never interleave
    gate: Mutex<Option<EmotionLabel>>,
    events: mpsc::UnboundedSender<LoopEvent>,
}

impl Shared {
    fn gate(&self) -> MutexGuard<'_, Option<EmotionLabel>> {
        self.gate.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn state(&self) -> LoopState {
        *self.control.borrow()
    }

    // caller holds the gate
    fn enter(&self, state: LoopState) {
        if matches!(state, LoopState::Paused | LoopState::Terminated) {
            self.epoch.advance();
        }
        self.control.send_replace(state);
    }
}

struct Worker<S, C> {
    source: S,
    classifier: C,
    results: LatestSender<TickResult>,
    shared: Arc<Shared>,
    period: Duration,
    seq: u64,
}

impl<S: FrameSource, C: Classifier> Worker<S, C> {
    fn run(
        mut self,
        runtime: runtime::Runtime,
        ready: std_mpsc::SyncSender<Result<(), CaptureError>>,
    ) {
        if let Err(e) = self.source.open() {
            self.source.release();
            let _ = ready.send(Err(e));
            return;
        }
        log::info!("acquisition: device open");
        let _ = ready.send(Ok(()));

        runtime.block_on(self.ticks());

        self.source.release();
        log::info!("acquisition: device released");
        let _ = self.shared.events.send(LoopEvent::Terminated);
    }

    async fn ticks(&mut self) {
        let mut control = self.shared.control.subscribe();
        let mut interval = time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            let state = *control.borrow_and_update();
            match state {
                LoopState::Running => {
                    tokio::select! {
                        biased;
                        changed = control.changed() => {
                            if changed.is_err() {
                                return;
                            }
                        }
                        _ = interval.tick() => {
                            if let Err(e) = self.tick() {
                                self.fail(e);
                                return;
                            }
                        }
                    }
                }
                LoopState::Idle => {
                    if control.changed().await.is_err() {
                        return;
                    }
                }
                LoopState::Paused => {
                    if control.changed().await.is_err() {
                        return;
                    }
                    interval.reset();
                }
                LoopState::Terminated => return,
            }
        }
    }

    /// Read, classify, publish. Only fatal capture errors come back out.
    fn tick(&mut self) -> Result<(), CaptureError> {
        // a pause can land between the interval firing and here
        let Some(epoch) = self.running_epoch() else {
            return Ok(());
        };
        let started = Instant::now();

        let frame = match self.source.read() {
            Ok(frame) => frame,
            Err(e) if e.is_transient() => {
                log::debug!("acquisition: read failed, retrying next tick: {}", e);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let classified = classify_or_unlabeled(&mut self.classifier, frame);

        self.seq += 1;
        self.publish(Stamped {
            epoch,
            inner: TickResult {
                seq: self.seq,
                label: classified.label,
                frame: classified.annotated,
                latency: started.elapsed(),
            },
        });
        Ok(())
    }

    /// Epoch this tick runs in, `None` if the loop is no longer running.
    fn running_epoch(&self) -> Option<u64> {
        let _gate = self.shared.gate();
        (self.shared.state() == LoopState::Running).then(|| self.shared.epoch.current())
    }

    fn publish(&self, result: Stamped<TickResult>) {
        let mut last_label = self.shared.gate();
        let current = match self.shared.state() {
            LoopState::Running => result.into_current(&self.shared.epoch),
            _ => None,
        };
        let Some(result) = current else {
            log::debug!("acquisition: discarding tick that outlived its run");
            return;
        };
        *last_label = result.label;
        self.results.send(result);
    }

    fn fail(&self, error: CaptureError) {
        log::error!("acquisition: {}", error);
        let _gate = self.shared.gate();
        self.shared.enter(LoopState::Terminated);
        let _ = self.shared.events.send(LoopEvent::Failed(error));
    }
}

/// Fixed-cadence read/classify loop on its own thread.
///
/// The loop owns the frame source and the classifier for its whole life.
/// `start` opens the device on the worker thread; `terminate` (or drop)
/// stops the worker and releases the device. Results go out through a
/// latest-wins channel, events through an unbounded one, see [`LoopOutputs`].
///
/// A tick that is in flight when the loop is paused or terminated runs to
/// completion, but its result is thrown away: once `pause` returns nothing
/// more is published until `resume`.
pub struct AcquisitionLoop<S: FrameSource + 'static, C: Classifier + 'static> {
    config: LoopConfig,
    shared: Arc<Shared>,
    idle: Option<Worker<S, C>>,
    handle: Option<JoinHandle<()>>,
}

impl<S: FrameSource + 'static, C: Classifier + 'static> std::fmt::Debug for AcquisitionLoop<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AcquisitionLoop")
            .field("config", &self.config)
            .field("state", &self.state())
            .field("epoch", &self.shared.epoch.current())
            .field("worker", &self.handle.is_some())
            .finish()
    }
}

impl<S: FrameSource + 'static, C: Classifier + 'static> AcquisitionLoop<S, C> {
    pub fn new(source: S, classifier: C, config: LoopConfig) -> (Self, LoopOutputs) {
        let (results_tx, results) = latest();
        let (events_tx, events) = mpsc::unbounded_channel();
        let (control, _) = watch::channel(LoopState::Idle);
        let shared = Arc::new(Shared {
            control,
            epoch: Epoch::new(),
            gate: Mutex::new(None),
            events: events_tx,
        });
        let worker = Worker {
            source,
            classifier,
            results: results_tx,
            shared: shared.clone(),
            period: config.period(),
            seq: 0,
        };
        (
            Self {
                config,
                shared,
                idle: Some(worker),
                handle: None,
            },
            LoopOutputs { results, events },
        )
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    pub fn state(&self) -> LoopState {
        self.shared.state()
    }

    /// Follow state changes, including the loop terminating itself.
    pub fn watch(&self) -> watch::Receiver<LoopState> {
        self.shared.control.subscribe()
    }

    /// Idle→Running or Paused→Running.
    ///
    /// The first start spawns the worker and waits for it to open the
    /// device. If that fails the loop is terminated and the open error
    /// returned.
    pub fn start(&mut self) -> Result<(), LoopError> {
        match self.state() {
            LoopState::Idle => {}
            LoopState::Running => return Ok(()),
            LoopState::Paused => return self.resume(),
            LoopState::Terminated => return Err(LoopError::Terminated),
        }

        let runtime = runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(LoopError::Runtime)?;
        let worker = self.idle.take().ok_or(LoopError::Terminated)?;
        let (ready_tx, ready_rx) = std_mpsc::sync_channel(1);

        let handle = match thread::Builder::new()
            .name("acquisition".to_string())
            .spawn(move || worker.run(runtime, ready_tx))
        {
            Ok(handle) => handle,
            Err(e) => {
                self.abandon();
                return Err(LoopError::Spawn(e));
            }
        };

        match ready_rx.recv() {
            Ok(Ok(())) => {
                self.handle = Some(handle);
                self.shared.control.send_replace(LoopState::Running);
                log::info!("acquisition: running at {:.1} fps", self.config.target_fps());
                Ok(())
            }
            Ok(Err(e)) => {
                log::error!("acquisition: {}", e);
                let _ = handle.join();
                self.abandon();
                Err(LoopError::Capture(e))
            }
            Err(_) => {
                let _ = handle.join();
                self.abandon();
                Err(LoopError::WorkerLost)
            }
        }
    }

    /// Running→Paused. Keeps the device open and emits
    /// [`LoopEvent::Checkpoint`] with the last published label.
    pub fn pause(&self) -> Result<(), LoopError> {
        let last_label = self.shared.gate();
        match self.shared.state() {
            LoopState::Running => {}
            LoopState::Paused => return Ok(()),
            LoopState::Terminated => return Err(LoopError::Terminated),
            from => {
                return Err(LoopError::InvalidTransition {
                    from,
                    to: LoopState::Paused,
                });
            }
        }
        self.shared.enter(LoopState::Paused);
        log::info!("acquisition: paused");
        let _ = self.shared.events.send(LoopEvent::Checkpoint(*last_label));
        Ok(())
    }

    /// Paused→Running at the same cadence.
    pub fn resume(&self) -> Result<(), LoopError> {
        let _gate = self.shared.gate();
        match self.shared.state() {
            LoopState::Paused => {}
            LoopState::Running => return Ok(()),
            LoopState::Terminated => return Err(LoopError::Terminated),
            from => {
                return Err(LoopError::InvalidTransition {
                    from,
                    to: LoopState::Running,
                });
            }
        }
        self.shared.enter(LoopState::Running);
        log::info!("acquisition: resumed");
        Ok(())
    }

    /// Stop ticking and release the device. Blocks until an in-flight tick
    /// has finished. Calling it again does nothing.
    pub fn terminate(&mut self) {
        {
            let _gate = self.shared.gate();
            if self.shared.state() != LoopState::Terminated {
                self.shared.enter(LoopState::Terminated);
                log::info!("acquisition: terminating");
            }
        }

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("acquisition: worker panicked");
                let _ = self.shared.events.send(LoopEvent::Terminated);
            }
        }

        // never started
        if let Some(mut worker) = self.idle.take() {
            worker.source.release();
            let _ = self.shared.events.send(LoopEvent::Terminated);
        }
    }

    fn abandon(&self) {
        {
            let _gate = self.shared.gate();
            self.shared.enter(LoopState::Terminated);
        }
        let _ = self.shared.events.send(LoopEvent::Terminated);
    }
}

impl<S: FrameSource + 'static, C: Classifier + 'static> Drop for AcquisitionLoop<S, C> {
    fn drop(&mut self) {
        self.terminate();
    }
}
