#![allow(dead_code)]

use {
    emotion::{ClassificationError, ClassificationResult, Classifier, EmotionLabel},
    std::{
        collections::VecDeque,
        sync::{
            Arc, Mutex,
            atomic::{AtomicUsize, Ordering},
            mpsc,
        },
        time::{Duration, Instant},
    },
    video::{CaptureError, Frame, FrameSource, PixelFormat},
};

pub const WAIT: Duration = Duration::from_secs(2);

/// What the mock source does on one read.
pub enum Step {
    Frame,
    Fail(CaptureError),
    /// Signal `entered`, then block until `proceed` fires.
    Block {
        entered: mpsc::Sender<()>,
        proceed: mpsc::Receiver<()>,
    },
}

/// Counters shared between a test and its mock source.
#[derive(Default)]
pub struct Probe {
    opens: AtomicUsize,
    reads: AtomicUsize,
    releases: AtomicUsize,
    read_times: Mutex<Vec<Instant>>,
}

impl Probe {
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    pub fn read_times(&self) -> Vec<Instant> {
        self.read_times.lock().unwrap().clone()
    }
}

/// Frame source that plays a script, then yields frames forever.
pub struct MockSource {
    probe: Arc<Probe>,
    script: VecDeque<Step>,
    open_error: Option<CaptureError>,
    open: bool,
}

impl MockSource {
    pub fn new(script: Vec<Step>) -> (Self, Arc<Probe>) {
        let probe = Arc::new(Probe::default());
        (
            Self {
                probe: probe.clone(),
                script: script.into(),
                open_error: None,
                open: false,
            },
            probe,
        )
    }

    pub fn frames() -> (Self, Arc<Probe>) {
        Self::new(Vec::new())
    }

    pub fn failing_open(error: CaptureError) -> (Self, Arc<Probe>) {
        let (mut source, probe) = Self::new(Vec::new());
        source.open_error = Some(error);
        (source, probe)
    }
}

impl FrameSource for MockSource {
    fn open(&mut self) -> Result<(), CaptureError> {
        self.probe.opens.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = self.open_error.clone() {
            return Err(e);
        }
        self.open = true;
        Ok(())
    }

    fn read(&mut self) -> Result<Frame, CaptureError> {
        assert!(self.open, "read on a released source");
        self.probe.reads.fetch_add(1, Ordering::SeqCst);
        self.probe.read_times.lock().unwrap().push(Instant::now());
        match self.script.pop_front() {
            None | Some(Step::Frame) => {}
            Some(Step::Fail(e)) => return Err(e),
            Some(Step::Block { entered, proceed }) => {
                entered.send(()).unwrap();
                proceed.recv().unwrap();
            }
        }
        Frame::new(2, 2, PixelFormat::Gray8, vec![0, 64, 128, 255])
    }

    fn release(&mut self) {
        self.probe.releases.fetch_add(1, Ordering::SeqCst);
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

/// Classifier that plays a label script, repeating the last label.
pub struct ScriptedClassifier {
    labels: VecDeque<Option<EmotionLabel>>,
    last: Option<EmotionLabel>,
    delay: Duration,
}

impl ScriptedClassifier {
    pub fn new(labels: Vec<Option<EmotionLabel>>) -> Self {
        Self {
            labels: labels.into(),
            last: None,
            delay: Duration::ZERO,
        }
    }

    pub fn always(label: EmotionLabel) -> Self {
        Self::new(vec![Some(label)])
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Classifier for ScriptedClassifier {
    fn classify(&mut self, frame: &Frame) -> Result<ClassificationResult, ClassificationError> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        if let Some(label) = self.labels.pop_front() {
            self.last = label;
        }
        Ok(ClassificationResult::new(self.last, frame.clone()))
    }
}

pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    let deadline = Instant::now() + WAIT;
    while !condition() {
        assert!(Instant::now() < deadline, "condition not reached in time");
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

pub fn gaps(times: &[Instant]) -> Vec<Duration> {
    times.windows(2).map(|w| w[1] - w[0]).collect()
}

pub fn median(mut values: Vec<Duration>) -> Duration {
    values.sort();
    values[values.len() / 2]
}
