use {
    crate::{
        AcquisitionLoop, DispatchError, LatestReceiver, LoopConfig, LoopEvent,
        LoopOutputs, LoopState, PublishMode, TickResult,
    },
    content::{
        ContentSource, PlaylistConfig, PlaylistEntry, PlaylistNavigator,
        player_address,
    },
    emotion::{Classifier, DistressChange, EmotionLabel, EmotionState, EmotionStateMachine},
    std::collections::VecDeque,
    tokio::sync::{mpsc, watch},
    url::Url,
    video::{CaptureError, FrameSource},
};

/// Which reactive actions are currently allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub jokes: bool,
    pub videos: bool,
}

impl Capabilities {
    pub fn for_distress(distressed: bool) -> Self {
        Self {
            jokes: distressed,
            videos: distressed,
        }
    }
}

/// What the presentation layer gets out of [`Dispatcher::next`].
#[derive(Debug, Clone)]
pub enum DispatchEvent {
    Frame(TickResult),
    Distress(DistressChange),
    /// Reported once. A `Terminated` event follows.
    CaptureFailed(CaptureError),
    Terminated,
}

/// A playlist entry together with the address that plays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoLink {
    pub entry: PlaylistEntry,
    pub address: Url,
}

/// Loop and playlist settings. The player address comes from the
/// [`ContentSource`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DispatcherConfig {
    acquisition: LoopConfig,
    playlist: PlaylistConfig,
}

impl DispatcherConfig {
    pub fn with_acquisition(mut self, acquisition: LoopConfig) -> Self {
        self.acquisition = acquisition;
        self
    }

    pub fn with_playlist(mut self, playlist: PlaylistConfig) -> Self {
        self.playlist = playlist;
        self
    }

    pub fn acquisition(&self) -> &LoopConfig {
        &self.acquisition
    }

    pub fn playlist(&self) -> &PlaylistConfig {
        &self.playlist
    }
}

/// Wires the acquisition loop into the emotion state machine, and the
/// state machine into the capability flags that gate jokes and videos.
///
/// Drive it by awaiting [`Dispatcher::next`] in a loop on the consumer side.
/// The playlist has a single writer: every navigation call goes through
/// `&mut self`, so whoever owns the dispatcher is that writer.
pub struct Dispatcher<S, C, P>
where
    S: FrameSource + 'static,
    C: Classifier + 'static,
    P: ContentSource,
{
    acquisition: AcquisitionLoop<S, C>,
    results: LatestReceiver<TickResult>,
    results_open: bool,
    events: mpsc::UnboundedReceiver<LoopEvent>,
    emotions: EmotionStateMachine,
    capabilities: watch::Sender<Capabilities>,
    playlist: PlaylistNavigator,
    content: P,
    player: Url,
    pending: VecDeque<DispatchEvent>,
    failure_reported: bool,
    finished: bool,
}

impl<S, C, P> Dispatcher<S, C, P>
where
    S: FrameSource + 'static,
    C: Classifier + 'static,
    P: ContentSource,
{
    pub fn new(
        source: S,
        classifier: C,
        content: P,
        config: DispatcherConfig,
    ) -> Result<Self, DispatchError> {
        let player = content.player_base()?;
        let (acquisition, LoopOutputs { results, events }) =
            AcquisitionLoop::new(source, classifier, config.acquisition().clone());
        let (capabilities, _) = watch::channel(Capabilities::default());
        Ok(Self {
            acquisition,
            results,
            results_open: true,
            events,
            emotions: EmotionStateMachine::new(),
            capabilities,
            playlist: PlaylistNavigator::new(config.playlist().clone()),
            content,
            player,
            pending: VecDeque::new(),
            failure_reported: false,
            finished: false,
        })
    }

    pub fn start(&mut self) -> Result<(), DispatchError> {
        Ok(self.acquisition.start()?)
    }

    pub fn pause(&self) -> Result<(), DispatchError> {
        Ok(self.acquisition.pause()?)
    }

    pub fn resume(&self) -> Result<(), DispatchError> {
        Ok(self.acquisition.resume()?)
    }

    pub fn terminate(&mut self) {
        self.acquisition.terminate();
    }

    pub fn loop_state(&self) -> LoopState {
        self.acquisition.state()
    }

    pub fn emotion_state(&self) -> EmotionState {
        self.emotions.state()
    }

    /// Follow capability changes.
    pub fn capabilities(&self) -> watch::Receiver<Capabilities> {
        self.capabilities.subscribe()
    }

    pub fn current_capabilities(&self) -> Capabilities {
        *self.capabilities.borrow()
    }

    pub fn playlist(&self) -> &PlaylistNavigator {
        &self.playlist
    }

    /// Results dropped unread because the consumer fell behind.
    pub fn overwrites(&self) -> u64 {
        self.results.overwrites()
    }

    /// Next event, or `None` after [`DispatchEvent::Terminated`] was handed out.
    pub async fn next(&mut self) -> Option<DispatchEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            if self.finished {
                return None;
            }

            tokio::select! {
                biased;
                event = self.events.recv() => match event {
                    Some(event) => self.on_loop_event(event),
                    None => self.finish(),
                },
                result = self.results.recv(), if self.results_open => match result {
                    Some(result) => self.on_result(result),
                    None => self.results_open = false,
                },
            }
        }
    }

    fn on_result(&mut self, result: TickResult) {
        let label = result.label;
        self.pending.push_back(DispatchEvent::Frame(result));
        if self.acquisition.config().publish() == PublishMode::Continuous {
            self.apply(label);
        }
    }

    fn on_loop_event(&mut self, event: LoopEvent) {
        match event {
            LoopEvent::Checkpoint(label) => self.apply(label),
            LoopEvent::Failed(error) => {
                if !self.failure_reported {
                    self.failure_reported = true;
                    self.pending.push_back(DispatchEvent::CaptureFailed(error));
                }
            }
            LoopEvent::Terminated => self.finish(),
        }
    }

    fn apply(&mut self, label: Option<EmotionLabel>) {
        if let Some(change) = self.emotions.apply(label) {
            self.capabilities
                .send_replace(Capabilities::for_distress(change.distressed));
            self.pending.push_back(DispatchEvent::Distress(change));
        }
    }

    fn finish(&mut self) {
        if !self.finished {
            self.finished = true;
            self.pending.push_back(DispatchEvent::Terminated);
        }
    }

    fn require(&self, allowed: bool, action: &'static str) -> Result<(), DispatchError> {
        if allowed {
            Ok(())
        } else {
            log::debug!("dispatch: {} while disabled", action);
            Err(DispatchError::Disabled { action })
        }
    }

    pub async fn fetch_joke(&self) -> Result<String, DispatchError> {
        self.require(self.current_capabilities().jokes, "fetch_joke")?;
        Ok(self.content.joke().await?)
    }

    /// Discover videos and load them into the playlist.
    pub async fn load_videos(&mut self) -> Result<usize, DispatchError> {
        self.require(self.current_capabilities().videos, "load_videos")?;
        let entries = self.content.videos().await?;
        Ok(self.playlist.load(entries)?)
    }

    pub fn current_video(&self) -> Result<VideoLink, DispatchError> {
        self.require(self.current_capabilities().videos, "current_video")?;
        let entry = self.playlist.current()?.clone();
        Ok(self.link(entry))
    }

    pub fn next_video(&mut self) -> Result<VideoLink, DispatchError> {
        self.require(self.current_capabilities().videos, "next_video")?;
        let entry = self.playlist.next()?.clone();
        Ok(self.link(entry))
    }

    pub fn previous_video(&mut self) -> Result<VideoLink, DispatchError> {
        self.require(self.current_capabilities().videos, "previous_video")?;
        let entry = self.playlist.previous()?.clone();
        Ok(self.link(entry))
    }

    fn link(&self, entry: PlaylistEntry) -> VideoLink {
        let address = player_address(&self.player, &entry.id);
        VideoLink { entry, address }
    }
}
