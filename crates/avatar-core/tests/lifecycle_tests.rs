// Host-side tests for start/stop sequencing and the tick loop.

use avatar_core::{
    DrawList, EngineConfig, FrameScheduler, LoopHandle, LoopState, Mode, Visualizer,
};

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Scheduled(u64, u64),
    Cancelled(u64),
}

/// Frame queue driven by hand.
#[derive(Default)]
struct ManualScheduler {
    next: u64,
    queue: Vec<(u64, LoopHandle)>,
    log: Vec<Event>,
}

impl ManualScheduler {
    fn pop(&mut self) -> Option<LoopHandle> {
        if self.queue.is_empty() {
            return None;
        }
        Some(self.queue.remove(0).1)
    }
}

impl FrameScheduler for ManualScheduler {
    type Token = u64;

    fn schedule(&mut self, handle: LoopHandle) -> u64 {
        self.next += 1;
        self.queue.push((self.next, handle));
        self.log.push(Event::Scheduled(self.next, handle.generation()));
        self.next
    }

    fn cancel(&mut self, token: u64) {
        self.queue.retain(|(t, _)| *t != token);
        self.log.push(Event::Cancelled(token));
    }
}

fn visualizer() -> Visualizer<ManualScheduler> {
    Visualizer::new(ManualScheduler::default(), EngineConfig::default())
}

fn pump(vis: &mut Visualizer<ManualScheduler>, list: &mut DrawList, ts: &mut f64, frames: usize) {
    for _ in 0..frames {
        let handle = vis.scheduler_mut().pop().expect("a scheduled frame");
        *ts += 16.0;
        assert!(vis.on_frame(handle, *ts, list));
    }
}

#[test]
fn starts_uninitialized_and_tears_down() {
    let mut vis = visualizer();
    assert_eq!(vis.state(), LoopState::Uninitialized);
    vis.start(Mode::SphereScan, 180.0);
    assert_eq!(vis.state(), LoopState::Active(Mode::SphereScan));
    vis.stop();
    assert_eq!(vis.state(), LoopState::TornDown);
    assert!(vis.scheduler().queue.is_empty());
    assert!(vis.field().is_none());
}

#[test]
fn each_live_frame_schedules_exactly_one_successor() {
    let mut vis = visualizer();
    let mut list = DrawList::new();
    let mut ts = 0.0;
    vis.start(Mode::VoxelMatrixMorph, 180.0);
    for _ in 0..10 {
        pump(&mut vis, &mut list, &mut ts, 1);
        assert_eq!(vis.scheduler().queue.len(), 1);
    }
    assert_eq!(vis.field().map(|f| f.frames()), Some(10));
}

#[test]
fn switching_mode_silences_the_old_loop() {
    let mut vis = visualizer();
    let mut list = DrawList::new();
    let mut ts = 5_000.0;

    let old = vis.start(Mode::SphereScan, 180.0);
    pump(&mut vis, &mut list, &mut ts, 30);
    assert!(vis.field().unwrap().time() > 0.0);

    let new = vis.start(Mode::HelixScanner, 180.0);
    assert_ne!(old, new);

    // cancellation of the old frame precedes the first new request
    let log = &vis.scheduler().log;
    let cancel_at = log
        .iter()
        .rposition(|e| matches!(e, Event::Cancelled(_)))
        .expect("old frame cancelled");
    let schedule_at = log
        .iter()
        .position(|e| matches!(e, Event::Scheduled(_, g) if *g == new.generation()))
        .expect("new frame scheduled");
    assert!(cancel_at < schedule_at);

    // a stale frame that still fires draws nothing
    let mut stale = DrawList::new();
    assert!(!vis.on_frame(old, ts + 16.0, &mut stale));
    assert_eq!(stale.clears, 0);
    assert!(stale.is_empty());
    assert_eq!(vis.scheduler().queue.len(), 1);

    let handle = vis.scheduler_mut().pop().unwrap();
    assert_eq!(handle, new);
    assert!(vis.on_frame(handle, ts + 32.0, &mut list));
    let field = vis.field().unwrap();
    assert_eq!(field.mode(), Mode::HelixScanner);
    assert_eq!(field.particle_count(), 100);
    assert_eq!(field.time(), 0.0);
}

#[test]
fn render_reuses_the_loop_for_identical_arguments() {
    let mut vis = visualizer();
    let a = vis.render(Mode::SonarSweep, 180.0);
    let b = vis.render(Mode::SonarSweep, 180.0);
    assert_eq!(a, b);
    assert_eq!(vis.scheduler().queue.len(), 1);

    let c = vis.render(Mode::SonarSweep, 120.0);
    assert_ne!(a, c);
    assert_eq!(vis.field().unwrap().size(), 120.0);
    assert_eq!(vis.scheduler().queue.len(), 1);
}

#[test]
fn eye_mode_runs_no_tick_loop() {
    let mut vis = visualizer();
    vis.start(Mode::PhasedArrayEmitter, 180.0);
    let eye = vis.start(Mode::Eye, 180.0);
    assert_eq!(vis.state(), LoopState::Active(Mode::Eye));
    assert!(vis.scheduler().queue.is_empty());
    assert!(vis.field().is_none());
    let mut list = DrawList::new();
    assert!(!vis.on_frame(eye, 0.0, &mut list));
}

#[test]
fn frames_after_stop_are_ignored() {
    let mut vis = visualizer();
    let mut list = DrawList::new();
    let handle = vis.start(Mode::CylindricalAnalysis, 180.0);
    vis.stop();
    assert!(!vis.on_frame(handle, 16.0, &mut list));
    assert!(list.is_empty());
    assert!(!vis.is_live(handle));
}
