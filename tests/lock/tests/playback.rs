//! Playback lock: configuration, input generation, trace production and
//! timed playback wired together the way a host drives them.

use std::sync::{Arc, Mutex};

use algoscope_algorithms::{Algorithm, Family};
use algoscope_harness::audio::{frequency_for_cell, MAX_HZ, MIN_HZ};
use algoscope_harness::generate::{default_grid, shuffled_elements, DEFAULT_END, DEFAULT_START};
use algoscope_harness::{
    ConfigOverrides, PlaybackState, RecordingAudio, SearchOutcome, Visualizer, VisualizerConfig,
};
use algoscope_kernel::model::{values_of, StepKind};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn fast(target: Option<i64>, size: Option<usize>) -> ConfigOverrides {
    ConfigOverrides {
        speed_ms: Some(1),
        collection_size: size,
        target,
    }
}

#[test]
fn sort_session_plays_every_step_and_ends_sorted() {
    let config = VisualizerConfig::with_defaults("insertion", fast(None, Some(16))).unwrap();
    config.expect_family(Family::Sort).unwrap();
    let Algorithm::Sort(algorithm) = config.algorithm() else {
        panic!("insertion is a sort");
    };
    let input = shuffled_elements(config.collection_size(), &mut SmallRng::seed_from_u64(11));
    let trace = algorithm.run(&input);
    let len = trace.len();

    let audio = Arc::new(RecordingAudio::new());
    let mut visualizer = Visualizer::new(audio.clone());
    let seen = Arc::new(Mutex::new(Vec::<StepKind>::new()));
    let sink = Arc::clone(&seen);
    let (done_tx, done_rx) = crossbeam_channel::bounded(1);
    let handle = visualizer
        .start(
            trace,
            config.interval(),
            move |step, visual| {
                assert_eq!(visual.kind(), Some(step.kind));
                sink.lock().unwrap().push(step.kind);
            },
            move || done_tx.send(()).unwrap(),
        )
        .unwrap();
    visualizer.wait();

    assert!(done_rx.try_recv().is_ok());
    assert_eq!(seen.lock().unwrap().len(), len);
    assert_eq!(handle.state(), PlaybackState::Completed);
    assert_eq!(handle.applied(), len);
    let visual = handle.visual();
    let mut expected = values_of(&input);
    expected.sort_unstable();
    assert_eq!(values_of(visual.snapshot().unwrap()), expected);
    for tone in audio.tones() {
        assert!((MIN_HZ..=MAX_HZ).contains(&tone.hz));
    }
}

#[test]
fn search_session_reports_its_outcome() {
    let config = VisualizerConfig::with_defaults("binary", fast(Some(42), Some(10))).unwrap();
    let Algorithm::Search(algorithm) = config.algorithm() else {
        panic!("binary is a search");
    };
    let mut input = shuffled_elements(config.collection_size(), &mut SmallRng::seed_from_u64(3));
    input[4].value = 42;
    let trace = algorithm.run(&input, config.target().unwrap());

    let mut visualizer = Visualizer::new(Arc::new(RecordingAudio::new()));
    let handle = visualizer.start(trace, config.interval(), |_, _| {}, || {}).unwrap();
    visualizer.wait();

    let visual = handle.visual();
    let Some(SearchOutcome::Found(at)) = visual.outcome() else {
        panic!("expected a hit, got {:?}", visual.outcome());
    };
    assert_eq!(visual.snapshot().unwrap()[at].value, 42);
    assert!(!visual.eliminated().contains(&at));
}

#[test]
fn pathfinding_session_traces_the_path_with_cell_tones() {
    let config = VisualizerConfig::with_defaults("astar", fast(None, None)).unwrap();
    let Algorithm::Pathfind(algorithm) = config.algorithm() else {
        panic!("astar is a pathfinder");
    };
    let grid = default_grid();
    let trace = algorithm.run(&grid, DEFAULT_START, DEFAULT_END);

    let audio = Arc::new(RecordingAudio::new());
    let mut visualizer = Visualizer::new(audio.clone());
    let handle = visualizer.start(trace, config.interval(), |_, _| {}, || {}).unwrap();
    visualizer.wait();

    let visual = handle.visual();
    assert_eq!(visual.path().first(), Some(&DEFAULT_START));
    assert_eq!(visual.path().last(), Some(&DEFAULT_END));
    assert_eq!(visual.outcome(), Some(SearchOutcome::Found(grid.index(DEFAULT_END))));
    assert!(visual.visited().contains(&DEFAULT_START));
    let end_tone = frequency_for_cell(DEFAULT_END.row, DEFAULT_END.col, grid.rows(), grid.cols());
    assert_eq!(audio.tones().last().map(|t| t.hz), Some(end_tone));
}

#[test]
fn stopping_mid_run_skips_completion() {
    let config = VisualizerConfig::with_defaults("bubble", ConfigOverrides::default()).unwrap();
    let Algorithm::Sort(algorithm) = config.algorithm() else {
        panic!("bubble is a sort");
    };
    let input = shuffled_elements(config.collection_size(), &mut SmallRng::seed_from_u64(5));
    let trace = algorithm.run(&input);
    let total = trace.len();

    let audio = Arc::new(RecordingAudio::new());
    let mut visualizer = Visualizer::new(audio.clone());
    let (done_tx, done_rx) = crossbeam_channel::bounded::<()>(1);
    let (step_tx, step_rx) = crossbeam_channel::unbounded();
    let handle = visualizer
        .start(
            trace,
            config.interval(),
            move |step, _| {
                let _ = step_tx.send(step.kind);
            },
            move || done_tx.send(()).unwrap(),
        )
        .unwrap();
    assert_eq!(step_rx.recv().unwrap(), StepKind::Compare);
    handle.stop();
    visualizer.stop();

    assert_eq!(handle.state(), PlaybackState::Cancelled);
    assert!(handle.applied() < total);
    assert!(done_rx.try_recv().is_err());
    assert!(audio.suspends() >= 1);
}
