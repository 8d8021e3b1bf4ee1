//! Integration tests: command layer and console front end
//!
//! These exercise the path from AppState through the command handlers to the
//! plot and prompt adapters, without a terminal or a real chart.
//!
//! Run with: cargo test --test command_layer

use std::io::Cursor;

use am_workbench_lib::adapters::{JsonLinesPlot, MemoryPlot, ScriptedPrompt};
use am_workbench_lib::commands::{config, pipeline, status};
use am_workbench_lib::console::run_console;
use am_workbench_lib::domain::{Configuration, PlotData, PlotKind};
use am_workbench_lib::pipeline::{Progress, Stage};
use am_workbench_lib::state::AppState;

fn seeded_state(seed: u64) -> AppState {
    AppState::new(Configuration {
        seed: Some(seed),
        ..Configuration::default()
    })
    .unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// Pressing buttons out of order draws nothing and leaves the session empty.
#[test]
fn out_of_order_presses_are_silent_noops() {
    let state = seeded_state(1);
    let mut prompt = ScriptedPrompt::new([Some(5.0)]);
    let mut plot = MemoryPlot::new();

    for stage in [Stage::LowPass, Stage::Demodulate, Stage::Shift, Stage::Spectrum, Stage::AddNoise] {
        assert!(!pipeline::press(&state, stage, &mut prompt, &mut plot).unwrap());
    }

    assert!(plot.plots.is_empty());
    assert_eq!(status::get_session_status(&state).unwrap().progress, Progress::Empty);
}

/// Plot kinds follow the button: time-domain for generate/noise/lpf, spectrum otherwise.
#[test]
fn each_button_produces_the_expected_plot_kind() {
    let state = seeded_state(2);
    let mut prompt = ScriptedPrompt::new([Some(5.0)]);
    let mut plot = MemoryPlot::new();

    for stage in Stage::ALL {
        pipeline::press(&state, stage, &mut prompt, &mut plot).unwrap();
    }

    let kinds: Vec<PlotKind> = plot.plots.iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        vec![
            PlotKind::TimeDomain,
            PlotKind::TimeDomain,
            PlotKind::Spectrum,
            PlotKind::Spectrum,
            PlotKind::Spectrum,
            PlotKind::TimeDomain,
        ]
    );
    for p in &plot.plots {
        assert_eq!(p.x.len(), p.y.len(), "{}", p.title);
    }
}

/// Re-noising after a shift makes the stored shift stale, but demodulation
/// follows the current noisy signal.
#[test]
fn demodulation_follows_latest_noise_draw() {
    let state = seeded_state(3);
    pipeline::generate_signal(&state).unwrap();
    pipeline::add_noise(&state).unwrap();
    pipeline::shift_frequency(&state, Some(5.0)).unwrap();
    let first = pipeline::coherent_demodulation(&state).unwrap().unwrap();

    pipeline::add_noise(&state).unwrap();
    assert!(status::get_session_status(&state).unwrap().shifted_is_stale);
    let second = pipeline::coherent_demodulation(&state).unwrap().unwrap();

    assert_ne!(first.y, second.y);
}

/// Two sessions with the same seed produce identical reconstructions.
#[test]
fn seeded_sessions_are_reproducible() {
    let run = || {
        let state = seeded_state(42);
        pipeline::generate_signal(&state).unwrap();
        pipeline::add_noise(&state).unwrap();
        pipeline::shift_frequency(&state, Some(5.0)).unwrap();
        pipeline::low_pass(&state).unwrap().unwrap()
    };
    assert_eq!(run(), run());
}

/// The console writes one JSON plot per drawing stage to the plot sink.
#[test]
fn console_streams_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let state = seeded_state(4);
    let mut sink = JsonLinesPlot::new(Vec::new());
    let mut messages = Vec::new();
    let script = "help\ngenerate\nnoise\nshift\n5\nlpf\nstatus\nbogus\n";

    run_console(&state, Cursor::new(script), &mut messages, &mut sink, dir.path()).unwrap();

    let out = String::from_utf8(sink.into_inner()).unwrap();
    let plots: Vec<PlotData> = out.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    let titles: Vec<&str> = plots.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Cosine signal",
            "Signal with noise",
            "Shifted signal spectrum",
            "Low-pass reconstruction",
        ]
    );

    let text = String::from_utf8(messages).unwrap();
    assert!(text.contains("commands:"));
    assert!(text.contains("\"carrier_hz\": 5.0"), "status missing carrier: {text}");
    assert!(text.contains("unknown command 'bogus'"));
}

/// A low-noise profile loaded from disk changes the noise applied next.
#[test]
fn applying_low_noise_profile_reduces_noise() {
    let dir = tempfile::tempdir().unwrap();
    let low = Configuration {
        seed: Some(9),
        ..Configuration::low_noise()
    };
    config::save_configuration(dir.path(), &low).unwrap();

    let state = seeded_state(9);
    let loaded = config::load_configuration(dir.path(), "Low noise").unwrap();
    config::apply_configuration(&state, loaded).unwrap();

    pipeline::generate_signal(&state).unwrap();
    pipeline::add_noise(&state).unwrap();

    let session = state.session.lock().unwrap();
    let base = session.signal().unwrap();
    let noisy = session.noisy().unwrap();
    let worst = noisy
        .iter()
        .zip(base)
        .map(|(n, b)| (n - b).abs())
        .fold(0.0f64, f64::max);
    // 1000 draws at σ = 0.1 stay well inside 0.6
    assert!(worst < 0.6, "largest deviation {worst}");
}
