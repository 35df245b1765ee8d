//! Integration tests for the Simulator API
//!
//! These tests drive the public API the way the command line does.

use spindle::{
    Simulator, SpindleError,
    algorithm::Algorithm,
    animation::{Animation, Pace},
    config::AppConfig,
    direction::Direction,
    session::Session,
};

const REQUESTS: &str = "98, 183, 37, 122, 14, 124, 65, 67";

fn simulator() -> Simulator {
    Simulator::default()
}

#[test]
fn test_classic_totals() {
    let simulator = simulator();
    let workload = simulator
        .parse_workload("199", "53", REQUESTS, Direction::TowardMax, Some(8))
        .expect("Failed to parse workload");

    let expected = [
        (Algorithm::Fcfs, 640),
        (Algorithm::Sstf, 236),
        (Algorithm::Scan, 331),
        (Algorithm::CScan, 382),
        (Algorithm::Look, 299),
        (Algorithm::CLook, 322),
    ];
    for (algorithm, total) in expected {
        assert_eq!(
            simulator.run(algorithm, &workload).metric().total(),
            total,
            "{algorithm}"
        );
    }

    let comparison = simulator.compare(&workload);
    assert_eq!(comparison.best(), Algorithm::Sstf);
}

#[test]
fn test_parse_error_keeps_field_source() {
    let result = simulator().parse_workload("199", "53", "98, 250, x", Direction::TowardMax, None);

    match result {
        Err(SpindleError::Parse { field, err, src }) => {
            assert_eq!(field, "requests");
            assert_eq!(src, "98, 250, x");
            assert_eq!(err.diagnostics().len(), 2);
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_head_outside_space() {
    let result = simulator().parse_workload("100", "101", "1 2 3", Direction::TowardZero, None);

    assert!(matches!(
        result,
        Err(SpindleError::Parse {
            field: "head position",
            ..
        })
    ));
}

#[test]
fn test_invalid_max_track() {
    let result = simulator().parse_workload("-3", "0", "", Direction::TowardMax, None);

    assert!(matches!(
        result,
        Err(SpindleError::Parse {
            field: "max track",
            ..
        })
    ));
}

#[test]
fn test_empty_requests_are_degenerate_success() {
    let simulator = simulator();
    let workload = simulator
        .parse_workload("100", "50", "", Direction::TowardMax, None)
        .expect("empty request list is valid");

    let run = simulator.run(Algorithm::CScan, &workload);
    assert_eq!(run.sequence().tracks().len(), 1);
    assert_eq!(run.metric().total(), 0);
    assert_eq!(run.metric().average(), 0.0);

    let comparison = simulator.compare(&workload);
    assert_eq!(comparison.best(), Algorithm::Fcfs);
    assert!(comparison.runs().all(|run| run.metric().total() == 0));
}

#[test]
fn test_render_charts() {
    let simulator = simulator();
    let workload = simulator
        .parse_workload("199", "53", REQUESTS, Direction::TowardMax, None)
        .expect("Failed to parse workload");

    let run = simulator.run(Algorithm::Look, &workload);
    let line = simulator
        .render_run_svg(&run, workload.space())
        .expect("Failed to render line chart");
    assert!(line.contains("<svg"), "Output should contain SVG tag");
    assert!(line.contains("</svg>"), "Output should be complete SVG");

    let bars = simulator
        .render_comparison_svg(&simulator.compare(&workload))
        .expect("Failed to render bar chart");
    assert!(bars.contains("</svg>"));
}

#[test]
fn test_invalid_style_is_a_config_error() {
    let config: AppConfig = toml::from_str("[style]\ntext_color = \"shiny\"\n").unwrap();
    let simulator = Simulator::new(config);
    let workload = simulator
        .parse_workload("10", "5", "1", Direction::TowardMax, None)
        .unwrap();
    let run = simulator.run(Algorithm::Fcfs, &workload);

    let result = simulator.render_run_svg(&run, workload.space());
    assert!(matches!(result, Err(SpindleError::Config(_))));
}

#[test]
fn test_session_playback() {
    let simulator = simulator();
    let workload = simulator
        .parse_workload("199", "53", REQUESTS, Direction::TowardMax, None)
        .unwrap();
    let run = simulator.run(Algorithm::Sstf, &workload);
    let session = Session::new();

    let frames: Vec<String> = session
        .start_run(&run)
        .expect("session is idle")
        .paced(std::time::Duration::ZERO)
        .map(|frame| frame.to_string())
        .collect();

    assert_eq!(frames.len(), 9);
    assert_eq!(frames[0], "Starting at 53");
    assert_eq!(frames[1], "Moving 53 → 65");
    assert_eq!(session.dashboard().total_seek(), 236);
    assert!(!session.is_animating());
}

#[test]
fn test_animation_restart_replays_frames() {
    let simulator = simulator();
    let workload = simulator
        .parse_workload("199", "53", REQUESTS, Direction::TowardZero, None)
        .unwrap();
    let run = simulator.run(Algorithm::CLook, &workload);

    let mut animation = Animation::new(run.sequence());
    let first: Vec<_> = animation.by_ref().collect();
    animation.restart();
    let second: Vec<_> = animation.collect();

    assert_eq!(first, second);
}
