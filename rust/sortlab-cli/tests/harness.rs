//! Integration tests for the benchmark harness, config lookup and reports.

use sortlab_cli::bench::{run_benchmarks, Contender};
use sortlab_cli::commands::{generate_values, list_algorithms, sort_values};
use sortlab_cli::config::{BenchOverrides, BenchSettings, SortlabConfig, CONFIG_FILE};
use sortlab_cli::error::CliError;
use sortlab_cli::report::{render, Format};
use sortlab_core::{Algorithm, SortError};

// =============================================================================
// Helper
// =============================================================================

fn temp_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("sortlab_test_harness").join(name);
    // Clean up from any prior run
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn small_settings() -> BenchSettings {
    BenchSettings {
        sizes: vec![0, 1, 50, 200],
        iterations: 2,
        warmup: 0,
        seed: Some(11),
        ..BenchSettings::default()
    }
}

// =============================================================================
// Harness
// =============================================================================

#[test]
fn runs_every_contender_at_every_size() {
    let results = run_benchmarks(&small_settings()).unwrap();
    // 5 algorithms + 2 baselines, 4 sizes each
    assert_eq!(results.len(), 7 * 4);
    assert!(results.iter().all(|r| r.iterations == 2));
    assert!(results.iter().any(|r| r.contender == "std-unstable"));
}

#[test]
fn selection_and_baseline_switch_are_honored() {
    let settings = BenchSettings {
        algorithms: vec![Algorithm::Quick, Algorithm::Merge],
        baselines: false,
        ..small_settings()
    };
    let results = run_benchmarks(&settings).unwrap();
    let names: Vec<&str> = results.iter().map(|r| r.contender.as_str()).collect();
    assert_eq!(names, vec!["quick"; 4].into_iter().chain(vec!["merge"; 4]).collect::<Vec<_>>());
}

#[test]
fn quadratic_sorts_skip_sizes_over_limit() {
    let settings = BenchSettings {
        quadratic_limit: 50,
        baselines: false,
        ..small_settings()
    };
    let results = run_benchmarks(&settings).unwrap();
    for r in &results {
        if r.contender == "insertion" || r.contender == "selection" {
            assert!(r.size <= 50, "{} ran at size {}", r.contender, r.size);
        }
    }
    assert!(results.iter().any(|r| r.contender == "heap" && r.size == 200));
}

#[test]
fn inverted_range_is_rejected_before_running() {
    let settings = BenchSettings {
        low: 100,
        high: 1,
        ..small_settings()
    };
    assert!(matches!(
        run_benchmarks(&settings),
        Err(CliError::Sort(SortError::InvalidRange { low: 100, high: 1 }))
    ));
}

#[test]
fn contender_sort_uses_std_for_baselines() {
    let mut xs = vec![3, 1, 2];
    Contender::StdStable.sort(&mut xs);
    assert_eq!(xs, vec![1, 2, 3]);
}

#[test]
fn reports_render_in_every_format() {
    let settings = BenchSettings {
        algorithms: vec![Algorithm::Heap],
        baselines: false,
        sizes: vec![10],
        ..small_settings()
    };
    let results = run_benchmarks(&settings).unwrap();

    let text = render(&results, Format::Text).unwrap();
    assert!(text.contains("Heap Sort"));
    assert!(text.contains("With input size 10: "));

    let csv = render(&results, Format::Csv).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.lines().nth(1).unwrap().starts_with("heap,false,10,2,"));

    let json = render(&results, Format::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn config_found_in_ancestor_directory() {
    let root = temp_dir("ancestor");
    let nested = root.join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(root.join(CONFIG_FILE), "[bench]\niterations = 9\n").unwrap();

    let found = SortlabConfig::find_from(&nested).expect("config in ancestor");
    assert_eq!(found, root.join(CONFIG_FILE));

    let (path, cfg) = SortlabConfig::load(Some(found.as_path())).unwrap();
    assert_eq!(path, Some(found));
    assert_eq!(cfg.bench.iterations, 9);
}

#[test]
fn command_line_overrides_win_over_config_file() {
    let root = temp_dir("overrides");
    let path = root.join(CONFIG_FILE);
    std::fs::write(
        &path,
        "[bench]\niterations = 9\nbaselines = true\nsizes = [10, 20]\nseed = 3\nalgorithms = [\"merge\"]\n",
    )
    .unwrap();

    let (_, cfg) = SortlabConfig::load(Some(path.as_path())).unwrap();
    let mut settings = cfg.bench;
    settings.apply_overrides(&BenchOverrides {
        iterations: Some(3),
        no_baselines: true,
        ..BenchOverrides::default()
    });

    assert_eq!(settings.iterations, 3);
    assert!(!settings.baselines);
    assert_eq!(settings.sizes, vec![10, 20]);
    assert_eq!(settings.seed, Some(3));
    assert_eq!(settings.algorithms, vec![Algorithm::Merge]);

    let results = run_benchmarks(&settings).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.contender == "merge" && r.iterations == 3));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let root = temp_dir("missing");
    let err = SortlabConfig::load(Some(root.join("nope.toml").as_path())).unwrap_err();
    assert!(matches!(err, CliError::ConfigRead { .. }));
    assert!(err.format_chain().contains("caused by:"));
}

#[test]
fn malformed_config_reports_parse_error() {
    let root = temp_dir("malformed");
    let path = root.join(CONFIG_FILE);
    std::fs::write(&path, "[bench\nsizes = ").unwrap();
    assert!(matches!(
        SortlabConfig::load_from(&path),
        Err(CliError::ConfigParse { .. })
    ));
}

// =============================================================================
// Subcommands
// =============================================================================

#[test]
fn sort_command_output() {
    assert_eq!(
        sort_values(Algorithm::Insertion, vec![7, 31, 54, 0, 2, 4, 5, 1, 2, 10, 8]),
        "0 1 2 2 4 5 7 8 10 31 54"
    );
    assert_eq!(sort_values(Algorithm::Quick, vec![]), "");
}

#[test]
fn generate_command_is_reproducible_with_seed() {
    let a = generate_values(20, 10, 50, Some(5)).unwrap();
    let b = generate_values(20, 10, 50, Some(5)).unwrap();
    assert_eq!(a, b);
    let values: Vec<i32> = a.split(' ').map(|v| v.parse().unwrap()).collect();
    assert_eq!(values.len(), 20);
    assert!(values.iter().all(|v| (10..=50).contains(v)));
    assert!(generate_values(1, 2, 1, None).is_err());
}

#[test]
fn list_names_every_algorithm() {
    sortlab_cli::colors::set_enabled(false);
    let listing = list_algorithms();
    assert_eq!(listing.lines().count(), 5);
    assert!(listing.contains("merge"));
    assert!(listing.contains("O(n log n) average, O(n^2) worst"));
}
