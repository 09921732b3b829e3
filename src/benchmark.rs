//! Benchmark runner for the textbook sorts
//!
//! Outputs JSON results on stdout

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use textbook_sorts::baselines::StdSorter;
use textbook_sorts::complexity::Complexity;
use textbook_sorts::{is_sorted, BubbleSorter, MergeSorter, Result, SortError, Sorter};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "benchmark", about = "Benchmark merge sort and bubble sort")]
struct Cli {
    /// JSON file overriding the default benchmark settings
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct BenchmarkConfig {
    sizes: Vec<usize>,
    warmup_ms: u64,
    run_ms: u64,
    seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self { sizes: vec![100, 500, 1000], warmup_ms: 50, run_ms: 300, seed: None }
    }
}

impl BenchmarkConfig {
    fn load(path: Option<&PathBuf>) -> Result<Self> {
        match path {
            Some(path) => serde_json::from_str(&fs::read_to_string(path)?).map_err(SortError::Config),
            None => Ok(Self::default()),
        }
    }
}

#[derive(Serialize)]
struct BenchmarkResult {
    name: String,
    ops_per_second: f64,
    correct: bool,
    complexity: Complexity,
    time_weight: u32,
    space_weight: u32,
}

impl BenchmarkResult {
    fn new<S: Sorter>(sorter: &S, ops_per_second: f64, correct: bool) -> Self {
        let complexity = sorter.complexity();
        Self {
            name: sorter.name().into(),
            ops_per_second,
            correct,
            complexity,
            time_weight: complexity.time.weight(),
            space_weight: complexity.space.weight(),
        }
    }
}

#[derive(Serialize)]
struct FullResults {
    results: Vec<BenchmarkResult>,
    correctness: bool,
}

fn generate_test_data(config: &BenchmarkConfig) -> Vec<Vec<i32>> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut tests = Vec::new();

    for &size in &config.sizes {
        // Random data
        for _ in 0..5 {
            let data: Vec<i32> = (0..size).map(|_| rng.gen_range(-10000..10000)).collect();
            tests.push(data);
        }

        // Nearly sorted (90% sorted)
        for _ in 0..2 {
            let mut data: Vec<i32> = (0..size as i32).collect();
            if size > 0 {
                for _ in 0..size / 10 {
                    let i = rng.gen_range(0..size);
                    let j = rng.gen_range(0..size);
                    data.swap(i, j);
                }
            }
            tests.push(data);
        }

        // Reverse sorted
        let data: Vec<i32> = (0..size as i32).rev().collect();
        tests.push(data);
    }

    tests
}

fn verify_correctness<S: Sorter>(sorter: &S, tests: &[Vec<i32>]) -> bool {
    tests.iter().all(|test| {
        let mut data = test.clone();
        sorter.sort(&mut data);
        is_sorted(&data)
    })
}

fn benchmark<S: Sorter>(sorter: &S, tests: &[Vec<i32>], warmup_ms: u64, run_ms: u64) -> f64 {
    // Warmup
    let warmup_end = Instant::now() + Duration::from_millis(warmup_ms);
    while Instant::now() < warmup_end {
        for test in tests.iter().take(3) {
            let mut data = test.clone();
            sorter.sort(std::hint::black_box(&mut data));
        }
    }

    let mut ops = 0u64;
    let start = Instant::now();
    let end = start + Duration::from_millis(run_ms);
    while Instant::now() < end {
        for test in tests {
            let mut data = test.clone();
            sorter.sort(std::hint::black_box(&mut data));
            ops += 1;
        }
    }
    let elapsed = start.elapsed().as_secs_f64();
    ops as f64 / elapsed
}

fn measure<S: Sorter>(sorter: &S, tests: &[Vec<i32>], config: &BenchmarkConfig) -> BenchmarkResult {
    let correct = verify_correctness(sorter, tests);
    let ops = benchmark(sorter, tests, config.warmup_ms, config.run_ms);
    info!(sorter = sorter.name(), ops_per_second = ops, correct, "benchmarked");
    BenchmarkResult::new(sorter, ops, correct)
}

fn run(cli: Cli) -> Result<()> {
    let config = BenchmarkConfig::load(cli.config.as_ref())?;
    info!(?config, "starting benchmark");
    let tests = generate_test_data(&config);

    let results = vec![
        measure(&MergeSorter, &tests, &config),
        measure(&BubbleSorter, &tests, &config),
        measure(&StdSorter, &tests, &config),
    ];
    let correctness = results.iter().all(|r| r.correct);

    let full = FullResults { results, correctness };
    println!("{}", serde_json::to_string(&full).map_err(SortError::Output)?);
    Ok(())
}

fn main() -> ExitCode {
    textbook_sorts::init_tracing("info");

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
