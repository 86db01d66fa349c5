use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Barrier, Mutex};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use civerify_core::{Box2, Interval, Oracle};

use crate::classifier::classify;
use crate::counters::{CounterSnapshot, Counters};
use crate::error::SolverError;
use crate::outcome::Outcome;

/// Configuration for one [`run`], constructed explicitly by the caller
/// rather than read from global state.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// `None` means unbounded; `Some(0)` allows exactly one level.
    pub max_steps: Option<usize>,
    pub worker_count: usize,
    /// Print a per-level progress line to stdout (distinct from `tracing`'s
    /// `RUST_LOG`-controlled event stream).
    pub verbose: bool,
    /// Suppress certified-zero emission; report residual boxes instead.
    pub residual_mode: bool,
}

impl RunOptions {
    pub fn new(
        max_steps: Option<usize>,
        worker_count: usize,
        verbose: bool,
        residual_mode: bool,
    ) -> Result<Self, SolverError> {
        if worker_count == 0 {
            return Err(SolverError::ZeroWorkers(worker_count));
        }
        Ok(Self {
            max_steps,
            worker_count,
            verbose,
            residual_mode,
        })
    }
}

/// The full result of a scheduler run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub counters: CounterSnapshot,
    pub zeros: Vec<Box2>,
    /// Undecided boxes surviving at the step cap (or, trivially, none if the
    /// run resolved the whole domain).
    pub residuals: Vec<Box2>,
    /// `true` iff the step cap (not an emptied work-list) is what stopped the run.
    pub step_cap_reached: bool,
    /// Number of BFS levels fully drained.
    pub steps_run: usize,
    pub elapsed: Duration,
}

/// The two work-lists and the barrier coordinating level transitions,
/// shared across all worker threads for the duration of one run.
struct Frontier {
    current: Mutex<Vec<Box2>>,
    next: Mutex<Vec<Box2>>,
    zeros: Mutex<Vec<Box2>>,
    step: AtomicUsize,
    done: AtomicBool,
    step_cap_reached: AtomicBool,
}

/// Run the parallel branch-and-bound verified root-finder on `initial`.
///
/// Spawns `options.worker_count` OS threads via `std::thread::scope`; each
/// runs the worker loop described in the scheduler design: drain `current`
/// under the list mutex, classify, push children (if any) to `next`, repeat
/// until `current` empties, then barrier twice around a single-threaded
/// level rotation.
pub fn run(oracle: &dyn Oracle, initial: Box2, p: Interval, options: &RunOptions) -> RunReport {
    let start = Instant::now();
    let counters = Counters::new();

    let frontier = Frontier {
        current: Mutex::new(vec![initial]),
        next: Mutex::new(Vec::new()),
        zeros: Mutex::new(Vec::new()),
        step: AtomicUsize::new(0),
        done: AtomicBool::new(false),
        step_cap_reached: AtomicBool::new(false),
    };
    let barrier = Barrier::new(options.worker_count);

    std::thread::scope(|scope| {
        for worker_id in 0..options.worker_count {
            let oracle = oracle;
            let frontier = &frontier;
            let counters = &counters;
            let barrier = &barrier;
            scope.spawn(move || {
                worker_loop(worker_id, oracle, p, options, frontier, counters, barrier)
            });
        }
    });

    let residuals = frontier.next.into_inner().expect("frontier mutex poisoned");
    let zeros = frontier.zeros.into_inner().expect("frontier mutex poisoned");
    let steps_run = frontier.step.load(Ordering::Relaxed);
    let step_cap_reached = frontier.step_cap_reached.load(Ordering::Relaxed);

    info!(
        elapsed_ms = start.elapsed().as_millis(),
        steps_run,
        zeros_found = zeros.len(),
        residual_count = residuals.len(),
        step_cap_reached,
        "run complete"
    );

    RunReport {
        counters: counters.snapshot(),
        zeros,
        residuals,
        step_cap_reached,
        steps_run,
        elapsed: start.elapsed(),
    }
}

fn worker_loop(
    worker_id: usize,
    oracle: &dyn Oracle,
    p: Interval,
    options: &RunOptions,
    frontier: &Frontier,
    counters: &Counters,
    barrier: &Barrier,
) {
    loop {
        drain_level(oracle, p, frontier, counters);

        // All workers confirm the current level drained before anyone
        // touches `next` for the rotation.
        barrier.wait();

        if worker_id == 0 {
            rotate_level(frontier, options);
        }

        // Non-leader workers must not read the swapped `current` until the
        // leader's single-threaded rotation above has completed.
        barrier.wait();

        if frontier.done.load(Ordering::SeqCst) {
            return;
        }
    }
}

/// Repeatedly pop one box from `current`, classify it outside the lock, and
/// fold the outcome back in under the lock, until `current` is empty.
fn drain_level(oracle: &dyn Oracle, p: Interval, frontier: &Frontier, counters: &Counters) {
    loop {
        let box_ = {
            let mut current = frontier.current.lock().expect("current mutex poisoned");
            current.pop()
        };
        let box_ = match box_ {
            Some(b) => b,
            None => return,
        };

        let outcome = classify(oracle, box_, p);
        counters.record(&outcome);

        match outcome {
            Outcome::CertifiedZero(contracted) => {
                frontier
                    .zeros
                    .lock()
                    .expect("zeros mutex poisoned")
                    .push(contracted);
            }
            Outcome::Undecided => {
                let (left, right, _axis) = box_.split();
                let mut next = frontier.next.lock().expect("next mutex poisoned");
                next.push(left);
                next.push(right);
            }
            Outcome::DiscardedByEnclosure
            | Outcome::DiscardedByNewton
            | Outcome::Failed => {}
        }
    }
}

/// Single-threaded level transition: decide whether to stop, and if not,
/// promote `next` to `current` and advance the step counter.
fn rotate_level(frontier: &Frontier, options: &RunOptions) {
    let mut current = frontier.current.lock().expect("current mutex poisoned");
    let mut next = frontier.next.lock().expect("next mutex poisoned");

    let step = frontier.step.load(Ordering::Relaxed);
    let cap_hit = options.max_steps.is_some_and(|m| step >= m);

    if next.is_empty() {
        frontier.done.store(true, Ordering::SeqCst);
    } else if cap_hit {
        frontier.done.store(true, Ordering::SeqCst);
        frontier.step_cap_reached.store(true, Ordering::SeqCst);
    } else {
        if options.verbose {
            let parts_left = next.len();
            let fraction = (parts_left as f64) * 2f64.powi(-(step as i32) - 1);
            debug!(step, parts_left, fraction, "level rotated");
            println!(
                "step {step}: parts_left={parts_left} approx_remaining={fraction:.6}"
            );
        }
        std::mem::swap(&mut *current, &mut *next);
        next.clear();
        frontier.step.fetch_add(1, Ordering::Relaxed);
    }
}
