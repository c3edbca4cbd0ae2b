//! Persistent-worker executor with a three-barrier step protocol.
//!
//! `num_workers` threads are spawned once per run and cooperate over the
//! arena's shared buffers. Every step crosses the same [`Barrier`] three
//! times:
//!
//! ```text
//!            ┌──────────────┐
//!   ┌───────►│  AwaitStep   │  arrival barrier
//!   │        └──────┬───────┘
//!   │        ┌──────▼───────┐
//!   │        │ ComputeChunk │  write own window of "next"
//!   │        └──────┬───────┘
//!   │        ┌──────▼──────────┐
//!   │        │ AwaitCompletion │  completion barrier
//!   │        └──────┬──────────┘
//!   │        ┌──────▼───────┐
//!   │        │    Rotate    │  worker 0, skipped if any worker panicked
//!   │        └──────┬───────┘
//!   │        ┌──────▼────────┐
//!   └────────┤ AwaitRotation │  post-rotation barrier ──► Finished
//!            └───────────────┘       (after t_max steps)
//! ```
//!
//! `Barrier::wait` is a full synchronisation point, so every write made
//! before a worker reaches the completion barrier is visible to every
//! worker after it. Rotation happens strictly between the completion and
//! post-rotation barriers, when no views are live.
//!
//! Workers wait on a start signal before touching the barrier. If any
//! spawn fails the signal is never sent, the already-running workers exit,
//! and the scope joins them instead of deadlocking on a barrier that can
//! never fill.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Barrier;
use std::thread;

use crossbeam_channel::Receiver;
use tracing::{debug, trace};
use wavefield_arena::{GenerationArena, SharedArena};
use wavefield_core::{update_window, Partition, Strategy};

use crate::error::SimError;
use crate::executor::Executor;
use crate::plan::RunPlan;

/// Persistent worker pool synchronised by barriers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BarrierExecutor;

impl Executor for BarrierExecutor {
    fn strategy(&self) -> Strategy {
        Strategy::Barrier
    }

    fn execute(&self, arena: &mut GenerationArena, plan: &RunPlan) -> Result<(), SimError> {
        arena.with_shared(|shared| run_pool(shared, plan))
    }
}

// ── Worker state machine ───────────────────────────────────────────

/// Phase of a persistent worker within the step protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkerPhase {
    /// Waiting at the arrival barrier for step `t`.
    AwaitStep,
    /// Writing this worker's window of "next".
    ComputeChunk,
    /// Waiting at the completion barrier.
    AwaitCompletion,
    /// Relabelling the buffers (designated worker only).
    Rotate,
    /// Waiting at the post-rotation barrier.
    AwaitRotation,
    /// All steps done; the thread returns.
    Finished,
}

impl WorkerPhase {
    /// Entry phase for a run of `t_max` steps.
    pub fn start(t_max: usize) -> Self {
        if t_max == 0 {
            Self::Finished
        } else {
            Self::AwaitStep
        }
    }

    /// Transition out of `self`.
    ///
    /// `steps_done` counts steps whose post-rotation barrier has been
    /// crossed. `halted` is set when any worker failed during the current
    /// step; it is read after the completion barrier, where every worker
    /// observes the same value. A halted step is not rotated, and every
    /// worker finishes after its post-rotation barrier.
    pub fn next(self, designated: bool, steps_done: usize, t_max: usize, halted: bool) -> Self {
        match self {
            Self::AwaitStep => Self::ComputeChunk,
            Self::ComputeChunk => Self::AwaitCompletion,
            Self::AwaitCompletion if designated && !halted => Self::Rotate,
            Self::AwaitCompletion | Self::Rotate => Self::AwaitRotation,
            Self::AwaitRotation if halted || steps_done >= t_max => Self::Finished,
            Self::AwaitRotation => Self::AwaitStep,
            Self::Finished => Self::Finished,
        }
    }
}

/// What a worker reports when it leaves the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct WorkerOutcome {
    steps: usize,
    rotations: u64,
    panicked: bool,
}

struct Worker<'s, 'a> {
    id: usize,
    part: Partition,
    shared: &'s SharedArena<'a>,
    barrier: &'s Barrier,
    halt: &'s AtomicBool,
    t_max: usize,
    coupling: f64,
}

impl Worker<'_, '_> {
    /// Worker 0 performs every rotation.
    fn designated(&self) -> bool {
        self.id == 0
    }

    fn run(&self) -> WorkerOutcome {
        let mut outcome = WorkerOutcome {
            steps: 0,
            rotations: 0,
            panicked: false,
        };
        let mut halted = false;
        let mut phase = WorkerPhase::start(self.t_max);

        loop {
            match phase {
                WorkerPhase::AwaitStep => {
                    self.barrier.wait();
                }
                WorkerPhase::ComputeChunk => {
                    let computed = panic::catch_unwind(AssertUnwindSafe(|| self.compute()));
                    if computed.is_err() {
                        outcome.panicked = true;
                        self.halt.store(true, Ordering::Relaxed);
                    }
                }
                WorkerPhase::AwaitCompletion => {
                    self.barrier.wait();
                    // Every store to `halt` happens before this barrier.
                    halted = self.halt.load(Ordering::Relaxed);
                }
                WorkerPhase::Rotate => {
                    self.shared.rotate();
                    outcome.rotations += 1;
                }
                WorkerPhase::AwaitRotation => {
                    self.barrier.wait();
                    outcome.steps += 1;
                }
                WorkerPhase::Finished => break,
            }
            phase = phase.next(self.designated(), outcome.steps, self.t_max, halted);
        }

        trace!(
            worker = self.id,
            steps = outcome.steps,
            rotations = outcome.rotations,
            "worker finished"
        );
        outcome
    }

    #[allow(unsafe_code)]
    fn compute(&self) {
        let rotation = self.shared.rotation();
        // SAFETY: called only between the arrival and completion barriers.
        // The designated worker rotates only after the completion barrier,
        // so `rotation` is the mapping every worker sees this step, and
        // partitions from `partition()` never overlap.
        let views = unsafe { self.shared.worker_views(&rotation, self.part) };
        update_window(
            views.previous,
            views.current,
            views.window,
            views.start,
            self.coupling,
        );
    }
}

// ── Pool ───────────────────────────────────────────────────────────

fn run_pool(shared: &SharedArena<'_>, plan: &RunPlan) -> Result<(), SimError> {
    let workers = plan.num_workers();
    let barrier = Barrier::new(workers);
    let halt = AtomicBool::new(false);
    let (start_tx, start_rx) = crossbeam_channel::bounded::<()>(workers);

    debug!(workers, t_max = plan.t_max, "starting persistent worker pool");

    let outcomes = thread::scope(|s| -> Result<Vec<(usize, WorkerOutcome)>, SimError> {
        let mut handles = Vec::with_capacity(workers);
        for (id, &part) in plan.partitions.iter().enumerate() {
            let worker = Worker {
                id,
                part,
                shared,
                barrier: &barrier,
                halt: &halt,
                t_max: plan.t_max,
                coupling: plan.coupling,
            };
            let start_rx: Receiver<()> = start_rx.clone();
            let spawned = thread::Builder::new()
                .name(format!("wavefield-worker-{id}"))
                .spawn_scoped(s, move || match start_rx.recv() {
                    Ok(()) => Some(worker.run()),
                    Err(_) => None,
                });
            match spawned {
                Ok(handle) => handles.push((id, handle)),
                Err(source) => {
                    // Disconnecting the start channel releases every
                    // worker spawned so far without entering the barrier.
                    drop(start_tx);
                    return Err(SimError::WorkerSpawn { worker: id, source });
                }
            }
        }

        for _ in 0..workers {
            // Capacity equals the worker count and `start_rx` is still
            // held here, so this neither blocks nor fails.
            let _ = start_tx.send(());
        }
        drop(start_tx);

        let mut outcomes = Vec::with_capacity(workers);
        let mut first_panic = None;
        for (id, handle) in handles {
            match handle.join() {
                Ok(Some(outcome)) if !outcome.panicked => outcomes.push((id, outcome)),
                _ => {
                    first_panic.get_or_insert(id);
                }
            }
        }
        match first_panic {
            Some(worker) => Err(SimError::WorkerPanicked { worker }),
            None => Ok(outcomes),
        }
    })?;

    let rotations: u64 = outcomes.iter().map(|(_, o)| o.rotations).sum();
    debug_assert_eq!(rotations, plan.t_max as u64);
    debug_assert!(outcomes.iter().all(|(_, o)| o.steps == plan.t_max));
    debug!(workers, rotations, "worker pool joined");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequential::SequentialExecutor;
    use wavefield_arena::Role;
    use wavefield_core::RunConfig;
    use wavefield_test_utils::seeded_arena;

    fn trace_phases(designated: bool, t_max: usize) -> Vec<WorkerPhase> {
        let mut phases = Vec::new();
        let mut steps = 0;
        let mut phase = WorkerPhase::start(t_max);
        while phase != WorkerPhase::Finished {
            phases.push(phase);
            if phase == WorkerPhase::AwaitRotation {
                steps += 1;
            }
            phase = phase.next(designated, steps, t_max, false);
        }
        phases
    }

    #[test]
    fn designated_worker_rotates_every_step() {
        use WorkerPhase::*;
        let phases = trace_phases(true, 2);
        assert_eq!(
            phases,
            vec![
                AwaitStep,
                ComputeChunk,
                AwaitCompletion,
                Rotate,
                AwaitRotation,
                AwaitStep,
                ComputeChunk,
                AwaitCompletion,
                Rotate,
                AwaitRotation,
            ]
        );
    }

    #[test]
    fn other_workers_skip_rotation() {
        let phases = trace_phases(false, 3);
        assert!(!phases.contains(&WorkerPhase::Rotate));
        assert_eq!(phases.len(), 3 * 4);
    }

    #[test]
    fn every_worker_crosses_three_barriers_per_step() {
        for designated in [true, false] {
            let waits = trace_phases(designated, 5)
                .into_iter()
                .filter(|p| {
                    matches!(
                        p,
                        WorkerPhase::AwaitStep
                            | WorkerPhase::AwaitCompletion
                            | WorkerPhase::AwaitRotation
                    )
                })
                .count();
            assert_eq!(waits, 15);
        }
    }

    #[test]
    fn halt_finishes_after_current_step() {
        let next = WorkerPhase::AwaitRotation.next(false, 1, 10, true);
        assert_eq!(next, WorkerPhase::Finished);
    }

    #[test]
    fn halted_step_is_not_rotated() {
        use WorkerPhase::*;
        assert_eq!(AwaitCompletion.next(true, 0, 10, true), AwaitRotation);
        assert_eq!(AwaitCompletion.next(true, 0, 10, false), Rotate);
        assert_eq!(AwaitCompletion.next(false, 0, 10, true), AwaitRotation);
    }

    #[test]
    fn zero_steps_never_starts() {
        assert_eq!(WorkerPhase::start(0), WorkerPhase::Finished);
    }

    #[test]
    fn matches_sequential() {
        let plan = RunPlan::new(&RunConfig::new(301, 50, 4));
        let mut reference = seeded_arena(301);
        SequentialExecutor.execute(&mut reference, &plan).unwrap();

        let mut arena = seeded_arena(301);
        BarrierExecutor.execute(&mut arena, &plan).unwrap();

        assert_eq!(arena.rotation().count(), 50);
        assert_eq!(arena.buffer(Role::Current), reference.buffer(Role::Current));
    }

    #[test]
    fn idle_workers_still_synchronise() {
        let plan = RunPlan::new(&RunConfig::new(4, 6, 10));
        let mut arena = GenerationArena::new(
            vec![0.0, 0.5, -0.5, 0.0],
            vec![0.0, 1.0, 1.0, 0.0],
            vec![0.0; 4],
        )
        .unwrap();
        BarrierExecutor.execute(&mut arena, &plan).unwrap();
        assert_eq!(arena.rotation().count(), 6);
    }
}
