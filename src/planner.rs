/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::plan::RdftPlan;
use crate::problem::RdftProblem;
use crate::r2hc::{R2hcDirectSolver, R2hcEvenSolver};
use crate::rodft00e_r2hc::Rodft00R2hcSolver;
use crate::solver::{Solver, SolverScore};
use crate::twiddles::TwiddleCache;
use crate::{FftSample, RodftError};
use num_traits::AsPrimitive;
use std::sync::Arc;

/// Planner tuning knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Plans of equal size share one twiddle table through the planner's
    /// cache. When disabled every plan owns a private table.
    pub share_twiddles: bool,
    /// Largest real-to-half-complex size the direct quadratic evaluation is
    /// scored `Good` for.
    pub direct_r2hc_threshold: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            share_twiddles: true,
            direct_r2hc_threshold: 16,
        }
    }
}

/// Owns the solver registry and the shared twiddle cache, and picks a plan
/// for a problem among every registered solver.
pub struct Planner<T: FftSample>
where
    f64: AsPrimitive<T>,
{
    solvers: Vec<Box<dyn Solver<T>>>,
    twiddles: Arc<TwiddleCache<T>>,
    config: PlannerConfig,
}

impl<T: FftSample> Planner<T>
where
    f64: AsPrimitive<T>,
{
    /// Planner with an empty registry.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            solvers: Vec::new(),
            twiddles: Arc::new(TwiddleCache::new()),
            config,
        }
    }

    /// Planner with every solver this crate provides.
    pub fn with_default_solvers(config: PlannerConfig) -> Self {
        let mut planner = Self::new(config);
        planner.register(Box::new(R2hcDirectSolver));
        planner.register(Box::new(R2hcEvenSolver));
        planner.register(Box::new(Rodft00R2hcSolver));
        planner
    }

    pub fn register(&mut self, solver: Box<dyn Solver<T>>) {
        #[cfg(feature = "tracing")]
        tracing::debug!(solver = solver.name(), "solver registered");
        self.solvers.push(solver);
    }

    pub fn solvers(&self) -> impl Iterator<Item = &dyn Solver<T>> {
        self.solvers.iter().map(|x| &**x)
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn twiddles(&self) -> &Arc<TwiddleCache<T>> {
        &self.twiddles
    }

    /// Cache a new plan should bind its twiddles through.
    pub(crate) fn twiddle_cache_for_plan(&self) -> Arc<TwiddleCache<T>> {
        if self.config.share_twiddles {
            self.twiddles.clone()
        } else {
            Arc::new(TwiddleCache::new())
        }
    }

    /// Finds the cheapest plan among the best scored solvers.
    ///
    /// Returns `Ok(None)` when no registered solver can serve `problem`.
    /// Solvers are tried tier by tier, `Good` before `Ugly`; inside a tier
    /// every candidate is built and the lowest [crate::OpCount::total] wins,
    /// the earlier registered solver on ties.
    pub fn mkplan(&self, problem: &RdftProblem) -> Result<Option<Box<dyn RdftPlan<T>>>, RodftError> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("mkplan", kind = ?problem.kind, sz = ?problem.sz.dims());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        for tier in [SolverScore::Good, SolverScore::Ugly] {
            let mut best: Option<Box<dyn RdftPlan<T>>> = None;
            for solver in self.solvers.iter() {
                if solver.score(problem, self) != tier {
                    continue;
                }
                let Some(candidate) = solver.make_plan(problem, self)? else {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(solver = solver.name(), "solver declined");
                    continue;
                };
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    solver = solver.name(),
                    cost = candidate.ops().total(),
                    "candidate plan"
                );
                let better = match &best {
                    Some(current) => candidate.ops().total() < current.ops().total(),
                    None => true,
                };
                if better {
                    best = Some(candidate);
                }
            }
            if let Some(plan) = best {
                #[cfg(feature = "tracing")]
                tracing::debug!(plan = %plan.describe(), "plan selected");
                return Ok(Some(plan));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("no applicable solver");
        Ok(None)
    }
}
