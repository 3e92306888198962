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
use crate::planner::Planner;
use crate::problem::RdftProblem;
use crate::{FftSample, RodftError};
use num_traits::AsPrimitive;

/// How desirable a solver considers itself for a problem.
///
/// The planner prefers `Good` over `Ugly` and never asks a solver that
/// reported `Bad` to build a plan.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum SolverScore {
    Bad,
    Ugly,
    Good,
}

/// One strategy for executing a class of problems.
pub trait Solver<T: FftSample>: Send + Sync
where
    f64: AsPrimitive<T>,
{
    fn name(&self) -> &'static str;

    fn applicable(&self, problem: &RdftProblem) -> bool;

    fn score(&self, problem: &RdftProblem, planner: &Planner<T>) -> SolverScore;

    /// Builds a dormant plan, or `Ok(None)` when this solver cannot serve
    /// the problem after all, e.g. because a required child plan is missing.
    fn make_plan(
        &self,
        problem: &RdftProblem,
        planner: &Planner<T>,
    ) -> Result<Option<Box<dyn RdftPlan<T>>>, RodftError>;
}
