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
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Type-I discrete sine transform planned through a composable
//! solver/plan registry.
//!
//! A [Planner] holds [Solver]s. Asked for a problem it lets every solver
//! score itself, builds plans from the best tier and keeps the cheapest.
//! The sine transform solver reduces RODFT00 of logical size `2n` to a
//! real-to-half-complex transform of size `n`, which is planned
//! recursively through the same planner.
mod dft;
mod err;
mod plan;
mod planner;
mod problem;
mod r2hc;
mod radix2;
mod rodft00e_r2hc;
mod solver;
mod traits;
mod twiddles;
mod util;

pub use err::RodftError;
pub use plan::{OpCount, RdftPlan};
pub use planner::{Planner, PlannerConfig};
pub use problem::{IoDim, RdftKind, RdftProblem, Tensor};
pub use r2hc::{R2hcDirectSolver, R2hcEvenSolver};
pub use rodft00e_r2hc::Rodft00R2hcSolver;
pub use solver::{Solver, SolverScore};
pub use traits::{FftSample, FftTrigonometry};
pub use twiddles::{TwiddleCache, TwiddleInstr, TwiddleKey, TwiddleTable};

use num_complex::Complex;
use num_traits::AsPrimitive;

/// In-place forward complex FFT of a fixed length.
pub(crate) trait FftExecutor<T> {
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), RodftError>;
    fn length(&self) -> usize;
}

pub struct Rodft {}

impl Rodft {
    fn make_dst1<T: FftSample>(len: usize) -> Result<Box<dyn RdftPlan<T>>, RodftError>
    where
        f64: AsPrimitive<T>,
    {
        if len == 0 {
            return Err(RodftError::ZeroSizedTransform);
        }
        let logical = 2 * (len + 1);
        let planner = Planner::with_default_solvers(PlannerConfig::default());
        let problem = RdftProblem::new_1d(logical, 1, 1, RdftKind::Rodft00);
        let mut plan = planner
            .mkplan(&problem)?
            .ok_or(RodftError::NoPlan(RdftKind::Rodft00, logical))?;
        plan.activate()?;
        Ok(plan)
    }

    fn make_r2hc<T: FftSample>(len: usize) -> Result<Box<dyn RdftPlan<T>>, RodftError>
    where
        f64: AsPrimitive<T>,
    {
        if len == 0 {
            return Err(RodftError::ZeroSizedTransform);
        }
        let planner = Planner::with_default_solvers(PlannerConfig::default());
        let problem = RdftProblem::new_1d(len, 1, 1, RdftKind::R2hc);
        let mut plan = planner
            .mkplan(&problem)?
            .ok_or(RodftError::NoPlan(RdftKind::R2hc, len))?;
        plan.activate()?;
        Ok(plan)
    }

    /// Activated unnormalized DST-I of `len` contiguous samples,
    /// `y[k] = Σ x[j]·sin(π·(j + 1)·(k + 1) / (len + 1))`.
    pub fn make_dst1_f32(len: usize) -> Result<Box<dyn RdftPlan<f32>>, RodftError> {
        Rodft::make_dst1(len)
    }

    /// Activated unnormalized DST-I of `len` contiguous samples,
    /// `y[k] = Σ x[j]·sin(π·(j + 1)·(k + 1) / (len + 1))`.
    pub fn make_dst1_f64(len: usize) -> Result<Box<dyn RdftPlan<f64>>, RodftError> {
        Rodft::make_dst1(len)
    }

    pub fn make_r2hc_f32(len: usize) -> Result<Box<dyn RdftPlan<f32>>, RodftError> {
        Rodft::make_r2hc(len)
    }

    pub fn make_r2hc_f64(len: usize) -> Result<Box<dyn RdftPlan<f64>>, RodftError> {
        Rodft::make_r2hc(len)
    }
}
