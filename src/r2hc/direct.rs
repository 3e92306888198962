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
use crate::err::try_vec;
use crate::plan::{OpCount, RdftPlan};
use crate::planner::Planner;
use crate::problem::{IoDim, RdftKind, RdftProblem};
use crate::solver::{Solver, SolverScore};
use crate::util::{compute_twiddle, strided_extent};
use crate::{FftSample, RodftError};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// Quadratic real-to-half-complex evaluation straight from the definition.
pub struct R2hcDirectSolver;

pub(crate) struct R2hcDirectPlan<T> {
    dim: IoDim,
    twiddles: Vec<Complex<T>>,
    active: bool,
}

impl<T: FftSample> R2hcDirectPlan<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(dim: IoDim) -> Result<Self, RodftError> {
        if dim.n == 0 {
            return Err(RodftError::ZeroSizedTransform);
        }
        let mut twiddles = try_vec![Complex::<T>::zero(); dim.n];
        for (k, dst) in twiddles.iter_mut().enumerate() {
            *dst = compute_twiddle(k, dim.n);
        }
        Ok(Self {
            dim,
            twiddles,
            active: false,
        })
    }

    /// Writes the packed spectrum of the contiguous `x` into `output`.
    fn transform(&self, x: &[T], output: &mut [T]) {
        let n = self.dim.n;
        let os = self.dim.os;
        for k in 0..=n / 2 {
            let mut sum = Complex::<T>::zero();
            let mut twiddle_idx = 0usize;
            for &src in x.iter() {
                let w = self.twiddles[twiddle_idx];
                sum.re = src.mul_add(w.re, sum.re);
                sum.im = src.mul_add(w.im, sum.im);
                twiddle_idx += k;
                if twiddle_idx >= n {
                    twiddle_idx -= n;
                }
            }
            output[k * os] = sum.re;
            if k > 0 && k < n - k {
                output[(n - k) * os] = sum.im;
            }
        }
    }

    fn check_output(&self, output: &[T]) -> Result<(), RodftError> {
        let required = self.output_length();
        if output.len() < required {
            return Err(RodftError::InvalidOutputLength(required, output.len()));
        }
        Ok(())
    }

    fn gather(&self, input: &[T]) -> Result<Vec<T>, RodftError> {
        let required = self.input_length();
        if input.len() < required {
            return Err(RodftError::InvalidInputLength(required, input.len()));
        }
        let mut x = try_vec![T::zero(); self.dim.n];
        for (i, dst) in x.iter_mut().enumerate() {
            *dst = input[i * self.dim.is];
        }
        Ok(x)
    }
}

impl<T: FftSample> RdftPlan<T> for R2hcDirectPlan<T>
where
    f64: AsPrimitive<T>,
{
    fn activate(&mut self) -> Result<(), RodftError> {
        self.active = true;
        Ok(())
    }

    fn deactivate(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn execute(&self, input: &[T], output: &mut [T]) -> Result<(), RodftError> {
        if !self.active {
            return Err(RodftError::PlanIsDormant);
        }
        self.check_output(output)?;
        if self.dim.is == 1 {
            let required = self.input_length();
            if input.len() < required {
                return Err(RodftError::InvalidInputLength(required, input.len()));
            }
            self.transform(&input[..required], output);
        } else {
            let x = self.gather(input)?;
            self.transform(&x, output);
        }
        Ok(())
    }

    fn execute_in_place(&self, data: &mut [T]) -> Result<(), RodftError> {
        if !self.active {
            return Err(RodftError::PlanIsDormant);
        }
        if self.dim.is != self.dim.os {
            return Err(RodftError::InvalidStride(self.dim.is, self.dim.os));
        }
        let x = self.gather(data)?;
        self.transform(&x, data);
        Ok(())
    }

    fn input_length(&self) -> usize {
        strided_extent(self.dim.n, self.dim.is)
    }

    fn output_length(&self) -> usize {
        strided_extent(self.dim.n, self.dim.os)
    }

    fn describe(&self) -> String {
        format!("(r2hc-direct-{})", self.dim.n)
    }

    fn ops(&self) -> OpCount {
        let n = self.dim.n as f64;
        let bins = (self.dim.n / 2 + 1) as f64;
        OpCount::new(0., 0., 2. * bins * n, bins)
    }
}

impl<T: FftSample> Solver<T> for R2hcDirectSolver
where
    f64: AsPrimitive<T>,
{
    fn name(&self) -> &'static str {
        "r2hc-direct"
    }

    fn applicable(&self, problem: &RdftProblem) -> bool {
        problem.is_single_1d(RdftKind::R2hc) && problem.dim().is_some_and(|dim| dim.n > 0)
    }

    fn score(&self, problem: &RdftProblem, planner: &Planner<T>) -> SolverScore {
        if !Solver::<T>::applicable(self, problem) {
            return SolverScore::Bad;
        }
        match problem.dim() {
            Some(dim) if dim.n <= planner.config().direct_r2hc_threshold => SolverScore::Good,
            _ => SolverScore::Ugly,
        }
    }

    fn make_plan(
        &self,
        problem: &RdftProblem,
        _: &Planner<T>,
    ) -> Result<Option<Box<dyn RdftPlan<T>>>, RodftError> {
        if !Solver::<T>::applicable(self, problem) {
            return Ok(None);
        }
        let Some(dim) = problem.dim() else {
            return Ok(None);
        };
        Ok(Some(Box::new(R2hcDirectPlan::<T>::new(dim)?)))
    }
}
