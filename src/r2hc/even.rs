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
use crate::dft::Dft;
use crate::err::try_vec;
use crate::plan::{OpCount, RdftPlan};
use crate::planner::Planner;
use crate::problem::{IoDim, RdftKind, RdftProblem};
use crate::radix2::Radix2;
use crate::solver::{Solver, SolverScore};
use crate::util::{compute_twiddle, strided_extent};
use crate::{FftExecutor, FftSample, RodftError};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// Even length real-to-half-complex through a complex FFT of half length.
///
/// Adjacent samples are packed as `z[m] = x[2m] + i·x[2m + 1]`, transformed,
/// and the spectra of the even and odd samples are separated again with
/// `E[k] = (Z[k] + conj Z[h - k]) / 2`, `O[k] = (Z[k] - conj Z[h - k]) / 2i`,
/// `X[k] = E[k] + exp(-2πi·k/n)·O[k]`.
pub struct R2hcEvenSolver;

pub(crate) struct R2hcEvenPlan<T> {
    dim: IoDim,
    intercept: Box<dyn FftExecutor<T> + Send + Sync>,
    twiddles: Vec<Complex<T>>,
    active: bool,
}

impl<T: FftSample> R2hcEvenPlan<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new(dim: IoDim) -> Result<Self, RodftError> {
        assert!(
            dim.n >= 2 && dim.n.is_multiple_of(2),
            "Even interceptor requires even length"
        );
        let half = dim.n / 2;
        let intercept: Box<dyn FftExecutor<T> + Send + Sync> = if half.is_power_of_two() {
            Box::new(Radix2::new(half)?)
        } else {
            Box::new(Dft::new(half)?)
        };
        assert_eq!(
            intercept.length(),
            half,
            "Underlying interceptor must have a half-length of real values"
        );

        let mut twiddles = try_vec![Complex::<T>::zero(); half];
        for (k, twiddle) in twiddles.iter_mut().enumerate() {
            *twiddle = compute_twiddle(k, dim.n);
        }
        Ok(Self {
            dim,
            intercept,
            twiddles,
            active: false,
        })
    }

    fn pack(&self, input: &[T]) -> Result<Vec<Complex<T>>, RodftError> {
        let required = self.input_length();
        if input.len() < required {
            return Err(RodftError::InvalidInputLength(required, input.len()));
        }
        let is = self.dim.is;
        let mut packed = try_vec![Complex::<T>::zero(); self.dim.n / 2];
        for (m, dst) in packed.iter_mut().enumerate() {
            *dst = Complex::new(input[2 * m * is], input[(2 * m + 1) * is]);
        }
        self.intercept.execute(&mut packed)?;
        Ok(packed)
    }

    fn unpack(&self, z: &[Complex<T>], output: &mut [T]) {
        let n = self.dim.n;
        let half = n / 2;
        let os = self.dim.os;
        let one_half: T = 0.5f64.as_();

        let z0 = z[0];
        output[0] = z0.re + z0.im;
        output[half * os] = z0.re - z0.im;

        for k in 1..half {
            let a = z[k];
            let b = z[half - k].conj();
            let even = (a + b) * one_half;
            let diff = (a - b) * one_half;
            // diff / i
            let odd = Complex::new(diff.im, -diff.re);
            let x = even + self.twiddles[k] * odd;
            output[k * os] = x.re;
            output[(n - k) * os] = x.im;
        }
    }

    fn check_output(&self, output: &[T]) -> Result<(), RodftError> {
        let required = self.output_length();
        if output.len() < required {
            return Err(RodftError::InvalidOutputLength(required, output.len()));
        }
        Ok(())
    }
}

impl<T: FftSample> RdftPlan<T> for R2hcEvenPlan<T>
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
        let z = self.pack(input)?;
        self.unpack(&z, output);
        Ok(())
    }

    fn execute_in_place(&self, data: &mut [T]) -> Result<(), RodftError> {
        if !self.active {
            return Err(RodftError::PlanIsDormant);
        }
        if self.dim.is != self.dim.os {
            return Err(RodftError::InvalidStride(self.dim.is, self.dim.os));
        }
        self.check_output(data)?;
        let z = self.pack(data)?;
        self.unpack(&z, data);
        Ok(())
    }

    fn input_length(&self) -> usize {
        strided_extent(self.dim.n, self.dim.is)
    }

    fn output_length(&self) -> usize {
        strided_extent(self.dim.n, self.dim.os)
    }

    fn describe(&self) -> String {
        let half = self.dim.n / 2;
        let inner = if half.is_power_of_two() {
            "radix2"
        } else {
            "dft"
        };
        format!("(r2hc-even-{}({inner}-{half}))", self.dim.n)
    }

    fn ops(&self) -> OpCount {
        let half = self.dim.n / 2;
        let h = half as f64;
        let inner = if half.is_power_of_two() {
            let butterflies = h / 2. * half.trailing_zeros() as f64;
            OpCount::new(6. * butterflies, 4. * butterflies, 0., 0.)
        } else {
            OpCount::new(0., 0., 4. * h * h, 0.)
        };
        let untangle = OpCount::new(8. * (h - 1.), 6. * (h - 1.), 0., 2.);
        inner + untangle
    }
}

impl<T: FftSample> Solver<T> for R2hcEvenSolver
where
    f64: AsPrimitive<T>,
{
    fn name(&self) -> &'static str {
        "r2hc-even"
    }

    fn applicable(&self, problem: &RdftProblem) -> bool {
        problem.is_single_1d(RdftKind::R2hc)
            && problem
                .dim()
                .is_some_and(|dim| dim.n >= 2 && dim.n.is_multiple_of(2))
    }

    fn score(&self, problem: &RdftProblem, _: &Planner<T>) -> SolverScore {
        if Solver::<T>::applicable(self, problem) {
            SolverScore::Good
        } else {
            SolverScore::Bad
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
        Ok(Some(Box::new(R2hcEvenPlan::<T>::new(dim)?)))
    }
}
