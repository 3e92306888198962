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
//! Type-I discrete sine transform of logical size `2n` through a real-to-half-complex
//! transform of size `n`.
//!
//! This is the FFTPACK / Numerical Recipes `sinft` trick. With `N = n - 1`
//! samples it computes the unnormalized
//! `y[k] = Σ x[j]·sin(π·(j + 1)·(k + 1) / n)` for `j, k < N`.

use crate::err::try_vec;
use crate::plan::{OpCount, RdftPlan};
use crate::planner::Planner;
use crate::problem::{RdftKind, RdftProblem, Tensor};
use crate::solver::{Solver, SolverScore};
use crate::twiddles::{TwiddleCache, TwiddleInstr, TwiddleKey, TwiddleTable};
use crate::util::strided_extent;
use crate::{FftSample, RodftError};
use num_traits::AsPrimitive;
use std::sync::Arc;

pub struct Rodft00R2hcSolver;

pub(crate) struct Rodft00R2hcPlan<T> {
    cld: Box<dyn RdftPlan<T>>,
    twiddle_cache: Arc<TwiddleCache<T>>,
    twiddles: Option<Arc<TwiddleTable<T>>>,
    n: usize,
    is: usize,
    os: usize,
    ops: OpCount,
}

/// `W[i] = sin(2π·i / 2n)` for `i < (n + 1) / 2`.
fn twiddle_key(n: usize) -> TwiddleKey {
    TwiddleKey::new(TwiddleInstr::Sin, 2 * n, n.div_ceil(2))
}

/// Folds the `n - 1` input samples into the `n` samples handed to the
/// half-complex transform.
pub(crate) fn rodft00_preprocess<T: FftSample>(input: &[T], is: usize, w: &[T], buf: &mut [T])
where
    f64: AsPrimitive<T>,
{
    let n = buf.len();
    let half: T = 0.5f64.as_();

    buf[0] = T::zero();
    let mut i = 1;
    while i < n - i {
        let a = input[(i - 1) * is];
        let b = input[(n - i - 1) * is];
        let apb = w[i] * (a + b);
        let amb = half * (a - b);
        buf[i] = apb + amb;
        buf[n - i] = apb - amb;
        i += 1;
    }
    if i == n - i {
        let two: T = 2f64.as_();
        buf[i] = two * input[(i - 1) * is];
    }
}

/// Rebuilds the sine coefficients from the packed spectrum in `buf`.
///
/// Odd outputs are the negated imaginary parts, even outputs accumulate the
/// real parts as a running sum starting from half the DC term.
pub(crate) fn rodft00_postprocess<T: FftSample>(buf: &[T], output: &mut [T], os: usize)
where
    f64: AsPrimitive<T>,
{
    let n = buf.len();
    let half: T = 0.5f64.as_();

    output[0] = buf[0] * half;
    let mut i = 1;
    while i + i < n - 1 {
        let k = i + i;
        output[(k - 1) * os] = -buf[n - i];
        output[k * os] = output[(k - 2) * os] + buf[i];
        i += 1;
    }
    if i + i == n - 1 {
        output[(n - 2) * os] = -buf[n - i];
    }
}

impl<T: FftSample> Rodft00R2hcPlan<T>
where
    f64: AsPrimitive<T>,
{
    fn check_lengths(&self, input_len: usize, output_len: usize) -> Result<(), RodftError> {
        let required = self.input_length();
        if input_len < required {
            return Err(RodftError::InvalidInputLength(required, input_len));
        }
        let required = self.output_length();
        if output_len < required {
            return Err(RodftError::InvalidOutputLength(required, output_len));
        }
        Ok(())
    }

    fn bound_twiddles(&self) -> Result<&[T], RodftError> {
        self.twiddles
            .as_ref()
            .map(|table| table.values())
            .ok_or(RodftError::PlanIsDormant)
    }

    fn check_scratch(&self, scratch: &[T]) -> Result<(), RodftError> {
        if scratch.len() < self.n {
            return Err(RodftError::ScratchBufferIsTooSmall(scratch.len(), self.n));
        }
        Ok(())
    }
}

impl<T: FftSample> RdftPlan<T> for Rodft00R2hcPlan<T>
where
    f64: AsPrimitive<T>,
{
    fn activate(&mut self) -> Result<(), RodftError> {
        self.cld.activate()?;
        if self.twiddles.is_none() {
            self.twiddles = Some(self.twiddle_cache.acquire(twiddle_key(self.n))?);
            #[cfg(feature = "tracing")]
            tracing::trace!(n = self.n, "rodft00e-r2hc activated");
        }
        Ok(())
    }

    fn deactivate(&mut self) {
        self.cld.deactivate();
        if self.twiddles.take().is_some() {
            self.twiddle_cache.release(twiddle_key(self.n));
            #[cfg(feature = "tracing")]
            tracing::trace!(n = self.n, "rodft00e-r2hc deactivated");
        }
    }

    fn is_active(&self) -> bool {
        self.twiddles.is_some()
    }

    fn execute(&self, input: &[T], output: &mut [T]) -> Result<(), RodftError> {
        let mut scratch = try_vec![T::zero(); self.n];
        self.execute_with_scratch(input, output, &mut scratch)
    }

    fn execute_with_scratch(
        &self,
        input: &[T],
        output: &mut [T],
        scratch: &mut [T],
    ) -> Result<(), RodftError> {
        let w = self.bound_twiddles()?;
        self.check_lengths(input.len(), output.len())?;
        self.check_scratch(scratch)?;
        let buf = &mut scratch[..self.n];

        rodft00_preprocess(input, self.is, w, buf);
        self.cld.execute_in_place(buf)?;
        rodft00_postprocess(buf, output, self.os);
        Ok(())
    }

    fn execute_in_place(&self, data: &mut [T]) -> Result<(), RodftError> {
        if self.is != self.os {
            return Err(RodftError::InvalidStride(self.is, self.os));
        }
        let w = self.bound_twiddles()?;
        self.check_lengths(data.len(), data.len())?;
        let mut buf = try_vec![T::zero(); self.n];

        // Every input sample is consumed before the first output is written.
        rodft00_preprocess(data, self.is, w, &mut buf);
        self.cld.execute_in_place(&mut buf)?;
        rodft00_postprocess(&buf, data, self.os);
        Ok(())
    }

    fn scratch_length(&self) -> usize {
        self.n
    }

    fn input_length(&self) -> usize {
        strided_extent(self.n - 1, self.is)
    }

    fn output_length(&self) -> usize {
        // out[0] is written even when there are no samples.
        strided_extent((self.n - 1).max(1), self.os)
    }

    fn describe(&self) -> String {
        format!("(rodft00e-r2hc-{}{})", 2 * self.n, self.cld.describe())
    }

    fn ops(&self) -> OpCount {
        self.ops
    }
}

impl<T> Drop for Rodft00R2hcPlan<T> {
    fn drop(&mut self) {
        if self.twiddles.take().is_some() {
            self.twiddle_cache.release(twiddle_key(self.n));
        }
    }
}

impl<T: FftSample> Solver<T> for Rodft00R2hcSolver
where
    f64: AsPrimitive<T>,
{
    fn name(&self) -> &'static str {
        "rodft00e-r2hc"
    }

    fn applicable(&self, problem: &RdftProblem) -> bool {
        problem.is_single_1d(RdftKind::Rodft00)
            && problem
                .dim()
                .is_some_and(|dim| dim.n > 0 && dim.n.is_multiple_of(2))
    }

    fn score(&self, problem: &RdftProblem, _: &Planner<T>) -> SolverScore {
        if Solver::<T>::applicable(self, problem) {
            SolverScore::Ugly
        } else {
            SolverScore::Bad
        }
    }

    fn make_plan(
        &self,
        problem: &RdftProblem,
        planner: &Planner<T>,
    ) -> Result<Option<Box<dyn RdftPlan<T>>>, RodftError> {
        if !Solver::<T>::applicable(self, problem) {
            return Ok(None);
        }
        let Some(dim) = problem.dim() else {
            return Ok(None);
        };

        let n = dim.n / 2;
        let cldp = RdftProblem::new(Tensor::new_1d(n, 1, 1), problem.vecsz.clone(), RdftKind::R2hc);
        let Some(cld) = planner.mkplan(&cldp)? else {
            return Ok(None);
        };

        // Pre and post processing are not counted.
        let ops = cld.ops();
        Ok(Some(Box::new(Rodft00R2hcPlan {
            cld,
            twiddle_cache: planner.twiddle_cache_for_plan(),
            twiddles: None,
            n,
            is: dim.is,
            os: dim.os,
            ops,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlannerConfig;
    use crate::problem::IoDim;
    use crate::r2hc::R2hcDirectSolver;
    use rand::Rng;
    use std::sync::Mutex;

    /// Brute-force unnormalized DST-I.
    fn dst1_reference(x: &[f64]) -> Vec<f64> {
        let len = x.len();
        (0..len)
            .map(|k| {
                x.iter()
                    .enumerate()
                    .map(|(j, &v)| {
                        v * (std::f64::consts::PI * ((j + 1) * (k + 1)) as f64 / (len + 1) as f64)
                            .sin()
                    })
                    .sum()
            })
            .collect()
    }

    fn planner() -> Planner<f64> {
        Planner::with_default_solvers(PlannerConfig::default())
    }

    fn rodft00(m: usize) -> RdftProblem {
        RdftProblem::new_1d(m, 1, 1, RdftKind::Rodft00)
    }

    fn make_active(planner: &Planner<f64>, problem: &RdftProblem) -> Box<dyn RdftPlan<f64>> {
        let mut plan = Rodft00R2hcSolver
            .make_plan(problem, planner)
            .unwrap()
            .expect("reduction must apply");
        plan.activate().unwrap();
        plan
    }

    struct RecordingPlan {
        inner: Box<dyn RdftPlan<f64>>,
        seen: Arc<Mutex<Vec<Vec<f64>>>>,
    }

    impl RdftPlan<f64> for RecordingPlan {
        fn activate(&mut self) -> Result<(), RodftError> {
            self.inner.activate()
        }

        fn deactivate(&mut self) {
            self.inner.deactivate()
        }

        fn is_active(&self) -> bool {
            self.inner.is_active()
        }

        fn execute(&self, input: &[f64], output: &mut [f64]) -> Result<(), RodftError> {
            self.seen.lock().unwrap().push(input.to_vec());
            self.inner.execute(input, output)
        }

        fn execute_in_place(&self, data: &mut [f64]) -> Result<(), RodftError> {
            self.seen.lock().unwrap().push(data.to_vec());
            self.inner.execute_in_place(data)
        }

        fn input_length(&self) -> usize {
            self.inner.input_length()
        }

        fn output_length(&self) -> usize {
            self.inner.output_length()
        }

        fn describe(&self) -> String {
            format!("(recording{})", self.inner.describe())
        }

        fn ops(&self) -> OpCount {
            self.inner.ops()
        }
    }

    /// Direct half-complex transform that remembers every buffer it is fed.
    struct RecordingSolver {
        seen: Arc<Mutex<Vec<Vec<f64>>>>,
    }

    impl Solver<f64> for RecordingSolver {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn applicable(&self, problem: &RdftProblem) -> bool {
            Solver::<f64>::applicable(&R2hcDirectSolver, problem)
        }

        fn score(&self, problem: &RdftProblem, _: &Planner<f64>) -> SolverScore {
            if self.applicable(problem) {
                SolverScore::Good
            } else {
                SolverScore::Bad
            }
        }

        fn make_plan(
            &self,
            problem: &RdftProblem,
            planner: &Planner<f64>,
        ) -> Result<Option<Box<dyn RdftPlan<f64>>>, RodftError> {
            let Some(inner) = R2hcDirectSolver.make_plan(problem, planner)? else {
                return Ok(None);
            };
            Ok(Some(Box::new(RecordingPlan {
                inner,
                seen: self.seen.clone(),
            })))
        }
    }

    fn recording_planner() -> (Planner<f64>, Arc<Mutex<Vec<Vec<f64>>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut planner = Planner::new(PlannerConfig::default());
        planner.register(Box::new(RecordingSolver { seen: seen.clone() }));
        planner.register(Box::new(Rodft00R2hcSolver));
        (planner, seen)
    }

    #[test]
    fn test_applicability_truth_table() {
        let planner = planner();
        let solver = Rodft00R2hcSolver;
        let kinds = [
            RdftKind::R2hc,
            RdftKind::Hc2r,
            RdftKind::Dht,
            RdftKind::Redft00,
            RdftKind::Rodft00,
        ];
        for kind in kinds {
            for m in 1..24usize {
                for batched in [false, true] {
                    for rank in [1usize, 2] {
                        let sz = Tensor::from_dims(vec![IoDim::new(m, 1, 1); rank]);
                        let vecsz = if batched {
                            Tensor::new_1d(3, m, m)
                        } else {
                            Tensor::empty()
                        };
                        let problem = RdftProblem::new(sz, vecsz, kind);
                        let expected =
                            kind == RdftKind::Rodft00 && !batched && rank == 1 && m % 2 == 0;
                        assert_eq!(
                            Solver::<f64>::applicable(&solver, &problem),
                            expected,
                            "{problem:?}"
                        );
                        let score = solver.score(&problem, &planner);
                        if expected {
                            assert_eq!(score, SolverScore::Ugly);
                        } else {
                            assert_eq!(score, SolverScore::Bad);
                            assert!(solver.make_plan(&problem, &planner).unwrap().is_none());
                        }
                    }
                }
            }
        }
        let rank0 = RdftProblem::new(Tensor::empty(), Tensor::empty(), RdftKind::Rodft00);
        assert!(!Solver::<f64>::applicable(&solver, &rank0));
        assert!(!Solver::<f64>::applicable(&solver, &rodft00(0)));
    }

    #[test]
    fn test_matches_direct_dst1() {
        let planner = planner();
        for m in (2..=160usize).step_by(2) {
            let n = m / 2;
            let input = (0..n - 1)
                .map(|_| rand::rng().random_range(-1.0..1.0))
                .collect::<Vec<f64>>();
            let plan = make_active(&planner, &rodft00(m));
            let mut output = vec![0f64; plan.output_length()];
            plan.execute(&input, &mut output).unwrap();

            let reference = dst1_reference(&input);
            let scale = reference.iter().fold(1f64, |acc, x| acc.max(x.abs()));
            for (idx, (a, b)) in output.iter().zip(reference.iter()).enumerate() {
                assert!(
                    (a - b).abs() / scale < 1e-9,
                    "{a} != {b} at {idx} for nominal size {m}"
                );
            }
        }
    }

    #[test]
    fn test_large_odd_reduced_size_through_direct_fallback() {
        // n = 35 is odd and above the direct threshold, so only an Ugly R2HC exists.
        let planner = planner();
        let m = 70;
        let plan = make_active(&planner, &rodft00(m));
        assert_eq!(plan.describe(), "(rodft00e-r2hc-70(r2hc-direct-35))");
        let input = (0..34).map(|x| (x as f64 * 0.37).cos()).collect::<Vec<f64>>();
        let mut output = vec![0f64; 34];
        plan.execute(&input, &mut output).unwrap();
        let reference = dst1_reference(&input);
        for (a, b) in output.iter().zip(reference.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_strided_and_in_place() {
        let planner = planner();
        let m = 26;
        let samples = m / 2 - 1;
        let input = (0..samples)
            .map(|_| rand::rng().random_range(-1.0..1.0))
            .collect::<Vec<f64>>();
        let reference = dst1_reference(&input);

        let strided = RdftProblem::new_1d(m, 3, 2, RdftKind::Rodft00);
        let plan = make_active(&planner, &strided);
        let mut strided_input = vec![0f64; plan.input_length()];
        for (i, &v) in input.iter().enumerate() {
            strided_input[i * 3] = v;
        }
        let mut output = vec![0f64; plan.output_length()];
        plan.execute(&strided_input, &mut output).unwrap();
        for (k, b) in reference.iter().enumerate() {
            assert!((output[k * 2] - b).abs() < 1e-9);
        }

        let plan = make_active(&planner, &rodft00(m));
        let mut data = input.to_vec();
        plan.execute_in_place(&mut data).unwrap();
        for (a, b) in data.iter().zip(reference.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
        assert_eq!(
            make_active(&planner, &strided).execute_in_place(&mut data),
            Err(RodftError::InvalidStride(3, 2))
        );
    }

    #[test]
    fn test_execute_with_scratch() {
        let planner = planner();
        let plan = make_active(&planner, &rodft00(20));
        assert_eq!(plan.scratch_length(), 10);
        let input = (0..9).map(|x| x as f64).collect::<Vec<f64>>();
        let mut expected = vec![0f64; 9];
        plan.execute(&input, &mut expected).unwrap();

        let mut output = vec![0f64; 9];
        let mut scratch = vec![f64::NAN; 12];
        plan.execute_with_scratch(&input, &mut output, &mut scratch)
            .unwrap();
        assert_eq!(output, expected);
        assert_eq!(
            plan.execute_with_scratch(&input, &mut output, &mut [0f64; 4]),
            Err(RodftError::ScratchBufferIsTooSmall(4, 10))
        );
    }

    #[test]
    fn test_degenerate_nominal_size_two() {
        let (planner, seen) = recording_planner();
        let mut plan = planner.mkplan(&rodft00(2)).unwrap().unwrap();
        plan.activate().unwrap();
        assert_eq!(plan.input_length(), 0);
        assert_eq!(plan.output_length(), 1);
        for value in [0.0, 1.0, -7.5, 1e300] {
            let mut output = [f64::NAN];
            plan.execute(&[value], &mut output).unwrap();
            assert_eq!(output[0], 0.0);
        }
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 4);
        assert!(seen.iter().all(|buf| buf == &vec![0.0]));
    }

    #[test]
    fn test_preprocessing_trace() {
        // Fixture table with W[1] = sin(π/6).
        let mut buf = [f64::NAN; 3];
        rodft00_preprocess(&[1.0, 1.0], 1, &[0.0, 0.5], &mut buf);
        assert_eq!(buf, [0.0, 1.0, 1.0]);

        // Through the plan the bound table holds W[1] = sin(π/3).
        let (planner, seen) = recording_planner();
        let mut plan = planner.mkplan(&rodft00(6)).unwrap().unwrap();
        plan.activate().unwrap();
        let mut output = [0f64; 2];
        plan.execute(&[1.0, 1.0], &mut output).unwrap();
        let w1 = (std::f64::consts::PI / 3.).sin();
        let recorded = seen.lock().unwrap()[0].clone();
        assert_eq!(recorded.len(), 3);
        assert_eq!(recorded[0], 0.0);
        assert!((recorded[1] - 2. * w1).abs() < 1e-15);
        assert!((recorded[2] - 2. * w1).abs() < 1e-15);
    }

    #[test]
    fn test_middle_sample_is_doubled() {
        let mut buf = [f64::NAN; 4];
        rodft00_preprocess(&[3.0, 5.0, 7.0], 1, &[0.0, 0.25], &mut buf);
        // i = 1 pairs x0 with x2, the midpoint i = 2 takes 2·x1.
        assert_eq!(buf, [0.0, 0.25 * 10. - 2., 10.0, 0.25 * 10. + 2.]);
    }

    #[test]
    fn test_lifecycle_idempotence() {
        let planner = planner();
        let key = twiddle_key(6);
        let mut plan = Rodft00R2hcSolver
            .make_plan(&rodft00(12), &planner)
            .unwrap()
            .unwrap();
        assert!(!plan.is_active());
        assert_eq!(planner.twiddles().refcount(key), 0);

        plan.activate().unwrap();
        let first = planner.twiddles().len();
        plan.activate().unwrap();
        assert!(plan.is_active());
        assert_eq!(planner.twiddles().refcount(key), 1);
        assert_eq!(planner.twiddles().len(), first);

        plan.deactivate();
        plan.deactivate();
        assert!(!plan.is_active());
        assert_eq!(planner.twiddles().refcount(key), 0);

        let mut output = [0f64; 5];
        assert_eq!(
            plan.execute(&[0.; 5], &mut output),
            Err(RodftError::PlanIsDormant)
        );
        assert_eq!(
            plan.execute_in_place(&mut output),
            Err(RodftError::PlanIsDormant)
        );
        plan.destroy();
    }

    #[test]
    fn test_dormant_plan_destroy() {
        let planner = planner();
        let plan = Rodft00R2hcSolver
            .make_plan(&rodft00(8), &planner)
            .unwrap()
            .unwrap();
        plan.destroy();
        assert!(planner.twiddles().is_empty());
    }

    #[test]
    fn test_plans_share_twiddles_and_release_on_drop() {
        let planner = planner();
        let key = twiddle_key(9);
        let a = make_active(&planner, &rodft00(18));
        let b = make_active(&planner, &RdftProblem::new_1d(18, 2, 3, RdftKind::Rodft00));
        assert_eq!(planner.twiddles().refcount(key), 2);
        a.destroy();
        assert_eq!(planner.twiddles().refcount(key), 1);
        drop(b);
        assert_eq!(planner.twiddles().refcount(key), 0);
    }

    #[test]
    fn test_private_twiddles() {
        let planner = Planner::<f64>::with_default_solvers(PlannerConfig {
            share_twiddles: false,
            ..PlannerConfig::default()
        });
        let plan = make_active(&planner, &rodft00(18));
        assert!(planner.twiddles().is_empty());
        assert!(plan.is_active());
    }

    #[test]
    fn test_cost_and_description_come_from_sub_plan() {
        let planner = planner();
        let plan = Rodft00R2hcSolver
            .make_plan(&rodft00(16), &planner)
            .unwrap()
            .unwrap();
        let cld = planner
            .mkplan(&RdftProblem::new_1d(8, 1, 1, RdftKind::R2hc))
            .unwrap()
            .unwrap();
        assert_eq!(plan.ops(), cld.ops());
        assert_eq!(plan.describe(), format!("(rodft00e-r2hc-16{})", cld.describe()));
        assert_eq!(plan.describe(), "(rodft00e-r2hc-16(r2hc-even-8(radix2-4)))");
    }

    #[test]
    fn test_no_sub_plan_means_no_plan() {
        let mut planner = Planner::<f64>::new(PlannerConfig::default());
        planner.register(Box::new(Rodft00R2hcSolver));
        assert!(planner.mkplan(&rodft00(16)).unwrap().is_none());
    }

    #[test]
    fn test_length_validation() {
        let planner = planner();
        let plan = make_active(&planner, &rodft00(12));
        let mut output = [0f64; 5];
        assert_eq!(
            plan.execute(&[0.; 4], &mut output),
            Err(RodftError::InvalidInputLength(5, 4))
        );
        assert_eq!(
            plan.execute(&[0.; 5], &mut output[..3]),
            Err(RodftError::InvalidOutputLength(5, 3))
        );
    }

    #[test]
    fn test_unrepresentable_stride_is_a_length_error() {
        let planner = planner();
        let problem = RdftProblem::new_1d(8, usize::MAX, 1, RdftKind::Rodft00);
        let plan = make_active(&planner, &problem);
        assert_eq!(plan.input_length(), usize::MAX);
        let mut output = [0f64; 3];
        assert_eq!(
            plan.execute(&[1.; 3], &mut output),
            Err(RodftError::InvalidInputLength(usize::MAX, 3))
        );

        let problem = RdftProblem::new_1d(8, 1, usize::MAX / 2, RdftKind::Rodft00);
        let plan = make_active(&planner, &problem);
        assert_eq!(
            plan.execute(&[1.; 3], &mut output),
            Err(RodftError::InvalidOutputLength(usize::MAX, 3))
        );
    }

    #[test]
    fn test_f32_against_reference() {
        let planner = Planner::<f32>::with_default_solvers(PlannerConfig::default());
        for m in (4..=64usize).step_by(2) {
            let samples = m / 2 - 1;
            let input = (0..samples)
                .map(|_| rand::rng().random_range(-1.0..1.0))
                .collect::<Vec<f32>>();
            let mut plan = planner
                .mkplan(&RdftProblem::new_1d(m, 1, 1, RdftKind::Rodft00))
                .unwrap()
                .unwrap();
            plan.activate().unwrap();
            let mut output = vec![0f32; samples];
            plan.execute(&input, &mut output).unwrap();
            let reference =
                dst1_reference(&input.iter().map(|&x| x as f64).collect::<Vec<f64>>());
            for (a, b) in output.iter().zip(reference.iter()) {
                assert!((*a as f64 - b).abs() < 1e-3, "{a} != {b} for size {m}");
            }
        }
    }
}
