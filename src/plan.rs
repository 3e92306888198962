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
use crate::RodftError;
use std::ops::Add;

/// Approximate operation count of a plan, used to rank candidate plans.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct OpCount {
    pub add: f64,
    pub mul: f64,
    pub fma: f64,
    pub other: f64,
}

impl OpCount {
    pub fn new(add: f64, mul: f64, fma: f64, other: f64) -> Self {
        Self {
            add,
            mul,
            fma,
            other,
        }
    }

    pub fn total(&self) -> f64 {
        self.add + self.mul + 2. * self.fma + self.other
    }
}

impl Add for OpCount {
    type Output = OpCount;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            add: self.add + rhs.add,
            mul: self.mul + rhs.mul,
            fma: self.fma + rhs.fma,
            other: self.other + rhs.other,
        }
    }
}

/// Executable real transform produced by a [crate::Solver].
///
/// Plans are created dormant. `activate` must be called before `execute`;
/// it acquires whatever tables the plan needs and recursively activates
/// child plans. Both `activate` and `deactivate` are idempotent.
pub trait RdftPlan<T>: Send + Sync {
    fn activate(&mut self) -> Result<(), RodftError>;

    fn deactivate(&mut self);

    fn is_active(&self) -> bool;

    /// Runs the transform from `input` into `output` using the strides the
    /// plan was built for.
    fn execute(&self, input: &[T], output: &mut [T]) -> Result<(), RodftError>;

    fn execute_in_place(&self, data: &mut [T]) -> Result<(), RodftError>;

    /// Same as `execute` with caller provided working memory of at least
    /// [RdftPlan::scratch_length] samples.
    fn execute_with_scratch(
        &self,
        input: &[T],
        output: &mut [T],
        _scratch: &mut [T],
    ) -> Result<(), RodftError> {
        self.execute(input, output)
    }

    fn scratch_length(&self) -> usize {
        0
    }

    /// Required input slice length.
    fn input_length(&self) -> usize;

    /// Required output slice length.
    fn output_length(&self) -> usize;

    /// Structural label, e.g. `(rodft00e-r2hc-16(r2hc-direct-8))`.
    fn describe(&self) -> String;

    fn ops(&self) -> OpCount;

    /// Deactivates and frees the plan together with all of its children.
    fn destroy(mut self: Box<Self>) {
        self.deactivate();
    }
}
