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

#![no_main]

use libfuzzer_sys::fuzz_target;
use rodft::{Planner, PlannerConfig, RdftKind, RdftProblem, RodftError};

#[derive(arbitrary::Arbitrary, Debug)]
enum Step {
    Activate(u8),
    Deactivate(u8),
    Execute(u8),
    Destroy(u8),
}

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    half_sizes: Vec<u8>,
    steps: Vec<Step>,
}

fuzz_target!(|data: Target| {
    let planner = Planner::<f32>::with_default_solvers(PlannerConfig::default());
    let mut plans = data
        .half_sizes
        .iter()
        .take(8)
        .map(|&n| {
            let problem = RdftProblem::new_1d(2 * (n as usize + 1), 1, 1, RdftKind::Rodft00);
            planner.mkplan(&problem).unwrap().unwrap()
        })
        .collect::<Vec<_>>();
    if plans.is_empty() {
        return;
    }
    for step in data.steps.iter().take(64) {
        match *step {
            Step::Activate(i) => {
                let i = i as usize % plans.len();
                plans[i].activate().unwrap();
            }
            Step::Deactivate(i) => {
                let i = i as usize % plans.len();
                plans[i].deactivate();
            }
            Step::Execute(i) => {
                let i = i as usize % plans.len();
                let plan = &plans[i];
                let input = vec![1f32; plan.input_length()];
                let mut output = vec![0f32; plan.output_length()];
                let result = plan.execute(&input, &mut output);
                if plan.is_active() {
                    result.unwrap();
                } else {
                    assert_eq!(result, Err(RodftError::PlanIsDormant));
                }
            }
            Step::Destroy(i) => {
                let i = i as usize % plans.len();
                plans.swap_remove(i).destroy();
                if plans.is_empty() {
                    break;
                }
            }
        }
    }
    drop(plans);
    assert!(planner.twiddles().is_empty());
});
