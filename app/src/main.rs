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
use rand::Rng;
use rodft::{Planner, PlannerConfig, RdftKind, RdftProblem};
use tracing_subscriber::EnvFilter;

fn naive_dst1(input: &[f64]) -> Vec<f64> {
    let scale = std::f64::consts::PI / (input.len() + 1) as f64;
    (0..input.len())
        .map(|k| {
            input
                .iter()
                .enumerate()
                .map(|(j, &x)| x * (scale * ((j + 1) * (k + 1)) as f64).sin())
                .sum()
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let planner = Planner::<f64>::with_default_solvers(PlannerConfig::default());
    for len in [1usize, 2, 3, 7, 15, 20, 33, 63, 100] {
        let logical = 2 * (len + 1);
        let problem = RdftProblem::new_1d(logical, 1, 1, RdftKind::Rodft00);
        let Some(mut plan) = planner.mkplan(&problem).unwrap() else {
            println!("{len}: no plan");
            continue;
        };
        plan.activate().unwrap();

        let input = (0..len)
            .map(|_| rand::rng().random_range(-1.0..1.0))
            .collect::<Vec<f64>>();
        let mut output = vec![0f64; len];
        plan.execute(&input, &mut output).unwrap();

        let max_error = naive_dst1(&input)
            .iter()
            .zip(output.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0f64, f64::max);
        println!(
            "{len:>4} {:<48} cost {:>8.1} max error {max_error:e}",
            plan.describe(),
            plan.ops().total()
        );
        plan.destroy();
    }
    println!("cached twiddle tables after teardown: {}", planner.twiddles().len());
}
