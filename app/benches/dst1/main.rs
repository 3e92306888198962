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
use criterion::{Criterion, criterion_group, criterion_main};
use rand::Rng;
use rodft::{Planner, PlannerConfig, RdftKind, RdftProblem, Rodft};
use std::hint::black_box;

fn naive_dst1(input: &[f64], output: &mut [f64]) {
    let scale = std::f64::consts::PI / (input.len() + 1) as f64;
    for (k, dst) in output.iter_mut().enumerate() {
        *dst = input
            .iter()
            .enumerate()
            .map(|(j, &x)| x * (scale * ((j + 1) * (k + 1)) as f64).sin())
            .sum();
    }
}

fn check_size(c: &mut Criterion, len: usize) {
    let input = (0..len)
        .map(|_| rand::rng().random_range(-1.0..1.0))
        .collect::<Vec<f64>>();

    c.bench_function(format!("rodft dst1 f64 {len}").as_str(), |b| {
        let plan = Rodft::make_dst1_f64(len).unwrap();
        let mut output = vec![0f64; len];
        b.iter(|| {
            plan.execute(black_box(&input), &mut output).unwrap();
        })
    });

    c.bench_function(format!("rodft dst1 f64 scratch {len}").as_str(), |b| {
        let plan = Rodft::make_dst1_f64(len).unwrap();
        let mut output = vec![0f64; len];
        let mut scratch = vec![0f64; plan.scratch_length()];
        b.iter(|| {
            plan.execute_with_scratch(black_box(&input), &mut output, &mut scratch)
                .unwrap();
        })
    });

    c.bench_function(format!("rodft dst1 f32 {len}").as_str(), |b| {
        let plan = Rodft::make_dst1_f32(len).unwrap();
        let s = input.iter().map(|&x| x as f32).collect::<Vec<_>>();
        let mut output = vec![0f32; len];
        b.iter(|| {
            plan.execute(black_box(&s), &mut output).unwrap();
        })
    });

    if len <= 512 {
        c.bench_function(format!("naive dst1 f64 {len}").as_str(), |b| {
            let mut output = vec![0f64; len];
            b.iter(|| {
                naive_dst1(black_box(&input), &mut output);
            })
        });
    }
}

fn planning(c: &mut Criterion) {
    c.bench_function("rodft plan dst1 1023", |b| {
        let planner = Planner::<f64>::with_default_solvers(PlannerConfig::default());
        let problem = RdftProblem::new_1d(2048, 1, 1, RdftKind::Rodft00);
        b.iter(|| {
            let mut plan = planner.mkplan(black_box(&problem)).unwrap().unwrap();
            plan.activate().unwrap();
            plan.destroy();
        })
    });
}

pub fn criterion_benchmark(c: &mut Criterion) {
    // 2^k - 1 samples reduce to a power of two half-complex transform.
    for len in [15, 63, 255, 1023, 4095] {
        check_size(c, len);
    }
    // Odd reduced sizes take the direct half-complex path.
    for len in [20, 100] {
        check_size(c, len);
    }
    planning(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
