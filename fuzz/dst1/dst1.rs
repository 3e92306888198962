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
use rodft::Rodft;

#[derive(arbitrary::Arbitrary, Debug)]
struct Target {
    size: u16,
    re: f64,
}

fuzz_target!(|data: Target| {
    if data.size == 0 || data.size > 4000 {
        return;
    }
    if !data.re.is_finite() || data.re.abs() > 10000. {
        return;
    }
    let len = data.size as usize;
    let executor = Rodft::make_dst1_f64(len).unwrap();
    let mut chunk = vec![data.re; len];
    for (i, chunk) in chunk.iter_mut().enumerate() {
        *chunk = data.re + i as f64 * 0.1;
    }
    let src = chunk.to_vec();
    executor.execute_in_place(&mut chunk).unwrap();
    executor.execute_in_place(&mut chunk).unwrap();
    let scale = 2.0 / (len + 1) as f64;
    let magnitude = src.iter().fold(1f64, |acc, x| acc.max(x.abs()));
    for (a, b) in chunk.iter().zip(src.iter()) {
        assert!((a * scale - b).abs() <= 1e-6 * magnitude);
    }
});
