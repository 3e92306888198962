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
use crate::util::{compute_twiddle, digit_reverse_indices, permute_inplace};
use crate::{FftExecutor, FftSample, RodftError};
use num_complex::Complex;
use num_traits::AsPrimitive;

/// Iterative decimation-in-time radix-2 complex FFT.
pub(crate) struct Radix2<T> {
    twiddles: Vec<Complex<T>>,
    permutations: Vec<usize>,
    execution_length: usize,
}

fn radix2_twiddles<T: FftSample>(size: usize) -> Result<Vec<Complex<T>>, RodftError>
where
    f64: AsPrimitive<T>,
{
    let mut twiddles = Vec::new();
    twiddles
        .try_reserve_exact(size.saturating_sub(1))
        .map_err(|_| RodftError::OutOfMemory(size.saturating_sub(1)))?;

    // Stage of length `len` needs w_len^j for j < len / 2.
    let mut len = 2;
    while len <= size {
        for j in 0..len / 2 {
            twiddles.push(compute_twiddle(j, len));
        }
        len *= 2;
    }

    Ok(twiddles)
}

impl<T: FftSample> Radix2<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(size: usize) -> Result<Radix2<T>, RodftError> {
        assert!(size.is_power_of_two(), "Input length must be a power of 2");

        Ok(Radix2 {
            twiddles: radix2_twiddles(size)?,
            permutations: digit_reverse_indices(size, 2)?,
            execution_length: size,
        })
    }
}

impl<T: FftSample> FftExecutor<T> for Radix2<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), RodftError> {
        if self.execution_length != in_place.len() {
            return Err(RodftError::InvalidInPlaceLength(
                self.execution_length,
                in_place.len(),
            ));
        }

        permute_inplace(in_place, &self.permutations);

        let mut len = 2;
        let mut m_twiddles = self.twiddles.as_slice();
        while len <= self.execution_length {
            let half = len / 2;
            let (stage_twiddles, rest) = m_twiddles.split_at(half);
            for data in in_place.chunks_exact_mut(len) {
                let (lo, hi) = data.split_at_mut(half);
                for ((u, v), &tw) in lo.iter_mut().zip(hi.iter_mut()).zip(stage_twiddles) {
                    let t = tw * *v;
                    let a = *u;
                    *u = a + t;
                    *v = a - t;
                }
            }
            len *= 2;
            m_twiddles = rest;
        }
        Ok(())
    }

    fn length(&self) -> usize {
        self.execution_length
    }
}
