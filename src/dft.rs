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
use crate::util::compute_twiddle;
use crate::{FftExecutor, FftSample, RodftError};
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};

/// Direct quadratic complex DFT, used for lengths with no faster kernel.
pub(crate) struct Dft<T> {
    execution_length: usize,
    twiddles: Vec<Complex<T>>,
}

impl<T: FftSample> Dft<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new(size: usize) -> Result<Dft<T>, RodftError> {
        if size == 0 {
            return Err(RodftError::ZeroSizedTransform);
        }
        let mut twiddles = try_vec![Complex::<T>::zero(); size];
        for (k, dst) in twiddles.iter_mut().enumerate() {
            *dst = compute_twiddle(k, size);
        }
        Ok(Dft {
            execution_length: size,
            twiddles,
        })
    }
}

impl<T: FftSample> FftExecutor<T> for Dft<T>
where
    f64: AsPrimitive<T>,
{
    fn execute(&self, in_place: &mut [Complex<T>]) -> Result<(), RodftError> {
        if in_place.len() != self.execution_length {
            return Err(RodftError::InvalidInPlaceLength(
                self.execution_length,
                in_place.len(),
            ));
        }

        let mut output = try_vec![Complex::<T>::zero(); self.execution_length];

        for (k, dst) in output.iter_mut().enumerate() {
            let mut sum = Complex::<T>::zero();
            let mut twiddle_idx = 0usize;
            for src in in_place.iter() {
                sum = sum + *src * self.twiddles[twiddle_idx];
                twiddle_idx += k;
                if twiddle_idx >= self.twiddles.len() {
                    twiddle_idx -= self.twiddles.len();
                }
            }
            *dst = sum;
        }

        in_place.copy_from_slice(&output);
        Ok(())
    }

    fn length(&self) -> usize {
        self.execution_length
    }
}
