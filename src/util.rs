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
use crate::err::{RodftError, try_vec};
use crate::traits::FftTrigonometry;
use num_complex::Complex;
use num_traits::{AsPrimitive, Float};

pub(crate) fn compute_twiddle<T: Float + FftTrigonometry + 'static>(
    index: usize,
    fft_len: usize,
) -> Complex<T>
where
    f64: AsPrimitive<T>,
{
    let angle: T = (-2. * index as f64 / fft_len as f64).as_();
    let (v_sin, v_cos) = angle.sincos_pi();

    Complex {
        re: v_cos,
        im: v_sin,
    }
}

/// Digit-reversal permutation in base `radix`
pub(crate) fn digit_reverse_indices(n: usize, radix: usize) -> Result<Vec<usize>, RodftError> {
    assert!(radix >= 2, "radix must be at least 2");

    let mut digits = 0;
    let mut tmp = n;
    while tmp > 1 {
        tmp /= radix;
        digits += 1;
    }

    let mut indices = try_vec![0usize; n];
    for (i, dst) in indices.iter_mut().enumerate() {
        let mut x = i;
        let mut rev = 0;
        for _ in 0..digits {
            rev = rev * radix + (x % radix);
            x /= radix;
        }
        *dst = rev;
    }

    Ok(indices)
}

pub(crate) fn permute_inplace<T: Copy>(table: &mut [T], lut: &[usize]) {
    for (i, &j) in lut.iter().enumerate() {
        if i < j {
            table.swap(i, j);
        }
    }
}

/// Smallest slice length that covers `count` samples placed `stride` apart.
///
/// An extent that does not fit in `usize` saturates to `usize::MAX`, which no
/// slice can satisfy.
#[inline]
pub(crate) fn strided_extent(count: usize, stride: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (count - 1)
        .checked_mul(stride)
        .and_then(|span| span.checked_add(1))
        .unwrap_or(usize::MAX)
}
