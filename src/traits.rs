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
use num_traits::Float;
use std::fmt::Debug;

/// Trigonometry with the argument expressed in half-turns, `f(x * π)`.
pub trait FftTrigonometry {
    fn sincos_pi(self) -> (Self, Self)
    where
        Self: Sized;
    fn sin_pi(self) -> Self;
}

impl FftTrigonometry for f32 {
    #[inline]
    fn sincos_pi(self) -> (Self, Self) {
        // Evaluated in double precision so f32 tables are correctly rounded.
        let (s, c) = (self as f64 * std::f64::consts::PI).sin_cos();
        (s as f32, c as f32)
    }

    #[inline]
    fn sin_pi(self) -> Self {
        (self as f64 * std::f64::consts::PI).sin() as f32
    }
}

impl FftTrigonometry for f64 {
    #[inline]
    fn sincos_pi(self) -> (Self, Self) {
        (self * std::f64::consts::PI).sin_cos()
    }

    #[inline]
    fn sin_pi(self) -> Self {
        (self * std::f64::consts::PI).sin()
    }
}

/// Sample type every plan in this crate is generic over.
pub trait FftSample:
    Copy
    + Default
    + Debug
    + Float
    + FftTrigonometry
    + Send
    + Sync
    + 'static
{
}

impl FftSample for f32 {}

impl FftSample for f64 {}
