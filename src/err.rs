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
use crate::problem::RdftKind;
use std::error::Error;
use std::fmt::Formatter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RodftError {
    OutOfMemory(usize),
    InvalidInputLength(usize, usize),
    InvalidOutputLength(usize, usize),
    InvalidInPlaceLength(usize, usize),
    InvalidStride(usize, usize),
    ScratchBufferIsTooSmall(usize, usize),
    PlanIsDormant,
    ZeroSizedTransform,
    NoPlan(RdftKind, usize),
}

impl Error for RodftError {}

impl std::fmt::Display for RodftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RodftError::OutOfMemory(length) => {
                f.write_fmt(format_args!("Cannot allocate {length} elements to vector",))
            }
            RodftError::InvalidInputLength(required, actual) => f.write_fmt(format_args!(
                "Input length expected to be at least {required}, but it was {actual}"
            )),
            RodftError::InvalidOutputLength(required, actual) => f.write_fmt(format_args!(
                "Output length expected to be at least {required}, but it was {actual}"
            )),
            RodftError::InvalidInPlaceLength(s0, s1) => f.write_fmt(format_args!(
                "In-place length expected to be {s0}, but it was {s1}"
            )),
            RodftError::InvalidStride(is, os) => f.write_fmt(format_args!(
                "In-place execution requires equal strides, but input stride is {is} and output stride is {os}"
            )),
            RodftError::ScratchBufferIsTooSmall(current, required) => f.write_fmt(format_args!(
                "Scratch buffer size must be at least {required} but it is {current}"
            )),
            RodftError::PlanIsDormant => {
                f.write_str("Plan must be activated before it can be executed")
            }
            RodftError::ZeroSizedTransform => {
                f.write_str("Cannot execute transform on zero-sized buffers")
            }
            RodftError::NoPlan(kind, n) => f.write_fmt(format_args!(
                "No registered solver can plan {kind:?} transform of size {n}"
            )),
        }
    }
}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::RodftError::OutOfMemory($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;
