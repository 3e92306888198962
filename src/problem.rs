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
/// Transform family of a real-data problem.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum RdftKind {
    /// Real input to packed half-complex output.
    R2hc,
    /// Packed half-complex input to real output.
    Hc2r,
    /// Discrete Hartley transform.
    Dht,
    /// Type-I discrete cosine transform.
    Redft00,
    /// Type-I discrete sine transform.
    Rodft00,
}

/// One dimension of a problem: extent and input/output strides, in samples.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct IoDim {
    pub n: usize,
    pub is: usize,
    pub os: usize,
}

impl IoDim {
    pub fn new(n: usize, is: usize, os: usize) -> Self {
        Self { n, is, os }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Tensor {
    dims: Vec<IoDim>,
}

impl Tensor {
    /// Rank 0 tensor, a single transform.
    pub fn empty() -> Self {
        Self { dims: Vec::new() }
    }

    pub fn new_1d(n: usize, is: usize, os: usize) -> Self {
        Self {
            dims: vec![IoDim::new(n, is, os)],
        }
    }

    pub fn from_dims(dims: Vec<IoDim>) -> Self {
        Self { dims }
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn dims(&self) -> &[IoDim] {
        &self.dims
    }
}

/// Immutable description of a real transform: sizes, batching and kind.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct RdftProblem {
    pub sz: Tensor,
    pub vecsz: Tensor,
    pub kind: RdftKind,
}

impl RdftProblem {
    pub fn new(sz: Tensor, vecsz: Tensor, kind: RdftKind) -> Self {
        Self { sz, vecsz, kind }
    }

    /// Unbatched one dimensional problem.
    pub fn new_1d(n: usize, is: usize, os: usize, kind: RdftKind) -> Self {
        Self::new(Tensor::new_1d(n, is, os), Tensor::empty(), kind)
    }

    /// The single dimension of a rank 1 problem.
    pub fn dim(&self) -> Option<IoDim> {
        match self.sz.dims() {
            [dim] => Some(*dim),
            _ => None,
        }
    }

    /// Rank 1, vector rank 0 and of the given kind.
    pub(crate) fn is_single_1d(&self, kind: RdftKind) -> bool {
        self.kind == kind && self.sz.rank() == 1 && self.vecsz.rank() == 0
    }
}
