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
use num_traits::{AsPrimitive, Float};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Which trigonometric function a table samples.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TwiddleInstr {
    Sin,
}

/// Identifies a table: `values[i] = f(2π·i/period)` for `i in 0..count`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TwiddleKey {
    pub instr: TwiddleInstr,
    pub period: usize,
    pub count: usize,
}

impl TwiddleKey {
    pub fn new(instr: TwiddleInstr, period: usize, count: usize) -> Self {
        Self {
            instr,
            period,
            count,
        }
    }
}

#[derive(Debug)]
pub struct TwiddleTable<T> {
    key: TwiddleKey,
    values: Vec<T>,
}

impl<T: Copy + Float + FftTrigonometry + 'static> TwiddleTable<T>
where
    f64: AsPrimitive<T>,
{
    fn compute(key: TwiddleKey) -> Result<Self, RodftError> {
        let mut values = try_vec![T::zero(); key.count];
        for (i, dst) in values.iter_mut().enumerate() {
            let angle: T = (2. * i as f64 / key.period as f64).as_();
            *dst = match key.instr {
                TwiddleInstr::Sin => angle.sin_pi(),
            };
        }
        Ok(Self { key, values })
    }
}

impl<T> TwiddleTable<T> {
    pub fn key(&self) -> TwiddleKey {
        self.key
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }
}

struct CachedTable<T> {
    table: Arc<TwiddleTable<T>>,
    references: usize,
}

/// Reference counted twiddle tables keyed by [TwiddleKey].
///
/// Every acquire and release goes through one lock, so plans sharing a table
/// may be activated and deactivated from different threads. Reading a table
/// that has been handed out needs no lock at all.
pub struct TwiddleCache<T> {
    tables: Mutex<HashMap<TwiddleKey, CachedTable<T>>>,
}

impl<T> Default for TwiddleCache<T> {
    fn default() -> Self {
        Self {
            tables: Mutex::new(HashMap::new()),
        }
    }
}

impl<T> TwiddleCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<TwiddleKey, CachedTable<T>>> {
        // A panic while holding the lock cannot leave an entry half written.
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Drops one reference to `key`; the table is freed with its last reference.
    /// Releasing an unknown key does nothing.
    pub fn release(&self, key: TwiddleKey) {
        let mut tables = self.lock();
        if let Some(entry) = tables.get_mut(&key) {
            entry.references -= 1;
            if entry.references == 0 {
                tables.remove(&key);
                #[cfg(feature = "tracing")]
                tracing::trace!(?key, "twiddle table destroyed");
            }
        }
    }

    pub fn refcount(&self, key: TwiddleKey) -> usize {
        self.lock().get(&key).map_or(0, |entry| entry.references)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<T: Copy + Float + FftTrigonometry + 'static> TwiddleCache<T>
where
    f64: AsPrimitive<T>,
{
    /// Returns the table for `key`, computing it on first request.
    pub fn acquire(&self, key: TwiddleKey) -> Result<Arc<TwiddleTable<T>>, RodftError> {
        let mut tables = self.lock();
        if let Some(entry) = tables.get_mut(&key) {
            entry.references += 1;
            return Ok(entry.table.clone());
        }
        let table = Arc::new(TwiddleTable::compute(key)?);
        #[cfg(feature = "tracing")]
        tracing::trace!(?key, "twiddle table created");
        tables.insert(
            key,
            CachedTable {
                table: table.clone(),
                references: 1,
            },
        );
        Ok(table)
    }
}
