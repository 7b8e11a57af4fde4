// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Hash strategies that map an item to the bit positions it occupies in a filter.

mod murmurhash;

pub use self::murmurhash::MurmurHasher;

/// Derives `k` bit positions in `[0, m)` from an item.
///
/// Implementations must be deterministic: the same `(item, k, m)` always yields the
/// same sequence, in every process and on every thread. Otherwise a filter could
/// report a false negative for an item it already holds.
pub trait Hasher {
    /// Returns exactly `k` positions, each less than `m`.
    ///
    /// Callers never pass `m == 0` with a non-zero `k`. Implementations may return
    /// an empty vector in that case.
    fn hashes(&self, item: &[u8], k: u64, m: u64) -> Vec<u64>;
}

/// Enhanced double hashing (Kirsch-Mitzenmacher): position `i` is `(h1 + i * h2) mod m`.
pub(crate) fn double_hashes(h1: u64, h2: u64, k: u64, m: u64) -> Vec<u64> {
    if m == 0 {
        return Vec::new();
    }
    (0..k)
        .map(|i| h1.wrapping_add(i.wrapping_mul(h2)) % m)
        .collect()
}
