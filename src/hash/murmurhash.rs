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

use super::Hasher;
use super::double_hashes;

/// The default hash strategy, built on the 128-bit MurmurHash3 x64 variant.
///
/// The two 64-bit halves of the digest seed the double hashing scheme. The default
/// seed is 0, which keeps bit positions compatible with other MurmurHash3-based
/// implementations of the same wire format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MurmurHasher {
    seed: u32,
}

impl MurmurHasher {
    /// Creates a hasher with seed 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a hasher with a custom seed.
    ///
    /// Filters built with different seeds set different bits for the same item. The seed
    /// is not part of the serialized form, so a filter must be restored with a hasher
    /// carrying the same seed.
    pub fn with_seed(seed: u32) -> Self {
        MurmurHasher { seed }
    }

    /// Returns the hash seed.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Hasher for MurmurHasher {
    fn hashes(&self, item: &[u8], k: u64, m: u64) -> Vec<u64> {
        let (h1, h2) = mur3::murmurhash3_x64_128(item, self.seed);
        double_hashes(h1, h2, k, m)
    }
}
