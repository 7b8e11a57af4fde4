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

//! Fixed-capacity bit array packed into `u64` words.
//!
//! Positions at or beyond the declared size are tolerated: `set` ignores them and `get`
//! reports them as unset. Thread safety is the owner's concern; nothing here locks.

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BitSet {
    /// Length = ceil(size / 64)
    data: Vec<u64>,
    size: u64,
}

impl BitSet {
    /// Creates a zeroed bit set holding `size` bits.
    pub fn new(size: u64) -> Self {
        BitSet {
            data: vec![0u64; num_words(size) as usize],
            size,
        }
    }

    pub fn set(&mut self, pos: u64) {
        if pos >= self.size {
            return;
        }
        let word = (pos / 64) as usize;
        self.data[word] |= 1u64 << (pos % 64);
    }

    pub fn get(&self, pos: u64) -> bool {
        if pos >= self.size {
            return false;
        }
        let word = (pos / 64) as usize;
        (self.data[word] & (1u64 << (pos % 64))) != 0
    }

    /// Number of set bits.
    pub fn count(&self) -> u64 {
        self.data.iter().map(|word| word.count_ones() as u64).sum()
    }

    /// Number of addressable bits, not words.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn num_words(&self) -> usize {
        self.data.len()
    }

    /// Backing words in index order.
    pub fn data(&self) -> &[u64] {
        &self.data
    }

    /// Replaces the backing words wholesale.
    ///
    /// Fails without touching the current contents if `data` does not hold exactly
    /// `ceil(size / 64)` words.
    pub fn set_data(&mut self, data: Vec<u64>) -> Result<(), Error> {
        let expected = num_words(self.size);
        if data.len() as u64 != expected {
            return Err(Error::length_mismatch(
                "invalid bitset data length",
                expected,
                data.len() as u64,
            ));
        }
        self.data = data;
        Ok(())
    }

    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.data.fill(0);
    }
}

/// Words needed to hold `bits` bits.
pub(crate) fn num_words(bits: u64) -> u64 {
    bits.div_ceil(64)
}
