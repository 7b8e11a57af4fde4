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

use std::fmt;

use parking_lot::RwLock;

use super::serialization::HEADER_SIZE;
use super::serialization::WORD_SIZE;
use super::serialization::serialized_size;
use crate::bitset::BitSet;
use crate::bitset::num_words;
use crate::codec::SketchBytes;
use crate::codec::SketchSlice;
use crate::error::Error;
use crate::hash::Hasher;
use crate::hash::MurmurHasher;

/// A thread-safe Bloom filter for probabilistic set membership testing.
///
/// Provides membership queries with:
/// - No false negatives (inserted items always return `true`)
/// - Tunable false positive rate
/// - Constant space usage
///
/// All methods take `&self`. Inserts hold an exclusive lock for the duration of the
/// bit updates; queries, statistics and serialization share a read lock. Wrap the
/// filter in an [`Arc`](std::sync::Arc) to share it between threads.
///
/// # Examples
///
/// ```
/// use bitbloom::bloom::BloomFilter;
///
/// let filter = BloomFilter::new(1000, 0.01).unwrap();
/// filter.insert("golang");
///
/// assert!(filter.contains("golang"));
/// assert!(!filter.contains("python")); // false - never inserted (probably)
/// ```
pub struct BloomFilter<H = MurmurHasher> {
    /// Number of bits (m)
    num_bits: u64,
    /// Number of hash functions (k)
    num_hashes: u64,
    hasher: H,
    state: RwLock<FilterState>,
}

/// Everything `insert` mutates, guarded as one unit.
#[derive(Debug, Clone)]
struct FilterState {
    bitset: BitSet,
    /// Insertions observed, duplicates included
    count: u64,
}

impl BloomFilter {
    /// Creates a filter sized for `max_items` items at false positive probability `fpp`.
    ///
    /// The bit count and hash count come from [`optimal_m`](super::optimal_m) and
    /// [`optimal_k`](super::optimal_k).
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::InvalidProbability`](crate::error::ErrorKind::InvalidProbability) unless
    ///   `0 < fpp < 1`.
    /// - [`ErrorKind::InvalidParameters`](crate::error::ErrorKind::InvalidParameters) if
    ///   `max_items` is 0.
    pub fn new(max_items: u64, fpp: f64) -> Result<Self, Error> {
        super::BloomFilterBuilder::with_accuracy(max_items, fpp).map(|builder| builder.build())
    }

    /// Creates a filter with an explicit bit count (`m`) and hash count (`k`).
    ///
    /// Prefer [`new()`](Self::new) unless the parameters were computed elsewhere.
    pub fn with_params(num_bits: u64, num_hashes: u64) -> Self {
        Self::with_hasher(num_bits, num_hashes, MurmurHasher::new())
    }

    /// Restores a filter from the bytes produced by [`serialize()`](Self::serialize).
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::HeaderTooShort`](crate::error::ErrorKind::HeaderTooShort) if the input
    ///   is shorter than 24 bytes.
    /// - [`ErrorKind::InvalidParameters`](crate::error::ErrorKind::InvalidParameters) if the
    ///   header declares `m == 0` or `k == 0`.
    /// - [`ErrorKind::LengthMismatch`](crate::error::ErrorKind::LengthMismatch) unless the
    ///   body holds exactly `ceil(m / 64)` words.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbloom::bloom::BloomFilter;
    /// let filter = BloomFilter::with_params(1024, 3);
    /// filter.insert("test");
    ///
    /// let bytes = filter.serialize();
    /// assert_eq!(bytes.len(), 152);
    ///
    /// let restored = BloomFilter::deserialize(&bytes).unwrap();
    /// assert!(restored.contains("test"));
    /// assert_eq!(restored.count(), 1);
    /// ```
    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        Self::deserialize_with_hasher(bytes, MurmurHasher::new())
    }
}

impl<H: Hasher> BloomFilter<H> {
    /// Creates a filter with explicit parameters and hash strategy.
    ///
    /// No validation is performed: `num_bits == 0` gives a filter that stores nothing and
    /// never reports membership, and `num_hashes == 0` gives one that reports every item
    /// as present.
    pub fn with_hasher(num_bits: u64, num_hashes: u64, hasher: H) -> Self {
        BloomFilter {
            num_bits,
            num_hashes,
            hasher,
            state: RwLock::new(FilterState {
                bitset: BitSet::new(num_bits),
                count: 0,
            }),
        }
    }

    /// Restores a filter using a specific hash strategy.
    ///
    /// The hasher must match the one used by the filter that was serialized, otherwise
    /// previously inserted items will not be found.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::deserialize`].
    pub fn deserialize_with_hasher(bytes: &[u8], hasher: H) -> Result<Self, Error> {
        if bytes.len() < HEADER_SIZE {
            return Err(Error::header_too_short(HEADER_SIZE, bytes.len()));
        }

        let mut cursor = SketchSlice::new(bytes);
        let num_bits = cursor
            .read_u64_le()
            .map_err(|_| Error::header_too_short(HEADER_SIZE, bytes.len()))?;
        let num_hashes = cursor
            .read_u64_le()
            .map_err(|_| Error::header_too_short(HEADER_SIZE, bytes.len()))?;
        let count = cursor
            .read_u64_le()
            .map_err(|_| Error::header_too_short(HEADER_SIZE, bytes.len()))?;

        if num_bits == 0 || num_hashes == 0 {
            return Err(Error::invalid_parameters(
                "invalid parameters in serialized data",
                num_bits,
                num_hashes,
            ));
        }

        // Validate the body length before allocating the bit array.
        let expected_words = num_words(num_bits);
        let body_len = cursor.remaining();
        if body_len % WORD_SIZE != 0 || (body_len / WORD_SIZE) as u64 != expected_words {
            return Err(Error::length_mismatch(
                "bitset data length mismatch",
                expected_words,
                (body_len / WORD_SIZE) as u64,
            )
            .with_context("body_bytes", body_len));
        }

        let mut words = Vec::with_capacity(expected_words as usize);
        for _ in 0..expected_words {
            let word = cursor.read_u64_le().map_err(|_| {
                Error::length_mismatch("bitset data truncated", expected_words, words.len() as u64)
            })?;
            words.push(word);
        }

        let filter = Self::with_hasher(num_bits, num_hashes, hasher);
        {
            let mut state = filter.state.write();
            state.bitset.set_data(words)?;
            state.count = count;
        }
        Ok(filter)
    }

    // ========================================================================
    // Update Operations
    // ========================================================================

    /// Inserts an item into the filter.
    ///
    /// After insertion, `contains(item)` will always return `true`. Every call increments
    /// [`count()`](Self::count), including repeated insertions of the same item.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbloom::bloom::BloomFilter;
    /// let filter = BloomFilter::new(100, 0.01).unwrap();
    ///
    /// filter.insert("apple");
    /// filter.insert(b"raw bytes");
    /// filter.insert(vec![1u8, 2, 3]);
    ///
    /// assert!(filter.contains("apple"));
    /// assert_eq!(filter.count(), 3);
    /// ```
    pub fn insert<T: AsRef<[u8]>>(&self, item: T) {
        let positions = self.positions(item.as_ref());

        let mut state = self.state.write();
        for pos in positions {
            state.bitset.set(pos);
        }
        state.count = state.count.saturating_add(1);
    }

    /// Tests and inserts an item under a single exclusive lock.
    ///
    /// Returns whether the item was possibly present before this insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbloom::bloom::BloomFilter;
    /// let filter = BloomFilter::new(100, 0.01).unwrap();
    ///
    /// assert!(!filter.contains_and_insert("apple"));
    /// assert!(filter.contains_and_insert("apple"));
    /// ```
    pub fn contains_and_insert<T: AsRef<[u8]>>(&self, item: T) -> bool {
        let positions = self.positions(item.as_ref());

        let mut state = self.state.write();
        let was_present = self.num_bits > 0 && positions.iter().all(|&pos| state.bitset.get(pos));
        for pos in positions {
            state.bitset.set(pos);
        }
        state.count = state.count.saturating_add(1);
        was_present
    }

    // ========================================================================
    // Query Operations
    // ========================================================================

    /// Tests whether an item is possibly in the set.
    ///
    /// Returns:
    /// - `true`: Item was **possibly** inserted (or false positive)
    /// - `false`: Item was **definitely not** inserted
    pub fn contains<T: AsRef<[u8]>>(&self, item: T) -> bool {
        // nothing can be stored in a zero-bit filter
        if self.num_bits == 0 {
            return false;
        }

        let positions = self.positions(item.as_ref());
        let state = self.state.read();
        positions.iter().all(|&pos| state.bitset.get(pos))
    }

    // ========================================================================
    // Statistics and Properties
    // ========================================================================

    /// Returns the number of bits (m).
    pub fn num_bits(&self) -> u64 {
        self.num_bits
    }

    /// Returns the number of hash functions (k).
    pub fn num_hashes(&self) -> u64 {
        self.num_hashes
    }

    /// Returns the hash strategy.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Returns the number of insertions observed, duplicates included.
    pub fn count(&self) -> u64 {
        self.state.read().count
    }

    /// Returns whether nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Expected fraction of set bits given the insertion count: `1 - e^(-k * count / m)`.
    ///
    /// This is a model-based estimate; see [`actual_fill_ratio()`](Self::actual_fill_ratio)
    /// for the measured value.
    pub fn estimated_fill_ratio(&self) -> f64 {
        if self.num_bits == 0 {
            return 0.0;
        }

        let state = self.state.read();
        let exponent = self.num_hashes as f64 * state.count as f64 / self.num_bits as f64;
        1.0 - (-exponent).exp()
    }

    /// Measured fraction of set bits.
    pub fn actual_fill_ratio(&self) -> f64 {
        let state = self.state.read();
        fill_ratio(&state.bitset)
    }

    /// Current false positive probability, approximated as `fill_ratio^k`.
    pub fn false_positive_rate(&self) -> f64 {
        let state = self.state.read();
        fill_ratio(&state.bitset).powf(self.num_hashes as f64)
    }

    /// Bytes used by the bit array: `ceil(m / 64) * 8`.
    pub fn memory_usage(&self) -> u64 {
        let state = self.state.read();
        state.bitset.num_words() as u64 * WORD_SIZE as u64
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Serializes the filter to a byte vector.
    ///
    /// The output is always exactly `24 + 8 * ceil(m / 64)` bytes; see the
    /// [module documentation](super) for the layout.
    pub fn serialize(&self) -> Vec<u8> {
        let state = self.state.read();

        let mut bytes = SketchBytes::with_capacity(serialized_size(self.num_bits) as usize);
        bytes.write_u64_le(self.num_bits);
        bytes.write_u64_le(self.num_hashes);
        bytes.write_u64_le(state.count);
        for &word in state.bitset.data() {
            bytes.write_u64_le(word);
        }
        bytes.into_bytes()
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn positions(&self, item: &[u8]) -> Vec<u64> {
        self.hasher.hashes(item, self.num_hashes, self.num_bits)
    }
}

fn fill_ratio(bitset: &BitSet) -> f64 {
    if bitset.size() == 0 {
        return 0.0;
    }
    bitset.count() as f64 / bitset.size() as f64
}

impl<H: Clone> Clone for BloomFilter<H> {
    /// Snapshots the filter under a read lock.
    fn clone(&self) -> Self {
        BloomFilter {
            num_bits: self.num_bits,
            num_hashes: self.num_hashes,
            hasher: self.hasher.clone(),
            state: RwLock::new(self.state.read().clone()),
        }
    }
}

impl<H: fmt::Debug> fmt::Debug for BloomFilter<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("BloomFilter")
            .field("num_bits", &self.num_bits)
            .field("num_hashes", &self.num_hashes)
            .field("hasher", &self.hasher)
            .field("count", &state.count)
            .field("bits_set", &state.bitset.count())
            .finish()
    }
}
