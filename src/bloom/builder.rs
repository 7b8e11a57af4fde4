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

use super::BloomFilter;
use super::optimal_k;
use super::optimal_m;
use crate::error::Error;
use crate::hash::Hasher;
use crate::hash::MurmurHasher;

/// Builder for creating [`BloomFilter`] instances.
///
/// Provides two construction modes:
/// - [`with_accuracy()`](Self::with_accuracy): Specify expected items and false positive rate
///   (recommended)
/// - [`with_size()`](Self::with_size): Specify exact bit count and hash count (manual)
///
/// The hash strategy defaults to [`MurmurHasher`] and can be replaced with
/// [`hasher()`](Self::hasher).
#[derive(Debug, Clone)]
pub struct BloomFilterBuilder<H = MurmurHasher> {
    num_bits: u64,
    num_hashes: u64,
    hasher: H,
}

impl BloomFilterBuilder {
    /// Creates a builder with optimal parameters for a target accuracy.
    ///
    /// # Arguments
    ///
    /// - `max_items`: Expected number of distinct items
    /// - `fpp`: Target false positive probability (e.g., 0.01 for 1%)
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::InvalidProbability`](crate::error::ErrorKind::InvalidProbability) unless
    ///   `0 < fpp < 1`.
    /// - [`ErrorKind::InvalidParameters`](crate::error::ErrorKind::InvalidParameters) if
    ///   `max_items` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbloom::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_accuracy(10_000, 0.01).unwrap().build();
    /// assert_eq!(filter.num_bits(), 95_851);
    /// assert_eq!(filter.num_hashes(), 7);
    /// ```
    pub fn with_accuracy(max_items: u64, fpp: f64) -> Result<Self, Error> {
        if !(fpp > 0.0 && fpp < 1.0) {
            return Err(Error::invalid_probability(fpp));
        }
        if max_items == 0 {
            return Err(Error::invalid_parameters(
                "expected item count must be greater than 0",
                0,
                0,
            ));
        }

        let num_bits = optimal_m(max_items, fpp);
        let num_hashes = optimal_k(num_bits, max_items);
        Ok(Self::with_size(num_bits, num_hashes))
    }

    /// Creates a builder with manual size specification.
    ///
    /// No validation is performed. `num_bits == 0` yields a filter that stores nothing
    /// and never reports membership. `num_hashes == 0` yields a filter that checks no
    /// positions and so reports every item as present.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbloom::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_size(1024, 3).build();
    /// assert_eq!(filter.memory_usage(), 128);
    /// ```
    pub fn with_size(num_bits: u64, num_hashes: u64) -> Self {
        BloomFilterBuilder {
            num_bits,
            num_hashes,
            hasher: MurmurHasher::new(),
        }
    }
}

impl<H: Hasher> BloomFilterBuilder<H> {
    /// Replaces the hash strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitbloom::bloom::BloomFilterBuilder;
    /// # use bitbloom::hash::MurmurHasher;
    /// let filter = BloomFilterBuilder::with_size(1024, 3)
    ///     .hasher(MurmurHasher::with_seed(42))
    ///     .build();
    /// assert_eq!(filter.hasher().seed(), 42);
    /// ```
    pub fn hasher<H2: Hasher>(self, hasher: H2) -> BloomFilterBuilder<H2> {
        BloomFilterBuilder {
            num_bits: self.num_bits,
            num_hashes: self.num_hashes,
            hasher,
        }
    }

    /// Builds the Bloom filter.
    pub fn build(self) -> BloomFilter<H> {
        BloomFilter::with_hasher(self.num_bits, self.num_hashes, self.hasher)
    }
}
