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

//! Bloom filter implementation for probabilistic set membership testing.
//!
//! A Bloom filter is a space-efficient probabilistic data structure used to test whether
//! an element is a member of a set. False positive matches are possible, but false negatives
//! are not. In other words, a query returns either "possibly in set" or "definitely not in set".
//!
//! # Properties
//!
//! - **No false negatives**: If an item was inserted, `contains()` will always return `true`
//! - **Possible false positives**: `contains()` may return `true` for items never inserted
//! - **Insertion only**: Items cannot be removed
//! - **Thread-safe**: All operations take `&self` behind a single reader-writer lock
//!
//! # Usage
//!
//! ```rust
//! use bitbloom::bloom::BloomFilter;
//!
//! // Create a filter optimized for 1000 items with 1% false positive rate
//! let filter = BloomFilter::new(1000, 0.01).unwrap();
//!
//! filter.insert("apple");
//! filter.insert("banana");
//!
//! assert!(filter.contains("apple"));
//! assert!(!filter.contains("grape")); // false - never inserted (probably)
//!
//! println!("Capacity: {} bits", filter.num_bits());
//! println!("Fill ratio: {:.4}", filter.actual_fill_ratio());
//! println!("Est. FPP: {:.4}%", filter.false_positive_rate() * 100.0);
//! ```
//!
//! # Creating Filters
//!
//! ## By Accuracy (Recommended)
//!
//! ```rust
//! # use bitbloom::bloom::BloomFilterBuilder;
//! let filter = BloomFilterBuilder::with_accuracy(
//!     10_000, // Expected items
//!     0.01,   // Target false positive probability (1%)
//! )
//! .unwrap()
//! .build();
//! ```
//!
//! ## By Size (Manual)
//!
//! ```rust
//! # use bitbloom::bloom::BloomFilter;
//! let filter = BloomFilter::with_params(
//!     95_851, // Number of bits
//!     7,      // Number of hash functions
//! );
//! ```
//!
//! # Serialization
//!
//! [`BloomFilter::serialize`] writes a fixed little-endian layout:
//!
//! ```text
//! Offset  Size    Field
//! 0       8       m: number of bits
//! 8       8       k: number of hash functions
//! 16      8       count: number of insertions
//! 24      8 * w   bit array words, w = ceil(m / 64)
//! ```
//!
//! [`BloomFilter::deserialize`] rejects inputs shorter than the header, headers with a
//! zero `m` or `k`, and bodies that are not exactly `w` words long.
//!
//! # Implementation Details
//!
//! - Uses the 128-bit MurmurHash3 x64 variant (seed 0 by default)
//! - Implements double hashing (Kirsch-Mitzenmacher method) for k hash functions
//! - Bits packed in `u64` words
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/time trade-offs in hash coding with allowable errors"
//! - Kirsch and Mitzenmacher (2008). "Less Hashing, Same Performance: Building a Better Bloom
//!   Filter"

mod builder;
mod filter;
mod params;
mod serialization;

pub use self::builder::BloomFilterBuilder;
pub use self::filter::BloomFilter;
pub use self::params::optimal_k;
pub use self::params::optimal_m;
