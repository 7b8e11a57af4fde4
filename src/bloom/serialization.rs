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

//! Binary serialization layout for Bloom filters.
//!
//! All fields are little-endian `u64`:
//!
//! ```text
//! Offset  Size    Field
//! 0       8       m: number of bits
//! 8       8       k: number of hash functions
//! 16      8       count: number of insertions
//! 24      8 * w   bit array words, w = ceil(m / 64)
//! ```

/// Size of the fixed header in bytes.
pub const HEADER_SIZE: usize = 24;

/// Size of one bit array word in bytes.
pub const WORD_SIZE: usize = 8;

/// Total serialized size for a filter of `num_bits` bits.
pub fn serialized_size(num_bits: u64) -> u64 {
    HEADER_SIZE as u64 + crate::bitset::num_words(num_bits) * WORD_SIZE as u64
}
