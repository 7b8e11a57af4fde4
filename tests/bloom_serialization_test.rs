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

use bitbloom::bloom::BloomFilter;
use bitbloom::error::ErrorKind;
use bitbloom::hash::MurmurHasher;
use googletest::assert_that;
use googletest::prelude::contains_substring;

fn header(m: u64, k: u64, count: u64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(24);
    bytes.extend_from_slice(&m.to_le_bytes());
    bytes.extend_from_slice(&k.to_le_bytes());
    bytes.extend_from_slice(&count.to_le_bytes());
    bytes
}

#[test]
fn test_empty_filter_layout() {
    let filter = BloomFilter::with_params(1024, 3);
    let bytes = filter.serialize();
    assert_eq!(bytes.len(), 24 + 8 * 16);
    assert_eq!(&bytes[..24], header(1024, 3, 0).as_slice());
    assert!(bytes[24..].iter().all(|&b| b == 0));

    let restored = BloomFilter::deserialize(&bytes).unwrap();
    assert_eq!(restored.count(), 0);
    assert_eq!(restored.num_bits(), 1024);
    assert_eq!(restored.num_hashes(), 3);
    for item in ["a", "b", "golang", ""] {
        assert!(!restored.contains(item));
    }
}

#[test]
fn test_known_bytes() {
    let filter = BloomFilter::with_params(128, 3);
    filter.insert("golang");

    // "golang" sets bits 25, 48 and 71
    let mut expected = header(128, 3, 1);
    expected.extend_from_slice(&0x0001_0000_0200_0000u64.to_le_bytes());
    expected.extend_from_slice(&0x80u64.to_le_bytes());
    assert_eq!(filter.serialize(), expected);

    let restored = BloomFilter::deserialize(&expected).unwrap();
    assert!(restored.contains("golang"));
    assert_eq!(restored.count(), 1);
}

#[test]
fn test_size_tracks_num_bits() {
    for m in [1, 63, 64, 65, 959, 9586] {
        let filter = BloomFilter::with_params(m, 2);
        filter.insert("x");
        assert_eq!(filter.serialize().len() as u64, 24 + 8 * m.div_ceil(64));
    }
}

#[test]
fn test_round_trip_preserves_membership() {
    let filter = BloomFilter::new(1000, 0.01).unwrap();
    for i in 0..500 {
        filter.insert(format!("item-{i}"));
    }
    filter.insert("item-0");

    let bytes = filter.serialize();
    let restored = BloomFilter::deserialize(&bytes).unwrap();

    assert_eq!(restored.count(), 501);
    assert_eq!(restored.num_bits(), filter.num_bits());
    assert_eq!(restored.num_hashes(), filter.num_hashes());
    assert_eq!(restored.actual_fill_ratio(), filter.actual_fill_ratio());
    for i in 0..2000 {
        let item = format!("item-{i}");
        assert_eq!(restored.contains(&item), filter.contains(&item), "{item}");
    }
    assert_eq!(restored.serialize(), bytes);
}

#[test]
fn test_round_trip_with_seeded_hasher() {
    let hasher = MurmurHasher::with_seed(42);
    let filter = BloomFilter::with_hasher(4096, 5, hasher);
    filter.insert("seeded");

    let bytes = filter.serialize();
    let restored = BloomFilter::deserialize_with_hasher(&bytes, hasher).unwrap();
    assert!(restored.contains("seeded"));
    assert_eq!(restored.hasher().seed(), 42);
}

#[test]
fn test_restored_filter_accepts_inserts() {
    let filter = BloomFilter::with_params(1024, 3);
    filter.insert("first");

    let restored = BloomFilter::deserialize(&filter.serialize()).unwrap();
    restored.insert("second");
    assert!(restored.contains("first"));
    assert!(restored.contains("second"));
    assert_eq!(restored.count(), 2);
}

#[test]
fn test_header_too_short() {
    for len in [0, 3, 5, 23] {
        let err = BloomFilter::deserialize(&vec![0u8; len]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::HeaderTooShort, "len = {len}");
    }
    let err = BloomFilter::deserialize(b"short").unwrap_err();
    assert_that!(err.message(), contains_substring("too short"));
}

#[test]
fn test_zero_header_is_invalid() {
    let err = BloomFilter::deserialize(&[0u8; 24]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameters);

    let err = BloomFilter::deserialize(&[0u8; 32]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameters);
}

#[test]
fn test_zero_m_or_k_is_invalid() {
    let mut bytes = header(0, 3, 0);
    let err = BloomFilter::deserialize(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameters);

    bytes = header(64, 0, 0);
    bytes.extend_from_slice(&[0u8; 8]);
    let err = BloomFilter::deserialize(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameters);
}

#[test]
fn test_truncated_body() {
    let filter = BloomFilter::new(100, 0.01).unwrap();
    let bytes = filter.serialize();

    let err = BloomFilter::deserialize(&bytes[..bytes.len() - 8]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LengthMismatch);
    assert_that!(err.message(), contains_substring("length mismatch"));

    let err = BloomFilter::deserialize(&bytes[..24]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LengthMismatch);
}

#[test]
fn test_oversized_body() {
    let filter = BloomFilter::with_params(128, 3);
    let mut bytes = filter.serialize();
    bytes.extend_from_slice(&[0u8; 8]);

    let err = BloomFilter::deserialize(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LengthMismatch);
}

#[test]
fn test_partial_word_body() {
    let filter = BloomFilter::with_params(128, 3);
    let mut bytes = filter.serialize();
    bytes.push(0);
    let err = BloomFilter::deserialize(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LengthMismatch);

    bytes.truncate(bytes.len() - 4);
    let err = BloomFilter::deserialize(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LengthMismatch);
}

#[test]
fn test_huge_declared_size_is_rejected() {
    let err = BloomFilter::deserialize(&header(u64::MAX, 7, 0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LengthMismatch);
}
