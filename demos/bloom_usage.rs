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

use std::sync::Arc;
use std::thread;

use bitbloom::bloom::BloomFilter;

fn main() {
    // 1 million items, 1% false positive rate
    let filter = Arc::new(BloomFilter::new(1_000_000, 0.01).unwrap());
    println!(
        "Sized filter: m = {} bits, k = {} hashes, {} bytes",
        filter.num_bits(),
        filter.num_hashes(),
        filter.memory_usage()
    );

    println!("\nInserting 100,000 items from 4 threads...");
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let filter = Arc::clone(&filter);
            thread::spawn(move || {
                for i in 0..25_000 {
                    filter.insert(format!("user-{t}-{i}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    println!("Insertions: {}", filter.count());
    println!("Estimated fill ratio: {:.4}", filter.estimated_fill_ratio());
    println!("Actual fill ratio: {:.4}", filter.actual_fill_ratio());
    println!("False positive rate: {:.6}", filter.false_positive_rate());

    println!("\nMembership:");
    println!("  user-0-42 possibly present: {}", filter.contains("user-0-42"));
    println!("  user-9-42 possibly present: {}", filter.contains("user-9-42"));

    println!("\nSerializing filter...");
    let bytes = filter.serialize();
    println!("Serialized size: {} bytes", bytes.len());

    let restored = BloomFilter::deserialize(&bytes).unwrap();
    println!("Restored insertions: {}", restored.count());
    println!(
        "Restored user-0-42 possibly present: {}",
        restored.contains("user-0-42")
    );

    println!("\nDebug: {:?}", restored);
}
