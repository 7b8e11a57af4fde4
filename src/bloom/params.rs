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

use std::f64::consts::LN_2;

/// Optimal number of bits for `n` expected items at false positive probability `p`.
///
/// Formula: `m = ceil(-n * ln(p) / ln(2)^2)`
///
/// # Examples
///
/// ```
/// # use bitbloom::bloom::optimal_m;
/// assert_eq!(optimal_m(1000, 0.01), 9586);
/// ```
pub fn optimal_m(n: u64, p: f64) -> u64 {
    (-(n as f64) * p.ln() / (LN_2 * LN_2)).ceil() as u64
}

/// Optimal number of hash functions for `m` bits holding `n` items.
///
/// Formula: `k = ceil((m / n) * ln(2))`
///
/// Returns 0 when `n` is 0, since no finite hash count is optimal for an empty set.
///
/// # Examples
///
/// ```
/// # use bitbloom::bloom::optimal_k;
/// assert_eq!(optimal_k(9586, 1000), 7);
/// ```
pub fn optimal_k(m: u64, n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    (m as f64 / n as f64 * LN_2).ceil() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimal_m() {
        assert_eq!(optimal_m(100, 0.01), 959);
        assert_eq!(optimal_m(1000, 0.01), 9586);
        assert_eq!(optimal_m(10_000, 0.01), 95_851);
        assert_eq!(optimal_m(1000, 0.001), 14_378);
    }

    #[test]
    fn test_optimal_k() {
        assert_eq!(optimal_k(959, 100), 7);
        assert_eq!(optimal_k(9586, 1000), 7);
        assert_eq!(optimal_k(14_378, 1000), 10);
        assert_eq!(optimal_k(1, 1000), 1);
    }

    #[test]
    fn test_optimal_k_without_items() {
        assert_eq!(optimal_k(1024, 0), 0);
    }

    #[test]
    fn test_smaller_fpp_needs_more_bits() {
        let mut prev = 0;
        for p in [0.5, 0.1, 0.01, 0.001, 0.0001] {
            let m = optimal_m(1000, p);
            assert!(m > prev, "m should grow as p shrinks: {m} <= {prev}");
            prev = m;
        }
    }
}
