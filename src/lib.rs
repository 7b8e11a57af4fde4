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

//! # bitbloom
//!
//! A thread-safe Bloom filter sized from an expected item count and a target false
//! positive probability, with an exact little-endian binary format for persistence.
//!
//! - [`bloom`]: the filter, its builder and the sizing formulas
//! - [`hash`]: pluggable strategies that map items to bit positions
//! - [`error`]: the error type returned by fallible operations

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

mod bitset;
pub mod bloom;
mod codec;
pub mod error;
pub mod hash;
