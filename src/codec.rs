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

use std::io;
use std::io::Cursor;

use byteorder::LE;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;

/// An append-only little-endian writer backed by a `Vec<u8>`.
pub(crate) struct SketchBytes {
    bytes: Vec<u8>,
}

impl SketchBytes {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn write_u64_le(&mut self, n: u64) {
        // Writing into a Vec cannot fail.
        let _ = self.bytes.write_u64::<LE>(n);
    }
}

/// A cursor over a byte slice for reading little-endian values.
pub(crate) struct SketchSlice<'a> {
    slice: Cursor<&'a [u8]>,
}

impl<'a> SketchSlice<'a> {
    pub fn new(slice: &'a [u8]) -> SketchSlice<'a> {
        SketchSlice {
            slice: Cursor::new(slice),
        }
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        let len = self.slice.get_ref().len() as u64;
        len.saturating_sub(self.slice.position()) as usize
    }

    pub fn read_u64_le(&mut self) -> io::Result<u64> {
        self.slice.read_u64::<LE>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_little_endian() {
        let mut bytes = SketchBytes::with_capacity(16);
        bytes.write_u64_le(1);
        bytes.write_u64_le(0x0102_0304_0506_0708);
        assert_eq!(
            bytes.into_bytes(),
            vec![1, 0, 0, 0, 0, 0, 0, 0, 8, 7, 6, 5, 4, 3, 2, 1]
        );
    }

    #[test]
    fn test_read_tracks_remaining() {
        let data = [8, 7, 6, 5, 4, 3, 2, 1, 0xff, 0xff];
        let mut slice = SketchSlice::new(&data);
        assert_eq!(slice.remaining(), 10);
        assert_eq!(slice.read_u64_le().unwrap(), 0x0102_0304_0506_0708);
        assert_eq!(slice.remaining(), 2);
        assert!(slice.read_u64_le().is_err());
    }
}
