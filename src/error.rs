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

//! Error types for bitbloom operations

use std::fmt;

/// ErrorKind is all kinds of Error of bitbloom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The target false positive probability is outside `(0, 1)`.
    InvalidProbability,
    /// The serialized input is shorter than the fixed header.
    HeaderTooShort,
    /// The bit count or hash count is zero.
    InvalidParameters,
    /// A word count disagrees with the one implied by the bit count.
    LengthMismatch,
}

impl ErrorKind {
    /// Convert this error kind instance into static str.
    pub const fn into_static(self) -> &'static str {
        match self {
            ErrorKind::InvalidProbability => "InvalidProbability",
            ErrorKind::HeaderTooShort => "HeaderTooShort",
            ErrorKind::InvalidParameters => "InvalidParameters",
            ErrorKind::LengthMismatch => "LengthMismatch",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.into_static())
    }
}

/// Error is the error struct returned by all bitbloom functions.
///
/// # Examples
///
/// ```
/// # use bitbloom::error::Error;
/// # use bitbloom::error::ErrorKind;
/// let err = Error::new(ErrorKind::LengthMismatch, "bad body");
/// assert_eq!(err.kind(), ErrorKind::LengthMismatch);
/// assert_eq!(err.message(), "bad body");
/// ```
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: Vec<(&'static str, String)>,
}

impl Error {
    /// Create a new Error with error kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: vec![],
        }
    }

    /// Add more context in error.
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Return error's kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return error's message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

// Convenient constructors used within bitbloom crate.
impl Error {
    pub(crate) fn invalid_probability(p: f64) -> Self {
        Self::new(
            ErrorKind::InvalidProbability,
            "false positive rate must be 0 < p < 1",
        )
        .with_context("p", p)
    }

    pub(crate) fn header_too_short(expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::HeaderTooShort, "data too short for header")
            .with_context("expected", expected)
            .with_context("actual", actual)
    }

    pub(crate) fn invalid_parameters(msg: impl Into<String>, m: u64, k: u64) -> Self {
        Self::new(ErrorKind::InvalidParameters, msg)
            .with_context("m", m)
            .with_context("k", k)
    }

    pub(crate) fn length_mismatch(msg: impl Into<String>, expected: u64, actual: u64) -> Self {
        Self::new(ErrorKind::LengthMismatch, msg)
            .with_context("expected_words", expected)
            .with_context("actual_words", actual)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // If alternate has been specified, we will print like Debug.
        if f.alternate() {
            let mut de = f.debug_struct("Error");
            de.field("kind", &self.kind);
            de.field("message", &self.message);
            de.field("context", &self.context);
            return de.finish();
        }

        write!(f, "{}", self.kind)?;
        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }
        writeln!(f)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "Context:")?;
            for (k, v) in self.context.iter() {
                writeln!(f, "   {k}: {v}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !self.context.is_empty() {
            write!(f, ", context: {{ ")?;
            for (i, (k, v)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}: {v}")?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_context() {
        let err = Error::new(ErrorKind::HeaderTooShort, "data too short for header");
        assert_eq!(err.to_string(), "HeaderTooShort => data too short for header");
    }

    #[test]
    fn test_display_with_context() {
        let err = Error::length_mismatch("bitset data length mismatch", 16, 15);
        assert_eq!(
            err.to_string(),
            "LengthMismatch, context: { expected_words: 16, actual_words: 15 } => bitset data length mismatch"
        );
    }

    #[test]
    fn test_debug_lists_context() {
        let err = Error::invalid_parameters("invalid parameters in serialized data", 0, 3);
        let debug = format!("{err:?}");
        assert!(debug.starts_with("InvalidParameters => invalid parameters"));
        assert!(debug.contains("   m: 0"));
        assert!(debug.contains("   k: 3"));
    }

    #[test]
    fn test_probability_context() {
        let err = Error::invalid_probability(1.5);
        assert_eq!(err.kind(), ErrorKind::InvalidProbability);
        assert!(err.to_string().contains("p: 1.5"));
    }
}
