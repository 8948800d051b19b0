// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error definitions for OSS inventory operations

use std::string::FromUtf8Error;

use thiserror::Error;

/// Error definitions
#[derive(Debug, Error)]
pub enum Error {
    #[error("XML parse error: {0}")]
    XmlParseError(#[from] xmltree::ParseError),

    #[error("XML document nests deeper than {limit} elements")]
    XmlTooDeep { limit: usize },

    #[error("XML write error: {0}")]
    XmlWriteError(#[from] ::xml::writer::Error),

    #[error("unexpected root element <{found}>; expected <{expected}>")]
    UnexpectedRootElement {
        expected: &'static str,
        found: String,
    },

    #[error("invalid bucket name: {0}")]
    InvalidBucketName(String),

    #[error("invalid inventory configuration id '{id}': {reason}")]
    InvalidInventoryId { id: String, reason: String },

    #[error("invalid inventory configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid {kind} value '{value}'")]
    InvalidEnumValue { kind: &'static str, value: String },

    #[error("invalid UTF-8: {0}")]
    Utf8Error(#[from] FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = Error::UnexpectedRootElement {
            expected: "InventoryConfiguration",
            found: "Inventory".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "unexpected root element <Inventory>; expected <InventoryConfiguration>"
        );

        let e = Error::InvalidEnumValue {
            kind: "inventory frequency",
            value: "Monthly".to_string(),
        };
        assert_eq!(e.to_string(), "invalid inventory frequency value 'Monthly'");

        let e = Error::XmlTooDeep { limit: 64 };
        assert_eq!(e.to_string(), "XML document nests deeper than 64 elements");
    }
}
