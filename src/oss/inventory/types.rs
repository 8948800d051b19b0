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

//! Vocabularies used by inventory configurations.
//!
//! Configuration records store these values as plain strings so that values
//! unknown to this crate survive a decode/encode cycle. The enums below are
//! the values the service documents, for callers that want typed input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::oss::error::Error;

/// Ordered list of optional report columns, as raw `<Field>` texts.
///
/// Order and duplicates are kept exactly as found in the document.
pub type OptionalFields = Vec<String>;

/// Output format of inventory reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InventoryFormat {
    /// Comma-separated values
    CSV,
}

impl InventoryFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryFormat::CSV => "CSV",
        }
    }
}

impl FromStr for InventoryFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "CSV" => Ok(InventoryFormat::CSV),
            v => Err(Error::InvalidEnumValue {
                kind: "inventory format",
                value: v.to_string(),
            }),
        }
    }
}

/// How often inventory reports are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InventoryFrequency {
    Daily,
    Weekly,
}

impl InventoryFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryFrequency::Daily => "Daily",
            InventoryFrequency::Weekly => "Weekly",
        }
    }
}

impl FromStr for InventoryFrequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "Daily" => Ok(InventoryFrequency::Daily),
            "Weekly" => Ok(InventoryFrequency::Weekly),
            v => Err(Error::InvalidEnumValue {
                kind: "inventory frequency",
                value: v.to_string(),
            }),
        }
    }
}

/// Which object versions a report lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InventoryIncludedObjectVersions {
    /// Every version of every object
    All,
    /// Only the current version
    Current,
}

impl InventoryIncludedObjectVersions {
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryIncludedObjectVersions::All => "All",
            InventoryIncludedObjectVersions::Current => "Current",
        }
    }
}

impl FromStr for InventoryIncludedObjectVersions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "All" => Ok(InventoryIncludedObjectVersions::All),
            "Current" => Ok(InventoryIncludedObjectVersions::Current),
            v => Err(Error::InvalidEnumValue {
                kind: "included object versions",
                value: v.to_string(),
            }),
        }
    }
}

/// Optional columns that can be added to inventory reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InventoryOptionalField {
    /// Object size
    Size,
    /// Last modification time
    LastModifiedDate,
    /// Object ETag
    ETag,
    /// Storage class
    StorageClass,
    /// Whether the object was uploaded in parts
    IsMultipartUploaded,
    /// Server-side encryption status
    EncryptionStatus,
}

impl InventoryOptionalField {
    /// All fields, in the order the service documents them.
    pub const ALL: [InventoryOptionalField; 6] = [
        InventoryOptionalField::Size,
        InventoryOptionalField::LastModifiedDate,
        InventoryOptionalField::ETag,
        InventoryOptionalField::StorageClass,
        InventoryOptionalField::IsMultipartUploaded,
        InventoryOptionalField::EncryptionStatus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryOptionalField::Size => "Size",
            InventoryOptionalField::LastModifiedDate => "LastModifiedDate",
            InventoryOptionalField::ETag => "ETag",
            InventoryOptionalField::StorageClass => "StorageClass",
            InventoryOptionalField::IsMultipartUploaded => "IsMultipartUploaded",
            InventoryOptionalField::EncryptionStatus => "EncryptionStatus",
        }
    }
}

impl FromStr for InventoryOptionalField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "Size" => Ok(InventoryOptionalField::Size),
            "LastModifiedDate" => Ok(InventoryOptionalField::LastModifiedDate),
            "ETag" => Ok(InventoryOptionalField::ETag),
            "StorageClass" => Ok(InventoryOptionalField::StorageClass),
            "IsMultipartUploaded" => Ok(InventoryOptionalField::IsMultipartUploaded),
            "EncryptionStatus" => Ok(InventoryOptionalField::EncryptionStatus),
            v => Err(Error::InvalidEnumValue {
                kind: "inventory optional field",
                value: v.to_string(),
            }),
        }
    }
}

macro_rules! impl_string_conversions {
    ($($t:ty),*) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl From<$t> for String {
                fn from(v: $t) -> String {
                    v.as_str().to_string()
                }
            }
        )*
    };
}

impl_string_conversions!(
    InventoryFormat,
    InventoryFrequency,
    InventoryIncludedObjectVersions,
    InventoryOptionalField
);
