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

//! # OSS bucket inventory mapping (`oss-inventory`)
//!
//! This crate maps OSS bucket inventory configurations to and from their XML
//! wire format, and describes the requests that carry them.
//!
//! Decoding never fails on missing content: an absent or empty element yields
//! the zero value of its field, and a body that is not an inventory document
//! at all yields an all-zero record. [`oss::types::ParseMode::Strict`] is
//! available for callers that need to tell those cases apart.
//!
//! ## Basic Usage
//!
//! ```
//! use oss_inventory::oss::inventory::{decode_single, encode};
//!
//! let body = b"<InventoryConfiguration>\
//!     <Id>report1</Id><IsEnabled>true</IsEnabled>\
//!     <Schedule><Frequency>Daily</Frequency></Schedule>\
//!     </InventoryConfiguration>";
//!
//! let config = decode_single(body);
//! assert_eq!(config.id(), "report1");
//! assert!(config.is_enabled());
//! assert_eq!(config.schedule(), "Daily");
//!
//! assert_eq!(decode_single(&encode(&config)), config);
//! ```
//!
//! ## Design
//! - Request builders implement [`oss::types::ToOssRequest`]; signing and sending are left to the caller
//! - Results implement [`oss::types::FromOssResponse`] for decoding raw response bodies
//! - Errors are reported through [`oss::error::Error`]

pub mod oss;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
