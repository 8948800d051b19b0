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

//! OSS bucket inventory configurations.
//!
//! The records here map to and from the XML documents exchanged by the put,
//! get and list inventory operations. Decoding is lenient by default: missing
//! or empty elements decode to zero values rather than errors.

mod configuration;
mod destination;
mod response;
mod types;

pub use configuration::*;
pub use destination::*;
pub use response::*;
pub use types::*;
