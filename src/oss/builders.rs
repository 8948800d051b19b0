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

//! Request builders for the bucket inventory operations

mod delete_bucket_inventory_configuration;
mod get_bucket_inventory_configuration;
mod inventory_common;
mod list_bucket_inventory_configuration;
mod set_bucket_inventory_configuration;

pub use delete_bucket_inventory_configuration::*;
pub use get_bucket_inventory_configuration::*;
pub use list_bucket_inventory_configuration::*;
pub use set_bucket_inventory_configuration::*;
