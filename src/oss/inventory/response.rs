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

//! Results of the get and list inventory operations.
//!
//! Both decoders are total in [`ParseMode::Lenient`]: a body that is not XML,
//! or whose root is not the expected element, decodes to the zero-valued
//! result. Callers that need to tell "not found" from "malformed" can use
//! [`ParseMode::Strict`].

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::oss::builders::ListBucketInventoryConfiguration;
use crate::oss::error::{Error, Result};
use crate::oss::inventory::configuration::{INVENTORY_CONFIGURATION, InventoryConfiguration};
use crate::oss::types::{FromOssResponse, OssRequest, ParseMode};
use crate::oss::utils::{get_bool_default, get_text_default, matching_children};
use crate::oss::xml::{XmlTree, parse_document};

const LIST_INVENTORY_CONFIGURATIONS_RESULT: &str = "ListInventoryConfigurationsResult";

/// Parses `body` and checks its root tag.
///
/// Lenient mode turns both failures into `Ok(None)` after logging them.
fn parse_root(
    body: &[u8],
    expected: &'static str,
    mode: ParseMode,
) -> Result<Option<xmltree::Element>> {
    let root = match parse_document(body) {
        Ok(v) => v,
        Err(e) => {
            if mode == ParseMode::Strict {
                return Err(e);
            }
            log::debug!("unparseable <{expected}> document treated as empty: {e}");
            return Ok(None);
        }
    };

    {
        let found = XmlTree::name(&root);
        if found != expected {
            if mode == ParseMode::Strict {
                return Err(Error::UnexpectedRootElement {
                    expected,
                    found: found.into_owned(),
                });
            }
            log::debug!("document root <{found}> treated as empty; expected <{expected}>");
            return Ok(None);
        }
    }

    Ok(Some(root))
}

/// Result of getting one inventory configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBucketInventoryConfigurationResult {
    inventory_configuration: InventoryConfiguration,
}

impl GetBucketInventoryConfigurationResult {
    /// Decodes a response body; never fails.
    pub fn parse(body: &[u8]) -> Self {
        Self::from_root(
            parse_root(body, INVENTORY_CONFIGURATION, ParseMode::Lenient)
                .ok()
                .flatten(),
        )
    }

    /// Decodes a response body with the given strictness.
    pub fn parse_with_mode(body: &[u8], mode: ParseMode) -> Result<Self> {
        Ok(Self::from_root(parse_root(body, INVENTORY_CONFIGURATION, mode)?))
    }

    fn from_root(root: Option<xmltree::Element>) -> Self {
        let inventory_configuration = root
            .as_ref()
            .map(InventoryConfiguration::from_xml)
            .unwrap_or_default();
        log::trace!(
            "decoded inventory configuration '{}'",
            inventory_configuration.id()
        );
        GetBucketInventoryConfigurationResult {
            inventory_configuration,
        }
    }

    pub fn inventory_configuration(&self) -> &InventoryConfiguration {
        &self.inventory_configuration
    }

    pub fn into_inventory_configuration(self) -> InventoryConfiguration {
        self.inventory_configuration
    }
}

impl FromOssResponse for GetBucketInventoryConfigurationResult {
    fn from_oss_response(_request: &OssRequest, body: Bytes) -> Result<Self> {
        Ok(Self::parse(&body))
    }
}

/// One page of inventory configurations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBucketInventoryConfigurationResult {
    inventory_configurations: Vec<InventoryConfiguration>,
    is_truncated: bool,
    next_continuation_token: String,
}

impl ListBucketInventoryConfigurationResult {
    /// Decodes a response body; never fails.
    pub fn parse(body: &[u8]) -> Self {
        Self::from_root(
            parse_root(body, LIST_INVENTORY_CONFIGURATIONS_RESULT, ParseMode::Lenient)
                .ok()
                .flatten(),
        )
    }

    /// Decodes a response body with the given strictness.
    pub fn parse_with_mode(body: &[u8], mode: ParseMode) -> Result<Self> {
        Ok(Self::from_root(parse_root(
            body,
            LIST_INVENTORY_CONFIGURATIONS_RESULT,
            mode,
        )?))
    }

    fn from_root(root: Option<xmltree::Element>) -> Self {
        let Some(root) = root else {
            return Self::default();
        };

        let inventory_configurations: Vec<InventoryConfiguration> =
            matching_children(&root, INVENTORY_CONFIGURATION)
                .map(InventoryConfiguration::from_xml)
                .inspect(|c| log::trace!("decoded inventory configuration '{}'", c.id()))
                .collect();

        ListBucketInventoryConfigurationResult {
            inventory_configurations,
            is_truncated: get_bool_default(&root, "IsTruncated"),
            next_continuation_token: get_text_default(&root, "NextContinuationToken"),
        }
    }

    /// Configurations of this page, in document order.
    pub fn inventory_configurations(&self) -> &[InventoryConfiguration] {
        &self.inventory_configurations
    }

    pub fn into_inventory_configurations(self) -> Vec<InventoryConfiguration> {
        self.inventory_configurations
    }

    pub fn is_truncated(&self) -> bool {
        self.is_truncated
    }

    /// Opaque cursor for the next page; empty when there is none.
    pub fn next_continuation_token(&self) -> &str {
        &self.next_continuation_token
    }

    /// Returns the request for the following page, if the listing is
    /// truncated and the service handed out a token.
    pub fn next_request(
        &self,
        bucket: impl Into<String>,
    ) -> Option<ListBucketInventoryConfiguration> {
        if !self.is_truncated || self.next_continuation_token.is_empty() {
            return None;
        }
        Some(
            ListBucketInventoryConfiguration::builder()
                .bucket(bucket)
                .continuation_token(self.next_continuation_token.clone())
                .build(),
        )
    }
}

impl FromOssResponse for ListBucketInventoryConfigurationResult {
    fn from_oss_response(_request: &OssRequest, body: Bytes) -> Result<Self> {
        Ok(Self::parse(&body))
    }
}

/// Decodes a get-inventory response body into its configuration.
pub fn decode_single(body: &[u8]) -> InventoryConfiguration {
    GetBucketInventoryConfigurationResult::parse(body).into_inventory_configuration()
}

/// Decodes a list-inventory response body.
pub fn decode_list(body: &[u8]) -> ListBucketInventoryConfigurationResult {
    ListBucketInventoryConfigurationResult::parse(body)
}

/// Encodes a configuration as a set-inventory request body.
///
/// Text that XML cannot carry yields an empty body; use
/// [`InventoryConfiguration::try_to_xml`] to get the error instead.
pub fn encode(configuration: &InventoryConfiguration) -> Bytes {
    Bytes::from(configuration.to_xml())
}
