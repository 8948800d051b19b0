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

//! Inventory configuration record and its XML mapping.

use serde::{Deserialize, Serialize};

use crate::oss::error::{Error, Result};
use crate::oss::inventory::destination::{DESTINATION, OssBucketDestination};
use crate::oss::inventory::types::{
    InventoryFrequency, InventoryIncludedObjectVersions, OptionalFields,
};
use crate::oss::utils::{
    element_text, find_child, get_bool_default, get_path_text_default, get_text_default,
    matching_children,
};
use crate::oss::xml::{XmlNode, XmlTree};

pub(crate) const INVENTORY_CONFIGURATION: &str = "InventoryConfiguration";

/// One inventory report definition of a bucket.
///
/// The identifier is fixed at construction. Every other attribute defaults to
/// its zero value (empty string, `false`, empty list) when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryConfiguration {
    id: String,
    is_enabled: bool,
    prefix: String,
    destination: OssBucketDestination,
    schedule: String,
    included_object_versions: String,
    #[serde(default)]
    optional_fields: OptionalFields,
}

impl InventoryConfiguration {
    pub fn new(id: impl Into<String>) -> Self {
        InventoryConfiguration {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_is_enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = is_enabled;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_destination(mut self, destination: OssBucketDestination) -> Self {
        self.destination = destination;
        self
    }

    pub fn with_schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = schedule.into();
        self
    }

    pub fn with_included_object_versions(mut self, versions: impl Into<String>) -> Self {
        self.included_object_versions = versions.into();
        self
    }

    pub fn with_optional_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn set_is_enabled(&mut self, is_enabled: bool) {
        self.is_enabled = is_enabled;
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    pub fn set_destination(&mut self, destination: OssBucketDestination) {
        self.destination = destination;
    }

    pub fn set_schedule(&mut self, schedule: impl Into<String>) {
        self.schedule = schedule.into();
    }

    pub fn set_included_object_versions(&mut self, versions: impl Into<String>) {
        self.included_object_versions = versions.into();
    }

    pub fn set_optional_fields(&mut self, fields: OptionalFields) {
        self.optional_fields = fields;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Object key prefix the report is restricted to; empty matches all objects.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn destination(&self) -> &OssBucketDestination {
        &self.destination
    }

    /// Report frequency, e.g. `Daily`.
    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn schedule_kind(&self) -> Option<InventoryFrequency> {
        self.schedule.parse().ok()
    }

    pub fn included_object_versions(&self) -> &str {
        &self.included_object_versions
    }

    pub fn included_object_versions_kind(&self) -> Option<InventoryIncludedObjectVersions> {
        self.included_object_versions.parse().ok()
    }

    pub fn optional_fields(&self) -> &OptionalFields {
        &self.optional_fields
    }

    /// Checks that the record carries what the service needs to accept it.
    ///
    /// Decoding never calls this; it is meant for the write path.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::InvalidInventoryId {
                id: self.id.clone(),
                reason: "id cannot be empty".to_string(),
            });
        }
        let dest = &self.destination;
        if dest.bucket().is_empty() {
            return Err(Error::InvalidConfig(
                "destination bucket cannot be empty".to_string(),
            ));
        }
        if dest.format().is_empty() {
            return Err(Error::InvalidConfig(
                "destination format cannot be empty".to_string(),
            ));
        }
        if dest.role_arn().is_empty() {
            return Err(Error::InvalidConfig(
                "destination role ARN cannot be empty".to_string(),
            ));
        }
        if self.schedule.is_empty() {
            return Err(Error::InvalidConfig("schedule cannot be empty".to_string()));
        }
        if self.included_object_versions.is_empty() {
            return Err(Error::InvalidConfig(
                "included object versions cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Decodes an `<InventoryConfiguration>` element.
    ///
    /// Never fails: each attribute is looked up independently and falls back
    /// to its zero value. Empty `<Field>` entries are kept as empty strings.
    pub fn from_xml<T: XmlTree>(element: &T) -> InventoryConfiguration {
        let destination = match find_child(element, DESTINATION) {
            Some(v) => OssBucketDestination::from_xml(v),
            None => OssBucketDestination::default(),
        };

        let optional_fields = match find_child(element, "OptionalFields") {
            Some(v) => matching_children(v, "Field")
                .map(|f| element_text(f).unwrap_or_default())
                .collect(),
            None => Vec::new(),
        };

        InventoryConfiguration {
            id: get_text_default(element, "Id"),
            is_enabled: get_bool_default(element, "IsEnabled"),
            prefix: get_path_text_default(element, &["Filter", "Prefix"]),
            destination,
            schedule: get_path_text_default(element, &["Schedule", "Frequency"]),
            included_object_versions: get_text_default(element, "IncludedObjectVersions"),
            optional_fields,
        }
    }

    /// Encodes as an `<InventoryConfiguration>` element.
    ///
    /// A zero-valued destination is left out entirely, which decodes back to
    /// the same zero-valued destination.
    pub fn to_xml_node(&self) -> XmlNode {
        let mut config = XmlNode::new(INVENTORY_CONFIGURATION)
            .child(XmlNode::leaf("Id", &self.id))
            .child(XmlNode::leaf(
                "IsEnabled",
                match self.is_enabled {
                    true => "true",
                    false => "false",
                },
            ))
            .child(XmlNode::new("Filter").child(XmlNode::leaf("Prefix", &self.prefix)));

        if !self.destination.is_empty() {
            config = config.child(self.destination.to_xml_node());
        }

        config
            .child(XmlNode::new("Schedule").child(XmlNode::leaf("Frequency", &self.schedule)))
            .child(XmlNode::leaf(
                "IncludedObjectVersions",
                &self.included_object_versions,
            ))
            .child(
                XmlNode::new("OptionalFields").children(
                    self.optional_fields
                        .iter()
                        .map(|f| XmlNode::leaf("Field", f))
                        .collect(),
                ),
            )
    }

    /// Serializes to the request body of a set-inventory call.
    ///
    /// Returns [`Error::InvalidConfig`] if any text holds a character XML
    /// cannot carry, such as an ASCII control code other than tab, newline
    /// or carriage return.
    pub fn try_to_xml(&self) -> Result<String> {
        self.to_xml_node().to_xml_string()
    }

    /// Serializes to the request body of a set-inventory call.
    ///
    /// On failure (see [`try_to_xml`](Self::try_to_xml)) the error is logged
    /// and an empty string is returned.
    pub fn to_xml(&self) -> String {
        self.try_to_xml().unwrap_or_else(|e| {
            log::error!("failed to serialize inventory configuration {}: {e}", self.id);
            String::new()
        })
    }
}
