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

//! Report destination of an inventory configuration.

use serde::{Deserialize, Serialize};

use crate::oss::inventory::types::InventoryFormat;
use crate::oss::utils::{find_child, get_path_text_option, get_text_default};
use crate::oss::xml::{XmlNode, XmlTree};

pub(crate) const DESTINATION: &str = "Destination";
pub(crate) const OSS_BUCKET_DESTINATION: &str = "OSSBucketDestination";
const ENCRYPTION: &str = "Encryption";
const SSE_KMS: &str = "SSE-KMS";
const KEY_ID: &str = "KeyId";

/// Server-side encryption applied to generated reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InventoryEncryption {
    /// Encryption with a KMS managed key
    SseKms { key_id: String },
}

impl InventoryEncryption {
    pub fn key_id(&self) -> &str {
        match self {
            InventoryEncryption::SseKms { key_id } => key_id,
        }
    }

    fn from_xml<T: XmlTree>(element: &T) -> Option<InventoryEncryption> {
        get_path_text_option(element, &[SSE_KMS, KEY_ID])
            .map(|key_id| InventoryEncryption::SseKms { key_id })
    }

    fn to_xml_node(&self) -> XmlNode {
        match self {
            InventoryEncryption::SseKms { key_id } => XmlNode::new(ENCRYPTION)
                .child(XmlNode::new(SSE_KMS).child(XmlNode::leaf(KEY_ID, key_id))),
        }
    }
}

/// Bucket that receives the generated inventory reports.
///
/// Every attribute is zero-valued when absent from the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OssBucketDestination {
    format: String,
    account_id: String,
    role_arn: String,
    bucket: String,
    prefix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    encryption: Option<InventoryEncryption>,
}

impl OssBucketDestination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = account_id.into();
        self
    }

    pub fn with_role_arn(mut self, role_arn: impl Into<String>) -> Self {
        self.role_arn = role_arn.into();
        self
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Encrypts reports with the given KMS key.
    pub fn with_encryption(mut self, key_id: impl Into<String>) -> Self {
        self.encryption = Some(InventoryEncryption::SseKms {
            key_id: key_id.into(),
        });
        self
    }

    pub fn without_encryption(mut self) -> Self {
        self.encryption = None;
        self
    }

    /// Report format, e.g. `CSV`.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Typed view of [`format`](Self::format); `None` when empty or unknown.
    pub fn format_kind(&self) -> Option<InventoryFormat> {
        self.format.parse().ok()
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// RAM role the service assumes to write into the destination bucket.
    pub fn role_arn(&self) -> &str {
        &self.role_arn
    }

    /// Destination bucket as a resource name, e.g. `acs:oss:::bucket`.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// KMS key id the reports are encrypted with, if any.
    pub fn encryption(&self) -> Option<&str> {
        self.encryption.as_ref().map(|e| e.key_id())
    }

    pub fn encryption_config(&self) -> Option<&InventoryEncryption> {
        self.encryption.as_ref()
    }

    /// Returns true if every attribute is zero-valued.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Decodes a `<Destination>` element.
    ///
    /// A missing `<OSSBucketDestination>` child yields the zero-valued
    /// destination; so does any missing attribute below it.
    pub fn from_xml<T: XmlTree>(destination: &T) -> OssBucketDestination {
        match find_child(destination, OSS_BUCKET_DESTINATION) {
            Some(v) => Self::from_bucket_destination_xml(v),
            None => OssBucketDestination::default(),
        }
    }

    /// Decodes an `<OSSBucketDestination>` element.
    pub fn from_bucket_destination_xml<T: XmlTree>(element: &T) -> OssBucketDestination {
        OssBucketDestination {
            format: get_text_default(element, "Format"),
            account_id: get_text_default(element, "AccountId"),
            role_arn: get_text_default(element, "RoleArn"),
            bucket: get_text_default(element, "Bucket"),
            prefix: get_text_default(element, "Prefix"),
            encryption: find_child(element, ENCRYPTION).and_then(InventoryEncryption::from_xml),
        }
    }

    /// Encodes as a `<Destination>` element.
    pub fn to_xml_node(&self) -> XmlNode {
        let mut dest = XmlNode::new(OSS_BUCKET_DESTINATION).children(vec![
            XmlNode::leaf("Format", &self.format),
            XmlNode::leaf("AccountId", &self.account_id),
            XmlNode::leaf("RoleArn", &self.role_arn),
            XmlNode::leaf("Bucket", &self.bucket),
            XmlNode::leaf("Prefix", &self.prefix),
        ]);
        if let Some(e) = &self.encryption {
            dest = dest.child(e.to_xml_node());
        }

        XmlNode::new(DESTINATION).child(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::xml::parse_document;

    fn decode(xml: &str) -> OssBucketDestination {
        OssBucketDestination::from_xml(&parse_document(xml.as_bytes()).unwrap())
    }

    #[test]
    fn test_full_destination() {
        let dest = decode(
            "<Destination><OSSBucketDestination>\
             <Format>CSV</Format>\
             <AccountId>123456789012</AccountId>\
             <RoleArn>acs:ram::123456789012:role/AliyunOSSRole</RoleArn>\
             <Bucket>acs:oss:::destination-bucket</Bucket>\
             <Prefix>prefix1</Prefix>\
             <Encryption><SSE-KMS><KeyId>keyId</KeyId></SSE-KMS></Encryption>\
             </OSSBucketDestination></Destination>",
        );
        assert_eq!(dest.format(), "CSV");
        assert_eq!(dest.format_kind(), Some(InventoryFormat::CSV));
        assert_eq!(dest.account_id(), "123456789012");
        assert_eq!(dest.role_arn(), "acs:ram::123456789012:role/AliyunOSSRole");
        assert_eq!(dest.bucket(), "acs:oss:::destination-bucket");
        assert_eq!(dest.prefix(), "prefix1");
        assert_eq!(dest.encryption(), Some("keyId"));
    }

    #[test]
    fn test_missing_bucket_destination() {
        assert!(decode("<Destination></Destination>").is_empty());
        assert!(decode("<Destination><Other/></Destination>").is_empty());
        assert!(decode("<Destination><OSSBucketDestination/></Destination>").is_empty());
    }

    #[test]
    fn test_encryption_absent_at_any_level() {
        for enc in [
            "",
            "<Encryption></Encryption>",
            "<Encryption><SSE-KMS></SSE-KMS></Encryption>",
            "<Encryption><SSE-KMS><KeyId></KeyId></SSE-KMS></Encryption>",
            "<Encryption><SSE-OSS/></Encryption>",
        ] {
            let dest = decode(&format!(
                "<Destination><OSSBucketDestination><Format>CSV</Format>{enc}\
                 </OSSBucketDestination></Destination>"
            ));
            assert_eq!(dest.format(), "CSV");
            assert_eq!(dest.encryption(), None, "case {enc:?}");
        }
    }

    #[test]
    fn test_to_xml_node_omits_absent_encryption() {
        let dest = OssBucketDestination::new()
            .with_format(InventoryFormat::CSV)
            .with_bucket("acs:oss:::b");
        let xml = dest.to_xml_node().to_xml_string().unwrap();
        assert!(xml.contains("<Destination><OSSBucketDestination><Format>CSV</Format>"));
        assert!(!xml.contains("Encryption"));

        let xml = dest
            .with_encryption("k1")
            .to_xml_node()
            .to_xml_string()
            .unwrap();
        assert!(xml.contains("<Encryption><SSE-KMS><KeyId>k1</KeyId></SSE-KMS></Encryption>"));
    }
}
