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

use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

use crate::oss::builders::inventory_common::inventory_query_params;
use crate::oss::error::Result;
use crate::oss::inventory::InventoryConfiguration;
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::types::{OssRequest, ToOssRequest};
use crate::oss::utils::{check_bucket_name, md5sum_hash};

/// Argument builder for the OSS put bucket inventory operation.
///
/// The configuration id doubles as the `inventoryId` query parameter, so it
/// is taken from the configuration rather than passed separately.
#[derive(Clone, Debug, TypedBuilder)]
pub struct SetBucketInventoryConfiguration {
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))]
    bucket: String,
    #[builder(!default)]
    configuration: InventoryConfiguration,
}

impl SetBucketInventoryConfiguration {
    /// Builds one request per configuration, in input order.
    ///
    /// Stops at the first configuration that does not validate.
    pub fn for_each<I>(bucket: &str, configurations: I) -> Result<Vec<OssRequest>>
    where
        I: IntoIterator<Item = InventoryConfiguration>,
    {
        configurations
            .into_iter()
            .map(|configuration| {
                SetBucketInventoryConfiguration::builder()
                    .bucket(bucket)
                    .configuration(configuration)
                    .build()
                    .to_oss_request()
            })
            .collect()
    }
}

impl ToOssRequest for SetBucketInventoryConfiguration {
    fn to_oss_request(self) -> Result<OssRequest> {
        check_bucket_name(&self.bucket)?;
        self.configuration.validate()?;

        let body = Bytes::from(self.configuration.try_to_xml()?);

        let mut headers = Multimap::new();
        headers.add("Content-Type", "application/xml");
        headers.add("Content-MD5", md5sum_hash(&body));
        if let Some(v) = self.extra_headers {
            headers.add_multimap(v);
        }

        let query_params = inventory_query_params(
            self.extra_query_params,
            self.configuration.id().to_string(),
        );

        log::debug!(
            "put inventory configuration '{}' on bucket {}",
            self.configuration.id(),
            self.bucket
        );

        Ok(OssRequest::builder()
            .method(Method::PUT)
            .bucket(self.bucket)
            .query_params(query_params)
            .headers(headers)
            .body(body)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::error::Error;
    use crate::oss::inventory::OssBucketDestination;

    fn config(id: &str) -> InventoryConfiguration {
        InventoryConfiguration::new(id)
            .with_is_enabled(true)
            .with_destination(
                OssBucketDestination::new()
                    .with_format("CSV")
                    .with_role_arn("acs:ram::123456789012:role/AliyunOSSRole")
                    .with_bucket("acs:oss:::destination-bucket"),
            )
            .with_schedule("Daily")
            .with_included_object_versions("All")
    }

    #[test]
    fn test_to_oss_request() {
        let req = SetBucketInventoryConfiguration::builder()
            .bucket("examplebucket")
            .configuration(config("report1"))
            .build()
            .to_oss_request()
            .unwrap();

        assert_eq!(req.method(), &Method::PUT);
        assert_eq!(req.query_string(), "inventory&inventoryId=report1");
        assert_eq!(req.headers().get_first("Content-Type"), Some("application/xml"));

        let body = req.body().unwrap();
        assert_eq!(
            req.headers().get_first("Content-MD5"),
            Some(md5sum_hash(body).as_str())
        );
        assert!(body.starts_with(b"<?xml"));
    }

    #[test]
    fn test_extra_headers_are_merged() {
        let mut extra = Multimap::new();
        extra.add("x-oss-request-payer", "requester");
        let req = SetBucketInventoryConfiguration::builder()
            .extra_headers(extra)
            .bucket("examplebucket")
            .configuration(config("report1"))
            .build()
            .to_oss_request()
            .unwrap();
        assert_eq!(
            req.headers().get_first("x-oss-request-payer"),
            Some("requester")
        );
        assert_eq!(req.headers().get_first("Content-Type"), Some("application/xml"));
    }

    #[test]
    fn test_invalid_input() {
        let r = SetBucketInventoryConfiguration::builder()
            .bucket("Example_Bucket")
            .configuration(config("report1"))
            .build()
            .to_oss_request();
        assert!(matches!(r, Err(Error::InvalidBucketName(_))));

        let r = SetBucketInventoryConfiguration::builder()
            .bucket("examplebucket")
            .configuration(config("report1").with_schedule(""))
            .build()
            .to_oss_request();
        assert!(matches!(r, Err(Error::InvalidConfig(_))));

        let r = SetBucketInventoryConfiguration::builder()
            .bucket("examplebucket")
            .configuration(config("report\u{1b}1"))
            .build()
            .to_oss_request();
        assert!(matches!(r, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_for_each() {
        let reqs = SetBucketInventoryConfiguration::for_each(
            "examplebucket",
            vec![config("report1"), config("report2")],
        )
        .unwrap();
        let queries: Vec<String> = reqs.iter().map(|r| r.query_string()).collect();
        assert_eq!(
            queries,
            ["inventory&inventoryId=report1", "inventory&inventoryId=report2"]
        );

        let r = SetBucketInventoryConfiguration::for_each(
            "examplebucket",
            vec![config("report1"), config("")],
        );
        assert!(matches!(r, Err(Error::InvalidInventoryId { .. })));
    }
}
