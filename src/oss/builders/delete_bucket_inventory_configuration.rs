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

use http::Method;
use typed_builder::TypedBuilder;

use crate::oss::builders::inventory_common::{check_inventory_id, inventory_query_params};
use crate::oss::error::Result;
use crate::oss::multimap_ext::Multimap;
use crate::oss::types::{OssRequest, ToOssRequest};
use crate::oss::utils::check_bucket_name;

/// Argument builder for the OSS delete bucket inventory operation.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteBucketInventoryConfiguration {
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))]
    bucket: String,
    #[builder(setter(into))]
    id: String,
}

impl DeleteBucketInventoryConfiguration {
    /// Builds one delete request per id, in input order.
    ///
    /// Stops at the first empty id.
    pub fn for_each<I, S>(bucket: &str, ids: I) -> Result<Vec<OssRequest>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ids.into_iter()
            .map(|id| {
                DeleteBucketInventoryConfiguration::builder()
                    .bucket(bucket)
                    .id(id)
                    .build()
                    .to_oss_request()
            })
            .collect()
    }
}

impl ToOssRequest for DeleteBucketInventoryConfiguration {
    fn to_oss_request(self) -> Result<OssRequest> {
        check_bucket_name(&self.bucket)?;
        check_inventory_id(&self.id)?;

        Ok(OssRequest::builder()
            .method(Method::DELETE)
            .bucket(self.bucket)
            .query_params(inventory_query_params(self.extra_query_params, self.id))
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::error::Error;

    #[test]
    fn test_for_each() {
        let reqs =
            DeleteBucketInventoryConfiguration::for_each("examplebucket", ["report1", "report2"])
                .unwrap();
        assert_eq!(reqs.len(), 2);
        assert!(reqs.iter().all(|r| r.method() == Method::DELETE));
        assert_eq!(reqs[1].query_string(), "inventory&inventoryId=report2");

        let r = DeleteBucketInventoryConfiguration::for_each("examplebucket", ["report1", ""]);
        assert!(matches!(r, Err(Error::InvalidInventoryId { .. })));

        let r = DeleteBucketInventoryConfiguration::for_each("ab", ["report1"]);
        assert!(matches!(r, Err(Error::InvalidBucketName(_))));
    }
}
