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

use crate::oss::builders::inventory_common::INVENTORY;
use crate::oss::error::Result;
use crate::oss::multimap_ext::{Multimap, MultimapExt};
use crate::oss::types::{OssRequest, ToOssRequest};
use crate::oss::utils::check_bucket_name;

/// Argument builder for the OSS list bucket inventory operation.
///
/// Pages after the first are requested with the `continuation_token` of the
/// previous result; see
/// [`ListBucketInventoryConfigurationResult::next_request`](crate::oss::inventory::ListBucketInventoryConfigurationResult::next_request).
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListBucketInventoryConfiguration {
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))]
    bucket: String,
    #[builder(default, setter(into))]
    continuation_token: Option<String>,
}

impl ListBucketInventoryConfiguration {
    pub fn continuation_token(&self) -> Option<&str> {
        self.continuation_token.as_deref()
    }
}

impl ToOssRequest for ListBucketInventoryConfiguration {
    fn to_oss_request(self) -> Result<OssRequest> {
        check_bucket_name(&self.bucket)?;

        let mut query_params = Multimap::new();
        query_params.add(INVENTORY, "");
        if let Some(v) = self.continuation_token.filter(|v| !v.is_empty()) {
            query_params.add("continuation-token", v);
        }
        if let Some(v) = self.extra_query_params {
            query_params.add_multimap(v);
        }

        Ok(OssRequest::builder()
            .method(Method::GET)
            .bucket(self.bucket)
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_oss_request() {
        let req = ListBucketInventoryConfiguration::builder()
            .bucket("examplebucket")
            .build()
            .to_oss_request()
            .unwrap();
        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.query_string(), "inventory");

        let req = ListBucketInventoryConfiguration::builder()
            .bucket("examplebucket")
            .continuation_token("token 1".to_string())
            .build()
            .to_oss_request()
            .unwrap();
        assert_eq!(req.query_string(), "continuation-token=token%201&inventory");

        // an empty token is the same as none
        let req = ListBucketInventoryConfiguration::builder()
            .bucket("examplebucket")
            .continuation_token(String::new())
            .build()
            .to_oss_request()
            .unwrap();
        assert_eq!(req.query_string(), "inventory");
    }
}
