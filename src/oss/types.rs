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

//! Core request/response types and trait definitions

use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

use crate::oss::error::Result;
use crate::oss::multimap_ext::{Multimap, MultimapExt};

/// Transport-independent description of one OSS bucket request.
///
/// Signing, endpoint resolution and sending are left to the caller; this only
/// carries what the inventory operations decide.
#[derive(Clone, Debug, TypedBuilder)]
pub struct OssRequest {
    #[builder(!default)] // force required
    method: Method,

    #[builder(setter(into))]
    bucket: String,

    #[builder(default)]
    query_params: Multimap,

    #[builder(default)]
    headers: Multimap,

    #[builder(default, setter(into))]
    body: Option<Bytes>,
}

impl OssRequest {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn query_params(&self) -> &Multimap {
        &self.query_params
    }

    pub fn headers(&self) -> &Multimap {
        &self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Returns the query string, e.g. `inventory&inventoryId=report1`.
    pub fn query_string(&self) -> String {
        self.query_params.to_query_string()
    }
}

/// Trait for converting a request builder into an [`OssRequest`].
///
/// Validation of bucket names, ids and request bodies happens here, so a
/// request that converts successfully is well-formed.
pub trait ToOssRequest: Sized {
    /// Consumes this request builder and returns an [`OssRequest`].
    fn to_oss_request(self) -> Result<OssRequest>;
}

/// Trait for converting a raw response body into a typed result.
pub trait FromOssResponse: Sized {
    /// Builds the typed result from the request that was sent and the body
    /// the transport received for it.
    fn from_oss_response(request: &OssRequest, body: Bytes) -> Result<Self>;
}

/// How strictly response documents are decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Undecodable documents and unexpected roots decode to zero-valued
    /// results. This is what the server-facing SDK has always done.
    #[default]
    Lenient,
    /// Undecodable documents and unexpected roots are reported as errors;
    /// missing or empty elements are still tolerated.
    Strict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder_defaults() {
        let req = OssRequest::builder()
            .method(Method::GET)
            .bucket("examplebucket")
            .build();
        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.bucket(), "examplebucket");
        assert!(req.query_params().is_empty());
        assert!(req.headers().is_empty());
        assert!(req.body().is_none());
        assert_eq!(req.query_string(), "");
    }

    #[test]
    fn test_parse_mode_default_is_lenient() {
        assert_eq!(ParseMode::default(), ParseMode::Lenient);
    }
}
