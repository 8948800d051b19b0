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

//! Various utility and helper functions

use base64::engine::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use lazy_static::lazy_static;
use md5::compute as md5compute;
use regex::Regex;

use crate::oss::error::{Error, Result};
use crate::oss::xml::XmlTree;

/// Encodes data using base64 algorithm
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Computes MD5 hash of given data and encodes it as base64, as required by
/// the `Content-MD5` header.
pub fn md5sum_hash(data: &[u8]) -> String {
    b64encode(md5compute(data).as_slice())
}

/// Returns the first child element of `element` named exactly `tag`.
pub fn find_child<'a, T: XmlTree>(element: &'a T, tag: &str) -> Option<&'a T> {
    element.child_elements().find(|c| c.name() == tag)
}

/// Walks `path` from `element`, taking the first matching child at each
/// level. An empty path yields `element` itself.
pub fn find_path<'a, T: XmlTree>(element: &'a T, path: &[&str]) -> Option<&'a T> {
    match path.split_first() {
        None => Some(element),
        Some((tag, rest)) => find_path(find_child(element, tag)?, rest),
    }
}

/// Returns all children with given tag, in document order.
pub fn matching_children<'a, T: XmlTree>(
    element: &'a T,
    tag: &'a str,
) -> impl Iterator<Item = &'a T> + 'a {
    element.child_elements().filter(move |c| c.name() == tag)
}

/// Gets trimmed text of the element itself, `None` when it has no or only
/// blank text.
pub fn element_text<T: XmlTree>(element: &T) -> Option<String> {
    let text = element.text()?;
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Gets optional text value of given XML element for given tag.
///
/// Both a missing child and a child without text yield `None`.
pub fn get_text_option<T: XmlTree>(element: &T, tag: &str) -> Option<String> {
    find_child(element, tag).and_then(element_text)
}

/// Gets default text value of given XML element for given tag.
pub fn get_text_default<T: XmlTree>(element: &T, tag: &str) -> String {
    get_text_option(element, tag).unwrap_or_default()
}

/// Gets text at the end of a tag path, `None` if any level is missing or the
/// leaf is empty.
pub fn get_path_text_option<T: XmlTree>(element: &T, path: &[&str]) -> Option<String> {
    find_path(element, path).and_then(element_text)
}

/// Gets text at the end of a tag path, empty if any level is missing.
pub fn get_path_text_default<T: XmlTree>(element: &T, path: &[&str]) -> String {
    get_path_text_option(element, path).unwrap_or_default()
}

/// Parses the text of `tag` as a case-insensitive boolean; absent or
/// unparseable text is `false`.
pub fn get_bool_default<T: XmlTree>(element: &T, tag: &str) -> bool {
    get_text_option(element, tag)
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Validates given bucket name against the OSS naming rules.
pub fn check_bucket_name(bucket_name: &str) -> Result<()> {
    if bucket_name.trim().is_empty() {
        return Err(Error::InvalidBucketName(String::from(
            "bucket name cannot be empty",
        )));
    }

    if bucket_name.len() < 3 {
        return Err(Error::InvalidBucketName(String::from(
            "bucket name cannot be less than 3 characters",
        )));
    }

    if bucket_name.len() > 63 {
        return Err(Error::InvalidBucketName(String::from(
            "bucket name cannot be greater than 63 characters",
        )));
    }

    lazy_static! {
        static ref VALID_BUCKET_NAME_REGEX: Regex =
            Regex::new("^[a-z0-9][a-z0-9\\-]{1,61}[a-z0-9]$").unwrap();
    }

    if !VALID_BUCKET_NAME_REGEX.is_match(bucket_name) {
        return Err(Error::InvalidBucketName(format!(
            "bucket name '{bucket_name}' may only contain lowercase letters, digits and \
             hyphens, and must start and end with a letter or digit"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oss::xml::parse_document;

    const DOC: &[u8] = br#"<?xml version="1.0" ?>
        <Root>
          <Id> report1 </Id>
          <Empty></Empty>
          <Blank>
          </Blank>
          <Filter><Prefix>p</Prefix></Filter>
          <Flag>TRUE</Flag>
          <Bad>yes</Bad>
          <Field>a</Field>
          <Field></Field>
          <Field>c</Field>
        </Root>"#;

    #[test]
    fn test_get_text_option() {
        let root = parse_document(DOC).unwrap();
        assert_eq!(get_text_option(&root, "Id"), Some("report1".to_string()));
        assert_eq!(get_text_option(&root, "Empty"), None);
        assert_eq!(get_text_option(&root, "Blank"), None);
        assert_eq!(get_text_option(&root, "Missing"), None);
        // tag match is exact
        assert_eq!(get_text_option(&root, "id"), None);
        assert_eq!(get_text_default(&root, "Missing"), "");
    }

    #[test]
    fn test_path_lookup() {
        let root = parse_document(DOC).unwrap();
        assert_eq!(get_path_text_default(&root, &["Filter", "Prefix"]), "p");
        assert_eq!(get_path_text_default(&root, &["Filter", "Nope"]), "");
        assert_eq!(get_path_text_default(&root, &["Nope", "Prefix"]), "");
        assert!(find_path(&root, &[]).is_some());
    }

    #[test]
    fn test_get_bool_default() {
        let root = parse_document(DOC).unwrap();
        assert!(get_bool_default(&root, "Flag"));
        assert!(!get_bool_default(&root, "Bad"));
        assert!(!get_bool_default(&root, "Empty"));
        assert!(!get_bool_default(&root, "Missing"));
    }

    #[test]
    fn test_matching_children_keeps_order_and_empties() {
        let root = parse_document(DOC).unwrap();
        let fields: Vec<String> = matching_children(&root, "Field")
            .map(|e| element_text(e).unwrap_or_default())
            .collect();
        assert_eq!(fields, vec!["a", "", "c"]);
    }

    #[test]
    fn test_check_bucket_name() {
        assert!(check_bucket_name("destination-bucket").is_ok());
        assert!(check_bucket_name("abc").is_ok());
        assert!(check_bucket_name("").is_err());
        assert!(check_bucket_name("ab").is_err());
        assert!(check_bucket_name(&"a".repeat(64)).is_err());
        assert!(check_bucket_name("Upper-case").is_err());
        assert!(check_bucket_name("-leading").is_err());
        assert!(check_bucket_name("trailing-").is_err());
        assert!(check_bucket_name("dot.name").is_err());
    }

    #[test]
    fn test_md5sum_hash() {
        assert_eq!(md5sum_hash(b""), "1B2M2Y8AsgTpgAmY7PhCfg==");
        assert_eq!(md5sum_hash(b"abc"), "kAFQmDzST7DWlj99KOF/cg==");
    }
}
