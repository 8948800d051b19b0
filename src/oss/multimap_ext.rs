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

use multimap::MultiMap;
use std::collections::BTreeMap;
use urlencoding::encode as url_encode;

/// Multimap for string key and string value
pub type Multimap = MultiMap<String, String>;

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Returns the first value stored for `key`, if any
    fn get_first(&self, key: &str) -> Option<&str>;

    /// Converts multimap to HTTP query string, keys sorted.
    ///
    /// Keys with an empty value are rendered bare (`?inventory`), which is how
    /// OSS sub-resources are addressed.
    fn to_query_string(&self) -> String;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            for value in values {
                self.insert(key.clone(), value);
            }
        }
    }

    fn get_first(&self, key: &str) -> Option<&str> {
        self.get(key).map(|v| v.as_str())
    }

    fn to_query_string(&self) -> String {
        let mut sorted: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (key, values) in self.iter_all() {
            sorted
                .entry(key.as_str())
                .or_default()
                .extend(values.iter().map(|s| s.as_str()));
        }

        let mut query = String::new();
        for (key, values) in sorted {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                if !value.is_empty() {
                    query.push('=');
                    query.push_str(&url_encode(value));
                }
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_query_string_sorted_and_bare_keys() {
        let mut m = Multimap::new();
        m.add("inventoryId", "report 1");
        m.add("inventory", "");
        assert_eq!(m.to_query_string(), "inventory&inventoryId=report%201");
    }

    #[test]
    fn test_add_multimap() {
        let mut m = Multimap::new();
        m.add("a", "1");
        let mut other = Multimap::new();
        other.add("a", "2");
        other.add("b", "3");
        m.add_multimap(other);
        assert_eq!(m.get_vec("a").unwrap().len(), 2);
        assert_eq!(m.get_first("b"), Some("3"));
        assert_eq!(m.get_first("c"), None);
    }
}
