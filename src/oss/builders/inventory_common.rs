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

use crate::oss::error::{Error, Result};
use crate::oss::multimap_ext::{Multimap, MultimapExt};

pub(crate) const INVENTORY: &str = "inventory";
pub(crate) const INVENTORY_ID: &str = "inventoryId";

pub(crate) fn check_inventory_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::InvalidInventoryId {
            id: id.to_string(),
            reason: "id cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Query parameters addressing one configuration: `inventory&inventoryId=<id>`.
pub(crate) fn inventory_query_params(extra: Option<Multimap>, id: String) -> Multimap {
    let mut query_params = Multimap::new();
    query_params.add(INVENTORY, "");
    query_params.add(INVENTORY_ID, id);
    if let Some(v) = extra {
        query_params.add_multimap(v);
    }
    query_params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_inventory_id() {
        assert!(check_inventory_id("report1").is_ok());
        assert!(matches!(
            check_inventory_id(""),
            Err(Error::InvalidInventoryId { .. })
        ));
    }

    #[test]
    fn test_inventory_query_params() {
        let q = inventory_query_params(None, "report 1".to_string());
        assert_eq!(q.to_query_string(), "inventory&inventoryId=report%201");

        let mut extra = Multimap::new();
        extra.add("x-oss-extra", "1");
        let q = inventory_query_params(Some(extra), "report1".to_string());
        assert_eq!(
            q.to_query_string(),
            "inventory&inventoryId=report1&x-oss-extra=1"
        );
    }
}
