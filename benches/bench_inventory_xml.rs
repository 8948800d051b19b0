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

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use oss_inventory::oss::inventory::{
    InventoryConfiguration, InventoryOptionalField, OssBucketDestination, decode_list,
    decode_single, encode,
};

fn report(id: String) -> InventoryConfiguration {
    InventoryConfiguration::new(id)
        .with_is_enabled(true)
        .with_prefix("filterPrefix")
        .with_destination(
            OssBucketDestination::new()
                .with_format("CSV")
                .with_account_id("123456789012")
                .with_role_arn("acs:ram::123456789012:role/AliyunOSSRole")
                .with_bucket("acs:oss:::destination-bucket")
                .with_prefix("prefix1")
                .with_encryption("keyId"),
        )
        .with_schedule("Daily")
        .with_included_object_versions("All")
        .with_optional_fields(InventoryOptionalField::ALL)
}

fn list_document(count: usize) -> Vec<u8> {
    let mut xml = String::from("<ListInventoryConfigurationsResult>");
    for i in 0..count {
        let body = report(format!("report{i}")).to_xml();
        // drop the declaration of each embedded document
        let start = body.find("<InventoryConfiguration>").unwrap_or(0);
        xml.push_str(&body[start..]);
    }
    xml.push_str("<IsTruncated>true</IsTruncated>");
    xml.push_str("<NextContinuationToken>98</NextContinuationToken>");
    xml.push_str("</ListInventoryConfigurationsResult>");
    xml.into_bytes()
}

fn bench_inventory_xml(c: &mut Criterion) {
    let config = report("report1".to_string());
    let single = encode(&config);

    c.bench_function("encode inventory configuration", |b| b.iter(|| encode(&config)));
    c.bench_function("decode inventory configuration", |b| {
        b.iter(|| decode_single(&single))
    });

    for count in [1, 10, 100] {
        let data = list_document(count);

        let mut group = c.benchmark_group(format!("decode_list_{count}"));
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_function("decode_list", |b| b.iter(|| decode_list(&data)));
        group.finish();
    }
}

criterion_group!(benches, bench_inventory_xml);
criterion_main!(benches);
