use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use criterion::{Criterion, criterion_group, criterion_main};
use recordset::ingest::{records_from_path, IngestOptions};

fn tmp_file(ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("recordset-bench-{nanos}.{ext}"))
}

fn bench_read_csv(c: &mut Criterion) {
    let path = tmp_file("csv");
    let mut text = String::from("id,name,score,active\n");
    for i in 0..5_000 {
        text.push_str(&format!("{i},person_{i},{}.5,{}\n", i % 100, i % 2 == 0));
    }
    std::fs::write(&path, text).unwrap();

    c.bench_function("read_csv_5k", |b| {
        b.iter(|| records_from_path(&path, &IngestOptions::default()).unwrap())
    });

    let _ = std::fs::remove_file(&path);
}

fn bench_read_ndjson(c: &mut Criterion) {
    let path = tmp_file("ndjson");
    let mut text = String::new();
    for i in 0..5_000 {
        text.push_str(&format!(
            "{{\"id\":{i},\"name\":\"person_{i}\",\"active\":{}}}\n",
            i % 2 == 0
        ));
    }
    std::fs::write(&path, text).unwrap();

    c.bench_function("read_ndjson_5k", |b| {
        b.iter(|| records_from_path(&path, &IngestOptions::default()).unwrap())
    });

    let _ = std::fs::remove_file(&path);
}

criterion_group!(benches, bench_read_csv, bench_read_ndjson);
criterion_main!(benches);
