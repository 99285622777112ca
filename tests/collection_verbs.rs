use recordset::{json, record, Assignments, Collection, Error, Record};

fn indexed(len: usize) -> Collection {
    (0..len).map(|i| record!({"i": i})).collect()
}

fn index_of(record: &Record) -> i64 {
    record["i"].as_i64().unwrap()
}

#[test]
fn head_and_tail_return_min_n_len_records() {
    let c = indexed(10);
    for n in 0..=13_i64 {
        let expected = (n as usize).min(10);
        assert_eq!(c.head(n).unwrap().len(), expected, "head({n})");
        assert_eq!(c.tail(n).unwrap().len(), expected, "tail({n})");
    }
}

#[test]
fn head_last_record_is_input_index_n_minus_1() {
    let c = indexed(10);
    for n in 1..=10_i64 {
        let taken = c.head(n).unwrap();
        let last = taken.records().last().unwrap();
        assert_eq!(index_of(last), n - 1);
    }
}

#[test]
fn tail_spans_the_last_n_records_in_forward_order() {
    let c = indexed(10);
    for n in 1..=10_i64 {
        let taken = c.tail(n).unwrap();
        let records = taken.records();
        // First record is input index len - n; last is always the final input record.
        assert_eq!(index_of(&records[0]), 10 - n);
        assert_eq!(index_of(records.last().unwrap()), 9);
        // Forward order throughout.
        for pair in records.windows(2) {
            assert_eq!(index_of(&pair[1]), index_of(&pair[0]) + 1);
        }
    }
}

#[test]
fn tail_of_len_is_the_whole_collection() {
    let c = indexed(10);
    assert_eq!(c.tail(10).unwrap(), c);
}

#[test]
fn head_and_tail_singletons() {
    let c = indexed(10);
    assert_eq!(c.tail(1).unwrap().into_records(), vec![record!({"i": 9})]);
    assert_eq!(c.head(1).unwrap().into_records(), vec![record!({"i": 0})]);
}

#[test]
fn negative_counts_fail_and_leave_the_source_intact() {
    let c = indexed(4);
    assert!(matches!(c.head(-1).unwrap_err(), Error::InvalidCount(-1)));
    assert!(matches!(c.tail(-9).unwrap_err(), Error::InvalidCount(-9)));
    assert_eq!(c, indexed(4));
}

#[test]
fn keep_retains_exactly_the_matching_records() {
    let c = Collection::new(vec![
        record!({"a": 1}),
        record!({"a": 2}),
        record!({"a": 3}),
        record!({"a": 4}),
    ]);
    let kept = c.keep(|r| r["a"].as_i64().is_some_and(|a| a >= 3));

    assert_eq!(
        kept.into_records(),
        vec![record!({"a": 3}), record!({"a": 4})]
    );

    // Every retained record satisfies the predicate; every dropped one fails it.
    let c = indexed(20);
    let even = c.keep(|r| index_of(r) % 2 == 0);
    assert!(even.iter().all(|r| index_of(r) % 2 == 0));
    assert_eq!(c.len() - even.len(), 10);
}

#[test]
fn select_yields_exactly_the_requested_keys_in_order() {
    let c = Collection::new(vec![
        record!({"a": 1, "b": 2, "c": 3}),
        record!({"c": 30, "a": 10, "b": 20, "d": 40}),
    ]);

    let projected = c.select(&["b", "a"]).unwrap();
    for record in &projected {
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
    assert_eq!(projected.records()[1]["b"], json!(20));
}

#[test]
fn select_missing_key_names_key_and_record_index() {
    let c = Collection::new(vec![
        record!({"a": 1, "b": 2}),
        record!({"a": 2, "b": 3}),
        record!({"a": 3}),
    ]);

    let err = c.select(&["a", "b"]).unwrap_err();
    match err {
        Error::KeyNotFound { index, key } => {
            assert_eq!(index, 2);
            assert_eq!(key, "b");
        }
        other => panic!("expected KeyNotFound, got {other:?}"),
    }
    assert!(c.select(&["a", "b"]).unwrap_err().to_string().contains("'b'"));
}

#[test]
fn mutate_later_assignments_observe_earlier_ones() {
    let c = Collection::new(vec![record!({"units": 12, "price": 2.0})]);
    let out = c.mutate(
        &Assignments::new()
            .set("revenue", |r| {
                json!(r["units"].as_i64().unwrap() as f64 * r["price"].as_f64().unwrap())
            })
            .set("discounted", |r| json!(r["revenue"].as_f64().unwrap() * 0.9)),
    );

    assert_eq!(out.records()[0]["revenue"], json!(24.0));
    assert_eq!(out.records()[0]["discounted"], json!(21.6));
    // Inputs never gain the derived fields.
    assert_eq!(c.records()[0], record!({"units": 12, "price": 2.0}));
}

#[test]
fn sort_orders_by_key_and_is_stable_both_ways() {
    let c = Collection::new(vec![
        record!({"g": 2, "pos": 0}),
        record!({"g": 1, "pos": 1}),
        record!({"g": 2, "pos": 2}),
        record!({"g": 1, "pos": 3}),
        record!({"g": 3, "pos": 4}),
    ]);

    let asc = c.sort(|r| r["g"].clone(), false);
    let keys: Vec<i64> = asc.iter().map(|r| r["g"].as_i64().unwrap()).collect();
    assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    let pos: Vec<i64> = asc.iter().map(|r| r["pos"].as_i64().unwrap()).collect();
    assert_eq!(pos, vec![1, 3, 0, 2, 4]);

    let desc = c.sort(|r| r["g"].clone(), true);
    let pos: Vec<i64> = desc.iter().map(|r| r["pos"].as_i64().unwrap()).collect();
    assert_eq!(pos, vec![4, 0, 2, 1, 3]);
}

#[test]
fn sort_handles_mixed_value_types() {
    let c = Collection::new(vec![
        record!({"v": "text"}),
        record!({"v": null}),
        record!({"v": 3}),
        record!({"v": true}),
    ]);

    let sorted = c.sort(|r| r["v"].clone(), false);
    let values: Vec<_> = sorted.iter().map(|r| r["v"].clone()).collect();
    assert_eq!(values, vec![json!(null), json!(true), json!(3), json!("text")]);
}

#[test]
fn chained_pipeline_end_to_end() {
    let sales = Collection::new(vec![
        record!({"region": "north", "units": 12, "price": 4.0}),
        record!({"region": "south", "units": 3,  "price": 4.0}),
        record!({"region": "east",  "units": 9,  "price": 3.0}),
        record!({"region": "north", "units": 7,  "price": 2.5}),
    ]);

    let report = sales
        .keep(|r| r["units"].as_i64().is_some_and(|u| u >= 5))
        .mutate(&Assignments::new().set("revenue", |r| {
            json!(r["units"].as_i64().unwrap() as f64 * r["price"].as_f64().unwrap())
        }))
        .sort(|r| r["revenue"].clone(), true)
        .select(&["region", "revenue"])
        .unwrap()
        .head(2)
        .unwrap()
        .into_records();

    assert_eq!(
        report,
        vec![
            record!({"region": "north", "revenue": 48.0}),
            record!({"region": "east",  "revenue": 27.0}),
        ]
    );
}

#[test]
fn collection_compares_to_plain_records() {
    let records = vec![record!({"a": 1}), record!({"a": 2})];
    let c = Collection::new(records.clone());

    assert_eq!(c.records(), records.as_slice());
    assert_eq!(c.clone().into_records(), records);
    assert_eq!(c, Collection::from(records));
}

#[test]
fn collection_serde_round_trip() {
    let c = Collection::new(vec![
        record!({"id": 1, "tags": ["x", "y"]}),
        record!({"id": 2, "nested": {"ok": true}}),
    ]);

    let text = serde_json::to_string(&c).unwrap();
    let back: Collection = serde_json::from_str(&text).unwrap();
    assert_eq!(back, c);
    // Transparent representation: just the JSON array of records.
    assert!(text.starts_with('['));
    assert!(text.ends_with(']'));
}
