//! The fluent record collection and its chainable verbs.
//!
//! A [`Collection`] wraps an ordered sequence of [`Record`]s and exposes
//! transformation methods that each return a new `Collection`, so exploratory
//! pipelines read as chains instead of loop code:
//!
//! ```rust
//! use recordset::{record, Collection};
//!
//! let people = Collection::new(vec![
//!     record!({"name": "Ada", "score": 98.5}),
//!     record!({"name": "Grace", "score": 87.25}),
//!     record!({"name": "Edsger", "score": 92.0}),
//! ]);
//!
//! let top = people
//!     .keep(|r| r["score"].as_f64().unwrap_or(0.0) >= 90.0)
//!     .sort(|r| r["score"].clone(), true)
//!     .head(1)?
//!     .into_records();
//! assert_eq!(top[0]["name"], "Ada");
//! # Ok::<(), recordset::Error>(())
//! ```
//!
//! Every verb leaves the source collection untouched; [`Collection::mutate`]
//! writes derived fields into fresh clones of the records, never through to
//! the input.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::record::{compare_values, Record};

/// An ordered sequence of [`Record`]s plus chainable transformation verbs.
///
/// Construct one from a `Vec<Record>` (via [`Collection::new`] or `From`),
/// from any record iterator (`collect::<Collection>()`), or through the
/// [`crate::ingest`] module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    records: Vec<Record>,
}

impl Collection {
    /// Create a collection that takes ownership of `records`.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the records in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Materialize the collection back into a plain `Vec<Record>`.
    ///
    /// This is the escape hatch from the fluent API; no further chaining.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Iterate the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Keep only the records for which `predicate` returns `true`.
    ///
    /// Chaining `keep` calls composes a logical AND. The source collection is
    /// unchanged.
    ///
    /// ```rust
    /// use recordset::{record, Collection};
    ///
    /// let c = Collection::new(vec![
    ///     record!({"a": 1}), record!({"a": 2}), record!({"a": 3}), record!({"a": 4}),
    /// ]);
    /// let kept = c.keep(|r| r["a"].as_i64().is_some_and(|a| a >= 3));
    /// assert_eq!(kept.into_records(), vec![record!({"a": 3}), record!({"a": 4})]);
    /// ```
    pub fn keep<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Record) -> bool,
    {
        let records = self
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect();
        Self { records }
    }

    /// Keep only the records for which **all** predicates return `true`.
    ///
    /// Each predicate is applied as an independent full filter pass, in the
    /// order given; the net effect is the intersection.
    pub fn keep_all(&self, predicates: &[&dyn Fn(&Record) -> bool]) -> Self {
        let mut records = self.records.clone();
        for predicate in predicates {
            records.retain(|record| predicate(record));
        }
        Self { records }
    }

    /// The first `min(n, len)` records, in original order.
    ///
    /// `n = 0` yields an empty collection; `n` greater than the size yields
    /// the whole collection. Fails with [`Error::InvalidCount`] if `n` is
    /// negative, leaving the source untouched.
    pub fn head(&self, n: i64) -> Result<Self> {
        let n = self.checked_count(n)?;
        Ok(Self {
            records: self.records[..n].to_vec(),
        })
    }

    /// The last `min(n, len)` records, in original forward order.
    ///
    /// The result reads in the same order as the source, with the
    /// earliest-of-the-last-`n` first; for `n >= 1` the final source record
    /// is always included, and `tail(len)` returns the whole collection.
    /// Same count validation as [`Collection::head`].
    pub fn tail(&self, n: i64) -> Result<Self> {
        let n = self.checked_count(n)?;
        let start = self.records.len() - n;
        Ok(Self {
            records: self.records[start..].to_vec(),
        })
    }

    fn checked_count(&self, n: i64) -> Result<usize> {
        if n < 0 {
            return Err(Error::InvalidCount(n));
        }
        Ok((n as usize).min(self.records.len()))
    }

    /// Restrict every record to exactly `keys`, in the order given.
    ///
    /// Fails with [`Error::KeyNotFound`] if a requested key is absent from
    /// any record; there is no default/fill behavior.
    ///
    /// ```rust
    /// use recordset::{record, Collection};
    ///
    /// let c = Collection::new(vec![record!({"a": 1, "b": 2, "c": 3})]);
    /// let projected = c.select(&["c", "a"])?;
    /// let keys: Vec<&str> = projected.records()[0].keys().map(String::as_str).collect();
    /// assert_eq!(keys, vec!["c", "a"]);
    /// # Ok::<(), recordset::Error>(())
    /// ```
    pub fn select(&self, keys: &[&str]) -> Result<Self> {
        let mut records = Vec::with_capacity(self.records.len());
        for (index, record) in self.records.iter().enumerate() {
            let mut projected = Record::new();
            for &key in keys {
                match record.get(key) {
                    Some(value) => {
                        projected.insert(key.to_string(), value.clone());
                    }
                    None => {
                        return Err(Error::KeyNotFound {
                            index,
                            key: key.to_string(),
                        });
                    }
                }
            }
            records.push(projected);
        }
        Ok(Self { records })
    }

    /// Write derived fields into every record, in assignment order.
    ///
    /// Each record is cloned first and assignments are applied to the clone
    /// against its current state, so later assignments in the same call
    /// observe fields written by earlier ones. The source collection — and
    /// any data the caller still holds — is never written through.
    ///
    /// ```rust
    /// use recordset::{record, Assignments, Collection};
    /// use recordset::json;
    ///
    /// let c = Collection::new(vec![record!({"a": 2, "b": 3})]);
    /// let derived = c.mutate(
    ///     &Assignments::new()
    ///         .set("sum", |r| json!(r["a"].as_i64().unwrap() + r["b"].as_i64().unwrap()))
    ///         .set("double_sum", |r| json!(r["sum"].as_i64().unwrap() * 2)),
    /// );
    /// assert_eq!(derived.records()[0]["double_sum"], 10);
    /// ```
    pub fn mutate(&self, assignments: &Assignments) -> Self {
        let records = self
            .records
            .iter()
            .map(|record| {
                let mut updated = record.clone();
                for (field, derive) in &assignments.fields {
                    let value = derive(&updated);
                    updated.insert(field.clone(), value);
                }
                updated
            })
            .collect();
        Self { records }
    }

    /// Write a single derived field into every record.
    ///
    /// Shorthand for [`Collection::mutate`] with one assignment.
    pub fn derive<F>(&self, field: impl Into<String>, mut func: F) -> Self
    where
        F: FnMut(&Record) -> Value,
    {
        let field = field.into();
        let records = self
            .records
            .iter()
            .map(|record| {
                let mut updated = record.clone();
                let value = func(&updated);
                updated.insert(field.clone(), value);
                updated
            })
            .collect();
        Self { records }
    }

    /// Reorder the records by the value `key` extracts from each one.
    ///
    /// Ascending under [`compare_values`], or descending when `reverse` is
    /// true. The sort is stable either way: records with equal keys retain
    /// their relative source order. `key` is called once per record.
    pub fn sort<K>(&self, mut key: K, reverse: bool) -> Self
    where
        K: FnMut(&Record) -> Value,
    {
        let mut keyed: Vec<(Value, Record)> = self
            .records
            .iter()
            .map(|record| (key(record), record.clone()))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| {
            let ordering = compare_values(a, b);
            if reverse { ordering.reverse() } else { ordering }
        });
        Self {
            records: keyed.into_iter().map(|(_, record)| record).collect(),
        }
    }
}

impl From<Vec<Record>> for Collection {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Collection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Collection {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// An ordered set of field assignments for [`Collection::mutate`].
///
/// Assignments apply in insertion order; each derivation function receives
/// the record's current state, including fields written by earlier
/// assignments in the same set.
#[derive(Default)]
pub struct Assignments {
    fields: Vec<(String, Box<dyn Fn(&Record) -> Value>)>,
}

impl Assignments {
    /// Create an empty assignment set.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add an assignment: `field` is set to the value `derive` computes.
    ///
    /// Overwrites the field if a record already carries it.
    pub fn set<F>(mut self, field: impl Into<String>, derive: F) -> Self
    where
        F: Fn(&Record) -> Value + 'static,
    {
        self.fields.push((field.into(), Box::new(derive)));
        self
    }
}

impl fmt::Debug for Assignments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.fields.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("Assignments").field("fields", &names).finish()
    }
}
