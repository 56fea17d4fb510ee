//! Aggregation pipeline
//!
//! A small stage language covering the read aggregations the server needs:
//! match, unwind, group (count / push root), sort, limit and an
//! array slice projection. Backends that cannot run a pipeline natively
//! fetch the leading `Match` and hand the rest to [`evaluate`].

use std::cmp::Ordering;
use std::collections::HashMap;

use serde_json::Value;

use super::store::{Document, Filter, StoreError, StoreResult, lookup};

/// Field holding the group key in grouped output documents
pub const GROUP_KEY: &str = "_id";

/// Group accumulator
#[derive(Debug, Clone, PartialEq)]
pub enum Accumulator {
    /// Number of documents in the group
    Count,
    /// The grouped documents themselves, in input order
    PushRoot,
}

/// Group key
#[derive(Debug, Clone, PartialEq)]
pub enum GroupKey {
    /// Single bucket over the whole input; key is `null`
    All,
    /// One bucket per distinct value of a field path
    Field(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    Match(Filter),
    /// Emit one document per element of an array field, the field replaced
    /// by the element. Missing, null and empty arrays emit nothing.
    Unwind(String),
    Group {
        key: GroupKey,
        fields: Vec<(String, Accumulator)>,
    },
    /// Stable sort; ties keep input order
    Sort { field: String, descending: bool },
    Limit(usize),
    /// Replace an array field with `[skip, skip + take)`
    Slice {
        field: String,
        skip: usize,
        take: usize,
    },
}

/// Ordered list of stages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn matching(self, filter: Filter) -> Self {
        self.stage(Stage::Match(filter))
    }

    pub fn unwind(self, field: impl Into<String>) -> Self {
        self.stage(Stage::Unwind(field.into()))
    }

    pub fn group(self, key: GroupKey, fields: Vec<(&str, Accumulator)>) -> Self {
        let fields = fields
            .into_iter()
            .map(|(name, acc)| (name.to_string(), acc))
            .collect();
        self.stage(Stage::Group { key, fields })
    }

    pub fn sort_desc(self, field: impl Into<String>) -> Self {
        self.stage(Stage::Sort {
            field: field.into(),
            descending: true,
        })
    }

    pub fn limit(self, n: usize) -> Self {
        self.stage(Stage::Limit(n))
    }

    pub fn slice(self, field: impl Into<String>, skip: usize, take: usize) -> Self {
        self.stage(Stage::Slice {
            field: field.into(),
            skip,
            take,
        })
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Split off a leading `Match` so a backend can push it down as a query
    pub fn split_leading_match(&self) -> (Filter, &[Stage]) {
        match self.stages.split_first() {
            Some((Stage::Match(filter), rest)) => (filter.clone(), rest),
            _ => (Filter::all(), &self.stages),
        }
    }
}

/// Run stages over an in-memory document sequence
pub fn evaluate(docs: Vec<Document>, stages: &[Stage]) -> StoreResult<Vec<Document>> {
    stages.iter().try_fold(docs, |docs, stage| apply(docs, stage))
}

fn apply(docs: Vec<Document>, stage: &Stage) -> StoreResult<Vec<Document>> {
    match stage {
        Stage::Match(filter) => Ok(docs.into_iter().filter(|d| filter.matches(d)).collect()),
        Stage::Unwind(field) => unwind(docs, field),
        Stage::Group { key, fields } => group(docs, key, fields),
        Stage::Sort { field, descending } => {
            let mut docs = docs;
            docs.sort_by(|a, b| {
                let ord = compare(lookup(a, field), lookup(b, field));
                if *descending { ord.reverse() } else { ord }
            });
            Ok(docs)
        }
        Stage::Limit(n) => Ok(docs.into_iter().take(*n).collect()),
        Stage::Slice { field, skip, take } => docs
            .into_iter()
            .map(|mut doc| {
                match doc.get_mut(field.as_str()) {
                    Some(Value::Array(items)) => {
                        let kept: Vec<Value> =
                            items.drain(..).skip(*skip).take(*take).collect();
                        *items = kept;
                    }
                    Some(_) => {
                        return Err(StoreError::Pipeline(format!(
                            "slice target '{field}' is not an array"
                        )));
                    }
                    None => {}
                }
                Ok(doc)
            })
            .collect(),
    }
}

fn unwind(docs: Vec<Document>, field: &str) -> StoreResult<Vec<Document>> {
    if field.contains('.') {
        return Err(StoreError::Pipeline(format!(
            "unwind expects a top-level field, got '{field}'"
        )));
    }
    let mut out = Vec::new();
    for doc in docs {
        match doc.get(field) {
            Some(Value::Array(items)) => {
                for item in items {
                    let mut copy = doc.clone();
                    copy.insert(field.to_string(), item.clone());
                    out.push(copy);
                }
            }
            None | Some(Value::Null) => {}
            // non-array values unwind to themselves
            Some(_) => out.push(doc),
        }
    }
    Ok(out)
}

fn group(
    docs: Vec<Document>,
    key: &GroupKey,
    fields: &[(String, Accumulator)],
) -> StoreResult<Vec<Document>> {
    // buckets keep first-seen order
    let mut buckets: Vec<(Value, Vec<Document>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for doc in docs {
        let key_value = match key {
            GroupKey::All => Value::Null,
            GroupKey::Field(path) => lookup(&doc, path).cloned().unwrap_or(Value::Null),
        };
        let hash_key = key_value.to_string();
        match index.get(&hash_key) {
            Some(&i) => buckets[i].1.push(doc),
            None => {
                index.insert(hash_key, buckets.len());
                buckets.push((key_value, vec![doc]));
            }
        }
    }

    let mut out = Vec::with_capacity(buckets.len());
    for (key_value, members) in buckets {
        let mut grouped = Document::new();
        grouped.insert(GROUP_KEY.to_string(), key_value);
        for (name, acc) in fields {
            let value = match acc {
                Accumulator::Count => Value::from(members.len() as u64),
                Accumulator::PushRoot => Value::Array(
                    members.iter().cloned().map(Value::Object).collect(),
                ),
            };
            grouped.insert(name.clone(), value);
        }
        out.push(grouped);
    }
    Ok(out)
}

/// Total order over optional JSON values: missing < null < bool < number < string
fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(v: Option<&Value>) -> u8 {
        match v {
            None => 0,
            Some(Value::Null) => 1,
            Some(Value::Bool(_)) => 2,
            Some(Value::Number(_)) => 3,
            Some(Value::String(_)) => 4,
            Some(_) => 5,
        }
    }
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn docs(values: Vec<Value>) -> Vec<Document> {
        values
            .into_iter()
            .map(|v| v.as_object().cloned().unwrap())
            .collect()
    }

    #[test]
    fn test_group_all_count_and_push() {
        let input = docs(vec![json!({"n": 1}), json!({"n": 2}), json!({"n": 3})]);
        let pipeline = Pipeline::new().group(
            GroupKey::All,
            vec![("total_count", Accumulator::Count), ("items", Accumulator::PushRoot)],
        );
        let out = evaluate(input, pipeline.stages()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0]["total_count"], json!(3));
        assert_eq!(out[0]["items"].as_array().unwrap().len(), 3);
        assert_eq!(out[0][GROUP_KEY], Value::Null);
    }

    #[test]
    fn test_group_all_on_empty_input_emits_nothing() {
        let pipeline = Pipeline::new().group(GroupKey::All, vec![("c", Accumulator::Count)]);
        assert!(evaluate(Vec::new(), pipeline.stages()).unwrap().is_empty());
    }

    #[test]
    fn test_slice_past_end_is_empty() {
        let input = docs(vec![json!({"items": [1, 2, 3]})]);
        let out = evaluate(input.clone(), Pipeline::new().slice("items", 1, 5).stages()).unwrap();
        assert_eq!(out[0]["items"], json!([2, 3]));
        let out = evaluate(input, Pipeline::new().slice("items", 10, 5).stages()).unwrap();
        assert_eq!(out[0]["items"], json!([]));
    }

    #[test]
    fn test_unwind_group_sort_limit_ranking() {
        let input = docs(vec![
            json!({"items": [{"food_id": "c"}, {"food_id": "a"}]}),
            json!({"items": [{"food_id": "b"}, {"food_id": "a"}]}),
            json!({"items": [{"food_id": "b"}, {"food_id": "a"}]}),
            json!({"items": []}),
            json!({}),
        ]);
        let pipeline = Pipeline::new()
            .unwind("items")
            .group(
                GroupKey::Field("items.food_id".into()),
                vec![("total_orders", Accumulator::Count)],
            )
            .sort_desc("total_orders")
            .limit(5);
        let out = evaluate(input, pipeline.stages()).unwrap();
        let ids: Vec<&str> = out.iter().map(|d| d[GROUP_KEY].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(out[0]["total_orders"], json!(3));
    }

    #[test]
    fn test_sort_desc_is_stable_on_ties() {
        let input = docs(vec![
            json!({"k": "first", "n": 1}),
            json!({"k": "second", "n": 1}),
            json!({"k": "top", "n": 2}),
        ]);
        let out = evaluate(input, Pipeline::new().sort_desc("n").stages()).unwrap();
        let keys: Vec<&str> = out.iter().map(|d| d["k"].as_str().unwrap()).collect();
        assert_eq!(keys, vec!["top", "first", "second"]);
    }

    #[test]
    fn test_split_leading_match() {
        let pipeline = Pipeline::new()
            .matching(Filter::eq("order_id", "o1"))
            .limit(1);
        let (filter, rest) = pipeline.split_leading_match();
        assert_eq!(filter, Filter::eq("order_id", "o1"));
        assert_eq!(rest.len(), 1);

        let no_match = Pipeline::new().limit(1);
        let (filter, rest) = no_match.split_leading_match();
        assert!(filter.is_empty());
        assert_eq!(rest.len(), 1);
    }
}
