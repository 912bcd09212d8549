use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PayloadValue {
    Single(String),
    Many(Vec<String>),
}

impl PayloadValue {
    fn push(&mut self, value: String) {
        match self {
            PayloadValue::Single(first) => {
                let first = std::mem::take(first);
                *self = PayloadValue::Many(vec![first, value]);
            }
            PayloadValue::Many(values) => values.push(value),
        }
    }
}

/// Flat key → value(s) body handed to a submitter. A key seen more than once becomes a list.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct FormPayload(BTreeMap<String, PayloadValue>);

impl FormPayload {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.0.entry(key.into()) {
            Entry::Occupied(mut slot) => slot.get_mut().push(value),
            Entry::Vacant(slot) => {
                slot.insert(PayloadValue::Single(value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&PayloadValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K, V> FromIterator<(K, V)> for FormPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        let mut payload = FormPayload::default();
        for (key, value) in entries {
            payload.insert(key, value);
        }
        payload
    }
}
