//! Module that allows to (de-)serialize a `HashMap` with non-string keys with `serde`.
//!
//! JSON objects only allow string keys, so a map keyed by a tuple or struct cannot be
//! serialized directly with `serde_json`. This module represents such maps as a sequence of
//! `(key, value)` pairs instead.

use std::{collections::HashMap, hash::Hash};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wrapper that (de-)serializes the contained `HashMap` as a sequence of pairs.
///
/// Example:
/// ```ignore
/// serde_json::to_string_pretty(&PairsMap::from(map)).unwrap();
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairsMap<K, V>(
    #[serde(with = "super::generic_hashmap")]
    #[serde(bound(
        deserialize = "K: Hash + Eq, for<'de_k> K: Deserialize<'de_k>, for<'de_v> V: Deserialize<'de_v>",
        serialize = "K: Serialize, V: Serialize",
    ))]
    pub HashMap<K, V>,
);

impl<K, V> From<HashMap<K, V>> for PairsMap<K, V> {
    fn from(map: HashMap<K, V>) -> Self {
        Self(map)
    }
}

impl<K, V> From<PairsMap<K, V>> for HashMap<K, V> {
    fn from(val: PairsMap<K, V>) -> Self {
        val.0
    }
}

/// Serialize a `HashMap` with an arbitrary serializable key as a sequence of pairs.
pub fn serialize<K: Serialize, V: Serialize, S: Serializer>(
    map: &HashMap<K, V>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(map.iter())
}

/// Deserialize a `HashMap` with an arbitrary deserializable key from a sequence of pairs.
pub fn deserialize<'de, K: Deserialize<'de> + Eq + Hash, V: Deserialize<'de>, D>(
    deserializer: D,
) -> Result<HashMap<K, V>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<(K, V)>::deserialize(deserializer).map(|pairs| pairs.into_iter().collect())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tuple_keys_roundtrip() {
        let map: HashMap<(String, usize), f64> =
            HashMap::from([(("goodput".to_string(), 2), 917.3)]);
        let ser = serde_json::to_string(&PairsMap::from(map.clone())).unwrap();
        assert_eq!(ser, r#"[[["goodput",2],917.3]]"#);
        let de: HashMap<(String, usize), f64> =
            serde_json::from_str::<PairsMap<_, _>>(&ser).unwrap().into();
        assert_eq!(de, map);
    }
}
