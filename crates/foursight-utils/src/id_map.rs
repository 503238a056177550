pub trait ItemId {
    type IdType;

    fn id(&self) -> Self::IdType;
}

/// Serializes a keyed map as a plain list of its values and reads it back keyed by [`ItemId::id`].
///
/// Configuration files list their items as sequences, duplicate ids are rejected while reading.
#[allow(clippy::module_inception)]
pub mod id_map {
    use super::ItemId;
    use serde::Serialize;
    use serde::de::{Deserialize, Deserializer, Error};
    use serde::ser::Serializer;
    use std::collections::HashSet;
    use std::fmt::Display;
    use std::hash::Hash;

    pub fn serialize<'a, S, T: ItemId + Serialize + 'a, I: IntoIterator<Item = (&'a T::IdType, &'a T)>>(
        map: I,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(map.into_iter().map(|(_, v)| v))
    }

    pub fn deserialize<'de, D, T, O>(deserializer: D) -> Result<O, D::Error>
    where
        D: Deserializer<'de>,
        T: ItemId + Deserialize<'de>,
        T::IdType: Eq + Hash + Clone + Display,
        O: FromIterator<(T::IdType, T)>,
    {
        let elements = Vec::<T>::deserialize(deserializer)?;
        let mut seen = HashSet::with_capacity(elements.len());
        for element in &elements {
            let id = element.id();
            if !seen.insert(id.clone()) {
                return Err(D::Error::custom(format!("duplicate id `{id}`")));
            }
        }
        Ok(elements.into_iter().map(|v| (v.id(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Catalog {
        #[serde(with = "id_map")]
        posts: IndexMap<String, Post>,
    }

    #[derive(Serialize, Deserialize)]
    struct Post {
        slug: String,
        read_time: u32,
    }

    impl ItemId for Post {
        type IdType = String;

        fn id(&self) -> Self::IdType {
            self.slug.clone()
        }
    }

    #[test]
    fn test_keeps_list_order() {
        let catalog: Catalog = serde_json::from_str(
            r#"{
            "posts": [
                {"slug": "pipelines", "read_time": 8},
                {"slug": "governance", "read_time": 5}
            ]
        }"#,
        )
        .unwrap();
        let slugs = catalog.posts.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(slugs, ["pipelines", "governance"]);
        assert_eq!(catalog.posts["governance"].read_time, 5);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let Err(err) = serde_json::from_str::<Catalog>(
            r#"{"posts": [{"slug": "a", "read_time": 1}, {"slug": "a", "read_time": 2}]}"#,
        ) else {
            panic!("expected duplicate id error");
        };
        assert!(err.to_string().contains("duplicate id `a`"));
    }

    #[test]
    fn test_serializes_as_list() {
        let posts = IndexMap::from([(
            "pipelines".to_owned(),
            Post {
                slug: "pipelines".to_owned(),
                read_time: 8,
            },
        )]);
        let json = serde_json::to_string(&Catalog { posts }).unwrap();
        assert_eq!(json, r#"{"posts":[{"slug":"pipelines","read_time":8}]}"#);
    }
}
