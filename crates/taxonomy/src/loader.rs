use crate::error::{Result, TaxonomyError};
use crate::types::{Cluster, Silo, Taxonomy};
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::fs;
use std::marker::PhantomData;
use std::path::Path;

impl Taxonomy {
    /// Read and parse a taxonomy file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TaxonomyError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let taxonomy = Self::from_json_str(&text)?;
        log::info!(
            "Loaded taxonomy {}: {} silos, {} clusters, {} required nodes",
            path.display(),
            taxonomy.silos().len(),
            taxonomy.cluster_count(),
            taxonomy.required_node_count()
        );
        Ok(taxonomy)
    }

    /// Parse a taxonomy from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: Named<Named<RawCluster>> = serde_json::from_str(text)?;
        if raw.0.is_empty() {
            return Err(TaxonomyError::invalid("taxonomy declares no silos"));
        }

        let mut silos = Vec::with_capacity(raw.0.len());
        for (silo_name, clusters) in raw.0 {
            if clusters.0.is_empty() {
                return Err(TaxonomyError::invalid(format!(
                    "silo `{silo_name}` declares no clusters"
                )));
            }

            let mut parsed = Vec::with_capacity(clusters.0.len());
            for (cluster_name, raw) in clusters.0 {
                if raw.keywords.is_empty() {
                    log::warn!(
                        "Cluster `{silo_name}/{cluster_name}` has no keywords; it will never score"
                    );
                }
                // a blank keyword is contained in every text
                if raw.keywords.iter().any(|keyword| keyword.trim().is_empty()) {
                    return Err(TaxonomyError::invalid(format!(
                        "cluster `{silo_name}/{cluster_name}` has a blank keyword"
                    )));
                }
                parsed.push(Cluster {
                    name: cluster_name,
                    keywords: raw.keywords,
                    required_nodes: raw.required_nodes,
                });
            }

            silos.push(Silo {
                name: silo_name,
                clusters: parsed,
            });
        }

        Ok(Self::new(silos))
    }
}

#[derive(serde::Deserialize)]
struct RawCluster {
    keywords: Vec<String>,
    #[serde(alias = "requiredNodes", alias = "nodes")]
    required_nodes: Vec<String>,
}

/// JSON object kept in declaration order; duplicate names are rejected.
struct Named<T>(Vec<(String, T)>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Named<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NamedVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for NamedVisitor<T> {
            type Value = Named<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object keyed by name")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries: Vec<(String, T)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(name) = map.next_key::<String>()? {
                    if entries.iter().any(|(existing, _)| existing == &name) {
                        return Err(de::Error::custom(format!("duplicate name `{name}`")));
                    }
                    let value = map.next_value::<T>()?;
                    entries.push((name, value));
                }
                Ok(Named(entries))
            }
        }

        deserializer.deserialize_map(NamedVisitor(PhantomData))
    }
}
