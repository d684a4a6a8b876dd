/// Parsed taxonomy: an ordered list of silos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    silos: Vec<Silo>,
}

impl Taxonomy {
    pub(crate) fn new(silos: Vec<Silo>) -> Self {
        Self { silos }
    }

    /// Silos in declaration order
    #[must_use]
    pub fn silos(&self) -> &[Silo] {
        &self.silos
    }

    #[must_use]
    pub fn silo(&self, name: &str) -> Option<&Silo> {
        self.silos.iter().find(|silo| silo.name == name)
    }

    #[must_use]
    pub fn silo_names(&self) -> Vec<&str> {
        self.silos.iter().map(|silo| silo.name.as_str()).collect()
    }

    /// Total number of clusters across all silos
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.silos.iter().map(|silo| silo.clusters.len()).sum()
    }

    /// Total number of required nodes across all clusters
    #[must_use]
    pub fn required_node_count(&self) -> usize {
        self.silos
            .iter()
            .flat_map(|silo| &silo.clusters)
            .map(|cluster| cluster.required_nodes.len())
            .sum()
    }
}

/// Top-level grouping owning an ordered list of clusters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Silo {
    pub name: String,
    pub clusters: Vec<Cluster>,
}

impl Silo {
    #[must_use]
    pub fn cluster(&self, name: &str) -> Option<&Cluster> {
        self.clusters.iter().find(|cluster| cluster.name == name)
    }
}

/// Sub-grouping within a silo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub name: String,

    /// Strings scored against content slugs and titles
    pub keywords: Vec<String>,

    /// Topics that must be covered somewhere in the corpus
    pub required_nodes: Vec<String>,
}
