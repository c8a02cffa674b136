use crate::sample::Sample;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Region name to ordered samples, loaded once at startup and never mutated.
///
/// Regions keep the order they had in the source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    regions: IndexMap<String, Vec<Sample>>,
}

impl Dataset {
    pub fn new(regions: IndexMap<String, Vec<Sample>>) -> Self {
        Self { regions }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, region: &str) -> Option<&[Sample]> {
        self.regions.get(region).map(Vec::as_slice)
    }

    pub fn contains(&self, region: &str) -> bool {
        self.regions.contains_key(region)
    }

    pub fn region_names(&self) -> Vec<String> {
        self.regions.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Sample])> {
        self.regions
            .iter()
            .map(|(name, samples)| (name.as_str(), samples.as_slice()))
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn total_samples(&self) -> usize {
        self.regions.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, Vec<Sample>)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Sample>)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        Dataset::from_iter([
            (
                "emea".to_string(),
                vec![Sample::new(100.0, 0.99), Sample::new(150.0, 0.95)],
            ),
            ("apac".to_string(), vec![Sample::new(210.0, 0.97)]),
            ("amer".to_string(), Vec::new()),
        ])
    }

    #[test]
    fn test_dataset_lookup() {
        let dataset = sample_dataset();

        assert_eq!(dataset.get("emea").map(<[Sample]>::len), Some(2));
        assert_eq!(dataset.get("amer"), Some(&[][..]));
        assert!(dataset.get("latam").is_none());
        assert!(dataset.contains("apac"));
        assert!(!dataset.contains("latam"));
    }

    #[test]
    fn test_dataset_region_names_keep_insertion_order() {
        let dataset = sample_dataset();

        assert_eq!(dataset.region_names(), vec!["emea", "apac", "amer"]);
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.total_samples(), 3);
    }

    #[test]
    fn test_dataset_deserializes_from_region_map() {
        let json = r#"{
            "emea": [],
            "apac": [{"latency_ms": 180.2, "uptime": 0.991}],
            "amer": []
        }"#;

        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.region_names(), vec!["emea", "apac", "amer"]);
        assert_eq!(dataset.get("apac"), Some(&[Sample::new(180.2, 0.991)][..]));
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::empty();

        assert!(dataset.is_empty());
        assert!(dataset.region_names().is_empty());
        assert_eq!(dataset.total_samples(), 0);
    }
}
