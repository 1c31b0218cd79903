use crate::error::ConfigError;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Ordered list of class names; index i is the classifier's i-th output
/// channel.
pub struct LabelRegistry {
    labels: Vec<String>,
}

impl LabelRegistry {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path).map_err(ConfigError::LabelsUnreadable)?;
        Self::from_reader(file)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, ConfigError> {
        let mut labels = Vec::new();

        for line in BufReader::new(reader).lines() {
            let line = line.map_err(ConfigError::LabelsUnreadable)?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                labels.push(trimmed.to_string());
            }
        }

        if labels.is_empty() {
            return Err(ConfigError::NoLabels);
        }

        Ok(Self { labels })
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_load_preserves_file_order() {
        let registry = LabelRegistry::from_reader("A\nB\nC\n".as_bytes()).unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get(0), Some("A"));
        assert_eq!(registry.get(1), Some("B"));
        assert_eq!(registry.get(2), Some("C"));
    }

    #[test]
    fn test_blank_lines_and_padding_ignored() {
        let registry = LabelRegistry::from_reader("\n  amoxicillin  \n\n ibuprofen\n".as_bytes())
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(0), Some("amoxicillin"));
        assert_eq!(registry.get(1), Some("ibuprofen"));
    }

    #[test]
    fn test_empty_resource_fails() {
        let result = LabelRegistry::from_reader("".as_bytes());
        assert!(matches!(result, Err(ConfigError::NoLabels)));

        let result = LabelRegistry::from_reader("\n\n  \n".as_bytes());
        assert!(matches!(result, Err(ConfigError::NoLabels)));
    }

    #[test]
    fn test_index_past_end_is_none() {
        let registry = LabelRegistry::from_reader("A\nB\n".as_bytes()).unwrap();
        assert_eq!(registry.get(2), None);
    }
}
