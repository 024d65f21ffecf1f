use serde::{Deserialize, Serialize};

/// Descriptive catalog fields. Scalars are first-wins, categories accumulate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveMetadata {
    pub publisher: Option<String>,
    pub page_count: Option<u32>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub language: Option<String>,
}

impl DescriptiveMetadata {
    pub fn fill_publisher(&mut self, publisher: Option<&str>) {
        fill_if_empty(&mut self.publisher, publisher.map(ToOwned::to_owned));
    }

    pub fn fill_page_count(&mut self, page_count: Option<u32>) {
        fill_if_empty(&mut self.page_count, page_count);
    }

    pub fn fill_language(&mut self, language: Option<&str>) {
        fill_if_empty(&mut self.language, language.map(ToOwned::to_owned));
    }

    pub fn add_categories<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for category in categories {
            let category = category.as_ref();
            if !self.categories.iter().any(|known| known == category) {
                self.categories.push(category.to_string());
            }
        }
    }
}

fn fill_if_empty<T>(target: &mut Option<T>, incoming: Option<T>) {
    if target.is_none() {
        *target = incoming;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_wins() {
        let mut meta = DescriptiveMetadata::default();
        meta.fill_publisher(None);
        meta.fill_publisher(Some("Harper"));
        meta.fill_publisher(Some("Faber"));
        meta.fill_page_count(Some(560));
        meta.fill_page_count(Some(600));
        assert_eq!(meta.publisher.as_deref(), Some("Harper"));
        assert_eq!(meta.page_count, Some(560));
    }

    #[test]
    fn test_categories_keep_insertion_order_without_duplicates() {
        let mut meta = DescriptiveMetadata::default();
        meta.add_categories(["Fiction", "Literary"]);
        meta.add_categories(vec!["Literary".to_string(), "Historical".to_string()]);
        assert_eq!(meta.categories, vec!["Fiction", "Literary", "Historical"]);
    }
}
