use serde::{Deserialize, Serialize};

/// Read-only catalog entry used to seed a new portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(rename = "Id")]
    pub id: u64,
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub preview: String,
    /// Number of blocks the template ships with
    #[serde(default)]
    pub blocks: u32,
}

impl Template {
    /// Case-insensitive match against name and description
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_name_or_description() {
        let template = Template {
            id: 1,
            name: "Lens".to_string(),
            category: "photography".to_string(),
            description: "Full-bleed galleries for photographers".to_string(),
            preview: String::new(),
            blocks: 5,
        };

        assert!(template.matches("lens"));
        assert!(template.matches("GALLERIES"));
        assert!(!template.matches("developer"));
        assert!(template.matches(""));
    }
}
