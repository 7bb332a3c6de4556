use serde::{Deserialize, Serialize};

/// Placeholder written for any field the listing does not carry.
pub const NOT_AVAILABLE: &str = "N/A";

/// What the user asked for. Never overwritten by scraped values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keywords: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Job Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Skills Required")]
    pub skills_required: String,
}

impl JobRecord {
    pub fn from_fields(
        title: Option<String>,
        company: Option<String>,
        location: Option<String>,
        skills_required: Option<String>,
    ) -> Self {
        let or_na = |v: Option<String>| v.unwrap_or_else(|| NOT_AVAILABLE.into());
        JobRecord {
            title: or_na(title),
            company: or_na(company),
            location: or_na(location),
            skills_required: or_na(skills_required),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_become_sentinel() {
        let rec = JobRecord::from_fields(Some("Rust Dev".into()), None, None, Some("rust".into()));
        assert_eq!(rec.title, "Rust Dev");
        assert_eq!(rec.company, NOT_AVAILABLE);
        assert_eq!(rec.location, NOT_AVAILABLE);
        assert_eq!(rec.skills_required, "rust");
    }
}
