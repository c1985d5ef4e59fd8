//! # Continent Sections
//!
//! Grouping and searching over the country list.
//!
//! ```text
//! Vec<RawCountry>  →  group_by_continent()  →  Vec<Section>
//! Vec<Section> + query  →  filter_sections()  →  Vec<Section>
//! ```
//!
//! Both functions are pure. Section order is the order in which each
//! continent first appears in the input; records keep their arrival order.

use std::collections::HashMap;

use crate::core::country::{CountryRecord, RawCountry};

/// A titled group of countries, one per continent.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub data: Vec<CountryRecord>,
}

/// Normalizes every raw record and buckets it under its continent.
pub fn group_by_continent(raw: Vec<RawCountry>) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    // title → position in `sections`
    let mut index: HashMap<String, usize> = HashMap::new();

    for country in raw {
        let record = CountryRecord::from(country);
        match index.get(&record.continent) {
            Some(&pos) => sections[pos].data.push(record),
            None => {
                index.insert(record.continent.clone(), sections.len());
                sections.push(Section {
                    title: record.continent.clone(),
                    data: vec![record],
                });
            }
        }
    }

    sections
}

/// Keeps countries whose common name contains `query`, ignoring case.
///
/// An empty query returns the collection unchanged. Sections left empty are
/// dropped.
pub fn filter_sections(sections: &[Section], query: &str) -> Vec<Section> {
    if query.is_empty() {
        return sections.to_vec();
    }

    let needle = query.to_lowercase();
    sections
        .iter()
        .filter_map(|section| {
            let data: Vec<CountryRecord> = section
                .data
                .iter()
                .filter(|c| c.name.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            (!data.is_empty()).then(|| Section {
                title: section.title.clone(),
                data,
            })
        })
        .collect()
}

/// Total number of countries across all sections.
pub fn country_count(sections: &[Section]) -> usize {
    sections.iter().map(|s| s.data.len()).sum()
}

/// The `index`-th country when sections are read top to bottom.
pub fn country_at(sections: &[Section], index: usize) -> Option<&CountryRecord> {
    sections.iter().flat_map(|s| s.data.iter()).nth(index)
}
