//! # Headless Listing
//!
//! `atlas --list` fetches once, groups, optionally filters, and prints the
//! sections to stdout without starting the TUI.

use std::io::Write;

use log::info;

use crate::core::config::ResolvedConfig;
use crate::core::sections::{Section, country_count, filter_sections, group_by_continent};
use crate::fetch::{CountrySource, RestCountriesSource};

pub async fn list(config: ResolvedConfig, query: Option<&str>) -> std::io::Result<()> {
    let source = RestCountriesSource::new(config.endpoint, config.timeout);
    let raw = source.fetch_all().await.map_err(std::io::Error::other)?;

    let sections = filter_sections(&group_by_continent(raw), query.unwrap_or_default());
    info!(
        "Listing {} countries in {} sections",
        country_count(&sections),
        sections.len()
    );

    let mut out = std::io::stdout().lock();
    write_sections(&sections, &mut out)?;
    out.flush()
}

/// One header per section, then one indented line per country.
pub fn write_sections(sections: &[Section], out: &mut impl Write) -> std::io::Result<()> {
    for section in sections {
        writeln!(out, "{} ({})", section.title, section.data.len())?;
        for country in &section.data {
            let name = format!("{} {}", country.flag_emoji, country.name);
            writeln!(out, "  {} - {}", name.trim_start(), country.capital)?;
        }
    }
    Ok(())
}
