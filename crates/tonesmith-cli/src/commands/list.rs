//! List command implementation

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;
use tonesmith_presets::Preset;

/// Presets sharing a family, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyListing {
    pub family: &'static str,
    pub presets: Vec<String>,
}

/// Groups the catalog by family.
///
/// The catalog keeps each family contiguous, so grouping consecutive runs
/// preserves both family order and preset order.
pub fn families() -> Vec<FamilyListing> {
    let mut listing: Vec<FamilyListing> = Vec::new();
    for preset in Preset::all() {
        match listing.last_mut() {
            Some(group) if group.family == preset.family() => group.presets.push(preset.name()),
            _ => listing.push(FamilyListing {
                family: preset.family(),
                presets: vec![preset.name()],
            }),
        }
    }
    listing
}

/// Run the list command
///
/// # Arguments
/// * `json` - Print the grouping as JSON instead of colored text
pub fn run(json: bool) -> Result<ExitCode> {
    let listing = families();

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(ExitCode::SUCCESS);
    }

    let total: usize = listing.iter().map(|group| group.presets.len()).sum();
    println!("{} {} presets", "Catalog:".cyan().bold(), total);
    for group in &listing {
        println!();
        println!("{}", group.family.blue().bold());
        for name in &group.presets {
            println!("  {}", name);
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_families_cover_catalog() {
        let listing = families();
        let total: usize = listing.iter().map(|g| g.presets.len()).sum();
        assert_eq!(total, 48);
        assert_eq!(listing.len(), 17);
    }

    #[test]
    fn test_family_grouping() {
        let listing = families();
        assert_eq!(listing[0].family, "bell");
        assert_eq!(
            listing[0].presets,
            vec!["simple_bell", "church_bell", "hand_bell"]
        );
        let lock = listing.iter().find(|g| g.family == "lock").unwrap();
        assert_eq!(lock.presets, vec!["lock", "unlock"]);
    }
}
