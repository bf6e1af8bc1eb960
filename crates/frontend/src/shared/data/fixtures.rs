//! Статические выгрузки, вшитые в бандл

use anyhow::Context;
use contracts::shared::dataset::Dataset;

const MEMBERS_JSON: &str = include_str!("../../../assets/members.json");
const ABSENCES_JSON: &str = include_str!("../../../assets/absences.json");

/// Разбирает вшитые `members.json` и `absences.json`
pub fn load_dataset() -> anyhow::Result<Dataset> {
    let dataset = Dataset::from_json(MEMBERS_JSON, ABSENCES_JSON)
        .context("Bundled fixtures are malformed")?;
    log::info!(
        "Loaded {} members and {} absences",
        dataset.members.len(),
        dataset.absences.len()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_fixtures_load() {
        let dataset = load_dataset().unwrap();
        assert_eq!(dataset.absences.len(), 42);
        assert!(!dataset.members.is_empty());
    }
}
