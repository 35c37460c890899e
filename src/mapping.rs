use std::collections::BTreeSet;
use std::collections::HashSet;

use error::*;

/// A source build file and the set of file names it is copied to.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildMapping {
    pub source: String,
    pub targets: BTreeSet<String>
}

impl BuildMapping {
    pub fn new<I, S>(source: &str, targets: I) -> BuildMapping
        where I: IntoIterator<Item = S>, S: Into<String> {
        BuildMapping {
            source: source.to_string(),
            targets: targets.into_iter().map(Into::into).collect()
        }
    }
}

/// The built-in table of source build -> civilization AI files.
///
/// Civilizations missing here (and the Phoenicia bronze build) get their AI file picked by the
/// game itself, so they are deliberately not overwritten.
pub fn default_mappings() -> Vec<BuildMapping> {
    vec![
        BuildMapping::new("Assyria_Archer.ai", vec![
            "Assyria Archer Bronze.ai",
            "Assyria Archer Iron.ai",
            "Assyria Ballista.ai",
            "Assyria Bowmen.ai",
            "Assyria Infantry Bronze.ai",
            "Immortal Assyria.ai",
        ]),
        BuildMapping::new("Choson_Swordsmen.ai", vec![
            "Choson Axemen.ai",
            "Choson Priests.ai",
            "Choson Swordsmen.ai",
        ]),
        BuildMapping::new("Greek_Centurion.ai", vec![
            "Greek Phalanx.ai",
            "Greek Priests.ai",
            "Greek Siege.ai",
            "Immortal Greek.ai",
        ]),
        BuildMapping::new("Hittite_Horse_Archer.ai", vec![
            "Hittite Bowmen.ai",
            "Hittite Elephant.ai",
            "Hittite Horse Archers.ai",
        ]),
        BuildMapping::new("Macedon_Centurion.ai", vec![
            "Macedon Cavalry.ai",
            "Macedon Elephant.ai",
            "Macedon Phalanx.ai",
        ]),
        BuildMapping::new("Persia_War_Elephant.ai", vec![
            "Persia Elephant Archers.ai",
            "Persia Priests.ai",
            "Persia War Elephant.ai",
        ]),
        BuildMapping::new("Phoenicia_Elephant_Archer.ai", vec![
            "Phoenicia Elephants.ai",
        ]),
        // BuildMapping::new("Phoenicia_Bronze.ai", vec!["Phoenicia Elephants.ai"]),
        BuildMapping::new("Yamato_Cavalry.ai", vec![
            "Immortal Yamato.ai",
            "Yamato Heavy Cavalry.ai",
        ]),
    ]
}

pub fn check_unique_sources(mappings: &[BuildMapping]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for mapping in mappings {
        if !seen.insert(&mapping.source) {
            bail!(ErrorKind::DuplicateSource(mapping.source.clone()));
        }
    }

    Ok(())
}
