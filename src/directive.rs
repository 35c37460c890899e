use regex::Regex;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::PathBuf;

use error::*;
use mapping::*;

const MAPPING_FORMAT: &str = r"^\s*(?P<source>[^#\s].*?)\s*->\s*(?P<targets>.*?)\s*$";

pub fn mapping_format() -> Result<Regex> {
    Ok(Regex::new(MAPPING_FORMAT)?)
}

/// Parses one line of a mapping file, e.g. `Greek_Centurion.ai -> Greek Phalanx.ai, Greek Siege.ai`.
/// Blank lines and `#` comments yield `None`.
pub fn mapping_from_line(format: &Regex, line: &str) -> Option<Result<BuildMapping>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    Some(parse_mapping(format, trimmed))
}

fn parse_mapping(format: &Regex, line: &str) -> Result<BuildMapping> {
    let captures = match format.captures(line) {
        Some(captures) => captures,
        None => bail!("No mapping found in {}", line)
    };
    let source = captures
        .name("source")
        .chain_err(|| "No source found for mapping. This is a bug.")?;
    let targets = captures
        .name("targets")
        .chain_err(|| "No targets found for mapping. This is a bug.")?;
    if targets.as_str().contains("->") {
        bail!("More than one '->' in {}", line);
    }
    let targets = targets
        .as_str()
        .split(',')
        .map(str::trim)
        .filter(|target| !target.is_empty());

    Ok(BuildMapping::new(source.as_str(), targets))
}

pub fn mappings_from_file(file: &PathBuf) -> Result<Vec<BuildMapping>> {
    let mapping_file = File::open(file)
        .chain_err(|| format!("Unable to open mapping file {}", file.to_string_lossy()))?;
    let format = mapping_format()?;
    let mut mappings: Vec<BuildMapping> = Vec::new();
    for (index, line_result) in BufReader::new(mapping_file).lines().enumerate() {
        let line = line_result
            .chain_err(|| format!("Error reading mapping file {}", file.to_string_lossy()))?;
        match mapping_from_line(&format, &line) {
            Some(result) => {
                let mapping = result.chain_err(|| ErrorKind::InvalidMappingLine(index + 1, line.clone()))?;
                trace!("Mapping {} -> {:?}", mapping.source, mapping.targets);
                mappings.push(mapping);
            }
            None => (),
        };
    }
    check_unique_sources(&mappings)
        .chain_err(|| format!("Invalid mapping file {}", file.to_string_lossy()))?;

    Ok(mappings)
}
