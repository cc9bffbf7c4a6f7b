// phylip.rs - Sequential PHYLIP alignment loader

use std::io;

use crate::data::loaders::LoadError;
use crate::data::{Alignment, Row};

fn parse_error(message: String) -> LoadError {
    LoadError::Parse {
        format: "PHYLIP",
        message,
    }
}

/// Read sequential PHYLIP records from a stream. Each record starts with an
/// `ntax nchar` header; several records may be concatenated in one stream,
/// each with its own row count. Names are relaxed: the first whitespace-
/// delimited token on a sequence line, not a strict 10-character field.
pub fn read_alignments<R: io::Read>(mut reader: R) -> Result<Vec<Alignment>, LoadError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_str(&content)
}

/// Parse PHYLIP records from a string.
pub fn parse_str(content: &str) -> Result<Vec<Alignment>, LoadError> {
    let lines: Vec<&str> = content.lines().collect();
    let mut records = Vec::new();
    let mut pos = 0;

    loop {
        // Skip blank lines between records
        while pos < lines.len() && lines[pos].trim().is_empty() {
            pos += 1;
        }
        if pos >= lines.len() {
            break;
        }

        let (ntax, nchar) = parse_header(lines[pos], pos + 1)?;
        pos += 1;

        let mut rows = Vec::with_capacity(ntax);
        while rows.len() < ntax {
            while pos < lines.len() && lines[pos].trim().is_empty() {
                pos += 1;
            }
            if pos >= lines.len() {
                return Err(parse_error(format!(
                    "expected {} sequences but found {}",
                    ntax,
                    rows.len()
                )));
            }

            let line = lines[pos].trim();
            pos += 1;

            let mut parts = line.split_whitespace();
            let name = parts.next().unwrap_or_default().to_string();
            let mut seq: Vec<u8> = parts.flat_map(|p| p.bytes()).collect();

            // Continuation lines until the declared length is reached
            while seq.len() < nchar {
                while pos < lines.len() && lines[pos].trim().is_empty() {
                    pos += 1;
                }
                if pos >= lines.len() {
                    return Err(parse_error(format!(
                        "sequence '{}' has length {}, expected {}",
                        name,
                        seq.len(),
                        nchar
                    )));
                }
                seq.extend(lines[pos].bytes().filter(|b| !b.is_ascii_whitespace()));
                pos += 1;
            }

            if seq.len() != nchar {
                return Err(parse_error(format!(
                    "sequence '{}' has length {}, expected {}",
                    name,
                    seq.len(),
                    nchar
                )));
            }

            rows.push(Row::new(name, None, seq));
        }

        records.push(Alignment::new(rows));
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(records)
}

/// Parse an `ntax nchar` header line.
fn parse_header(line: &str, line_num: usize) -> Result<(usize, usize), LoadError> {
    let parts: Vec<&str> = line.trim().split_whitespace().collect();
    if parts.len() < 2 {
        return Err(parse_error(format!(
            "line {}: expected 'ntax nchar' header, got '{}'",
            line_num,
            line.trim()
        )));
    }

    let ntax: usize = parts[0]
        .parse()
        .map_err(|_| parse_error(format!("line {}: invalid sequence count '{}'", line_num, parts[0])))?;
    let nchar: usize = parts[1]
        .parse()
        .map_err(|_| parse_error(format!("line {}: invalid sequence length '{}'", line_num, parts[1])))?;

    if ntax == 0 {
        return Err(parse_error(format!(
            "line {}: sequence count must be at least 1",
            line_num
        )));
    }

    Ok((ntax, nchar))
}
