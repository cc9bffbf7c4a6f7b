// mod.rs - Alignment output formatters

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::data::{Alignment, InputFormat, Moltype, Row};

/// Line width for wrapped FASTA sequence output
const FASTA_WRAP: usize = 60;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Fasta,
    Phylip,
    Nexus,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fasta" | "fa" => Ok(OutputFormat::Fasta),
            "phylip" | "phy" => Ok(OutputFormat::Phylip),
            "nexus" | "nex" => Ok(OutputFormat::Nexus),
            _ => Err(format!(
                "Invalid output format: {}. Use: fasta, phylip, nexus",
                s
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Fasta => write!(f, "fasta"),
            OutputFormat::Phylip => write!(f, "phylip"),
            OutputFormat::Nexus => write!(f, "nexus"),
        }
    }
}

impl From<InputFormat> for OutputFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Fasta => OutputFormat::Fasta,
            InputFormat::Phylip => OutputFormat::Phylip,
        }
    }
}

/// Format a FASTA header line. The identifier must sit flush against the
/// record marker: if an upstream renderer padded it, exactly one leading
/// space is stripped before emission.
fn fasta_header(row: &Row) -> String {
    let id = row.id.strip_prefix(' ').unwrap_or(&row.id);
    match &row.desc {
        Some(desc) => format!(">{} {}", id, desc),
        None => format!(">{}", id),
    }
}

/// Write an alignment in FASTA format, wrapping sequences at 60 columns.
pub fn write_fasta<W: Write>(writer: &mut W, aln: &Alignment) -> Result<(), String> {
    for row in &aln.rows {
        writeln!(writer, "{}", fasta_header(row)).map_err(|e| format!("Write error: {}", e))?;
        if row.seq.is_empty() {
            continue;
        }
        for chunk in row.seq.chunks(FASTA_WRAP) {
            writer
                .write_all(chunk)
                .and_then(|_| writer.write_all(b"\n"))
                .map_err(|e| format!("Write error: {}", e))?;
        }
    }
    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    Ok(())
}

/// Write an alignment in sequential PHYLIP format.
pub fn write_phylip<W: Write>(writer: &mut W, aln: &Alignment) -> Result<(), String> {
    let nchar = aln.rows.first().map(|r| r.len()).unwrap_or(0);
    writeln!(writer, " {} {}", aln.nrows(), nchar).map_err(|e| format!("Write error: {}", e))?;

    for row in &aln.rows {
        write!(writer, "{:<10}", row.id).map_err(|e| format!("Write error: {}", e))?;
        writer
            .write_all(&row.seq)
            .and_then(|_| writer.write_all(b"\n"))
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    Ok(())
}

/// Write an alignment as a NEXUS DATA block.
pub fn write_nexus<W: Write>(
    writer: &mut W,
    aln: &Alignment,
    moltype: Moltype,
) -> Result<(), String> {
    let nchar = aln.rows.first().map(|r| r.len()).unwrap_or(0);

    writeln!(writer, "#NEXUS").map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "BEGIN DATA;").map_err(|e| format!("Write error: {}", e))?;
    writeln!(
        writer,
        "    DIMENSIONS NTAX={} NCHAR={};",
        aln.nrows(),
        nchar
    )
    .map_err(|e| format!("Write error: {}", e))?;
    writeln!(
        writer,
        "    FORMAT DATATYPE={} MISSING=? GAP=-;",
        moltype.nexus_datatype()
    )
    .map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "    MATRIX").map_err(|e| format!("Write error: {}", e))?;

    for row in &aln.rows {
        write!(writer, "        {:<10} ", row.id).map_err(|e| format!("Write error: {}", e))?;
        writer
            .write_all(&row.seq)
            .and_then(|_| writer.write_all(b"\n"))
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writeln!(writer, "    ;").map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "END;").map_err(|e| format!("Write error: {}", e))?;

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    Ok(())
}

/// Write an alignment in the specified format.
pub fn write_alignment<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    aln: &Alignment,
    moltype: Moltype,
) -> Result<(), String> {
    match format {
        OutputFormat::Fasta => write_fasta(writer, aln),
        OutputFormat::Phylip => write_phylip(writer, aln),
        OutputFormat::Nexus => write_nexus(writer, aln, moltype),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aln(rows: Vec<Row>) -> Alignment {
        Alignment::new(rows)
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("fasta".parse::<OutputFormat>(), Ok(OutputFormat::Fasta));
        assert_eq!("PHYLIP".parse::<OutputFormat>(), Ok(OutputFormat::Phylip));
        assert_eq!("nex".parse::<OutputFormat>(), Ok(OutputFormat::Nexus));
        assert!("genbank".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_fasta_marker_flush_against_identifier() {
        let aln = aln(vec![Row::new("seq1", None, b"ACGT".to_vec())]);
        let mut buf = Vec::new();
        write_fasta(&mut buf, &aln).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with(">seq1\n"));
        assert!(!text.starts_with("> "));
    }

    #[test]
    fn test_fasta_strips_one_padded_space() {
        // A padded marker from an upstream layout is normalized
        let aln = aln(vec![Row::new(" seq1", Some("desc".to_string()), b"AC".to_vec())]);
        let mut buf = Vec::new();
        write_fasta(&mut buf, &aln).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), ">seq1 desc\nAC\n");
    }

    #[test]
    fn test_fasta_wraps_at_sixty() {
        let seq: Vec<u8> = std::iter::repeat(b'A').take(130).collect();
        let aln = aln(vec![Row::new("s", None, seq)]);
        let mut buf = Vec::new();
        write_fasta(&mut buf, &aln).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1].len(), 60);
        assert_eq!(lines[2].len(), 60);
        assert_eq!(lines[3].len(), 10);
    }

    #[test]
    fn test_fasta_empty_sequence_keeps_header() {
        let aln = aln(vec![Row::new("s", None, Vec::new())]);
        let mut buf = Vec::new();
        write_fasta(&mut buf, &aln).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), ">s\n");
    }

    #[test]
    fn test_phylip_output() {
        let aln = aln(vec![
            Row::new("a", None, b"ACGT".to_vec()),
            Row::new("b", None, b"A-GT".to_vec()),
        ]);
        let mut buf = Vec::new();
        write_phylip(&mut buf, &aln).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, " 2 4\na         ACGT\nb         A-GT\n");
    }

    #[test]
    fn test_nexus_output() {
        let aln = aln(vec![Row::new("a", None, b"AC".to_vec())]);
        let mut buf = Vec::new();
        write_nexus(&mut buf, &aln, Moltype::Dna).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("#NEXUS\nBEGIN DATA;\n"));
        assert!(text.contains("DIMENSIONS NTAX=1 NCHAR=2;"));
        assert!(text.contains("FORMAT DATATYPE=DNA MISSING=? GAP=-;"));
        assert!(text.ends_with("    ;\nEND;\n"));
    }
}
