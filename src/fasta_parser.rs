use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Error, ErrorKind};

/// Loads the first record from a FASTA file (can be gzipped if path ends with .gz).
pub fn load_sequence(path: &str) -> Result<Vec<u8>, Error> {
    let file = File::open(path)
        .map_err(|e| Error::new(e.kind(), format!("Failed to open FASTA file '{}': {}", path, e)))?;

    let reader: Box<dyn BufRead> = if path.ends_with(".gz") {
        tracing::debug!(path, "reading gzipped FASTA");
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    parse_sequence(reader, path)
}

/// Reads residues of the first record, uppercased. Anything that is not an
/// ASCII letter, `*` (stop) or `-` (gap) is dropped. `source` only names the
/// input in error messages.
pub fn parse_sequence<R: BufRead>(reader: R, source: &str) -> Result<Vec<u8>, Error> {
    let mut sequence = Vec::new();
    let mut found_sequence_header = false;

    for line_result in reader.lines() {
        let line = line_result.map_err(|e| {
            Error::new(e.kind(), format!("Error reading line from FASTA '{}': {}", source, e))
        })?;
        if line.starts_with('>') {
            if found_sequence_header {
                break;
            }
            found_sequence_header = true;
        } else if line.starts_with(';') {
            continue;
        } else if found_sequence_header {
            for char_byte in line.trim().bytes() {
                match char_byte.to_ascii_uppercase() {
                    upper @ (b'A'..=b'Z' | b'*' | b'-') => sequence.push(upper),
                    _ => {}
                }
            }
        }
    }

    if !found_sequence_header {
        Err(Error::new(
            ErrorKind::InvalidData,
            format!("No FASTA sequence header '>' found in '{}'.", source),
        ))
    } else if sequence.is_empty() {
        Err(Error::new(
            ErrorKind::InvalidData,
            format!("No valid sequence data found after FASTA header in '{}'.", source),
        ))
    } else {
        tracing::debug!(source, len = sequence.len(), "loaded FASTA record");
        Ok(sequence)
    }
}
