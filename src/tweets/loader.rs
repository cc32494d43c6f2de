use crate::error::{Result, TweetError};
use crate::tweets::types::LoadOptions;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Read a newline-delimited JSON file into a list of records
///
/// Returns the number of records together with the records themselves.
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<(usize, Vec<Value>)> {
    read_json_with(path, &LoadOptions::default())
}

/// Like [`read_json`], with explicit load options
pub fn read_json_with<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<(usize, Vec<Value>)> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TweetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (count, records) = read_records(BufReader::new(file), options, path)?;
    debug!(path = %path.display(), count, "loaded tweet records");
    Ok((count, records))
}

/// Read records from any buffered reader
pub fn read_json_from<R: BufRead>(reader: R, options: &LoadOptions) -> Result<(usize, Vec<Value>)> {
    read_records(reader, options, Path::new("<reader>"))
}

fn read_records<R: BufRead>(
    reader: R,
    options: &LoadOptions,
    origin: &Path,
) -> Result<(usize, Vec<Value>)> {
    let mut records = Vec::new();

    // Split on raw bytes so invalid UTF-8 surfaces as a parse error for its line
    for (idx, line) in reader.split(b'\n').enumerate() {
        if options.limit.is_some_and(|limit| records.len() >= limit) {
            break;
        }

        let line = line.map_err(|source| TweetError::Io {
            path: origin.to_path_buf(),
            source,
        })?;

        if options.skip_blank_lines && line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let value: Value = serde_json::from_slice(&line).map_err(|source| TweetError::Parse {
            line: idx + 1,
            source,
        })?;
        records.push(value);
    }

    Ok((records.len(), records))
}
