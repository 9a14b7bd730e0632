use tracing::{debug, warn};

use crate::error::{DecodeError, EncodeError, Field, MalformedLine};
use crate::Properties;

/// Characters that delimit the format and so may not appear inside an entry.
const RESERVED: [char; 2] = ['\n', '='];

/// Parses properties text into a map.
///
/// Input is split into lines on `\n` and each line must be valid UTF-8. Blank
/// lines are skipped. Each remaining line must contain exactly one `=`; lines
/// that don't, or that aren't UTF-8, are collected into the returned
/// [`DecodeError`] while the rest are still decoded. A duplicate key keeps its
/// last value.
pub fn decode(input: &[u8]) -> Result<Properties, DecodeError> {
    let mut props = Properties::new();
    let mut malformed = Vec::new();

    for raw in input.split(|&b| b == b'\n') {
        let line = match std::str::from_utf8(raw) {
            Ok(s) => s.trim(),
            Err(_) => {
                let shown = String::from_utf8_lossy(raw);
                warn!(line = %shown.trim(), "skipping non-UTF-8 property line");
                malformed.push(MalformedLine {
                    line: shown.trim().to_string(),
                });
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        // Plain split, not split_once: `k=a=b` must be rejected.
        let parts: Vec<&str> = line.split('=').collect();
        if let [key, value] = parts[..] {
            props.insert(key.trim().to_string(), value.trim().to_string());
        } else {
            warn!(line, "skipping malformed property line");
            malformed.push(MalformedLine {
                line: line.to_string(),
            });
        }
    }

    debug!(
        entries = props.len(),
        malformed = malformed.len(),
        "decoded properties"
    );

    if malformed.is_empty() {
        Ok(props)
    } else {
        Err(DecodeError::new(malformed, props))
    }
}

/// Like [`decode`], but always hands back the best-effort map.
pub fn decode_lossy(input: &[u8]) -> (Properties, Option<DecodeError>) {
    match decode(input) {
        Ok(props) => (props, None),
        Err(e) => (e.partial().clone(), Some(e)),
    }
}

/// Serializes `props` as `key = value` lines joined by `\n`.
///
/// Entries are written in key order. Stops at the first key or value that
/// contains a reserved character after trimming; no bytes are returned then.
pub fn encode(props: &Properties) -> Result<Vec<u8>, EncodeError> {
    let mut entries: Vec<(&String, &String)> = props.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut lines = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let key = key.trim();
        let value = value.trim();

        check_reserved(Field::Key, key)?;
        check_reserved(Field::Value, value)?;

        lines.push(format!("{} = {}", key, value));
    }

    debug!(entries = lines.len(), "encoded properties");
    Ok(lines.join("\n").into_bytes())
}

/// Returns `true` iff `input` decodes without a single malformed line.
pub fn validate(input: &[u8]) -> bool {
    decode(input).is_ok()
}

fn check_reserved(field: Field, s: &str) -> Result<(), EncodeError> {
    if s.contains(RESERVED) {
        return Err(EncodeError::ReservedCharacter {
            field,
            content: s.to_string(),
        });
    }
    Ok(())
}
