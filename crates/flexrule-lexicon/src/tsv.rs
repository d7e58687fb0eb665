// Tab-separated lexicon format
//
// One paradigm per line, one column per case. `-` or an empty cell marks a
// missing form, `#` starts a comment line. An optional header made only of
// case tags sets the column order:
//
//   nomn   gent    datv    accs    ablt     loct
//   кот    кота    коту    кота    котом    коте

use flexrule_core::inflection::GrammaticalCase;

use crate::LexiconError;
use crate::paradigm::Paradigm;

/// Marker for a missing form.
const MISSING: &str = "-";

/// Parse the tab-separated lexicon format.
pub(crate) fn parse(text: &str) -> Result<Vec<Paradigm>, LexiconError> {
    let mut columns: Vec<GrammaticalCase> = GrammaticalCase::ALL.to_vec();
    let mut seen_data = false;
    let mut paradigms = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim_end_matches('\r');
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let cells: Vec<&str> = line.split('\t').map(str::trim).collect();

        if !seen_data {
            seen_data = true;
            if let Some(header) = parse_header(&cells, line_no)? {
                columns = header;
                continue;
            }
        }

        if cells.len() != columns.len() {
            return Err(LexiconError::Parse {
                line: line_no,
                message: format!("expected {} columns, found {}", columns.len(), cells.len()),
            });
        }

        let mut paradigm = Paradigm::new();
        for (&case, cell) in columns.iter().zip(&cells) {
            if cell.is_empty() || *cell == MISSING {
                continue;
            }
            paradigm.set(case, *cell);
        }
        if paradigm.is_empty() {
            return Err(LexiconError::EmptyEntry { line: line_no });
        }
        paradigms.push(paradigm);
    }

    Ok(paradigms)
}

/// Interpret `cells` as a header line if every cell is a case tag.
fn parse_header(
    cells: &[&str],
    line_no: usize,
) -> Result<Option<Vec<GrammaticalCase>>, LexiconError> {
    let tags: Option<Vec<GrammaticalCase>> =
        cells.iter().map(|c| GrammaticalCase::from_tag(c)).collect();
    let Some(tags) = tags else {
        return Ok(None);
    };
    for (i, case) in tags.iter().enumerate() {
        if tags[..i].contains(case) {
            return Err(LexiconError::Parse {
                line: line_no,
                message: format!("duplicate column {case}"),
            });
        }
    }
    Ok(Some(tags))
}
