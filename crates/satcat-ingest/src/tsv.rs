//! Tab-separated catalog parser.
//!
//! The first line is the header. Logical columns are resolved once per run
//! from [`Column::synonyms`]; a column no header cell matches is reported as
//! `None` and every row yields no value for it. Blank lines and `#` comment
//! lines in the body are skipped.

use crate::error::IngestError;

/// Logical fields the pipeline reads from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    LaunchDate,
    Mass,
    Owner,
    State,
    OpOrbit,
}

impl Column {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::LaunchDate,
        Self::Mass,
        Self::Owner,
        Self::State,
        Self::OpOrbit,
    ];

    /// Header names (lowercase) accepted for this field, in priority order.
    #[must_use]
    pub const fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::Name => &["name", "satname"],
            Self::LaunchDate => &["ldate", "launch_date"],
            Self::Mass => &["mass"],
            Self::Owner => &["owner"],
            Self::State => &["state", "stateowner"],
            Self::OpOrbit => &["oporbit", "orbit"],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::LaunchDate => "ldate",
            Self::Mass => "mass",
            Self::Owner => "owner",
            Self::State => "state",
            Self::OpOrbit => "opOrbit",
        }
    }
}

/// Index of the first header cell matching any of `synonyms`, ignoring ASCII case.
#[must_use]
pub fn resolve_column(header: &[String], synonyms: &[&str]) -> Option<usize> {
    header
        .iter()
        .position(|cell| synonyms.iter().any(|s| cell.eq_ignore_ascii_case(s)))
}

/// Resolved positions of every [`Column`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    indices: [Option<usize>; Column::ALL.len()],
}

impl ColumnMap {
    #[must_use]
    pub fn resolve(header: &[String]) -> Self {
        let mut indices = [None; Column::ALL.len()];
        for (slot, column) in indices.iter_mut().zip(Column::ALL) {
            *slot = resolve_column(header, column.synonyms());
        }
        Self { indices }
    }

    #[must_use]
    pub fn index(&self, column: Column) -> Option<usize> {
        Column::ALL
            .iter()
            .position(|c| *c == column)
            .and_then(|slot| self.indices[slot])
    }

    /// Columns no header cell matched.
    #[must_use]
    pub fn missing(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| self.index(*c).is_none())
            .collect()
    }
}

/// One data line split on tabs. Transient: discarded after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub fields: Vec<String>,
}

impl RawRow {
    /// Field at `index`, or `None` when the column is unresolved or the row
    /// is shorter than the header.
    #[must_use]
    pub fn field(&self, index: Option<usize>) -> Option<&str> {
        index.and_then(|i| self.fields.get(i)).map(String::as_str)
    }
}

/// A parsed catalog: cleaned header, resolved columns, and data rows.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub header: Vec<String>,
    pub columns: ColumnMap,
    pub rows: Vec<RawRow>,
    /// Lines after the header, including blank and comment lines.
    pub total_data_lines: usize,
}

impl Catalog {
    /// Value of `column` in `row`.
    #[must_use]
    pub fn get<'a>(&self, row: &'a RawRow, column: Column) -> Option<&'a str> {
        row.field(self.columns.index(column))
    }
}

/// Trim a header cell and drop one leading `#` plus the whitespace after it.
fn clean_header_cell(cell: &str) -> String {
    let cell = cell.trim();
    cell.strip_prefix('#')
        .map_or(cell, str::trim_start)
        .to_string()
}

/// Parse the whole catalog text.
///
/// # Errors
///
/// Returns [`IngestError::Malformed`] when the text has fewer than two
/// lines, and [`IngestError::Row`] if a data row cannot be split.
pub fn parse(text: &str) -> Result<Catalog, IngestError> {
    let Some((header_line, body)) = text.split_once('\n') else {
        return Err(IngestError::Malformed { lines: 1 });
    };

    let header: Vec<String> = header_line.split('\t').map(clean_header_cell).collect();
    let columns = ColumnMap::resolve(&header);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        // Records end at `\n` only; a trailing `\r` is removed by trimming.
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        // Whitespace-only lines and indented comments survive the reader.
        if record.iter().all(str::is_empty) || record.get(0).is_some_and(|f| f.starts_with('#'))
        {
            continue;
        }
        rows.push(RawRow {
            fields: record.iter().map(ToString::to_string).collect(),
        });
    }

    Ok(Catalog {
        header,
        columns,
        rows,
        total_data_lines: body.split('\n').count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GCAT_HEADER: &str =
        "#JCAT\tSatcat\tLaunch_Tag\tPiece\tType\tName\tPLName\tLDate\tParent\tSDate\tPrimary\tDDate\tStatus\tDest\tOwner\tState\tManufacturer\tBus\tMotor\tMass\tMassFlag\tDryMass\tDryFlag\tTotMass\tTotFlag\tLength\tLFlag\tDiameter\tDFlag\tSpan\tSpanFlag\tShape\tODate\tPerigee\tPF\tApogee\tAF\tInc\tIF\tOpOrbit\tOQUAL\tAltNames";

    fn header(cells: &[&str]) -> Vec<String> {
        cells.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn resolves_gcat_header() {
        let text = format!("{GCAT_HEADER}\n");
        let catalog = parse(&text).unwrap();
        assert_eq!(catalog.header[0], "JCAT");
        assert_eq!(catalog.columns.index(Column::Name), Some(5));
        assert_eq!(catalog.columns.index(Column::LaunchDate), Some(7));
        assert_eq!(catalog.columns.index(Column::Owner), Some(14));
        assert_eq!(catalog.columns.index(Column::State), Some(15));
        assert_eq!(catalog.columns.index(Column::Mass), Some(19));
        assert_eq!(catalog.columns.index(Column::OpOrbit), Some(39));
        assert!(catalog.columns.missing().is_empty());
    }

    #[test]
    fn resolves_synonyms_case_insensitively() {
        let cells = header(&["SATNAME", "Launch_Date", "MASS", "StateOwner", "Orbit"]);
        let map = ColumnMap::resolve(&cells);
        assert_eq!(map.index(Column::Name), Some(0));
        assert_eq!(map.index(Column::LaunchDate), Some(1));
        assert_eq!(map.index(Column::Mass), Some(2));
        assert_eq!(map.index(Column::State), Some(3));
        assert_eq!(map.index(Column::OpOrbit), Some(4));
        assert_eq!(map.index(Column::Owner), None);
        assert_eq!(map.missing(), vec![Column::Owner]);
    }

    #[test]
    fn first_matching_cell_wins() {
        let cells = header(&["Orbit", "OpOrbit"]);
        assert_eq!(resolve_column(&cells, Column::OpOrbit.synonyms()), Some(0));
    }

    #[test]
    fn strips_hash_and_whitespace_from_header() {
        assert_eq!(clean_header_cell("  # JCAT "), "JCAT");
        assert_eq!(clean_header_cell("#Name"), "Name");
        assert_eq!(clean_header_cell("Mass"), "Mass");
    }

    #[test]
    fn single_line_is_malformed() {
        assert!(matches!(parse(""), Err(IngestError::Malformed { lines: 1 })));
        assert!(matches!(
            parse("#JCAT\tName\tMass"),
            Err(IngestError::Malformed { .. })
        ));
    }

    #[test]
    fn header_only_with_trailing_newline_has_no_rows() {
        let catalog = parse("Name\tMass\n").unwrap();
        assert!(catalog.rows.is_empty());
        assert_eq!(catalog.total_data_lines, 1);
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let text = "Name\tMass\n# comment\n\nSatA\t100\n   \n  # indented\nSatB\t200\n";
        let catalog = parse(text).unwrap();
        assert_eq!(catalog.rows.len(), 2);
        assert_eq!(catalog.rows[0].fields, vec!["SatA", "100"]);
        assert_eq!(catalog.rows[1].fields, vec!["SatB", "200"]);
        assert_eq!(catalog.total_data_lines, 7);
    }

    #[test]
    fn handles_crlf_and_short_rows() {
        let text = "Name\tLDate\tMass\r\nSatA\t2020 Mar  5\r\nSatB\t2021 Jan 1\t50\r\n";
        let catalog = parse(text).unwrap();
        assert_eq!(catalog.rows.len(), 2);
        let first = &catalog.rows[0];
        assert_eq!(catalog.get(first, Column::Name), Some("SatA"));
        assert_eq!(catalog.get(first, Column::LaunchDate), Some("2020 Mar  5"));
        assert_eq!(catalog.get(first, Column::Mass), None);
        assert_eq!(catalog.get(&catalog.rows[1], Column::Mass), Some("50"));
    }

    #[test]
    fn stray_carriage_return_does_not_split_a_row() {
        let catalog = parse("Name\tMass\nSat\rA\t100\r\nSatB\t\r\n").unwrap();
        assert_eq!(catalog.rows.len(), 2);
        assert_eq!(catalog.rows[0].fields, vec!["Sat\rA", "100"]);
        assert_eq!(catalog.rows[1].fields, vec!["SatB", ""]);
        assert_eq!(catalog.total_data_lines, 3);
    }

    #[test]
    fn quotes_are_literal() {
        let catalog = parse("Name\tMass\n\"Sat \"A\"\t10\n").unwrap();
        assert_eq!(catalog.rows[0].fields[0], "\"Sat \"A\"");
    }

    #[test]
    fn unresolved_column_yields_none() {
        let catalog = parse("Name\tMass\nSatA\t100\n").unwrap();
        let row = &catalog.rows[0];
        assert_eq!(catalog.get(row, Column::OpOrbit), None);
        assert_eq!(catalog.get(row, Column::State), None);
    }
}
