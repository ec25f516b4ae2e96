use crate::core::shared::{Position, TexCoord};
use crate::shared::record::{RecordKind, CORNER_DELIMITER, FIELD_DELIMITER};
use super::Err;

/// One face corner as written in the text, i.e. 1-based indices into the raw pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Corner {
    pub position: usize,
    pub tex_coord: usize,
    pub normal: usize,
}

/// A parsed line. Values are stored exactly as read; conventions such as the v-flip are applied
/// by the importer.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Record {
    Position(Position),
    TexCoord(TexCoord),
    Normal([f64; 3]),
    Face([Corner; 3]),
}


/// Parses a single line (without its line terminator).
/// Returns `Ok(None)` for lines that are not recognized.
pub(crate) fn parse_line(line: &str, line_no: usize) -> Result<Option<Record>, Err> {
    let mut tokens = line.split(FIELD_DELIMITER);
    let kind = match tokens.next().and_then(RecordKind::from_marker) {
        Some(kind) => kind,
        None => return Ok(None),
    };
    let fields = tokens.collect::<Vec<_>>();

    let record = match kind {
        RecordKind::Position => Record::Position(parse_floats(&fields, kind, line_no)?),
        RecordKind::TexCoord => Record::TexCoord(parse_floats(&fields, kind, line_no)?),
        RecordKind::Normal => Record::Normal(parse_floats(&fields, kind, line_no)?),
        RecordKind::Face => Record::Face(parse_face(&fields, line_no)?),
    };
    Ok(Some(record))
}


/// Parses the first `N` fields. Any further fields are ignored.
fn parse_floats<const N: usize>(fields: &[&str], kind: RecordKind, line_no: usize) -> Result<[f64; N], Err> {
    if fields.len() < N {
        return Err(Err::MissingField { line: line_no, record: kind, expected: N, found: fields.len() });
    }
    let mut out = [0.0; N];
    for (o, field) in out.iter_mut().zip(fields) {
        *o = field.parse::<f64>()
            .map_err(|_| Err::MalformedNumber { line: line_no, field: field.to_string() })?;
    }
    Ok(out)
}


fn parse_face(mut fields: &[&str], line_no: usize) -> Result<[Corner; 3], Err> {
    // trailing delimiters leave empty tokens behind
    while let [rest @ .., ""] = fields {
        fields = rest;
    }
    if fields.len() != 3 {
        return Err(Err::FaceArity { line: line_no, found: fields.len() });
    }
    Ok([
        parse_corner(fields[0], line_no)?,
        parse_corner(fields[1], line_no)?,
        parse_corner(fields[2], line_no)?,
    ])
}


fn parse_corner(descriptor: &str, line_no: usize) -> Result<Corner, Err> {
    let parts = descriptor.split(CORNER_DELIMITER).collect::<Vec<_>>();
    if parts.len() < 3 {
        return Err(Err::MissingField { line: line_no, record: RecordKind::Face, expected: 3, found: parts.len() });
    }
    let index = |s: &str| s.parse::<usize>()
        .map_err(|_| Err::MalformedNumber { line: line_no, field: s.to_string() });
    Ok(Corner {
        position: index(parts[0])?,
        tex_coord: index(parts[1])?,
        normal: index(parts[2])?,
    })
}
