use std::fmt;

pub(crate) const GROUP: &str = "g";
pub(crate) const POSITION: &str = "v";
pub(crate) const TEX_COORD: &str = "vt";
pub(crate) const NORMAL: &str = "vn";
pub(crate) const FACE: &str = "f";

pub(crate) const FIELD_DELIMITER: char = ' ';
pub(crate) const CORNER_DELIMITER: char = '/';

/// Obj puts the texture origin at the bottom-left corner while the model puts it at the top-left,
/// so the same mapping converts in both directions.
pub(crate) fn flip_v(v: f64) -> f64 {
    1.0 - v
}

/// The kinds of records the converters understand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Position,
    TexCoord,
    Normal,
    Face,
}

impl RecordKind {
    pub(crate) fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            POSITION => Some(Self::Position),
            TEX_COORD => Some(Self::TexCoord),
            NORMAL => Some(Self::Normal),
            FACE => Some(Self::Face),
            _ => None,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Position => "position",
            Self::TexCoord => "texture coordinate",
            Self::Normal => "normal",
            Self::Face => "face",
        };
        f.write_str(name)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_v_is_an_involution() {
        for v in [0.0, 0.25, 0.5, 0.9375, 1.0, 0.1, 0.7] {
            assert!((flip_v(flip_v(v)) - v).abs() < 1e-12);
        }
        assert_eq!(flip_v(0.0), 1.0);
        assert_eq!(flip_v(1.0), 0.0);
    }

    #[test]
    fn markers() {
        assert_eq!(RecordKind::from_marker(POSITION), Some(RecordKind::Position));
        assert_eq!(RecordKind::from_marker(TEX_COORD), Some(RecordKind::TexCoord));
        assert_eq!(RecordKind::from_marker(NORMAL), Some(RecordKind::Normal));
        assert_eq!(RecordKind::from_marker(FACE), Some(RecordKind::Face));
        assert_eq!(RecordKind::Face.to_string(), "face");
        assert_eq!(RecordKind::from_marker(GROUP), None);
        assert_eq!(RecordKind::from_marker(""), None);
        assert_eq!(RecordKind::from_marker("vp"), None);
    }
}
