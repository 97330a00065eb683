use std::fmt;

/// Byte blobs longer than this are shown truncated, with their total length.
const MAX_BYTES_SHOWN: usize = 32;

/// A decoded metadata value, independent of the decoder that produced it.
///
/// Image tags and PDF info entries are both converted into this type at the
/// decoder boundary, so the report builder only ever formats `MetaValue`s.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Text(String),
    Integer(i64),
    Float(f64),
    /// Numerator and denominator, kept unreduced as stored in the file.
    Rational(i64, i64),
    Bytes(Vec<u8>),
    Tuple(Vec<MetaValue>),
}

impl MetaValue {
    /// Numeric value of a scalar, if it has one.
    ///
    /// A rational with a zero denominator yields `NaN` or an infinity rather
    /// than `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Float(f) => Some(*f),
            Self::Rational(num, denom) => Some(*num as f64 / *denom as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Collapse a list of decoded components: one component stands for itself,
    /// anything else becomes a tuple.
    pub fn from_components(mut items: Vec<MetaValue>) -> Self {
        match items.len() {
            1 => items.swap_remove(0),
            _ => Self::Tuple(items),
        }
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Rational(num, 1) => write!(f, "{num}"),
            Self::Rational(num, denom) => write!(f, "{num}/{denom}"),
            Self::Bytes(bytes) => fmt_bytes(bytes, f),
            Self::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Printable ASCII is shown as text; anything else as hex.
fn fmt_bytes(bytes: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let printable = !bytes.is_empty() && bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ');
    if printable {
        return f.write_str(&String::from_utf8_lossy(bytes));
    }

    for (i, byte) in bytes.iter().take(MAX_BYTES_SHOWN).enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{byte:02x}")?;
    }
    if bytes.len() > MAX_BYTES_SHOWN {
        write!(f, " … ({} bytes)", bytes.len())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_display_plainly() {
        assert_eq!(MetaValue::Text("Canon".into()).to_string(), "Canon");
        assert_eq!(MetaValue::Integer(-3).to_string(), "-3");
        assert_eq!(MetaValue::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn rationals_keep_their_fraction() {
        assert_eq!(MetaValue::Rational(1, 250).to_string(), "1/250");
        assert_eq!(MetaValue::Rational(72, 1).to_string(), "72");
    }

    #[test]
    fn tuples_are_parenthesized() {
        let dms = MetaValue::Tuple(vec![
            MetaValue::Rational(40, 1),
            MetaValue::Rational(26, 1),
            MetaValue::Rational(468, 10),
        ]);
        assert_eq!(dms.to_string(), "(40, 26, 468/10)");
        assert_eq!(MetaValue::Tuple(Vec::new()).to_string(), "()");
    }

    #[test]
    fn ascii_bytes_render_as_text() {
        assert_eq!(MetaValue::Bytes(b"0230".to_vec()).to_string(), "0230");
    }

    #[test]
    fn binary_bytes_render_as_hex() {
        assert_eq!(MetaValue::Bytes(vec![0x01, 0x02, 0xff]).to_string(), "01 02 ff");
    }

    #[test]
    fn long_binary_blobs_are_truncated() {
        let blob = vec![0u8; 100];
        let shown = MetaValue::Bytes(blob).to_string();
        assert!(shown.ends_with("… (100 bytes)"), "{shown}");
        let hex = shown.split(" … ").next().unwrap();
        assert_eq!(hex.split(' ').count(), MAX_BYTES_SHOWN);
    }

    #[test]
    fn as_f64_covers_numeric_variants() {
        assert_eq!(MetaValue::Integer(4).as_f64(), Some(4.0));
        assert_eq!(MetaValue::Rational(468, 10).as_f64(), Some(46.8));
        assert_eq!(MetaValue::Float(0.5).as_f64(), Some(0.5));
        assert!(MetaValue::Rational(1, 0).as_f64().unwrap().is_infinite());
        assert_eq!(MetaValue::Text("4".into()).as_f64(), None);
    }

    #[test]
    fn from_components_collapses_singletons() {
        assert_eq!(
            MetaValue::from_components(vec![MetaValue::Integer(1)]),
            MetaValue::Integer(1)
        );
        assert_eq!(
            MetaValue::from_components(vec![MetaValue::Integer(1), MetaValue::Integer(2)]),
            MetaValue::Tuple(vec![MetaValue::Integer(1), MetaValue::Integer(2)])
        );
    }
}
