use kamadak_exif::{Context, Field, In, Tag, Value};

use crate::gps::Coordinate;
use crate::value::MetaValue;

/// IFD pointer tags. They locate sub-directories and carry no metadata.
const POINTER_TAGS: &[Tag] = &[Tag::ExifIFDPointer, Tag::GPSInfoIFDPointer, Tag::InteropIFDPointer];

/// One decoded tag.
#[derive(Debug, Clone, PartialEq)]
pub struct ExifEntry {
    pub tag: Tag,
    pub value: MetaValue,
}

impl ExifEntry {
    pub fn new(tag: Tag, value: MetaValue) -> Self {
        Self { tag, value }
    }

    /// The tag's name (`"DateTimeOriginal"`, `"GPSLatitude"`), or its raw
    /// number when the tag is not in the decoder's tables.
    pub fn label(&self) -> String {
        if self.tag.description().is_some() {
            self.tag.to_string()
        } else {
            self.tag.number().to_string()
        }
    }
}

/// The tags of a GPS IFD.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpsRecord {
    entries: Vec<ExifEntry>,
}

impl GpsRecord {
    pub fn new(entries: Vec<ExifEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, tag: Tag) -> Option<&MetaValue> {
        self.entries.iter().find(|e| e.tag == tag).map(|e| &e.value)
    }

    pub fn entries(&self) -> &[ExifEntry] {
        &self.entries
    }

    /// Latitude and longitude in decimal degrees.
    ///
    /// `None` unless latitude, longitude and both hemisphere references are
    /// all present and usable.
    pub fn position(&self) -> Option<(f64, f64)> {
        let latitude =
            Coordinate::from_values(self.get(Tag::GPSLatitude)?, self.get(Tag::GPSLatitudeRef)?)?;
        let longitude =
            Coordinate::from_values(self.get(Tag::GPSLongitude)?, self.get(Tag::GPSLongitudeRef)?)?;
        Some((latitude.to_decimal(), longitude.to_decimal()))
    }
}

/// The primary image's tags, with GPS tags split out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagDictionary {
    entries: Vec<ExifEntry>,
    gps: Option<GpsRecord>,
}

impl TagDictionary {
    pub fn new(entries: Vec<ExifEntry>, gps: Option<GpsRecord>) -> Self {
        Self { entries, gps }
    }

    /// Build a dictionary from decoded fields, in field order.
    ///
    /// Thumbnail fields and IFD pointers are dropped. GPS-namespace fields
    /// go to the GPS record, which exists whenever the file has a GPS IFD.
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = &'a Field>) -> Self {
        let mut entries = Vec::new();
        let mut gps: Option<GpsRecord> = None;

        for field in fields {
            if field.ifd_num != In::PRIMARY {
                continue;
            }
            if field.tag == Tag::GPSInfoIFDPointer {
                gps.get_or_insert_with(GpsRecord::default);
            }
            if POINTER_TAGS.contains(&field.tag) {
                continue;
            }

            let entry = ExifEntry::new(field.tag, convert_value(&field.value));
            if field.tag.context() == Context::Gps {
                gps.get_or_insert_with(GpsRecord::default).entries.push(entry);
            } else {
                entries.push(entry);
            }
        }

        Self { entries, gps }
    }

    /// Non-GPS entries.
    pub fn entries(&self) -> &[ExifEntry] {
        &self.entries
    }

    pub fn gps(&self) -> Option<&GpsRecord> {
        self.gps.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.gps.is_none()
    }
}

/// Convert a raw Exif value into a [`MetaValue`].
pub(crate) fn convert_value(value: &Value) -> MetaValue {
    match value {
        Value::Ascii(parts) => {
            let text = parts
                .iter()
                .map(|p| String::from_utf8_lossy(p).trim_end_matches('\0').to_string())
                .collect::<Vec<_>>()
                .join(", ");
            MetaValue::Text(text)
        }
        Value::Byte(v) => integers(v.iter().map(|&n| i64::from(n))),
        Value::Short(v) => integers(v.iter().map(|&n| i64::from(n))),
        Value::Long(v) => integers(v.iter().map(|&n| i64::from(n))),
        Value::SByte(v) => integers(v.iter().map(|&n| i64::from(n))),
        Value::SShort(v) => integers(v.iter().map(|&n| i64::from(n))),
        Value::SLong(v) => integers(v.iter().map(|&n| i64::from(n))),
        Value::Rational(v) => MetaValue::from_components(
            v.iter()
                .map(|r| MetaValue::Rational(i64::from(r.num), i64::from(r.denom)))
                .collect(),
        ),
        Value::SRational(v) => MetaValue::from_components(
            v.iter()
                .map(|r| MetaValue::Rational(i64::from(r.num), i64::from(r.denom)))
                .collect(),
        ),
        Value::Float(v) => {
            MetaValue::from_components(v.iter().map(|&f| MetaValue::Float(f64::from(f))).collect())
        }
        Value::Double(v) => {
            MetaValue::from_components(v.iter().map(|&f| MetaValue::Float(f)).collect())
        }
        Value::Undefined(bytes, _) => MetaValue::Bytes(bytes.clone()),
        Value::Unknown(typ, count, _) => {
            MetaValue::Text(format!("<unknown type {typ}, {count} item(s)>"))
        }
    }
}

fn integers(values: impl Iterator<Item = i64>) -> MetaValue {
    MetaValue::from_components(values.map(MetaValue::Integer).collect())
}
