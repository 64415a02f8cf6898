use std::fs;
use std::path::Path;

use res_core::ResourceError;
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Json,
    Text,
    Plist,
}

impl SourceKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "json" => Some(Self::Json),
            "text" => Some(Self::Text),
            "plist" => Some(Self::Plist),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Plist => "plist",
        }
    }
}

pub fn load_text_source(path: &Path) -> Result<String, ResourceError> {
    fs::read_to_string(path).map_err(|error| {
        ResourceError::new(
            "SOURCE_READ_ERROR",
            format!("Failed to read \"{}\": {}", path.display(), error),
        )
    })
}

pub fn load_json_source(path: &Path) -> Result<Value, ResourceError> {
    let content = load_text_source(path)?;
    serde_json::from_str(&content).map_err(|error| {
        ResourceError::new(
            "JSON_PARSE_ERROR",
            format!("Invalid json in \"{}\": {}", path.display(), error),
        )
    })
}

/// Loads an XML or binary property list and converts it to its JSON form.
pub fn load_plist_source(path: &Path) -> Result<Value, ResourceError> {
    let value = plist::Value::from_file(path).map_err(|error| {
        ResourceError::new(
            "PLIST_PARSE_ERROR",
            format!("Invalid plist \"{}\": {}", path.display(), error),
        )
    })?;
    plist_to_json(value, path)
}

fn plist_to_json(value: plist::Value, path: &Path) -> Result<Value, ResourceError> {
    let converted = match value {
        plist::Value::Dictionary(dict) => {
            let mut map = Map::new();
            for (key, entry) in dict {
                map.insert(key, plist_to_json(entry, path)?);
            }
            Value::Object(map)
        }
        plist::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| plist_to_json(item, path))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        plist::Value::Boolean(flag) => Value::Bool(flag),
        plist::Value::Integer(integer) => {
            if let Some(signed) = integer.as_signed() {
                Value::from(signed)
            } else if let Some(unsigned) = integer.as_unsigned() {
                Value::from(unsigned)
            } else {
                return Err(unsupported_plist_value(path, "integer"));
            }
        }
        plist::Value::Real(real) => match Number::from_f64(real) {
            Some(number) => Value::Number(number),
            None => return Err(unsupported_plist_value(path, "non-finite real")),
        },
        plist::Value::String(text) => Value::String(text),
        plist::Value::Date(date) => Value::String(date.to_xml_format()),
        plist::Value::Data(_) => return Err(unsupported_plist_value(path, "data")),
        _ => return Err(unsupported_plist_value(path, "uid")),
    };
    Ok(converted)
}

fn unsupported_plist_value(path: &Path, kind: &str) -> ResourceError {
    ResourceError::new(
        "PLIST_UNSUPPORTED_VALUE",
        format!(
            "Plist \"{}\" contains a {} value that has no json form.",
            path.display(),
            kind
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{temp_path, write_file};
    use serde_json::json;

    const SAMPLE_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>name</key>
    <string>preset</string>
    <key>passes</key>
    <integer>2</integer>
    <key>quality</key>
    <real>20.5</real>
    <key>enabled</key>
    <true/>
    <key>tracks</key>
    <array>
        <integer>1</integer>
        <string>two</string>
    </array>
</dict>
</plist>
"#;

    #[test]
    fn source_kind_maps_tags() {
        assert_eq!(SourceKind::from_tag("json"), Some(SourceKind::Json));
        assert_eq!(SourceKind::from_tag("text"), Some(SourceKind::Text));
        assert_eq!(SourceKind::from_tag("plist"), Some(SourceKind::Plist));
        assert_eq!(SourceKind::from_tag("string"), None);
        assert_eq!(SourceKind::Plist.label(), "plist");
    }

    #[test]
    fn load_text_source_returns_raw_content() {
        let path = temp_path("text-source").join("data.txt");
        write_file(&path, "line one\nline two\n");
        let text = load_text_source(&path).expect("text should load");
        assert_eq!(text, "line one\nline two\n");

        let error = load_text_source(&temp_path("text-missing")).expect_err("missing file");
        assert_eq!(error.code, "SOURCE_READ_ERROR");
    }

    #[test]
    fn load_json_source_parses_and_reports_invalid_json() {
        let root = temp_path("json-source");
        write_file(&root.join("ok.json"), r#"{"b": [1, 2], "a": null}"#);
        write_file(&root.join("bad.json"), "{ not json");

        let value = load_json_source(&root.join("ok.json")).expect("json should load");
        assert_eq!(value, json!({"a": null, "b": [1, 2]}));

        let error = load_json_source(&root.join("bad.json")).expect_err("bad json should fail");
        assert_eq!(error.code, "JSON_PARSE_ERROR");
        assert!(error.message.contains("bad.json"));
    }

    #[test]
    fn load_plist_source_converts_to_json() {
        let path = temp_path("plist-source").join("preset.plist");
        write_file(&path, SAMPLE_PLIST);

        let value = load_plist_source(&path).expect("plist should load");
        assert_eq!(
            value,
            json!({
                "enabled": true,
                "name": "preset",
                "passes": 2,
                "quality": 20.5,
                "tracks": [1, "two"]
            })
        );
    }

    #[test]
    fn load_plist_source_rejects_data_values() {
        let path = temp_path("plist-data").join("blob.plist");
        write_file(
            &path,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
    <key>blob</key>
    <data>AAEC</data>
</dict>
</plist>
"#,
        );

        let error = load_plist_source(&path).expect_err("data should be rejected");
        assert_eq!(error.code, "PLIST_UNSUPPORTED_VALUE");
    }

    #[test]
    fn load_plist_source_reports_parse_errors() {
        let path = temp_path("plist-bad").join("bad.plist");
        write_file(&path, "<plist><dict><key>a</key></plist>");

        let error = load_plist_source(&path).expect_err("bad plist should fail");
        assert_eq!(error.code, "PLIST_PARSE_ERROR");
    }
}
