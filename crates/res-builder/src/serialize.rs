use std::io::Write;

use res_core::{ResourceError, ResourceMap};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

const INDENT: &[u8] = b"    ";

fn map_serialize_error(error: impl std::fmt::Display) -> ResourceError {
    ResourceError::new("OUTPUT_SERIALIZE", error.to_string())
}

/// Writes the tree as 4-space indented JSON followed by a newline. Keys come
/// out sorted because every mapping in the tree is ordered.
pub fn write_json<W: Write>(tree: &ResourceMap, writer: W) -> Result<(), ResourceError> {
    let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    tree.serialize(&mut serializer).map_err(map_serialize_error)?;
    let mut writer = serializer.into_inner();
    writer.write_all(b"\n").map_err(map_serialize_error)?;
    writer.flush().map_err(map_serialize_error)
}

pub fn to_json_string(tree: &ResourceMap) -> Result<String, ResourceError> {
    let mut buffer = Vec::new();
    write_json(tree, &mut buffer)?;
    String::from_utf8(buffer).map_err(map_serialize_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use res_core::ResourceValue;

    #[test]
    fn to_json_string_sorts_keys_and_indents_four_spaces() {
        let mut section = ResourceMap::new();
        section.insert("y".to_string(), ResourceValue::Integer(2));
        section.insert("b".to_string(), ResourceValue::String("hi".to_string()));

        let mut tree = ResourceMap::new();
        tree.insert("zeta".to_string(), ResourceValue::Integer(1));
        tree.insert("alpha".to_string(), ResourceValue::Section(section));

        let json = to_json_string(&tree).expect("tree should serialize");
        assert_eq!(
            json,
            "{\n    \"alpha\": {\n        \"b\": \"hi\",\n        \"y\": 2\n    },\n    \"zeta\": 1\n}\n"
        );
    }

    #[test]
    fn to_json_string_sorts_loaded_documents() {
        let document = serde_json::from_str(r#"{"b": 1, "a": {"d": 2, "c": 3}}"#)
            .expect("document should parse");
        let mut tree = ResourceMap::new();
        tree.insert("doc".to_string(), ResourceValue::Document(document));

        let json = to_json_string(&tree).expect("tree should serialize");
        let a = json.find("\"a\"").expect("a present");
        let b = json.find("\"b\"").expect("b present");
        let c = json.find("\"c\"").expect("c present");
        let d = json.find("\"d\"").expect("d present");
        assert!(a < b);
        assert!(c < d);
    }

    #[test]
    fn to_json_string_renders_empty_tree() {
        assert_eq!(
            to_json_string(&ResourceMap::new()).expect("empty tree"),
            "{}\n"
        );
    }
}
