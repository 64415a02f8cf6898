use res_core::ResourceError;
use res_parser::XmlElementNode;

pub(crate) fn get_required_attr(
    node: &XmlElementNode,
    name: &str,
) -> Result<String, ResourceError> {
    let Some(raw) = node.attr(name) else {
        return Err(ResourceError::with_span(
            "XML_MISSING_ATTR",
            format!(
                "Missing required attribute \"{}\" on <{}>.",
                name, node.name
            ),
            node.location.clone(),
        ));
    };
    Ok(raw.to_string())
}

pub(crate) fn get_optional_attr(node: &XmlElementNode, name: &str) -> Option<String> {
    node.attr(name).map(str::to_string)
}

pub(crate) fn parse_integer_attr(
    node: &XmlElementNode,
    name: &str,
) -> Result<i64, ResourceError> {
    let raw = get_required_attr(node, name)?;
    raw.trim().parse::<i64>().map_err(|error| {
        ResourceError::with_span(
            "INTEGER_PARSE_ERROR",
            format!(
                "Attribute \"{}\" on <{}> is not a valid integer: \"{}\" ({}).",
                name, node.name, raw, error
            ),
            node.location.clone(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use res_parser::parse_xml_document;

    fn element(source: &str) -> XmlElementNode {
        parse_xml_document(source).expect("xml should parse").root
    }

    #[test]
    fn required_attr_reports_missing_name() {
        let node = element(r#"<string value="v"/>"#);
        assert_eq!(get_required_attr(&node, "value").expect("present"), "v");

        let error = get_required_attr(&node, "name").expect_err("missing attr");
        assert_eq!(error.code, "XML_MISSING_ATTR");
        assert!(error.message.contains("<string>"));
        assert!(error.span.is_some());
    }

    #[test]
    fn optional_attr_allows_absence() {
        let node = element(r#"<integer value="1"/>"#);
        assert_eq!(get_optional_attr(&node, "name"), None);
        assert_eq!(get_optional_attr(&node, "value"), Some("1".to_string()));
    }

    #[test]
    fn integer_attr_accepts_signs_and_whitespace() {
        for (raw, expected) in [(" 42 ", 42), ("-7", -7), ("+3", 3)] {
            let node = element(&format!(r#"<integer value="{}"/>"#, raw));
            assert_eq!(parse_integer_attr(&node, "value").ok(), Some(expected));
        }
    }

    #[test]
    fn integer_attr_rejects_non_integers() {
        for raw in ["abc", "1.5", "", "99999999999999999999"] {
            let node = element(&format!(r#"<integer value="{}"/>"#, raw));
            let error = parse_integer_attr(&node, "value").expect_err("invalid integer");
            assert_eq!(error.code, "INTEGER_PARSE_ERROR");
        }
    }
}
