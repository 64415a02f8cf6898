use res_core::{ResourceError, ResourceMap, ResourceValue};
use res_parser::{XmlDocument, XmlElementNode};
use tracing::{debug, warn};

use crate::include_paths::IncludePaths;
use crate::sources::{load_json_source, load_plist_source, load_text_source, SourceKind};
use crate::xml_utils::{get_optional_attr, get_required_attr, parse_integer_attr};
use crate::{BuildOptions, InvalidJsonPolicy};

#[derive(Debug)]
enum Container {
    Mapping(ResourceMap),
    Sequence(Vec<ResourceValue>),
}

impl Container {
    /// Mappings overwrite by key; sequences append and ignore the key.
    fn insert(&mut self, key: String, value: ResourceValue) {
        match self {
            Self::Mapping(map) => {
                map.insert(key, value);
            }
            Self::Sequence(items) => items.push(value),
        }
    }

    fn into_value(self) -> ResourceValue {
        match self {
            Self::Mapping(map) => ResourceValue::Section(map),
            Self::Sequence(items) => ResourceValue::List(items),
        }
    }
}

/// An open container and the key it is attached under once closed.
#[derive(Debug)]
struct Frame {
    key: String,
    container: Container,
}

/// Builds the resource tree from a resource-list document.
///
/// The stack starts with the root mapping. `section` and `array` push a new
/// container that is attached to its parent when the element closes, so the
/// stack depth always equals the number of open containers plus one.
#[derive(Debug)]
pub struct ResourceTreeBuilder {
    include_paths: IncludePaths,
    invalid_json: InvalidJsonPolicy,
    stack: Vec<Frame>,
}

impl ResourceTreeBuilder {
    pub fn new(options: &BuildOptions) -> Self {
        Self {
            include_paths: IncludePaths::new(options.include_paths.clone()),
            invalid_json: options.invalid_json,
            stack: vec![Frame {
                key: String::new(),
                container: Container::Mapping(ResourceMap::new()),
            }],
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn build(mut self, document: &XmlDocument) -> Result<ResourceMap, ResourceError> {
        self.visit(&document.root)?;
        self.finish()
    }

    fn visit(&mut self, node: &XmlElementNode) -> Result<(), ResourceError> {
        self.start_element(node)?;
        for child in &node.children {
            self.visit(child)?;
        }
        self.end_element(node)
    }

    pub fn start_element(&mut self, node: &XmlElementNode) -> Result<(), ResourceError> {
        match node.name.as_str() {
            "section" => {
                let key = self.entry_key(node)?;
                self.push(key, Container::Mapping(ResourceMap::new()));
            }
            "array" => {
                let key = self.entry_key(node)?;
                self.push(key, Container::Sequence(Vec::new()));
            }
            "integer" => {
                let key = self.entry_key(node)?;
                let value = parse_integer_attr(node, "value")?;
                self.insert(key, ResourceValue::Integer(value), node)?;
            }
            "string" => {
                let key = self.entry_key(node)?;
                let value = get_required_attr(node, "value")?;
                self.insert(key, ResourceValue::String(value), node)?;
            }
            tag => match SourceKind::from_tag(tag) {
                Some(kind) => self.start_source(kind, node)?,
                None => debug!(tag, "skipping unrecognized element"),
            },
        }
        Ok(())
    }

    pub fn end_element(&mut self, node: &XmlElementNode) -> Result<(), ResourceError> {
        if node.name != "section" && node.name != "array" {
            return Ok(());
        }

        let unbalanced = || {
            ResourceError::with_span(
                "SECTION_UNBALANCED",
                format!("Closing <{}> without a matching open container.", node.name),
                node.location.clone(),
            )
        };
        if self.stack.len() < 2 {
            return Err(unbalanced());
        }
        let frame = self.stack.pop().ok_or_else(unbalanced)?;
        debug!(key = %frame.key, depth = self.stack.len(), "closed container");
        self.insert(frame.key, frame.container.into_value(), node)
    }

    /// Ends the build. Fails if any container is still open.
    pub fn finish(mut self) -> Result<ResourceMap, ResourceError> {
        if self.stack.len() != 1 {
            return Err(ResourceError::new(
                "SECTION_UNBALANCED",
                format!(
                    "Document ended with {} unclosed container(s).",
                    self.stack.len().saturating_sub(1)
                ),
            ));
        }
        match self.stack.pop().map(|frame| frame.container) {
            Some(Container::Mapping(map)) => Ok(map),
            _ => Err(ResourceError::new(
                "SECTION_UNBALANCED",
                "Root container must be a mapping.",
            )),
        }
    }

    fn start_source(
        &mut self,
        kind: SourceKind,
        node: &XmlElementNode,
    ) -> Result<(), ResourceError> {
        let file = get_required_attr(node, "file")?;
        let key = self.entry_key(node)?;

        let Some(path) = self.include_paths.resolve(&file) else {
            return Err(ResourceError::with_span(
                "SOURCE_NOT_FOUND",
                format!("No such {} file \"{}\".", kind.label(), file),
                node.location.clone(),
            ));
        };

        let value = match kind {
            SourceKind::Json => match load_json_source(&path) {
                Ok(document) => ResourceValue::Document(document),
                Err(error) if self.invalid_json == InvalidJsonPolicy::Skip => {
                    warn!(key = %key, "{}", error);
                    return Ok(());
                }
                Err(error) => return Err(with_location(error, node)),
            },
            SourceKind::Text => ResourceValue::String(
                load_text_source(&path).map_err(|error| with_location(error, node))?,
            ),
            SourceKind::Plist => ResourceValue::Document(
                load_plist_source(&path).map_err(|error| with_location(error, node))?,
            ),
        };
        self.insert(key, value, node)
    }

    /// Entries of a mapping need a `name`; inside a sequence it is optional.
    fn entry_key(&self, node: &XmlElementNode) -> Result<String, ResourceError> {
        match self.stack.last().map(|frame| &frame.container) {
            Some(Container::Sequence(_)) => {
                Ok(get_optional_attr(node, "name").unwrap_or_default())
            }
            _ => get_required_attr(node, "name"),
        }
    }

    fn push(&mut self, key: String, container: Container) {
        debug!(key = %key, depth = self.stack.len() + 1, "opened container");
        self.stack.push(Frame { key, container });
    }

    fn insert(
        &mut self,
        key: String,
        value: ResourceValue,
        node: &XmlElementNode,
    ) -> Result<(), ResourceError> {
        let Some(frame) = self.stack.last_mut() else {
            return Err(ResourceError::with_span(
                "SECTION_UNBALANCED",
                "No open container to receive the value.",
                node.location.clone(),
            ));
        };
        debug!(key = %key, kind = value.type_name(), "inserted resource");
        frame.container.insert(key, value);
        Ok(())
    }
}

fn with_location(mut error: ResourceError, node: &XmlElementNode) -> ResourceError {
    if error.span.is_none() {
        error.span = Some(node.location.clone());
    }
    error
}
