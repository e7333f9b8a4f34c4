//! Settings document model
//!
//! Parses the options XML into a flat view keyed by element path. The root
//! element is the first path segment, nested elements are joined with `/`,
//! attributes are addressed as `path@name`, and the n-th repeated sibling
//! (n >= 2) is addressed as `name[n]`. `name[1]` is an alias for `name`.
//! In mixed content, text runs separated by child elements are joined with a
//! single space, so `<a>1<b/>2</a>` gives `a` the value `"1 2"`.

use crate::shared::error::{AppError, AppResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::str::FromStr;

/// Name of the bundled settings resource
pub const CONFIG_FILE_NAME: &str = "config.xml";

/// Parsed view of the settings XML
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsDocument {
    root: String,
    entries: BTreeMap<String, String>,
}

#[derive(Debug)]
struct Frame {
    path: String,
    text: String,
    has_children: bool,
    after_child: bool,
    child_counts: HashMap<String, usize>,
}

impl Frame {
    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.after_child && !self.text.is_empty() {
            self.text.push(' ');
        }
        self.after_child = false;
        self.text.push_str(text);
    }
}

impl SettingsDocument {
    /// Parse and validate an XML document. `name` only labels errors.
    pub fn parse(name: &str, bytes: &[u8]) -> AppResult<Self> {
        let mut reader = Reader::from_reader(bytes);
        reader.config_mut().trim_text(true);

        let malformed = |position: u64, reason: String| AppError::Malformed {
            name: name.to_string(),
            position,
            reason,
        };

        let mut root: Option<String> = None;
        let mut stack: Vec<Frame> = Vec::new();
        let mut entries = BTreeMap::new();

        loop {
            let position = reader.buffer_position() as u64;
            let event = reader
                .read_event()
                .map_err(|e| malformed(reader.buffer_position() as u64, e.to_string()))?;

            match event {
                Event::Start(start) => {
                    let frame = Self::open(&start, &mut root, &mut stack, &mut entries)
                        .map_err(|reason| malformed(position, reason))?;
                    stack.push(frame);
                }
                Event::Empty(start) => {
                    let frame = Self::open(&start, &mut root, &mut stack, &mut entries)
                        .map_err(|reason| malformed(position, reason))?;
                    entries.insert(frame.path, String::new());
                }
                Event::End(_) => {
                    let frame = stack
                        .pop()
                        .ok_or_else(|| malformed(position, "unexpected closing tag".to_string()))?;
                    let text = frame.text.trim();
                    if !text.is_empty() || !frame.has_children {
                        entries.insert(frame.path, text.to_string());
                    }
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|e| malformed(position, e.to_string()))?;
                    match stack.last_mut() {
                        Some(frame) => frame.push_text(&text),
                        None => {
                            return Err(malformed(position, "text outside of the root element".to_string()))
                        }
                    }
                }
                Event::CData(data) => {
                    let text = std::str::from_utf8(&data)
                        .map_err(|e| malformed(position, e.to_string()))?;
                    match stack.last_mut() {
                        Some(frame) => frame.push_text(text),
                        None => {
                            return Err(malformed(position, "CDATA outside of the root element".to_string()))
                        }
                    }
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions and doctypes carry no settings
                _ => {}
            }
        }

        let end = reader.buffer_position() as u64;
        if let Some(open) = stack.last() {
            return Err(malformed(end, format!("unclosed element '{}'", open.path)));
        }
        let root = root.ok_or_else(|| malformed(end, "document has no root element".to_string()))?;

        Ok(Self { root, entries })
    }

    /// Register a newly opened element and its attributes
    fn open(
        start: &BytesStart<'_>,
        root: &mut Option<String>,
        stack: &mut [Frame],
        entries: &mut BTreeMap<String, String>,
    ) -> Result<Frame, String> {
        let name = std::str::from_utf8(start.name().as_ref())
            .map_err(|e| format!("element name is not valid UTF-8: {}", e))?
            .to_string();

        let path = match stack.last_mut() {
            Some(parent) => {
                parent.has_children = true;
                parent.after_child = true;
                let count = parent.child_counts.entry(name.clone()).or_insert(0);
                *count += 1;
                if *count == 1 {
                    format!("{}/{}", parent.path, name)
                } else {
                    format!("{}/{}[{}]", parent.path, name, count)
                }
            }
            None => {
                if let Some(existing) = root.as_ref() {
                    return Err(format!(
                        "second root element '{}' after '{}'",
                        name, existing
                    ));
                }
                *root = Some(name.clone());
                name
            }
        };

        for attribute in start.attributes() {
            let attribute = attribute.map_err(|e| e.to_string())?;
            let key = std::str::from_utf8(attribute.key.as_ref())
                .map_err(|e| format!("attribute name is not valid UTF-8: {}", e))?;
            let value = attribute.unescape_value().map_err(|e| e.to_string())?;
            entries.insert(format!("{}@{}", path, key), value.into_owned());
        }

        Ok(Frame {
            path,
            text: String::new(),
            has_children: false,
            after_child: false,
            child_counts: HashMap::new(),
        })
    }

    /// Name of the root element
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Text value (or attribute value) at `path`
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(&normalize_path(path)).map(String::as_str)
    }

    /// Typed value at `path`, `None` when the path is absent
    pub fn get_as<T>(&self, path: &str) -> AppResult<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.get(path)
            .map(|raw| {
                raw.parse::<T>().map_err(|e| {
                    AppError::Validation(format!("Invalid value '{}' at '{}': {}", raw, path, e))
                })
            })
            .transpose()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(&normalize_path(path))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, sorted by path
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Drop explicit `[1]` indices so they resolve to the first sibling
fn normalize_path(path: &str) -> String {
    let path = path.trim_matches('/');
    let (elements, attribute) = match path.split_once('@') {
        Some((elements, attribute)) => (elements, Some(attribute)),
        None => (path, None),
    };

    let mut normalized = elements
        .split('/')
        .map(|segment| segment.strip_suffix("[1]").unwrap_or(segment))
        .collect::<Vec<_>>()
        .join("/");

    if let Some(attribute) = attribute {
        normalized.push('@');
        normalized.push_str(attribute);
    }
    normalized
}
