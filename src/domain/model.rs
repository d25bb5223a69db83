use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const COMMAND_TYPE_LABEL: &str = "label";
pub const ACTION_ADD_TO_PROJECT: &str = "addToProject";

const FIELD_TYPE: &str = "type";
const FIELD_NAME: &str = "name";
const FIELD_ACTION: &str = "action";
const FIELD_ADD_TO_PROJECT: &str = "addToProject";
const FIELD_URL: &str = "url";

/// One entry of `labels.json`: a label and the project URLs it belongs to.
///
/// Both fields are required. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMapping {
    pub label: String,
    pub projects: Vec<String>,
}

/// A single label command as consumed by the triage automation.
///
/// Held as the JSON object it was read from, key order included, so that
/// hand-written commands are written back exactly as they came in. Field
/// values are not type-checked; the accessors return raw JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandRecord(Map<String, Value>);

impl CommandRecord {
    /// Builds the `{type: "label", action: "addToProject"}` command for one
    /// label/project pair.
    pub fn add_to_project(label: &str, url: &str) -> Self {
        let mut target = Map::new();
        target.insert(FIELD_URL.to_string(), Value::from(url));

        let mut fields = Map::new();
        fields.insert(FIELD_TYPE.to_string(), Value::from(COMMAND_TYPE_LABEL));
        fields.insert(FIELD_NAME.to_string(), Value::from(label));
        fields.insert(FIELD_ACTION.to_string(), Value::from(ACTION_ADD_TO_PROJECT));
        fields.insert(FIELD_ADD_TO_PROJECT.to_string(), Value::Object(target));
        Self(fields)
    }

    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn kind(&self) -> Option<&Value> {
        self.0.get(FIELD_TYPE)
    }

    pub fn name(&self) -> Option<&Value> {
        self.0.get(FIELD_NAME)
    }

    pub fn action(&self) -> Option<&Value> {
        self.0.get(FIELD_ACTION)
    }

    /// The `addToProject` value; `null` counts as absent.
    pub fn add_to_project_target(&self) -> Option<&Value> {
        self.0.get(FIELD_ADD_TO_PROJECT).filter(|v| !v.is_null())
    }

    pub fn has_add_to_project(&self) -> bool {
        self.add_to_project_target().is_some()
    }

    /// `addToProject.url`, absent when `addToProject` is missing, is not an
    /// object, or has no `url` key.
    pub fn target_url(&self) -> Option<&Value> {
        self.add_to_project_target()
            .and_then(Value::as_object)
            .and_then(|target| target.get(FIELD_URL))
    }

    pub fn dedupe_key(&self) -> DedupeKey {
        if !self.has_add_to_project() {
            return DedupeKey::Exempt;
        }
        match (KeyPart::of(self.name()), KeyPart::of(self.target_url())) {
            (Some(name), Some(url)) => DedupeKey::Pair(name, url),
            _ => DedupeKey::Distinct,
        }
    }
}

/// How a command takes part in deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DedupeKey {
    /// No `addToProject`: always kept, never compared.
    Exempt,
    /// `name` or `url` is an object or array, which is equal to nothing else.
    Distinct,
    Pair(KeyPart, KeyPart),
}

/// A scalar JSON value (or a missing one) in a form that hashes and compares
/// the way strict equality does: `1` and `1.0` are equal, `"1"` and `1` are
/// not, and two missing fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyPart {
    Missing,
    Null,
    Bool(bool),
    Number(u64),
    Text(String),
}

impl KeyPart {
    fn of(value: Option<&Value>) -> Option<Self> {
        match value {
            None => Some(Self::Missing),
            Some(Value::Null) => Some(Self::Null),
            Some(Value::Bool(b)) => Some(Self::Bool(*b)),
            Some(Value::Number(n)) => n.as_f64().map(|f| {
                // -0 and 0 are equal
                let normalized = if f == 0.0 { 0.0f64 } else { f };
                Self::Number(normalized.to_bits())
            }),
            Some(Value::String(s)) => Some(Self::Text(s.clone())),
            Some(Value::Array(_)) | Some(Value::Object(_)) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult<T> {
    pub processed_records: Vec<T>,
    pub input_count: usize,
    pub dropped_count: usize,
}

impl<T> TransformResult<T> {
    pub fn new(processed_records: Vec<T>, input_count: usize, dropped_count: usize) -> Self {
        Self {
            processed_records,
            input_count,
            dropped_count,
        }
    }
}
