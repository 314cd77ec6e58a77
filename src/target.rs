use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Target type retained by [`default_target_filter`].
pub const PAGE_TARGET_TYPE: &str = "page";

/// A debuggable target as reported by Chrome's `/json/list` endpoint.
///
/// The entry is kept as raw JSON so a filtered list serializes back unchanged. Only
/// `type` is ever read, and a `type` that is missing or not a string reads as no type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetDescriptor(Value);

impl TargetDescriptor {
    /// A descriptor carrying only a type tag.
    pub fn with_type(target_type: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("type".to_string(), Value::String(target_type.into()));
        TargetDescriptor(Value::Object(fields))
    }

    pub fn target_type(&self) -> Option<&str> {
        self.get_str("type")
    }

    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }

    pub fn url(&self) -> Option<&str> {
        self.get_str("url")
    }

    pub fn web_socket_debugger_url(&self) -> Option<&str> {
        self.get_str("webSocketDebuggerUrl")
    }

    /// Any field of the entry, untouched.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }
}

impl From<Value> for TargetDescriptor {
    fn from(value: Value) -> Self {
        TargetDescriptor(value)
    }
}

/// Build a predicate that keeps targets whose type is in `allowed`.
///
/// `None` or an empty allow-list disables filtering. Matching is exact string equality,
/// and a target without a type never matches an active filter.
pub fn target_filter<S: AsRef<str>>(
    allowed: Option<&[S]>,
) -> impl Fn(&TargetDescriptor) -> bool {
    let allowed: Vec<String> = allowed
        .unwrap_or_default()
        .iter()
        .map(|t| t.as_ref().to_string())
        .collect();

    move |target: &TargetDescriptor| {
        if allowed.is_empty() {
            return true;
        }
        target
            .target_type()
            .is_some_and(|t| allowed.iter().any(|a| a == t))
    }
}

/// Keeps top-level page targets only.
pub fn default_target_filter(target: &TargetDescriptor) -> bool {
    target.target_type() == Some(PAGE_TARGET_TYPE)
}

/// Filter an owned list of targets, preserving order.
pub fn filter_targets<S: AsRef<str>>(
    targets: Vec<TargetDescriptor>,
    allowed: Option<&[S]>,
) -> Vec<TargetDescriptor> {
    let keep = target_filter(allowed);
    targets.into_iter().filter(|target| keep(target)).collect()
}
