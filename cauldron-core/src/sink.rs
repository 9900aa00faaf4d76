//! Snapshot sinks — where the serialized weights go after every change.

/// Receives the JSON weight payload, e.g. `[0.1,0.55]`.
///
/// The panel calls `publish` synchronously after every render and every
/// weight input, so the sink always holds the latest state once a handler
/// returns.
pub trait SnapshotSink {
    fn publish(&mut self, payload: &str);
}

/// Records every payload in order. Handy for tests and `replay --trace`.
impl SnapshotSink for Vec<String> {
    fn publish(&mut self, payload: &str) {
        self.push(payload.to_string());
    }
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for &mut S {
    fn publish(&mut self, payload: &str) {
        (**self).publish(payload);
    }
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for Box<S> {
    fn publish(&mut self, payload: &str) {
        (**self).publish(payload);
    }
}

/// The hidden form field the weights are submitted through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenField {
    name: String,
    value: String,
    writes: usize,
}

impl HiddenField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            writes: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current field value; empty until the first publish.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of publishes received.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// `name=value` as the form would submit it.
    pub fn form_pair(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

impl SnapshotSink for HiddenField {
    fn publish(&mut self, payload: &str) {
        self.value.clear();
        self.value.push_str(payload);
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_field_keeps_latest() {
        let mut field = HiddenField::new("effect_weights_json");
        assert_eq!(field.value(), "");
        field.publish("[0.1]");
        field.publish("[0.1,0.2]");
        assert_eq!(field.value(), "[0.1,0.2]");
        assert_eq!(field.writes(), 2);
        assert_eq!(field.form_pair(), "effect_weights_json=[0.1,0.2]");
    }

    #[test]
    fn vec_records_through_mut_ref() {
        fn feed<S: SnapshotSink>(mut sink: S) {
            sink.publish("[1.0]");
            sink.publish("[0.5]");
        }

        let mut log: Vec<String> = Vec::new();
        feed(&mut log);
        assert_eq!(log, vec!["[1.0]".to_string(), "[0.5]".to_string()]);
    }
}
