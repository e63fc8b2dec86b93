use metrics::{IntoLabels, Label, SharedString};

/// Labels identifying who is searching, e.g. `caller=cli`. Every `search.*`
/// counter carries them, and the failure counters add their `reason` or `kind`
/// on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

/// Searches that are not attributed to a caller.
pub const NO_LABEL: Labels = Labels(vec![]);

impl Labels {
    /// Copy of these labels extended with a per-outcome label such as `reason`.
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Labels {
        let mut tags = self.0.clone();
        tags.extend(additional_labels.iter().map(Label::from));
        Labels(tags)
    }

    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}
