use metrics::{IntoLabels, Label, SharedString};

/// Labels attached to every metric emitted by a directory or an inferrer,
/// e.g. the endpoint the banks were loaded from.
#[derive(Clone, Debug, Default)]
pub struct Labels(Vec<Label>);

pub const NO_LABEL: Labels = Labels(vec![]);

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    /// Copy of these labels extended with `additional_labels`
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Labels {
        let mut labels = self.0.clone();
        labels.extend(additional_labels.iter().map(Label::from));
        Labels(labels)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}
