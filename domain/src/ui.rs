//! Seams to the host page: the alert dialog and the file input element.

/// Shows a blocking, user-visible message
pub trait Alerter {
    fn alert(&self, message: &str);
}

impl<F> Alerter for F
where
    F: Fn(&str),
{
    fn alert(&self, message: &str) {
        self(message)
    }
}

/// A file picked by the user, with its host-specific content handle
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<F> {
    pub name: String,
    pub mime_type: String,
    pub content: F,
}

/// The form's `<input type="file">`
pub trait FileInput {
    type File;

    /// First file of the input's file list
    fn first_file(&self) -> Option<SelectedFile<Self::File>>;

    /// Current value of the input (a path string)
    fn value(&self) -> String;

    /// Reset the input's value to the empty string
    fn clear(&self);
}
