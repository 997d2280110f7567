//! Browser implementations of the container's host seams.

use billed_domain::{FileInput, Route, SelectedFile, SessionStorage};
use gloo::storage::{LocalStorage, Storage};
use web_sys::HtmlInputElement;

/// Session identity read from `window.localStorage`
pub struct LocalStorageSession;

impl SessionStorage for LocalStorageSession {
    fn get_item(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }
}

pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}

/// Point the address bar at `route`
pub fn set_hash(route: Route) {
    if let Err(e) = gloo::utils::window().location().set_hash(route.as_token()) {
        gloo::console::error!("Failed to change location:", e);
    }
}

/// Route named by the current location hash
pub fn current_route() -> Option<Route> {
    let hash = gloo::utils::window().location().hash().ok()?;
    Route::from_token(&hash)
}

/// The form's `<input type="file">`
pub struct BrowserFileInput {
    input: HtmlInputElement,
}

impl BrowserFileInput {
    pub fn new(input: HtmlInputElement) -> Self {
        Self { input }
    }
}

impl FileInput for BrowserFileInput {
    type File = web_sys::File;

    fn first_file(&self) -> Option<SelectedFile<web_sys::File>> {
        let file = self.input.files()?.get(0)?;
        Some(SelectedFile {
            name: file.name(),
            mime_type: file.type_(),
            content: file,
        })
    }

    fn value(&self) -> String {
        self.input.value()
    }

    fn clear(&self) {
        self.input.set_value("");
    }
}
