use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::view::UserView;

/// Shared, non-owning handle to the currently attached view.
///
/// The lock only guards the handle itself; callers upgrade and release it
/// before calling into the view.
#[derive(Default)]
pub(super) struct ViewSlot {
    view: Mutex<Option<Weak<dyn UserView>>>,
}

impl ViewSlot {
    pub(super) fn replace(&self, view: Weak<dyn UserView>) {
        *self.view.lock() = Some(view);
    }

    pub(super) fn clear(&self) {
        *self.view.lock() = None;
    }

    /// Upgrade the attached view, if it is still alive.
    pub(super) fn current(&self) -> Option<Arc<dyn UserView>> {
        self.view.lock().as_ref().and_then(Weak::upgrade)
    }
}
