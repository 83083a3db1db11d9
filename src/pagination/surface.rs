use super::view_model::ViewModel;

/// Something a paginator can draw into.
///
/// The paginator calls [`Surface::apply`] once per render with the freshly
/// computed view model; the surface replaces whatever it showed before with
/// the new items and control strip. Implementations own all presentation
/// concerns (layout, colours, sizes).
pub trait Surface<T> {
    fn apply(&mut self, view: &ViewModel<'_, T>);
}

/// Surfaces can be shared with the caller through a mutable borrow.
impl<T, S: Surface<T> + ?Sized> Surface<T> for &mut S {
    fn apply(&mut self, view: &ViewModel<'_, T>) {
        (**self).apply(view)
    }
}

/// A surface that draws nothing, for headless use of the paginator.
impl<T> Surface<T> for () {
    fn apply(&mut self, _view: &ViewModel<'_, T>) {}
}
