/// Receives progress events while runs are loaded and compared.
///
/// The unit type `()` ignores every event and closures taking `&E` observe
/// directly. Functions that report events borrow the observer mutably, so it
/// can be inspected after the call.
pub trait Observer<E> {
    fn observe(&mut self, event: &E);
}

impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}

impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}
