//! Change notification from selectors to their owner

/// Receives the post-transition selection after every change
pub trait SelectionSink<T: ?Sized> {
    fn notify(&mut self, value: &T);
}

impl<T: ?Sized, F> SelectionSink<T> for F
where
    F: FnMut(&T),
{
    fn notify(&mut self, value: &T) {
        (self)(value)
    }
}
