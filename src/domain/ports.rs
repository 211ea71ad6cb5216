/// Sink for the human-readable lines produced by booking and report operations.
pub trait Reporter {
    fn line(&mut self, text: &str);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn line(&mut self, text: &str) {
        (**self).line(text);
    }
}
