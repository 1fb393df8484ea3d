/// Logging port used by use cases and the cart store.
///
/// Infrastructure provides the implementation; tests substitute a mock.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
