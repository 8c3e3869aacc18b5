/// A digit-level checksum scheme.
///
/// Implementations decide whether a structurally valid digit sequence
/// passes. They see only the parsed digits; length and character checks
/// happen before this is called.
pub trait ChecksumScheme: Send + Sync {
    fn check(&self, digits: &[u8]) -> bool;
}
