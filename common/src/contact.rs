/// A synthesized contact record.
///
/// Immutable once created; a batch lives in memory only and is replaced by
/// the next generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub full_name: String,
    pub phone: String,
}
