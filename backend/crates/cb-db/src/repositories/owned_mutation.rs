/// Result of an update or delete that is gated on ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnedMutation<T> {
    Applied(T),
    /// No row with that id
    Missing,
    /// The row exists but belongs to someone else; nothing was written
    NotOwner,
}
