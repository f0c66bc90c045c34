safe_index::new! {
    /// Person index, a non-owning handle into a [`Ctx`](crate::ctx::Ctx).
    Person,
    /// Maps a [`Person`] to something.
    map: PersonMap,
}
