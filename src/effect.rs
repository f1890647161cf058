//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone)]
pub enum Effect {
    /// Run the two-stage lookup (geocode, then forecast) for the query
    Lookup { query: String },
}
