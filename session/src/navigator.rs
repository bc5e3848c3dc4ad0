//! Abstract navigation.
//!
//! The route table belongs to the host UI; the core only asks "where am I"
//! and "go there".

pub trait Navigator: Send + Sync {
    /// Navigate to a route.
    fn navigate(&self, path: &str);

    /// The route currently displayed.
    fn current_path(&self) -> String;
}
