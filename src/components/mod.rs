// Export components
pub mod staffomatic;

// Re-export the API client
pub use staffomatic::StaffoClient;
