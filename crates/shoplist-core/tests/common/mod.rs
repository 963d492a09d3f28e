use shoplist_core::{ChangeNotifier, ShopProvider};
use tempfile::TempDir;

/// Helper function to create a provider over a throwaway store
pub fn create_test_provider() -> (TempDir, ShopProvider) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let provider = ShopProvider::new(temp_dir.path().join("test.db"), ChangeNotifier::new());
    (temp_dir, provider)
}
