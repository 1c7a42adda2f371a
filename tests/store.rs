//! Tests for the saved-recipe store and its key-value backends.
mod common;
use common::*;
use flavourfind::prelude::*;
use std::sync::Arc;

fn memory_store() -> SavedRecipeStore<MemoryKeyValueStore> {
    SavedRecipeStore::new(MemoryKeyValueStore::new())
}

#[tokio::test]
async fn test_list_is_empty_before_anything_is_saved() {
    let store = memory_store();
    assert!(store.list().await.is_empty());
    assert_eq!(store.try_list().await, Ok(Vec::new()));
}

#[tokio::test]
async fn test_save_then_list_ends_with_saved_record() {
    let store = memory_store();
    let first = Recipe::new("Dal Tadka", "toor dal");
    let full = create_full_recipe();

    store.save(&first).await.unwrap();
    store.save(&full).await.unwrap();

    let listed = store.list().await;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed.last(), Some(&full));
}

#[tokio::test]
async fn test_save_save_remove_first_leaves_second() {
    let store = memory_store();
    let r1 = Recipe::new("Dal Tadka", "toor dal, turmeric, ghee").with_cuisine("Indian");
    let r2 = Recipe::new("Pasta", "pasta, tomato, basil").with_cuisine("Italian");

    store.save(&r1).await.unwrap();
    store.save(&r2).await.unwrap();
    let removed = store.remove_at(0).await.unwrap();

    assert_eq!(removed, r1);
    assert_eq!(store.list().await, vec![r2]);
}

#[tokio::test]
async fn test_duplicates_are_kept_as_separate_entries() {
    let store = memory_store();
    let recipe = Recipe::new("Masala Chai", "milk, tea leaves");
    store.save(&recipe).await.unwrap();
    store.save(&recipe).await.unwrap();

    assert_eq!(store.list().await, vec![recipe.clone(), recipe.clone()]);

    store.remove_at(1).await.unwrap();
    assert_eq!(store.list().await, vec![recipe]);
}

#[tokio::test]
async fn test_remove_out_of_range_leaves_collection_unchanged() {
    let store = memory_store();
    store.save(&Recipe::new("Pasta", "pasta")).await.unwrap();
    let before = store.backend().raw(SAVED_RECIPES_KEY);
    let writes = store.backend().write_count();

    let err = store.remove_at(1).await.unwrap_err();
    assert_eq!(err, StoreError::OutOfRange { position: 1, len: 1 });
    assert_eq!(store.backend().raw(SAVED_RECIPES_KEY), before);
    assert_eq!(store.backend().write_count(), writes);

    let empty = memory_store();
    assert_eq!(
        empty.remove_at(0).await,
        Err(StoreError::OutOfRange { position: 0, len: 0 })
    );
}

#[tokio::test]
async fn test_corrupt_value_reads_as_empty_and_is_replaced_on_save() {
    let backend = MemoryKeyValueStore::new();
    backend.insert_raw(SAVED_RECIPES_KEY, "{not json");
    let store = SavedRecipeStore::new(backend.clone());

    assert!(store.list().await.is_empty());
    assert!(matches!(
        store.try_list().await,
        Err(StoreError::StorageReadFailure { .. })
    ));

    let recipe = Recipe::new("Pasta", "pasta");
    store.save(&recipe).await.unwrap();
    assert_eq!(store.try_list().await, Ok(vec![recipe]));
}

#[tokio::test]
async fn test_read_failure_recovers_as_empty_but_blocks_mutation() {
    let backend = MemoryKeyValueStore::new();
    let store = SavedRecipeStore::new(backend.clone());
    store.save(&Recipe::new("Pasta", "pasta")).await.unwrap();

    backend.fail_reads(true);
    assert!(store.list().await.is_empty());
    assert!(matches!(
        store.save(&Recipe::new("Chai", "milk")).await,
        Err(StoreError::StorageReadFailure { .. })
    ));

    backend.fail_reads(false);
    assert_eq!(owned_names(&store.list().await), vec!["Pasta"]);
}

#[tokio::test]
async fn test_write_failure_is_surfaced() {
    let backend = MemoryKeyValueStore::new();
    let store = SavedRecipeStore::new(backend.clone());
    backend.fail_writes(true);

    let result = store.save(&Recipe::new("Pasta", "pasta")).await;
    assert!(matches!(
        result,
        Err(StoreError::StorageWriteFailure { ref key, .. }) if key == SAVED_RECIPES_KEY
    ));
    assert!(store.list().await.is_empty());
}

#[tokio::test]
async fn test_saved_copy_is_independent_of_the_catalog() {
    let catalog = create_example_catalog();
    let store = memory_store();
    store.save(&catalog[0]).await.unwrap();

    let mut listed = store.list().await;
    listed[0].name.push_str(" (edited)");
    assert_eq!(catalog[0].name, "Dal Tadka");
    assert_eq!(store.list().await[0].name, "Dal Tadka");
}

#[tokio::test]
async fn test_custom_key_is_isolated() {
    let backend = MemoryKeyValueStore::new();
    let favourites = SavedRecipeStore::with_key(backend.clone(), "favourites");
    let default = SavedRecipeStore::new(backend.clone());

    favourites.save(&Recipe::new("Pasta", "pasta")).await.unwrap();
    assert_eq!(favourites.key(), "favourites");
    assert!(default.list().await.is_empty());
    assert!(backend.raw("favourites").is_some());
}

#[tokio::test]
async fn test_clear_removes_the_key() {
    let store = memory_store();
    store.save(&Recipe::new("Pasta", "pasta")).await.unwrap();
    store.clear().await.unwrap();

    assert!(store.backend().raw(SAVED_RECIPES_KEY).is_none());
    assert!(store.list().await.is_empty());
    // Clearing an empty store is fine
    store.clear().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_saves_are_all_kept() {
    let store = Arc::new(memory_store());
    let handles: Vec<_> = (0..32)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .save(&Recipe::new(format!("Recipe {i}"), "salt"))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let mut saved = owned_names(&store.list().await);
    saved.sort();
    let mut expected: Vec<String> = (0..32).map(|i| format!("Recipe {i}")).collect();
    expected.sort();
    assert_eq!(saved, expected);
}

#[test]
fn test_persisted_format_uses_dataset_field_names() {
    tokio_test::block_on(async {
        let store = memory_store();
        store
            .save(&Recipe::new("Pasta", "pasta, basil").with_total_time(20))
            .await
            .unwrap();

        let raw = store.backend().raw(SAVED_RECIPES_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let entry = &value.as_array().unwrap()[0];
        assert_eq!(entry["TranslatedRecipeName"], "Pasta");
        assert_eq!(entry["Cleaned-Ingredients"], "pasta, basil");
        assert_eq!(entry["TotalTimeInMins"], 20);
        assert!(entry.get("Preparation-Time").is_none());
    });
}

#[test]
fn test_file_backend_round_trip() {
    tokio_test::block_on(async {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("nested");
        let backend = FileKeyValueStore::new(&data_dir);

        assert_eq!(backend.get_item("savedRecipes").await, Ok(None));
        backend
            .set_item("savedRecipes", "[]".to_string())
            .await
            .unwrap();
        assert_eq!(
            backend.get_item("savedRecipes").await,
            Ok(Some("[]".to_string()))
        );
        assert!(data_dir.join("savedRecipes.json").exists());
        assert!(!data_dir.join("savedRecipes.json.tmp").exists());

        backend.remove_item("savedRecipes").await.unwrap();
        assert_eq!(backend.get_item("savedRecipes").await, Ok(None));
        backend.remove_item("savedRecipes").await.unwrap();
    });
}

#[test]
fn test_file_backend_sanitizes_keys() {
    let backend = FileKeyValueStore::new("/data");
    assert_eq!(
        backend.path_for("../saved recipes"),
        std::path::Path::new("/data/.._saved_recipes.json")
    );
}

#[tokio::test]
async fn test_saved_store_survives_reopen_on_file_backend() {
    let dir = tempfile::tempdir().unwrap();
    let recipe = create_full_recipe();
    {
        let store = SavedRecipeStore::new(FileKeyValueStore::new(dir.path()));
        store.save(&recipe).await.unwrap();
    }
    let reopened = SavedRecipeStore::new(FileKeyValueStore::new(dir.path()));
    assert_eq!(reopened.list().await, vec![recipe]);
}
