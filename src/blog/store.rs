//! The in-memory post collection.
//!
//! Posts are kept in insertion order in a `Vec` and found by linear scan.
//! Ids come from a counter that only moves forward, so an id is never reused,
//! not even after the post holding it is deleted.

use chrono::Local;
use thiserror::Error;
use tracing::debug;

use super::model::{BlogInput, BlogRecord};
use super::seed;
use super::validation;

/// Format of the `createdAt` stamp on posts created through the API.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Blog not found")]
    NotFound(u64),

    #[error("invalid blog: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Owns every post and the next-id counter. All mutation goes through here.
#[derive(Debug, Clone)]
pub struct BlogStore {
    blogs: Vec<BlogRecord>,
    next_id: u64,
}

impl BlogStore {
    /// An empty store whose first post gets id 1.
    pub fn new() -> Self {
        Self { blogs: Vec::new(), next_id: 1 }
    }

    /// A store holding the four sample posts (ids 1–4); the next id is 5.
    pub fn seeded() -> Self {
        Self { blogs: seed::sample_posts(), next_id: seed::NEXT_ID_AFTER_SEED }
    }

    pub fn len(&self) -> usize {
        self.blogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blogs.is_empty()
    }

    /// The id the next successful [`create`](Self::create) will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Every post, oldest first.
    pub fn list_all(&self) -> &[BlogRecord] {
        &self.blogs
    }

    pub fn get(&self, id: u64) -> Option<&BlogRecord> {
        self.blogs.iter().find(|b| b.id == id)
    }

    /// Validates and appends a new post.
    ///
    /// On failure nothing changes, including the id counter.
    pub fn create(&mut self, input: BlogInput) -> Result<BlogRecord, StoreError> {
        let mut blog = input.into_candidate();
        validation::validate(&blog).map_err(StoreError::Invalid)?;

        blog.id = self.next_id;
        blog.created_at = Local::now().format(CREATED_AT_FORMAT).to_string();
        self.next_id += 1;
        self.blogs.push(blog.clone());

        debug!(id = blog.id, total = self.blogs.len(), "blog created");
        Ok(blog)
    }

    /// Applies the fields present in `patch` to post `id`.
    ///
    /// The patch is applied to a copy which is validated first; the stored
    /// post is only replaced when the result is valid, so a rejected update
    /// leaves it exactly as it was.
    pub fn update(&mut self, id: u64, patch: BlogInput) -> Result<BlogRecord, StoreError> {
        let slot = self.slot_mut(id)?;

        let mut staged = slot.clone();
        patch.apply_to(&mut staged);
        validation::validate(&staged).map_err(StoreError::Invalid)?;

        *slot = staged;
        debug!(id, "blog updated");
        Ok(slot.clone())
    }

    /// Removes post `id` for good and returns it.
    pub fn delete(&mut self, id: u64) -> Result<BlogRecord, StoreError> {
        let index = self.blogs.iter()
            .position(|b| b.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = self.blogs.remove(index);
        debug!(id, total = self.blogs.len(), "blog deleted");
        Ok(removed)
    }

    /// Flips the favorite flag of post `id` and returns the updated post.
    pub fn toggle_favorite(&mut self, id: u64) -> Result<BlogRecord, StoreError> {
        let slot = self.slot_mut(id)?;
        slot.is_favorite = !slot.is_favorite;
        debug!(id, is_favorite = slot.is_favorite, "favorite toggled");
        Ok(slot.clone())
    }

    /// Favorited posts, in store order.
    pub fn favorites(&self) -> Vec<BlogRecord> {
        self.blogs.iter().filter(|b| b.is_favorite).cloned().collect()
    }

    /// Posts whose heading, description or author contains `query`,
    /// ignoring case and surrounding whitespace. An empty query matches all.
    pub fn search(&self, query: &str) -> Vec<BlogRecord> {
        let query = query.trim().to_lowercase();
        self.blogs.iter()
            .filter(|b| {
                b.heading.to_lowercase().contains(&query)
                    || b.description.to_lowercase().contains(&query)
                    || b.author.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    /// Posts whose author equals `author`, ignoring case.
    pub fn by_author(&self, author: &str) -> Vec<BlogRecord> {
        let author = author.to_lowercase();
        self.blogs.iter()
            .filter(|b| b.author.to_lowercase() == author)
            .cloned()
            .collect()
    }

    fn slot_mut(&mut self, id: u64) -> Result<&mut BlogRecord, StoreError> {
        self.blogs.iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

impl Default for BlogStore {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn input(heading: &str, description: &str) -> BlogInput {
        BlogInput {
            heading: Some(Some(heading.to_owned())),
            description: Some(Some(description.to_owned())),
            ..Default::default()
        }
    }

    fn ids(blogs: &[BlogRecord]) -> Vec<u64> {
        blogs.iter().map(|b| b.id).collect()
    }

    #[test]
    fn seeded_store_has_four_posts_and_next_id_five() {
        let store = BlogStore::seeded();
        assert_eq!(ids(store.list_all()), vec![1, 2, 3, 4]);
        assert_eq!(store.next_id(), 5);
    }

    #[test]
    fn empty_store_starts_at_one() {
        let mut store = BlogStore::new();
        assert!(store.is_empty());
        let created = store.create(input("First", "The very first post.")).unwrap();
        assert_eq!(created.id, 1);
    }

    #[test]
    fn invalid_create_changes_nothing() {
        let mut store = BlogStore::seeded();
        let err = store.create(input("Test", "Short")).unwrap_err();
        assert_eq!(
            err,
            StoreError::Invalid(vec!["Description must be at least 10 characters".to_owned()])
        );
        assert_eq!(store.len(), 4);
        assert_eq!(store.next_id(), 5);
    }

    #[test]
    fn valid_create_appends_with_fresh_id() {
        let mut store = BlogStore::seeded();
        let created = store
            .create(input("Valid Title", "This is a sufficiently long description."))
            .unwrap();
        assert_eq!(created.id, 5);
        assert!(!created.created_at.is_empty());
        assert_eq!(store.next_id(), 6);
        assert_eq!(store.list_all().last(), Some(&created));
        assert_eq!(store.get(5), Some(&created));
    }

    #[test]
    fn created_at_uses_timestamp_format() {
        let mut store = BlogStore::new();
        let created = store.create(input("Stamped", "Has a creation time.")).unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(&created.created_at, CREATED_AT_FORMAT).is_ok());
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let mut store = BlogStore::seeded();
        let first = store.create(input("One", "Description one here")).unwrap();
        store.delete(first.id).unwrap();
        let second = store.create(input("Two", "Description two here")).unwrap();
        assert_eq!(second.id, first.id + 1);
    }

    #[test]
    fn update_patches_present_fields_only() {
        let mut store = BlogStore::seeded();
        let before = store.get(3).cloned().unwrap();
        let updated = store
            .update(3, BlogInput { heading: Some(Some("Renamed".into())), ..Default::default() })
            .unwrap();
        assert_eq!(updated.heading, "Renamed");
        assert_eq!(updated.description, before.description);
        assert_eq!(updated.created_at, before.created_at);
        assert_eq!(store.get(3), Some(&updated));
    }

    #[test]
    fn rejected_update_leaves_the_post_untouched() {
        let mut store = BlogStore::seeded();
        let before = store.get(1).cloned().unwrap();
        let err = store
            .update(1, BlogInput {
                heading: Some(Some("New heading".into())),
                description: Some(Some("tiny".into())),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
        assert_eq!(store.get(1), Some(&before));
    }

    #[test]
    fn null_heading_fails_validation_on_update() {
        let mut store = BlogStore::seeded();
        let before = store.get(2).cloned().unwrap();
        let err = store
            .update(2, BlogInput { heading: Some(None), ..Default::default() })
            .unwrap_err();
        assert_eq!(err, StoreError::Invalid(vec!["Heading is required".to_owned()]));
        assert_eq!(store.get(2), Some(&before));
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let mut store = BlogStore::seeded();
        assert_eq!(store.update(42, BlogInput::default()), Err(StoreError::NotFound(42)));
    }

    #[test]
    fn delete_returns_the_post() {
        let mut store = BlogStore::seeded();
        let removed = store.delete(2).unwrap();
        assert_eq!(removed.heading, "A Hack You Can Try To Become a Creative Hero");
        assert_eq!(ids(store.list_all()), vec![1, 3, 4]);
        assert!(store.get(2).is_none());
    }

    #[test]
    fn delete_missing_id_keeps_size() {
        let mut store = BlogStore::seeded();
        assert_eq!(store.delete(999), Err(StoreError::NotFound(999)));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn toggle_twice_restores_flag() {
        let mut store = BlogStore::seeded();
        let original = store.get(1).unwrap().is_favorite;
        assert_eq!(store.toggle_favorite(1).unwrap().is_favorite, !original);
        assert_eq!(store.toggle_favorite(1).unwrap().is_favorite, original);
        assert_eq!(store.toggle_favorite(77), Err(StoreError::NotFound(77)));
    }

    #[test]
    fn favorites_preserve_order() {
        let mut store = BlogStore::seeded();
        assert_eq!(ids(&store.favorites()), vec![2]);
        store.toggle_favorite(4).unwrap();
        store.toggle_favorite(1).unwrap();
        assert_eq!(ids(&store.favorites()), vec![1, 2, 4]);
    }

    #[test]
    fn search_ignores_created_at() {
        // "Poets" only appears in the createdAt labels of posts 1 and 4.
        let store = BlogStore::seeded();
        assert!(store.search("poets").is_empty());
    }

    #[test]
    fn search_matches_heading_description_and_author() {
        let store = BlogStore::seeded();
        assert_eq!(ids(&store.search("  VOCAL ")), vec![2, 3]);
        assert_eq!(ids(&store.search("fenn")), vec![4]);
        assert_eq!(ids(&store.search("ladybug")), vec![1]);
        assert_eq!(store.search("").len(), 4);
    }

    #[test]
    fn by_author_is_exact_but_case_insensitive() {
        let store = BlogStore::seeded();
        assert_eq!(ids(&store.by_author("andrea corwin")), vec![1]);
        assert!(store.by_author("Andrea").is_empty());
    }

    #[test]
    fn stored_posts_keep_invariants() {
        let mut store = BlogStore::seeded();
        store.create(input("Extra", "Another valid description")).unwrap();
        let _ = store.create(input("", "x"));
        let _ = store.update(2, input("", ""));
        store.toggle_favorite(3).unwrap();

        let unique: HashSet<u64> = store.list_all().iter().map(|b| b.id).collect();
        assert_eq!(unique.len(), store.len());
        for blog in store.list_all() {
            assert!(validation::validate(blog).is_ok(), "post {} invalid", blog.id);
        }
    }
}
