use serde::{Deserialize, Deserializer, Serialize};

/// Image shown on a post card when the author did not supply one.
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1499750310107-5fef28a66643?auto=format&fit=crop&w=400&q=80";

/// Avatar used when a post has no author image, or an empty one.
pub const DEFAULT_AUTHOR_IMAGE: &str = "https://randomuser.me/api/portraits/men/1.jpg";

/// Author name used when none is given.
pub const DEFAULT_AUTHOR: &str = "Current User";

/// A single blog post as stored and as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogRecord {
    pub id: u64,
    pub image: String,
    pub heading: String,
    pub sub_heading: String,
    pub description: String,
    pub author: String,
    pub author_image: String,
    pub is_favorite: bool,
    pub created_at: String,
}

/// The partial form of a [`BlogRecord`] accepted by create and update.
///
/// Each field is `None` when the member is absent and `Some(None)` when it
/// is sent as `null`. On update a `null` clears the field, so a `null`
/// heading or description then fails validation. On create a `null` is
/// treated like an absent member. `id` and `createdAt` are not accepted
/// from clients and are ignored if sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogInput {
    #[serde(default, deserialize_with = "present")]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub heading: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub sub_heading: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub author: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub author_image: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub is_favorite: Option<Option<bool>>,
}

/// Runs only for members that appear in the object, so `null` lands as
/// `Some(None)` while a missing member keeps the `default` of `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl BlogInput {
    /// Builds a candidate record with defaults filled in. The id and
    /// timestamp are left for the store to assign.
    pub(crate) fn into_candidate(self) -> BlogRecord {
        BlogRecord {
            id: 0,
            image: self.image.flatten().unwrap_or_else(|| DEFAULT_IMAGE.to_owned()),
            heading: self.heading.flatten().unwrap_or_default(),
            sub_heading: self.sub_heading.flatten().unwrap_or_default(),
            description: self.description.flatten().unwrap_or_default(),
            author: self.author.flatten().unwrap_or_else(|| DEFAULT_AUTHOR.to_owned()),
            author_image: self.author_image
                .flatten()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_AUTHOR_IMAGE.to_owned()),
            is_favorite: self.is_favorite.flatten().unwrap_or(false),
            created_at: String::new(),
        }
    }

    /// Overwrites the fields of `record` that are present in this input.
    /// A `null` member resets the field to its empty value.
    pub(crate) fn apply_to(self, record: &mut BlogRecord) {
        fn overwrite<T: Default>(slot: &mut T, member: Option<Option<T>>) {
            if let Some(value) = member {
                *slot = value.unwrap_or_default();
            }
        }
        overwrite(&mut record.image, self.image);
        overwrite(&mut record.heading, self.heading);
        overwrite(&mut record.sub_heading, self.sub_heading);
        overwrite(&mut record.description, self.description);
        overwrite(&mut record.author, self.author);
        overwrite(&mut record.author_image, self.author_image);
        overwrite(&mut record.is_favorite, self.is_favorite);
    }

    /// True when both required fields are present and non-empty. Blank
    /// (whitespace-only) values pass here and are caught by validation.
    pub fn has_required_fields(&self) -> bool {
        let present = |field: &Option<Option<String>>| {
            field.as_ref().and_then(Option::as_deref).is_some_and(|s| !s.is_empty())
        };
        present(&self.heading) && present(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_camel_case() {
        let record = BlogInput {
            heading: Some(Some("Hello".into())),
            description: Some(Some("A long enough body".into())),
            ..Default::default()
        }
        .into_candidate();
        let value = serde_json::to_value(&record).unwrap();
        for key in ["subHeading", "authorImage", "isFavorite", "createdAt"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn candidate_fills_defaults() {
        let record = BlogInput::default().into_candidate();
        assert_eq!(record.image, DEFAULT_IMAGE);
        assert_eq!(record.author, DEFAULT_AUTHOR);
        assert_eq!(record.author_image, DEFAULT_AUTHOR_IMAGE);
        assert_eq!(record.sub_heading, "");
        assert!(!record.is_favorite);
    }

    #[test]
    fn empty_author_image_falls_back_to_default() {
        let input = BlogInput { author_image: Some(Some(String::new())), ..Default::default() };
        assert_eq!(input.into_candidate().author_image, DEFAULT_AUTHOR_IMAGE);
    }

    #[test]
    fn input_ignores_id_and_created_at() {
        let input: BlogInput =
            serde_json::from_str(r#"{"id": 99, "createdAt": "now", "heading": "Hi"}"#).unwrap();
        assert_eq!(input, BlogInput { heading: Some(Some("Hi".into())), ..Default::default() });
    }

    #[test]
    fn null_member_is_distinct_from_absent() {
        let input: BlogInput =
            serde_json::from_str(r#"{"subHeading": null, "isFavorite": null}"#).unwrap();
        assert_eq!(input.sub_heading, Some(None));
        assert_eq!(input.is_favorite, Some(None));
        assert_eq!(input.heading, None);
    }

    #[test]
    fn null_member_clears_the_field_on_apply() {
        let mut record = BlogInput {
            heading: Some(Some("Kept".into())),
            sub_heading: Some(Some("Going away".into())),
            is_favorite: Some(Some(true)),
            ..Default::default()
        }
        .into_candidate();
        let patch: BlogInput =
            serde_json::from_str(r#"{"subHeading": null, "isFavorite": null}"#).unwrap();
        patch.apply_to(&mut record);
        assert_eq!(record.heading, "Kept");
        assert_eq!(record.sub_heading, "");
        assert!(!record.is_favorite);
    }

    #[test]
    fn null_on_create_falls_back_to_defaults() {
        let input: BlogInput = serde_json::from_str(r#"{"image": null, "author": null}"#).unwrap();
        let record = input.into_candidate();
        assert_eq!(record.image, DEFAULT_IMAGE);
        assert_eq!(record.author, DEFAULT_AUTHOR);
    }

    #[test]
    fn apply_to_only_touches_present_fields() {
        let mut record = BlogInput {
            heading: Some(Some("Original".into())),
            description: Some(Some("Original description".into())),
            author: Some(Some("Someone".into())),
            ..Default::default()
        }
        .into_candidate();
        BlogInput { heading: Some(Some("Changed".into())), is_favorite: Some(Some(true)), ..Default::default() }
            .apply_to(&mut record);
        assert_eq!(record.heading, "Changed");
        assert_eq!(record.description, "Original description");
        assert_eq!(record.author, "Someone");
        assert!(record.is_favorite);
    }

    #[test]
    fn required_fields_must_be_non_empty() {
        let mut input = BlogInput {
            heading: Some(Some("Title".into())),
            description: Some(Some(String::new())),
            ..Default::default()
        };
        assert!(!input.has_required_fields());
        input.description = Some(Some("   ".into()));
        assert!(input.has_required_fields());
        input.heading = Some(None);
        assert!(!input.has_required_fields());
        input.heading = None;
        assert!(!input.has_required_fields());
    }
}
