use serde_json::{Map, Value};

/// One Slack-triggered message record.
///
/// `id` is assigned by the storage layer on first persist and stays `None`
/// until then. The repository's save path is the only writer of `id`.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Post {
    pub id: Option<i32>,
    pub user_id: String,
    pub user_name: String,
    pub text: String,
}

/// The field names shared by the database row, the JSON wire shape and the
/// partial-update payload.
pub mod keys {
    pub const ID: &str = "id";
    pub const USER_ID: &str = "user_id";
    pub const USER_NAME: &str = "user_name";
    pub const TEXT: &str = "text";
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PostError {
    #[error("missing required field `{0}`")]
    MissingField(String),

    #[error("field `{0}` is not a string")]
    Decode(String),

    #[error("update value for `{0}` is not a string")]
    TypeMismatch(String),
}

type Setter = fn(&mut Post, String);

/// Fields eligible for modification through a partial update. Keys not in
/// this table are ignored by `apply_update`.
const UPDATEABLE_KEYS: &[(&str, Setter)] = &[
    (keys::TEXT, |post, text| post.text = text),
    (keys::USER_NAME, |post, user_name| post.user_name = user_name),
    (keys::USER_ID, |post, user_id| post.user_id = user_id),
];

impl Post {
    /// Creates a new, unpersisted Post.
    pub fn new(user_id: String, user_name: String, text: String) -> Self {
        Self {
            id: None,
            user_id,
            user_name,
            text,
        }
    }

    /// Reads a Post from a JSON document, e.g. a `POST /posts` body.
    pub fn from_json(doc: &Value) -> Result<Self, PostError> {
        Ok(Self::new(
            get_str(doc, keys::USER_ID)?,
            get_str(doc, keys::USER_NAME)?,
            get_str(doc, keys::TEXT)?,
        ))
    }

    /// Serializes the Post for the wire. `id` is omitted while unpersisted.
    pub fn to_json(&self) -> Value {
        let mut doc = Map::new();
        if let Some(id) = self.id {
            doc.insert(keys::ID.to_string(), id.into());
        }
        doc.insert(keys::USER_ID.to_string(), self.user_id.clone().into());
        doc.insert(keys::USER_NAME.to_string(), self.user_name.clone().into());
        doc.insert(keys::TEXT.to_string(), self.text.clone().into());
        Value::Object(doc)
    }

    /// Applies a partial update. Recognized keys set the matching field,
    /// unrecognized keys are ignored. Every present recognized key is
    /// type-checked before any setter runs, so a mismatch leaves the Post
    /// untouched.
    pub fn apply_update(
        &mut self,
        doc: &Map<String, Value>,
    ) -> Result<(), PostError> {
        let mut pending: Vec<(Setter, String)> = vec![];
        for (key, setter) in UPDATEABLE_KEYS {
            let Some(value) = doc.get(*key) else {
                continue;
            };
            let value = value
                .as_str()
                .ok_or_else(|| PostError::TypeMismatch(key.to_string()))?;
            pending.push((*setter, value.to_string()));
        }

        for (setter, value) in pending {
            setter(self, value);
        }

        Ok(())
    }
}

fn get_str(doc: &Value, key: &str) -> Result<String, PostError> {
    let value = doc
        .get(key)
        .ok_or_else(|| PostError::MissingField(key.to_string()))?;

    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| PostError::Decode(key.to_string()))
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn sample() -> Post {
        Post::new(
            "U2147483697".to_string(),
            "Steve".to_string(),
            "googlebot: What is the air-speed velocity of an unladen swallow?"
                .to_string(),
        )
    }

    #[test]
    fn json_round_trip_preserves_all_fields() {
        // Arrange
        let post = sample();

        // Act
        let decoded = Post::from_json(&post.to_json());

        // Assert
        assert_eq!(decoded, Ok(post));
    }

    #[test]
    fn to_json_omits_id_until_persisted() {
        let post = sample();
        assert_eq!(post.to_json().get("id"), None);

        let persisted = Post {
            id: Some(7),
            ..sample()
        };
        assert_eq!(persisted.to_json().get("id"), Some(&json!(7)));
    }

    #[test]
    fn from_json_rejects_missing_fields() {
        for key in [keys::USER_ID, keys::USER_NAME, keys::TEXT] {
            let mut doc = sample().to_json();
            doc.as_object_mut().unwrap().remove(key);

            let result = Post::from_json(&doc);

            assert_eq!(result, Err(PostError::MissingField(key.to_string())));
        }
    }

    #[test]
    fn from_json_rejects_non_string_fields() {
        let doc = json!({
            "user_id": 123,
            "user_name": "Steve",
            "text": "hello",
        });

        let result = Post::from_json(&doc);

        assert_eq!(result, Err(PostError::Decode("user_id".to_string())));
    }

    #[test]
    fn update_applies_recognized_keys_only() {
        let mut post = sample();
        let doc = json!({ "text": "hi", "unknown_key": 5 });

        let result = post.apply_update(doc.as_object().unwrap());

        assert_eq!(result, Ok(()));
        assert_eq!(post.text, "hi");
        assert_eq!(post.user_id, sample().user_id);
        assert_eq!(post.user_name, sample().user_name);
    }

    #[test]
    fn update_rejects_mismatched_value_without_mutating() {
        let mut post = sample();
        let doc = json!({ "text": "hi", "user_id": 123 });

        let result = post.apply_update(doc.as_object().unwrap());

        assert_eq!(result, Err(PostError::TypeMismatch("user_id".to_string())));
        // text type-checked fine, but nothing may change on failure
        assert_eq!(post, sample());
    }

    #[test]
    fn update_with_no_recognized_keys_is_a_no_op() {
        let mut post = sample();
        let doc = json!({
            "token": "cm6zhoAdx6REx0jqA0agfqQQ",
            "team_id": "T0001",
        });

        let result = post.apply_update(doc.as_object().unwrap());

        assert_eq!(result, Ok(()));
        assert_eq!(post, sample());
    }
}
