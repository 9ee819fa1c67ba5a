use compact_str::CompactString;
use serde::{Deserialize, Deserializer};

/// A category as the commerce API returns it, before tree construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRecord {
    /// Unique category id
    pub id: u64,
    /// Display name (sorted with Polish collation)
    pub name: CompactString,
    /// URL segment, unique among siblings
    pub slug: CompactString,
    /// Parent category id. 0 means "no parent".
    #[serde(default, deserialize_with = "nullable_id")]
    pub parent: u64,
    /// Number of products in this category
    #[serde(default)]
    pub count: u64,
    /// Category image URL, passed through untouched
    #[serde(default, deserialize_with = "image_url")]
    pub image: Option<String>,
}

impl CategoryRecord {
    pub fn new(id: u64, name: &str, slug: &str, parent: u64) -> Self {
        Self {
            id,
            name: CompactString::new(name),
            slug: CompactString::new(slug),
            parent,
            count: 0,
            image: None,
        }
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    pub fn with_image(mut self, url: &str) -> Self {
        self.image = Some(url.to_string());
        self
    }

    /// Whether the record declares no parent at all.
    pub fn is_top_level(&self) -> bool {
        self.parent == 0
    }
}

fn nullable_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

/// The API ships images as a bare URL, as `{ "src": "...", ... }`,
/// or as `false` when none is set.
#[derive(Deserialize)]
#[serde(untagged)]
enum ImageField {
    Url(String),
    Object { src: Option<String> },
    Flag(bool),
}

fn image_url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let field = Option::<ImageField>::deserialize(deserializer)?;
    let url = match field {
        Some(ImageField::Url(url)) => Some(url),
        Some(ImageField::Object { src }) => src,
        Some(ImageField::Flag(_)) | None => None,
    };
    Ok(url.filter(|u| !u.trim().is_empty()))
}
