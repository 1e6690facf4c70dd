//! Event models returned by the API

use serde::{Deserialize, Deserializer, Serialize};

/// A summary of an Event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSummary {
    /// The Event Id
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// The Event name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// The Event URL
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// Information about an Event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventInfo {
    /// Id, name and URL of the Event
    #[serde(flatten)]
    pub summary: EventSummary,

    /// Whether this Event is unsafe for children or viewing at work
    #[serde(deserialize_with = "null_as_default")]
    pub adult: bool,

    /// The Event's Alternate Names
    #[serde(deserialize_with = "null_as_default")]
    pub alternate_names: Vec<AlternateName>,

    /// The Event's hashtags
    #[serde(deserialize_with = "null_as_default")]
    pub hashtags: Vec<String>,

    /// The Event's images
    #[serde(deserialize_with = "null_as_default")]
    pub image: ImageInfo,

    /// The Event's sources
    #[serde(deserialize_with = "null_as_default")]
    pub sources: Vec<String>,

    /// The Event's description
    #[serde(deserialize_with = "null_as_default")]
    pub description: RichText,

    /// How to observe the Event
    #[serde(deserialize_with = "null_as_default")]
    pub how_to_observe: RichText,

    /// Patterns defining when the Event is observed
    #[serde(deserialize_with = "null_as_default")]
    pub patterns: Vec<Pattern>,

    /// The Event Occurrences (when it occurs)
    #[serde(deserialize_with = "null_as_default")]
    pub occurrences: Vec<Occurrence>,

    /// The Event's founders
    #[serde(deserialize_with = "null_as_default")]
    pub founders: Vec<FounderInfo>,
}

impl EventInfo {
    /// The Event Id.
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    /// The Event name.
    pub fn name(&self) -> &str {
        &self.summary.name
    }

    /// The Event URL.
    pub fn url(&self) -> &str {
        &self.summary.url
    }
}

/// Information about an Event's Alternate Name.
///
/// A year of `0` means none or unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternateName {
    /// An Event's Alternate Name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// The first year this Alternate Name was in effect
    #[serde(deserialize_with = "null_as_default")]
    pub first_year: i32,

    /// The last year this Alternate Name was in effect
    #[serde(deserialize_with = "null_as_default")]
    pub last_year: i32,
}

/// Information about an Event image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageInfo {
    /// A small image
    #[serde(deserialize_with = "null_as_default")]
    pub small: String,

    /// A medium image
    #[serde(deserialize_with = "null_as_default")]
    pub medium: String,

    /// A large image
    #[serde(deserialize_with = "null_as_default")]
    pub large: String,
}

/// Formatted text, in three renditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RichText {
    /// Formatted as plain text
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,

    /// Formatted as HTML
    #[serde(deserialize_with = "null_as_default")]
    pub html: String,

    /// Formatted as Markdown
    #[serde(deserialize_with = "null_as_default")]
    pub markdown: String,
}

/// Information about an Event Founder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FounderInfo {
    /// The Founder's name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// A link to the Founder
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,

    /// The date the Event was founded
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
}

/// Information about an Event's Pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pattern {
    /// The first year this event is observed (0 implies none or unknown)
    #[serde(deserialize_with = "null_as_default")]
    pub first_year: i32,

    /// The last year this event is observed (0 implies none or unknown)
    #[serde(deserialize_with = "null_as_default")]
    pub last_year: i32,

    /// A description of how this event is observed (plain text)
    #[serde(deserialize_with = "null_as_default")]
    pub observed: String,

    /// A description of how this event is observed (HTML)
    #[serde(deserialize_with = "null_as_default")]
    pub observed_html: String,

    /// A description of how this event is observed (Markdown)
    #[serde(deserialize_with = "null_as_default")]
    pub observed_markdown: String,

    /// For how many days this event is celebrated
    #[serde(deserialize_with = "null_as_default")]
    pub length: i32,
}

/// Information about an Event's Occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Occurrence {
    /// The date or timestamp the Event occurs
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,

    /// The length (in days) of the Event occurrence
    #[serde(deserialize_with = "null_as_default")]
    pub length: i32,
}

/// Read JSON `null` as the field's empty value, e.g. `"last_year": null` as `0`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
