use serde::{Deserialize, Serialize};

use crate::icons::{Icon, SocialKind};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(deserialize_with = "lenient::optional_string")]
    pub github: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "lenient::optional_string")]
    pub twitter: Option<String>,
}

/// A social profile that actually has a URL configured
#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

impl SocialLink {
    pub fn icon(&self) -> Icon {
        self.kind.icon()
    }
}

impl SocialLinks {
    /// Links in display order (GitHub, LinkedIn, Twitter), skipping blank ones
    pub fn present(&self) -> Vec<SocialLink> {
        [
            (SocialKind::GitHub, &self.github),
            (SocialKind::LinkedIn, &self.linkedin),
            (SocialKind::Twitter, &self.twitter),
        ]
        .into_iter()
        .filter_map(|(kind, url)| {
            url.as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(|url| SocialLink {
                    kind,
                    url: url.to_string(),
                })
        })
        .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub icon: String,
    #[serde(deserialize_with = "lenient::number")]
    pub order: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Achievement {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub icon: String,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(deserialize_with = "lenient::number")]
    pub order: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub image_url: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub repo_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub live_url: String,
    #[serde(deserialize_with = "lenient::number")]
    pub order: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "lenient::string")]
    pub role: String,
    #[serde(deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(deserialize_with = "lenient::string")]
    pub duration: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub responsibilities: Vec<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub order: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub issuer: String,
    #[serde(deserialize_with = "lenient::string")]
    pub year: String,
    #[serde(deserialize_with = "lenient::string")]
    pub icon: String,
    #[serde(deserialize_with = "lenient::string")]
    pub image_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(deserialize_with = "lenient::number")]
    pub order: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub image_url: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
    #[serde(deserialize_with = "lenient::number")]
    pub order: i64,
}

/// Top-level fields stored in the `main_info/details` document
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MainInfo {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub bio: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub avatar_url: String,
    #[serde(deserialize_with = "lenient::social")]
    pub social: SocialLinks,
}

/// Everything a portfolio page needs, assembled from one main document
/// plus one ordered collection per list
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioData {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub avatar_url: String,
    pub social: SocialLinks,
    pub skills: Vec<Skill>,
    pub achievements: Vec<Achievement>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub certifications: Vec<Certification>,
    pub blog_posts: Vec<BlogPost>,
}

impl PortfolioData {
    pub fn from_main_info(info: MainInfo) -> Self {
        Self {
            name: info.name,
            title: info.title,
            bio: info.bio,
            email: info.email,
            avatar_url: info.avatar_url,
            social: info.social,
            ..Default::default()
        }
    }

    pub fn mailto(&self) -> Option<String> {
        let email = self.email.trim();
        if email.is_empty() {
            None
        } else {
            Some(format!("mailto:{}", email))
        }
    }
}

/// Field decoders that never reject a value. Null or an unusable type
/// becomes the field's default; numbers and text convert into each other.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::SocialLinks;

    fn text(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(text(Value::deserialize(deserializer)?).unwrap_or_default())
    }

    pub fn optional_string<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(text(Value::deserialize(deserializer)?))
    }

    /// An array keeps its scalar entries; a lone scalar becomes a single entry
    pub fn string_list<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(values) => values.into_iter().filter_map(text).collect(),
            other => text(other).into_iter().collect(),
        })
    }

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or_default(),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                    .unwrap_or_default()
            }
            _ => 0,
        })
    }

    pub fn social<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SocialLinks, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            value @ Value::Object(_) => SocialLinks::deserialize(value).unwrap_or_default(),
            _ => SocialLinks::default(),
        })
    }
}
