//! One-shot portfolio loading.
//!
//! A [`PortfolioSource`] hands out plain JSON for the main document and for
//! each tracked collection; [`load_portfolio`] turns that into a
//! [`PortfolioData`]. [`FetchState`] is what views hold while that happens.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::FolioError;
use crate::firestore::FirestoreClient;
use crate::firestore::api::{MAIN_INFO_COLLECTION, MAIN_INFO_DOCUMENT, ORDER_FIELD};
use crate::models::{MainInfo, PortfolioData};

/// Collections pulled in one request each, already ordered by `order`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionName {
    Achievements,
    Projects,
    BlogPosts,
    Certifications,
    Experience,
    Skills,
}

impl CollectionName {
    /// Fetch order
    pub const ALL: [CollectionName; 6] = [
        CollectionName::Achievements,
        CollectionName::Projects,
        CollectionName::BlogPosts,
        CollectionName::Certifications,
        CollectionName::Experience,
        CollectionName::Skills,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CollectionName::Achievements => "achievements",
            CollectionName::Projects => "projects",
            CollectionName::BlogPosts => "blogPosts",
            CollectionName::Certifications => "certifications",
            CollectionName::Experience => "experience",
            CollectionName::Skills => "skills",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|collection| collection.as_str().eq_ignore_ascii_case(name))
    }
}

/// Anything that can supply the raw portfolio documents
pub trait PortfolioSource {
    /// The main info document, `None` if it does not exist
    fn main_info(&self) -> impl Future<Output = Result<Option<Value>, FolioError>> + Send;

    /// All documents of a collection in display order
    fn collection(
        &self,
        name: CollectionName,
    ) -> impl Future<Output = Result<Vec<Value>, FolioError>> + Send;
}

impl PortfolioSource for FirestoreClient {
    async fn main_info(&self) -> Result<Option<Value>, FolioError> {
        match self
            .get_document(MAIN_INFO_COLLECTION, MAIN_INFO_DOCUMENT)
            .await?
        {
            Some(document) => document.to_json().map(Some),
            None => Ok(None),
        }
    }

    async fn collection(&self, name: CollectionName) -> Result<Vec<Value>, FolioError> {
        let documents = self.run_ordered_query(name.as_str(), ORDER_FIELD).await?;

        let mut values = Vec::with_capacity(documents.len());
        for document in documents {
            match document.to_json() {
                Ok(value) => values.push(value),
                Err(e) => warn!(
                    "Skipping undecodable document '{}' in {}: {}",
                    document.id(),
                    name.as_str(),
                    e
                ),
            }
        }
        Ok(values)
    }
}

/// Fetch the main document and every collection, in sequence.
/// Any failed request fails the whole load.
pub async fn load_portfolio<S: PortfolioSource>(source: &S) -> Result<PortfolioData, FolioError> {
    info!("Loading portfolio data");

    let main_info = match source.main_info().await? {
        Some(value) => serde_json::from_value::<MainInfo>(value).unwrap_or_else(|e| {
            warn!("Main info document is not a map, using defaults: {}", e);
            MainInfo::default()
        }),
        None => MainInfo::default(),
    };
    let mut data = PortfolioData::from_main_info(main_info);

    for name in CollectionName::ALL {
        let values = source.collection(name).await?;
        match name {
            CollectionName::Achievements => data.achievements = decode_records(name, values),
            CollectionName::Projects => data.projects = decode_records(name, values),
            CollectionName::BlogPosts => data.blog_posts = decode_records(name, values),
            CollectionName::Certifications => {
                data.certifications = decode_records(name, values)
            }
            CollectionName::Experience => data.experience = decode_records(name, values),
            CollectionName::Skills => data.skills = decode_records(name, values),
        }
    }

    info!(
        "Portfolio loaded: {} achievements, {} projects, {} experience, {} certifications, {} skills, {} blog posts",
        data.achievements.len(),
        data.projects.len(),
        data.experience.len(),
        data.certifications.len(),
        data.skills.len(),
        data.blog_posts.len()
    );
    Ok(data)
}

fn decode_records<T: DeserializeOwned>(name: CollectionName, values: Vec<Value>) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(position, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(
                    "Skipping {} entry #{}: {}",
                    name.as_str(),
                    position,
                    e
                );
                None
            }
        })
        .collect()
}

/// Build a Firestore client from `config` and load everything once
pub async fn fetch_portfolio(
    config: crate::config::FolioConfig,
) -> Result<PortfolioData, FolioError> {
    let client = FirestoreClient::new(config)?;
    load_portfolio(&client).await
}

/// Loading / data / error triple exposed to views
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => FetchState::Loaded(data),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// `None` while loading and after a failure
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            FetchState::Loading | FetchState::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            FetchState::Loading | FetchState::Loaded(_) => None,
        }
    }
}
