use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One entry of the `GET {base}/targets` listing.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlatformRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

pub(crate) async fn fetch_version_list(
    client: &reqwest::Client,
    api_url: &str,
    target_type: &str,
) -> anyhow::Result<Vec<String>> {
    let url = format!("{}/targets/{}/versions", api_url, target_type);
    log::debug!("fetching version list from {}", url);
    let resp = client.get(&url).send().await?;
    resp.error_for_status_ref()?;
    let mut versions: Vec<String> = resp.json().await?;
    versions.sort();
    versions.reverse();
    Ok(versions)
}

pub(crate) async fn fetch_platform_map(
    client: &reqwest::Client,
    api_url: &str,
) -> anyhow::Result<IndexMap<String, String>> {
    let url = format!("{}/targets", api_url);
    log::debug!("fetching platform list from {}", url);
    let resp = client.get(&url).send().await?;
    resp.error_for_status_ref()?;
    let records: Vec<PlatformRecord> = resp.json().await?;
    Ok(build_platform_map(records))
}

/// Records missing `id` or `description` carry no usable entry and are
/// skipped. Duplicate ids keep the last description seen.
fn build_platform_map(records: Vec<PlatformRecord>) -> IndexMap<String, String> {
    let mut map = IndexMap::with_capacity(records.len());
    for record in records {
        match (record.id, record.description) {
            (Some(id), Some(description)) => {
                map.insert(id, description);
            }
            (id, _) => {
                log::warn!("skipping incomplete target record (id: {:?})", id);
            }
        }
    }
    map
}
